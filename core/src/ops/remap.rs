//! Piecewise-linear time remapping.
//!
//! A [`TimeMap`] is a monotone breakpoint curve taking "original" times to
//! "new" times, such as a tempo curve or a tick-to-second conversion. Events
//! outside the curve's domain are dropped, the rest get their time mapped and,
//! for notes and pedals, their duration recomputed from the independently
//! mapped end time, so a note crossing a breakpoint picks up the slope of both
//! segments.

use std::borrow::Cow;

use failure::Fail;
use log::{debug, trace};

use crate::{
  config::RemapConfig,
  ops::{
    ordering::{cmp_by_end, cmp_by_time_and_duration},
    sort::{sort_by_time, sorted_copy},
  },
  score::{Score, TimeEvent, Track},
  time::{Rounding, TimeUnit},
};

#[derive(Debug, Fail, PartialEq)]
pub enum RemapError {
  #[fail(
    display = "Original and new times must have the same length: {} != {}",
    original, new
  )]
  LengthMismatch { original: usize, new: usize },

  #[fail(display = "At least 2 breakpoints are required, got {}", len)]
  TooFewBreakpoints { len: usize },

  #[fail(display = "Time {} is outside the breakpoint domain", time)]
  OutOfDomain { time: f64 },
}

#[derive(Debug, Clone)]
pub struct TimeMap<'a, T: TimeUnit> {
  original: Cow<'a, [T]>,
  new: Cow<'a, [T]>,
  presorted: bool,
  rounding: Rounding,
}

fn check_breakpoints<T>(original: &[T], new: &[T]) -> Result<(), RemapError> {
  if original.len() != new.len() {
    return Err(RemapError::LengthMismatch {
      original: original.len(),
      new: new.len(),
    });
  }
  if original.len() < 2 {
    return Err(RemapError::TooFewBreakpoints {
      len: original.len(),
    });
  }
  Ok(())
}

impl<'a, T: TimeUnit> TimeMap<'a, T> {
  /// Builds a map from breakpoints in any order.
  ///
  /// Both arrays are sorted (independently), and every event sequence given to
  /// this map is sorted by time before remapping.
  pub fn new(original: &[T], new: &[T]) -> Result<TimeMap<'a, T>, RemapError> {
    check_breakpoints(original, new)?;
    Ok(TimeMap {
      original: Cow::Owned(sorted_copy(original)),
      new: Cow::Owned(sorted_copy(new)),
      presorted: false,
      rounding: Rounding::default(),
    })
  }

  /// Builds a map trusting that both arrays, and every event sequence given to
  /// this map, are already in ascending time order.
  pub fn sorted(original: &'a [T], new: &'a [T]) -> Result<TimeMap<'a, T>, RemapError> {
    check_breakpoints(original, new)?;
    Ok(TimeMap {
      original: Cow::Borrowed(original),
      new: Cow::Borrowed(new),
      presorted: true,
      rounding: Rounding::default(),
    })
  }

  pub fn from_config(
    original: &'a [T],
    new: &'a [T],
    config: &RemapConfig,
  ) -> Result<TimeMap<'a, T>, RemapError> {
    let map = if config.presorted {
      TimeMap::sorted(original, new)?
    } else {
      TimeMap::new(original, new)?
    };
    Ok(map.with_rounding(config.rounding))
  }

  pub fn with_rounding(mut self, rounding: Rounding) -> TimeMap<'a, T> {
    self.rounding = rounding;
    self
  }

  pub fn is_presorted(&self) -> bool {
    self.presorted
  }

  pub fn rounding(&self) -> Rounding {
    self.rounding
  }

  pub fn num_breakpoints(&self) -> usize {
    self.original.len()
  }

  /// First and last original time.
  pub fn domain(&self) -> (T, T) {
    (self.original[0], self.original[self.original.len() - 1])
  }

  /// Slope of segment `k`, which spans breakpoints `k - 1` and `k`.
  /// Zero-width segments have slope 0.
  fn factor(&self, k: usize) -> f64 {
    let span = self.original[k].to_f64() - self.original[k - 1].to_f64();
    if span == 0.0 {
      0.0
    } else {
      (self.new[k].to_f64() - self.new[k - 1].to_f64()) / span
    }
  }

  fn interpolate(&self, k: usize, factor: f64, time: T) -> T {
    let offset = time.to_f64() - self.original[k - 1].to_f64();
    T::from_f64(self.new[k - 1].to_f64() + factor * offset, self.rounding)
  }

  /// Maps a single time point.
  pub fn map_time(&self, time: T) -> Result<T, RemapError> {
    let (first, last) = self.domain();
    if !(time >= first && time <= last) {
      return Err(RemapError::OutOfDomain {
        time: time.to_f64(),
      });
    }
    let k = 1 + self.original[1..].partition_point(|&breakpoint| breakpoint < time);
    Ok(self.interpolate(k, self.factor(k), time))
  }

  /// Remaps a sequence of events, returning a new one in ascending time order.
  pub fn remap_events<E>(&self, events: &[E]) -> Vec<E>
  where
    E: TimeEvent<Unit = T>,
  {
    if self.presorted {
      self.remap_sorted(events)
    } else {
      let mut sorted = events.to_vec();
      sort_by_time(&mut sorted, false);
      self.remap_sorted(&sorted)
    }
  }

  fn remap_sorted<E>(&self, events: &[E]) -> Vec<E>
  where
    E: TimeEvent<Unit = T>,
  {
    if events.is_empty() {
      return Vec::new();
    }

    let mut remapped = self.trim(events);
    debug!(
      "Remapping {} of {} events through {} breakpoints",
      remapped.len(),
      events.len(),
      self.num_breakpoints()
    );
    if remapped.is_empty() {
      return remapped;
    }

    if E::HAS_DURATION {
      // The pivot only moves forward, so walk the events by end time and
      // park the mapped end in the duration until the start is mapped too.
      remapped.sort_by(cmp_by_end);
      let mut pivot = Pivot::new(self);
      for event in remapped.iter_mut() {
        let end = event.end();
        pivot.advance_to(end);
        event.set_duration(pivot.map(end));
      }
      remapped.sort_by(cmp_by_time_and_duration);
    }

    let mut pivot = Pivot::new(self);
    for event in remapped.iter_mut() {
      let time = event.time();
      pivot.advance_to(time);
      let mapped = pivot.map(time);
      event.set_time(mapped);
      if E::HAS_DURATION {
        let mapped_end = event.duration();
        event.set_duration(mapped_end - mapped);
      }
    }

    remapped
  }

  /// Copies the events lying inside the domain: starting at or after the
  /// first breakpoint and ending at or before the last one.
  fn trim<E>(&self, events: &[E]) -> Vec<E>
  where
    E: TimeEvent<Unit = T>,
  {
    let (first, last) = self.domain();

    let begin = if events[0].time() >= first {
      0
    } else {
      events.partition_point(|event| event.time() < first)
    };

    // events are in time order, so the ones starting past the domain are a suffix
    let stop = if events[events.len() - 1].time() <= last {
      events.len()
    } else {
      begin + events[begin..].partition_point(|event| event.time() <= last)
    };

    events[begin..stop]
      .iter()
      .filter(|event| event.end() <= last)
      .cloned()
      .collect()
  }

  pub fn remap_track(&self, track: &Track<T>) -> Track<T> {
    let mut remapped = track.empty_copy();
    remapped.notes = self.remap_events(&track.notes);
    remapped.controls = self.remap_events(&track.controls);
    remapped.pitch_bends = self.remap_events(&track.pitch_bends);
    remapped.pedals = self.remap_events(&track.pedals);
    remapped
  }

  pub fn remap_score(&self, score: &Score<T>) -> Score<T> {
    let mut remapped = score.empty_copy();
    remapped.tracks = score
      .tracks
      .iter()
      .map(|track| self.remap_track(track))
      .collect();
    remapped.time_signatures = self.remap_events(&score.time_signatures);
    remapped.key_signatures = self.remap_events(&score.key_signatures);
    remapped.tempos = self.remap_events(&score.tempos);
    remapped.lyrics = self.remap_events(&score.lyrics);
    remapped.markers = self.remap_events(&score.markers);
    remapped
  }
}

/// Forward-only cursor over the segments of a map.
struct Pivot<'m, 'a, T: TimeUnit> {
  map: &'m TimeMap<'a, T>,
  index: usize,
  factor: f64,
}

impl<'m, 'a, T: TimeUnit> Pivot<'m, 'a, T> {
  fn new(map: &'m TimeMap<'a, T>) -> Pivot<'m, 'a, T> {
    Pivot {
      map,
      index: 1,
      factor: map.factor(1),
    }
  }

  fn advance_to(&mut self, time: T) {
    let last = self.map.original.len() - 1;
    let start = self.index;
    while self.index < last && time > self.map.original[self.index] {
      self.index += 1;
    }
    if self.index != start {
      trace!("Pivot moved from segment {} to {}", start, self.index);
      self.factor = self.map.factor(self.index);
    }
  }

  fn map(&self, time: T) -> T {
    self.map.interpolate(self.index, self.factor, time)
  }
}

/// Anything that can be pushed through a [`TimeMap`].
pub trait Remap<T: TimeUnit> {
  type Output;

  fn remap(&self, map: &TimeMap<'_, T>) -> Self::Output;
}

impl<E: TimeEvent> Remap<E::Unit> for [E] {
  type Output = Vec<E>;

  fn remap(&self, map: &TimeMap<'_, E::Unit>) -> Vec<E> {
    map.remap_events(self)
  }
}

impl<E: TimeEvent> Remap<E::Unit> for Vec<E> {
  type Output = Vec<E>;

  fn remap(&self, map: &TimeMap<'_, E::Unit>) -> Vec<E> {
    map.remap_events(self)
  }
}

impl<T: TimeUnit> Remap<T> for Track<T> {
  type Output = Track<T>;

  fn remap(&self, map: &TimeMap<'_, T>) -> Track<T> {
    map.remap_track(self)
  }
}

impl<T: TimeUnit> Remap<T> for Score<T> {
  type Output = Score<T>;

  fn remap(&self, map: &TimeMap<'_, T>) -> Score<T> {
    map.remap_score(self)
  }
}

/// Remaps events, a track or a score through the curve `original -> new`.
///
/// With `sorted` the events and both arrays must already be in ascending
/// order; otherwise sorted copies are used.
pub fn adjust_time<R, T>(
  data: &R,
  original: &[T],
  new: &[T],
  sorted: bool,
) -> Result<R::Output, RemapError>
where
  R: Remap<T> + ?Sized,
  T: TimeUnit,
{
  let map = if sorted {
    TimeMap::sorted(original, new)?
  } else {
    TimeMap::new(original, new)?
  };
  Ok(data.remap(&map))
}
