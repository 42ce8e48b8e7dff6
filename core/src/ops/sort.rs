//! In-place sorting entry points.
//!
//! Everything delegates to the unstable pattern-defeating quicksort in the
//! standard library; the comparators from `ordering` keep the result
//! deterministic.

use std::cmp::Ordering;

use crate::{
  ops::ordering::{cmp_by_time, cmp_notes, cmp_pedals, cmp_tracks},
  score::{Note, Pedal, Score, TimeEvent, Track},
  time::TimeUnit,
};

pub fn sort_by<E, F>(events: &mut [E], compare: F)
where
  F: FnMut(&E, &E) -> Ordering,
{
  events.sort_unstable_by(compare);
}

fn sort_with<E, F>(events: &mut [E], reverse: bool, compare: F)
where
  F: Fn(&E, &E) -> Ordering,
{
  if reverse {
    sort_by(events, |a, b| compare(b, a));
  } else {
    sort_by(events, compare);
  }
}

pub fn sort_by_time<E: TimeEvent>(events: &mut [E], reverse: bool) {
  sort_with(events, reverse, cmp_by_time::<E>);
}

pub fn sort_notes<T: TimeUnit>(notes: &mut [Note<T>], reverse: bool) {
  sort_with(notes, reverse, cmp_notes::<T>);
}

pub fn sort_pedals<T: TimeUnit>(pedals: &mut [Pedal<T>], reverse: bool) {
  sort_with(pedals, reverse, cmp_pedals::<T>);
}

pub fn sort_tracks<T>(tracks: &mut [Track<T>], reverse: bool) {
  sort_with(tracks, reverse, cmp_tracks::<T>);
}

/// Sorts every event list of the track by its kind's ordering.
pub fn sort_track<T: TimeUnit>(track: &mut Track<T>, reverse: bool) {
  sort_notes(&mut track.notes, reverse);
  sort_by_time(&mut track.controls, reverse);
  sort_by_time(&mut track.pitch_bends, reverse);
  sort_pedals(&mut track.pedals, reverse);
}

/// Sorts the events of every track and every global list, then the tracks themselves.
pub fn sort_score<T: TimeUnit>(score: &mut Score<T>, reverse: bool) {
  for track in score.tracks.iter_mut() {
    sort_track(track, reverse);
  }
  sort_tracks(&mut score.tracks, reverse);
  sort_by_time(&mut score.time_signatures, reverse);
  sort_by_time(&mut score.key_signatures, reverse);
  sort_by_time(&mut score.tempos, reverse);
  sort_by_time(&mut score.lyrics, reverse);
  sort_by_time(&mut score.markers, reverse);
}

/// Ascending copy of a sequence of plain values.
pub(crate) fn sorted_copy<T: TimeUnit>(values: &[T]) -> Vec<T> {
  let mut copy = values.to_vec();
  sort_by(&mut copy, T::cmp_time);
  copy
}
