use crate::{
  score::{Durational, Score, TimeEvent, Track},
  time::TimeUnit,
};

/// Keeps the events matching `predicate`, in their original order.
pub fn filter<E, P>(events: &[E], predicate: P) -> Vec<E>
where
  E: Clone,
  P: Fn(&E) -> bool,
{
  if events.is_empty() {
    return Vec::new();
  }
  let mut filtered: Vec<E> = events.iter().filter(|&event| predicate(event)).cloned().collect();
  filtered.shrink_to_fit();
  filtered
}

/// Keeps the events starting inside the clip window `[start, end)`.
pub fn clip<E: TimeEvent>(events: &[E], start: E::Unit, end: E::Unit) -> Vec<E> {
  filter(events, |event| event.time() >= start && event.time() < end)
}

/// Like `clip`, but with `clip_end` only events lying entirely inside
/// `[start, end]` survive.
pub fn clip_with_end<E: Durational>(
  events: &[E],
  start: E::Unit,
  end: E::Unit,
  clip_end: bool,
) -> Vec<E> {
  if clip_end {
    filter(events, |event| event.time() >= start && event.end() <= end)
  } else {
    clip(events, start, end)
  }
}

pub fn clip_track<T: TimeUnit>(track: &Track<T>, start: T, end: T, clip_end: bool) -> Track<T> {
  let mut clipped = track.empty_copy();
  clipped.notes = clip_with_end(&track.notes, start, end, clip_end);
  clipped.controls = clip(&track.controls, start, end);
  clipped.pitch_bends = clip(&track.pitch_bends, start, end);
  clipped.pedals = clip_with_end(&track.pedals, start, end, clip_end);
  clipped
}

pub fn clip_score<T: TimeUnit>(score: &Score<T>, start: T, end: T, clip_end: bool) -> Score<T> {
  let mut clipped = score.empty_copy();
  clipped.tracks = score
    .tracks
    .iter()
    .map(|track| clip_track(track, start, end, clip_end))
    .collect();
  clipped.time_signatures = clip(&score.time_signatures, start, end);
  clipped.key_signatures = clip(&score.key_signatures, start, end);
  clipped.tempos = clip(&score.tempos, start, end);
  clipped.lyrics = clip(&score.lyrics, start, end);
  clipped.markers = clip(&score.markers, start, end);
  clipped
}

/// Bounds every duration into `[min, max]`. When `min > max`, `min` wins for
/// durations below it and `max` for everything else.
pub fn clamp_duration_in_place<E: Durational>(
  events: &mut [E],
  min: E::Unit,
  max: E::Unit,
) -> &mut [E] {
  for event in events.iter_mut() {
    let duration = event.duration();
    if duration < min {
      event.set_duration(min);
    } else if duration > max {
      event.set_duration(max);
    }
  }
  events
}

pub fn clamp_duration<E: Durational>(events: &[E], min: E::Unit, max: E::Unit) -> Vec<E> {
  let mut clamped = events.to_vec();
  clamp_duration_in_place(&mut clamped, min, max);
  clamped
}
