use std::cmp::Ordering;

use crate::{
  score::{Score, TimeEvent, Track},
  time::TimeUnit,
};

fn pick<T, I>(values: I, keep: Ordering) -> Option<T>
where
  T: TimeUnit,
  I: IntoIterator<Item = T>,
{
  values.into_iter().fold(None, |best, value| match best {
    Some(best) if best.cmp_time(&value) != keep.reverse() => Some(best),
    _ => Some(value),
  })
}

/// Earliest `time`, or zero for no events.
pub fn start<E: TimeEvent>(events: &[E]) -> E::Unit {
  pick(events.iter().map(TimeEvent::time), Ordering::Less)
    .unwrap_or_else(<E::Unit as TimeUnit>::zero)
}

/// Latest `time + duration` (or `time` for instantaneous kinds), or zero for no events.
pub fn end<E: TimeEvent>(events: &[E]) -> E::Unit {
  pick(events.iter().map(TimeEvent::end), Ordering::Greater)
    .unwrap_or_else(<E::Unit as TimeUnit>::zero)
}

fn track_starts<T: TimeUnit>(track: &Track<T>) -> impl Iterator<Item = T> {
  let lists = vec![
    (!track.notes.is_empty()).then(|| start(&track.notes)),
    (!track.controls.is_empty()).then(|| start(&track.controls)),
    (!track.pitch_bends.is_empty()).then(|| start(&track.pitch_bends)),
    (!track.pedals.is_empty()).then(|| start(&track.pedals)),
  ];
  lists.into_iter().flatten()
}

fn track_ends<T: TimeUnit>(track: &Track<T>) -> impl Iterator<Item = T> {
  let lists = vec![
    (!track.notes.is_empty()).then(|| end(&track.notes)),
    (!track.controls.is_empty()).then(|| end(&track.controls)),
    (!track.pitch_bends.is_empty()).then(|| end(&track.pitch_bends)),
    (!track.pedals.is_empty()).then(|| end(&track.pedals)),
  ];
  lists.into_iter().flatten()
}

/// Earliest event of any list of the track, or zero for an empty track.
pub fn track_start<T: TimeUnit>(track: &Track<T>) -> T {
  if track.is_empty() {
    return T::zero();
  }
  pick(track_starts(track), Ordering::Less).unwrap_or_else(T::zero)
}

pub fn track_end<T: TimeUnit>(track: &Track<T>) -> T {
  if track.is_empty() {
    return T::zero();
  }
  pick(track_ends(track), Ordering::Greater).unwrap_or_else(T::zero)
}

/// Earliest event across the tracks and the global lists, or zero when there is none.
pub fn score_start<T: TimeUnit>(score: &Score<T>) -> T {
  let globals = vec![
    (!score.time_signatures.is_empty()).then(|| start(&score.time_signatures)),
    (!score.key_signatures.is_empty()).then(|| start(&score.key_signatures)),
    (!score.tempos.is_empty()).then(|| start(&score.tempos)),
    (!score.lyrics.is_empty()).then(|| start(&score.lyrics)),
    (!score.markers.is_empty()).then(|| start(&score.markers)),
  ];
  let starts = score
    .tracks
    .iter()
    .filter(|track| !track.is_empty())
    .flat_map(track_starts)
    .chain(globals.into_iter().flatten());
  pick(starts, Ordering::Less).unwrap_or_else(T::zero)
}

pub fn score_end<T: TimeUnit>(score: &Score<T>) -> T {
  let globals = vec![
    (!score.time_signatures.is_empty()).then(|| end(&score.time_signatures)),
    (!score.key_signatures.is_empty()).then(|| end(&score.key_signatures)),
    (!score.tempos.is_empty()).then(|| end(&score.tempos)),
    (!score.lyrics.is_empty()).then(|| end(&score.lyrics)),
    (!score.markers.is_empty()).then(|| end(&score.markers)),
  ];
  let ends = score
    .tracks
    .iter()
    .filter(|track| !track.is_empty())
    .flat_map(track_ends)
    .chain(globals.into_iter().flatten());
  pick(ends, Ordering::Greater).unwrap_or_else(T::zero)
}

#[cfg(test)]
mod test {

  use super::{end, score_end, score_start, start, track_end, track_start};
  use crate::score::{ControlChange, Note, Pedal, Score, TextMeta, Track};
  use crate::time::Ticks;

  #[test]
  pub fn empty_is_zero() {
    let notes: Vec<Note<Ticks>> = Vec::new();
    assert_eq!(start(&notes), Ticks::zero());
    assert_eq!(end(&notes), Ticks::zero());
    let pedals: Vec<Pedal<f64>> = Vec::new();
    assert_eq!(start(&pedals), 0.0);
    assert_eq!(end(&pedals), 0.0);
  }

  #[test]
  pub fn durational_extent() {
    let notes = vec![
      Note::new(Ticks::new(30), Ticks::new(5), 60, 100),
      Note::new(Ticks::new(10), Ticks::new(50), 60, 100),
      Note::new(Ticks::new(20), Ticks::new(10), 60, 100),
    ];
    assert_eq!(start(&notes), Ticks::new(10));
    assert_eq!(end(&notes), Ticks::new(60));
  }

  #[test]
  pub fn instantaneous_extent() {
    let controls = vec![
      ControlChange::new(-2.5f64, 1, 1),
      ControlChange::new(7.0, 1, 1),
      ControlChange::new(3.0, 1, 1),
    ];
    assert_eq!(start(&controls), -2.5);
    assert_eq!(end(&controls), 7.0);
  }

  #[test]
  pub fn track_extent() {
    let mut track: Track<Ticks> = Track::new("piano", 0, false);
    assert_eq!(track_start(&track), Ticks::zero());
    assert_eq!(track_end(&track), Ticks::zero());

    track.notes.push(Note::new(Ticks::new(100), Ticks::new(10), 60, 100));
    track.pedals.push(Pedal::new(Ticks::new(50), Ticks::new(200)));
    track.controls.push(ControlChange::new(Ticks::new(70), 64, 127));
    assert_eq!(track_start(&track), Ticks::new(50));
    assert_eq!(track_end(&track), Ticks::new(250));
  }

  #[test]
  pub fn score_extent() {
    let mut score: Score<Ticks> = Score::new(480);
    assert_eq!(score_start(&score), Ticks::zero());
    assert_eq!(score_end(&score), Ticks::zero());

    score.tracks.push(Track::new("empty", 0, false));
    assert_eq!(score_end(&score), Ticks::zero());

    let mut track = Track::new("lead", 0, false);
    track.notes.push(Note::new(Ticks::new(480), Ticks::new(480), 60, 100));
    score.tracks.push(track);
    score.markers.push(TextMeta::new(Ticks::new(1200), "outro"));
    score.lyrics.push(TextMeta::new(Ticks::new(240), "la"));
    assert_eq!(score_start(&score), Ticks::new(240));
    assert_eq!(score_end(&score), Ticks::new(1200));
  }
}
