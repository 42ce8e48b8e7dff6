//! Total orders for every entity kind.
//!
//! Sorting is unstable, so each key breaks ties on enough fields to make the
//! resulting order deterministic.

use std::cmp::Ordering;

use crate::{
  score::{Note, Pedal, TimeEvent, Track},
  time::TimeUnit,
};

/// Key: `(time)`
pub fn cmp_by_time<E: TimeEvent>(a: &E, b: &E) -> Ordering {
  a.time().cmp_time(&b.time())
}

/// Key: `(end)`
pub fn cmp_by_end<E: TimeEvent>(a: &E, b: &E) -> Ordering {
  a.end().cmp_time(&b.end())
}

/// Key: `(time, duration)`
pub fn cmp_by_time_and_duration<E: TimeEvent>(a: &E, b: &E) -> Ordering {
  cmp_by_time(a, b).then_with(|| a.duration().cmp_time(&b.duration()))
}

/// Key: `(time, duration, pitch, velocity)`
pub fn cmp_notes<T: TimeUnit>(a: &Note<T>, b: &Note<T>) -> Ordering {
  cmp_by_time_and_duration(a, b)
    .then_with(|| a.pitch.cmp(&b.pitch))
    .then_with(|| a.velocity.cmp(&b.velocity))
}

/// Key: `(time, duration)`
pub fn cmp_pedals<T: TimeUnit>(a: &Pedal<T>, b: &Pedal<T>) -> Ordering {
  cmp_by_time_and_duration(a, b)
}

/// Key: `(is_drum, program, name, note_count)`
pub fn cmp_tracks<T>(a: &Track<T>, b: &Track<T>) -> Ordering {
  a.is_drum
    .cmp(&b.is_drum)
    .then_with(|| a.program.cmp(&b.program))
    .then_with(|| a.name.cmp(&b.name))
    .then_with(|| a.note_count().cmp(&b.note_count()))
}
