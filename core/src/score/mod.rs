pub mod events;
pub mod track;

pub use self::events::{
  ControlChange, Durational, KeySignature, Note, Pedal, PitchBend, Tempo, TextMeta, TimeEvent,
  TimeSignature,
};
pub use self::track::Track;

#[derive(Debug, PartialEq, Clone)]
pub struct Score<T> {
  pub ticks_per_quarter: i32,

  pub tracks: Vec<Track<T>>,

  pub time_signatures: Vec<TimeSignature<T>>,
  pub key_signatures: Vec<KeySignature<T>>,
  pub tempos: Vec<Tempo<T>>,
  pub lyrics: Vec<TextMeta<T>>,
  pub markers: Vec<TextMeta<T>>,
}

impl<T> Score<T> {
  pub fn new(ticks_per_quarter: i32) -> Score<T> {
    Score {
      ticks_per_quarter,
      tracks: Vec::new(),
      time_signatures: Vec::new(),
      key_signatures: Vec::new(),
      tempos: Vec::new(),
      lyrics: Vec::new(),
      markers: Vec::new(),
    }
  }

  /// Same resolution, no tracks and no global events.
  pub fn empty_copy(&self) -> Score<T> {
    Score::new(self.ticks_per_quarter)
  }

  pub fn note_count(&self) -> usize {
    self.tracks.iter().map(Track::note_count).sum()
  }
}

#[cfg(test)]
mod test {

  use super::{Note, Score, Track};
  use crate::time::Ticks;

  #[test]
  pub fn note_count() {
    let mut score = Score::new(480);
    let mut track = Track::new("lead", 81, false);
    track.notes.push(Note::new(Ticks::new(0), Ticks::new(480), 72, 100));
    track.notes.push(Note::new(Ticks::new(480), Ticks::new(480), 74, 100));
    score.tracks.push(track.clone());
    score.tracks.push(track);
    assert_eq!(score.note_count(), 4);
    assert_eq!(score.empty_copy().ticks_per_quarter, 480);
    assert!(score.empty_copy().tracks.is_empty());
  }
}
