use crate::score::events::{ControlChange, Note, Pedal, PitchBend};

#[derive(Debug, PartialEq, Clone)]
pub struct Track<T> {
  pub name: String,
  pub program: u8,
  pub is_drum: bool,

  pub notes: Vec<Note<T>>,
  pub controls: Vec<ControlChange<T>>,
  pub pitch_bends: Vec<PitchBend<T>>,
  pub pedals: Vec<Pedal<T>>,
}

impl<T> Track<T> {
  pub fn new<S>(name: S, program: u8, is_drum: bool) -> Track<T>
  where
    S: Into<String>,
  {
    Track {
      name: name.into(),
      program,
      is_drum,
      notes: Vec::new(),
      controls: Vec::new(),
      pitch_bends: Vec::new(),
      pedals: Vec::new(),
    }
  }

  /// Same name, program and drum flag, no events.
  pub fn empty_copy(&self) -> Track<T> {
    Track::new(self.name.as_str(), self.program, self.is_drum)
  }

  pub fn note_count(&self) -> usize {
    self.notes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.notes.is_empty()
      && self.controls.is_empty()
      && self.pitch_bends.is_empty()
      && self.pedals.is_empty()
  }
}

#[cfg(test)]
mod test {

  use super::Track;
  use crate::score::events::{Note, Pedal};
  use crate::time::Ticks;

  #[test]
  pub fn new() {
    let track: Track<Ticks> = Track::new("piano", 0, false);
    assert_eq!(track.name, "piano");
    assert_eq!(track.note_count(), 0);
    assert!(track.is_empty());
  }

  #[test]
  pub fn empty_copy_keeps_metadata() {
    let mut track = Track::new("drums", 0, true);
    track.notes.push(Note::new(Ticks::new(0), Ticks::new(10), 36, 90));
    track.pedals.push(Pedal::new(Ticks::new(0), Ticks::new(10)));
    assert_eq!(track.note_count(), 1);

    let copy = track.empty_copy();
    assert_eq!(copy.name, "drums");
    assert!(copy.is_drum);
    assert!(copy.is_empty());
  }
}
