use crate::time::TimeUnit;

/// Anything placed on a timeline.
///
/// Instantaneous kinds only implement `time` and `set_time`. Kinds that span
/// time set `HAS_DURATION` and override the duration accessors, which turns
/// `end` into `time + duration`.
pub trait TimeEvent: Clone {
  type Unit: TimeUnit;

  const HAS_DURATION: bool = false;

  fn time(&self) -> Self::Unit;

  fn set_time(&mut self, time: Self::Unit);

  fn duration(&self) -> Self::Unit {
    <Self::Unit as TimeUnit>::zero()
  }

  fn set_duration(&mut self, _duration: Self::Unit) {}

  fn end(&self) -> Self::Unit {
    self.time() + self.duration()
  }
}

/// Events carrying a real duration (notes and pedals).
pub trait Durational: TimeEvent {}

macro_rules! instantaneous_event {
  ($event:ident) => {
    impl<T: TimeUnit> TimeEvent for $event<T> {
      type Unit = T;

      fn time(&self) -> T {
        self.time
      }

      fn set_time(&mut self, time: T) {
        self.time = time;
      }
    }
  };
}

macro_rules! durational_event {
  ($event:ident) => {
    impl<T: TimeUnit> TimeEvent for $event<T> {
      type Unit = T;

      const HAS_DURATION: bool = true;

      fn time(&self) -> T {
        self.time
      }

      fn set_time(&mut self, time: T) {
        self.time = time;
      }

      fn duration(&self) -> T {
        self.duration
      }

      fn set_duration(&mut self, duration: T) {
        self.duration = duration;
      }
    }

    impl<T: TimeUnit> Durational for $event<T> {}
  };
}

pub type Key = i8;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Note<T> {
  pub time: T,
  pub duration: T,
  pub pitch: Key,
  pub velocity: i8,
}

impl<T> Note<T> {
  pub fn new(time: T, duration: T, pitch: Key, velocity: i8) -> Note<T> {
    Note {
      time,
      duration,
      pitch,
      velocity,
    }
  }
}

durational_event!(Note);

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Pedal<T> {
  pub time: T,
  pub duration: T,
}

impl<T> Pedal<T> {
  pub fn new(time: T, duration: T) -> Pedal<T> {
    Pedal { time, duration }
  }
}

durational_event!(Pedal);

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ControlChange<T> {
  pub time: T,
  pub number: u8,
  pub value: u8,
}

impl<T> ControlChange<T> {
  pub fn new(time: T, number: u8, value: u8) -> ControlChange<T> {
    ControlChange {
      time,
      number,
      value,
    }
  }
}

instantaneous_event!(ControlChange);

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PitchBend<T> {
  pub time: T,
  pub value: i32,
}

impl<T> PitchBend<T> {
  pub fn new(time: T, value: i32) -> PitchBend<T> {
    PitchBend { time, value }
  }
}

instantaneous_event!(PitchBend);

/// Tempo mark, in quarter notes per minute.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Tempo<T> {
  pub time: T,
  pub qpm: f64,
}

impl<T> Tempo<T> {
  pub fn new(time: T, qpm: f64) -> Tempo<T> {
    Tempo { time, qpm }
  }
}

instantaneous_event!(Tempo);

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TimeSignature<T> {
  pub time: T,
  pub numerator: u8,
  pub denominator: u8,
}

impl<T> TimeSignature<T> {
  pub fn new(time: T, numerator: u8, denominator: u8) -> TimeSignature<T> {
    TimeSignature {
      time,
      numerator,
      denominator,
    }
  }
}

instantaneous_event!(TimeSignature);

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct KeySignature<T> {
  pub time: T,
  pub key: i8,     // sharps (+) or flats (-)
  pub tonality: u8, // 0 major, 1 minor
}

impl<T> KeySignature<T> {
  pub fn new(time: T, key: i8, tonality: u8) -> KeySignature<T> {
    KeySignature {
      time,
      key,
      tonality,
    }
  }
}

instantaneous_event!(KeySignature);

/// Lyrics and markers.
#[derive(Debug, PartialEq, Clone)]
pub struct TextMeta<T> {
  pub time: T,
  pub text: String,
}

impl<T> TextMeta<T> {
  pub fn new<S>(time: T, text: S) -> TextMeta<T>
  where
    S: Into<String>,
  {
    TextMeta {
      time,
      text: text.into(),
    }
  }
}

instantaneous_event!(TextMeta);
