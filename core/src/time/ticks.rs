use std::{
  cmp::Ordering,
  fmt,
  ops::{Add, Sub},
};

use crate::time::{Rounding, TimeUnit};

/// Integer tick count, as found in standard MIDI files.
#[derive(Debug, Default, Eq, Copy, Clone)]
pub struct Ticks(i32);

impl Ticks {
  pub fn new(ticks: i32) -> Ticks {
    Ticks(ticks)
  }

  pub fn zero() -> Ticks {
    Ticks(0)
  }

  pub fn get_ticks(&self) -> i32 {
    self.0
  }
}

impl TimeUnit for Ticks {
  fn zero() -> Self {
    Ticks::zero()
  }

  fn to_f64(self) -> f64 {
    f64::from(self.0)
  }

  fn from_f64(value: f64, rounding: Rounding) -> Self {
    // `as` saturates at the i32 bounds
    match rounding {
      Rounding::Nearest => Ticks(value.round() as i32),
      Rounding::Truncate => Ticks(value as i32),
    }
  }

  fn cmp_time(&self, other: &Self) -> Ordering {
    self.cmp(other)
  }
}

impl Ord for Ticks {
  fn cmp(&self, other: &Ticks) -> Ordering {
    self.0.cmp(&other.0)
  }
}

impl PartialOrd for Ticks {
  fn partial_cmp(&self, other: &Ticks) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for Ticks {
  fn eq(&self, other: &Ticks) -> bool {
    self.0 == other.0
  }
}

// Saturating, so an end past i32::MAX stays past every domain.
impl Add for Ticks {
  type Output = Ticks;
  fn add(self, rhs: Ticks) -> Self {
    Ticks::new(self.0.saturating_add(rhs.0))
  }
}

impl Sub for Ticks {
  type Output = Ticks;
  fn sub(self, rhs: Ticks) -> Self {
    Ticks::new(self.0.saturating_sub(rhs.0))
  }
}

impl From<i32> for Ticks {
  fn from(item: i32) -> Self {
    Ticks(item)
  }
}

impl From<Ticks> for f64 {
  fn from(item: Ticks) -> Self {
    f64::from(item.0)
  }
}

impl From<Ticks> for i32 {
  fn from(item: Ticks) -> Self {
    item.0
  }
}

impl fmt::Display for Ticks {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod test {

  use super::{Rounding, TimeUnit, Ticks};
  use std::cmp::Ordering;

  #[test]
  pub fn new() {
    let ticks = Ticks::new(1234);
    assert_eq!(ticks.0, 1234);
  }

  #[test]
  pub fn zero() {
    let ticks = Ticks::zero();
    assert_eq!(ticks.0, 0);
    assert_eq!(<Ticks as TimeUnit>::zero(), ticks);
  }

  #[test]
  pub fn ord_cmp() {
    let time1 = Ticks::new(1234);
    let time2 = Ticks::new(1235);
    assert_eq!(time1.cmp(&time2), Ordering::Less);
    assert_eq!(time2.cmp(&time1), Ordering::Greater);
    assert_eq!(time1.cmp_time(&time1), Ordering::Equal);
  }

  #[test]
  pub fn add_sub() {
    let time = Ticks::new(100) + Ticks::new(50);
    assert_eq!(time, Ticks(150));
    assert_eq!(time - Ticks::new(200), Ticks(-50));
  }

  #[test]
  pub fn add_sub_saturate() {
    assert_eq!(Ticks::new(50) + Ticks::new(i32::MAX), Ticks(i32::MAX));
    assert_eq!(Ticks::new(-50) - Ticks::new(i32::MAX), Ticks(i32::MIN));
  }

  #[test]
  pub fn from_f64_nearest() {
    assert_eq!(Ticks::from_f64(2.5, Rounding::Nearest), Ticks(3));
    assert_eq!(Ticks::from_f64(2.49, Rounding::Nearest), Ticks(2));
    assert_eq!(Ticks::from_f64(-1.6, Rounding::Nearest), Ticks(-2));
  }

  #[test]
  pub fn from_f64_truncate() {
    assert_eq!(Ticks::from_f64(2.99, Rounding::Truncate), Ticks(2));
    assert_eq!(Ticks::from_f64(-1.6, Rounding::Truncate), Ticks(-1));
  }

  #[test]
  pub fn from_f64_saturates() {
    assert_eq!(Ticks::from_f64(1e12, Rounding::Nearest), Ticks(i32::MAX));
  }

  #[test]
  pub fn conversions() {
    let ticks = Ticks::from(480);
    assert_eq!(f64::from(ticks), 480.0);
    assert_eq!(i32::from(ticks), 480);
    assert_eq!(ticks.to_string(), "480");
  }
}
