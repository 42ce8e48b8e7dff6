use std::{
  cmp::Ordering,
  fmt::Debug,
  ops::{Add, Sub},
};

use serde_derive::Deserialize;

/// How an interpolated position lands on an integer unit.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
  #[serde(rename = "nearest")]
  Nearest,
  #[serde(rename = "truncate")]
  Truncate,
}

impl Default for Rounding {
  fn default() -> Rounding {
    Rounding::Nearest
  }
}

/// The numeric unit shared by every event of a sequence: ticks or real-valued time.
///
/// Interpolation always runs in `f64`, and `from_f64` brings the result back
/// into the unit, rounding as requested when the unit is integral.
pub trait TimeUnit: Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Debug {
  fn zero() -> Self;

  fn to_f64(self) -> f64;

  fn from_f64(value: f64, rounding: Rounding) -> Self;

  /// Total order used by every sort in the crate.
  fn cmp_time(&self, other: &Self) -> Ordering;
}

impl TimeUnit for f64 {
  fn zero() -> Self {
    0.0
  }

  fn to_f64(self) -> f64 {
    self
  }

  fn from_f64(value: f64, _rounding: Rounding) -> Self {
    value
  }

  fn cmp_time(&self, other: &Self) -> Ordering {
    self.total_cmp(other)
  }
}

impl TimeUnit for f32 {
  fn zero() -> Self {
    0.0
  }

  fn to_f64(self) -> f64 {
    f64::from(self)
  }

  fn from_f64(value: f64, _rounding: Rounding) -> Self {
    value as f32
  }

  fn cmp_time(&self, other: &Self) -> Ordering {
    self.total_cmp(other)
  }
}

#[cfg(test)]
mod test {

  use super::{Rounding, TimeUnit};
  use std::cmp::Ordering;

  #[test]
  pub fn rounding_default() {
    assert_eq!(Rounding::default(), Rounding::Nearest);
  }

  #[test]
  pub fn f64_round_trip() {
    assert_eq!(f64::from_f64(1.25f64.to_f64(), Rounding::Truncate), 1.25);
    assert_eq!(f64::zero(), 0.0);
  }

  #[test]
  pub fn f32_from_f64() {
    assert_eq!(f32::from_f64(0.5, Rounding::Nearest), 0.5f32);
    assert_eq!(0.75f32.to_f64(), 0.75);
  }

  #[test]
  pub fn float_cmp_time() {
    assert_eq!(1.0f64.cmp_time(&2.0), Ordering::Less);
    assert_eq!(2.0f32.cmp_time(&2.0), Ordering::Equal);
    assert_eq!(f64::NAN.cmp_time(&1.0), Ordering::Greater);
  }
}
