//! Batch transforms over time-stamped musical events: ordering, filtering,
//! clipping, duration clamping, extents, and piecewise-linear time remapping
//! of event sequences, tracks and whole scores.

pub mod config;
pub mod ops;
pub mod score;
pub mod time;

pub use crate::ops::{adjust_time, Remap, RemapError, TimeMap};
