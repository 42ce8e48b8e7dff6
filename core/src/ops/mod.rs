pub mod extent;
pub mod filter;
pub mod ordering;
pub mod remap;
pub mod sort;

pub use self::extent::{end, score_end, score_start, start, track_end, track_start};
pub use self::filter::{
  clamp_duration, clamp_duration_in_place, clip, clip_score, clip_track, clip_with_end, filter,
};
pub use self::remap::{adjust_time, Remap, RemapError, TimeMap};
pub use self::sort::{
  sort_by, sort_by_time, sort_notes, sort_pedals, sort_score, sort_track, sort_tracks,
};
