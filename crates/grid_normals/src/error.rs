//! Errors for the checked entry points.
//!
//! The core accumulator never returns these; it panics on the same
//! conditions.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalsError {
  #[error("position buffer length {len} is not a multiple of 9 (3 vertices x 3 floats)")]
  PositionsNotTriangles { len: usize },

  #[error("normal buffer length {normals} does not match position buffer length {positions}")]
  NormalLengthMismatch { positions: usize, normals: usize },

  #[error("bucket table is empty")]
  EmptyBucketTable,

  #[error("bucket {index} already holds slot {slot}; the table must be reset to unassigned")]
  BucketTableNotReset { index: usize, slot: i32 },

  #[error("accumulator holds {available} floats, {required} required")]
  AccumulatorTooSmall { required: usize, available: usize },

  #[error("tile ({x}, {y}) is outside a {segments}x{segments} grid")]
  TileOutOfRange { x: usize, y: usize, segments: usize },
}
