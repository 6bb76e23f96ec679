//! Layout and hashing constants.
//!
//! # Buffer Layout
//!
//! ```text
//! positions:  [x y z][x y z][x y z] [x y z][x y z][x y z] ...
//!             └──── triangle 0 ───┘ └──── triangle 1 ───┘
//!              FLOATS_PER_TRIANGLE = 9
//!
//! normals:    same layout as positions, one normal per input vertex
//!
//! buckets:    [slot|-1][slot|-1][slot|-1] ...   (bucket_count entries)
//!
//! accumulator:[x y z][x y z] ...                (one triple per slot)
//! ```

/// Components per vertex position or normal.
pub const FLOATS_PER_VERTEX: usize = 3;

/// Vertices per triangle.
pub const VERTICES_PER_TRIANGLE: usize = 3;

/// Floats per triangle in a triangle-soup position buffer (3 × 3 = 9).
pub const FLOATS_PER_TRIANGLE: usize = FLOATS_PER_VERTEX * VERTICES_PER_TRIANGLE;

/// Bucket table sentinel for a bucket with no accumulator slot yet.
pub const UNASSIGNED_SLOT: i32 = -1;

/// Per-axis scale applied before taking the fractional part in `hash3`.
pub const HASH_SCALE: f32 = 0.1031;

/// Offset mixed into the 2D dot products in `hash3`.
pub const HASH_OFFSET: f32 = 31.32;

/// Scale from [0, 1) into the full `u32` range (2^32).
pub const HASH_RANGE: f32 = 4294967296.0;

/// Vertices per grid tile (two triangles, no shared vertices).
pub const VERTICES_PER_TILE: usize = 6;

/// UV components per vertex.
pub const FLOATS_PER_UV: usize = 2;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
