//! grid_normals - Smooth vertex normals for triangle-soup terrain grids
//!
//! Terrain chunks are stored as triangle soup: every tile repeats its corner
//! positions, with no index buffer. This crate recovers smooth shading by
//! deduplicating coincident vertices through a fixed-size spatial hash table,
//! summing face normals per unique vertex, and normalizing the result.
//!
//! # Features
//!
//! - **Normal Accumulator**: two-pass dedup-and-accumulate over caller-owned
//!   buffers, no allocation
//! - **Position Hash**: `hash3`, bit-exact with the single-precision reference,
//!   plus a bit-mixing alternative
//! - **Workspace**: reusable, validated buffers sized from `NormalsConfig`
//! - **Grid Geometry**: terrain tiles with per-tile heights and UVs
//! - **Batch**: rayon-parallel normals across independent chunks
//!
//! # Example
//!
//! ```ignore
//! use grid_normals::{GridGeometry, NormalWorkspace, NormalsConfig, TileCorners};
//!
//! let mut grid = GridGeometry::new(32.0, 32);
//! grid.set_tile_height(3, 4, TileCorners { tl: 1.0, tr: 1.5, bl: 0.5, br: 1.0 })?;
//!
//! let mut workspace = NormalWorkspace::new(NormalsConfig::default());
//! let unique = grid.compute_normals(&mut workspace)?;
//!
//! println!("{} vertices, {} unique", grid.vertex_count(), unique);
//! ```

pub mod constants;
pub mod error;
pub mod hash;
pub mod vector;

// Re-export commonly used items
pub use constants::{FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX, UNASSIGNED_SLOT};
pub use error::NormalsError;
pub use hash::{bucket_index, hash3, BitMixHash, HashMode, PositionHash, ReferenceHash};
pub use vector::{add, cross, dot2, face_normal, fract, normalize, subtract};

// Core two-pass algorithm over caller buffers
pub mod accumulator;
pub use accumulator::{
  accumulate_face_normals, compute_unique_grid_vertex_normals,
  compute_unique_grid_vertex_normals_with, scatter_vertex_normals, validate_buffers,
};

// Table sizing and owned buffers
pub mod config;
pub use config::NormalsConfig;

pub mod workspace;
pub use workspace::NormalWorkspace;

// Terrain grid geometry
pub mod grid;
pub use grid::{GridCache, GridGeometry, TileCorners, UvRect};

// Parallel processing across chunks
pub mod batch;
pub use batch::compute_grid_normals_batch;

// Table sizing diagnostics
pub mod diagnostics;
pub use diagnostics::{bucket_report, BucketReport};
