//! Terrain grid geometry in triangle-soup layout.
//!
//! # Tile Layout
//!
//! A `size × size` plane centered on the origin, split into
//! `segments × segments` tiles. Tiles are stored row-major (`y` outer, `x`
//! inner), 6 vertices each, with no shared vertices:
//!
//! ```text
//!   z0  tl ──────── tr        Triangle 1: 0 (x0,z0)  1 (x0,z1)  2 (x1,z0)
//!       │         ╱ │         Triangle 2: 3 (x1,z0)  4 (x0,z1)  5 (x1,z1)
//!       │       ╱   │
//!       │     ╱     │         tl → 0       tr → 2, 3
//!       │   ╱       │         bl → 1, 4    br → 5
//!   z1  bl ──────── br
//!       x0          x1
//! ```
//!
//! Both triangles face +Y. Neighboring tiles repeat their shared corners, so
//! smooth shading relies on the normal accumulator merging coincident
//! positions.

use std::collections::HashMap;

use glam::Vec3;

use crate::constants::{FLOATS_PER_UV, FLOATS_PER_VERTEX, VERTICES_PER_TILE};
use crate::error::NormalsError;
use crate::workspace::NormalWorkspace;

/// Texture rectangle for one tile. `v1` maps to the `z0` edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
  pub u0: f32,
  pub v0: f32,
  pub u1: f32,
  pub v1: f32,
}

impl UvRect {
  /// The full [0, 1] texture.
  pub const FULL: UvRect = UvRect {
    u0: 0.0,
    v0: 0.0,
    u1: 1.0,
    v1: 1.0,
  };
}

/// Corner heights of one tile.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileCorners {
  pub tl: f32,
  pub tr: f32,
  pub bl: f32,
  pub br: f32,
}

/// Grid mesh with per-vertex position, UV, and normal attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
  /// Vertex positions, 3 floats per vertex.
  pub position: Vec<f32>,

  /// Texture coordinates, 2 floats per vertex.
  pub uv: Vec<f32>,

  /// Vertex normals, 3 floats per vertex. Zero until computed.
  pub normal: Vec<f32>,

  segments: usize,
}

impl GridGeometry {
  /// Build a flat grid at y = 0.
  pub fn new(size: f32, segments: usize) -> Self {
    let vertex_count = segments * segments * VERTICES_PER_TILE;
    let mut position = Vec::with_capacity(vertex_count * FLOATS_PER_VERTEX);
    let mut uv = Vec::with_capacity(vertex_count * FLOATS_PER_UV);

    let segment_size = size / segments as f32;
    let half_size = size / 2.0;

    for y in 0..segments {
      for x in 0..segments {
        let x0 = x as f32 * segment_size - half_size;
        let z0 = y as f32 * segment_size - half_size;
        let x1 = (x + 1) as f32 * segment_size - half_size;
        let z1 = (y + 1) as f32 * segment_size - half_size;

        position.extend_from_slice(&[x0, 0.0, z0, x0, 0.0, z1, x1, 0.0, z0]);
        position.extend_from_slice(&[x1, 0.0, z0, x0, 0.0, z1, x1, 0.0, z1]);

        uv.extend_from_slice(&[0.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
        uv.extend_from_slice(&[1.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
      }
    }

    Self {
      normal: vec![0.0; position.len()],
      position,
      uv,
      segments,
    }
  }

  pub fn segments(&self) -> usize {
    self.segments
  }

  pub fn tile_count(&self) -> usize {
    self.segments * self.segments
  }

  pub fn vertex_count(&self) -> usize {
    self.position.len() / FLOATS_PER_VERTEX
  }

  /// Offset every vertex position.
  pub fn translate(&mut self, x: f32, y: f32, z: f32) {
    let offset = Vec3::new(x, y, z);
    for p in self.position.chunks_exact_mut(FLOATS_PER_VERTEX) {
      (Vec3::from_slice(p) + offset).write_to_slice(p);
    }
  }

  /// Set the y coordinate of a tile's corners. Coincident corners of
  /// neighboring tiles are not touched.
  pub fn set_tile_height(
    &mut self,
    x: usize,
    y: usize,
    corners: TileCorners,
  ) -> Result<(), NormalsError> {
    let first = self.first_vertex(x, y)?;
    let heights = [
      corners.tl, corners.bl, corners.tr, corners.tr, corners.bl, corners.br,
    ];

    for (i, height) in heights.into_iter().enumerate() {
      self.position[(first + i) * FLOATS_PER_VERTEX + 1] = height;
    }
    Ok(())
  }

  /// Replace a tile's texture coordinates with `rect`.
  ///
  /// `u` runs along x, `v` runs against z, matching the initial layout, so
  /// `UvRect::FULL` restores the default UVs.
  pub fn set_tile_uv(&mut self, x: usize, y: usize, rect: UvRect) -> Result<(), NormalsError> {
    let first = self.first_vertex(x, y)?;
    let UvRect { u0, v0, u1, v1 } = rect;
    let uvs = [
      [u0, v1], // (x0, z0)
      [u0, v0], // (x0, z1)
      [u1, v1], // (x1, z0)
      [u1, v1], // (x1, z0)
      [u0, v0], // (x0, z1)
      [u1, v0], // (x1, z1)
    ];

    for (i, coords) in uvs.iter().enumerate() {
      let base = (first + i) * FLOATS_PER_UV;
      self.uv[base..base + FLOATS_PER_UV].copy_from_slice(coords);
    }
    Ok(())
  }

  /// Recompute smooth vertex normals from the current positions.
  ///
  /// Returns the number of unique vertices (accumulator slots) found.
  pub fn compute_normals(&mut self, workspace: &mut NormalWorkspace) -> Result<usize, NormalsError> {
    workspace.compute(&self.position, &mut self.normal)
  }

  fn first_vertex(&self, x: usize, y: usize) -> Result<usize, NormalsError> {
    if x >= self.segments || y >= self.segments {
      return Err(NormalsError::TileOutOfRange {
        x,
        y,
        segments: self.segments,
      });
    }
    Ok((y * self.segments + x) * VERTICES_PER_TILE)
  }
}

/// Memoized base grids, keyed by `(size, segments)`.
///
/// Callers receive clones, so edits never leak back into the cache.
#[derive(Debug, Default)]
pub struct GridCache {
  entries: HashMap<(u32, usize), GridGeometry>,
}

impl GridCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clone of the flat grid for `(size, segments)`, building it on first use.
  pub fn get_or_create(&mut self, size: f32, segments: usize) -> GridGeometry {
    self
      .entries
      .entry((size.to_bits(), segments))
      .or_insert_with(|| GridGeometry::new(size, segments))
      .clone()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
