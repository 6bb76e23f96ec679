//! Minimal f32 vector kernels on `[f32; 3]` triples.
//!
//! Every kernel spells out its f32 arithmetic in a fixed order (no FMA
//! contraction, no SIMD lane reordering) so `hash3` and the accumulator stay
//! bit-identical to single-precision reference output.

/// Cross product `a × b` (right-hand rule).
#[inline(always)]
pub fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
  [
    a[1] * b[2] - a[2] * b[1],
    a[2] * b[0] - a[0] * b[2],
    a[0] * b[1] - a[1] * b[0],
  ]
}

/// Normalize in place. Zero-length vectors are left unchanged.
#[inline(always)]
pub fn normalize(v: &mut [f32; 3]) {
  let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
  if len > 0.0 {
    v[0] /= len;
    v[1] /= len;
    v[2] /= len;
  }
}

/// Elementwise `a - b`.
#[inline(always)]
pub fn subtract(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
  [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Elementwise `a + b`.
#[inline(always)]
pub fn add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
  [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// 2D dot product `(x1, y1) · (x2, y2)`.
#[inline(always)]
pub fn dot2(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
  x1 * x2 + y1 * y2
}

/// Fractional part `x - floor(x)`, in [0, 1) for finite input.
#[inline(always)]
pub fn fract(x: f32) -> f32 {
  x - x.floor()
}

/// Face normal of triangle `(v0, v1, v2)`: `normalize(cross(v1 - v0, v2 - v0))`.
///
/// Degenerate triangles yield the zero vector.
#[inline]
pub fn face_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
  let e1 = subtract(v1, v0);
  let e2 = subtract(v2, v0);
  let mut normal = cross(e1, e2);
  normalize(&mut normal);
  normal
}

/// Read the triple starting at `buf[base]`.
#[inline(always)]
pub(crate) fn load(buf: &[f32], base: usize) -> [f32; 3] {
  [buf[base], buf[base + 1], buf[base + 2]]
}

/// Write `v` into `buf[base..base + 3]`.
#[inline(always)]
pub(crate) fn store(buf: &mut [f32], base: usize, v: [f32; 3]) {
  buf[base..base + 3].copy_from_slice(&v);
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;
