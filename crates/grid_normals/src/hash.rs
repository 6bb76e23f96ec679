//! Position hashing for vertex deduplication.
//!
//! Maps a 3D float position to a `u32` key, which is reduced to a bucket by
//! plain modulo. There is no probing or chaining: distinct positions whose
//! keys land in the same bucket are treated as one vertex.
//!
//! # Key Distribution
//!
//! `hash3` produces its key from an f32 in [0, 1) scaled by 2^32. An f32 only
//! carries 24 mantissa bits, so most keys are multiples of 256:
//!
//! ```text
//! fract ∈ [0.5, 1)   →  key = m · 2^8   (low 8 bits zero)
//! fract ∈ [0.25, 0.5) →  key = m · 2^7
//! ...
//! ```
//!
//! Power-of-two bucket counts up to 256 therefore put nearly every vertex in
//! bucket 0. `NormalsConfig` sizes tables to a prime for this reason.
//!
//! `hash3` is also exactly 0 whenever both `fract(x · 0.1031)` and
//! `fract(z · 0.1031)` are 0 (e.g. every point on the Y axis), regardless of y.

use crate::constants::{HASH_OFFSET, HASH_RANGE, HASH_SCALE};
use crate::vector::{dot2, fract};

/// Fractional-noise spatial hash, bit-exact with the single-precision
/// reference.
///
/// All arithmetic is f32 in the reference operation order. The three dot
/// products are taken from the unmodified fractional triple before any of
/// them is added back.
#[inline]
pub fn hash3(x: f32, y: f32, z: f32) -> u32 {
  let mut px = fract(x * HASH_SCALE);
  let mut py = fract(y * HASH_SCALE);
  let mut pz = fract(z * HASH_SCALE);

  let dx = dot2(px, py, pz + HASH_OFFSET, HASH_OFFSET);
  let dy = dot2(py, pz, px + HASH_OFFSET, HASH_OFFSET);
  let dz = dot2(pz, px, py + HASH_OFFSET, HASH_OFFSET);

  px += dx;
  py += dy;
  pz += dz;

  // Saturating cast; fract < 1 keeps this in range for finite input
  (fract((px + py) * pz) * HASH_RANGE) as u32
}

/// Reduce a hash key to a bucket in a table of `bucket_count` entries.
///
/// `bucket_count` must be non-zero.
#[inline(always)]
pub fn bucket_index(key: u32, bucket_count: usize) -> usize {
  key as usize % bucket_count
}

/// Hash function seam for the accumulator.
///
/// Implementations must be pure: identical positions (by float equality) must
/// always produce identical keys.
pub trait PositionHash: Sync {
  fn hash(&self, position: [f32; 3]) -> u32;
}

/// `hash3`, the reference hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReferenceHash;

impl PositionHash for ReferenceHash {
  #[inline(always)]
  fn hash(&self, position: [f32; 3]) -> u32 {
    hash3(position[0], position[1], position[2])
  }
}

/// Bit-pattern hash: FNV-1a over the coordinate bits, finished with the
/// murmur3 32-bit avalanche.
///
/// Not output-compatible with `hash3`. Uses all 32 key bits, so it tolerates
/// power-of-two tables and does not collapse the Y axis onto one key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitMixHash;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

impl PositionHash for BitMixHash {
  #[inline]
  fn hash(&self, position: [f32; 3]) -> u32 {
    let mut h = FNV_OFFSET;
    for c in position {
      // -0.0 + 0.0 == +0.0, so equal floats share a bit pattern
      h = (h ^ (c + 0.0).to_bits()).wrapping_mul(FNV_PRIME);
    }
    fmix32(h)
  }
}

#[inline(always)]
fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// Hash selection for configuration-driven entry points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashMode {
  /// `hash3`: matches reference output, including its aliasing.
  #[default]
  Reference,

  /// `BitMixHash`: better key spread, different aliasing pattern.
  BitMix,
}

#[cfg(test)]
#[path = "hash_test.rs"]
mod hash_test;
