//! Smooth vertex normals for triangle soup via spatial-hash deduplication.
//!
//! # Algorithm
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT (caller-owned)                     │
//! │  positions:   [f32]  9 floats per triangle                      │
//! │  normals:     [f32]  same length as positions (output)          │
//! │  buckets:     [i32]  pre-filled with UNASSIGNED_SLOT (-1)       │
//! │  accumulator: [f32]  zeroed, 3 floats per unique vertex         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 1: Face accumulation                    │
//! │  For each triangle:                                             │
//! │    n = normalize(cross(v1 - v0, v2 - v0))                       │
//! │    For each vertex v:                                           │
//! │      bucket = hash(v) % bucket_count                            │
//! │      If bucket unassigned: bucket ← next_slot++                 │
//! │      accumulator[slot] += n                                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 2: Normalize and scatter                │
//! │  For each input vertex i (original order, duplicates included): │
//! │    bucket = hash(v_i) % bucket_count                            │
//! │    If assigned: normalize accumulator[slot] in place            │
//! │                 normals[i] = accumulator[slot]                  │
//! │    Else:        normals[i] untouched                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Slots are handed out in the order buckets are first seen while walking
//! triangles. Re-normalizing a slot for each duplicate vertex is idempotent.
//!
//! # Aliasing
//!
//! One bucket holds one slot, with no key check. Distinct positions whose keys
//! share a bucket share a slot, and their face normals merge. Identical
//! positions always merge. Undersized tables raise the aliasing rate; they
//! never fail.

use crate::constants::{FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX};
use crate::error::NormalsError;
use crate::hash::{bucket_index, PositionHash, ReferenceHash};
use crate::vector::{add, face_normal, load, normalize, store};

/// Compute one smooth normal per input vertex using `hash3` for bucketing.
///
/// Returns the number of accumulator slots assigned.
///
/// # Panics
///
/// On caller contract violations:
/// - `positions.len()` not a multiple of 9
/// - `normals.len() != positions.len()`
/// - empty `bucket_table`
/// - `accumulator` too small for the slots assigned
pub fn compute_unique_grid_vertex_normals(
  positions: &[f32],
  normals: &mut [f32],
  bucket_table: &mut [i32],
  accumulator: &mut [f32],
) -> usize {
  compute_unique_grid_vertex_normals_with(
    &ReferenceHash,
    positions,
    normals,
    bucket_table,
    accumulator,
  )
}

/// [`compute_unique_grid_vertex_normals`] with a caller-chosen hash.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "normals::compute_unique_grid_vertex_normals")
)]
pub fn compute_unique_grid_vertex_normals_with<H: PositionHash + ?Sized>(
  hasher: &H,
  positions: &[f32],
  normals: &mut [f32],
  bucket_table: &mut [i32],
  accumulator: &mut [f32],
) -> usize {
  assert!(
    positions.len() % FLOATS_PER_TRIANGLE == 0,
    "position buffer length {} is not a multiple of {}",
    positions.len(),
    FLOATS_PER_TRIANGLE
  );
  assert_eq!(
    normals.len(),
    positions.len(),
    "normal buffer must match position buffer length"
  );

  let slots = accumulate_face_normals(hasher, positions, bucket_table, accumulator);
  scatter_vertex_normals(hasher, positions, normals, bucket_table, accumulator);

  #[cfg(feature = "tracing")]
  tracing::debug!(
    triangles = positions.len() / FLOATS_PER_TRIANGLE,
    vertices = positions.len() / FLOATS_PER_VERTEX,
    buckets = bucket_table.len(),
    slots,
    "vertex normals computed"
  );

  slots
}

/// Pass 1: sum each triangle's face normal into the slot of each of its
/// vertices, assigning slots to unseen buckets.
///
/// Returns the number of slots assigned. Slot numbering starts at 0, so
/// `bucket_table` must arrive fully unassigned.
///
/// # Panics
///
/// If `positions.len()` is not a multiple of 9, `bucket_table` is empty, or a
/// slot falls outside `accumulator`.
pub fn accumulate_face_normals<H: PositionHash + ?Sized>(
  hasher: &H,
  positions: &[f32],
  bucket_table: &mut [i32],
  accumulator: &mut [f32],
) -> usize {
  assert!(
    positions.len() % FLOATS_PER_TRIANGLE == 0,
    "position buffer length {} is not a multiple of {}",
    positions.len(),
    FLOATS_PER_TRIANGLE
  );
  assert!(!bucket_table.is_empty(), "bucket table is empty");

  let bucket_count = bucket_table.len();
  let mut next_slot = 0usize;

  for triangle in positions.chunks_exact(FLOATS_PER_TRIANGLE) {
    let vertices = [load(triangle, 0), load(triangle, 3), load(triangle, 6)];
    let normal = face_normal(vertices[0], vertices[1], vertices[2]);

    for vertex in vertices {
      let bucket = bucket_index(hasher.hash(vertex), bucket_count);

      let slot = match usize::try_from(bucket_table[bucket]) {
        Ok(slot) => slot,
        Err(_) => {
          bucket_table[bucket] = slot_entry(next_slot);
          next_slot += 1;
          next_slot - 1
        }
      };

      let base = slot * FLOATS_PER_VERTEX;
      assert!(
        base + FLOATS_PER_VERTEX <= accumulator.len(),
        "accumulator holds {} slots, slot {} requested",
        accumulator.len() / FLOATS_PER_VERTEX,
        base / FLOATS_PER_VERTEX
      );

      store(accumulator, base, add(normal, load(accumulator, base)));
    }
  }

  next_slot
}

/// Table entry for `slot`.
///
/// # Panics
///
/// If `slot` does not fit in `i32`. A wrapped entry would read back as
/// unassigned.
fn slot_entry(slot: usize) -> i32 {
  match i32::try_from(slot) {
    Ok(entry) => entry,
    Err(_) => panic!("slot index {} exceeds i32 range", slot),
  }
}

/// Pass 2: for every input vertex, normalize its slot in place and copy the
/// result to the vertex's position in `normals`.
///
/// `positions` may be any multiple of 3 floats, including vertices that pass 1
/// never saw. Vertices whose bucket is unassigned leave their normal untouched.
///
/// # Panics
///
/// If `normals.len() != positions.len()` or `bucket_table` is empty.
pub fn scatter_vertex_normals<H: PositionHash + ?Sized>(
  hasher: &H,
  positions: &[f32],
  normals: &mut [f32],
  bucket_table: &[i32],
  accumulator: &mut [f32],
) {
  assert_eq!(
    normals.len(),
    positions.len(),
    "normal buffer must match position buffer length"
  );
  assert!(!bucket_table.is_empty(), "bucket table is empty");

  let bucket_count = bucket_table.len();

  for (vertex, out) in positions
    .chunks_exact(FLOATS_PER_VERTEX)
    .zip(normals.chunks_exact_mut(FLOATS_PER_VERTEX))
  {
    let bucket = bucket_index(hasher.hash(load(vertex, 0)), bucket_count);

    let Ok(slot) = usize::try_from(bucket_table[bucket]) else {
      continue;
    };

    let base = slot * FLOATS_PER_VERTEX;
    let mut normal = load(accumulator, base);
    normalize(&mut normal);
    store(accumulator, base, normal);
    out.copy_from_slice(&normal);
  }
}

/// Check buffer shapes against the accumulator contract.
///
/// The bucket table must be fully unassigned (every entry negative), and the
/// accumulator is checked against the worst case, one slot per input vertex,
/// so a passing check guarantees the core cannot run out of slots.
pub fn validate_buffers(
  positions: &[f32],
  normals: &[f32],
  bucket_table: &[i32],
  accumulator: &[f32],
) -> Result<(), NormalsError> {
  if positions.len() % FLOATS_PER_TRIANGLE != 0 {
    return Err(NormalsError::PositionsNotTriangles {
      len: positions.len(),
    });
  }
  if normals.len() != positions.len() {
    return Err(NormalsError::NormalLengthMismatch {
      positions: positions.len(),
      normals: normals.len(),
    });
  }
  if bucket_table.is_empty() {
    return Err(NormalsError::EmptyBucketTable);
  }
  if let Some(index) = bucket_table.iter().position(|&s| s >= 0) {
    return Err(NormalsError::BucketTableNotReset {
      index,
      slot: bucket_table[index],
    });
  }
  // One float triple per vertex
  let required = positions.len();
  if accumulator.len() < required {
    return Err(NormalsError::AccumulatorTooSmall {
      required,
      available: accumulator.len(),
    });
  }
  Ok(())
}

#[cfg(test)]
#[path = "accumulator_test.rs"]
mod accumulator_test;
