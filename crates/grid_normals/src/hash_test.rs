use super::*;

#[test]
fn test_hash3_reference_values() {
  // Single-precision reference output
  assert_eq!(hash3(0.0, 0.0, 0.0), 0);
  assert_eq!(hash3(1.0, 0.0, 0.0), 3263983616);
  assert_eq!(hash3(1.0, 2.0, 3.0), 513146880);
  assert_eq!(hash3(-5.5, 0.0, 12.25), 3761897472);
  assert_eq!(hash3(0.5, 0.0, 0.5), 3312836608);
}

#[test]
fn test_hash3_deterministic() {
  let points = [
    [0.0, 0.0, 0.0],
    [1.5, -2.25, 8.0],
    [-100.125, 3.0, 0.0625],
    [12345.0, -0.5, 42.0],
  ];

  for p in points {
    let first = hash3(p[0], p[1], p[2]);
    for _ in 0..4 {
      assert_eq!(hash3(p[0], p[1], p[2]), first, "Non-deterministic for {:?}", p);
    }
  }
}

#[test]
fn test_hash3_zero_on_y_axis() {
  // px == pz == 0 forces the final product to zero
  for y in [0.0, 1.0, -7.5, 100.0] {
    assert_eq!(hash3(0.0, y, 0.0), 0, "y = {}", y);
  }
}

#[test]
fn test_hash3_mirrors_flat_xz() {
  // With y = 0 the mixing is symmetric in x and z; these pairs collide exactly
  assert_eq!(hash3(0.0, 0.0, 1.0), hash3(1.0, 0.0, 0.0));
  assert_eq!(hash3(0.0, 0.0, 2.0), hash3(2.0, 0.0, 0.0));
  assert_eq!(hash3(0.0, 0.0, 3.0), hash3(3.0, 0.0, 0.0));
}

#[test]
fn test_hash3_keys_are_coarse() {
  // f32 precision leaves the low 8 bits of these keys empty
  for x in 0..4 {
    for z in 0..4 {
      let key = hash3(x as f32, 0.0, z as f32);
      assert_eq!(key % 256, 0, "key {} for ({}, 0, {})", key, x, z);
      assert_eq!(bucket_index(key, 64), 0);
    }
  }
}

#[test]
fn test_prime_table_spreads_reference_keys() {
  let mut buckets = std::collections::HashSet::new();
  let mut keys = std::collections::HashSet::new();
  for x in 0..4 {
    for z in 0..4 {
      let key = hash3(x as f32, 0.0, z as f32);
      keys.insert(key);
      buckets.insert(bucket_index(key, 257));
    }
  }

  // 16 points, 3 mirrored pairs share a key
  assert_eq!(keys.len(), 13);
  assert_eq!(buckets.len(), 13);
}

#[test]
fn test_bucket_index_in_range() {
  for key in [0u32, 1, 255, 256, 3263983616, u32::MAX] {
    for count in [1usize, 7, 8, 67, 1021] {
      assert!(bucket_index(key, count) < count);
    }
  }
  assert_eq!(bucket_index(3263983616, 67), 25);
}

#[test]
fn test_reference_hash_trait_matches_hash3() {
  let p = [1.0, 2.0, 3.0];
  assert_eq!(ReferenceHash.hash(p), hash3(1.0, 2.0, 3.0));
}

#[test]
fn test_bitmix_values() {
  assert_eq!(BitMixHash.hash([0.0, 0.0, 0.0]), 1577672556);
  assert_eq!(BitMixHash.hash([1.0, 0.0, 0.0]), 1153384347);
  assert_eq!(BitMixHash.hash([0.0, 1.0, 0.0]), 2671838860);
}

#[test]
fn test_bitmix_signed_zero() {
  assert_eq!(
    BitMixHash.hash([-0.0, 0.0, -0.0]),
    BitMixHash.hash([0.0, 0.0, 0.0])
  );
}

#[test]
fn test_bitmix_separates_y_axis() {
  assert_ne!(
    BitMixHash.hash([0.0, 0.0, 0.0]),
    BitMixHash.hash([0.0, 1.0, 0.0])
  );
}

#[test]
fn test_hash_mode_default_is_reference() {
  assert_eq!(HashMode::default(), HashMode::Reference);
}
