#![allow(clippy::indexing_slicing)] // Lane loads walk fixed-size chunks

/// Fill `lanes` from consecutive little-endian words of `bytes`.
///
/// Loads `min(lanes.len(), bytes.len() / 4)` words.
#[inline(always)]
pub(crate) fn load_le_u32(bytes: &[u8], lanes: &mut [u32]) {
  let (chunks, _) = bytes.as_chunks::<4>();
  for (lane, chunk) in lanes.iter_mut().zip(chunks) {
    *lane = u32::from_le_bytes(*chunk);
  }
}

/// Fill `lanes` from consecutive little-endian words of `bytes`.
///
/// Loads `min(lanes.len(), bytes.len() / 8)` words.
#[inline(always)]
pub(crate) fn load_le_u64(bytes: &[u8], lanes: &mut [u64]) {
  let (chunks, _) = bytes.as_chunks::<8>();
  for (lane, chunk) in lanes.iter_mut().zip(chunks) {
    *lane = u64::from_le_bytes(*chunk);
  }
}

/// Serialize `lanes` little-endian into the front of `out`.
#[inline(always)]
pub(crate) fn store_le_u32(lanes: &[u32], out: &mut [u8]) {
  let (chunks, _) = out.as_chunks_mut::<4>();
  for (chunk, lane) in chunks.iter_mut().zip(lanes) {
    *chunk = lane.to_le_bytes();
  }
}

/// Serialize `lanes` little-endian into the front of `out`.
#[inline(always)]
pub(crate) fn store_le_u64(lanes: &[u64], out: &mut [u8]) {
  let (chunks, _) = out.as_chunks_mut::<8>();
  for (chunk, lane) in chunks.iter_mut().zip(lanes) {
    *chunk = lane.to_le_bytes();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn u32_round_trip_order() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0xAA, 0xBB, 0xCC, 0xDD];
    let mut lanes = [0u32; 2];
    load_le_u32(&bytes, &mut lanes);
    assert_eq!(lanes, [0x0403_0201, 0xDDCC_BBAA]);

    let mut out = [0u8; 8];
    store_le_u32(&lanes, &mut out);
    assert_eq!(out, bytes);
  }

  #[test]
  fn u64_loads_only_whole_words() {
    let bytes = [0xFFu8; 12];
    let mut lanes = [0u64; 4];
    load_le_u64(&bytes, &mut lanes);
    assert_eq!(lanes, [u64::MAX, 0, 0, 0]);
  }
}
