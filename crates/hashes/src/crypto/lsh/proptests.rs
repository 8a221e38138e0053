extern crate std;

use std::vec::Vec;

use proptest::prelude::*;
use traits::HashFunction;

use super::*;

/// `data` shifted left by `shift` bits, most-significant bit first.
fn shift_left(data: &[u8], shift: usize) -> Vec<u8> {
  (0..data.len())
    .map(|i| {
      let hi = data[i] << shift;
      let lo = if shift == 0 { 0 } else { data.get(i + 1).copied().unwrap_or(0) >> (8 - shift) };
      hi | lo
    })
    .collect()
}

fn any_params() -> impl Strategy<Value = (usize, usize)> {
  prop_oneof![(Just(256usize), 1usize..=256), (Just(512usize), 1usize..=512)]
}

proptest! {
  #[test]
  fn streaming_matches_oneshot(
    (word, out) in any_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=1200),
    chunk in 1usize..=300,
  ) {
    let oneshot = Lsh::digest_with_params(word, out, &data).unwrap();

    let mut h = Lsh::with_params(word, out).unwrap();
    for part in data.chunks(chunk) {
      h.update(part).unwrap();
    }
    prop_assert_eq!(h.finalize(), oneshot);
  }

  #[test]
  fn bit_windows_split_anywhere(
    alg in proptest::sample::select(Algorithm::ALL.to_vec()),
    data in proptest::collection::vec(any::<u8>(), 1..=600),
    bits in any::<usize>(),
    split in any::<usize>(),
  ) {
    let total = bits % (data.len() * 8 + 1);
    // Only the last window may end off a byte boundary.
    let first = (split % (total / 8 + 1)) * 8;

    let mut h = Lsh::new(alg);
    h.update_bits(&data, 0, first).unwrap();
    h.update_bits(&data, first, total - first).unwrap();
    prop_assert_eq!(h.finalize(), Lsh::digest_bits(alg, &data, 0, total).unwrap());
  }

  #[test]
  fn unaligned_offset_equals_shifted_input(
    alg in proptest::sample::select(Algorithm::ALL.to_vec()),
    data in proptest::collection::vec(any::<u8>(), 1..=600),
    shift in 0usize..8,
    len in any::<usize>(),
  ) {
    let len = len % (data.len() * 8 - shift + 1);
    let shifted = shift_left(&data, shift);
    prop_assert_eq!(
      Lsh::digest_bits(alg, &data, shift, len).unwrap(),
      Lsh::digest_bits(alg, &shifted, 0, len).unwrap()
    );
  }

  #[test]
  fn reset_is_idempotent(
    (word, out) in any_params(),
    garbage in proptest::collection::vec(any::<u8>(), 0..=600),
    garbage_bits in 0usize..8,
    data in proptest::collection::vec(any::<u8>(), 0..=600),
  ) {
    let mut h = Lsh::with_params(word, out).unwrap();
    let first = h.finalize_with(&data).unwrap();

    h.update(&garbage).unwrap();
    if !garbage.is_empty() {
      h.update_bits(&garbage, 0, garbage_bits).unwrap();
    }
    h.reset();
    prop_assert_eq!(h.finalize_with(&data).unwrap(), first);
  }

  #[test]
  fn low_bits_of_last_byte_are_zero(
    (word, out) in any_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=300),
  ) {
    let digest = Lsh::digest_with_params(word, out, &data).unwrap();
    prop_assert_eq!(digest.bit_len(), out);
    prop_assert_eq!(digest.len(), out.div_ceil(8));
    let rem = out % 8;
    if rem != 0 {
      let last = digest.as_bytes()[digest.len() - 1];
      prop_assert_eq!(last & (0xffu8 >> rem), 0);
    }
  }
}
