use hashes::crypto::lsh::{Algorithm, Lsh, Lsh256, Lsh512};
use proptest::prelude::*;
use traits::{HashError, HashFunction};

fn pattern(len: usize) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = 0x243f_6a88_85a3_08d3u64;
  for b in &mut out {
    x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    *b = (x >> 56) as u8;
  }
  out
}

#[test]
fn single_byte_updates_match_oneshot() {
  let data = pattern(700);
  for alg in Algorithm::ALL {
    let mut h = Lsh::new(alg);
    for b in &data {
      h.update(core::slice::from_ref(b)).unwrap();
    }
    assert_eq!(h.finalize(), Lsh::digest(alg, &data), "{alg}");
  }
}

#[test]
fn block_aligned_splits_match_oneshot() {
  let data = pattern(1024);
  for alg in Algorithm::ALL {
    let block = Lsh::new(alg).block_len();
    for split in [block - 1, block, block + 1, 2 * block] {
      let mut h = Lsh::new(alg);
      h.update(&data[..split]).unwrap();
      h.update(&data[split..]).unwrap();
      assert_eq!(h.finalize(), Lsh::digest(alg, &data), "{alg} split {split}");
    }
  }
}

#[test]
fn partial_tail_blocks_further_updates() {
  let mut h = Lsh512::default();
  h.update_bits(&[0xFF, 0x00], 0, 12).unwrap();
  assert_eq!(h.update(b"more"), Err(HashError::UpdateAfterPartialByte));
  assert_eq!(h.update(b""), Ok(()));

  let mut expected = Lsh512::default();
  expected.update_bits(&[0xFF, 0x0F], 0, 12).unwrap();
  assert_eq!(h.finalize(), expected.finalize());

  // finalize cleared the tail
  assert!(h.update(b"more").is_ok());
}

#[test]
fn instances_are_independent() {
  let mut a = Lsh256::new(256).unwrap();
  a.update(b"shared prefix").unwrap();
  let mut b = a.clone();
  a.update(b" then a").unwrap();
  b.update(b" then b").unwrap();
  assert_ne!(a.finalize(), b.finalize());
}

proptest! {
  #[test]
  fn arbitrary_chunking_matches_oneshot(
    word in prop_oneof![Just(256usize), Just(512usize)],
    out in 1usize..=256,
    data in proptest::collection::vec(any::<u8>(), 0..4096),
  ) {
    let expected = Lsh::digest_with_params(word, out, &data).unwrap();

    let mut h = Lsh::with_params(word, out).unwrap();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]).unwrap();
      i = end;
    }
    prop_assert_eq!(h.finalize(), expected);
  }
}
