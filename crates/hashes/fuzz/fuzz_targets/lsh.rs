//! Streaming and bit-window LSH updates must agree with the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use hashes::crypto::lsh::Lsh;
use libfuzzer_sys::fuzz_target;
use traits::{HashError, HashFunction};

#[derive(Arbitrary, Debug)]
struct Input {
  wide: bool,
  output_bits: u16,
  data: Vec<u8>,
  chunk_sizes: Vec<u8>,
  tail_bits: u8,
}

fuzz_target!(|input: Input| {
  let word = if input.wide { 512 } else { 256 };
  let out = usize::from(input.output_bits) % word + 1;
  let data = &input.data;

  let expected = Lsh::digest_with_params(word, out, data).unwrap();

  let mut h = Lsh::with_params(word, out).unwrap();
  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < data.len() {
    let chunk = match input.chunk_sizes.get(chunk_idx % input.chunk_sizes.len().max(1)) {
      Some(&n) => usize::from(n).max(1),
      None => 1,
    };
    let end = (offset + chunk).min(data.len());
    h.update_bits(data, offset * 8, (end - offset) * 8).unwrap();
    offset = end;
    chunk_idx += 1;
  }
  assert_eq!(h.finalize(), expected, "lsh-{word}-{out} streaming mismatch");

  // A sub-byte tail seals the hasher until the next finalize.
  if !data.is_empty() {
    let bits = data.len() * 8 - usize::from(input.tail_bits % 8);
    h.update_bits(data, 0, bits).unwrap();
    if bits % 8 != 0 {
      assert_eq!(h.update(data), Err(HashError::UpdateAfterPartialByte));
    }
    let partial = h.finalize();
    assert_eq!(partial.bit_len(), out);
  }
});
