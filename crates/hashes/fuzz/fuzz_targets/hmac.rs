//! Keyed HMAC-LSH reuse and chunking must agree with the one-shot MAC.

#![no_main]

use arbitrary::Arbitrary;
use hashes::crypto::{
  hmac::{self, Hmac},
  lsh::Algorithm,
};
use libfuzzer_sys::fuzz_target;
use traits::Mac;

#[derive(Arbitrary, Debug)]
struct Input {
  algorithm: u8,
  key: Vec<u8>,
  messages: Vec<Vec<u8>>,
  chunk: u8,
}

fuzz_target!(|input: Input| {
  let alg = Algorithm::ALL[usize::from(input.algorithm) % Algorithm::ALL.len()];
  let chunk = usize::from(input.chunk).max(1);

  let mut mac = Hmac::with_algorithm(alg, &input.key).unwrap();
  for msg in &input.messages {
    let expected = hmac::mac(alg, &input.key, msg).unwrap();
    for part in msg.chunks(chunk) {
      mac.update(part).unwrap();
    }
    assert_eq!(mac.do_final().unwrap(), expected, "{alg} keyed reuse mismatch");
  }
});
