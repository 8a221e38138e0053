//! HMAC (RFC 2104) over any [`HashFunction`].
//!
//! # Quick Start
//!
//! ```rust
//! use hashes::crypto::{hmac::{self, Hmac}, lsh::Algorithm};
//! use traits::Mac;
//!
//! let tag = hmac::mac(Algorithm::Lsh256_256, b"key", b"message")?;
//!
//! let mut mac = Hmac::with_algorithm(Algorithm::Lsh256_256, b"key")?;
//! mac.update(b"mess")?;
//! mac.update(b"age")?;
//! assert!(mac.verify(&tag).is_ok());
//! # Ok::<(), traits::HashError>(())
//! ```

#![allow(clippy::indexing_slicing)] // Pad windows are bounded by the validated block length

use core::fmt;

use traits::{DigestOutput, HashError, HashFunction, Mac};
use zeroize::Zeroize;

use crate::crypto::lsh::{Algorithm, Lsh};

/// Largest supported hash block, in bytes.
const MAX_BLOCK_LEN: usize = 256;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC keyed at construction.
///
/// A single hash instance serves both the inner and the outer pass. After
/// [`do_final`](Mac::do_final) the instance is ready for the next message
/// under the same key.
#[derive(Clone)]
pub struct Hmac<H: HashFunction> {
  hash: H,
  ipad: [u8; MAX_BLOCK_LEN],
  opad: [u8; MAX_BLOCK_LEN],
  block_len: usize,
}

impl<H: HashFunction> Hmac<H> {
  /// Key a MAC over a fresh instance of `hash`'s configuration.
  ///
  /// Keys longer than the hash block are hashed first.
  ///
  /// # Errors
  ///
  /// [`HashError::InvalidBlockSize`] if the hash block is empty, not a whole
  /// number of bytes, or larger than 2048 bits.
  pub fn new(hash: &H, key: &[u8]) -> Result<Self, HashError> {
    let bits = hash.block_size();
    if bits == 0 || bits % 8 != 0 || bits / 8 > MAX_BLOCK_LEN {
      log::debug!("hmac: rejected hash with {bits}-bit block");
      return Err(HashError::InvalidBlockSize { bits });
    }

    let mut mac = Self {
      hash: hash.new_instance(),
      ipad: [0u8; MAX_BLOCK_LEN],
      opad: [0u8; MAX_BLOCK_LEN],
      block_len: bits / 8,
    };
    mac.init(key)?;
    Ok(mac)
  }

  /// Tag length in bits.
  #[inline]
  #[must_use]
  pub fn output_bits(&self) -> usize {
    self.hash.output_bits()
  }

  fn load_pads(&mut self, key: &[u8]) {
    self.ipad.zeroize();
    self.opad.zeroize();
    let n = self.block_len;
    self.ipad[..n].fill(IPAD);
    self.opad[..n].fill(OPAD);
    for ((i, o), k) in self.ipad[..n].iter_mut().zip(self.opad[..n].iter_mut()).zip(key) {
      *i ^= k;
      *o ^= k;
    }
  }
}

impl Hmac<Lsh> {
  /// Key a MAC over one of the standard LSH configurations.
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying hash.
  pub fn with_algorithm(algorithm: Algorithm, key: &[u8]) -> Result<Self, HashError> {
    Self::new(&Lsh::new(algorithm), key)
  }
}

impl<H: HashFunction> Mac for Hmac<H> {
  fn init(&mut self, key: &[u8]) -> Result<(), HashError> {
    if key.len() > self.block_len {
      log::trace!("hmac: key exceeds the {}-byte block, hashing it", self.block_len);
      self.hash.reset();
      let mut hashed = self.hash.finalize_with(key)?;
      self.load_pads(hashed.as_bytes());
      hashed.zeroize();
    } else {
      self.load_pads(key);
    }
    self.reset()
  }

  fn reset(&mut self) -> Result<(), HashError> {
    self.hash.reset();
    self.hash.update(&self.ipad[..self.block_len])
  }

  #[inline]
  fn update(&mut self, msg: &[u8]) -> Result<(), HashError> {
    self.hash.update(msg)
  }

  fn do_final(&mut self) -> Result<DigestOutput, HashError> {
    let inner = self.hash.finalize();
    self.hash.update(&self.opad[..self.block_len])?;
    self.hash.update(&inner)?;
    let tag = self.hash.finalize();
    self.reset()?;
    Ok(tag)
  }
}

impl<H: HashFunction> Drop for Hmac<H> {
  fn drop(&mut self) {
    self.ipad.zeroize();
    self.opad.zeroize();
  }
}

impl<H: HashFunction + fmt::Debug> fmt::Debug for Hmac<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Hmac")
      .field("hash", &self.hash)
      .field("block_len", &self.block_len)
      .finish_non_exhaustive()
  }
}

/// One-shot HMAC of `msg` under `key`.
///
/// # Errors
///
/// Propagates failures of the underlying hash.
pub fn mac(algorithm: Algorithm, key: &[u8], msg: &[u8]) -> Result<DigestOutput, HashError> {
  Hmac::with_algorithm(algorithm, key)?.do_final_with(msg)
}


// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests {
  extern crate std;

  use std::vec::Vec;

  use proptest::prelude::*;

  use super::*;

  proptest! {
    #[test]
    fn chunked_updates_match_oneshot(
      alg in proptest::sample::select(Algorithm::ALL.to_vec()),
      key in proptest::collection::vec(any::<u8>(), 0..=300),
      msg in proptest::collection::vec(any::<u8>(), 0..=1024),
      chunk in 1usize..=200,
    ) {
      let expected = mac(alg, &key, &msg).unwrap();

      let mut m = Hmac::with_algorithm(alg, &key).unwrap();
      for part in msg.chunks(chunk) {
        m.update(part).unwrap();
      }
      prop_assert_eq!(m.do_final().unwrap(), expected);
      // Same key, same message, no re-init.
      prop_assert_eq!(m.do_final_with(&msg).unwrap(), expected);
    }

    #[test]
    fn oversized_key_is_replaced_by_its_digest(
      alg in proptest::sample::select(Algorithm::ALL.to_vec()),
      extra in 1usize..=200,
      msg in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
      let block = Lsh::new(alg).block_len();
      let key: Vec<u8> = (0..block + extra).map(|i| (i * 7) as u8).collect();
      let hashed = Lsh::digest(alg, &key);
      prop_assert_eq!(mac(alg, &key, &msg).unwrap(), mac(alg, hashed.as_bytes(), &msg).unwrap());
    }
  }
}
