//! LSH hash family (KS X 3262).
//!
//! This module provides:
//! - [`Lsh256`] - 32-bit lanes, any output length in `1..=256` bits
//! - [`Lsh512`] - 64-bit lanes, any output length in `1..=512` bits
//! - [`Lsh`] - either engine, chosen at runtime from an [`Algorithm`] or a
//!   `(word_bits, output_bits)` pair
//! - [`Lsh256_224`], [`Lsh256_256`], [`Lsh512_224`], [`Lsh512_256`],
//!   [`Lsh512_384`], [`Lsh512_512`] - typed fixed-length digests
//!
//! # Quick Start
//!
//! ```rust
//! use hashes::crypto::lsh::{Algorithm, Lsh, Lsh256_256};
//! use traits::{Digest, HashFunction};
//!
//! let oneshot = Lsh::digest(Algorithm::Lsh256_256, b"abc");
//! assert_eq!(oneshot.as_bytes(), &Lsh256_256::digest(b"abc"));
//!
//! let mut h = Lsh::new(Algorithm::Lsh256_256);
//! h.update(b"a")?;
//! h.update(b"bc")?;
//! assert_eq!(h.finalize(), oneshot);
//! # Ok::<(), traits::HashError>(())
//! ```

mod buffer;
mod fixed;
mod lsh256;
mod lsh512;

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;

use core::{fmt, str::FromStr};

pub use fixed::{Lsh256_224, Lsh256_256, Lsh512_224, Lsh512_256, Lsh512_384, Lsh512_512};
pub use lsh256::Lsh256;
pub use lsh512::Lsh512;
use traits::{DigestOutput, HashError, HashFunction};

// ─────────────────────────────────────────────────────────────────────────────
// Shared permutation tables
// ─────────────────────────────────────────────────────────────────────────────

/// Source column in the row two steps back for each expanded schedule word.
pub(crate) const MSG_PERM: [usize; 16] = [3, 2, 0, 1, 7, 4, 5, 6, 11, 10, 8, 9, 15, 12, 13, 14];

/// `cv[i] = t[WORD_PERM[i]]` at the end of every step.
pub(crate) const WORD_PERM: [usize; 16] = [6, 4, 5, 7, 12, 15, 14, 13, 2, 0, 1, 3, 8, 11, 10, 9];

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// The six standard LSH configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// LSH-256-224
  Lsh256_224,
  /// LSH-256-256
  Lsh256_256,
  /// LSH-512-224
  Lsh512_224,
  /// LSH-512-256
  Lsh512_256,
  /// LSH-512-384
  Lsh512_384,
  /// LSH-512-512
  Lsh512_512,
}

impl Algorithm {
  /// Every standard configuration, narrow engine first.
  pub const ALL: [Self; 6] = [
    Self::Lsh256_224,
    Self::Lsh256_256,
    Self::Lsh512_224,
    Self::Lsh512_256,
    Self::Lsh512_384,
    Self::Lsh512_512,
  ];

  /// Engine width: 256 for the 32-bit-lane engine, 512 for the 64-bit-lane engine.
  #[inline]
  #[must_use]
  pub const fn word_bits(self) -> usize {
    match self {
      Self::Lsh256_224 | Self::Lsh256_256 => 256,
      Self::Lsh512_224 | Self::Lsh512_256 | Self::Lsh512_384 | Self::Lsh512_512 => 512,
    }
  }

  /// Digest length in bits.
  #[inline]
  #[must_use]
  pub const fn output_bits(self) -> usize {
    match self {
      Self::Lsh256_224 | Self::Lsh512_224 => 224,
      Self::Lsh256_256 | Self::Lsh512_256 => 256,
      Self::Lsh512_384 => 384,
      Self::Lsh512_512 => 512,
    }
  }

  /// Digest length in bytes.
  #[inline]
  #[must_use]
  pub const fn output_len(self) -> usize {
    self.output_bits() / 8
  }

  /// Canonical name, e.g. `LSH-512-384`.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Lsh256_224 => "LSH-256-224",
      Self::Lsh256_256 => "LSH-256-256",
      Self::Lsh512_224 => "LSH-512-224",
      Self::Lsh512_256 => "LSH-512-256",
      Self::Lsh512_384 => "LSH-512-384",
      Self::Lsh512_512 => "LSH-512-512",
    }
  }
}

impl fmt::Display for Algorithm {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Error returned when parsing an unknown [`Algorithm`] name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseAlgorithmError;

impl fmt::Display for ParseAlgorithmError {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown LSH algorithm name")
  }
}

impl core::error::Error for ParseAlgorithmError {}

/// Compare names ignoring ASCII case and `-`/`_` separators.
fn same_name(a: &str, b: &str) -> bool {
  fn folded(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.bytes()
      .filter(|b| !matches!(b, b'-' | b'_'))
      .map(|b| b.to_ascii_lowercase())
  }
  folded(a).eq(folded(b))
}

impl FromStr for Algorithm {
  type Err = ParseAlgorithmError;

  /// Accepts `LSH-256-224`, `lsh256_224`, `Lsh512-512` and similar spellings.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|alg| same_name(s, alg.name()))
      .ok_or(ParseAlgorithmError)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime-selected engine
// ─────────────────────────────────────────────────────────────────────────────

/// An LSH hasher whose engine and output length are chosen at runtime.
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Lsh {
  /// 32-bit lanes, 1024-bit blocks.
  Narrow(Lsh256),
  /// 64-bit lanes, 2048-bit blocks.
  Wide(Lsh512),
}

impl Lsh {
  /// A fresh hasher for a standard configuration.
  #[must_use]
  pub fn new(algorithm: Algorithm) -> Self {
    log::trace!("lsh: constructing {algorithm}");
    match algorithm.word_bits() {
      256 => Self::Narrow(Lsh256::with_valid_length(algorithm.output_bits())),
      _ => Self::Wide(Lsh512::with_valid_length(algorithm.output_bits())),
    }
  }

  /// A fresh hasher for an explicit engine width and output length.
  ///
  /// `word_bits` selects the engine (256 or 512); `output_bits` must lie in
  /// `1..=word_bits`.
  ///
  /// # Errors
  ///
  /// - [`HashError::UnsupportedWordWidth`] for any width other than 256 or 512.
  /// - [`HashError::InvalidOutputLength`] for an output length outside the range.
  pub fn with_params(word_bits: usize, output_bits: usize) -> Result<Self, HashError> {
    log::trace!("lsh: constructing {word_bits}-bit engine with {output_bits}-bit output");
    match word_bits {
      256 => Lsh256::new(output_bits).map(Self::Narrow),
      512 => Lsh512::new(output_bits).map(Self::Wide),
      bits => {
        log::debug!("lsh: rejected word width of {bits} bits");
        Err(HashError::UnsupportedWordWidth { bits })
      }
    }
  }

  /// One-shot digest of `data`.
  #[must_use]
  pub fn digest(algorithm: Algorithm, data: &[u8]) -> DigestOutput {
    let mut h = Self::new(algorithm);
    match &mut h {
      Self::Narrow(inner) => inner.absorb(data),
      Self::Wide(inner) => inner.absorb(data),
    }
    h.finalize()
  }

  /// One-shot digest of `bit_len` bits of `data`, starting `bit_offset` bits in.
  ///
  /// # Errors
  ///
  /// [`HashError::BitRangeOutOfBounds`] if the window does not fit in `data`.
  pub fn digest_bits(
    algorithm: Algorithm,
    data: &[u8],
    bit_offset: usize,
    bit_len: usize,
  ) -> Result<DigestOutput, HashError> {
    Self::new(algorithm).finalize_bits_with(data, bit_offset, bit_len)
  }

  /// One-shot digest with an explicit engine width and output length.
  ///
  /// # Errors
  ///
  /// Same as [`with_params`](Self::with_params).
  pub fn digest_with_params(word_bits: usize, output_bits: usize, data: &[u8]) -> Result<DigestOutput, HashError> {
    Self::with_params(word_bits, output_bits)?.finalize_with(data)
  }

  /// One-shot digest of a bit window with an explicit engine width and output length.
  ///
  /// # Errors
  ///
  /// Same as [`with_params`](Self::with_params), plus
  /// [`HashError::BitRangeOutOfBounds`] if the window does not fit in `data`.
  pub fn digest_bits_with_params(
    word_bits: usize,
    output_bits: usize,
    data: &[u8],
    bit_offset: usize,
    bit_len: usize,
  ) -> Result<DigestOutput, HashError> {
    Self::with_params(word_bits, output_bits)?.finalize_bits_with(data, bit_offset, bit_len)
  }

  /// Digest length in bytes, rounded up.
  #[inline]
  #[must_use]
  pub const fn output_len(&self) -> usize {
    match self {
      Self::Narrow(h) => h.output_len(),
      Self::Wide(h) => h.output_len(),
    }
  }
}

impl From<Algorithm> for Lsh {
  #[inline]
  fn from(algorithm: Algorithm) -> Self {
    Self::new(algorithm)
  }
}

impl HashFunction for Lsh {
  fn new_instance(&self) -> Self {
    match self {
      Self::Narrow(h) => Self::Narrow(h.new_instance()),
      Self::Wide(h) => Self::Wide(h.new_instance()),
    }
  }

  #[inline]
  fn block_size(&self) -> usize {
    match self {
      Self::Narrow(h) => h.block_size(),
      Self::Wide(h) => h.block_size(),
    }
  }

  #[inline]
  fn output_bits(&self) -> usize {
    match self {
      Self::Narrow(h) => h.output_bits(),
      Self::Wide(h) => h.output_bits(),
    }
  }

  #[inline]
  fn reset(&mut self) {
    match self {
      Self::Narrow(h) => h.reset(),
      Self::Wide(h) => h.reset(),
    }
  }

  #[inline]
  fn update_bits(&mut self, data: &[u8], bit_offset: usize, bit_len: usize) -> Result<(), HashError> {
    match self {
      Self::Narrow(h) => h.update_bits(data, bit_offset, bit_len),
      Self::Wide(h) => h.update_bits(data, bit_offset, bit_len),
    }
  }

  #[inline]
  fn finalize(&mut self) -> DigestOutput {
    match self {
      Self::Narrow(h) => h.finalize_output(),
      Self::Wide(h) => h.finalize_output(),
    }
  }
}
