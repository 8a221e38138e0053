//! Error types for hashing and MAC operations.
//!
//! Minimal, allocation-free error types. Verification failures stay opaque to
//! avoid leaking information; configuration and call-sequence errors carry the
//! offending values so callers can report them.

use core::fmt;

/// Verification failed.
///
/// Returned when a MAC tag does not match. Intentionally opaque.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: &[u8; 32], expected: &[u8; 32]) -> Result<(), VerificationError> {
///   let diff = computed.iter().zip(expected).fold(0u8, |acc, (a, b)| acc | (a ^ b));
///   if diff == 0 { Ok(()) } else { Err(VerificationError::new()) }
/// }
///
/// let a = [0u8; 32];
/// let b = [1u8; 32];
/// assert!(verify(&a, &b).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}

/// Rejected hash configuration or call sequence.
///
/// Every variant is reported at the point of violation. A call that returns
/// one of these leaves the hasher exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HashError {
  /// The requested word width is neither 256 nor 512 bits.
  UnsupportedWordWidth {
    /// Requested width in bits.
    bits: usize,
  },
  /// The requested output length is outside `1..=max`.
  InvalidOutputLength {
    /// Requested output length in bits.
    bits: usize,
    /// Largest output length the width supports.
    max: usize,
  },
  /// More input was supplied after a sub-byte tail had been absorbed.
  ///
  /// A trailing partial byte must be the last input before finalization.
  UpdateAfterPartialByte,
  /// The bit window `offset..offset + len` does not fit inside the input.
  BitRangeOutOfBounds {
    /// Starting bit offset.
    offset: usize,
    /// Requested length in bits.
    len: usize,
    /// Bits available in the input.
    available: usize,
  },
  /// A MAC was handed a hash whose block size it cannot key.
  InvalidBlockSize {
    /// Block size reported by the hash, in bits.
    bits: usize,
  },
}

impl fmt::Display for HashError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::UnsupportedWordWidth { bits } => {
        write!(f, "unsupported word width: {bits} bits (expected 256 or 512)")
      }
      Self::InvalidOutputLength { bits, max } => {
        write!(f, "invalid output length: {bits} bits (expected 1..={max})")
      }
      Self::UpdateAfterPartialByte => f.write_str("update after a partial-byte tail is not allowed"),
      Self::BitRangeOutOfBounds { offset, len, available } => write!(
        f,
        "bit range {offset}+{len} exceeds input of {available} bits"
      ),
      Self::InvalidBlockSize { bits } => write!(f, "unsupported hash block size: {bits} bits"),
    }
  }
}

impl core::error::Error for HashError {}
