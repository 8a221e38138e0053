//! Configurable, bit-granular hash abstraction.
//!
//! [`HashFunction`] is the capability set shared by every engine whose
//! output length is fixed at construction rather than in the type. It is
//! object safe, so `&mut dyn HashFunction` works where a generic parameter is
//! inconvenient.

use crate::{DigestOutput, HashError};

/// Streaming hash with a runtime-configured output length.
///
/// # Call sequence
///
/// `update`/`update_bits` any number of times, then `finalize`. Finalizing
/// returns the digest *and* resets the hasher, so the same instance can
/// immediately hash the next message. Input may end on a sub-byte boundary,
/// but only the very last chunk before `finalize` may do so: once a partial
/// byte has been absorbed, further non-empty updates fail with
/// [`HashError::UpdateAfterPartialByte`] until the next `finalize` or `reset`.
///
/// # Example
///
/// ```
/// # use traits::{DigestOutput, HashError, HashFunction};
/// fn hash_twice<H: HashFunction>(h: &mut H, msg: &[u8]) -> Result<(DigestOutput, DigestOutput), HashError> {
///   let a = h.finalize_with(msg)?;
///   let b = h.finalize_with(msg)?;
///   Ok((a, b))
/// }
/// ```
pub trait HashFunction {
  /// A fresh hasher with the same configuration and no shared state.
  #[must_use]
  fn new_instance(&self) -> Self
  where
    Self: Sized;

  /// Compression block size in bits.
  fn block_size(&self) -> usize;

  /// Configured output length in bits.
  fn output_bits(&self) -> usize;

  /// Return to the initial state, keeping the configuration.
  fn reset(&mut self);

  /// Absorb `bit_len` bits of `data`, starting `bit_offset` bits in.
  ///
  /// Bits are numbered most-significant first within each byte. A zero-length
  /// window is a no-op.
  ///
  /// # Errors
  ///
  /// - [`HashError::BitRangeOutOfBounds`] if the window does not fit in `data`.
  /// - [`HashError::UpdateAfterPartialByte`] if a sub-byte tail was already absorbed.
  fn update_bits(&mut self, data: &[u8], bit_offset: usize, bit_len: usize) -> Result<(), HashError>;

  /// Absorb all of `data`.
  ///
  /// # Errors
  ///
  /// [`HashError::UpdateAfterPartialByte`] if a sub-byte tail was already absorbed.
  #[inline]
  fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
    let bits = data.len().checked_mul(8).ok_or(HashError::BitRangeOutOfBounds {
      offset: 0,
      len: data.len(),
      available: usize::MAX,
    })?;
    self.update_bits(data, 0, bits)
  }

  /// Pad, compress the final block, and return the digest.
  ///
  /// The hasher is reset afterwards.
  #[must_use = "finalize resets the hasher; dropping the digest loses it"]
  fn finalize(&mut self) -> DigestOutput;

  /// Absorb `data`, then [`finalize`](Self::finalize).
  ///
  /// # Errors
  ///
  /// Same as [`update`](Self::update).
  #[inline]
  fn finalize_with(&mut self, data: &[u8]) -> Result<DigestOutput, HashError> {
    self.update(data)?;
    Ok(self.finalize())
  }

  /// Absorb `bit_len` bits of `data` starting `bit_offset` bits in, then
  /// [`finalize`](Self::finalize).
  ///
  /// # Errors
  ///
  /// Same as [`update_bits`](Self::update_bits).
  #[inline]
  fn finalize_bits_with(&mut self, data: &[u8], bit_offset: usize, bit_len: usize) -> Result<DigestOutput, HashError> {
    self.update_bits(data, bit_offset, bit_len)?;
    Ok(self.finalize())
  }

  /// Compression block size in bytes.
  #[inline]
  fn block_len(&self) -> usize {
    self.block_size() / 8
  }
}
