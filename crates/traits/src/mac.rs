//! Message authentication code trait.

use crate::{DigestOutput, HashError, VerificationError};

/// Keyed message authentication code.
///
/// After [`do_final`](Self::do_final) the MAC is ready for a new message under
/// the same key; [`init`](Self::init) is only needed to change the key.
pub trait Mac {
  /// Install `key` and start a new message.
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying hash.
  fn init(&mut self, key: &[u8]) -> Result<(), HashError>;

  /// Discard any message absorbed so far, keeping the key.
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying hash.
  fn reset(&mut self) -> Result<(), HashError>;

  /// Absorb message bytes.
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying hash.
  fn update(&mut self, msg: &[u8]) -> Result<(), HashError>;

  /// Compute the tag for everything absorbed since the last reset.
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying hash.
  fn do_final(&mut self) -> Result<DigestOutput, HashError>;

  /// Absorb `msg`, then [`do_final`](Self::do_final).
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying hash.
  #[inline]
  fn do_final_with(&mut self, msg: &[u8]) -> Result<DigestOutput, HashError> {
    self.update(msg)?;
    self.do_final()
  }

  /// Finish the current message and compare its tag against `expected`.
  ///
  /// The byte comparison does not exit early on the first mismatch.
  ///
  /// # Errors
  ///
  /// [`VerificationError`] if the tags differ or the hash fails.
  fn verify(&mut self, expected: &[u8]) -> Result<(), VerificationError> {
    let tag = self.do_final().map_err(|_| VerificationError::new())?;
    if tag.len() != expected.len() {
      return Err(VerificationError::new());
    }
    let diff = tag.iter().zip(expected).fold(0u8, |acc, (a, b)| acc | (a ^ b));
    if diff == 0 {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}
