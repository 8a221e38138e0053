//! Variable-length digest output.

use core::{fmt, ops::Deref};

/// Largest digest, in bytes, any hash in this workspace produces.
pub const MAX_OUTPUT_LEN: usize = 64;

/// A digest whose length is chosen at runtime.
///
/// Stored inline (no allocation). The length is tracked in bits so outputs
/// that are not a whole number of bytes keep their exact size; in that case
/// only the high `bit_len() % 8` bits of the last byte are meaningful and the
/// low bits are always zero.
#[derive(Clone, Copy)]
pub struct DigestOutput {
  bytes: [u8; MAX_OUTPUT_LEN],
  bits: usize,
}

impl DigestOutput {
  /// Truncate `src` to its first `bits` bits.
  ///
  /// Copies `ceil(bits / 8)` bytes and clears the low bits of the final byte
  /// when `bits` is not a multiple of 8. `bits` is clamped to what `src` and
  /// [`MAX_OUTPUT_LEN`] can hold.
  #[must_use]
  pub fn from_bits(src: &[u8], bits: usize) -> Self {
    let bits = bits.min(src.len().min(MAX_OUTPUT_LEN) * 8);
    let len = bits.div_ceil(8);

    let mut bytes = [0u8; MAX_OUTPUT_LEN];
    let (dst, src) = (bytes.get_mut(..len), src.get(..len));
    if let (Some(dst), Some(src)) = (dst, src) {
      dst.copy_from_slice(src);
    }

    let rem = bits % 8;
    if rem != 0 {
      if let Some(last) = bytes.get_mut(len - 1) {
        *last &= 0xff << (8 - rem);
      }
    }

    Self { bytes, bits }
  }

  /// Digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.bytes.get(..self.len()).unwrap_or(&[])
  }

  /// Length in bytes, rounded up.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.bits.div_ceil(8)
  }

  /// Whether the digest holds no bits.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.bits == 0
  }

  /// Exact length in bits.
  #[inline]
  #[must_use]
  pub const fn bit_len(&self) -> usize {
    self.bits
  }
}

impl Deref for DigestOutput {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl AsRef<[u8]> for DigestOutput {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq for DigestOutput {
  fn eq(&self, other: &Self) -> bool {
    self.bits == other.bits && self.as_bytes() == other.as_bytes()
  }
}

impl Eq for DigestOutput {}

impl PartialEq<[u8]> for DigestOutput {
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl<const N: usize> PartialEq<[u8; N]> for DigestOutput {
  fn eq(&self, other: &[u8; N]) -> bool {
    self.as_bytes() == other.as_slice()
  }
}

impl core::hash::Hash for DigestOutput {
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.bits.hash(state);
    self.as_bytes().hash(state);
  }
}

impl fmt::LowerHex for DigestOutput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::Debug for DigestOutput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "DigestOutput({} bits, {self:x})", self.bits)
  }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for DigestOutput {
  /// Clears every byte and the bit length.
  fn zeroize(&mut self) {
    self.bytes.zeroize();
    self.bits = 0;
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;

  #[test]
  fn whole_bytes_copy_prefix() {
    let src = [0xAAu8; 32];
    let out = DigestOutput::from_bits(&src, 224);
    assert_eq!(out.len(), 28);
    assert_eq!(out.bit_len(), 224);
    assert_eq!(out.as_bytes(), &src[..28]);
  }

  #[test]
  fn partial_byte_keeps_high_bits() {
    let src = [0xFFu8; 4];
    let out = DigestOutput::from_bits(&src, 13);
    assert_eq!(out.as_bytes(), &[0xFF, 0xF8]);

    let out = DigestOutput::from_bits(&src, 1);
    assert_eq!(out.as_bytes(), &[0x80]);
  }

  #[test]
  fn clamps_to_source() {
    let src = [1u8, 2, 3];
    let out = DigestOutput::from_bits(&src, 512);
    assert_eq!(out.bit_len(), 24);
    assert_eq!(out.as_bytes(), &src);
  }

  #[test]
  fn empty_output() {
    let out = DigestOutput::from_bits(&[0xFF; 8], 0);
    assert!(out.is_empty());
    assert_eq!(out.as_bytes(), &[] as &[u8]);
  }

  #[test]
  fn equality_includes_bit_length() {
    let a = DigestOutput::from_bits(&[0xF0, 0x00], 12);
    let b = DigestOutput::from_bits(&[0xF0, 0x00], 16);
    assert_eq!(a.as_bytes(), b.as_bytes());
    assert_ne!(a, b);
  }

  #[test]
  fn hex_and_debug() {
    let out = DigestOutput::from_bits(&[0xde, 0xad, 0xbe, 0xef], 32);
    assert_eq!(format!("{out:x}"), "deadbeef");
    assert_eq!(format!("{out:?}"), "DigestOutput(32 bits, deadbeef)");
  }

  #[cfg(feature = "zeroize")]
  #[test]
  fn zeroize_clears_bytes_and_length() {
    use zeroize::Zeroize as _;

    let mut out = DigestOutput::from_bits(&[0xA5u8; 64], 509);
    out.zeroize();
    assert!(out.is_empty());
    assert_eq!(out.as_bytes(), &[] as &[u8]);
    assert_eq!(out, DigestOutput::from_bits(&[], 0));
  }
}
