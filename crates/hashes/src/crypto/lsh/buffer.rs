//! Bit-precise pending-block buffer shared by both LSH widths.
//!
//! The buffer is in one of two states:
//!
//! - **open**: `filled` whole bytes are pending (`filled < N`), more input may follow;
//! - **sealed**: additionally, the high `tail_bits` bits of `block[filled]` hold a
//!   trailing partial byte. Nothing but padding may follow.
//!
//! Full blocks are handed to the compression callback as soon as they fill, so
//! `filled` never reaches `N`.

#![allow(clippy::indexing_slicing)] // `filled < N` and window bounds are checked on entry

use traits::HashError;

/// Input bytes realigned per round when the bit offset is not byte aligned.
const REALIGN_CHUNK: usize = 64;

#[derive(Clone)]
pub(crate) struct BitBuffer<const N: usize> {
  block: [u8; N],
  filled: usize,
  tail_bits: u32,
}

impl<const N: usize> BitBuffer<N> {
  pub(crate) const fn new() -> Self {
    Self {
      block: [0u8; N],
      filled: 0,
      tail_bits: 0,
    }
  }

  #[inline]
  pub(crate) fn clear(&mut self) {
    self.block.fill(0);
    self.filled = 0;
    self.tail_bits = 0;
  }

  #[inline]
  pub(crate) const fn is_sealed(&self) -> bool {
    self.tail_bits != 0
  }

  /// Valid input bits currently buffered.
  #[inline]
  pub(crate) const fn pending_bits(&self) -> usize {
    self.filled * 8 + self.tail_bits as usize
  }

  /// Absorb `bit_len` bits of `data` starting at `bit_offset`.
  ///
  /// Every block that fills is passed to `compress`. Validation happens
  /// before any state changes.
  pub(crate) fn absorb_bits(
    &mut self,
    data: &[u8],
    bit_offset: usize,
    bit_len: usize,
    mut compress: impl FnMut(&[u8; N]),
  ) -> Result<(), HashError> {
    if bit_len == 0 {
      return Ok(());
    }

    let available = data.len().saturating_mul(8);
    if bit_offset.checked_add(bit_len).is_none_or(|end| end > available) {
      return Err(HashError::BitRangeOutOfBounds {
        offset: bit_offset,
        len: bit_len,
        available,
      });
    }
    if self.is_sealed() {
      return Err(HashError::UpdateAfterPartialByte);
    }

    let start = bit_offset / 8;
    let shift = (bit_offset % 8) as u32;
    let whole = bit_len / 8;
    let tail = (bit_len % 8) as u32;
    let src = &data[start..];

    if shift == 0 {
      self.absorb_bytes(&src[..whole], &mut compress);
      if tail != 0 {
        self.seal(src[whole], tail);
      }
      return Ok(());
    }

    let mut chunk = [0u8; REALIGN_CHUNK];
    let mut done = 0;
    while done < whole {
      let n = core::cmp::min(REALIGN_CHUNK, whole - done);
      for (i, out) in chunk[..n].iter_mut().enumerate() {
        *out = realigned_byte(src, done + i, shift);
      }
      self.absorb_bytes(&chunk[..n], &mut compress);
      done += n;
    }
    if tail != 0 {
      self.seal(realigned_byte(src, whole, shift), tail);
    }
    Ok(())
  }

  /// Absorb whole bytes. The buffer must be open.
  pub(crate) fn absorb_bytes(&mut self, mut data: &[u8], compress: &mut impl FnMut(&[u8; N])) {
    debug_assert!(!self.is_sealed());
    if data.is_empty() {
      return;
    }

    if self.filled != 0 {
      let take = core::cmp::min(N - self.filled, data.len());
      self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
      self.filled += take;
      data = &data[take..];

      if self.filled == N {
        compress(&self.block);
        self.filled = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<N>();
    for block in blocks {
      compress(block);
    }

    if !rest.is_empty() {
      self.block[..rest.len()].copy_from_slice(rest);
      self.filled = rest.len();
    }
  }

  /// Store the high `bits` bits of `byte` as the trailing partial byte.
  fn seal(&mut self, byte: u8, bits: u32) {
    debug_assert!((1..8).contains(&bits));
    self.block[self.filled] = byte & !(0xffu8 >> bits);
    self.tail_bits = bits;
  }

  /// Append the `1` bit and zero-fill to the block boundary.
  ///
  /// Returns the final block, ready to compress. The caller clears the buffer
  /// afterwards.
  pub(crate) fn pad(&mut self) -> &[u8; N] {
    let idx = self.filled;
    let kept = if self.is_sealed() { self.block[idx] } else { 0 };
    self.block[idx] = kept | (0x80u8 >> self.tail_bits);
    self.block[idx + 1..].fill(0);
    &self.block
  }
}

/// Byte `i` of `src` read `shift` bits further along, most-significant bit first.
#[inline(always)]
fn realigned_byte(src: &[u8], i: usize, shift: u32) -> u8 {
  let hi = src.get(i).copied().unwrap_or(0) << shift;
  let lo = src.get(i + 1).copied().unwrap_or(0) >> (8 - shift);
  hi | lo
}
