//! LSH-256: 32-bit lanes, 1024-bit blocks, 26 steps.
//!
//! Any output length in `1..=256` bits. LSH-256-224 and LSH-256-256 start
//! from precomputed chaining values; every other length derives its IV by
//! compressing an all-zero block from a state seeded with the length.

#![allow(clippy::indexing_slicing)] // Fixed-size state, schedule and constant tables

use core::fmt;

use traits::{DigestOutput, HashError, HashFunction};

use super::{MSG_PERM, WORD_PERM, buffer::BitBuffer};
use crate::util::{load_le_u32, store_le_u32};

pub(crate) const BLOCK_LEN: usize = 128;
pub(crate) const MAX_OUTPUT_BITS: usize = 256;

const STEPS: usize = 26;
const SCHEDULE_LEN: usize = 16 * (STEPS + 1);

// Rotation amounts, indexed by step parity.
const ALPHA: [u32; 2] = [29, 5];
const BETA: [u32; 2] = [1, 17];
const GAMMA: [u32; 8] = [0, 8, 16, 24, 24, 16, 8, 0];

const IV224: [u32; 16] = [
  0x068608d3, 0x62d8f7a7, 0xd76652ab, 0x4c600a43, 0xbdc40aa8, 0x1eca0b68, 0xda1a89be, 0x3147d354,
  0x707eb4f9, 0xf65b3862, 0x6b0b2abe, 0x56b8ec0a, 0xcf237286, 0xee0d1727, 0x33636595, 0x8bb8d05f,
];

const IV256: [u32; 16] = [
  0x46a10f1f, 0xfddce486, 0xb41443a8, 0x198e6b9d, 0x3304388d, 0xb0f5a3c7, 0xb36061c4, 0x7adbd553,
  0x105d5378, 0x2f74de54, 0x5c2f2d95, 0xf2553fbe, 0x8051357a, 0x138668c8, 0x47aa4484, 0xe01afb41,
];

// Step constants, one row of eight per step.
const STEP: [[u32; 8]; STEPS] = [
  [0x917caf90, 0x6c1b10a2, 0x6f352943, 0xcf778243, 0x2ceb7472, 0x29e96ff2, 0x8a9ba428, 0x2eeb2642],
  [0x0e2c4021, 0x872bb30e, 0xa45e6cb2, 0x46f9c612, 0x185fe69e, 0x1359621b, 0x263fccb2, 0x1a116870],
  [0x3a6c612f, 0xb2dec195, 0x02cb1f56, 0x40bfd858, 0x784684b6, 0x6cbb7d2e, 0x660c7ed8, 0x2b79d88a],
  [0xa6cd9069, 0x91a05747, 0xcdea7558, 0x00983098, 0xbecb3b2e, 0x2838ab9a, 0x728b573e, 0xa55262b5],
  [0x745dfa0f, 0x31f79ed8, 0xb85fce25, 0x98c8c898, 0x8a0669ec, 0x60e445c2, 0xfde295b0, 0xf7b5185a],
  [0xd2580983, 0x29967709, 0x182df3dd, 0x61916130, 0x90705676, 0x452a0822, 0xe07846ad, 0xaccd7351],
  [0x2a618d55, 0xc00d8032, 0x4621d0f5, 0xf2f29191, 0x00c6cd06, 0x6f322a67, 0x58bef48d, 0x7a40c4fd],
  [0x8beee27f, 0xcd8db2f2, 0x67f2c63b, 0xe5842383, 0xc793d306, 0xa15c91d6, 0x17b381e5, 0xbb05c277],
  [0x7ad1620a, 0x5b40a5bf, 0x5ab901a2, 0x69a7a768, 0x5b66d9cd, 0xfdee6877, 0xcb3566fc, 0xc0c83a32],
  [0x4c336c84, 0x9be6651a, 0x13baa3fc, 0x114f0fd1, 0xc240a728, 0xec56e074, 0x009c63c7, 0x89026cf2],
  [0x7f9ff0d0, 0x824b7fb5, 0xce5ea00f, 0x605ee0e2, 0x02e7cfea, 0x43375560, 0x9d002ac7, 0x8b6f5f7b],
  [0x1f90c14f, 0xcdcb3537, 0x2cfeafdd, 0xbf3fc342, 0xeab7b9ec, 0x7a8cb5a3, 0x9d2af264, 0xfacedb06],
  [0xb052106e, 0x99006d04, 0x2bae8d09, 0xff030601, 0xa271a6d6, 0x0742591d, 0xc81d5701, 0xc9a9e200],
  [0x02627f1e, 0x996d719d, 0xda3b9634, 0x02090800, 0x14187d78, 0x499b7624, 0xe57458c9, 0x738be2c9],
  [0x64e19d20, 0x06df0f36, 0x15d1cb0e, 0x0b110802, 0x2c95f58c, 0xe5119a6d, 0x59cd22ae, 0xff6eac3c],
  [0x467ebd84, 0xe5ee453c, 0xe79cd923, 0x1c190a0d, 0xc28b81b8, 0xf6ac0852, 0x26efd107, 0x6e1ae93b],
  [0xc53c41ca, 0xd4338221, 0x8475fd0a, 0x35231729, 0x4e0d3a7a, 0xa2b45b48, 0x16c0d82d, 0x890424a9],
  [0x017e0c8f, 0x07b5a3f5, 0xfa73078e, 0x583a405e, 0x5b47b4c8, 0x570fa3ea, 0xd7990543, 0x8d28ce32],
  [0x7f8a9b90, 0xbd5998fc, 0x6d7a9688, 0x927a9eb6, 0xa2fc7d23, 0x66b38e41, 0x709e491a, 0xb5f700bf],
  [0x0a262c0f, 0x16f295b9, 0xe8111ef5, 0x0d195548, 0x9f79a0c5, 0x1a41cfa7, 0x0ee7638a, 0xacf7c074],
  [0x30523b19, 0x09884ecf, 0xf93014dd, 0x266e9d55, 0x191a6664, 0x5c1176c1, 0xf64aed98, 0xa4b83520],
  [0x828d5449, 0x91d71dd8, 0x2944f2d6, 0x950bf27b, 0x3380ca7d, 0x6d88381d, 0x4138868e, 0x5ced55c4],
  [0x0fe19dcb, 0x68f4f669, 0x6e37c8ff, 0xa0fe6e10, 0xb44b47b0, 0xf5c0558a, 0x79bf14cf, 0x4a431a20],
  [0xf17f68da, 0x5deb5fd1, 0xa600c86d, 0x9f6c7eb0, 0xff92f864, 0xb615e07f, 0x38d3e448, 0x8d5d3a6a],
  [0x70e843cb, 0x494b312e, 0xa6c93613, 0x0beb2f4f, 0x928b5d63, 0xcbf66035, 0x0cb82c80, 0xea97a4f7],
  [0x592c0f3b, 0x947c5f77, 0x6fff49b9, 0xf71a7e5a, 0x1de8c0f5, 0xc2569600, 0xc4e4ac8c, 0x823c9ce1],
];

#[inline(always)]
fn expand(msg: &mut [u32; SCHEDULE_LEN], block: &[u8; BLOCK_LEN]) {
  load_le_u32(block, &mut msg[..32]);
  for i in 32..SCHEDULE_LEN {
    let row = i - i % 16;
    msg[i] = msg[i - 16].wrapping_add(msg[row - 32 + MSG_PERM[i % 16]]);
  }
}

#[inline(always)]
fn step(cv: &mut [u32; 16], msg: &[u32; 16], sc: &[u32; 8], alpha: u32, beta: u32) {
  let mut t = [0u32; 16];
  for col in 0..8 {
    let mut l = cv[col] ^ msg[col];
    let mut r = cv[col + 8] ^ msg[col + 8];
    l = l.wrapping_add(r).rotate_left(alpha) ^ sc[col];
    r = l.wrapping_add(r).rotate_left(beta);
    t[col] = l.wrapping_add(r);
    t[col + 8] = r.rotate_left(GAMMA[col]);
  }
  for (lane, &src) in cv.iter_mut().zip(WORD_PERM.iter()) {
    *lane = t[src];
  }
}

fn compress(cv: &mut [u32; 16], msg: &mut [u32; SCHEDULE_LEN], block: &[u8; BLOCK_LEN]) {
  expand(msg, block);

  let (rows, _) = msg.as_chunks::<16>();
  for (s, (row, sc)) in rows.iter().zip(STEP.iter()).enumerate() {
    let parity = s % 2;
    step(cv, row, sc, ALPHA[parity], BETA[parity]);
  }

  for (lane, m) in cv.iter_mut().zip(rows[STEPS].iter()) {
    *lane ^= m;
  }
}

/// Chaining value for `output_bits` computed from scratch.
fn derive_iv(output_bits: usize, msg: &mut [u32; SCHEDULE_LEN]) -> [u32; 16] {
  let mut cv = [0u32; 16];
  cv[0] = (MAX_OUTPUT_BITS / 8) as u32;
  cv[1] = output_bits as u32;
  compress(&mut cv, msg, &[0u8; BLOCK_LEN]);
  msg.fill(0);
  cv
}

/// Streaming LSH-256 with a configurable output length.
///
/// ```
/// use hashes::crypto::lsh::Lsh256;
/// use traits::HashFunction as _;
///
/// let mut h = Lsh256::new(256)?;
/// h.update(b"ab")?;
/// h.update(b"c")?;
/// assert_eq!(h.finalize(), Lsh256::new(256)?.finalize_with(b"abc")?);
/// # Ok::<(), traits::HashError>(())
/// ```
#[derive(Clone)]
pub struct Lsh256 {
  cv: [u32; 16],
  iv: [u32; 16],
  msg: [u32; SCHEDULE_LEN],
  buf: BitBuffer<BLOCK_LEN>,
  output_bits: usize,
}

impl Lsh256 {
  /// Create a hasher producing `output_bits` bits.
  ///
  /// # Errors
  ///
  /// [`HashError::InvalidOutputLength`] unless `1 <= output_bits <= 256`.
  pub fn new(output_bits: usize) -> Result<Self, HashError> {
    if output_bits == 0 || output_bits > MAX_OUTPUT_BITS {
      log::debug!("lsh-256: rejected output length of {output_bits} bits");
      return Err(HashError::InvalidOutputLength {
        bits: output_bits,
        max: MAX_OUTPUT_BITS,
      });
    }
    Ok(Self::with_valid_length(output_bits))
  }

  pub(crate) fn with_valid_length(output_bits: usize) -> Self {
    let mut msg = [0u32; SCHEDULE_LEN];
    let iv = match output_bits {
      224 => IV224,
      256 => IV256,
      _ => {
        log::trace!("lsh-256: deriving IV for {output_bits}-bit output");
        derive_iv(output_bits, &mut msg)
      }
    };
    Self {
      cv: iv,
      iv,
      msg,
      buf: BitBuffer::new(),
      output_bits,
    }
  }

  /// Digest length in bytes, rounded up.
  #[inline]
  #[must_use]
  pub const fn output_len(&self) -> usize {
    self.output_bits.div_ceil(8)
  }

  /// Byte-aligned absorb for callers that never feed partial bytes.
  #[inline]
  pub(crate) fn absorb(&mut self, data: &[u8]) {
    let Self { cv, msg, buf, .. } = self;
    buf.absorb_bytes(data, &mut |block: &[u8; BLOCK_LEN]| compress(cv, msg, block));
  }

  pub(crate) fn finalize_output(&mut self) -> DigestOutput {
    let Self { cv, msg, buf, .. } = self;
    compress(cv, msg, buf.pad());

    let mut folded = [0u32; 8];
    for (i, lane) in folded.iter_mut().enumerate() {
      *lane = cv[i] ^ cv[i + 8];
    }
    let mut bytes = [0u8; MAX_OUTPUT_BITS / 8];
    store_le_u32(&folded, &mut bytes);

    HashFunction::reset(self);
    DigestOutput::from_bits(&bytes, self.output_bits)
  }
}

impl Default for Lsh256 {
  /// LSH-256-256.
  #[inline]
  fn default() -> Self {
    Self::with_valid_length(MAX_OUTPUT_BITS)
  }
}

impl fmt::Debug for Lsh256 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Lsh256")
      .field("output_bits", &self.output_bits)
      .field("pending_bits", &self.buf.pending_bits())
      .finish_non_exhaustive()
  }
}

impl HashFunction for Lsh256 {
  fn new_instance(&self) -> Self {
    Self {
      cv: self.iv,
      iv: self.iv,
      msg: [0u32; SCHEDULE_LEN],
      buf: BitBuffer::new(),
      output_bits: self.output_bits,
    }
  }

  #[inline]
  fn block_size(&self) -> usize {
    BLOCK_LEN * 8
  }

  #[inline]
  fn output_bits(&self) -> usize {
    self.output_bits
  }

  fn reset(&mut self) {
    self.cv = self.iv;
    self.msg.fill(0);
    self.buf.clear();
  }

  fn update_bits(&mut self, data: &[u8], bit_offset: usize, bit_len: usize) -> Result<(), HashError> {
    let Self { cv, msg, buf, .. } = self;
    buf
      .absorb_bits(data, bit_offset, bit_len, |block| compress(cv, msg, block))
      .inspect_err(|e| log::debug!("lsh-256: {e}"))
  }

  #[inline]
  fn finalize(&mut self) -> DigestOutput {
    self.finalize_output()
  }
}
