//! LSH-512: 64-bit lanes, 2048-bit blocks, 28 steps.
//!
//! Any output length in `1..=512` bits. The 224, 256, 384 and 512-bit
//! configurations start from precomputed chaining values.

#![allow(clippy::indexing_slicing)] // Fixed-size state, schedule and constant tables

use core::fmt;

use traits::{DigestOutput, HashError, HashFunction};

use super::{MSG_PERM, WORD_PERM, buffer::BitBuffer};
use crate::util::{load_le_u64, store_le_u64};

pub(crate) const BLOCK_LEN: usize = 256;
pub(crate) const MAX_OUTPUT_BITS: usize = 512;

const STEPS: usize = 28;
const SCHEDULE_LEN: usize = 16 * (STEPS + 1);

const ALPHA: [u32; 2] = [23, 7];
const BETA: [u32; 2] = [59, 3];
const GAMMA: [u32; 8] = [0, 16, 32, 48, 8, 24, 40, 56];

const IV224: [u64; 16] = [
  0x0c40_1e9f_e881_3a55, 0x4a5f_4462_68fd_3d35, 0xff13_e452_334f_612a, 0xf822_7661_037e_354a,
  0xa5f2_2372_3c9c_a29d, 0x95d9_65a1_1aed_3979, 0x01e2_3835_b9ab_02cc, 0x52d4_9cba_d5b3_0616,
  0x9e5c_2027_773f_4ed3, 0x66a5_c880_1925_b701, 0x22bb_c85b_4c67_79d9, 0xc131_71a4_2c55_9c23,
  0x31e2_b67d_25be_3813, 0xd522_c4de_ed8e_4d83, 0xa79f_5509_b43f_bafe, 0xe00d_2cd8_8b4b_6c6a,
];

const IV256: [u64; 16] = [
  0x6dc5_7c33_df98_9423, 0xd8ea_7f6e_8342_c199, 0x76df_8356_f860_3ac4, 0x40f1_b44d_e838_223a,
  0x39ff_e7cf_c314_84cd, 0x39c4_326c_c528_1548, 0x8a2f_f85a_3460_45d8, 0xff20_2aa4_6dbd_d61e,
  0xcf78_5b3c_d5fc_db8b, 0x1f03_23b6_4a81_50bf, 0xff75_d972_f29e_a355, 0x2e56_7f30_bf1c_a9e1,
  0xb596_875b_f8ff_6dba, 0xfcca_39b0_89ef_4615, 0xecff_4017_d020_b4b6, 0x7e77_384c_772e_d802,
];

const IV384: [u64; 16] = [
  0x5315_6a66_2928_08f6, 0xb2c4_f362_b204_c2bc, 0xb84b_7213_bfa0_5c4e, 0x976c_eb7c_1b29_9f73,
  0xdf0c_c63c_0570_ae97, 0xda44_41ba_a486_ce3f, 0x6559_f5d9_b5f2_acc2, 0x22da_cf19_b4b5_2a16,
  0xbbcd_acef_de80_953a, 0xc989_1a28_7972_5b3e, 0x7c9f_e633_0237_e440, 0xa30b_a550_553f_7431,
  0xbb08_043f_b34e_3e30, 0xa0de_c48d_5461_8ead, 0x1503_1726_7464_bc57, 0x32d1_501f_de63_dc93,
];

const IV512: [u64; 16] = [
  0xadd5_0f3c_7f07_094e, 0xe3f3_cee8_f941_8a4f, 0xb527_ecde_5b3d_0ae9, 0x2ef6_dec6_8076_f501,
  0x8cb9_94ca_e5ac_a216, 0xfbb9_eae4_bba4_8cc7, 0x650a_5261_7472_5fea, 0x1f9a_61a7_3f8d_8085,
  0xb660_7378_173b_539b, 0x1bc9_9853_b0c0_b9ed, 0xdf72_7fc1_9b18_2d47, 0xdbef_360c_f893_a457,
  0x4981_f5e5_7014_7e80, 0xd00c_4490_ca7d_3e30, 0x5d73_940c_0e4a_e1ec, 0x8940_85e2_edb2_d819,
];

const STEP: [[u64; 8]; STEPS] = [
  [
    0x9788_4283_c938_982a, 0xba1f_ca93_533e_2355, 0xc519_a2e8_7aeb_1c03, 0x9a0f_c954_62af_17b1,
    0xfc3d_da8a_b019_a82b, 0x0282_5d07_9a89_5407, 0x79f2_d0a7_ee06_a6f7, 0xd76d_15ee_d9fd_f5fe,
  ],
  [
    0x1fca_c64d_01d0_c2c1, 0xd9ea_5de6_9161_790f, 0xdebc_8b63_6607_1fc8, 0xa9d9_1db7_11c6_c94b,
    0x3a18_653a_c9c1_d427, 0x84df_64a2_23dd_5b09, 0x6cc3_7895_f4ad_9e70, 0x4483_04c8_d7f3_f4d5,
  ],
  [
    0xea91_134e_d293_83e0, 0xc448_4477_f2da_88e8, 0x9b47_eec9_6d26_e8a6, 0x82f6_d4c8_d890_14f4,
    0x527d_a004_8b95_fb61, 0x6444_06c6_0138_648d, 0x303c_0e8a_a24c_0edc, 0xc787_cda0_cbe8_ca19,
  ],
  [
    0x7ba4_6221_6617_64ca, 0x0c8c_bc6a_cd63_71ac, 0xe336_b836_940f_8f41, 0x79cb_9da1_68a5_0976,
    0xd01d_a490_2191_5cb3, 0xa84a_ccc7_399c_f1f1, 0x6c4a_992c_ee5a_eb0c, 0x4f55_6e6c_b4b2_e3e0,
  ],
  [
    0x2006_8387_7d7c_2f45, 0x9949_2738_30d5_1db8, 0x19ee_eeca_a39e_d124, 0x4569_3f0a_0dae_7fef,
    0xedc2_34b1_b2ee_1083, 0xf317_9400_d68e_e399, 0xb6e3_c61b_4945_f778, 0xa4c3_db21_6796_c42f,
  ],
  [
    0x268a_0b04_f9ab_7465, 0xe270_5f69_05f2_d651, 0x08dd_b96e_426f_f53d, 0xaea8_4917_bc2e_6f34,
    0xaff6_e664_a0fe_9470, 0x0aab_94d7_6572_7d8c, 0x9aa9_e164_8f3d_702e, 0x689e_fc88_fe5a_f3d3,
  ],
  [
    0xb095_0ffe_a51f_d98b, 0x52cf_c86e_f8c9_2833, 0xe697_27b0_b265_3245, 0x56f1_60d3_ea9d_a3e2,
    0xa6dd_4b05_9f93_051f, 0xb640_6c3c_d7f0_0996, 0x448b_45f3_ccad_9ec8, 0x079b_8587_594e_c73b,
  ],
  [
    0x45a5_0ea3_c4f9_653b, 0x2298_3767_c1f1_5b85, 0x7dbe_d863_1797_782b, 0x4852_34be_8841_8638,
    0x8428_50a5_3298_24c5, 0xf6ac_a914_c7f9_a04c, 0xcfd1_39c0_7a4c_670c, 0xa321_0ce0_a816_0242,
  ],
  [
    0xeab3_b268_be5e_a080, 0xbacf_9f29_b34c_e0a7, 0x3c97_3b7a_af0f_a3a8, 0x9a86_f346_c9c7_be80,
    0xac78_f5d7_cabc_ea49, 0xa355_bddc_c199_ed42, 0xa10a_fa3a_c6b3_73db, 0xc42d_ed88_be18_44e5,
  ],
  [
    0x9e66_1b27_1cff_216a, 0x8a6e_c8dd_002d_8861, 0xd3d2_b629_beb3_4be4, 0x217a_3a10_9186_3f1a,
    0x256e_cda2_87a7_33f5, 0xf913_9a9e_5b87_2fe5, 0xac05_3501_7a27_4f7c, 0xf21b_7646_d65d_2aa9,
  ],
  [
    0x0481_4244_1c20_8c08, 0xf937_a5dd_2db5_e9eb, 0xa688_dfe8_71ff_30b7, 0x9bb4_4aa2_17c5_593b,
    0x943c_702a_2edb_291a, 0x0cae_38f9_e2b7_15de, 0xb13a_367b_a176_cc28, 0x0d91_bd1d_3387_d49b,
  ],
  [
    0x85c3_8660_3cac_940c, 0x30dd_830a_e39f_d5e4, 0x2f68_c85a_712f_e85d, 0x4ffe_ecb9_dd1e_94d6,
    0xd0ac_9a59_0a04_43ae, 0xbae7_32dc_99cc_f3ea, 0xeb70_b21d_1842_f4d9, 0x9f4e_da50_bb5c_6fa8,
  ],
  [
    0x4949_e69c_e940_a091, 0x0e60_8dee_8375_ba14, 0x9831_22cb_a118_458c, 0x4eeb_a696_fbb3_6b25,
    0x7d46_f363_0e47_f27e, 0xa21a_0f76_66c0_dea4, 0x5c22_cf35_5b37_cec4, 0xee29_2b0c_17cc_1847,
  ],
  [
    0x9330_8386_29e1_31da, 0x6eee_7c71_f92f_ce22, 0xc953_ee6c_b95d_d224, 0x3a92_3d92_af1e_9073,
    0xc43a_5671_563a_70fb, 0xbc29_85dd_279f_8346, 0x7ef2_0490_9306_9320, 0x1754_3723_e3e4_6035,
  ],
  [
    0xc3b4_09b0_0b13_0c6d, 0x5d6a_ee6b_28fd_f090, 0x1d42_5b26_172f_f6ed, 0xcccf_d041_cdaf_03ad,
    0xfe90_c7c7_90ab_6cbf, 0xe5af_6304_c722_ca02, 0x70f6_9523_9999_b39e, 0x6b8b_5b07_c844_954c,
  ],
  [
    0x77bd_b9bb_1e1f_7a30, 0xc859_5994_26ee_80ed, 0x5f9d_813d_4726_e40a, 0x9ca0_120f_7cb2_b179,
    0x8f58_8f58_3c18_2cbd, 0x9512_67cb_e9ec_cce7, 0x678b_b8bd_334d_520e, 0xf6e6_62d0_0cd9_e1b7,
  ],
  [
    0x3577_74d9_3d99_aaa7, 0x21b2_edbb_156f_6eb5, 0xfd1e_be84_6e0a_ee69, 0x3cb2_218c_2f64_2b15,
    0xe7e7_e794_5444_ea4c, 0xa77a_33b5_d6b9_b47c, 0xf344_75f0_809f_6075, 0xdd49_32dc_e6bb_99ad,
  ],
  [
    0xacec_4e16_d744_51dc, 0xd4a0_a8d0_84de_23d6, 0x1bdd_42f2_78f9_5866, 0xeed3_adbb_938f_4051,
    0xcfcf_7be8_992f_3733, 0x21ad_e98c_906e_3123, 0x37ba_6671_1fff_d668, 0x267c_0fc3_a255_478a,
  ],
  [
    0x993a_64ee_1b96_2e88, 0x7549_7955_6301_faaa, 0xf920_356b_7251_be81, 0xc281_694f_22cf_923f,
    0x9f4b_6481_c866_6b02, 0xcf97_761c_fe9f_5444, 0xf220_d791_1fd6_3e9f, 0xa28b_d365_f79c_d1b0,
  ],
  [
    0xd39f_5309_b1c4_b721, 0xbec2_ceb8_64fc_a51f, 0x1955_a0dd_c410_407a, 0x43ea_b871_f261_d201,
    0xeaaf_e64a_2ed1_6da1, 0x670d_931b_9df3_9913, 0x12f8_68b0_f614_de91, 0x2e5f_395d_946e_8252,
  ],
  [
    0x72f2_5cbb_767b_d8f4, 0x8191_871d_61a1_c4dd, 0x6ef6_7ea1_d450_ba93, 0x2ea3_2a64_5433_d344,
    0x9a96_3079_003f_0f8b, 0x74a0_aeb9_918c_ac7a, 0x0b61_19a7_0af3_6fa3, 0x8d98_96f2_02f0_d480,
  ],
  [
    0x654f_1831_f254_cd66, 0x1318_a47f_0366_a25e, 0x6575_2076_250b_4e01, 0xd1cd_8eb8_8807_1772,
    0x30c6_a979_3f4e_9b25, 0x154f_684b_1e39_26ee, 0x6c7a_c0b1_fe63_12ae, 0x262f_88f4_f3c5_550d,
  ],
  [
    0xb467_4a24_4722_33cb, 0x2bbd_2382_6a09_0071, 0xda95_969b_3059_4f66, 0x9f5c_4740_8f1e_8a43,
    0xf770_22b8_8de9_c055, 0x64b7_b369_5760_1503, 0xe73b_72b0_6175_c11a, 0x55b8_7de8_b91a_6233,
  ],
  [
    0x1bb1_6e6b_6955_ff7f, 0xe8e0_a5ec_7309_719c, 0x702c_31cb_89a8_b640, 0xfba3_87cf_ada8_cde2,
    0x6792_db46_77aa_164c, 0x1c6b_1cc0_b775_1867, 0x22ae_2311_d736_dc01, 0x0e36_66a1_d37c_9588,
  ],
  [
    0xcd1f_d9d4_bf55_7e9a, 0xc986_925f_7c7b_0e84, 0x9c5d_fd55_325e_f6b0, 0x9f2b_577d_5676_b0dd,
    0xfa6e_21be_21c0_62b3, 0x8787_dd78_2c8d_7f83, 0xd0d1_34e9_0e12_dd23, 0x449d_0875_5012_1d96,
  ],
  [
    0xecf9_ae94_14d4_1967, 0x5018_f1db_f789_934d, 0xfa5b_5287_9155_a74c, 0xca82_d4d3_cd27_8e7c,
    0x688f_dfdf_e223_16ad, 0x0f65_55a4_ba0d_030a, 0xa206_1df7_20f0_00f3, 0xe1a5_7dc5_622f_b3da,
  ],
  [
    0xe6a8_42a8_e8ed_8153, 0x690a_cdd3_811c_e09d, 0x55ad_da18_e6fc_f446, 0x4d57_a8a0_f4b6_0b46,
    0xf86f_bfc2_0539_c415, 0x74ba_fa5e_c710_0d19, 0xa824_1518_10f0_f495, 0x8723_4327_91e3_8ebb,
  ],
  [
    0x8eea_eb91_d66e_d539, 0x73d8_a154_9dfd_7e06, 0x0387_f2ff_e3f1_3a9b, 0xa500_4995_aac1_5193,
    0x682f_81c7_3efd_da0d, 0x2fb5_5925_d71d_268d, 0xcc39_2d29_01e5_8a3d, 0xaa66_6ab9_7572_4a42,
  ],
];

#[inline(always)]
fn expand(msg: &mut [u64; SCHEDULE_LEN], block: &[u8; BLOCK_LEN]) {
  load_le_u64(block, &mut msg[..32]);
  for i in 32..SCHEDULE_LEN {
    let row = i - i % 16;
    msg[i] = msg[i - 16].wrapping_add(msg[row - 32 + MSG_PERM[i % 16]]);
  }
}

#[inline(always)]
fn step(cv: &mut [u64; 16], msg: &[u64; 16], sc: &[u64; 8], alpha: u32, beta: u32) {
  let mut t = [0u64; 16];
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

fn compress(cv: &mut [u64; 16], msg: &mut [u64; SCHEDULE_LEN], block: &[u8; BLOCK_LEN]) {
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

fn derive_iv(output_bits: usize, msg: &mut [u64; SCHEDULE_LEN]) -> [u64; 16] {
  let mut cv = [0u64; 16];
  cv[0] = (MAX_OUTPUT_BITS / 8) as u64;
  cv[1] = output_bits as u64;
  compress(&mut cv, msg, &[0u8; BLOCK_LEN]);
  msg.fill(0);
  cv
}

/// Streaming LSH-512 with a configurable output length.
#[derive(Clone)]
pub struct Lsh512 {
  cv: [u64; 16],
  iv: [u64; 16],
  msg: [u64; SCHEDULE_LEN],
  buf: BitBuffer<BLOCK_LEN>,
  output_bits: usize,
}

impl Lsh512 {
  /// Create a hasher producing `output_bits` bits.
  ///
  /// # Errors
  ///
  /// [`HashError::InvalidOutputLength`] unless `1 <= output_bits <= 512`.
  pub fn new(output_bits: usize) -> Result<Self, HashError> {
    if output_bits == 0 || output_bits > MAX_OUTPUT_BITS {
      log::debug!("lsh-512: rejected output length of {output_bits} bits");
      return Err(HashError::InvalidOutputLength {
        bits: output_bits,
        max: MAX_OUTPUT_BITS,
      });
    }
    Ok(Self::with_valid_length(output_bits))
  }

  pub(crate) fn with_valid_length(output_bits: usize) -> Self {
    let mut msg = [0u64; SCHEDULE_LEN];
    let iv = match output_bits {
      224 => IV224,
      256 => IV256,
      384 => IV384,
      512 => IV512,
      _ => {
        log::trace!("lsh-512: deriving IV for {output_bits}-bit output");
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

  #[inline]
  pub(crate) fn absorb(&mut self, data: &[u8]) {
    let Self { cv, msg, buf, .. } = self;
    buf.absorb_bytes(data, &mut |block: &[u8; BLOCK_LEN]| compress(cv, msg, block));
  }

  pub(crate) fn finalize_output(&mut self) -> DigestOutput {
    let Self { cv, msg, buf, .. } = self;
    compress(cv, msg, buf.pad());

    let mut folded = [0u64; 8];
    for (i, lane) in folded.iter_mut().enumerate() {
      *lane = cv[i] ^ cv[i + 8];
    }
    let mut bytes = [0u8; MAX_OUTPUT_BITS / 8];
    store_le_u64(&folded, &mut bytes);

    HashFunction::reset(self);
    DigestOutput::from_bits(&bytes, self.output_bits)
  }
}

impl Default for Lsh512 {
  /// LSH-512-512.
  #[inline]
  fn default() -> Self {
    Self::with_valid_length(MAX_OUTPUT_BITS)
  }
}

impl fmt::Debug for Lsh512 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Lsh512")
      .field("output_bits", &self.output_bits)
      .field("pending_bits", &self.buf.pending_bits())
      .finish_non_exhaustive()
  }
}

impl HashFunction for Lsh512 {
  fn new_instance(&self) -> Self {
    Self {
      cv: self.iv,
      iv: self.iv,
      msg: [0u64; SCHEDULE_LEN],
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
      .inspect_err(|e| log::debug!("lsh-512: {e}"))
  }

  #[inline]
  fn finalize(&mut self) -> DigestOutput {
    self.finalize_output()
  }
}

#[cfg(test)]
mod tests {
  use traits::{HashError, HashFunction as _};

  use super::{IV224, IV256, IV384, IV512, Lsh512, SCHEDULE_LEN, derive_iv};

  extern crate alloc;

  fn hex(bytes: &[u8]) -> alloc::string::String {
    use alloc::string::String;
    use core::fmt::Write;
    let mut s = String::new();
    for &b in bytes {
      write!(&mut s, "{:02x}", b).unwrap();
    }
    s
  }

  fn lsh(bits: usize, data: &[u8]) -> alloc::string::String {
    hex(&Lsh512::new(bits).unwrap().finalize_with(data).unwrap())
  }

  #[test]
  fn precomputed_ivs_match_derivation() {
    let mut msg = [0u64; SCHEDULE_LEN];
    assert_eq!(derive_iv(224, &mut msg), IV224);
    assert_eq!(derive_iv(256, &mut msg), IV256);
    assert_eq!(derive_iv(384, &mut msg), IV384);
    assert_eq!(derive_iv(512, &mut msg), IV512);
  }

  #[test]
  fn known_vectors() {
    assert_eq!(
      lsh(512, b""),
      "118a2ff2a99e3b2134125e2baf20ebe3bdd034d5a69b29c22fc4995063340b46697801d7f7fb0070568f78e8ed514215fc70af27d6f27b01aa8a1da72b14ce7c"
    );
    assert_eq!(
      lsh(512, b"abc"),
      "a3d93cfe60dc1aacdd3bd4bef0a6985381a396c7d49d9fd177795697c3535208b5c57224bef21084d42083e95a4bd8eb33e869812b65031c428819a1e7ce596d"
    );
    assert_eq!(
      lsh(384, b"abc"),
      "5f344efaa0e43ccd2e5e194d6039794b4fb431f10fb4b65fd45e9da4ecde0f27b66e8dbdfa47252e0d0b741bfd91f9fe"
    );
    assert_eq!(
      lsh(256, b"abc"),
      "cd892310532602332b613f1ec11a6962fca61ea09ecffcd4bcf75858d802edec"
    );
    assert_eq!(lsh(224, b"abc"), "d1683234513ec5698394571ead128a8cd5373e97661ba20dcf89e489");
  }

  #[test]
  fn derived_lengths() {
    assert_eq!(lsh(160, b""), "86abf409e2440911ad9263333bc0558c40799ea5");
    assert_eq!(
      lsh(300, b"abc"),
      "d8f0736bf6f7008ea5116099c7e6c0d372c22d87d03bf92866f7f0215469591e90bdb153b090"
    );
    assert_eq!(
      lsh(509, b"abc"),
      "58c0730cbbbaccffc2151d07b7b9c72251a8c3c4af7f4da7794aa0860b367bd5e74b1e0897737451eaab9559f3f2ab96c3d437e9976a8b38b68a36d4454f6f08"
    );
  }

  #[test]
  fn block_boundaries() {
    let msg: alloc::vec::Vec<u8> = (0..600usize).map(|i| (i * 31 + 7) as u8).collect();

    let mut h = Lsh512::default();
    h.update_bits(&msg, 0, 256 * 8 - 1).unwrap();
    assert_eq!(
      hex(&h.finalize()),
      "7916e242136ba5bc30e1e7aa07505dd92ba36e53ef9d084dd6a211e965c11228e51a8cae6acf342116be3a55e88b4d33a0ac139886f1eb15e95793a3b82eedb5"
    );
    assert_eq!(
      lsh(512, &msg[..256]),
      "c8c79fe8a29a8a6045badb72976e190c8d51a71eae4d155113fcf0191686160d034a8a09fabd768fe1c6bbe96af6ea6defc0358ce5ab7198a46c9b350b3d84b1"
    );
    assert_eq!(
      lsh(512, &msg),
      "d2c96cc0324ecdb4bad07400cedcff08189714fb84d41d46e1f9dce68f39cfe37ca93e75352a373d22945c639631f5e69442788eb8eba7181043648a1bebe23a"
    );
  }

  #[test]
  fn rejects_invalid_output_lengths() {
    assert_eq!(
      Lsh512::new(0).unwrap_err(),
      HashError::InvalidOutputLength { bits: 0, max: 512 }
    );
    assert_eq!(
      Lsh512::new(513).unwrap_err(),
      HashError::InvalidOutputLength { bits: 513, max: 512 }
    );
  }

  #[test]
  fn configuration_accessors() {
    let h = Lsh512::new(384).unwrap();
    assert_eq!(h.block_size(), 2048);
    assert_eq!(h.block_len(), 256);
    assert_eq!(h.output_bits(), 384);
    assert_eq!(h.output_len(), 48);
  }

  #[test]
  fn output_low_bits_are_zero() {
    for bits in [1usize, 7, 9, 255, 505, 511] {
      let out = Lsh512::new(bits).unwrap().finalize_with(b"low bits").unwrap();
      assert_eq!(out.bit_len(), bits);
      let rem = bits % 8;
      let last = *out.as_bytes().last().unwrap();
      assert_eq!(last & (0xffu8 >> rem), 0, "{bits} bits");
    }
  }
}
