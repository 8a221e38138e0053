//! Typed LSH digests for the six standard configurations.

use core::fmt;

use traits::{Digest, HashFunction};

use super::{Lsh256, Lsh512};

macro_rules! define_fixed_lsh {
  ($(#[$meta:meta])* $name:ident, $engine:ident, $bits:literal) => {
    $(#[$meta])*
    #[derive(Clone)]
    pub struct $name {
      inner: $engine,
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self {
          inner: $engine::with_valid_length($bits),
        }
      }
    }

    impl fmt::Debug for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(stringify!($name)).finish_non_exhaustive()
      }
    }

    impl Digest for $name {
      const OUTPUT_SIZE: usize = $bits / 8;
      type Output = [u8; $bits / 8];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.inner.absorb(data);
      }

      fn finalize(&self) -> Self::Output {
        let digest = self.inner.clone().finalize_output();
        let mut out = [0u8; $bits / 8];
        out.copy_from_slice(digest.as_bytes());
        out
      }

      #[inline]
      fn reset(&mut self) {
        HashFunction::reset(&mut self.inner);
      }
    }
  };
}

define_fixed_lsh!(
  /// LSH-256-224.
  Lsh256_224, Lsh256, 224
);
define_fixed_lsh!(
  /// LSH-256-256.
  Lsh256_256, Lsh256, 256
);
define_fixed_lsh!(
  /// LSH-512-224.
  Lsh512_224, Lsh512, 224
);
define_fixed_lsh!(
  /// LSH-512-256.
  Lsh512_256, Lsh512, 256
);
define_fixed_lsh!(
  /// LSH-512-384.
  Lsh512_384, Lsh512, 384
);
define_fixed_lsh!(
  /// LSH-512-512.
  Lsh512_512, Lsh512, 512
);
