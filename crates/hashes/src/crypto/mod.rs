//! Cryptographic hash functions and MACs.

#[cfg(feature = "hmac")]
pub mod hmac;
pub mod lsh;

#[cfg(feature = "hmac")]
pub use hmac::Hmac;
pub use lsh::{
  Algorithm, Lsh, Lsh256, Lsh256_224, Lsh256_256, Lsh512, Lsh512_224, Lsh512_256, Lsh512_384, Lsh512_512,
  ParseAlgorithmError,
};
