//! The LSH hash family and HMAC over it.
//!
//! This crate is `no_std` compatible. Its only library dependencies are the
//! workspace `traits` crate, the `log` facade, and `zeroize` for key pads.
//! Dev-only dependencies are used for property testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto::lsh`] - LSH-256 and LSH-512 with any output length, plus typed
//!   fixed-length digests.
//! - [`crypto::hmac`] - HMAC over any [`HashFunction`] (feature `hmac`).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub mod crypto;

mod util;

#[cfg(feature = "hmac")]
pub use traits::Mac;
pub use traits::{Digest, DigestOutput, HashError, HashFunction};
