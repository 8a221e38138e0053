//! Core hashing traits for the LSH workspace.
//!
//! This crate provides the traits every hash and MAC in the workspace
//! conforms to. It is `no_std` compatible. Its only (optional) dependency is
//! `zeroize`, enabled by the `zeroize` feature for [`DigestOutput`].
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`HashFunction`] | Runtime-configured, bit-granular streaming hash | `Lsh256`, `Lsh512`, `Lsh` |
//! | [`Digest`] | Fixed-size digest with a typed output | `Lsh256_256`, `Lsh512_512` |
//! | [`Mac`] | Keyed message authentication | `Hmac<H>` |
//!
//! # Types
//!
//! - [`DigestOutput`] - Inline, variable-length digest with an exact bit length
//! - [`HashError`] - Rejected configuration or call sequence
//! - [`VerificationError`] - Opaque error for MAC verification
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod digest;
pub mod error;
mod hash;
mod mac;
mod output;

pub use digest::Digest;
pub use error::{HashError, VerificationError};
pub use hash::HashFunction;
pub use mac::Mac;
pub use output::{DigestOutput, MAX_OUTPUT_LEN};
