//! The LSH hash family (KS X 3262) and HMAC over it, in pure Rust.
//!
//! `lsh` re-exports the workspace's engines and traits under one name. Both
//! engine widths are supported: LSH-256 (32-bit lanes) with any output length
//! up to 256 bits and LSH-512 (64-bit lanes) with any output length up to 512
//! bits. Input may end on any bit boundary. Zero `unsafe`, `no_std`.
//!
//! # Quick Start
//!
//! ```
//! use lsh::{Algorithm, Digest, HashFunction, Lsh, Lsh512_256};
//!
//! // One-shot computation
//! let digest = Lsh::digest(Algorithm::Lsh512_256, b"hello world");
//! assert_eq!(digest.as_bytes(), &Lsh512_256::digest(b"hello world"));
//!
//! // Streaming computation with a non-standard output length
//! let mut hasher = Lsh::with_params(512, 300)?;
//! hasher.update(b"hello ")?;
//! hasher.update(b"world")?;
//! assert_eq!(hasher.finalize().bit_len(), 300);
//!
//! // Algorithms parse from their names
//! let alg: Algorithm = "LSH-256-224".parse()?;
//! assert_eq!(alg.output_len(), 28);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `hmac` | Yes | [`Hmac`] over any [`HashFunction`], with key-pad zeroization |
//!
//! ## `no_std` Usage
//!
//! The crate is always `no_std`. To drop the MAC and its `zeroize` dependency:
//!
//! ```toml
//! [dependencies]
//! lsh = { version = "0.1", default-features = false }
//! ```
#![no_std]

// =============================================================================
// Hashes
// =============================================================================

pub use hashes::crypto::lsh::{
  Algorithm, Lsh, Lsh256, Lsh256_224, Lsh256_256, Lsh512, Lsh512_224, Lsh512_256, Lsh512_384, Lsh512_512,
  ParseAlgorithmError,
};
pub use traits::{Digest, DigestOutput, HashError, HashFunction, MAX_OUTPUT_LEN};

// =============================================================================
// MACs
// =============================================================================

#[cfg(feature = "hmac")]
pub use hashes::crypto::hmac::{Hmac, mac};
#[cfg(feature = "hmac")]
pub use traits::{Mac, VerificationError};
