// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # seeded_entropy
//!
//! Deterministic entropy dispensed from a pre-agreed seed buffer.
//!
//! Cryptographic routines written against a generic entropy source can be
//! driven by an exact, reproducible byte sequence instead of a CSPRNG: for
//! test vectors, or for protocols whose randomness must be verifiable.
//! Bytes are handed out verbatim, in order, without mixing or reseeding, and
//! every source fails loudly once its seed is exhausted.
//!
//! ## Core Types
//!
//! - [`SeededBuffer`]: Immutable, zeroize-on-drop pool of seed bytes
//! - [`EntropyCursor`]: Dispenses successive fixed-width slices of a seed
//! - [`SingleEntropySourceProvider`]: Owns a seed and hands out cursors
//! - [`SeededRng`]: `rand_core` adapter over a seed (feature `rand_core`)
//! - [`Challenger`]: Fixed-size challenge generator over any source
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface consumed by cryptographic code
//! - [`EntropySourceProvider`]: Factory for width-configured sources
//!
//! ## Example
//!
//! ```rust
//! use seeded_entropy::{EntropyError, EntropySource, SingleEntropySourceProvider};
//!
//! let seed: Vec<u8> = (0u8..16).collect();
//! let provider = SingleEntropySourceProvider::new(&seed).expect("Failed to create provider");
//!
//! let mut cursor = provider.configure(64);
//! assert_eq!(cursor.get_entropy().expect("Failed to get entropy"), [0, 1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(cursor.get_entropy().expect("Failed to get entropy"), [8, 9, 10, 11, 12, 13, 14, 15]);
//! assert_eq!(
//!     cursor.get_entropy(),
//!     Err(EntropyError::InsufficientEntropy { needed: 8, remaining: 0 })
//! );
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod challenger;
mod cursor;
mod error;
mod provider;
mod seed;
mod support;
mod traits;

#[cfg(feature = "rand_core")]
mod rng;

pub use challenger::Challenger;
pub use cursor::EntropyCursor;
pub use error::EntropyError;
pub use provider::SingleEntropySourceProvider;
pub use seed::SeededBuffer;
pub use traits::{EntropySource, EntropySourceProvider};

#[cfg(feature = "rand_core")]
pub use rng::SeededRng;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
