// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when dispensing seeded entropy.
///
/// None of these are recoverable for the cursor or buffer that produced them:
/// the caller must provision a new, sufficiently large seed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The supplied seed was empty.
    #[error("no challenge seed available to seeded challenger")]
    InvalidSeed,

    /// A read would run past the end of the seed buffer.
    #[error("insufficient entropy - need {needed} bytes for challenge seed, {remaining} remain")]
    InsufficientEntropy {
        /// Bytes the request required.
        needed: usize,
        /// Unread bytes left in the buffer.
        remaining: usize,
    },

    /// A consumer refused a source that does not declare prediction resistance.
    #[error("entropy source is not prediction resistant")]
    NotPredictionResistant,

    /// A consumer's fixed output width disagrees with the source's configured width.
    #[error("entropy source configured for {configured} bits, expected {expected}")]
    WidthMismatch {
        /// Bit width the consumer requires.
        expected: usize,
        /// Bit width the source was configured with.
        configured: usize,
    },
}
