// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Fixed-size challenge generator driven by an [`EntropySource`].
///
/// The source is vetted once at construction:
/// 1. It must declare prediction resistance
/// 2. Its configured width must be exactly `N * 8` bits
///
/// Afterwards every challenge is the source's next read, verbatim. Source
/// errors are propagated, never papered over with another randomness source.
///
/// # Example
///
/// ```rust
/// use seeded_entropy::{Challenger, SingleEntropySourceProvider};
///
/// let provider = SingleEntropySourceProvider::new(&[7u8; 64]).expect("Failed to create provider");
/// let mut challenger = Challenger::<_, 32>::new(provider.configure(256))
///     .expect("Failed to create challenger");
///
/// let challenge = challenger.next_challenge().expect("Failed to draw challenge");
/// assert_eq!(challenge, [7u8; 32]);
/// ```
#[derive(Debug)]
pub struct Challenger<E: EntropySource, const N: usize> {
    source: E,
    issued: u64,
}

impl<E: EntropySource, const N: usize> Challenger<E, N> {
    /// Wraps `source` after checking it can back `N`-byte challenges.
    ///
    /// # Errors
    ///
    /// - [`EntropyError::NotPredictionResistant`] if the source does not declare
    ///   prediction resistance
    /// - [`EntropyError::WidthMismatch`] if the source is not configured for
    ///   `N * 8` bits
    pub fn new(source: E) -> Result<Self, EntropyError> {
        if !source.is_prediction_resistant() {
            return Err(EntropyError::NotPredictionResistant);
        }

        let expected = N * 8;
        let configured = source.entropy_size();

        if configured != expected {
            return Err(EntropyError::WidthMismatch {
                expected,
                configured,
            });
        }

        Ok(Self { source, issued: 0 })
    }

    /// Draws the next challenge from the source.
    ///
    /// # Errors
    ///
    /// Propagates the source's error, or returns [`EntropyError::WidthMismatch`]
    /// if the source returned a slice of the wrong length.
    pub fn next_challenge(&mut self) -> Result<[u8; N], EntropyError> {
        let mut bytes = self.source.get_entropy()?;

        if bytes.len() != N {
            let configured = bytes.len() * 8;
            bytes.zeroize();

            return Err(EntropyError::WidthMismatch {
                expected: N * 8,
                configured,
            });
        }

        let mut challenge = [0u8; N];
        challenge.copy_from_slice(&bytes);
        bytes.zeroize();

        self.issued += 1;

        Ok(challenge)
    }

    /// Number of challenges successfully issued.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> E {
        self.source
    }
}
