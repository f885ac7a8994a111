// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::cursor::EntropyCursor;
use crate::error::EntropyError;
use crate::seed::SeededBuffer;
use crate::traits::EntropySourceProvider;

#[cfg(feature = "rand_core")]
use crate::rng::SeededRng;

/// Provider owning a single seed and handing out independent cursors over it.
///
/// Every cursor starts at offset 0: two cursors obtained from the same
/// provider dispense the same bytes.
///
/// # Example
///
/// ```rust
/// use seeded_entropy::{EntropySource, SingleEntropySourceProvider};
///
/// let seed: Vec<u8> = (0u8..16).collect();
/// let provider = SingleEntropySourceProvider::new(&seed).expect("Failed to create provider");
///
/// let mut cursor = provider.configure(64);
/// assert_eq!(cursor.get_entropy().expect("Failed to get entropy"), [0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
#[derive(Debug)]
pub struct SingleEntropySourceProvider {
    seed: SeededBuffer,
}

impl SingleEntropySourceProvider {
    /// Creates a provider over a copy of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::InvalidSeed`] if `data` is empty.
    pub fn new(data: &[u8]) -> Result<Self, EntropyError> {
        Ok(Self::from_seed(SeededBuffer::new(data)?))
    }

    /// Creates a provider over an already validated seed.
    pub fn from_seed(seed: SeededBuffer) -> Self {
        Self { seed }
    }

    /// Returns a fresh cursor at offset 0 configured for `bits_required`.
    pub fn configure(&self, bits_required: usize) -> EntropyCursor<'_> {
        EntropyCursor::new(&self.seed, bits_required)
    }

    /// Returns a fresh `rand_core` adapter at offset 0 over the seed.
    #[cfg(feature = "rand_core")]
    pub fn rng(&self) -> SeededRng<'_> {
        SeededRng::new(&self.seed)
    }

    /// Returns the underlying seed.
    pub fn seed(&self) -> &SeededBuffer {
        &self.seed
    }
}

impl TryFrom<Vec<u8>> for SingleEntropySourceProvider {
    type Error = EntropyError;

    fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
        Ok(Self::from_seed(SeededBuffer::from_vec(data)?))
    }
}

impl EntropySourceProvider for SingleEntropySourceProvider {
    type Source<'a> = EntropyCursor<'a>;

    fn get(&self, bits_required: usize) -> Self::Source<'_> {
        self.configure(bits_required)
    }
}
