// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `rand_core` adapter over a seeded buffer.

use core::fmt;
use core::mem::size_of;

use rand_core::{TryCryptoRng, TryRngCore};

use crate::error::EntropyError;
use crate::seed::SeededBuffer;

/// Fallible `rand_core` RNG that replays a [`SeededBuffer`] in order.
///
/// Unlike [`EntropyCursor`](crate::EntropyCursor), requests may have any size.
/// Each request takes the next `dst.len()` bytes; a request that does not fit
/// fails with [`EntropyError::InsufficientEntropy`] and consumes nothing.
/// Integers are decoded little-endian.
///
/// # Example
///
/// ```rust
/// use rand_core::TryRngCore;
/// use seeded_entropy::{SeededBuffer, SeededRng};
///
/// let seed = SeededBuffer::new(&[1, 0, 0, 0, 0xAA]).expect("Failed to create seed");
/// let mut rng = SeededRng::new(&seed);
///
/// assert_eq!(rng.try_next_u32().expect("Failed to draw u32"), 1);
/// assert!(rng.try_next_u32().is_err());
///
/// let mut last = [0u8; 1];
/// rng.try_fill_bytes(&mut last).expect("Failed to fill bytes");
/// assert_eq!(last, [0xAA]);
/// ```
pub struct SeededRng<'a> {
    seed: &'a SeededBuffer,
    offset: usize,
}

impl<'a> SeededRng<'a> {
    /// Creates an adapter at offset 0 over `seed`.
    pub fn new(seed: &'a SeededBuffer) -> Self {
        Self { seed, offset: 0 }
    }

    /// Position of the next unread byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unread bytes left in the buffer.
    pub fn remaining(&self) -> usize {
        self.seed.len() - self.offset
    }
}

impl TryRngCore for SeededRng<'_> {
    type Error = EntropyError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut bytes = [0u8; size_of::<u32>()];
        self.try_fill_bytes(&mut bytes)?;

        Ok(u32::from_le_bytes(bytes))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut bytes = [0u8; size_of::<u64>()];
        self.try_fill_bytes(&mut bytes)?;

        Ok(u64::from_le_bytes(bytes))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        let src = self.seed.take(&mut self.offset, dst.len())?;
        dst.copy_from_slice(src);

        Ok(())
    }
}

impl TryCryptoRng for SeededRng<'_> {}

impl fmt::Debug for SeededRng<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRng")
            .field("offset", &self.offset)
            .field("remaining", &self.remaining())
            .finish()
    }
}
