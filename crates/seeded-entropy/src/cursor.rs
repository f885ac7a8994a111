// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;

use crate::error::EntropyError;
use crate::seed::SeededBuffer;
use crate::traits::EntropySource;

/// Read cursor dispensing successive, non-overlapping slices of a [`SeededBuffer`].
///
/// Every successful [`get_entropy`](EntropySource::get_entropy) returns a copy
/// of the next `bits_required / 8` bytes and advances the offset by exactly
/// that amount. A failed read leaves the offset where it was.
///
/// # Bit width truncation
///
/// The byte count is `bits_required / 8` with integer truncation: a cursor
/// configured for 12 bits dispenses 1 byte per read. Widths below 8 bits
/// dispense empty slices and never fail.
///
/// # Example
///
/// ```rust
/// use seeded_entropy::{EntropyCursor, EntropySource, SeededBuffer};
///
/// let seed = SeededBuffer::new(&[0, 1, 2, 3]).expect("Failed to create seed");
/// let mut cursor = EntropyCursor::new(&seed, 16);
///
/// assert_eq!(cursor.get_entropy().expect("Failed to get entropy"), [0, 1]);
/// assert_eq!(cursor.get_entropy().expect("Failed to get entropy"), [2, 3]);
/// assert!(cursor.get_entropy().is_err());
/// ```
pub struct EntropyCursor<'a> {
    seed: &'a SeededBuffer,
    offset: usize,
    bits_required: usize,
}

impl<'a> EntropyCursor<'a> {
    /// Creates a cursor at offset 0 over `seed`, configured for `bits_required`.
    pub fn new(seed: &'a SeededBuffer, bits_required: usize) -> Self {
        Self {
            seed,
            offset: 0,
            bits_required,
        }
    }

    /// Bytes dispensed per successful read.
    pub fn bytes_per_read(&self) -> usize {
        self.bits_required / 8
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

impl EntropySource for EntropyCursor<'_> {
    fn is_prediction_resistant(&self) -> bool {
        true
    }

    fn get_entropy(&mut self) -> Result<Vec<u8>, EntropyError> {
        let n = self.bytes_per_read();
        let bytes = self.seed.take(&mut self.offset, n)?;

        Ok(bytes.to_vec())
    }

    fn entropy_size(&self) -> usize {
        self.bits_required
    }
}

impl fmt::Debug for EntropyCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntropyCursor")
            .field("bits_required", &self.bits_required)
            .field("offset", &self.offset)
            .field("remaining", &self.remaining())
            .finish()
    }
}
