// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Immutable pool of pre-agreed entropy.

use alloc::vec::Vec;
use core::fmt;

use zeroize::ZeroizeOnDrop;

use crate::error::EntropyError;

/// Fixed, immutable byte buffer holding every byte a seeded source may dispense.
///
/// # Design Principles
///
/// - **Non-empty**: construction fails with [`EntropyError::InvalidSeed`] on an
///   empty input, since an empty pool can satisfy no request
/// - **Immutable**: no mutation is exposed after construction
/// - **No `Clone`**: cursors borrow the buffer instead of copying it
/// - **Redacted `Debug`**: prints the length only
/// - **Automatic zeroization**: bytes are zeroized on drop
///
/// # Example
///
/// ```rust
/// use seeded_entropy::SeededBuffer;
///
/// let seed = SeededBuffer::new(&[0xAB; 32]).expect("Failed to create seed");
/// assert_eq!(seed.len(), 32);
///
/// assert!(SeededBuffer::new(&[]).is_err());
/// ```
#[derive(ZeroizeOnDrop)]
pub struct SeededBuffer {
    bytes: Vec<u8>,
}

impl SeededBuffer {
    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::InvalidSeed`] if `bytes` is empty.
    pub fn new(bytes: &[u8]) -> Result<Self, EntropyError> {
        Self::from_vec(bytes.to_vec())
    }

    /// Creates a buffer taking ownership of `bytes` without copying.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::InvalidSeed`] if `bytes` is empty.
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self, EntropyError> {
        if bytes.is_empty() {
            return Err(EntropyError::InvalidSeed);
        }

        Ok(Self { bytes })
    }

    /// Returns the number of bytes in the pool.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: an empty buffer cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Exposes the whole pool by shared reference.
    pub fn expose(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the `n` bytes starting at `*offset` and advances `*offset` by `n`.
    ///
    /// On failure `*offset` is left untouched.
    pub(crate) fn take(&self, offset: &mut usize, n: usize) -> Result<&[u8], EntropyError> {
        let remaining = self.bytes.len().saturating_sub(*offset);

        if n > remaining {
            return Err(EntropyError::InsufficientEntropy {
                needed: n,
                remaining,
            });
        }

        let start = *offset;
        *offset += n;

        Ok(&self.bytes[start..start + n])
    }
}

impl TryFrom<&[u8]> for SeededBuffer {
    type Error = EntropyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl TryFrom<Vec<u8>> for SeededBuffer {
    type Error = EntropyError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_vec(bytes)
    }
}

impl fmt::Debug for SeededBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeededBuffer([REDACTED; {}])", self.bytes.len())
    }
}
