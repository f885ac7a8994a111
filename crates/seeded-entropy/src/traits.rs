// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::error::EntropyError;

/// Capability expected by cryptographic code that consumes entropy.
///
/// Each call to [`get_entropy`](EntropySource::get_entropy) returns
/// `entropy_size() / 8` bytes. Implementations backed by a fixed seed fail
/// once the seed is exhausted instead of falling back to another source.
pub trait EntropySource {
    /// Whether the source declares itself resistant to external prediction.
    ///
    /// This is a declared capability consumers check before accepting the
    /// source, not a statistical property of the bytes.
    fn is_prediction_resistant(&self) -> bool;

    /// Returns the next `entropy_size() / 8` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::InsufficientEntropy`] if the source cannot
    /// supply the requested bytes. No bytes are consumed on failure.
    fn get_entropy(&mut self) -> Result<Vec<u8>, EntropyError>;

    /// Returns the bit width this source was configured with.
    fn entropy_size(&self) -> usize;
}

/// Factory handing out entropy sources configured for a given bit width.
pub trait EntropySourceProvider {
    /// Source type produced by [`get`](EntropySourceProvider::get).
    type Source<'a>: EntropySource
    where
        Self: 'a;

    /// Returns a fresh source that dispenses `bits_required / 8` bytes per read.
    fn get(&self, bits_required: usize) -> Self::Source<'_>;
}
