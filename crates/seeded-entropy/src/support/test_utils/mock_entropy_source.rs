// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::error::EntropyError;
use crate::seed::SeededBuffer;
use crate::traits::EntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (dispenses the seed like a cursor).
    None,
    /// Always fail get_entropy.
    FailAlways,
    /// Fail get_entropy on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthGetEntropy(usize),
    /// Dispense normally but report no prediction resistance.
    NotPredictionResistant,
}

/// Mock entropy source for testing.
///
/// Owns its seed and dispenses it like an [`EntropyCursor`](crate::EntropyCursor),
/// but allows simulating failures via [`MockEntropySourceBehaviour`].
/// Simulated failures consume nothing.
#[derive(Debug)]
pub struct MockEntropySource {
    seed: SeededBuffer,
    offset: usize,
    bits_required: usize,
    behaviour: MockEntropySourceBehaviour,
    get_entropy_count: usize,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(
        seed: SeededBuffer,
        bits_required: usize,
        behaviour: MockEntropySourceBehaviour,
    ) -> Self {
        Self {
            seed,
            offset: 0,
            bits_required,
            behaviour,
            get_entropy_count: 0,
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&mut self) {
        self.get_entropy_count = 0;
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.get_entropy_count
    }

    /// Position of the next unread byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn simulated_failure(&self) -> EntropyError {
        EntropyError::InsufficientEntropy {
            needed: self.bits_required / 8,
            remaining: self.seed.len() - self.offset,
        }
    }

    fn dispense(&mut self) -> Result<Vec<u8>, EntropyError> {
        let bytes = self.seed.take(&mut self.offset, self.bits_required / 8)?;

        Ok(bytes.to_vec())
    }
}

impl EntropySource for MockEntropySource {
    fn is_prediction_resistant(&self) -> bool {
        self.behaviour != MockEntropySourceBehaviour::NotPredictionResistant
    }

    fn get_entropy(&mut self) -> Result<Vec<u8>, EntropyError> {
        let current = self.get_entropy_count;
        self.get_entropy_count = current + 1;

        match self.behaviour {
            MockEntropySourceBehaviour::None
            | MockEntropySourceBehaviour::NotPredictionResistant => self.dispense(),
            MockEntropySourceBehaviour::FailAlways => Err(self.simulated_failure()),
            MockEntropySourceBehaviour::FailAtNthGetEntropy(n) if current + 1 == n => {
                Err(self.simulated_failure())
            }
            MockEntropySourceBehaviour::FailAtNthGetEntropy(_) => self.dispense(),
        }
    }

    fn entropy_size(&self) -> usize {
        self.bits_required
    }
}
