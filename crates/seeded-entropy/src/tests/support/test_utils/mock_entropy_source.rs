// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;

use crate::error::EntropyError;
use crate::seed::SeededBuffer;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

fn seed() -> SeededBuffer {
    SeededBuffer::from_vec((0u8..32).collect()).expect("Failed to create seed")
}

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mut mock = MockEntropySource::new(seed(), 64, MockEntropySourceBehaviour::None);

    let result = mock.get_entropy();

    assert_eq!(result, Ok(vec![0, 1, 2, 3, 4, 5, 6, 7]));
    assert!(mock.is_prediction_resistant());
    assert_eq!(mock.entropy_size(), 64);
}

#[test]
fn test_mock_entropy_source_behaviour_fail_always() {
    let mut mock = MockEntropySource::new(seed(), 64, MockEntropySourceBehaviour::FailAlways);

    let result = mock.get_entropy();

    assert!(result.is_err());
    assert!(matches!(
        result,
        Err(EntropyError::InsufficientEntropy {
            needed: 8,
            remaining: 32
        })
    ));
    assert_eq!(mock.offset(), 0);
}

#[test]
fn test_mock_entropy_source_behaviour_fail_at_nth_first_call() {
    let mut mock =
        MockEntropySource::new(seed(), 64, MockEntropySourceBehaviour::FailAtNthGetEntropy(1));

    // First call fails
    let result = mock.get_entropy();
    assert!(matches!(
        result,
        Err(EntropyError::InsufficientEntropy { .. })
    ));

    // Second call succeeds
    let result = mock.get_entropy();
    assert_eq!(result, Ok(vec![0, 1, 2, 3, 4, 5, 6, 7]));
}

#[test]
fn test_mock_entropy_source_behaviour_fail_at_nth_third_call() {
    let mut mock =
        MockEntropySource::new(seed(), 64, MockEntropySourceBehaviour::FailAtNthGetEntropy(3));

    // First two calls succeed
    assert!(mock.get_entropy().is_ok());
    assert!(mock.get_entropy().is_ok());

    // Third call fails
    let result = mock.get_entropy();
    assert!(matches!(
        result,
        Err(EntropyError::InsufficientEntropy {
            needed: 8,
            remaining: 16
        })
    ));

    // Fourth call succeeds
    assert!(mock.get_entropy().is_ok());
}

#[test]
fn test_mock_entropy_source_behaviour_not_prediction_resistant() {
    let mut mock = MockEntropySource::new(
        seed(),
        64,
        MockEntropySourceBehaviour::NotPredictionResistant,
    );

    assert!(!mock.is_prediction_resistant());
    assert!(mock.get_entropy().is_ok());
}

#[test]
fn test_mock_entropy_source_exhausts_like_cursor() {
    let mut mock = MockEntropySource::new(seed(), 128, MockEntropySourceBehaviour::None);

    assert!(mock.get_entropy().is_ok());
    assert!(mock.get_entropy().is_ok());
    assert_eq!(
        mock.get_entropy(),
        Err(EntropyError::InsufficientEntropy {
            needed: 16,
            remaining: 0
        })
    );
}

#[test]
fn test_mock_entropy_source_call_count() {
    let mut mock = MockEntropySource::new(seed(), 64, MockEntropySourceBehaviour::None);

    assert_eq!(mock.call_count(), 0);

    mock.get_entropy().unwrap();
    assert_eq!(mock.call_count(), 1);

    mock.get_entropy().unwrap();
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut mock = MockEntropySource::new(seed(), 64, MockEntropySourceBehaviour::None);

    // First works
    assert!(mock.get_entropy().is_ok());

    // Change behaviour
    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);

    // Now fails
    assert!(mock.get_entropy().is_err());

    // Change back
    mock.change_behaviour(MockEntropySourceBehaviour::None);

    // Works again
    assert!(mock.get_entropy().is_ok());
}
