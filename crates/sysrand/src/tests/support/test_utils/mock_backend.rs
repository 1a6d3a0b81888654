// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::backend::BackendKind;
use crate::error::RandError;
use crate::support::test_utils::{MockBackend, MockBackendBehaviour};
use crate::traits::OsBackend;

#[test]
fn test_mock_backend_behaviour_none() {
    let mock = MockBackend::new(MockBackendBehaviour::None).with_fill_byte(0x3C);
    let mut session = mock.open().expect("Failed to open()");
    let mut buf = [0u8; 32];

    let result = session.fill(&mut buf);

    assert!(result.is_ok());
    assert!(buf.iter().all(|&b| b == 0x3C));
    assert_eq!(session.kind(), BackendKind::Mock);
}

#[test]
fn test_mock_backend_behaviour_fail_at_init_releases_session() {
    let mock = MockBackend::new(MockBackendBehaviour::FailAtInit);

    let result = mock.open();

    assert!(matches!(result, Err(RandError::Error)));
    assert_eq!(mock.live_sessions(), 0);
}

#[test]
fn test_mock_backend_behaviour_fail_at_generate() {
    let mock = MockBackend::new(MockBackendBehaviour::FailAtGenerate);
    let mut session = mock.open().expect("Failed to open()");
    let mut buf = [0u8; 32];

    let result = session.fill(&mut buf);

    assert!(matches!(result, Err(RandError::Error)));
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn test_mock_backend_behaviour_short_read_writes_half() {
    let mock = MockBackend::new(MockBackendBehaviour::ShortRead).with_fill_byte(0x5A);
    let mut session = mock.open().expect("Failed to open()");
    let mut buf = [0u8; 9];

    let result = session.fill(&mut buf);

    assert!(matches!(result, Err(RandError::Error)));
    assert!(buf[..5].iter().all(|&b| b == 0x5A));
    assert!(buf[5..].iter().all(|&b| b == 0));
}

#[test]
fn test_mock_backend_counts_live_sessions_across_clones() {
    let mock = MockBackend::new(MockBackendBehaviour::None);
    let clone = mock.clone();

    let first = mock.open().expect("Failed to open() (#0)");
    let second = clone.open().expect("Failed to open() (#1)");
    assert_eq!(mock.live_sessions(), 2);

    drop(first);
    assert_eq!(clone.live_sessions(), 1);

    drop(second);
    assert_eq!(mock.live_sessions(), 0);
}

#[test]
fn test_mock_backend_change_behaviour() {
    let mut mock = MockBackend::new(MockBackendBehaviour::None);

    // First works
    assert!(mock.open().is_ok());

    // Change behaviour
    mock.change_behaviour(MockBackendBehaviour::FailAtInit);

    // Now fails
    assert!(mock.open().is_err());

    // Change back
    mock.change_behaviour(MockBackendBehaviour::None);

    // Works again
    assert!(mock.open().is_ok());
    assert_eq!(mock.live_sessions(), 0);
}

#[test]
fn test_mock_backend_reports_configured_ceiling() {
    let mock = MockBackend::new(MockBackendBehaviour::None).with_max_request_len(16);
    let session = mock.open().expect("Failed to open()");

    assert_eq!(session.max_request_len(), 16);
}
