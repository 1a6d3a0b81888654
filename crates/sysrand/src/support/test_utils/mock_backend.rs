// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::BackendKind;
use crate::error::RandError;
use crate::traits::OsBackend;

/// Configurable behaviour for [`MockBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBackendBehaviour {
    /// Opens, and fills every request with the fill byte.
    None,
    /// Acquires its resource, then fails to open (the resource is released).
    FailAtInit,
    /// Opens, then fails every request without writing.
    FailAtGenerate,
    /// Opens, then writes the first half of every request and fails.
    ShortRead,
}

/// Mock backend for testing.
///
/// Counts live sessions so tests can assert that every acquired resource is
/// released, by `uninit`, by `Drop`, or by a failed `init`.
#[derive(Debug, Clone)]
pub struct MockBackend {
    behaviour: MockBackendBehaviour,
    fill_byte: u8,
    max_request_len: usize,
    live: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Creates a mock with fill byte `0xA5` and no size ceiling.
    pub fn new(behaviour: MockBackendBehaviour) -> Self {
        Self {
            behaviour,
            fill_byte: 0xA5,
            max_request_len: usize::MAX,
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Sets the (non-zero) byte written on success.
    pub fn with_fill_byte(mut self, fill_byte: u8) -> Self {
        self.fill_byte = fill_byte;
        self
    }

    /// Sets the single-call ceiling.
    pub fn with_max_request_len(mut self, max_request_len: usize) -> Self {
        self.max_request_len = max_request_len;
        self
    }

    /// Changes the behaviour of sessions opened from now on.
    pub fn change_behaviour(&mut self, behaviour: MockBackendBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of sessions opened from this mock (or its clones) and not yet
    /// released.
    pub fn live_sessions(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub(crate) fn open(&self) -> Result<MockSession, RandError> {
        self.live.fetch_add(1, Ordering::SeqCst);
        let session = MockSession {
            behaviour: self.behaviour,
            fill_byte: self.fill_byte,
            max_request_len: self.max_request_len,
            live: Arc::clone(&self.live),
        };

        match self.behaviour {
            // `session` drops here, releasing what was acquired.
            MockBackendBehaviour::FailAtInit => Err(RandError::Error),
            _ => Ok(session),
        }
    }
}

/// An opened [`MockBackend`].
pub(crate) struct MockSession {
    behaviour: MockBackendBehaviour,
    fill_byte: u8,
    max_request_len: usize,
    live: Arc<AtomicUsize>,
}

impl OsBackend for MockSession {
    fn kind(&self) -> BackendKind {
        BackendKind::Mock
    }

    fn max_request_len(&self) -> usize {
        self.max_request_len
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        match self.behaviour {
            MockBackendBehaviour::None | MockBackendBehaviour::FailAtInit => {
                dest.fill(self.fill_byte);
                Ok(())
            }
            MockBackendBehaviour::FailAtGenerate => Err(RandError::Error),
            MockBackendBehaviour::ShortRead => {
                let written = dest.len().div_ceil(2);
                dest[..written].fill(self.fill_byte);
                Err(RandError::Error)
            }
        }
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
