// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking backends.
//!
//! Provides a mock backend with configurable behaviour, to be passed to
//! [`Generator::init_with`](crate::Generator::init_with).

mod mock_backend;

pub use mock_backend::{MockBackend, MockBackendBehaviour};

pub(crate) use mock_backend::MockSession;
