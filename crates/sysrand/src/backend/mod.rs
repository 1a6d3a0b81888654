// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OS backends and the per-target preference order.
//!
//! | Target  | Order                                             |
//! |---------|---------------------------------------------------|
//! | Windows | `BCryptGenRandom` (bcrypt.dll) → `CryptGenRandom` (advapi32.dll) |
//! | Unix    | `/dev/urandom`                                    |
//! | Other   | none (`NotImplemented`)                           |

#[cfg(unix)]
pub(crate) mod device_file;
#[cfg(windows)]
pub(crate) mod legacy;
#[cfg(windows)]
pub(crate) mod library;
#[cfg(windows)]
pub(crate) mod primary;

use crate::error::RandError;
use crate::traits::OsBackend;

#[cfg(any(test, feature = "test-utils"))]
use crate::support::test_utils::MockSession;

/// Identifies the strategy behind an initialized [`Generator`](crate::Generator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Modern OS API resolved at runtime (`BCryptGenRandom`).
    Primary,
    /// Older OS API resolved at runtime (`CryptGenRandom`).
    Legacy,
    /// Random device file (`/dev/urandom`).
    DeviceFile,
    /// In-process mock from the `test-utils` feature.
    #[cfg(any(test, feature = "test-utils"))]
    Mock,
}

impl BackendKind {
    /// Short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            BackendKind::Primary => "BCryptGenRandom",
            BackendKind::Legacy => "CryptGenRandom",
            BackendKind::DeviceFile => "/dev/urandom",
            #[cfg(any(test, feature = "test-utils"))]
            BackendKind::Mock => "mock",
        }
    }
}

/// The active resource bundle of a handle. At most one variant is populated.
pub(crate) enum Backend {
    None,
    #[cfg(windows)]
    Primary(primary::BCryptBackend),
    #[cfg(windows)]
    Legacy(legacy::CryptoApiBackend),
    #[cfg(unix)]
    DeviceFile(device_file::DeviceFileBackend),
    #[cfg(any(test, feature = "test-utils"))]
    Mock(MockSession),
}

impl Backend {
    fn active(&self) -> Option<&dyn OsBackend> {
        match self {
            Backend::None => None,
            #[cfg(windows)]
            Backend::Primary(backend) => Some(backend),
            #[cfg(windows)]
            Backend::Legacy(backend) => Some(backend),
            #[cfg(unix)]
            Backend::DeviceFile(backend) => Some(backend),
            #[cfg(any(test, feature = "test-utils"))]
            Backend::Mock(backend) => Some(backend),
        }
    }

    fn active_mut(&mut self) -> Option<&mut dyn OsBackend> {
        match self {
            Backend::None => None,
            #[cfg(windows)]
            Backend::Primary(backend) => Some(backend),
            #[cfg(windows)]
            Backend::Legacy(backend) => Some(backend),
            #[cfg(unix)]
            Backend::DeviceFile(backend) => Some(backend),
            #[cfg(any(test, feature = "test-utils"))]
            Backend::Mock(backend) => Some(backend),
        }
    }

    pub(crate) fn is_none(&self) -> bool {
        matches!(self, Backend::None)
    }

    pub(crate) fn kind(&self) -> Option<BackendKind> {
        self.active().map(|backend| backend.kind())
    }

    /// Checks the ceiling, then delegates. `InvalidOperation` when empty.
    pub(crate) fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        let backend = self.active_mut().ok_or(RandError::InvalidOperation)?;

        if dest.len() > backend.max_request_len() {
            return Err(RandError::TooBig);
        }

        backend.fill(dest)
    }
}

/// Opens one backend. Any resource acquired before a failure is released
/// before the error is returned.
pub(crate) type Opener = fn() -> Result<Backend, RandError>;

#[cfg(windows)]
pub(crate) const PLATFORM_CHAIN: &[Opener] = &[primary::open, legacy::open];

#[cfg(unix)]
pub(crate) const PLATFORM_CHAIN: &[Opener] = &[device_file::open];

#[cfg(not(any(windows, unix)))]
pub(crate) const PLATFORM_CHAIN: &[Opener] = &[];
