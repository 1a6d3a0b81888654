// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors returned by [`Generator`](crate::Generator) operations.
///
/// Every failed `generate` zeroizes the caller's buffer before one of these is
/// returned, so the error never travels alongside stale output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RandError {
    /// The operating system facility reported a failure (failed call, failed
    /// load, short read).
    #[error("Error")]
    Error,

    /// A required argument was null.
    #[error("InvalidArgs")]
    InvalidArgs,

    /// The handle has no active backend.
    #[error("InvalidOperation")]
    InvalidOperation,

    /// The request exceeds the active backend's single-call ceiling. Split it
    /// into smaller calls.
    #[error("TooBig")]
    TooBig,

    /// No backend is compiled in for this target.
    #[error("NotImplemented")]
    NotImplemented,
}

impl RandError {
    /// Stable numeric code, matching [`Status::code`].
    pub const fn code(self) -> i32 {
        Status::from_error(self).code()
    }
}

/// Outcome of an operation on the pointer-level API in [`raw`](crate::raw).
///
/// Discriminants are stable and may cross an FFI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    /// Operation completed.
    Success = 0,
    /// See [`RandError::Error`].
    Error = -1,
    /// See [`RandError::InvalidArgs`].
    InvalidArgs = -2,
    /// See [`RandError::InvalidOperation`].
    InvalidOperation = -3,
    /// See [`RandError::TooBig`].
    TooBig = -11,
    /// See [`RandError::NotImplemented`].
    NotImplemented = -29,
}

impl Status {
    const fn from_error(err: RandError) -> Self {
        match err {
            RandError::Error => Status::Error,
            RandError::InvalidArgs => Status::InvalidArgs,
            RandError::InvalidOperation => Status::InvalidOperation,
            RandError::TooBig => Status::TooBig,
            RandError::NotImplemented => Status::NotImplemented,
        }
    }

    /// Numeric value of the status.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns `true` for [`Status::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Converts back into the `Result` form used by the safe API.
    pub const fn into_result(self) -> Result<(), RandError> {
        match self {
            Status::Success => Ok(()),
            Status::Error => Err(RandError::Error),
            Status::InvalidArgs => Err(RandError::InvalidArgs),
            Status::InvalidOperation => Err(RandError::InvalidOperation),
            Status::TooBig => Err(RandError::TooBig),
            Status::NotImplemented => Err(RandError::NotImplemented),
        }
    }
}

impl From<RandError> for Status {
    fn from(err: RandError) -> Self {
        Status::from_error(err)
    }
}

impl From<Result<(), RandError>> for Status {
    fn from(result: Result<(), RandError>) -> Self {
        match result {
            Ok(()) => Status::Success,
            Err(err) => Status::from_error(err),
        }
    }
}
