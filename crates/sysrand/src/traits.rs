// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::backend::BackendKind;
use crate::error::RandError;

/// Anything that can fill a buffer with cryptographically secure random bytes.
pub trait EntropySource {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// On failure `dest` has been zeroized; see [`RandError`] for the variants.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError>;
}

/// Capability set shared by every backend once it has been opened.
///
/// Opening is backend-specific (each takes different inputs); releasing happens
/// in `Drop`, in reverse order of acquisition.
pub(crate) trait OsBackend {
    /// Which strategy this is.
    fn kind(&self) -> BackendKind;

    /// Largest `dest.len()` accepted by a single [`OsBackend::fill`].
    fn max_request_len(&self) -> usize;

    /// Fills `dest` completely or fails. Partial writes are allowed on failure;
    /// the dispatcher clears them.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandError>;
}
