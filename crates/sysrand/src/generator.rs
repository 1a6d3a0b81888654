// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use sysrand_util::fast_zeroize_slice;

use crate::backend::{Backend, BackendKind, PLATFORM_CHAIN};
use crate::error::RandError;
use crate::traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
use crate::support::test_utils::MockBackend;

/// Handle to exactly one operating system random source.
///
/// A handle starts empty ([`Generator::new`]), is bound to a backend by
/// [`Generator::init`], serves any number of [`Generator::generate`] calls and
/// is emptied again by [`Generator::uninit`] or by going out of scope.
///
/// Backends are tried once, at `init`, in the platform's preference order:
///
/// - Windows: `BCryptGenRandom`, then `CryptGenRandom` (both resolved at runtime)
/// - Unix: `/dev/urandom`
///
/// # Thread safety
///
/// `generate` takes `&mut self`: share a handle across threads only behind a
/// lock. Creating one handle per thread is cheap and avoids the question.
///
/// # Example
///
/// ```rust
/// use sysrand::Generator;
///
/// let mut generator = Generator::new();
/// generator.init().expect("Failed to init()");
///
/// let mut key = [0u8; 32];
/// generator.generate(&mut key).expect("Failed to generate(..)");
///
/// generator.uninit();
/// assert!(!generator.is_initialized());
/// ```
pub struct Generator {
    backend: Backend,
}

impl Generator {
    /// Creates an empty handle. No OS resource is touched.
    pub const fn new() -> Self {
        Self {
            backend: Backend::None,
        }
    }

    /// Binds the handle to the first backend that opens successfully.
    ///
    /// Anything the handle held before is released first, so calling `init`
    /// twice never leaks.
    ///
    /// # Errors
    ///
    /// - [`RandError::NotImplemented`] if no backend exists for this target.
    /// - [`RandError::Error`] if every backend failed to open.
    ///
    /// The handle is empty after a failure.
    pub fn init(&mut self) -> Result<(), RandError> {
        self.init_from(PLATFORM_CHAIN.iter().copied())
    }

    /// Binds the handle to the first mock in `chain` that opens.
    ///
    /// An empty `chain` behaves like a target without backends.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn init_with(&mut self, chain: &[MockBackend]) -> Result<(), RandError> {
        self.init_from(
            chain
                .iter()
                .map(|mock| move || mock.open().map(Backend::Mock)),
        )
    }

    pub(crate) fn init_from<I, F>(&mut self, chain: I) -> Result<(), RandError>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Result<Backend, RandError>,
    {
        self.uninit();

        let mut last_err = RandError::NotImplemented;

        for open in chain {
            match open() {
                Ok(backend) => {
                    if let Some(kind) = backend.kind() {
                        log::trace!("generator bound to {}", kind.name());
                    }
                    self.backend = backend;
                    return Ok(());
                }
                Err(err) => last_err = err,
            }
        }

        log::debug!("no random backend could be opened: {last_err}");
        Err(last_err)
    }

    /// Fills `dest` with random bytes from the active backend.
    ///
    /// An empty `dest` always succeeds and touches nothing.
    ///
    /// # Errors
    ///
    /// - [`RandError::InvalidOperation`] if the handle is not initialized.
    /// - [`RandError::TooBig`] if `dest` exceeds the backend's single-call
    ///   ceiling (`u32::MAX` bytes on Windows). Requests are never split.
    /// - [`RandError::Error`] if the OS call failed or returned short.
    ///
    /// On every error `dest` is zeroized before returning.
    pub fn generate(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        if dest.is_empty() {
            return Ok(());
        }

        let result = self.backend.fill(dest);

        if result.is_err() {
            fast_zeroize_slice(dest);
        }

        result
    }

    /// Releases the active backend and empties the handle.
    ///
    /// Idempotent; a no-op on an empty handle.
    pub fn uninit(&mut self) {
        if let Some(kind) = self.backend.kind() {
            log::trace!("releasing {}", kind.name());
        }

        // Dropping the variant releases its resources.
        self.backend = Backend::None;
    }

    /// Returns `true` while a backend is bound.
    pub fn is_initialized(&self) -> bool {
        !self.backend.is_none()
    }

    /// The bound backend, if any.
    pub fn backend_kind(&self) -> Option<BackendKind> {
        self.backend.kind()
    }

    #[cfg(all(test, unix))]
    pub(crate) fn init_device_file_at(
        &mut self,
        path: &std::path::Path,
    ) -> Result<(), RandError> {
        use crate::backend::device_file::DeviceFileBackend;

        self.init_from([|| DeviceFileBackend::open_path(path).map(Backend::DeviceFile)])
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Generator {
    fn drop(&mut self) {
        self.uninit();
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("backend", &self.backend_kind())
            .finish()
    }
}

impl EntropySource for Generator {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.generate(dest)
    }
}
