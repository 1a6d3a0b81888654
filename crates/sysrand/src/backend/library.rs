// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime loading of system DLLs.
//!
//! Both Windows backends resolve their entry points at runtime so the crate
//! never links against `bcrypt.lib` or `advapi32.lib`, and a missing export
//! degrades to the next backend instead of failing process start-up.

use windows::Win32::Foundation::{FreeLibrary, HMODULE};
use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};
use windows::core::{PCSTR, PCWSTR};

use crate::error::RandError;

/// Untyped export as returned by `GetProcAddress`.
pub(crate) type RawProc = unsafe extern "system" fn() -> isize;

/// RAII handle to a loaded DLL. `FreeLibrary` runs on `Drop`, whether or not
/// any symbol was resolved from it.
pub(crate) struct Library {
    module: HMODULE,
    name: &'static str,
}

impl Library {
    /// Loads `path`. `name` is only used in log output.
    pub(crate) fn load(path: PCWSTR, name: &'static str) -> Result<Self, RandError> {
        // SAFETY: `path` is a static, null-terminated UTF-16 literal.
        let module = unsafe { LoadLibraryW(path) }.map_err(|err| {
            log::debug!("{name}: LoadLibraryW failed: {err}");
            RandError::Error
        })?;

        if module.is_invalid() {
            log::debug!("{name}: LoadLibraryW returned a null module");
            return Err(RandError::Error);
        }

        Ok(Self { module, name })
    }

    /// Resolves `symbol`, failing on a null export.
    ///
    /// The caller transmutes the result to the documented signature.
    pub(crate) fn symbol(&self, symbol: PCSTR) -> Result<RawProc, RandError> {
        // SAFETY: `self.module` is a live module handle and `symbol` is a
        // static, null-terminated ANSI literal.
        let proc = unsafe { GetProcAddress(self.module, symbol) };

        proc.ok_or_else(|| {
            // SAFETY: `symbol` is a valid null-terminated string (see above).
            let symbol = unsafe { symbol.to_string() }.unwrap_or_default();
            log::debug!("{}: {symbol} not exported", self.name);
            RandError::Error
        })
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        // SAFETY: `self.module` came from a successful LoadLibraryW and is
        // freed exactly once, here. Every resolved pointer is owned by the
        // backend holding this library and dies with it.
        if let Err(err) = unsafe { FreeLibrary(self.module) } {
            log::debug!("{}: FreeLibrary failed: {err}", self.name);
        }
    }
}
