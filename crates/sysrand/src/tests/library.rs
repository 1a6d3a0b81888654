// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use windows::core::{s, w};

use crate::backend::library::Library;
use crate::error::RandError;

#[test]
fn test_load_resolves_exported_symbol() {
    let library = Library::load(w!("bcrypt.dll"), "bcrypt.dll").expect("Failed to load(..)");

    assert!(library.symbol(s!("BCryptGenRandom")).is_ok());
}

#[test]
fn test_symbol_missing_export_is_error() {
    let library = Library::load(w!("bcrypt.dll"), "bcrypt.dll").expect("Failed to load(..)");

    let result = library.symbol(s!("SysrandDoesNotExist"));
    assert!(matches!(result, Err(RandError::Error)));
}

#[test]
fn test_load_missing_library_is_error() {
    let result = Library::load(w!("sysrand-missing-library.dll"), "missing");
    assert!(matches!(result, Err(RandError::Error)));
}

#[test]
fn test_drop_then_reload() {
    // FreeLibrary on drop must leave the DLL loadable again.
    for _ in 0..4 {
        let library = Library::load(w!("bcrypt.dll"), "bcrypt.dll").expect("Failed to load(..)");
        assert!(library.symbol(s!("BCryptGenRandom")).is_ok());
        drop(library);
    }
}
