// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pointer-level entry points.
//!
//! These mirror the classic handle API: every call returns a [`Status`] and
//! null pointers are reported instead of dereferenced. They are the building
//! blocks for an FFI layer; Rust callers should use [`Generator`] directly.

use core::slice;

use crate::error::Status;
use crate::generator::Generator;

/// Initializes the handle at `handle`.
///
/// The pointee is overwritten without being read or dropped, so it may hold
/// arbitrary bytes. A live handle passed here is leaked rather than released;
/// call [`uninit`] first.
///
/// Returns [`Status::InvalidArgs`] for a null `handle`.
///
/// # Safety
///
/// `handle` must be null or valid for writes of one properly aligned
/// [`Generator`].
pub unsafe fn init(handle: *mut Generator) -> Status {
    if handle.is_null() {
        return Status::InvalidArgs;
    }

    // SAFETY: non-null and valid for writes per the caller contract.
    unsafe { handle.write(Generator::new()) };
    // SAFETY: just initialized above.
    let generator = unsafe { &mut *handle };

    generator.init().into()
}

/// Releases the handle at `handle`. A null `handle` is a no-op.
///
/// # Safety
///
/// `handle` must be null or point to an initialized [`Generator`] (one that
/// went through [`init`], successful or not, or [`Generator::new`]).
pub unsafe fn uninit(handle: *mut Generator) {
    // SAFETY: null or a valid, initialized Generator per the caller contract.
    if let Some(generator) = unsafe { handle.as_mut() } {
        generator.uninit();
    }
}

/// Fills `len` bytes at `buffer` from the handle at `handle`.
///
/// Returns [`Status::InvalidArgs`] without touching memory if either pointer
/// is null. On any other failure the `len` bytes at `buffer` are zeroized.
///
/// # Safety
///
/// - `handle` must be null or point to an initialized [`Generator`].
/// - `buffer` must be null or valid for writes of `len` bytes, with
///   `len <= isize::MAX`, and must not alias `handle`.
pub unsafe fn generate(handle: *mut Generator, buffer: *mut u8, len: usize) -> Status {
    if handle.is_null() || buffer.is_null() {
        return Status::InvalidArgs;
    }

    // SAFETY: non-null, initialized and unaliased per the caller contract.
    let generator = unsafe { &mut *handle };
    // SAFETY: non-null and valid for `len` writable bytes per the caller contract.
    let dest = unsafe { slice::from_raw_parts_mut(buffer, len) };

    generator.generate(dest).into()
}
