// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `BCryptGenRandom` through an explicitly opened `"RNG"` algorithm provider.

use core::ffi::c_void;
use core::mem::transmute;
use core::ptr;

use windows::core::{PCWSTR, s, w};

use super::library::{Library, RawProc};
use super::{Backend, BackendKind};
use crate::error::RandError;
use crate::traits::OsBackend;

type BCryptOpenAlgorithmProviderFn = unsafe extern "system" fn(
    ph_algorithm: *mut *mut c_void,
    psz_alg_id: PCWSTR,
    psz_implementation: PCWSTR,
    dw_flags: u32,
) -> i32;

type BCryptCloseAlgorithmProviderFn =
    unsafe extern "system" fn(h_algorithm: *mut c_void, dw_flags: u32) -> i32;

type BCryptGenRandomFn = unsafe extern "system" fn(
    h_algorithm: *mut c_void,
    pb_buffer: *mut u8,
    cb_buffer: u32,
    dw_flags: u32,
) -> i32;

/// `STATUS_SUCCESS`. Any other NTSTATUS is a failure.
const STATUS_SUCCESS: i32 = 0;

pub(crate) fn open() -> Result<Backend, RandError> {
    BCryptBackend::open().map(Backend::Primary)
}

pub(crate) struct BCryptBackend {
    algorithm: *mut c_void,
    close_provider: BCryptCloseAlgorithmProviderFn,
    gen_random: BCryptGenRandomFn,
    // Declared last: dropped after `Drop::drop` has closed the provider.
    _library: Library,
}

impl BCryptBackend {
    fn open() -> Result<Self, RandError> {
        let library = Library::load(w!("bcrypt.dll"), "bcrypt.dll")?;

        let open_provider = library.symbol(s!("BCryptOpenAlgorithmProvider"))?;
        let close_provider = library.symbol(s!("BCryptCloseAlgorithmProvider"))?;
        let gen_random = library.symbol(s!("BCryptGenRandom"))?;

        // SAFETY: the exports are documented with exactly these signatures.
        let (open_provider, close_provider, gen_random) = unsafe {
            (
                transmute::<RawProc, BCryptOpenAlgorithmProviderFn>(open_provider),
                transmute::<RawProc, BCryptCloseAlgorithmProviderFn>(close_provider),
                transmute::<RawProc, BCryptGenRandomFn>(gen_random),
            )
        };

        let mut algorithm = ptr::null_mut();
        // SAFETY: `algorithm` is a valid out-pointer; the algorithm id is a
        // static null-terminated literal; a null implementation selects the
        // default provider.
        let status = unsafe { open_provider(&mut algorithm, w!("RNG"), PCWSTR::null(), 0) };

        if status != STATUS_SUCCESS || algorithm.is_null() {
            log::debug!("bcrypt.dll: BCryptOpenAlgorithmProvider failed: {status:#010x}");
            return Err(RandError::Error);
        }

        Ok(Self {
            algorithm,
            close_provider,
            gen_random,
            _library: library,
        })
    }
}

impl OsBackend for BCryptBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Primary
    }

    fn max_request_len(&self) -> usize {
        // `cbBuffer` is a ULONG.
        u32::MAX as usize
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        let len = u32::try_from(dest.len()).map_err(|_| RandError::TooBig)?;

        // SAFETY: `self.algorithm` stays open until `Drop`; `dest` is valid for
        // `len` writable bytes.
        let status = unsafe { (self.gen_random)(self.algorithm, dest.as_mut_ptr(), len, 0) };

        if status != STATUS_SUCCESS {
            log::debug!("BCryptGenRandom failed: {status:#010x}");
            return Err(RandError::Error);
        }

        Ok(())
    }
}

impl Drop for BCryptBackend {
    fn drop(&mut self) {
        // SAFETY: `self.algorithm` was opened by BCryptOpenAlgorithmProvider and
        // is closed exactly once, before the library is freed.
        let status = unsafe { (self.close_provider)(self.algorithm, 0) };

        if status != STATUS_SUCCESS {
            log::debug!("BCryptCloseAlgorithmProvider failed: {status:#010x}");
        }
    }
}
