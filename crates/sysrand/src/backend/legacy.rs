// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `CryptGenRandom` through an ephemeral CryptoAPI context, for systems where
//! bcrypt.dll is missing or refuses to open the RNG provider.

use core::mem::transmute;

use windows::core::{PCWSTR, s, w};

use super::library::{Library, RawProc};
use super::{Backend, BackendKind};
use crate::error::RandError;
use crate::traits::OsBackend;

/// `HCRYPTPROV` is a `ULONG_PTR`.
type CryptProv = usize;

type CryptAcquireContextWFn = unsafe extern "system" fn(
    ph_prov: *mut CryptProv,
    sz_container: PCWSTR,
    sz_provider: PCWSTR,
    dw_prov_type: u32,
    dw_flags: u32,
) -> i32;

type CryptReleaseContextFn = unsafe extern "system" fn(h_prov: CryptProv, dw_flags: u32) -> i32;

type CryptGenRandomFn =
    unsafe extern "system" fn(h_prov: CryptProv, dw_len: u32, pb_buffer: *mut u8) -> i32;

const PROV_RSA_FULL: u32 = 1;
/// No persisted key container is needed to draw random bytes.
const CRYPT_VERIFYCONTEXT: u32 = 0xF000_0000;
/// Never show UI.
const CRYPT_SILENT: u32 = 0x0000_0040;

pub(crate) fn open() -> Result<Backend, RandError> {
    CryptoApiBackend::open().map(Backend::Legacy)
}

pub(crate) struct CryptoApiBackend {
    provider: CryptProv,
    release_context: CryptReleaseContextFn,
    gen_random: CryptGenRandomFn,
    _library: Library,
}

impl CryptoApiBackend {
    fn open() -> Result<Self, RandError> {
        let library = Library::load(w!("advapi32.dll"), "advapi32.dll")?;

        let acquire_context = library.symbol(s!("CryptAcquireContextW"))?;
        let release_context = library.symbol(s!("CryptReleaseContext"))?;
        let gen_random = library.symbol(s!("CryptGenRandom"))?;

        // SAFETY: the exports are documented with exactly these signatures.
        let (acquire_context, release_context, gen_random) = unsafe {
            (
                transmute::<RawProc, CryptAcquireContextWFn>(acquire_context),
                transmute::<RawProc, CryptReleaseContextFn>(release_context),
                transmute::<RawProc, CryptGenRandomFn>(gen_random),
            )
        };

        let mut provider: CryptProv = 0;
        // SAFETY: `provider` is a valid out-pointer; null container and
        // provider names are allowed with CRYPT_VERIFYCONTEXT.
        let acquired = unsafe {
            acquire_context(
                &mut provider,
                PCWSTR::null(),
                PCWSTR::null(),
                PROV_RSA_FULL,
                CRYPT_VERIFYCONTEXT | CRYPT_SILENT,
            )
        };

        if acquired == 0 || provider == 0 {
            log::debug!("advapi32.dll: CryptAcquireContextW failed");
            return Err(RandError::Error);
        }

        Ok(Self {
            provider,
            release_context,
            gen_random,
            _library: library,
        })
    }
}

impl OsBackend for CryptoApiBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Legacy
    }

    fn max_request_len(&self) -> usize {
        // `dwLen` is a DWORD.
        u32::MAX as usize
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        let len = u32::try_from(dest.len()).map_err(|_| RandError::TooBig)?;

        // SAFETY: `self.provider` is held until `Drop`; `dest` is valid for
        // `len` writable bytes.
        let ok = unsafe { (self.gen_random)(self.provider, len, dest.as_mut_ptr()) };

        if ok == 0 {
            log::debug!("CryptGenRandom failed");
            return Err(RandError::Error);
        }

        Ok(())
    }
}

impl Drop for CryptoApiBackend {
    fn drop(&mut self) {
        // SAFETY: `self.provider` was acquired by CryptAcquireContextW and is
        // released exactly once, before the library is freed.
        if unsafe { (self.release_context)(self.provider, 0) } == 0 {
            log::debug!("CryptReleaseContext failed");
        }
    }
}
