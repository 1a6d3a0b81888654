// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::{MaybeUninit, size_of};
use core::ptr;

use sysrand_util::is_slice_zeroized;

use crate::error::Status;
use crate::generator::Generator;
use crate::raw;
use crate::support::test_utils::{MockBackend, MockBackendBehaviour};

#[test]
fn test_raw_init_null_handle_is_invalid_args() {
    let status = unsafe { raw::init(ptr::null_mut()) };

    assert_eq!(status, Status::InvalidArgs);
}

#[test]
fn test_raw_uninit_null_handle_is_noop() {
    unsafe { raw::uninit(ptr::null_mut()) };
}

#[test]
fn test_raw_generate_null_handle_does_not_touch_buffer() {
    let mut buf = [0x77u8; 32];

    let status = unsafe { raw::generate(ptr::null_mut(), buf.as_mut_ptr(), buf.len()) };

    assert_eq!(status, Status::InvalidArgs);
    assert!(buf.iter().all(|&b| b == 0x77));
}

#[test]
fn test_raw_generate_null_buffer_is_invalid_args() {
    let mut generator = Generator::new();

    let status = unsafe { raw::generate(&mut generator, ptr::null_mut(), 32) };

    assert_eq!(status, Status::InvalidArgs);
}

#[test]
fn test_raw_generate_on_empty_handle_is_invalid_operation() {
    let mut generator = Generator::new();
    let mut buf = [0xFFu8; 32];

    let status = unsafe { raw::generate(&mut generator, buf.as_mut_ptr(), buf.len()) };

    assert_eq!(status, Status::InvalidOperation);
    assert!(is_slice_zeroized(&buf));
}

#[test]
fn test_raw_generate_zero_len_succeeds() {
    let mut generator = Generator::new();
    let mut buf = [0xFFu8; 4];

    let status = unsafe { raw::generate(&mut generator, buf.as_mut_ptr(), 0) };

    assert_eq!(status, Status::Success);
    assert_eq!(buf, [0xFF; 4]);
}

#[test]
fn test_raw_generate_reports_backend_failure() {
    let mut generator = Generator::new();
    generator
        .init_with(&[MockBackend::new(MockBackendBehaviour::FailAtGenerate)])
        .expect("Failed to init_with(..)");
    let mut buf = [0xFFu8; 32];

    let status = unsafe { raw::generate(&mut generator, buf.as_mut_ptr(), buf.len()) };

    assert_eq!(status, Status::Error);
    assert!(is_slice_zeroized(&buf));
}

#[test]
fn test_raw_lifecycle_over_garbage_memory() {
    let mut slot = MaybeUninit::<Generator>::uninit();
    let handle = slot.as_mut_ptr();

    // Arbitrary prior content
    unsafe { ptr::write_bytes(handle as *mut u8, 0xA5, size_of::<Generator>()) };

    assert_eq!(unsafe { raw::init(handle) }, Status::Success);

    let mut buf = [0u8; 64];
    let status = unsafe { raw::generate(handle, buf.as_mut_ptr(), buf.len()) };
    assert_eq!(status, Status::Success);
    assert!(!is_slice_zeroized(&buf));

    unsafe { raw::uninit(handle) };
    assert!(!unsafe { &*handle }.is_initialized());

    // Idempotent
    unsafe { raw::uninit(handle) };
    unsafe { slot.assume_init_drop() };
}
