// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Zeroization helpers for output buffers.
//!
//! `sysrand` clears every caller buffer it fails to fill. A plain `fill(0)` on a
//! buffer that is never read again may be removed by the optimizer, so these
//! helpers pair the bulk write with a volatile read.

#![no_std]
#![warn(missing_docs)]

/// Fast bulk zeroization that can be vectorized.
///
/// Uses `write_bytes` (memset) + volatile read to prevent the optimizer
/// from removing the zeroization.
///
/// # Example
///
/// ```
/// use sysrand_util::fast_zeroize_slice;
///
/// let mut data = [1u8, 2, 3, 4, 5];
/// fast_zeroize_slice(&mut data);
/// assert!(data.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice(slice: &mut [u8]) {
    if slice.is_empty() {
        return;
    }

    // SAFETY: `slice` is a live, exclusively borrowed byte slice, valid for
    // `slice.len()` writes, and zero is a valid `u8`. The read targets its
    // first byte, which exists because the slice is non-empty.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr(), 0, slice.len());
        // Volatile read prevents the optimizer from removing the write_bytes
        core::ptr::read_volatile(slice.as_ptr());
    }
}

/// Verifies that a slice is zeroized.
///
/// ```
/// use sysrand_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}
