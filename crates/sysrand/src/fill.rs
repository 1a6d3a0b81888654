// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sysrand_util::fast_zeroize_slice;

use crate::error::RandError;
use crate::generator::Generator;

/// Fills `dest` using a short-lived [`Generator`].
///
/// Pays the full `init` cost on every call; keep a [`Generator`] around when
/// drawing repeatedly.
///
/// # Errors
///
/// Any error from [`Generator::init`] or [`Generator::generate`]. `dest` is
/// zeroized on failure, including when `init` fails.
///
/// # Example
///
/// ```rust
/// let mut nonce = [0u8; 24];
/// sysrand::fill_with_random_bytes(&mut nonce).expect("Failed to fill_with_random_bytes(..)");
/// ```
pub fn fill_with_random_bytes(dest: &mut [u8]) -> Result<(), RandError> {
    let mut generator = Generator::new();

    let result = generator
        .init()
        .and_then(|()| generator.generate(dest));

    if result.is_err() {
        fast_zeroize_slice(dest);
    }

    result
}
