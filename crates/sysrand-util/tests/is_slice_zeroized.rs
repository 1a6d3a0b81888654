// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod is_slice_zeroized_tests {
    use sysrand_util::is_slice_zeroized;

    #[test]
    fn test_is_slice_zeroized_empty_is_zeroized() {
        assert!(is_slice_zeroized(&[]));
    }

    #[test]
    fn test_is_slice_zeroized_detects_last_byte() {
        let mut data = [0u8; 64];
        data[63] = 1;
        assert!(!is_slice_zeroized(&data));
    }
}
