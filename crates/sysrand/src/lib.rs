// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sysrand
//!
//! Cryptographically secure random bytes from the operating system, behind a
//! three-call handle lifecycle: `init`, `generate`, `uninit`.
//!
//! No random number algorithm lives here. The crate picks an OS facility,
//! keeps its resources open for the lifetime of a handle and guarantees that a
//! failed request never leaves stale or partial output behind.
//!
//! ## Core Types
//!
//! - [`Generator`]: handle bound to one backend
//! - [`RandError`] / [`Status`]: shared error vocabulary
//! - [`raw`]: pointer-level entry points with null checks
//!
//! ## Traits
//!
//! - [`EntropySource`]: interface for anything that fills buffers with random bytes
//!
//! ## Example
//!
//! ```rust
//! use sysrand::{EntropySource, Generator};
//!
//! let mut generator = Generator::new();
//! generator.init().expect("Failed to init()");
//!
//! let mut random = [0u8; 64];
//! generator.fill_bytes(&mut random).expect("Failed to fill_bytes(..)");
//! assert!(random.iter().any(|&b| b != 0));
//! ```
//!
//! ## Platform Support
//!
//! - Windows: `BCryptGenRandom` via bcrypt.dll, falling back to
//!   `CryptGenRandom` via advapi32.dll; both resolved at runtime
//! - Unix: `/dev/urandom` (on Linux/Android only after `/dev/random` is readable)
//! - Anything else: [`RandError::NotImplemented`]
//!
//! ## Failure Contract
//!
//! Every failed `generate` zeroizes the destination buffer before returning.
//! Requests above a backend's ceiling fail with [`RandError::TooBig`] and are
//! never split internally.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod backend;
mod error;
mod fill;
mod generator;
mod support;
mod traits;

pub mod raw;

pub use backend::BackendKind;
pub use error::{RandError, Status};
pub use fill::fill_with_random_bytes;
pub use generator::Generator;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
