// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random device file backend (`/dev/urandom`).
//!
//! The device is opened once per handle and read directly on every request.
//! On Linux and Android `/dev/urandom` does not block before the kernel pool
//! is seeded, so opening first waits for `/dev/random` to become readable.

use std::fs::File;
use std::io::Read;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;

use super::{Backend, BackendKind};
use crate::error::RandError;
use crate::traits::OsBackend;

const DEVICE_PATH: &str = "/dev/urandom";

pub(crate) fn open() -> Result<Backend, RandError> {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    wait_for_entropy_pool()?;

    DeviceFileBackend::open_path(Path::new(DEVICE_PATH)).map(Backend::DeviceFile)
}

/// Blocks until the kernel reports `/dev/random` readable, i.e. the pool has
/// been initialized at least once.
#[cfg(any(target_os = "linux", target_os = "android"))]
fn wait_for_entropy_pool() -> Result<(), RandError> {
    use std::os::fd::AsRawFd;

    let random = File::open("/dev/random").map_err(|err| {
        log::debug!("/dev/random: open failed: {err}");
        RandError::Error
    })?;

    wait_readable(random.as_raw_fd())
}

/// Polls `fd` until it reports `POLLIN`. Any other wake-up (`POLLERR`,
/// `POLLHUP`, `POLLNVAL`) is a failure.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) fn wait_readable(fd: std::os::fd::RawFd) -> Result<(), RandError> {
    use std::io;

    let mut pfd = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };

    loop {
        // SAFETY: `pfd` is a single valid pollfd; poll reports a stale
        // descriptor through `revents` rather than touching it.
        let ret = unsafe { libc::poll(&mut pfd, 1, -1) };
        if ret > 0 {
            if pfd.revents & libc::POLLIN != 0 {
                return Ok(());
            }

            log::debug!("fd {fd}: poll woke without POLLIN (revents {:#x})", pfd.revents);
            return Err(RandError::Error);
        }

        if ret == 0 {
            continue;
        }

        let err = io::Error::last_os_error();
        match err.raw_os_error() {
            Some(libc::EINTR) | Some(libc::EAGAIN) => continue,
            _ => {
                log::debug!("fd {fd}: poll failed: {err}");
                return Err(RandError::Error);
            }
        }
    }
}

pub(crate) struct DeviceFileBackend {
    file: File,
}

impl DeviceFileBackend {
    /// Opens `path` for binary reads. Anything but a character device is
    /// rejected.
    pub(crate) fn open_path(path: &Path) -> Result<Self, RandError> {
        let file = File::open(path).map_err(|err| {
            log::debug!("{}: open failed: {err}", path.display());
            RandError::Error
        })?;

        let metadata = file.metadata().map_err(|err| {
            log::debug!("{}: fstat failed: {err}", path.display());
            RandError::Error
        })?;

        if !metadata.file_type().is_char_device() {
            log::debug!("{}: not a character device", path.display());
            return Err(RandError::Error);
        }

        Ok(Self { file })
    }
}

impl OsBackend for DeviceFileBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::DeviceFile
    }

    fn max_request_len(&self) -> usize {
        isize::MAX as usize
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        let len = dest.len();

        // The device blocks until it can satisfy a read; a short read means
        // something else is behind the descriptor.
        self.file.read_exact(dest).map_err(|err| {
            log::debug!("random device: read of {len} bytes failed: {err}");
            RandError::Error
        })
    }
}
