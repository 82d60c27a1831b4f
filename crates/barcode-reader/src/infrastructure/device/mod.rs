//! Linux evdev device access.
//!
//! [`EvdevDevice`] owns the open device file and, when requested, an
//! exclusive grab (`EVIOCGRAB`).  While grabbed, keystrokes from the scanner
//! reach only this process and are not typed into whatever window has focus.
//! The grab is released in `Drop`, so every exit path gives the device back.
//!
//! # Permissions
//!
//! Reading `/dev/input/event*` normally requires membership in the `input`
//! group (or root).  A failed grab is only a warning: decoding still works,
//! but the desktop will see the keystrokes too.

use std::fs::File;
use std::io;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use barcode_core::{EventSource, EventSourceError, InputEvent, ReaderEventSource};
use thiserror::Error;
use tracing::{debug, info, warn};

mod ioctl {
    // EVIOCGRAB: _IOW('E', 0x90, int), argument passed by value.
    nix::ioctl_write_int!(eviocgrab, b'E', 0x90);
    // EVIOCGNAME(len): _IOC(_IOC_READ, 'E', 0x06, len).
    nix::ioctl_read_buf!(eviocgname, b'E', 0x06, u8);
}

/// Size of the buffer handed to `EVIOCGNAME`.
const NAME_BUF_LEN: usize = 256;

/// Name reported when the device does not answer `EVIOCGNAME`.
const UNKNOWN_NAME: &str = "Unknown";

/// Error type for device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("failed to open event device {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An open evdev node.
#[derive(Debug)]
pub struct EvdevDevice {
    path: PathBuf,
    name: Option<String>,
    grabbed: bool,
    source: ReaderEventSource<File>,
}

impl EvdevDevice {
    /// Opens `path` read-only and, if `grab` is set, tries to take exclusive
    /// access.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Open`] if the file cannot be opened.  A failed
    /// grab is logged and reported through [`EvdevDevice::is_grabbed`].
    pub fn open(path: impl AsRef<Path>, grab: bool) -> Result<Self, DeviceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| DeviceError::Open {
            path: path.clone(),
            source,
        })?;

        let name = query_name(&file).ok();
        info!(
            device = %path.display(),
            name = name.as_deref().unwrap_or(UNKNOWN_NAME),
            "opened event device"
        );

        let grabbed = grab && try_grab(&file, &path, name.as_deref());

        Ok(Self {
            path,
            name,
            grabbed,
            source: ReaderEventSource::new(file),
        })
    }

    /// Returns the path the device was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the name reported by `EVIOCGNAME`, if the device answered.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if this process holds the exclusive grab.
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }
}

impl EventSource for EvdevDevice {
    fn next_event(&mut self) -> Result<InputEvent, EventSourceError> {
        self.source.next_event()
    }
}

impl Drop for EvdevDevice {
    fn drop(&mut self) {
        if !self.grabbed {
            return;
        }
        match set_grab(self.source.get_ref(), false) {
            Ok(()) => debug!(device = %self.path.display(), "released exclusive access"),
            Err(e) => warn!(device = %self.path.display(), "failed to release exclusive access: {e}"),
        }
    }
}

// ── ioctl helpers ─────────────────────────────────────────────────────────────

fn try_grab(file: &File, path: &Path, name: Option<&str>) -> bool {
    match set_grab(file, true) {
        Ok(()) => {
            info!(device = %path.display(), "acquired exclusive access");
            true
        }
        Err(e) => {
            warn!(
                "unable to get exclusive access to {} ({}): {e}",
                path.display(),
                name.unwrap_or(UNKNOWN_NAME)
            );
            false
        }
    }
}

fn set_grab(file: &File, grab: bool) -> io::Result<()> {
    let arg = if grab { 1 } else { 0 };
    // SAFETY: the descriptor is owned by `file` and stays open for the call;
    // EVIOCGRAB takes its argument by value and writes no memory.
    unsafe { ioctl::eviocgrab(file.as_raw_fd(), arg) }
        .map(|_| ())
        .map_err(io::Error::from)
}

fn query_name(file: &File) -> io::Result<String> {
    let mut buf = [0u8; NAME_BUF_LEN];
    // SAFETY: the kernel writes at most `buf.len()` bytes, the size encoded
    // in the request.
    let written = unsafe { ioctl::eviocgname(file.as_raw_fd(), &mut buf) }.map_err(io::Error::from)?;
    let written = usize::try_from(written).unwrap_or(0).min(buf.len());
    let end = buf[..written].iter().position(|&b| b == 0).unwrap_or(written);
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}
