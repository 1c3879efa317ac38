//! Linux IR emission through a LIRC character device (`/dev/lircN`).
//!
//! # What is LIRC? (for beginners)
//!
//! LIRC ("Linux Infrared Remote Control") is the kernel's interface to IR
//! hardware.  A transmitter shows up as a character device; writing to it in
//! *pulse mode* emits a signal.  The write buffer is an array of native-endian
//! `u32` durations in microseconds, alternating pulse (LED on) and space
//! (LED off), starting and **ending** with a pulse:
//!
//! ```text
//! [pulse][space][pulse][space] ... [pulse]
//! ```
//!
//! Pronto codes end with a long trailing space (the gap before a repeat), so
//! a decoded fan code always has an even length.  The kernel rejects an even
//! count with `EINVAL`; the trailing space is dropped before writing.  Nothing
//! follows it, so the emitted light is identical.
//!
//! # Carrier frequency
//!
//! The carrier is configured with the `LIRC_SET_SEND_CARRIER` ioctl.  This
//! backend does not issue ioctls; it relies on the driver default, which is
//! 38 kHz for the common GPIO and USB transmitters.  Requests for any other
//! carrier are logged at `warn` and sent at the driver default.
//!
//! # Permissions
//!
//! The device is normally owned by `root:video` or similar.  Run as a member of
//! that group, or add a udev rule, otherwise `transmit` fails with an
//! `EmitterError::Io` (permission denied).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::send_command::{CarrierFrequencyRange, EmitterError, IrEmitter};

/// Carrier most LIRC transmit drivers use when none is configured.
pub const LIRC_DEFAULT_CARRIER_HZ: u32 = 38_000;

/// Linux LIRC IR emitter.
///
/// The device is opened for each transmission and closed afterwards, so a
/// long-running process does not hold it.
pub struct LircEmitter {
    device: PathBuf,
}

impl LircEmitter {
    pub fn new(device: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
        }
    }

    pub fn device(&self) -> &Path {
        &self.device
    }
}

impl IrEmitter for LircEmitter {
    /// `true` if the configured path exists and is a character device.
    fn has_ir_emitter(&self) -> bool {
        match fs::metadata(&self.device) {
            Ok(meta) => meta.file_type().is_char_device(),
            Err(e) => {
                debug!("IR device {} unavailable: {e}", self.device.display());
                false
            }
        }
    }

    /// LIRC does not expose supported ranges without an ioctl.
    fn carrier_frequencies(&self) -> Option<Vec<CarrierFrequencyRange>> {
        None
    }

    fn transmit(&self, carrier_hz: u32, pattern: &[u32]) -> Result<(), EmitterError> {
        let frame = encode_pulse_frame(pattern)?;

        if carrier_hz != LIRC_DEFAULT_CARRIER_HZ {
            warn!(
                "LIRC backend cannot set a {carrier_hz} Hz carrier; using the driver default ({LIRC_DEFAULT_CARRIER_HZ} Hz)"
            );
        }

        let mut file = OpenOptions::new()
            .write(true)
            .open(&self.device)
            .map_err(|source| EmitterError::Io {
                path: self.device.clone(),
                source,
            })?;
        file.write_all(&frame).map_err(|source| EmitterError::Io {
            path: self.device.clone(),
            source,
        })?;

        debug!(
            "wrote {} durations to {}",
            frame.len() / 4,
            self.device.display()
        );
        Ok(())
    }
}

/// Encodes `pattern` as the byte buffer LIRC expects.
///
/// A trailing space is dropped so the frame ends on a pulse.
///
/// # Errors
///
/// Returns [`EmitterError::EmptyPattern`] if no pulse remains.
pub fn encode_pulse_frame(pattern: &[u32]) -> Result<Vec<u8>, EmitterError> {
    let pulses = if pattern.len() % 2 == 0 {
        &pattern[..pattern.len().saturating_sub(1)]
    } else {
        pattern
    };
    if pulses.is_empty() {
        return Err(EmitterError::EmptyPattern);
    }
    Ok(pulses.iter().flat_map(|d| d.to_ne_bytes()).collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
