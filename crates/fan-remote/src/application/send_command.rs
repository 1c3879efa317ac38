//! SignalTransmitter: looks up, decodes, and transmits one fan command.
//!
//! This use case sits at the application layer and delegates to an
//! [`IrEmitter`] trait object for the actual infrared emission.  The
//! platform-specific implementations are in the infrastructure layer.
//!
//! # Call flow
//!
//! ```text
//! send("off")
//!  ├─ emitter.has_ir_emitter()?      no  → CapabilityUnavailable
//!  ├─ catalog.get("off")?            no  → UnknownCommand
//!  ├─ decode_pronto(code)?           err → Decode
//!  └─ emitter.transmit(38_000, pulses)
//!                                    err → Transmit
//! ```
//!
//! Each step that fails stops the flow; nothing after it runs.  The failure is
//! logged here and returned as a [`SendError`] value, so callers can show it
//! without any further handling.

use std::fmt;
use std::sync::Arc;

use fan_core::{decode_pronto, CommandCatalog, ProntoError, CARRIER_FREQUENCY_HZ};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// Error type for IR emitter operations.
#[derive(Debug, Error)]
pub enum EmitterError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("I/O error on IR device {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("refusing to transmit an empty pulse pattern")]
    EmptyPattern,
}

/// Why a command was not sent.
#[derive(Debug, Error)]
pub enum SendError {
    /// The device has no IR transmitter.
    #[error("device doesn't have an IR emitter")]
    CapabilityUnavailable,

    /// The identifier is not in the command catalog.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The catalog entry is not a valid Pronto code.
    #[error("failed to decode IR code for '{command}': {source}")]
    Decode {
        command: String,
        #[source]
        source: ProntoError,
    },

    /// The platform transmitter reported a failure.
    #[error("failed to send IR command '{command}': {source}")]
    Transmit {
        command: String,
        #[source]
        source: EmitterError,
    },
}

/// An inclusive range of carrier frequencies an emitter supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarrierFrequencyRange {
    pub min_hz: u32,
    pub max_hz: u32,
}

impl CarrierFrequencyRange {
    pub fn contains(&self, hz: u32) -> bool {
        (self.min_hz..=self.max_hz).contains(&hz)
    }
}

impl fmt::Display for CarrierFrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} Hz", self.min_hz, self.max_hz)
    }
}

/// Platform-agnostic IR transmitter.
///
/// Each supported backend provides an implementation in the infrastructure
/// layer.
#[cfg_attr(test, mockall::automock)]
pub trait IrEmitter: Send + Sync {
    /// Whether this device can transmit infrared at all.
    fn has_ir_emitter(&self) -> bool;

    /// Carrier frequency ranges the hardware supports, if it reports them.
    fn carrier_frequencies(&self) -> Option<Vec<CarrierFrequencyRange>>;

    /// Emits `pattern` (alternating mark/space microseconds, mark first)
    /// modulated at `carrier_hz`.
    fn transmit(&self, carrier_hz: u32, pattern: &[u32]) -> Result<(), EmitterError>;
}

/// Report of a successful transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentSignal {
    pub command: String,
    pub carrier_hz: u32,
    pub pulse_count: usize,
}

/// The Signal Transmitter use case.
///
/// Holds the immutable command catalog and the platform emitter.
pub struct SignalTransmitter {
    emitter: Arc<dyn IrEmitter>,
    catalog: CommandCatalog,
}

impl SignalTransmitter {
    /// Creates a transmitter over the built-in fan catalog.
    pub fn new(emitter: Arc<dyn IrEmitter>) -> Self {
        Self::with_catalog(emitter, CommandCatalog::builtin())
    }

    /// Creates a transmitter over a custom catalog.
    pub fn with_catalog(emitter: Arc<dyn IrEmitter>, catalog: CommandCatalog) -> Self {
        Self { emitter, catalog }
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// Sends `command` through the IR emitter exactly once.
    ///
    /// Failures are logged here; the returned error is for display only.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] when the device lacks an emitter, the command is
    /// unknown, its code cannot be decoded, or the emitter fails.
    pub fn send(&self, command: &str) -> Result<SentSignal, SendError> {
        let result = self.try_send(command);
        match &result {
            Ok(sent) => debug!(
                "sent IR command: {} with {} pulses",
                sent.command, sent.pulse_count
            ),
            Err(e) => error!("{e}"),
        }
        result
    }

    fn try_send(&self, command: &str) -> Result<SentSignal, SendError> {
        if !self.emitter.has_ir_emitter() {
            return Err(SendError::CapabilityUnavailable);
        }

        let code = self
            .catalog
            .get(command)
            .ok_or_else(|| SendError::UnknownCommand(command.to_string()))?;

        let signal = decode_pronto(code).map_err(|source| SendError::Decode {
            command: command.to_string(),
            source,
        })?;

        let pulses = signal.into_pulses();
        self.emitter
            .transmit(CARRIER_FREQUENCY_HZ, &pulses)
            .map_err(|source| SendError::Transmit {
                command: command.to_string(),
                source,
            })?;

        Ok(SentSignal {
            command: command.to_string(),
            carrier_hz: CARRIER_FREQUENCY_HZ,
            pulse_count: pulses.len(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
