//! Mock IR emitter for testing and dry runs.
//!
//! # Why a mock emitter?
//!
//! The real emitter (`LircEmitter`) writes to a kernel device that:
//!
//! - Only exists on machines with IR hardware.
//! - Actually blinks an LED, which a test cannot observe.
//!
//! The `MockIrEmitter` replaces the device with in-memory recording.  Each
//! transmission is pushed into a `Mutex<Vec<...>>` so that test assertions can
//! inspect exactly what was emitted and in what order.  The `dry-run` backend
//! uses the same type, which additionally logs every transmission.
//!
//! # Usage in tests
//!
//! ```ignore
//! let emitter = Arc::new(MockIrEmitter::new());
//! let transmitter = SignalTransmitter::new(emitter.clone());
//!
//! transmitter.send("off").unwrap();
//!
//! let sent = emitter.transmissions();
//! assert_eq!(sent.len(), 1);
//! assert_eq!(sent[0].carrier_hz, 38_000);
//! ```
//!
//! # `has_emitter` and `should_fail`
//!
//! Set `has_emitter = false` to simulate a device without an IR blaster, or
//! `should_fail = true` to make every `transmit` call return an error.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::application::send_command::{CarrierFrequencyRange, EmitterError, IrEmitter};

/// One recorded call to [`IrEmitter::transmit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub carrier_hz: u32,
    pub pattern: Vec<u32>,
}

/// A mock emitter that records all transmissions without touching hardware.
pub struct MockIrEmitter {
    /// Every successful transmission, oldest first.
    pub sent: Mutex<Vec<Transmission>>,
    /// Answer to `has_ir_emitter`.
    pub has_emitter: bool,
    /// Answer to `carrier_frequencies`.
    pub carrier_ranges: Option<Vec<CarrierFrequencyRange>>,
    /// When `true`, `transmit` returns an `EmitterError::Platform`.
    pub should_fail: bool,
}

impl MockIrEmitter {
    /// A capable emitter covering 30-60 kHz that records every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// An emitter on a device that has no IR blaster.
    pub fn without_emitter() -> Self {
        Self {
            has_emitter: false,
            carrier_ranges: None,
            ..Self::default()
        }
    }

    /// An emitter whose every transmission fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of everything transmitted so far.
    pub fn transmissions(&self) -> Vec<Transmission> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockIrEmitter {
    fn default() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            has_emitter: true,
            carrier_ranges: Some(vec![CarrierFrequencyRange {
                min_hz: 30_000,
                max_hz: 60_000,
            }]),
            should_fail: false,
        }
    }
}

impl IrEmitter for MockIrEmitter {
    fn has_ir_emitter(&self) -> bool {
        self.has_emitter
    }

    fn carrier_frequencies(&self) -> Option<Vec<CarrierFrequencyRange>> {
        self.carrier_ranges.clone()
    }

    /// Records the transmission, or returns an error if `should_fail` is set.
    fn transmit(&self, carrier_hz: u32, pattern: &[u32]) -> Result<(), EmitterError> {
        if self.should_fail {
            return Err(EmitterError::Platform("mock failure".into()));
        }
        info!(
            "dry run: {} pulses at {carrier_hz} Hz ({} µs)",
            pattern.len(),
            pattern.iter().map(|&p| u64::from(p)).sum::<u64>()
        );
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Transmission {
                carrier_hz,
                pattern: pattern.to_vec(),
            });
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
