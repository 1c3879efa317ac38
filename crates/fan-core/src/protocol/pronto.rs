//! Pronto hex decoder: converts a Pronto code into microsecond pulse durations.
//!
//! Format:
//! ```text
//! [format][freq_code][once_pairs][repeat_pairs][mark][space][mark][space]...
//! ```
//! Every field is a 4-digit hexadecimal group; groups are separated by
//! whitespace.  Mark/space values count carrier cycles.
//!
//! # What is a Pronto code? (for beginners)
//!
//! Consumer IR remotes blink an LED on and off in a precise rhythm.  While the
//! LED is "on" (a *mark*) it is not steadily lit: it flickers at the *carrier
//! frequency*, usually around 38 kHz.  While it is "off" (a *space*) it is dark.
//!
//! A Pronto code writes that rhythm down as text.  The first four groups are a
//! header; every group after that is a duration measured in carrier cycles:
//!
//! | Group | Meaning                                     | Fan codes |
//! |-------|---------------------------------------------|-----------|
//! | 0     | Format (`0000` = raw learned code)          | `0000`    |
//! | 1     | Carrier frequency code                      | `006F`    |
//! | 2     | Burst pairs in the "once" sequence          | `0000`    |
//! | 3     | Burst pairs in the "repeat" sequence        | `0024`    |
//!
//! The IR transmitter wants microseconds, not cycles, so each duration is
//! multiplied by the length of one carrier cycle.
//!
//! # Fixed carrier
//!
//! The decoder always uses a 38 kHz carrier (one cycle = 26.316 µs) and skips
//! exactly four header groups.  The header's own frequency code and pair
//! counts are parsed into [`ProntoHeader`] for diagnostics but do not drive
//! the conversion.  This matches every code in the built-in catalog; it is
//! not general Pronto support.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Carrier frequency used for every transmission, in hertz.
pub const CARRIER_FREQUENCY_HZ: u32 = 38_000;

/// Number of header groups that precede the burst-pair data.
pub const HEADER_GROUPS: usize = 4;

/// Length of one 38 kHz carrier cycle in nanoseconds (26.316 µs).
///
/// Kept as an integer so the microsecond conversion truncates exactly:
/// `0x0010` is always 421 µs, never 420 from floating-point drift.
const CARRIER_CYCLE_NS: u64 = 26_316;

/// Pronto frequency codes are expressed in units of this many microseconds.
const PRONTO_CLOCK_US: f64 = 0.241_246;

/// Errors that can occur while decoding a Pronto hex string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProntoError {
    /// The code has fewer than the four header groups.
    #[error("missing Pronto header: need at least 4 groups, got {found}")]
    MissingHeader { found: usize },

    /// A group is not exactly four characters long.
    #[error("group {index} ('{group}') is not 4 characters long")]
    InvalidGroupLength { index: usize, group: String },

    /// A group contains a character that is not a hexadecimal digit.
    #[error("group {index} ('{group}') is not valid hexadecimal")]
    InvalidHex { index: usize, group: String },
}

/// The four header words of a Pronto code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProntoHeader {
    /// Format flag; `0x0000` means a raw (learned) code.
    pub format: u16,
    /// Carrier frequency code as declared by the code's author.
    pub frequency_code: u16,
    /// Number of mark/space pairs in the "once" sequence.
    pub once_pairs: u16,
    /// Number of mark/space pairs in the "repeat" sequence.
    pub repeat_pairs: u16,
}

impl ProntoHeader {
    /// The carrier frequency the header claims, rounded to the nearest hertz.
    ///
    /// Returns `None` for a zero frequency code.  Informational only: the
    /// transmitter always uses [`CARRIER_FREQUENCY_HZ`].
    ///
    /// ```rust
    /// use fan_core::protocol::ProntoHeader;
    ///
    /// let header = ProntoHeader { format: 0, frequency_code: 0x006D, once_pairs: 0, repeat_pairs: 0 };
    /// assert_eq!(header.declared_carrier_hz(), Some(38_029));
    /// ```
    pub fn declared_carrier_hz(&self) -> Option<u32> {
        if self.frequency_code == 0 {
            return None;
        }
        let hz = 1_000_000.0 / (f64::from(self.frequency_code) * PRONTO_CLOCK_US);
        Some(hz.round() as u32)
    }

    /// Total number of mark/space pairs the header declares.
    pub fn declared_pairs(&self) -> usize {
        usize::from(self.once_pairs) + usize::from(self.repeat_pairs)
    }
}

/// A decoded Pronto code: its header plus the pulse durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedSignal {
    pub header: ProntoHeader,
    /// Alternating mark/space durations in microseconds, mark first.
    pub pulses: Vec<u32>,
}

impl DecodedSignal {
    /// Sum of all pulse durations in microseconds.
    pub fn total_duration_us(&self) -> u64 {
        self.pulses.iter().map(|&p| u64::from(p)).sum()
    }

    /// Consumes the signal and returns only the pulse sequence.
    pub fn into_pulses(self) -> Vec<u32> {
        self.pulses
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes a Pronto hex string into its header and pulse sequence.
///
/// The first four groups are parsed as the header and skipped; every
/// remaining group becomes one pulse of `value × 26.316` µs, truncated.
///
/// # Errors
///
/// Returns [`ProntoError`] if a group is not four hex digits or the header is
/// incomplete.
///
/// # Examples
///
/// ```rust
/// use fan_core::protocol::decode_pronto;
///
/// let signal = decode_pronto("0000 006F 0000 0001 0010 0020").unwrap();
/// assert_eq!(signal.pulses, vec![421, 842]);
/// ```
pub fn decode_pronto(code: &str) -> Result<DecodedSignal, ProntoError> {
    let words = parse_groups(code)?;
    if words.len() < HEADER_GROUPS {
        return Err(ProntoError::MissingHeader { found: words.len() });
    }

    let header = ProntoHeader {
        format: words[0],
        frequency_code: words[1],
        once_pairs: words[2],
        repeat_pairs: words[3],
    };

    if let Some(declared) = header.declared_carrier_hz() {
        if declared != CARRIER_FREQUENCY_HZ {
            debug!(
                "Pronto header declares a {declared} Hz carrier; timing at {CARRIER_FREQUENCY_HZ} Hz"
            );
        }
    }

    let pulses = words[HEADER_GROUPS..]
        .iter()
        .map(|&cycles| cycles_to_micros(cycles))
        .collect();

    Ok(DecodedSignal { header, pulses })
}

/// Converts a duration in 38 kHz carrier cycles to whole microseconds.
pub fn cycles_to_micros(cycles: u16) -> u32 {
    // u16::MAX × 26_316 fits comfortably in u64 and the result in u32.
    (u64::from(cycles) * CARRIER_CYCLE_NS / 1_000) as u32
}

// ── Group parsing ─────────────────────────────────────────────────────────────

fn parse_groups(code: &str) -> Result<Vec<u16>, ProntoError> {
    code.split_ascii_whitespace()
        .enumerate()
        .map(|(index, group)| parse_group(index, group))
        .collect()
}

fn parse_group(index: usize, group: &str) -> Result<u16, ProntoError> {
    if group.len() != 4 {
        return Err(ProntoError::InvalidGroupLength {
            index,
            group: group.to_string(),
        });
    }
    // `from_str_radix` alone would accept a leading '+'.
    if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ProntoError::InvalidHex {
            index,
            group: group.to_string(),
        });
    }
    u16::from_str_radix(group, 16).map_err(|_| ProntoError::InvalidHex {
        index,
        group: group.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
