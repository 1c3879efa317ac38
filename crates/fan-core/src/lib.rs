//! # fan-core
//!
//! Shared library for Fan Remote containing the Pronto IR decoder, the fixed
//! fan command catalog, and the remote-state reducer that drives the status
//! display.
//!
//! It has zero dependencies on OS APIs, IR hardware, or the terminal.
//!
//! # Architecture overview (for beginners)
//!
//! Fan Remote turns a phone-style "button press" into an infrared signal that
//! a household fan understands.  The signal for every button was captured once
//! and stored as a *Pronto hex* string; at runtime the string is decoded into a
//! list of LED on/off durations and handed to the IR transmitter.
//!
//! This crate (`fan-core`) is the pure foundation.  It defines:
//!
//! - **`protocol`** – The Pronto hex decoder: header parsing and the conversion
//!   of carrier-cycle counts into microsecond pulse durations.
//!
//! - **`catalog`** – The read-only table of fan commands (`on`, `off`, `swing`,
//!   `timer`, `wind`) and their Pronto codes.
//!
//! - **`domain`** – The locally tracked remote state (speed, timer, swing,
//!   wind mode) and the pure transitions applied when a button is pressed.

pub mod catalog;
pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `fan_core::CommandCatalog` instead of `fan_core::catalog::CommandCatalog`.
pub use catalog::{CommandCatalog, FanCommand, ParseFanCommandError};
pub use domain::remote_state::{
    Button, InvalidSpeedError, ParseButtonError, RemoteState, TimerSetting, WindMode,
};
pub use protocol::pronto::{
    decode_pronto, DecodedSignal, ProntoError, ProntoHeader, CARRIER_FREQUENCY_HZ,
};
