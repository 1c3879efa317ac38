//! fan-remote library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does fan-remote do? (for beginners)
//!
//! A household fan ships with a small IR remote.  This program replaces that
//! remote: it stores the signal each button sends (as a Pronto code), and when
//! you "press" a button it replays the signal through an IR blaster.
//!
//! 1. A button press (`speed`, `swing`, …) is mapped to a catalog command.
//! 2. The command's Pronto code is decoded into microsecond pulse durations.
//! 3. The pulses are handed to the platform IR transmitter, once, with no
//!    acknowledgement: IR is fire-and-forget.
//! 4. If the transmission succeeded, the locally tracked fan state advances
//!    and the status card is redrawn.

/// Application layer: use cases for the remote.
pub mod application;

/// Infrastructure layer: IR emitter adapters, configuration, and console.
pub mod infrastructure;
