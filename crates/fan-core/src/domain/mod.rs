//! Domain entities for Fan Remote.
//!
//! This module contains pure state logic with no infrastructure dependencies.
//!
//! The fan itself never reports its state back; IR is one-way.  What the
//! remote shows is therefore a *local model* of the fan, advanced each time a
//! button is pressed.  Keeping that model here, as plain data plus pure
//! transitions, means it can be unit-tested without any IR hardware.

/// Locally tracked fan state and its button transitions.
///
/// See [`remote_state::RemoteState`] for the main type.
pub mod remote_state;
