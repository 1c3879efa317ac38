//! Application layer use cases for the remote.
//!
//! # What use cases does the remote have?
//!
//! - **`send_command`** – Looks up a command in the catalog, decodes its
//!   Pronto code, and transmits it through an `IrEmitter` implementation
//!   that is injected at construction time.  Every failure stops here: it is
//!   logged and returned as a value.
//!
//! - **`press_button`** – Couples a button press to the transmission and to
//!   the locally tracked `RemoteState`, committing the new state only when
//!   the signal was actually sent.

pub mod press_button;
pub mod send_command;
