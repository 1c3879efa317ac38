//! Infrastructure layer for the remote.
//!
//! Contains OS-facing adapters: IR emitter backends, the TOML config file,
//! and the console front end.
//!
//! **Dependency rule**: this layer may depend on `application` and `fan_core`,
//! but MUST NOT be imported by the `application` or domain layers.
//!
//! # Sub-modules
//!
//! - **`ir_emitter`** – Implementations of `IrEmitter`.  The LIRC backend is
//!   compiled on Linux only; a `MockIrEmitter` is always available for tests
//!   and dry runs.
//!
//! - **`storage`** – Loading and saving the TOML configuration file.
//!
//! - **`console`** – The text status card, the status DTO, and the
//!   interactive button loop.

pub mod console;
pub mod ir_emitter;
pub mod storage;
