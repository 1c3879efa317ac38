//! Persistent configuration storage.

pub mod config;
