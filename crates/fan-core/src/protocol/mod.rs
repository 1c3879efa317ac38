//! Protocol module containing the Pronto hex decoder.

pub mod pronto;

pub use pronto::{decode_pronto, DecodedSignal, ProntoError, ProntoHeader, CARRIER_FREQUENCY_HZ};
