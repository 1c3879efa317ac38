//! The fan command catalog: command identifiers and their Pronto codes.
//!
//! The catalog is built once and never mutated.  Lookups by string return
//! `None` for unknown identifiers; there is no runtime insertion or removal.

pub mod codes;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The commands the fan's remote understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanCommand {
    /// Power on / step to the next speed.
    On,
    /// Power off.
    Off,
    /// Toggle oscillation.
    Swing,
    /// Step the off-timer.
    Timer,
    /// Step the wind mode.
    Wind,
}

impl FanCommand {
    /// Every command, in catalog order.
    pub const ALL: [FanCommand; 5] = [
        FanCommand::On,
        FanCommand::Off,
        FanCommand::Swing,
        FanCommand::Timer,
        FanCommand::Wind,
    ];

    /// The catalog identifier for this command.
    pub fn as_str(self) -> &'static str {
        match self {
            FanCommand::On => "on",
            FanCommand::Off => "off",
            FanCommand::Swing => "swing",
            FanCommand::Timer => "timer",
            FanCommand::Wind => "wind",
        }
    }

    /// The learned Pronto code for this command.
    pub fn pronto(self) -> &'static str {
        match self {
            FanCommand::On => codes::ON,
            FanCommand::Off => codes::OFF,
            FanCommand::Swing => codes::SWING,
            FanCommand::Timer => codes::TIMER,
            FanCommand::Wind => codes::WIND,
        }
    }
}

impl fmt::Display for FanCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`FanCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fan command: '{0}'")]
pub struct ParseFanCommandError(pub String);

impl FromStr for FanCommand {
    type Err = ParseFanCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FanCommand::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| ParseFanCommandError(s.to_string()))
    }
}

/// Read-only mapping from command identifier to Pronto code.
///
/// # Examples
///
/// ```rust
/// use fan_core::CommandCatalog;
///
/// let catalog = CommandCatalog::builtin();
/// assert!(catalog.get("off").is_some());
/// assert!(catalog.get("turbo").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    entries: BTreeMap<&'static str, &'static str>,
}

impl CommandCatalog {
    /// The catalog of the five learned fan commands.
    pub fn builtin() -> Self {
        Self::from_entries(FanCommand::ALL.map(|cmd| (cmd.as_str(), cmd.pronto())))
    }

    /// Builds a catalog from `(identifier, pronto_code)` pairs.
    ///
    /// Later duplicates replace earlier ones.  The result is immutable.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the Pronto code for `command`, or `None` if it is not in the catalog.
    pub fn get(&self, command: &str) -> Option<&'static str> {
        self.entries.get(command).copied()
    }

    /// Returns the Pronto code for a typed command.
    pub fn get_command(&self, command: FanCommand) -> Option<&'static str> {
        self.get(command.as_str())
    }

    /// Whether `command` names an entry.
    pub fn contains(&self, command: &str) -> bool {
        self.entries.contains_key(command)
    }

    /// Iterates over command identifiers in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Iterates over `(identifier, pronto_code)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(name, code)| (*name, *code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::pronto::decode_pronto;

    #[test]
    fn test_builtin_catalog_has_five_commands() {
        let catalog = CommandCatalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_names_are_sorted() {
        let names: Vec<_> = CommandCatalog::builtin().names().collect();
        assert_eq!(names, vec!["off", "on", "swing", "timer", "wind"]);
    }

    #[test]
    fn test_lookup_unknown_command_returns_none() {
        let catalog = CommandCatalog::builtin();
        assert_eq!(catalog.get("turbo"), None);
        assert!(!catalog.contains("turbo"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = CommandCatalog::builtin();
        assert_eq!(catalog.get("OFF"), None);
    }

    #[test]
    fn test_typed_lookup_matches_string_lookup() {
        let catalog = CommandCatalog::builtin();
        for cmd in FanCommand::ALL {
            assert_eq!(catalog.get_command(cmd), catalog.get(cmd.as_str()));
            assert_eq!(catalog.get_command(cmd), Some(cmd.pronto()));
        }
    }

    #[test]
    fn test_every_builtin_code_decodes_to_72_positive_pulses() {
        // Arrange
        let catalog = CommandCatalog::builtin();

        for (name, code) in catalog.iter() {
            // Act
            let signal = decode_pronto(code).unwrap_or_else(|e| panic!("{name}: {e}"));

            // Assert
            assert_eq!(signal.pulses.len(), 72, "{name} pulse count");
            assert_eq!(signal.header.repeat_pairs, 0x24, "{name} header");
            assert!(signal.pulses.iter().all(|&p| p > 0), "{name} has a zero pulse");
        }
    }

    #[test]
    fn test_from_entries_builds_custom_catalog() {
        let catalog = CommandCatalog::from_entries([("blink", "0000 006F 0000 0001 0010 0010")]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("blink"));
        assert!(!catalog.contains("off"));
    }

    #[test]
    fn test_fan_command_parses_from_identifier() {
        assert_eq!("swing".parse::<FanCommand>(), Ok(FanCommand::Swing));
        assert_eq!(
            "Swing".parse::<FanCommand>(),
            Err(ParseFanCommandError("Swing".to_string()))
        );
    }

    #[test]
    fn test_fan_command_display_is_identifier() {
        assert_eq!(FanCommand::Timer.to_string(), "timer");
    }

    #[test]
    fn test_fan_command_serializes_lowercase() {
        let json = serde_json::to_string(&FanCommand::Wind).unwrap();
        assert_eq!(json, "\"wind\"");
    }
}
