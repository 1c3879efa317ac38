//! Integration tests for catalog lookup + Pronto decoding.
//!
//! These exercise the public `fan_core` API end-to-end: a command identifier
//! is resolved through the built-in catalog and decoded into the pulse
//! sequence the transmitter will emit.

use fan_core::{decode_pronto, Button, CommandCatalog, FanCommand, RemoteState};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_off_decodes_to_even_length_positive_sequence() {
    // Arrange
    let catalog = CommandCatalog::builtin();
    let code = catalog.get("off").expect("off must be in the catalog");

    // Act
    let signal = decode_pronto(code).expect("off must decode");

    // Assert: mark/space pairs, nothing zero-length
    assert!(!signal.pulses.is_empty());
    assert_eq!(signal.pulses.len() % 2, 0);
    assert!(signal.pulses.iter().all(|&p| p > 0));
}

#[test]
fn test_off_sequence_starts_with_leader_and_ends_with_long_gap() {
    let signal = decode_pronto(FanCommand::Off.pronto()).unwrap();

    assert_eq!(&signal.pulses[..4], &[1236, 421, 1236, 447]);
    assert_eq!(*signal.pulses.last().unwrap(), 102_685);
}

#[test]
fn test_data_group_count_equals_pulse_count_for_every_command() {
    for cmd in FanCommand::ALL {
        let groups = cmd.pronto().split_ascii_whitespace().count();
        let signal = decode_pronto(cmd.pronto()).unwrap();
        assert_eq!(signal.pulses.len(), groups - 4, "{cmd}");
    }
}

#[test]
fn test_declared_pairs_match_decoded_pairs_for_builtin_codes() {
    // The built-in codes are well-formed: the header's pair count agrees with
    // the data, even though the decoder never relies on it.
    for cmd in FanCommand::ALL {
        let signal = decode_pronto(cmd.pronto()).unwrap();
        assert_eq!(signal.header.declared_pairs() * 2, signal.pulses.len(), "{cmd}");
    }
}

#[test]
fn test_commands_have_distinct_signals() {
    let decoded: Vec<_> = FanCommand::ALL
        .iter()
        .map(|cmd| decode_pronto(cmd.pronto()).unwrap().pulses)
        .collect();

    for (i, a) in decoded.iter().enumerate() {
        for b in decoded.iter().skip(i + 1) {
            assert_ne!(a, b, "two commands share an IR signal");
        }
    }
}

#[test]
fn test_every_button_resolves_to_a_catalog_entry() {
    let catalog = CommandCatalog::builtin();
    for button in Button::ALL {
        assert!(
            catalog.get_command(button.command()).is_some(),
            "{button:?} has no code"
        );
    }
}

#[test]
fn test_full_button_session_reaches_expected_state() {
    let state = [
        Button::Speed,
        Button::Speed,
        Button::Swing,
        Button::Timer,
        Button::Timer,
        Button::Wind,
    ]
    .into_iter()
    .fold(RemoteState::new(), RemoteState::apply);

    assert_eq!(state.to_string(), "Speed: Mid  Timer: 1h  Swing: ON  Wind: Rhythm");
}
