//! Integration tests for the send pipeline.
//!
//! These tests exercise the application layer of fan-remote end-to-end:
//! `SignalTransmitter` / `RemoteController` + the built-in catalog + the
//! recording `MockIrEmitter` from the infrastructure layer.

use std::sync::Arc;

use fan_core::{decode_pronto, Button, CommandCatalog, FanCommand, TimerSetting, WindMode};
use fan_remote::application::press_button::RemoteController;
use fan_remote::application::send_command::{SendError, SignalTransmitter};
use fan_remote::infrastructure::ir_emitter::{self, mock::MockIrEmitter};
use fan_remote::infrastructure::storage::config::{EmitterBackend, EmitterConfig};

fn transmitter(emitter: &Arc<MockIrEmitter>) -> SignalTransmitter {
    SignalTransmitter::new(emitter.clone())
}

// ── Signal transmitter ────────────────────────────────────────────────────────

#[test]
fn test_send_off_transmits_decoded_sequence_at_38khz() {
    // Arrange
    let emitter = Arc::new(MockIrEmitter::new());
    let expected = decode_pronto(FanCommand::Off.pronto())
        .expect("catalog code must decode")
        .into_pulses();

    // Act
    let sent = transmitter(&emitter).send("off").expect("send must succeed");

    // Assert
    let recorded = emitter.transmissions();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].carrier_hz, 38_000);
    assert_eq!(recorded[0].pattern, expected);
    assert_eq!(sent.pulse_count, expected.len());
    assert_eq!(sent.command, "off");
}

#[test]
fn test_every_catalog_command_reaches_the_emitter() {
    let emitter = Arc::new(MockIrEmitter::new());
    let tx = transmitter(&emitter);

    for command in FanCommand::ALL {
        tx.send(command.as_str())
            .unwrap_or_else(|e| panic!("{command} must send: {e}"));
    }

    let recorded = emitter.transmissions();
    assert_eq!(recorded.len(), FanCommand::ALL.len());
    assert!(recorded.iter().all(|t| t.carrier_hz == 38_000));
    assert!(recorded.iter().all(|t| !t.pattern.is_empty()));
}

#[test]
fn test_unknown_command_never_reaches_the_emitter() {
    let emitter = Arc::new(MockIrEmitter::new());

    let err = transmitter(&emitter).send("turbo").unwrap_err();

    assert!(matches!(err, SendError::UnknownCommand(ref c) if c == "turbo"));
    assert!(emitter.transmissions().is_empty());
}

#[test]
fn test_missing_capability_never_transmits() {
    let emitter = Arc::new(MockIrEmitter::without_emitter());

    let err = transmitter(&emitter).send("on").unwrap_err();

    assert!(matches!(err, SendError::CapabilityUnavailable));
    assert!(emitter.transmissions().is_empty());
}

#[test]
fn test_platform_failure_is_reported_as_transmit_error() {
    let emitter = Arc::new(MockIrEmitter::failing());

    let err = transmitter(&emitter).send("swing").unwrap_err();

    assert!(matches!(err, SendError::Transmit { ref command, .. } if command == "swing"));
    assert!(err.to_string().contains("swing"));
}

#[test]
fn test_malformed_catalog_entry_is_decode_error() {
    // Arrange: a custom catalog with a broken hex group
    let emitter = Arc::new(MockIrEmitter::new());
    let catalog = CommandCatalog::from_entries([("on", "0000 006F 0000 0001 0030 zz18")]);
    let tx = SignalTransmitter::with_catalog(emitter.clone(), catalog);

    // Act
    let err = tx.send("on").unwrap_err();

    // Assert
    assert!(matches!(err, SendError::Decode { .. }));
    assert!(emitter.transmissions().is_empty());
}

#[test]
fn test_dry_run_backend_from_config_is_capable() {
    let config = EmitterConfig {
        backend: EmitterBackend::DryRun,
        ..EmitterConfig::default()
    };

    let emitter = ir_emitter::from_config(&config).expect("dry-run is available everywhere");
    let sent = SignalTransmitter::new(emitter).send("timer");

    assert!(sent.is_ok());
}

// ── Remote controller session ─────────────────────────────────────────────────

#[test]
fn test_controller_session_tracks_state_and_sends_in_order() {
    // Arrange
    let emitter = Arc::new(MockIrEmitter::new());
    let mut controller = RemoteController::new(transmitter(&emitter));
    let presses = [
        Button::Speed,
        Button::Speed,
        Button::Timer,
        Button::Swing,
        Button::Wind,
        Button::Speed,
        Button::Speed,
    ];

    // Act
    let outcomes: Vec<_> = presses.iter().map(|&b| controller.press(b)).collect();

    // Assert: speed cycled 1 → 2 → 3 and wrapped back to 1
    assert!(outcomes.iter().all(|o| o.is_sent()));
    let state = controller.state();
    assert_eq!(state.speed(), 1);
    assert_eq!(state.timer, TimerSetting::HalfHour);
    assert!(state.swing);
    assert_eq!(state.wind, WindMode::Rhythm);

    // Each press sent exactly its button's code, in press order
    let catalog = CommandCatalog::builtin();
    let recorded = emitter.transmissions();
    assert_eq!(recorded.len(), presses.len());
    for (button, t) in presses.iter().zip(&recorded) {
        let code = catalog.get_command(button.command()).expect("builtin entry");
        assert_eq!(t.pattern, decode_pronto(code).unwrap().into_pulses());
    }
}

#[test]
fn test_power_off_resets_the_whole_state() {
    let emitter = Arc::new(MockIrEmitter::new());
    let mut controller = RemoteController::new(transmitter(&emitter));
    for button in [Button::Speed, Button::Timer, Button::Swing, Button::Wind] {
        controller.press(button);
    }

    let outcome = controller.press(Button::PowerOff);

    assert!(outcome.is_sent());
    assert_eq!(outcome.state, fan_core::RemoteState::new());
    assert_eq!(outcome.state.wind, WindMode::Normal);
}

#[test]
fn test_failed_presses_leave_state_untouched() {
    let emitter = Arc::new(MockIrEmitter::failing());
    let mut controller = RemoteController::new(transmitter(&emitter));

    for button in Button::ALL {
        let outcome = controller.press(button);
        assert!(!outcome.is_sent());
    }

    assert_eq!(controller.state(), fan_core::RemoteState::new());
}
