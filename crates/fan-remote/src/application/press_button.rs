//! RemoteController: a button press = one IR transmission + a state transition.
//!
//! The next [`RemoteState`] is computed by the pure reducer in `fan-core`,
//! but it only replaces the current state when the transmission succeeded.
//! If the signal never left the device, the status card keeps showing what
//! the fan was last told.

use fan_core::{Button, RemoteState};

use crate::application::send_command::{SendError, SentSignal, SignalTransmitter};

/// Result of one button press.
#[derive(Debug)]
pub struct PressOutcome {
    pub button: Button,
    /// The remote state after the press (unchanged if sending failed).
    pub state: RemoteState,
    pub sent: Result<SentSignal, SendError>,
}

impl PressOutcome {
    pub fn is_sent(&self) -> bool {
        self.sent.is_ok()
    }
}

/// The Press Button use case.
pub struct RemoteController {
    transmitter: SignalTransmitter,
    state: RemoteState,
}

impl RemoteController {
    /// Creates a controller starting from the all-off state.
    pub fn new(transmitter: SignalTransmitter) -> Self {
        Self::with_state(transmitter, RemoteState::new())
    }

    pub fn with_state(transmitter: SignalTransmitter, state: RemoteState) -> Self {
        Self { transmitter, state }
    }

    pub fn state(&self) -> RemoteState {
        self.state
    }

    pub fn transmitter(&self) -> &SignalTransmitter {
        &self.transmitter
    }

    /// Sends the button's command and, on success, advances the state.
    pub fn press(&mut self, button: Button) -> PressOutcome {
        let sent = self.transmitter.send(button.command().as_str());
        if sent.is_ok() {
            self.state = self.state.apply(button);
        }
        PressOutcome {
            button,
            state: self.state,
            sent,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::send_command::{EmitterError, MockIrEmitter};
    use fan_core::TimerSetting;
    use std::sync::Arc;

    fn controller(emitter: MockIrEmitter) -> RemoteController {
        RemoteController::new(SignalTransmitter::new(Arc::new(emitter)))
    }

    #[test]
    fn test_successful_press_advances_state() {
        // Arrange
        let mut emitter = MockIrEmitter::new();
        emitter.expect_has_ir_emitter().return_const(true);
        emitter.expect_transmit().times(2).returning(|_, _| Ok(()));
        let mut remote = controller(emitter);

        // Act
        remote.press(Button::Speed);
        let outcome = remote.press(Button::Timer);

        // Assert
        assert!(outcome.is_sent());
        assert_eq!(outcome.state.speed(), 1);
        assert_eq!(outcome.state.timer, TimerSetting::HalfHour);
        assert_eq!(remote.state(), outcome.state);
    }

    #[test]
    fn test_failed_transmit_keeps_previous_state() {
        // Arrange
        let mut emitter = MockIrEmitter::new();
        emitter.expect_has_ir_emitter().return_const(true);
        emitter
            .expect_transmit()
            .returning(|_, _| Err(EmitterError::Platform("no".into())));
        let mut remote = controller(emitter);

        // Act
        let outcome = remote.press(Button::Swing);

        // Assert
        assert!(!outcome.is_sent());
        assert!(!outcome.state.swing);
        assert_eq!(remote.state(), RemoteState::new());
    }

    #[test]
    fn test_missing_emitter_keeps_previous_state() {
        let mut emitter = MockIrEmitter::new();
        emitter.expect_has_ir_emitter().return_const(false);
        emitter.expect_transmit().never();
        let start = RemoteState::new().apply(Button::Speed);
        let mut remote =
            RemoteController::with_state(SignalTransmitter::new(Arc::new(emitter)), start);

        let outcome = remote.press(Button::PowerOff);

        assert!(matches!(outcome.sent, Err(SendError::CapabilityUnavailable)));
        assert_eq!(remote.state(), start);
    }

    #[test]
    fn test_press_sends_the_mapped_command() {
        let mut emitter = MockIrEmitter::new();
        emitter.expect_has_ir_emitter().return_const(true);
        emitter.expect_transmit().returning(|_, _| Ok(()));
        let mut remote = controller(emitter);

        let outcome = remote.press(Button::Speed);

        assert_eq!(outcome.sent.unwrap().command, "on");
    }
}
