//! Console front end: status card, status DTO, and the interactive loop.
//!
//! # The status card
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Speed: Mid        Timer: 1h  │
//! │ Swing: ON     Wind: Rhythm   │
//! └──────────────────────────────┘
//! ```
//!
//! # `StatusDto`
//!
//! `RemoteState` keeps its speed private and its enums typed.  `StatusDto`
//! is a flat, serializable snapshot (numbers plus display labels) used for
//! `--json` output, so scripts do not need to know the enum names.

use std::io::{self, BufRead, Write};

use fan_core::{Button, RemoteState};
use serde::Serialize;

use crate::application::press_button::{PressOutcome, RemoteController};

// ── Status DTO ────────────────────────────────────────────────────────────────

/// Serializable snapshot of the remote state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusDto {
    pub speed: u8,
    pub speed_label: String,
    pub timer_minutes: u16,
    pub timer_label: String,
    pub swing: bool,
    pub wind: u8,
    pub wind_label: String,
}

impl From<RemoteState> for StatusDto {
    fn from(state: RemoteState) -> Self {
        Self {
            speed: state.speed(),
            speed_label: state.speed_label().to_string(),
            timer_minutes: state.timer.minutes(),
            timer_label: state.timer.label().to_string(),
            swing: state.swing,
            wind: state.wind.index(),
            wind_label: state.wind.label().to_string(),
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

const CARD_WIDTH: usize = 30;

/// Renders the two-row status card.
pub fn render_status(state: &RemoteState) -> String {
    let row1 = format!(
        "Speed: {:<8} Timer: {}",
        state.speed_label(),
        state.timer.label()
    );
    let row2 = format!(
        "Swing: {:<8} Wind: {}",
        state.swing_label(),
        state.wind.label()
    );
    let border = "─".repeat(CARD_WIDTH);
    format!(
        "┌{border}┐\n│ {row1:<w$} │\n│ {row2:<w$} │\n└{border}┘",
        w = CARD_WIDTH - 2
    )
}

/// One-line summary of a press for the console.
pub fn describe_outcome(outcome: &PressOutcome) -> String {
    match &outcome.sent {
        Ok(sent) => format!(
            "{} → sent '{}' ({} pulses @ {} Hz)",
            outcome.button.label(),
            sent.command,
            sent.pulse_count,
            sent.carrier_hz
        ),
        Err(e) => format!("{} → not sent: {e}", outcome.button.label()),
    }
}

fn help_text() -> String {
    let buttons: Vec<_> = Button::ALL
        .iter()
        .map(|b| format!("{} ({})", b.command(), b.label()))
        .collect();
    format!(
        "buttons: {}; 'status' redraws, 'help' lists buttons, 'quit' exits",
        buttons.join(", ")
    )
}

// ── Interactive loop ──────────────────────────────────────────────────────────

/// Reads button names line by line from `input` and presses them.
///
/// Blank lines are ignored.  `quit`/`exit` or end of input stops the loop.
/// Unknown input prints a hint; it never stops the loop.
///
/// # Errors
///
/// Returns an I/O error only if reading `input` or writing `output` fails.
pub fn run_interactive<R, W>(
    controller: &mut RemoteController,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render_status(&controller.state()))?;
    writeln!(output, "{}", help_text())?;

    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        match word {
            "" => continue,
            "quit" | "exit" => break,
            "help" | "?" => writeln!(output, "{}", help_text())?,
            "status" => writeln!(output, "{}", render_status(&controller.state()))?,
            _ => match word.parse::<Button>() {
                Ok(button) => {
                    let outcome = controller.press(button);
                    writeln!(output, "{}", describe_outcome(&outcome))?;
                    writeln!(output, "{}", render_status(&outcome.state))?;
                }
                Err(e) => writeln!(output, "{e}")?,
            },
        }
        output.flush()?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
