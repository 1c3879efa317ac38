//! Remote state: the fan settings shown on the status card.
//!
//! [`RemoteState::apply`] is a pure reducer: it takes the current state and a
//! [`Button`] and returns the next state.  It does not transmit anything; the
//! application layer decides when a transition is committed.
//!
//! | Button     | Transition                                 | IR command |
//! |------------|--------------------------------------------|------------|
//! | `PowerOff` | reset everything                           | `off`      |
//! | `Speed`    | 0 → 1 → 2 → 3 → 1 …                        | `on`       |
//! | `Swing`    | toggle                                     | `swing`    |
//! | `Timer`    | OFF → 30m → 1h → 2h → 4h → OFF             | `timer`    |
//! | `Wind`     | Normal → Rhythm → Sleep → Normal           | `wind`     |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::FanCommand;

/// Highest fan speed level.
pub const MAX_SPEED: u8 = 3;

/// The five buttons on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Button {
    PowerOff,
    Speed,
    Swing,
    Timer,
    Wind,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::PowerOff,
        Button::Speed,
        Button::Swing,
        Button::Timer,
        Button::Wind,
    ];

    /// The IR command sent when this button is pressed.
    pub fn command(self) -> FanCommand {
        match self {
            Button::PowerOff => FanCommand::Off,
            Button::Speed => FanCommand::On,
            Button::Swing => FanCommand::Swing,
            Button::Timer => FanCommand::Timer,
            Button::Wind => FanCommand::Wind,
        }
    }

    /// The label printed on the button.
    pub fn label(self) -> &'static str {
        match self {
            Button::PowerOff => "OFF",
            Button::Speed => "ON / SPEED",
            Button::Swing => "SWING",
            Button::Timer => "TIMER",
            Button::Wind => "WIND MODE",
        }
    }
}

/// Returned when a string does not name a [`Button`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button: '{0}' (expected off, speed, swing, timer or wind)")]
pub struct ParseButtonError(pub String);

impl FromStr for Button {
    type Err = ParseButtonError;

    /// Accepts `off`/`power-off`, `speed`/`on`, `swing`, `timer`, `wind`,
    /// ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "power-off" | "poweroff" => Ok(Button::PowerOff),
            "speed" | "on" => Ok(Button::Speed),
            "swing" => Ok(Button::Swing),
            "timer" => Ok(Button::Timer),
            "wind" => Ok(Button::Wind),
            _ => Err(ParseButtonError(s.to_string())),
        }
    }
}

/// Off-timer setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerSetting {
    #[default]
    Off,
    HalfHour,
    OneHour,
    TwoHours,
    FourHours,
}

impl TimerSetting {
    /// The next setting in the cycle.
    pub fn next(self) -> Self {
        match self {
            TimerSetting::Off => TimerSetting::HalfHour,
            TimerSetting::HalfHour => TimerSetting::OneHour,
            TimerSetting::OneHour => TimerSetting::TwoHours,
            TimerSetting::TwoHours => TimerSetting::FourHours,
            TimerSetting::FourHours => TimerSetting::Off,
        }
    }

    /// Timer duration in minutes; `0` when off.
    pub fn minutes(self) -> u16 {
        match self {
            TimerSetting::Off => 0,
            TimerSetting::HalfHour => 30,
            TimerSetting::OneHour => 60,
            TimerSetting::TwoHours => 120,
            TimerSetting::FourHours => 240,
        }
    }

    /// Timer duration in hours (0, 0.5, 1, 2 or 4).
    pub fn hours(self) -> f32 {
        f32::from(self.minutes()) / 60.0
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerSetting::Off => "OFF",
            TimerSetting::HalfHour => "30m",
            TimerSetting::OneHour => "1h",
            TimerSetting::TwoHours => "2h",
            TimerSetting::FourHours => "4h",
        }
    }
}

/// Wind (airflow pattern) mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindMode {
    #[default]
    Normal,
    Rhythm,
    Sleep,
}

impl WindMode {
    pub fn next(self) -> Self {
        match self {
            WindMode::Normal => WindMode::Rhythm,
            WindMode::Rhythm => WindMode::Sleep,
            WindMode::Sleep => WindMode::Normal,
        }
    }

    /// Numeric mode index (0 = Normal, 1 = Rhythm, 2 = Sleep).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            WindMode::Normal => "Normal",
            WindMode::Rhythm => "Rhythm",
            WindMode::Sleep => "Sleep",
        }
    }
}

/// The locally tracked fan state.
///
/// `speed` is always in `0..=MAX_SPEED`; 0 means off.  Deserialization goes
/// through an unchecked wire form and rejects out-of-range speeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRemoteState")]
pub struct RemoteState {
    speed: u8,
    pub timer: TimerSetting,
    pub swing: bool,
    pub wind: WindMode,
}

/// Unchecked wire form of [`RemoteState`].
#[derive(Deserialize)]
struct RawRemoteState {
    #[serde(default)]
    speed: u8,
    #[serde(default)]
    timer: TimerSetting,
    #[serde(default)]
    swing: bool,
    #[serde(default)]
    wind: WindMode,
}

/// A stored speed above [`MAX_SPEED`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fan speed {0} is out of range (expected 0 to 3)")]
pub struct InvalidSpeedError(pub u8);

impl TryFrom<RawRemoteState> for RemoteState {
    type Error = InvalidSpeedError;

    fn try_from(raw: RawRemoteState) -> Result<Self, Self::Error> {
        if raw.speed > MAX_SPEED {
            return Err(InvalidSpeedError(raw.speed));
        }
        Ok(Self {
            speed: raw.speed,
            timer: raw.timer,
            swing: raw.swing,
            wind: raw.wind,
        })
    }
}

impl RemoteState {
    /// The state of a fan that has just been switched off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Returns the state after `button` is pressed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fan_core::{Button, RemoteState};
    ///
    /// let state = RemoteState::new().apply(Button::Speed).apply(Button::Speed);
    /// assert_eq!(state.speed(), 2);
    /// assert_eq!(state.apply(Button::PowerOff), RemoteState::new());
    /// ```
    #[must_use]
    pub fn apply(self, button: Button) -> Self {
        match button {
            Button::PowerOff => Self::default(),
            Button::Speed => Self {
                speed: if self.speed >= MAX_SPEED { 1 } else { self.speed + 1 },
                ..self
            },
            Button::Swing => Self {
                swing: !self.swing,
                ..self
            },
            Button::Timer => Self {
                timer: self.timer.next(),
                ..self
            },
            Button::Wind => Self {
                wind: self.wind.next(),
                ..self
            },
        }
    }

    pub fn speed_label(&self) -> &'static str {
        match self.speed {
            1 => "Low",
            2 => "Mid",
            3 => "High",
            _ => "OFF",
        }
    }

    pub fn swing_label(&self) -> &'static str {
        if self.swing {
            "ON"
        } else {
            "OFF"
        }
    }
}

impl fmt::Display for RemoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Speed: {}  Timer: {}  Swing: {}  Wind: {}",
            self.speed_label(),
            self.timer.label(),
            self.swing_label(),
            self.wind.label()
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
