//! Catalogue of available spinners.

use crate::style::{SpinnerStyle, BALL_PULSE_ROUND, TRIANGLE_SKEW_SPIN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every spinner this crate can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpinnerKind {
    BallPulseRound,
    TriangleSkewSpin,
}

/// Returned when a name does not match any [`SpinnerKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSpinnerKindError {
    #[error("Unknown spinner: {0}")]
    Unknown(String),
}

impl SpinnerKind {
    /// All kinds, in display order.
    pub const ALL: [SpinnerKind; 2] = [SpinnerKind::BallPulseRound, SpinnerKind::TriangleSkewSpin];

    /// Kebab-case name, also used as CSS class and keyframes name.
    pub fn name(self) -> &'static str {
        self.style().class_name
    }

    pub fn style(self) -> &'static SpinnerStyle {
        match self {
            SpinnerKind::BallPulseRound => &BALL_PULSE_ROUND,
            SpinnerKind::TriangleSkewSpin => &TRIANGLE_SKEW_SPIN,
        }
    }
}

impl fmt::Display for SpinnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpinnerKind {
    type Err = ParseSpinnerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SpinnerKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                log::debug!("No spinner named {:?}", wanted);
                ParseSpinnerKindError::Unknown(wanted.to_string())
            })
    }
}
