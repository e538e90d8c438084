//! Pulsing ball spinner.

use super::spinner;
use crate::style::BALL_PULSE_ROUND;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BallPulseRoundProps {
    /// Whether the animation is shown
    pub loading: bool,
}

/// A single ball scaling in and out while `loading` is set.
#[component]
pub fn BallPulseRound(props: BallPulseRoundProps) -> Element {
    spinner(&BALL_PULSE_ROUND, props.loading)
}
