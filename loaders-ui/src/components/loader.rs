//! Kind-dispatching loader component.

use super::{BallPulseRound, TriangleSkewSpin};
use crate::kind::SpinnerKind;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoaderProps {
    /// Which spinner to show
    pub kind: SpinnerKind,
    /// Whether the animation is shown
    pub loading: bool,
}

/// Renders the spinner selected by `kind`.
#[component]
pub fn Loader(props: LoaderProps) -> Element {
    let loading = props.loading;
    match props.kind {
        SpinnerKind::BallPulseRound => rsx! { BallPulseRound { loading } },
        SpinnerKind::TriangleSkewSpin => rsx! { TriangleSkewSpin { loading } },
    }
}
