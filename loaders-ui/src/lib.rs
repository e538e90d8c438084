//! Animated loading-indicator components for Dioxus.
//!
//! This crate provides:
//! - `style`: spinner styles as plain data, rendered to stylesheet text
//! - `kind`: the `SpinnerKind` catalogue mapping names to styles
//! - `components`: `BallPulseRound`, `TriangleSkewSpin` and the `Loader` dispatcher
//!
//! Every spinner takes a single `loading` flag. When it is set the spinner
//! renders a container `div` wrapping one marker `div`; otherwise it renders
//! nothing.

pub mod components;
pub mod kind;
pub mod style;

pub use kind::{ParseSpinnerKindError, SpinnerKind};
pub use style::SpinnerStyle;
