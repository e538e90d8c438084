//! Spinner components.

mod ball_pulse_round;
mod loader;
mod triangle_skew_spin;

pub use ball_pulse_round::BallPulseRound;
pub use loader::Loader;
pub use triangle_skew_spin::TriangleSkewSpin;

use crate::style::SpinnerStyle;
use dioxus::core::provide_root_context;
use dioxus::document;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Classes whose stylesheet has already been sent to the document head.
#[derive(Clone, Default)]
struct InsertedStyles(Rc<RefCell<HashSet<&'static str>>>);

/// Claim the stylesheet for `class_name`. Only the first caller per
/// `VirtualDom` gets `true`.
fn claim_stylesheet(class_name: &'static str) -> bool {
    let inserted = try_consume_context::<InsertedStyles>()
        .unwrap_or_else(|| provide_root_context(InsertedStyles::default()));
    let claimed = inserted.0.borrow_mut().insert(class_name);
    if claimed {
        log::debug!("Inserting stylesheet for {}", class_name);
    }
    claimed
}

/// Container wrapping one marker, or nothing when not loading.
///
/// Head styles are never removed, so the stylesheet is inserted once per
/// class by the first instance to mount and stays mounted across toggles.
/// It renders nothing into the subtree, which holds only the two `div`s.
fn spinner(style: &'static SpinnerStyle, loading: bool) -> Element {
    let owns_stylesheet = use_hook(|| claim_stylesheet(style.class_name));
    #[cfg(test)]
    test_support::record_render(style.class_name);

    let css = style.to_css();
    rsx! {
        if owns_stylesheet {
            document::Style { "{css}" }
        }
        if loading {
            div {
                class: style.class_name,
                div {}
            }
        }
    }
}
