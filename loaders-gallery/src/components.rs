//! Page-level components for the gallery.

use crate::state::GalleryState;
use dioxus::prelude::*;
use loaders_ui::components::Loader;
use loaders_ui::SpinnerKind;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Why the bundled configuration was rejected
    pub message: String,
}

/// Reports a rejected `gallery.json` above the default tiles.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 10px 14px; margin: 8px 0; background: #FFF4E5; color: #8A4B00; border-left: 4px solid #F0A030;",
            strong { "Configuration error" }
            p { style: "margin: 4px 0;", "{props.message}" }
            small { "Showing every spinner with default settings." }
        }
    }
}

/// Button flipping the shared loading flag.
#[component]
pub fn LoadingToggle() -> Element {
    let mut state = use_context::<GalleryState>();
    let label = if (state.loading)() { "Stop" } else { "Start" };

    rsx! {
        button {
            style: "padding: 6px 14px; margin-bottom: 12px; cursor: pointer;",
            onclick: move |_| {
                let loading = state.toggle();
                log::info!("Loading set to {}", loading);
            },
            "{label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SpinnerTileProps {
    pub kind: SpinnerKind,
    /// CSS background color of the tile
    pub background: String,
}

/// Fixed-size tile showing one spinner and its name.
#[component]
pub fn SpinnerTile(props: SpinnerTileProps) -> Element {
    let state = use_context::<GalleryState>();
    let style = format!(
        "display: flex; flex-direction: column; align-items: center; justify-content: center; \
         width: 160px; height: 160px; background: {}; color: #fff; border-radius: 4px;",
        props.background
    );

    rsx! {
        div {
            style: "{style}",
            div {
                style: "flex: 1; display: flex; align-items: center;",
                Loader { kind: props.kind, loading: (state.loading)() }
            }
            span {
                style: "font-size: 12px; padding-bottom: 8px;",
                "{props.kind}"
            }
        }
    }
}
