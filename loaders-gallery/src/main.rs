//! Loader gallery
//!
//! Shows every configured spinner in a tile, with one button toggling the
//! shared loading flag.
//!
//! Data flow:
//! 1. `include_str!` embeds `gallery.json` into the WASM binary.
//! 2. On startup the JSON is parsed into a `GalleryConfig`; a bad config is
//!    reported and the defaults are used instead.
//! 3. The toggle flips `GalleryState::loading`, which every tile passes to
//!    its `Loader`.

mod components;
mod config;
mod state;

use components::{ErrorDisplay, LoadingToggle, SpinnerTile};
use config::GalleryConfig;
use dioxus::prelude::*;
use state::GalleryState;

/// Page configuration embedded at compile time.
const GALLERY_JSON: &str = include_str!("../gallery.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("loaders-root"))
        .launch(App);
}

/// Parse the bundled config, falling back to defaults with an error message.
fn load_config(json: &str) -> (GalleryConfig, Option<String>) {
    match GalleryConfig::from_json(json) {
        Ok(config) => (config, None),
        Err(e) => {
            log::error!("Failed to load gallery config: {:#}", e);
            (GalleryConfig::default(), Some(format!("{:#}", e)))
        }
    }
}

#[component]
fn App() -> Element {
    let (config, error) = use_hook(|| load_config(GALLERY_JSON));
    rsx! {
        Gallery { config, error }
    }
}

#[derive(Props, Clone, PartialEq)]
struct GalleryProps {
    config: GalleryConfig,
    error: Option<String>,
}

#[component]
fn Gallery(props: GalleryProps) -> Element {
    let state = use_context_provider(|| GalleryState::new(&props.config, props.error.clone()));
    let kinds = props.config.kinds();

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            h2 { style: "margin: 0 0 8px 0;", "{props.config.title}" }
            if let Some(msg) = (state.error_msg)() {
                ErrorDisplay { message: msg }
            }
            LoadingToggle {}
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for kind in kinds {
                    SpinnerTile { key: "{kind}", kind, background: props.config.background.clone() }
                }
            }
        }
    }
}
