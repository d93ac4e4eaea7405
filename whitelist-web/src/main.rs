//! Red & White Army Whitelist Page
//!
//! Connects an injected Ethereum wallet, shows how many fans are on the
//! whitelist and lets the visitor join it.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::{App, ConfigError};
use shared::WhitelistConfig;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Whitelist page starting...");

    hide_loading_screen();

    match WhitelistConfig::from_build_env() {
        Ok(config) => {
            log::info!(
                "Whitelist contract {} on chain {} ({})",
                config.contract_address,
                config.chain_id,
                config.network_name
            );
            leptos::mount::mount_to_body(move || view! { <App config=config/> });
        }
        Err(e) => {
            log::error!("Invalid build configuration: {}", e);
            let message = e.to_string();
            leptos::mount::mount_to_body(move || view! { <ConfigError message=message/> });
        }
    }
}

/// Hide the static loading element from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(loading_element) => {
            if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
