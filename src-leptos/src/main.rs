//! Hovertip demo
//!
//! Mounts a page of sample triggers and exposes `window.hovertip`.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use hovertip_core as _;
use hovertip_types as _;
use js_sys as _;
use serde as _;
use serde_wasm_bindgen as _;
use tracing as _;
use wasm_bindgen as _;
use web_sys as _;

use hovertip_leptos::app::App;
use hovertip_leptos::bindings::install_global;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("hovertip demo starting...");

    if install_global().is_err() {
        log::error!("Could not install window.hovertip");
    }

    mount_to_body(App);
}
