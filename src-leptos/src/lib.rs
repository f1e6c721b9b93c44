//! Hovertip - browser bindings
//!
//! `WebSurface` and `BrowserEventLoop` plug the live page into
//! `hovertip-core`; `bindings` exports the JS API and `components` the
//! Leptos `<HoverTip>`.
//!
//! With the default `auto-install` feature, instantiating the module
//! registers the default controller as `window.hovertip`.

pub mod app;
pub mod bindings;
pub mod components;
pub mod global;
pub mod surface;
pub mod timers;

pub use components::HoverTip;
pub use global::{event_loop, global, with_global};
pub use surface::WebSurface;
pub use timers::BrowserEventLoop;

#[cfg(all(feature = "auto-install", not(feature = "demo")))]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point: panic hook, console logging, `window.hovertip`.
#[cfg(all(feature = "auto-install", not(feature = "demo")))]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    drop(console_log::init_with_level(log::Level::Info));

    if bindings::install_global().is_err() {
        log::error!("Could not install window.hovertip");
    }
}
