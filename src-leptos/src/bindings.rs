//! JavaScript API.
//!
//! ```js
//! import init, { HoverTip, installGlobal, debounce } from "./hovertip_leptos.js";
//! await init();
//! const tip = new HoverTip({ delayMs: 150 });
//! tip.onHover(button, "Saved <b>3</b> files", { placement: "bottom" });
//! ```
//!
//! Strings are inserted as markup; DOM nodes are moved into the tooltip;
//! anything else shows an empty tooltip.

use hovertip_core::{Debounced, Throttled, Tooltip, TooltipContent};
use hovertip_types::{ConfigError, Result, TooltipConfig, TooltipError, TooltipOptions};
use js_sys::{Array, Function};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Node;

use crate::global;
use crate::surface::WebSurface;

const GLOBAL_PROPERTY: &str = "hovertip";

fn to_js(e: TooltipError) -> JsError {
    JsError::new(&e.to_string())
}

fn type_name(value: &JsValue) -> String {
    if value.is_null() {
        return "null".to_owned();
    }
    value.js_typeof().as_string().unwrap_or_else(|| "unknown".to_owned())
}

fn trigger_from_js(value: &JsValue) -> Result<Node> {
    value
        .dyn_ref::<Node>()
        .cloned()
        .ok_or_else(|| TooltipError::InvalidTrigger { given: type_name(value) })
}

fn content_from_js(value: &JsValue) -> TooltipContent<Node> {
    if let Some(markup) = value.as_string() {
        return TooltipContent::Markup(markup);
    }
    match value.dyn_ref::<Node>() {
        Some(node) => TooltipContent::Node(node.clone()),
        None => TooltipContent::Empty,
    }
}

/// `undefined`/`null` become the type's default.
fn from_js_or_default<T: DeserializeOwned + Default>(value: JsValue) -> Result<T> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ConfigError::ParseError { message: e.to_string() }.into())
}

fn callable(value: JsValue) -> Result<Function> {
    let given = type_name(&value);
    value.dyn_into::<Function>().map_err(|_| TooltipError::NotCallable { given })
}

/// Tooltip controller exposed to JS.
#[wasm_bindgen(js_name = HoverTip)]
pub struct JsHoverTip {
    tooltip: Tooltip<WebSurface>,
}

#[wasm_bindgen(js_class = HoverTip)]
impl JsHoverTip {
    /// `config` is an optional `TooltipConfig`-shaped object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> std::result::Result<JsHoverTip, JsError> {
        let config: TooltipConfig = from_js_or_default(config).map_err(to_js)?;
        let tooltip = global::controller(config).map_err(to_js)?;
        Ok(Self { tooltip })
    }

    #[wasm_bindgen(js_name = onHover)]
    pub fn on_hover(
        &self,
        trigger: JsValue,
        content: JsValue,
        options: JsValue,
    ) -> std::result::Result<(), JsError> {
        let node = trigger_from_js(&trigger).map_err(to_js)?;
        let options: TooltipOptions = from_js_or_default(options).map_err(to_js)?;
        self.tooltip.on_hover(&node, content_from_js(&content), options).map_err(to_js)
    }

    pub fn show(
        &self,
        trigger: JsValue,
        content: JsValue,
        options: JsValue,
    ) -> std::result::Result<(), JsError> {
        let node = trigger_from_js(&trigger).map_err(to_js)?;
        let options: TooltipOptions = from_js_or_default(options).map_err(to_js)?;
        self.tooltip.show(&node, &content_from_js(&content), &options).map_err(to_js)
    }

    pub fn hide(&self, options: JsValue) -> std::result::Result<(), JsError> {
        let options: TooltipOptions = from_js_or_default(options).map_err(to_js)?;
        self.tooltip.hide(&options);
        Ok(())
    }

    pub fn destroy(&self) {
        self.tooltip.destroy();
    }

    /// Remove the hover listeners `onHover` attached to `trigger`.
    pub fn unregister(&self, trigger: JsValue) -> bool {
        trigger.dyn_ref::<Node>().is_some_and(|node| self.tooltip.unregister(node))
    }
}

/// Create (or reuse) the page's default controller and expose it as
/// `window.hovertip`.
#[wasm_bindgen(js_name = installGlobal)]
pub fn install_global() -> std::result::Result<JsHoverTip, JsError> {
    let tooltip = global::global().map_err(to_js)?;
    let window = web_sys::window()
        .ok_or_else(|| to_js(TooltipError::dom("window", "no global window")))?;
    let handle = JsValue::from(JsHoverTip { tooltip: tooltip.clone() });
    js_sys::Reflect::set(&window, &JsValue::from_str(GLOBAL_PROPERTY), &handle)
        .map_err(|e| to_js(TooltipError::dom("Reflect.set", format!("{:?}", e))))?;
    log::info!("hovertip {} installed as window.{}", env!("CARGO_PKG_VERSION"), GLOBAL_PROPERTY);
    Ok(JsHoverTip { tooltip })
}

/// Debounced JS function; invoke with `apply(thisArg, argsArray)`.
#[wasm_bindgen(js_name = Debounced)]
pub struct JsDebounced {
    inner: Debounced<(JsValue, Array)>,
}

#[wasm_bindgen(js_class = Debounced)]
impl JsDebounced {
    pub fn apply(&self, this: JsValue, args: Array) {
        self.inner.call((this, args));
    }

    #[wasm_bindgen(getter, js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }
}

/// Throttled JS function; invoke with `apply(thisArg, argsArray)`.
#[wasm_bindgen(js_name = Throttled)]
pub struct JsThrottled {
    inner: Throttled<(JsValue, Array)>,
}

#[wasm_bindgen(js_class = Throttled)]
impl JsThrottled {
    pub fn apply(&self, this: JsValue, args: Array) {
        self.inner.call((this, args));
    }
}

fn forward(func: Function) -> impl Fn((JsValue, Array)) + 'static {
    move |(this, args)| {
        if let Err(e) = func.apply(&this, &args) {
            log::error!("Wrapped function threw: {:?}", e);
        }
    }
}

#[wasm_bindgen]
pub fn debounce(
    func: JsValue,
    delay: u32,
    immediate: bool,
) -> std::result::Result<JsDebounced, JsError> {
    let func = callable(func).map_err(to_js)?;
    let inner = hovertip_core::debounce(forward(func), delay, immediate, global::event_loop());
    Ok(JsDebounced { inner })
}

#[wasm_bindgen]
pub fn throttle(func: JsValue, delay: u32) -> std::result::Result<JsThrottled, JsError> {
    let func = callable(func).map_err(to_js)?;
    let inner = hovertip_core::throttle(forward(func), delay, global::event_loop());
    Ok(JsThrottled { inner })
}
