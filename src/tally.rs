//! Boundary to the Tally embed widget.
//!
//! The embed script installs a `window.Tally` global with an `openPopup`
//! entry point. Everything that touches that global lives here: a typed
//! options record, a readiness probe, and the open call itself.

use log::warn;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "Tally"], js_name = openPopup)]
    fn tally_open_popup(form_id: &str, options: JsValue);
}

/// Style rules suppressing the widget's own loading indicator. Passed both
/// as the popup's custom CSS and injected as a page-level style block; the
/// configuration flag alone does not reliably hide it.
pub const LOADER_SUPPRESSION_CSS: &str = r#"
  .tally-loader, .tally-overlay {
    display: none !important;
    opacity: 0 !important;
    visibility: hidden !important;
  }
"#;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Emoji {
    pub text: &'static str,
    pub animation: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Position {
    pub x: &'static str,
    pub y: &'static str,
}

/// Options record passed to `Tally.openPopup`, mirroring the widget's
/// popup configuration contract.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub width: u32,
    pub auto_close: u32,
    pub layout: &'static str,
    pub align_left: bool,
    pub hide_title: bool,
    pub overlay: bool,
    pub emoji: Emoji,
    pub position: Position,
    pub hide_loading_indicator: bool,
    #[serde(rename = "customCSS")]
    pub custom_css: &'static str,
}

impl Default for PopupOptions {
    fn default() -> Self {
        PopupOptions {
            width: 400,
            auto_close: 5000,
            layout: "default",
            align_left: false,
            hide_title: true,
            overlay: false,
            emoji: Emoji {
                text: "📅",
                animation: "none",
            },
            position: Position {
                x: "right",
                y: "bottom",
            },
            hide_loading_indicator: true,
            custom_css: LOADER_SUPPRESSION_CSS,
        }
    }
}

/// Whether the embed script has installed its global yet. The script loads
/// asynchronously, so early clicks can land before it exists.
pub fn provider_ready() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("Tally")).unwrap_or(false))
        .unwrap_or(false)
}

/// Ask the widget to open `form_id`, invoking `on_open` once the popup
/// reports open. Returns false without side effects when the global is
/// missing or the options fail to cross the JS boundary; there is no retry.
pub fn open_popup(form_id: &str, options: &PopupOptions, on_open: Closure<dyn FnMut()>) -> bool {
    if !provider_ready() {
        return false;
    }
    let js_options = match serde_wasm_bindgen::to_value(options) {
        Ok(value) => value,
        Err(err) => {
            warn!("failed to serialize popup options: {:?}", err);
            return false;
        }
    };
    if Reflect::set(&js_options, &JsValue::from_str("onOpen"), on_open.as_ref()).is_err() {
        return false;
    }
    tally_open_popup(form_id, js_options);
    // The callback must outlive this call; the widget holds the JS side.
    on_open.forget();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_options_serialize_to_widget_contract() {
        let value = serde_json::to_value(PopupOptions::default()).unwrap();
        assert_eq!(value["width"], 400);
        assert_eq!(value["autoClose"], 5000);
        assert_eq!(value["layout"], "default");
        assert_eq!(value["alignLeft"], false);
        assert_eq!(value["hideTitle"], true);
        assert_eq!(value["overlay"], false);
        assert_eq!(value["emoji"]["text"], "📅");
        assert_eq!(value["emoji"]["animation"], "none");
        assert_eq!(value["position"]["x"], "right");
        assert_eq!(value["position"]["y"], "bottom");
        assert_eq!(value["hideLoadingIndicator"], true);
        assert!(value["customCSS"].as_str().unwrap().contains(".tally-loader"));
    }

    #[test]
    fn loader_suppression_css_targets_both_widget_classes() {
        assert!(LOADER_SUPPRESSION_CSS.contains(".tally-loader"));
        assert!(LOADER_SUPPRESSION_CSS.contains(".tally-overlay"));
        assert!(LOADER_SUPPRESSION_CSS.contains("!important"));
    }
}
