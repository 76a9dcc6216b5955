use yew::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    window, HtmlScriptElement, HtmlStyleElement, MouseEvent, MutationObserver,
    MutationObserverInit, MutationRecord,
};
use gloo_timers::callback::Timeout;

use crate::config;
use crate::tally;

/// Delay before sweeping widget-injected loader elements after the popup
/// reports open; the style-level suppression alone is not reliable.
const POST_OPEN_CLEANUP_MS: u32 = 100;

const TRIGGER_STYLES: &str = r#"
    .reservation-trigger {
        position: fixed;
        bottom: 20px;
        right: 20px;
        z-index: 10000;
    }
    .reservation-button {
        width: 64px;
        height: 64px;
        border: none;
        border-radius: 50%;
        background: #000;
        color: #fff;
        font-size: 24px;
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
        transition: background 0.2s ease;
    }
    .reservation-button:hover {
        background: #333;
    }
    .reservation-button:disabled {
        cursor: default;
    }
    .reservation-spinner {
        width: 32px;
        height: 32px;
        border: 2px solid transparent;
        border-top-color: #fff;
        border-radius: 50%;
        animation: reservation-spin 1s linear infinite;
    }
    @keyframes reservation-spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
"#;

/// Removes any loader/overlay element the widget has injected into the page.
fn remove_injected_overlays() {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(loader) = document.query_selector(".tally-loader").ok().flatten() {
            loader.remove();
        }
        if let Some(overlay) = document.query_selector(".tally-overlay").ok().flatten() {
            overlay.remove();
        }
    }
}

/// Floating reservation trigger.
///
/// Owns the single popup-opening code path: the page's call-to-action
/// buttons synthesize clicks on this button by element id. On mount it
/// loads the Tally embed script, injects a style block hiding the widget's
/// loader, and watches the body for loader elements the widget re-creates;
/// all three are torn down on unmount.
#[function_component(ReservationButton)]
pub fn reservation_button() -> Html {
    let is_loading = use_state(|| false);

    use_effect_with_deps(
        move |_| {
            let mut script_el: Option<HtmlScriptElement> = None;
            let mut style_el: Option<HtmlStyleElement> = None;
            let mut observer: Option<MutationObserver> = None;
            let mut observer_callback: Option<Closure<dyn FnMut(Array, MutationObserver)>> = None;

            if let Some(document) = window().and_then(|w| w.document()) {
                // The embed script, loaded once per page session.
                if let Some(body) = document.body() {
                    if let Ok(element) = document.create_element("script") {
                        if let Ok(script) = element.dyn_into::<HtmlScriptElement>() {
                            script.set_src(config::TALLY_EMBED_SCRIPT_URL);
                            script.set_async(true);
                            if body.append_child(&script).is_ok() {
                                script_el = Some(script);
                            }
                        }
                    }
                }

                // Style-level suppression of the widget's loader UI.
                if let Some(head) = document.head() {
                    if let Ok(element) = document.create_element("style") {
                        if let Ok(style) = element.dyn_into::<HtmlStyleElement>() {
                            style.set_text_content(Some(tally::LOADER_SUPPRESSION_CSS));
                            if head.append_child(&style).is_ok() {
                                style_el = Some(style);
                            }
                        }
                    }
                }

                // The widget re-creates its loader dynamically, so watch the
                // whole body and sweep whenever nodes are added.
                if let Some(body) = document.body() {
                    let callback = Closure::wrap(Box::new(
                        move |records: Array, _observer: MutationObserver| {
                            let has_additions = records.iter().any(|record| {
                                record
                                    .dyn_ref::<MutationRecord>()
                                    .map(|r| r.added_nodes().length() > 0)
                                    .unwrap_or(false)
                            });
                            if has_additions {
                                remove_injected_overlays();
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, MutationObserver)>);
                    if let Ok(obs) = MutationObserver::new(callback.as_ref().unchecked_ref()) {
                        let init = MutationObserverInit::new();
                        init.set_child_list(true);
                        init.set_subtree(true);
                        if obs.observe_with_options(&body, &init).is_ok() {
                            observer = Some(obs);
                        }
                    }
                    observer_callback = Some(callback);
                }
            }

            move || {
                if let Some(script) = script_el {
                    script.remove();
                }
                if let Some(style) = style_el {
                    style.remove();
                }
                if let Some(obs) = observer {
                    obs.disconnect();
                }
                drop(observer_callback);
            }
        },
        (),
    );

    let open_reservation_popup = {
        let is_loading = is_loading.clone();
        Callback::from(move |_: MouseEvent| {
            is_loading.set(true);
            let loading = is_loading.clone();
            let on_open = Closure::wrap(Box::new(move || {
                loading.set(false);
                // The popup can re-inject its loader after opening.
                Timeout::new(POST_OPEN_CLEANUP_MS, remove_injected_overlays).forget();
            }) as Box<dyn FnMut()>);
            if !tally::open_popup(
                config::RESERVATION_FORM_ID,
                &tally::PopupOptions::default(),
                on_open,
            ) {
                info!("Tally widget not ready; reservation popup request dropped");
            }
        })
    };

    html! {
        <div class="reservation-trigger">
            <style>{TRIGGER_STYLES}</style>
            <button
                id={config::RESERVATION_BUTTON_ID}
                class="reservation-button"
                onclick={open_reservation_popup}
                disabled={*is_loading}
            >
                {
                    if *is_loading {
                        html! { <span class="reservation-spinner"></span> }
                    } else {
                        html! { <span class="reservation-emoji">{"📅"}</span> }
                    }
                }
            </button>
        </div>
    }
}
