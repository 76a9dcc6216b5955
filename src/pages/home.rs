use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};

use crate::config;
use crate::content;
use crate::motion::{self, Spring};

/// Mobile/desktop split maintained by the resize tracking. Currently a
/// styling hook only; no layout logic branches on it yet.
pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= config::MOBILE_BREAKPOINT_PX
}

/// Raw scroll progress over the whole document. Falls back to 0 when the
/// page has no scrollable extent.
fn sample_raw_progress() -> f64 {
    if let Some(win) = window() {
        if let Some(document) = win.document() {
            if let Some(root) = document.document_element() {
                let scroll_y = win.scroll_y().unwrap_or(0.0);
                let viewport = win
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let extent = root.scroll_height() as f64 - viewport;
                return motion::scroll_progress(scroll_y, extent);
            }
        }
    }
    0.0
}

/// Forwards a call-to-action click to the floating reservation trigger, so
/// a single code path owns popup opening. Missing element degrades to a
/// no-op.
fn click_reservation_trigger() {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(config::RESERVATION_BUTTON_ID) {
            if let Ok(button) = element.dyn_into::<HtmlElement>() {
                button.click();
            }
        }
    }
}

const PAGE_STYLES: &str = r#"
    body {
        margin: 0;
    }
    .landing-page {
        min-height: 100vh;
        background: #fff;
        color: #000;
        font-family: 'Apple SD Gothic Neo', 'Noto Sans KR', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    }
    .scroll-progress-bar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 4px;
        background: #000;
        transform-origin: 0 50%;
        z-index: 50;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        padding: 2rem 1rem;
        text-align: center;
    }
    .hero h1 {
        font-size: 2.25rem;
        font-weight: 700;
        margin: 0 0 1rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #4b5563;
        margin: 0 0 2rem;
    }
    .cta-button {
        background: #000;
        color: #fff;
        border: none;
        border-radius: 6px;
        padding: 0.75rem 1.5rem;
        font-size: 1rem;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .cta-button:hover {
        background: #1f2937;
    }
    .page-main {
        max-width: 1100px;
        margin: 0 auto;
        padding: 3rem 1rem;
    }
    .page-section {
        margin-bottom: 4rem;
    }
    .section-heading {
        font-size: 1.875rem;
        font-weight: 600;
        text-align: center;
        margin: 0 0 1.5rem;
    }
    .features-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .feature-card {
        border: 2px solid #000;
        border-radius: 8px;
        padding: 1.5rem;
        height: 100%;
        box-sizing: border-box;
    }
    .feature-icon {
        font-size: 2rem;
        display: block;
        margin-bottom: 1rem;
    }
    .feature-card h3 {
        font-size: 1.25rem;
        font-weight: 600;
        margin: 0 0 0.5rem;
    }
    .feature-card p {
        color: #4b5563;
        margin: 0;
    }
    .steps-panel {
        background: #f3f4f6;
        padding: 2rem;
        border-radius: 8px;
        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
    }
    .steps-row {
        display: flex;
        justify-content: space-between;
        gap: 0.5rem;
    }
    .step-item {
        text-align: center;
        flex: 1;
    }
    .step-dot {
        width: 2rem;
        height: 2rem;
        border-radius: 50%;
        background: #000;
        margin: 0 auto 0.5rem;
    }
    .step-item p {
        font-size: 0.875rem;
        margin: 0;
    }
    .testimonials-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .testimonial-card {
        border: 2px solid #000;
        border-radius: 8px;
        padding: 1.5rem;
        height: 100%;
        box-sizing: border-box;
    }
    .testimonial-header {
        display: flex;
        align-items: center;
        margin-bottom: 1rem;
    }
    .testimonial-avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        background: #e5e7eb;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 600;
        margin-right: 1rem;
    }
    .testimonial-name {
        font-weight: 600;
        margin: 0;
    }
    .testimonial-job {
        font-size: 0.875rem;
        color: #4b5563;
        margin: 0;
    }
    .testimonial-quote {
        color: #374151;
        font-style: italic;
        margin: 0;
    }
    .closing-cta {
        max-width: 28rem;
        margin: 0 auto;
    }
    .closing-cta .cta-button {
        width: 100%;
    }
    .page-footer {
        background: #000;
        color: #fff;
        text-align: center;
        padding: 2rem 1rem;
        margin-top: 4rem;
    }
    .page-footer p {
        margin: 0;
    }
    @media (min-width: 768px) {
        .features-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .testimonials-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let progress = use_state_eq(|| 0.0f64);
    let mobile = use_state_eq(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(win) = window() {
                    win.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Resize listener maintaining the mobile/desktop flag.
    {
        let mobile = mobile.clone();
        use_effect_with_deps(
            move |_| {
                let mut resize_handle: Option<(web_sys::Window, Closure<dyn FnMut()>)> = None;
                if let Some(win) = window() {
                    let update = {
                        let mobile = mobile.clone();
                        move |win: &web_sys::Window| {
                            let width = win
                                .inner_width()
                                .ok()
                                .and_then(|w| w.as_f64())
                                .unwrap_or(0.0);
                            mobile.set(is_mobile(width));
                        }
                    };
                    update(&win);
                    let callback = {
                        let win = win.clone();
                        Closure::wrap(Box::new(move || update(&win)) as Box<dyn FnMut()>)
                    };
                    if win
                        .add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        resize_handle = Some((win, callback));
                    }
                }
                move || {
                    if let Some((win, callback)) = resize_handle {
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Scroll sampling plus spring smoothing: scroll events refresh the raw
    // sample, an animation-frame loop eases the published value toward it.
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let raw_target = Rc::new(Cell::new(sample_raw_progress()));
                let spring = Rc::new(RefCell::new(Spring::new(raw_target.get())));
                progress.set(raw_target.get());

                let mut scroll_callback: Option<Closure<dyn FnMut()>> = None;
                let frame_id = Rc::new(Cell::new(None::<i32>));
                let frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));

                if let Some(win) = window() {
                    let callback = {
                        let raw_target = raw_target.clone();
                        Closure::wrap(Box::new(move || {
                            raw_target.set(sample_raw_progress());
                        }) as Box<dyn FnMut()>)
                    };
                    if win
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        scroll_callback = Some(callback);
                    }

                    let tick = {
                        let spring = spring.clone();
                        let progress = progress.clone();
                        let frame_id = frame_id.clone();
                        let frame_closure = frame_closure.clone();
                        let win = win.clone();
                        move || {
                            let smoothed = spring
                                .borrow_mut()
                                .step(raw_target.get(), motion::FRAME_STEP_SECONDS);
                            progress.set(smoothed);
                            if let Some(closure) = frame_closure.borrow().as_ref() {
                                if let Ok(id) =
                                    win.request_animation_frame(closure.as_ref().unchecked_ref())
                                {
                                    frame_id.set(Some(id));
                                }
                            }
                        }
                    };
                    *frame_closure.borrow_mut() =
                        Some(Closure::wrap(Box::new(tick) as Box<dyn FnMut()>));
                    if let Some(closure) = frame_closure.borrow().as_ref() {
                        if let Ok(id) =
                            win.request_animation_frame(closure.as_ref().unchecked_ref())
                        {
                            frame_id.set(Some(id));
                        }
                    }
                }

                let frame_closure_cleanup = frame_closure.clone();
                move || {
                    if let Some(win) = window() {
                        if let Some(callback) = scroll_callback.as_ref() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                        if let Some(id) = frame_id.get() {
                            let _ = win.cancel_animation_frame(id);
                        }
                    }
                    frame_closure_cleanup.borrow_mut().take();
                    drop(scroll_callback);
                }
            },
            (),
        );
    }

    let reserve = Callback::from(|_: MouseEvent| click_reservation_trigger());
    let p = *progress;

    html! {
        <div class={classes!("landing-page", (*mobile).then(|| "mobile"))}>
            <style>{PAGE_STYLES}</style>
            <div
                class="scroll-progress-bar"
                style={format!("transform: scaleX({:.4});", p)}
            />

            <header class="hero">
                <h1>{"아이디어를 서비스로 바꾸는 비밀 – 커서 바이블"}</h1>
                <p class="hero-subtitle">{"지금 예약하면 50% 할인! 여러분의 아이디어를 실현할 절호의 기회!"}</p>
                <button class="cta-button" onclick={reserve.clone()}>{"지금 예약하기"}</button>
            </header>

            <main class="page-main">
                <section class="page-section">
                    <h2 class="section-heading" style={motion::heading_reveal(p, motion::FEATURES_HEADING_RANGE).css()}>
                        {"커서 바이블로 무엇을 배우나요?"}
                    </h2>
                    <div class="features-grid">
                        { for content::FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div class="feature-card" style={motion::feature_card_reveal(p, index).css()}>
                                <span class="feature-icon">{feature.icon}</span>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="page-section">
                    <h2 class="section-heading" style={motion::heading_reveal(p, motion::STEPS_HEADING_RANGE).css()}>
                        {"Cursor로 아이디어를 현실로"}
                    </h2>
                    <div class="steps-panel" style={motion::step_panel_reveal(p).css()}>
                        <div class="steps-row">
                            { for content::STEPS.iter().enumerate().map(|(index, step)| html! {
                                <div class="step-item" style={motion::step_item_reveal(p, index).css()}>
                                    <div class="step-dot"></div>
                                    <p>{*step}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="page-section">
                    <h2 class="section-heading" style={motion::heading_reveal(p, motion::TESTIMONIALS_HEADING_RANGE).css()}>
                        {"사용자 후기"}
                    </h2>
                    <div class="testimonials-grid">
                        { for content::TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <div class="testimonial-card" style={motion::testimonial_reveal(p, index).css()}>
                                <div class="testimonial-header">
                                    <div class="testimonial-avatar">{testimonial.avatar_initial}</div>
                                    <div>
                                        <h3 class="testimonial-name">{format!("{}, {}세", testimonial.name, testimonial.age)}</h3>
                                        <p class="testimonial-job">{testimonial.job}</p>
                                    </div>
                                </div>
                                <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section>
                    <h2 class="section-heading" style={motion::heading_reveal(p, motion::CLOSING_HEADING_RANGE).css()}>
                        {"지금 바로 예약하세요"}
                    </h2>
                    <div class="closing-cta" style={motion::closing_cta_reveal(p).css()}>
                        <button class="cta-button" onclick={reserve}>{"지금 예약하고 50% 할인받기"}</button>
                    </div>
                </section>
            </main>

            <footer class="page-footer">
                <p>{"© 2024 커서 바이블. All rights reserved."}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_flag_follows_breakpoint() {
        assert!(!is_mobile(1024.0));
        assert!(is_mobile(600.0));
        assert!(is_mobile(768.0));
        assert!(!is_mobile(768.1));
    }
}
