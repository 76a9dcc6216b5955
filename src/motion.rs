//! Scroll-driven animation math.
//!
//! The page samples raw window scroll position, smooths it through a
//! [`Spring`], and maps the smoothed progress to per-element
//! [`VisualState`]s. Everything in this module is pure so the reveal
//! choreography can be exercised without a DOM.

/// Fixed spring integration step, one animation frame.
pub const FRAME_STEP_SECONDS: f64 = 1.0 / 60.0;

/// Reveal window for the features section heading.
pub const FEATURES_HEADING_RANGE: (f64, f64) = (0.1, 0.2);
/// Reveal window for the steps section heading.
pub const STEPS_HEADING_RANGE: (f64, f64) = (0.4, 0.5);
/// Reveal window for the testimonials section heading.
pub const TESTIMONIALS_HEADING_RANGE: (f64, f64) = (0.6, 0.7);
/// Reveal window for the closing call-to-action heading.
pub const CLOSING_HEADING_RANGE: (f64, f64) = (0.8, 0.9);

/// Normalized scroll progress across the page's scrollable extent.
///
/// A non-positive extent (zero-height document) yields `0.0` so callers
/// never feed NaN into an interpolation.
pub fn scroll_progress(scroll_y: f64, scroll_extent: f64) -> f64 {
    if scroll_extent <= 0.0 {
        return 0.0;
    }
    (scroll_y / scroll_extent).clamp(0.0, 1.0)
}

/// Linear interpolation from `input` to `output`, clamped to the output
/// endpoints for values outside the input range. Degenerate input ranges
/// return the start output.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end <= in_start {
        return out_start;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Spring filter applied to raw scroll progress, advanced once per frame.
///
/// Overdamped with these constants, so the smoothed value approaches the
/// target without overshooting. Once both the remaining distance and the
/// velocity fall under the rest delta, the value snaps to the target and
/// the spring is at rest.
pub struct Spring {
    stiffness: f64,
    damping: f64,
    rest_delta: f64,
    value: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(initial: f64) -> Self {
        Spring {
            stiffness: 100.0,
            damping: 30.0,
            rest_delta: 0.001,
            value: initial,
            velocity: 0.0,
        }
    }

    /// Advance one frame toward `target` and return the new value.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let acceleration = (target - self.value) * self.stiffness - self.velocity * self.damping;
        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;
        if (target - self.value).abs() < self.rest_delta && self.velocity.abs() < self.rest_delta {
            self.value = target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Visual parameters for one animated element, rendered as an inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_y: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        VisualState {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate_y: 0.0,
        }
    }
}

impl VisualState {
    pub fn css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.1}px, {:.1}px) scale({:.3}) rotateY({:.1}deg);",
            self.opacity, self.translate_x, self.translate_y, self.scale, self.rotate_y
        )
    }
}

/// Section headings fade in while sliding up from 50px below.
pub fn heading_reveal(progress: f64, range: (f64, f64)) -> VisualState {
    VisualState {
        opacity: map_range(progress, range, (0.0, 1.0)),
        translate_y: map_range(progress, range, (50.0, 0.0)),
        ..VisualState::default()
    }
}

/// Feature cards reveal one after another, sliding in from alternating
/// sides of the grid.
pub fn feature_card_reveal(progress: f64, index: usize) -> VisualState {
    let start = 0.2 + index as f64 * 0.05;
    let range = (start, start + 0.1);
    let from_x = if index % 2 == 0 { -50.0 } else { 50.0 };
    VisualState {
        opacity: map_range(progress, range, (0.0, 1.0)),
        translate_x: map_range(progress, range, (from_x, 0.0)),
        ..VisualState::default()
    }
}

/// The steps panel fades in while growing to full size.
pub fn step_panel_reveal(progress: f64) -> VisualState {
    let range = (0.45, 0.55);
    VisualState {
        opacity: map_range(progress, range, (0.0, 1.0)),
        scale: map_range(progress, range, (0.9, 1.0)),
        ..VisualState::default()
    }
}

/// Individual steps pop up in order inside the panel.
pub fn step_item_reveal(progress: f64, index: usize) -> VisualState {
    let start = 0.5 + index as f64 * 0.02;
    let range = (start, start + 0.1);
    VisualState {
        opacity: map_range(progress, range, (0.0, 1.0)),
        translate_y: map_range(progress, range, (20.0, 0.0)),
        ..VisualState::default()
    }
}

/// Testimonial cards swing into place around the vertical axis.
pub fn testimonial_reveal(progress: f64, index: usize) -> VisualState {
    let start = 0.65 + index as f64 * 0.05;
    let range = (start, start + 0.1);
    VisualState {
        opacity: map_range(progress, range, (0.0, 1.0)),
        rotate_y: map_range(progress, range, (90.0, 0.0)),
        ..VisualState::default()
    }
}

/// The closing call-to-action block fades in while growing to full size.
pub fn closing_cta_reveal(progress: f64) -> VisualState {
    let range = (0.85, 0.95);
    VisualState {
        opacity: map_range(progress, range, (0.0, 1.0)),
        scale: map_range(progress, range, (0.9, 1.0)),
        ..VisualState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_clamps_outside_input_domain() {
        assert_eq!(map_range(0.0, (0.2, 0.3), (0.0, 1.0)), 0.0);
        assert_eq!(map_range(0.95, (0.2, 0.3), (0.0, 1.0)), 1.0);
        assert_eq!(map_range(-2.0, (0.1, 0.2), (50.0, 0.0)), 50.0);
        assert_eq!(map_range(3.0, (0.1, 0.2), (50.0, 0.0)), 0.0);
    }

    #[test]
    fn map_range_interpolates_linearly() {
        assert!((map_range(0.25, (0.2, 0.3), (0.0, 1.0)) - 0.5).abs() < 1e-9);
        assert!((map_range(0.15, (0.1, 0.2), (50.0, 0.0)) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn map_range_degenerate_input_returns_start_output() {
        assert_eq!(map_range(0.5, (0.3, 0.3), (10.0, 20.0)), 10.0);
        assert_eq!(map_range(0.5, (0.4, 0.3), (10.0, 20.0)), 10.0);
    }

    #[test]
    fn scroll_progress_defaults_to_zero_without_extent() {
        assert_eq!(scroll_progress(120.0, 0.0), 0.0);
        assert_eq!(scroll_progress(120.0, -40.0), 0.0);
    }

    #[test]
    fn scroll_progress_normalizes_and_clamps() {
        assert!((scroll_progress(250.0, 1000.0) - 0.25).abs() < 1e-9);
        assert_eq!(scroll_progress(1500.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 1000.0), 0.0);
    }

    #[test]
    fn spring_converges_without_overshoot() {
        let mut spring = Spring::new(0.0);
        let mut frames = 0;
        loop {
            let value = spring.step(1.0, FRAME_STEP_SECONDS);
            assert!(value <= 1.0, "overshot at frame {}: {}", frames, value);
            frames += 1;
            if value == 1.0 {
                break;
            }
            assert!(frames < 600, "spring did not settle");
        }
    }

    #[test]
    fn spring_stays_at_rest_on_target() {
        let mut spring = Spring::new(0.0);
        let mut last = 0.0;
        for _ in 0..600 {
            last = spring.step(0.7, FRAME_STEP_SECONDS);
        }
        assert_eq!(last, 0.7);
        assert_eq!(spring.step(0.7, FRAME_STEP_SECONDS), 0.7);
    }

    #[test]
    fn feature_cards_start_hidden_and_offset() {
        let first = feature_card_reveal(0.0, 0);
        assert_eq!(first.opacity, 0.0);
        assert_eq!(first.translate_x, -50.0);
        let second = feature_card_reveal(0.0, 1);
        assert_eq!(second.translate_x, 50.0);
    }

    #[test]
    fn feature_cards_reveal_sequentially() {
        // Midway through the section the first card has finished while the
        // last has not.
        let first = feature_card_reveal(0.32, 0);
        let last = feature_card_reveal(0.32, 3);
        assert_eq!(first.opacity, 1.0);
        assert_eq!(first.translate_x, 0.0);
        assert!(last.opacity < 1.0);
    }

    #[test]
    fn step_items_stagger_by_index() {
        let p = 0.61;
        let first = step_item_reveal(p, 0);
        let last = step_item_reveal(p, 4);
        assert_eq!(first.opacity, 1.0);
        assert_eq!(first.translate_y, 0.0);
        assert!(last.opacity < 1.0);
        assert!(last.translate_y > 0.0);
    }

    #[test]
    fn testimonials_rotate_into_place() {
        let start = testimonial_reveal(0.0, 0);
        assert_eq!(start.rotate_y, 90.0);
        assert_eq!(start.opacity, 0.0);
        let done = testimonial_reveal(1.0, 2);
        assert_eq!(done.rotate_y, 0.0);
        assert_eq!(done.opacity, 1.0);
    }

    #[test]
    fn page_end_reaches_closing_state() {
        let closing = closing_cta_reveal(1.0);
        assert_eq!(closing.opacity, 1.0);
        assert_eq!(closing.scale, 1.0);
        let heading = heading_reveal(1.0, CLOSING_HEADING_RANGE);
        assert_eq!(heading.opacity, 1.0);
        assert_eq!(heading.translate_y, 0.0);
    }

    #[test]
    fn css_renders_all_visual_parameters() {
        let state = VisualState {
            opacity: 0.5,
            translate_x: -25.0,
            translate_y: 10.0,
            scale: 0.95,
            rotate_y: 45.0,
        };
        let css = state.css();
        assert!(css.contains("opacity: 0.500"));
        assert!(css.contains("translate(-25.0px, 10.0px)"));
        assert!(css.contains("scale(0.950)"));
        assert!(css.contains("rotateY(45.0deg)"));
    }
}
