/// Tally embed script, loaded by the reservation trigger on mount.
pub const TALLY_EMBED_SCRIPT_URL: &str = "https://tally.so/widgets/embed.js";

/// Reservation form opened through `Tally.openPopup`.
pub const RESERVATION_FORM_ID: &str = "wb8xN2";

/// Element id of the floating trigger. Part of the page's DOM contract:
/// the call-to-action buttons forward their clicks to this element.
pub const RESERVATION_BUTTON_ID: &str = "reservation-button";

/// Viewport widths at or below this count as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
