//! Tuning constants for the scroll and pointer effects.

/// A section counts as current once the scroll position is within this many
/// pixels above its top edge.
pub const SCROLL_HIGHLIGHT_OFFSET: f64 = 200.0;

/// Fraction of the scroll offset applied to the decorative wave layers.
pub const WAVE_PARALLAX_FACTOR: f64 = 0.3;

/// Background-position shift of a section at full viewport traversal, in px.
pub const BACKGROUND_DRIFT_RANGE: f64 = 50.0;

/// Pointer distance (px) beyond which buttons get no glow.
pub const GLOW_RADIUS: f64 = 150.0;

/// Glow blur at distance zero; blur grows linearly from here with distance.
pub const GLOW_BASE_BLUR: f64 = 20.0;

pub const LOADING_TICK_MS: u32 = 200;
pub const LOADING_MAX_INCREMENT: f64 = 40.0;
/// Fake progress never crosses this on its own; only the load event does.
pub const LOADING_HOLD_BELOW: f64 = 90.0;
pub const LOADING_FADE_DELAY_MS: u32 = 300;

/// How long the contact form shows its confirmation before resetting.
pub const SENT_RESET_DELAY_MS: u32 = 2_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
