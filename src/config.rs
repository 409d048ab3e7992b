//! Tuning constants for the scroll and timing behavior. None of these are
//! semantically load-bearing beyond the thresholds the UI contract names.

/// Extra padding under the fixed header when scrolling to an anchor.
pub const ANCHOR_SCROLL_PADDING_PX: f64 = 20.0;

/// Extra offset when deciding which anchor spans the scroll position.
pub const TRACKING_OFFSET_PX: f64 = 50.0;

/// Navbar gets the "scrolled" treatment past this offset.
pub const NAVBAR_SCROLLED_AT_PX: f64 = 50.0;

/// Scrolling down past this offset auto-hides the navbar.
pub const NAVBAR_HIDE_AFTER_PX: f64 = 100.0;

/// Within this distance of the top the navbar is always shown.
pub const NAVBAR_PIN_NEAR_TOP_PX: f64 = 10.0;

/// Pointer within this many pixels of the viewport top reveals the navbar.
pub const MOUSE_REVEAL_BAND_PX: i32 = 100;

/// Trailing-edge collapse window for scroll events.
pub const SCROLL_THROTTLE_MS: u32 = 10;

/// Delay between switching sections and scrolling to a deep-linked anchor,
/// so the newly shown container has rendered.
pub const HASH_SCROLL_DELAY_MS: u32 = 100;

/// An element reveals once its top rises this far above the viewport bottom.
pub const REVEAL_VISIBLE_PX: f64 = 150.0;

/// Simulated latency of the stubbed contact submission.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

/// Transient notifications dismiss themselves after this long.
pub const NOTICE_DISMISS_MS: u32 = 5_000;
