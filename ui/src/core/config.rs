//! Compile-time site configuration.

/// How long the intro loader stays up before revealing the page.
pub const LOADER_DELAY_MS: u64 = 1_500;

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Stylesheet media query for the mobile layout. Its bound sits just under
/// `MOBILE_BREAKPOINT_PX` so a 768 px viewport is desktop in CSS too.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767.98px)";

/// Scroll offset past which the navbar switches to its solid background.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Static icon linked from the document head at startup.
pub const FAVICON_HREF: &str = "/logo.svg";

/// Animation loop tick (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Diameter of the cursor follower ring.
pub const CURSOR_SIZE_PX: f64 = 32.0;
