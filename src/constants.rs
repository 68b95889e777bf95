//! Shared crate-wide constants.
//!
//! The window measurements are published by the presentation layer and read
//! by the geometry code through [`crate::layout::WindowMetrics`]; the near-edge
//! resize clamps are only correct while both sides agree on them.

/// Smallest width (in cells) a window keeps when resized from its left edge.
pub const WINDOW_MIN_WIDTH: i32 = 16;

/// Smallest height (in cells) a window keeps when resized from its top edge.
pub const WINDOW_MIN_HEIGHT: i32 = 5;

/// Chrome rows between the top border and the window body (the titlebar).
pub const WINDOW_BODY_MARGIN: i32 = 1;

/// Below this viewport size the desktop is not engaged and the error view is
/// shown instead.
pub const MIN_VIEWPORT_WIDTH: u16 = 40;
pub const MIN_VIEWPORT_HEIGHT: u16 = 12;

/// Error code reported by the fallback view for undersized viewports.
pub const VIEWPORT_ERROR_CODE: &str = "VIEWPORT_TOO_SMALL";
