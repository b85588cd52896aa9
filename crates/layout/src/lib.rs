//! Toolkit-independent layout engine for the code area.
//!
//! Everything here is pure arithmetic over character cells. Hosts convert
//! pixels to cells (see [`ViewportMetrics::from_pixels`]) and pull layout
//! queries each frame; nothing in this crate calls back into a renderer.

/// Caret movement computation.
pub mod navigation;
/// Scroll, reveal, and center computation.
pub mod scrolling;
/// Row structure and coordinate mapping.
pub mod structure;
/// Visible column and byte ranges for a horizontal window.
pub mod visibility;

pub use navigation::compute_movement;
pub use scrolling::{
	ViewportMetrics, compute_center_on_scroll_position, compute_reveal_scroll_position, compute_scrolling,
};
pub use structure::{LayoutConfig, Structure};
pub use visibility::VisibleRange;
