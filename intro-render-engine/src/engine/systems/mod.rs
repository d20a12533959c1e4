//! Per-frame runtime systems around the director.
//!
//! Clock sampling, pointer tracking, resize handling and the page reveal timer.

/// Cursor offset resource and pointer tracking.
pub mod cursor;

/// Monotonic frame clock; first step of every frame.
pub mod frame_clock;

/// Viewport size and camera aspect updates on window resize.
pub mod resize;

/// Fixed-delay page element reveal, independent of the intro sequence.
pub mod reveal;
