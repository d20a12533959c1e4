//! Scripted intro sequence.
//!
//! The director waits for the first paint after both models load, then
//! schedules a fixed set of tweens and starts the skeletal clip. Everything is
//! advanced by the frame loop rather than by independent timers.

/// Startup deferral, tween scheduling and per-frame tween application.
pub mod director;

/// Play-once-and-clamp clock for the animated model's clip.
pub mod playback;

/// Scalar tweens, easing and the transform channels they write.
pub mod tween;
