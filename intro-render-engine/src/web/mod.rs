//! Browser page integration.
//!
//! On wasm32 these calls go through `web-sys`; native builds get equivalents
//! that read the environment or only log.

/// Location fragment lookup and element visibility changes.
pub mod dom;
