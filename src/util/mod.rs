//! Shared utilities: frame pacing and small vector helpers.

/// Frame interval measurement and fps limiting.
pub mod frame_timing;
pub(crate) mod math;
