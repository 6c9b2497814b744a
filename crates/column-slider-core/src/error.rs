//! Error types for slider configuration
//!
//! Gesture handling itself is infallible. These errors only come out of
//! explicit validation and parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("Invalid range: min ({min}) must not exceed max ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Step must be zero or positive, got {0}")]
    NegativeStep(f64),

    #[error("Track height must be a positive number of pixels, got {0}")]
    InvalidTrackHeight(f32),

    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),
}
