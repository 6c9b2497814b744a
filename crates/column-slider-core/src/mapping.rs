//! Gesture displacement to slider value
//!
//! Displacement is always measured from the gesture origin, so the mapping is
//! a pure function of `(start_value, displacement)` and repeated moves with the
//! same sample produce the same value.
//!
//! ## Stepped vs continuous
//!
//! - Stepped: the *displacement* is snapped to a whole number of steps, then
//!   added to the start value. A drag that starts off-grid keeps moving in
//!   step-sized increments from that origin.
//! - Continuous: the clamped value is truncated (not rounded) to two decimals.

use crate::range::SliderRange;

/// Convert a cumulative vertical displacement into a slider value
///
/// # Arguments
/// * `displacement` - Pixels from gesture start, negative = up = larger value
/// * `start_value` - Value captured when the gesture started
/// * `range` - Bounds and step
/// * `track_height` - Pixel length mapped to the full span
///
/// Zero, negative or non-finite track heights (and non-finite displacements)
/// map to no movement.
///
/// In continuous mode the truncated value is clamped a second time, so the
/// result is `clamp(floor(clamp(v) * 100) / 100)`. This only differs from a
/// plain truncation when `min` has more than two decimals, where truncation
/// alone would land below `min`.
pub fn map_displacement_to_value(
    displacement: f32,
    start_value: f64,
    range: &SliderRange,
    track_height: f32,
) -> f64 {
    let ratio = displacement_ratio(displacement, track_height);
    let span = range.span();

    match range.effective_step() {
        Some(step) => {
            let steps = round_half_up(ratio * span / step);
            range.clamp(start_value + steps * step)
        }
        None => {
            let clamped = range.clamp(start_value + ratio * span);
            // Re-clamp: a min with more than two decimals could otherwise be undershot
            range.clamp(truncate_to_hundredths(clamped))
        }
    }
}

/// Truncate toward negative infinity at two decimal places
pub fn truncate_to_hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

fn displacement_ratio(displacement: f32, track_height: f32) -> f64 {
    if !displacement.is_finite() || !track_height.is_finite() || track_height <= 0.0 {
        return 0.0;
    }
    -f64::from(displacement) / f64::from(track_height)
}

/// Half-way cases round toward positive infinity (`-2.5` → `-2`)
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
