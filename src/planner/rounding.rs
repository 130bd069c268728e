//! Output-boundary rounding.
//!
//! Midpoints round to the even neighbour, so `0.5 -> 0`, `1.5 -> 2` and
//! `2.25 -> 2.2` at one decimal. Intermediate values are never rounded.

/// Round `value` to `decimals` places, ties to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if decimals <= 0 {
        return value.round_ties_even();
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Round to whole calories (or whole grams).
#[inline]
pub fn round_whole(value: f64) -> f64 {
    round_to(value, 0)
}
