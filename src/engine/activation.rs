//! Threshold activation
//!
//! Step function turning a weighted sum into a buy (1) / don't buy (0)
//! decision.

/// `1` when `sum >= threshold`, otherwise `0`.
///
/// NaN sums never reach the threshold and decide `0`.
#[inline]
pub fn activate(sum: f64, threshold: f64) -> u8 {
    u8::from(sum >= threshold)
}
