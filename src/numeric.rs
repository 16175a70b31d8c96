//! Numeric conversion helpers used across the crate.
//!
//! These utilities guard conversions between the floating-point and integer
//! domains and host the non-finite sanitization primitive shared by the
//! vector operations.

/// Replace a non-finite value with exactly `0.0`.
///
/// The scripting runtimes this crate serves have no representation for NaN
/// or the infinities, so per-axis division results are squashed to zero
/// instead of propagating an unrepresentable value.
///
/// # Examples
///
/// ```
/// use simmath::numeric::zero_if_nonfinite;
/// assert_eq!(zero_if_nonfinite(f64::NAN), 0.0);
/// assert_eq!(zero_if_nonfinite(f64::INFINITY), 0.0);
/// assert_eq!(zero_if_nonfinite(-2.5), -2.5);
/// ```
#[must_use]
pub fn zero_if_nonfinite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round to the nearest integer, ties to even, and convert to `i64`.
///
/// Values outside the `i64` domain saturate at the bounds and NaN converts
/// to zero, keeping the conversion total.
///
/// # Examples
///
/// ```
/// use simmath::numeric::round_to_i64;
/// assert_eq!(round_to_i64(2.5), 2);
/// assert_eq!(round_to_i64(3.5), 4);
/// assert_eq!(round_to_i64(-13.2), -13);
/// assert_eq!(round_to_i64(f64::INFINITY), i64::MAX);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "The rounded value is clamped to the i64 bounds before casting."
)]
#[must_use]
pub fn round_to_i64(value: f64) -> i64 {
    let rounded = value.round_ties_even();
    let clamped = rounded.clamp(i64::MIN as f64, i64::MAX as f64);
    clamped as i64
}
