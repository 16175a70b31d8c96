//! Fibonacci-recurrence sequence generation.
//!
//! Runs are seeded from Binet's closed form rather than iterated from the
//! origin, so sampling a window deep into the sequence stays O(length).
//! Seeding through floating-point powers drifts from the exact integer
//! sequence once Φ^n outgrows `f64` precision (around index 70); runs that
//! far out keep the closed-form values.

use crate::constants::{PHI, PSI, SQRT_5};
use crate::numeric::round_to_i64;

/// Binet's formula at `index`, rounded to the nearest integer.
fn binet(index: i32) -> i64 {
    round_to_i64((PHI.powi(index) - PSI.powi(index)) / *SQRT_5)
}

/// Produces `length` consecutive recurrence values beginning at `start`.
///
/// The recurrence is seeded at `start − 2` and `start − 1`, so the first
/// emitted term is the sequence value at `start` itself. A `start` of zero
/// uses the fixed seed pair `(-1, 1)` preceding the canonical
/// `0, 1, 1, 2, 3, 5, …` run. Negative `start` yields the negafibonacci
/// values.
///
/// Non-positive `length` is coerced to one; the result is never empty. Term
/// addition wraps on `i64` overflow, keeping the function total at extreme
/// magnitudes.
///
/// # Examples
///
/// ```
/// use simmath::fibonacci::sequence;
/// assert_eq!(sequence(0, 5), vec![0, 1, 1, 2, 3]);
/// assert_eq!(sequence(6, 3), vec![8, 13, 21]);
/// assert_eq!(sequence(10, 0), vec![55]);
/// ```
#[expect(
    clippy::cast_sign_loss,
    reason = "The length is coerced to at least one before the cast."
)]
#[must_use]
pub fn sequence(start: i32, length: i32) -> Vec<i64> {
    let (mut a, mut b) = if start == 0 {
        (-1, 1)
    } else {
        (
            binet(start.saturating_sub(2)),
            binet(start.saturating_sub(1)),
        )
    };

    let count = length.max(1) as usize;
    let mut terms = Vec::with_capacity(count);
    for _ in 0..count {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
        terms.push(b);
    }
    terms
}
