//! Elementwise vector arithmetic exposed to scripts.
//!
//! The scripting environments this crate serves lack syntax for elementwise
//! vector products, quotients and rounding, so those operations are provided
//! here as pure functions over [`DVec3`]. Every operation is total: division
//! sanitizes unrepresentable axes instead of failing, and the rest follow
//! ordinary floating-point arithmetic.

use glam::DVec3;

use crate::numeric::zero_if_nonfinite;

/// Multiplies two vectors elementwise.
///
/// # Examples
///
/// ```
/// use glam::DVec3;
/// use simmath::vector_math::multiply;
/// let product = multiply(DVec3::new(2.0, 3.0, 4.0), DVec3::new(0.5, 2.0, -1.0));
/// assert_eq!(product, DVec3::new(1.0, 6.0, -4.0));
/// ```
#[must_use]
pub fn multiply(a: DVec3, b: DVec3) -> DVec3 {
    a * b
}

/// Divides one vector by another elementwise, squashing unrepresentable axes
/// to zero.
///
/// A zero divisor axis (including `0.0 / 0.0`) would yield NaN or an
/// infinity. Callers have no way to express either value, so any such axis
/// becomes exactly `0.0`, independently of the other axes. Finite quotients
/// follow ordinary floating-point division.
///
/// # Examples
///
/// ```
/// use glam::DVec3;
/// use simmath::vector_math::divide;
/// let quotient = divide(DVec3::new(1.0, -2.0, 6.0), DVec3::new(0.0, 0.0, 3.0));
/// assert_eq!(quotient, DVec3::new(0.0, 0.0, 2.0));
/// ```
#[must_use]
pub fn divide(a: DVec3, b: DVec3) -> DVec3 {
    let raw = a / b;
    DVec3::new(
        zero_if_nonfinite(raw.x),
        zero_if_nonfinite(raw.y),
        zero_if_nonfinite(raw.z),
    )
}

/// Floors every axis.
#[must_use]
pub fn floor(a: DVec3) -> DVec3 {
    a.floor()
}

/// Rounds every axis to the nearest integer, ties to even.
///
/// Midpoints round to the even neighbour, so `1.5` and `2.5` both become
/// `2.0`. This differs from [`DVec3::round`], which rounds ties away from
/// zero.
///
/// # Examples
///
/// ```
/// use glam::DVec3;
/// use simmath::vector_math::round;
/// let rounded = round(DVec3::new(1.5, -1.5, 2.5));
/// assert_eq!(rounded, DVec3::new(2.0, -2.0, 2.0));
/// ```
#[must_use]
pub fn round(a: DVec3) -> DVec3 {
    DVec3::new(
        a.x.round_ties_even(),
        a.y.round_ties_even(),
        a.z.round_ties_even(),
    )
}

/// Ceils every axis.
#[must_use]
pub fn ceil(a: DVec3) -> DVec3 {
    a.ceil()
}

/// Caps every axis at `bound`.
///
/// No axis of the result exceeds `bound`; axes already at or below it pass
/// through unchanged.
///
/// # Examples
///
/// ```
/// use glam::DVec3;
/// use simmath::vector_math::component_min;
/// let capped = component_min(DVec3::new(5.0, -5.0, 0.0), 3.0);
/// assert_eq!(capped, DVec3::new(3.0, -5.0, 0.0));
/// ```
#[must_use]
pub fn component_min(a: DVec3, bound: f64) -> DVec3 {
    a.min(DVec3::splat(bound))
}

/// Raises every axis to at least `bound`.
///
/// # Examples
///
/// ```
/// use glam::DVec3;
/// use simmath::vector_math::component_max;
/// let raised = component_max(DVec3::new(5.0, -5.0, 0.0), 3.0);
/// assert_eq!(raised, DVec3::new(5.0, 3.0, 3.0));
/// ```
#[must_use]
pub fn component_max(a: DVec3, bound: f64) -> DVec3 {
    a.max(DVec3::splat(bound))
}

/// Returns the volume of the box whose dimensions are the vector's axes.
///
/// Components are taken as given; negative or zero dimensions produce a
/// signed or zero volume.
///
/// # Examples
///
/// ```
/// use glam::DVec3;
/// use simmath::vector_math::volume;
/// assert_eq!(volume(DVec3::new(2.0, 3.0, 4.0)), 24.0);
/// ```
#[must_use]
pub fn volume(a: DVec3) -> f64 {
    a.element_product()
}
