//! Numeric constants surfaced to calling scripts.
//!
//! The golden-ratio family is derived from √5 exactly once per process and
//! shared read-only by every Fibonacci computation. The circle constants are
//! plain compile-time values. Doubled and halved variants exist because
//! script runtimes charge for arithmetic on constants, so the common
//! multiples are precomputed host-side.

use once_cell::sync::Lazy;

/// √5, the radical underlying the golden-ratio family.
pub static SQRT_5: Lazy<f64> = Lazy::new(|| 5.0_f64.sqrt());

/// The golden ratio Φ = (1 + √5) / 2.
///
/// Handy for procedural plant growth and phyllotaxis layouts, and the base of
/// the closed-form Fibonacci evaluation in [`crate::fibonacci`].
pub static PHI: Lazy<f64> = Lazy::new(|| (1.0 + *SQRT_5) / 2.0);

/// Ψ = −1/Φ, the conjugate root of Φ's defining quadratic.
pub static PSI: Lazy<f64> = Lazy::new(|| -1.0 / *PHI);

/// Φ doubled.
pub static TWO_PHI: Lazy<f64> = Lazy::new(|| *PHI * 2.0);

/// Φ halved.
pub static PHI_BY_TWO: Lazy<f64> = Lazy::new(|| *PHI / 2.0);

/// τ, the ratio of a circle's circumference to its radius.
pub const TAU: f64 = std::f64::consts::TAU;

/// τ doubled.
pub const TWO_TAU: f64 = TAU * 2.0;

/// τ halved, better known as π.
pub const TAU_BY_TWO: f64 = std::f64::consts::PI;
