//! Scalar helpers shared by the correlation and integration crates.

use crate::{HsError, HsResult};

/// Floating-point type for temperatures, fluxes and coefficients.
pub type Real = f64;

/// Absolute and relative slack for comparing computed scalars.
///
/// The defaults absorb float rounding only; physical tolerances such
/// as the equilibrium flux cutoff live with the code that owns them.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol` on either scale.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass a finite value through, or fail naming the quantity.
pub fn ensure_finite(value: Real, what: &'static str) -> HsResult<Real> {
    if !value.is_finite() {
        return Err(HsError::NonFinite { what, value });
    }
    Ok(value)
}
