//! Wet-bulb temperature sweep generation.
//!
//! A sweep walks the wet-bulb temperature from a low bound to a high bound
//! at a fixed increment, one integration run per value.

use crate::error::{PhysioError, PhysioResult};
use std::fmt;

/// Fixed wet-bulb increment between conditions [C].
pub const WET_BULB_STEP_C: f64 = 0.02;
/// Margin added to the upper bound so it stays inclusive under
/// floating-point accumulation [C].
pub const INCLUSIVE_MARGIN_C: f64 = 0.001;

/// Definition of a wet-bulb sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbSweep {
    /// First wet-bulb value [C].
    pub start_c: f64,
    /// Upper bound [C], inclusive within [`INCLUSIVE_MARGIN_C`].
    pub end_c: f64,
}

impl WetBulbSweep {
    /// Create a sweep over `[start_c, end_c]`.
    pub fn new(start_c: f64, end_c: f64) -> PhysioResult<Self> {
        if !start_c.is_finite() || !end_c.is_finite() {
            return Err(PhysioError::InvalidArg {
                what: "sweep bounds must be finite",
            });
        }
        Ok(Self { start_c, end_c })
    }

    /// Generate all wet-bulb values in the sweep.
    ///
    /// Values come from repeated addition of the increment, so late points
    /// carry the accumulated floating-point error; the inclusive margin on
    /// the upper bound absorbs it. An inverted range yields no values.
    pub fn values(&self) -> Vec<f64> {
        let mut points = Vec::new();
        let mut value = self.start_c;
        while value < self.end_c + INCLUSIVE_MARGIN_C {
            points.push(value);
            value += WET_BULB_STEP_C;
        }
        points
    }
}

impl fmt::Display for WetBulbSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wet-bulb sweep from {} C to {} C (step {} C)",
            self.start_c, self.end_c, WET_BULB_STEP_C
        )
    }
}
