//! Psychrometric curves: saturation and ambient vapor pressure.

use crate::constants::*;

/// Saturation vapor pressure at a temperature in degrees C, in kPa
/// (Tetens curve).
pub fn saturation_vapor_pressure_kpa(temp_c: f64) -> f64 {
    TETENS_SCALE_KPA * ((TETENS_EXP_COEFF * temp_c) / (TETENS_EXP_OFFSET_C + temp_c)).exp()
}

/// Ambient vapor pressure (partial pressure of water) in kPa, from the
/// dry-bulb and wet-bulb temperatures in degrees C.
///
/// Saturation at the wet-bulb temperature minus the psychrometer
/// correction at standard barometric pressure.
pub fn vapor_pressure_kpa(dry_c: f64, wet_c: f64) -> f64 {
    let saturation_wet = saturation_vapor_pressure_kpa(wet_c);
    saturation_wet
        - PSYCHROMETER_COEFF
            * (1.0 + PSYCHROMETER_WETBULB_COEFF * wet_c)
            * (dry_c - wet_c)
            * STANDARD_PRESSURE_KPA
}
