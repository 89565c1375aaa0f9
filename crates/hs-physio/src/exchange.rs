//! Heat-exchange correlations between the body and its surroundings, and
//! the blood-flow submodel coupling the core and shell compartments.
//!
//! All functions are pure and take plain `f64` quantities with the units
//! named in the argument (temperatures in degrees C, wind in m/s, areas in
//! m^2); fluxes are returned in watts. Positive core-shell flux means heat
//! flowing core -> shell.
//!
//! Some correlations were superseded during model development and are kept
//! for comparison (Wheeler convection, Sherwood & Huber sensible/latent,
//! Hoppe sweat rate, fixed-flow core conduction). They are not called by
//! the integrator.

use crate::constants::*;
use crate::error::{PhysioError, PhysioResult};
use crate::psychro::{saturation_vapor_pressure_kpa, vapor_pressure_kpa};
use hs_core::units::constants::CELSIUS_TO_KELVIN;

/// Kerslake convective heat gain of the skin from ambient air.
pub fn convective_flux_w(wind_mps: f64, dry_c: f64, skin_c: f64) -> f64 {
    KERSLAKE_CONVECTIVE_COEFF * wind_mps.sqrt() * (dry_c - skin_c)
}

/// Kerslake evaporative heat gain of the skin. Negative when the skin's
/// saturation pressure exceeds the ambient vapor pressure (sweat
/// evaporates and cools).
pub fn evaporative_flux_w(wind_mps: f64, dry_c: f64, skin_c: f64, wet_c: f64) -> f64 {
    KERSLAKE_EVAPORATIVE_COEFF
        * wind_mps.sqrt()
        * (vapor_pressure_kpa(dry_c, wet_c) - saturation_vapor_pressure_kpa(skin_c))
}

/// Solar heat gain over the sunlit cross-section of the body.
///
/// The irradiance constant is zero, so this always evaluates to 0; the
/// term is retained so solar loading stays a named part of the balance.
pub fn solar_flux_w(area_m2: f64, reflectivity: f64) -> f64 {
    SOLAR_IRRADIANCE_W_PER_M2 * SOLAR_CROSS_SECTION_FACTOR * area_m2 * (1.0 - reflectivity)
}

/// Net black-body exchange between a facing temperature and the skin,
/// positive when the facing side is hotter.
///
/// The area argument is accepted for symmetry with the other flux terms
/// but is not applied; the difference of fourth powers is returned as-is.
pub fn blackbody_flux_w(_area_m2: f64, facing_c: f64, skin_c: f64) -> f64 {
    STEFAN_BOLTZMANN
        * ((facing_c + CELSIUS_TO_KELVIN).powi(4) - (skin_c + CELSIUS_TO_KELVIN).powi(4))
}

/// Skin blood flow in L/(h*m^2): linear in core temperature, saturating
/// (arctangent) in skin temperature.
pub fn blood_flow_l_per_h_m2(core_c: f64, skin_c: f64) -> f64 {
    BLOOD_FLOW_GAIN
        * (BLOOD_FLOW_CORE_SLOPE * core_c - BLOOD_FLOW_CORE_OFFSET)
        * (BLOOD_FLOW_ATAN_SCALE
            * (BLOOD_FLOW_SKIN_GAIN * (skin_c - BLOOD_FLOW_SKIN_MIDPOINT_C)).atan()
            + BLOOD_FLOW_SKIN_OFFSET)
}

/// Ratio of shell volume to body volume as a function of blood flow.
///
/// Diverges as the blood flow falls to the singularity at 0.1386
/// L/(h*m^2); use [`shell_fraction_checked`] anywhere the flow is not
/// known to be safely above it.
pub fn shell_fraction(blood_flow: f64) -> f64 {
    SHELL_FRACTION_BASE + SHELL_FRACTION_GAIN / (blood_flow - SHELL_FLOW_SINGULARITY)
}

/// Shell fraction with the singularity classified as a domain error.
pub fn shell_fraction_checked(blood_flow: f64) -> PhysioResult<f64> {
    if !blood_flow.is_finite() || blood_flow <= SHELL_FLOW_SINGULARITY {
        return Err(PhysioError::DegenerateBloodFlow { flow: blood_flow });
    }
    Ok(shell_fraction(blood_flow))
}

/// Surface area of the core compartment implied by the shell fraction.
pub fn core_surface_area_m2(shell_fraction: f64, total_area_m2: f64) -> f64 {
    (1.0 - shell_fraction).powf(CORE_AREA_EXPONENT) * total_area_m2
}

/// Energy exchange between core and shell, positive core -> shell.
///
/// A blood-flow-scaled convective term over the core surface plus the
/// black-body term between the compartments. Fails when the blood flow
/// sits at or below the shell-fraction singularity.
pub fn core_shell_flux_w(core_c: f64, skin_c: f64, total_area_m2: f64) -> PhysioResult<f64> {
    let flow = blood_flow_l_per_h_m2(core_c, skin_c);
    let alpha = shell_fraction_checked(flow)?;
    let core_area = core_surface_area_m2(alpha, total_area_m2);
    let convective = core_area
        * flow
        * BLOOD_FLOW_EXCHANGE_SCALE
        * BLOOD_DENSITY_KG_PER_M3
        * BLOOD_SPECIFIC_HEAT_J_PER_KG_K
        * (core_c - skin_c);
    Ok(convective + blackbody_flux_w(core_area, core_c, skin_c))
}

/// Wheeler bulk convective heat loss of the skin to ambient air.
/// Comparison correlation; note the opposite sign convention to
/// [`convective_flux_w`].
pub fn convective_flux_bulk_w(area_m2: f64, skin_c: f64, ambient_c: f64, wind_mps: f64) -> f64 {
    area_m2 * WHEELER_CONVECTIVE_COEFF * (skin_c - ambient_c) * wind_mps.sqrt()
}

/// Heat lost through evaporation of sweat at an ambient air pressure, from
/// the ambient vapor pressure and the saturation pressure at the skin.
/// Comparison correlation.
pub fn sweat_evaporation_w(
    area_m2: f64,
    wind_mps: f64,
    vapor_kpa: f64,
    skin_saturation_kpa: f64,
    pressure_kpa: f64,
) -> f64 {
    area_m2
        * SWEAT_LATENT_HEAT_KJ_PER_L
        * SWEAT_VENTILATION_COEFF
        * wind_mps
        * VAPOR_AIR_MASS_RATIO
        * (vapor_kpa - skin_saturation_kpa)
        / pressure_kpa
}

/// Sherwood & Huber sensible heat gain of the skin. Comparison
/// correlation, linear in wind speed.
pub fn sensible_flux_sherwood_w(wind_mps: f64, dry_c: f64, skin_c: f64) -> f64 {
    SHERWOOD_COEFF * wind_mps * (dry_c - skin_c)
}

/// Sherwood & Huber latent heat term. Comparison correlation, linear in
/// wind speed.
pub fn latent_flux_sherwood_w(wind_mps: f64, dry_c: f64, wet_c: f64) -> f64 {
    SHERWOOD_COEFF * wind_mps * (wet_c - dry_c)
}

/// Hoppe (1993) sweat mass rate in kg/s, from the weighted mean body
/// temperature above thermal neutrality. Comparison correlation.
pub fn sweat_rate_kg_per_s(area_m2: f64, skin_c: f64, core_c: f64) -> f64 {
    area_m2
        * HOPPE_SWEAT_COEFF
        * ((SWEAT_SKIN_WEIGHT * skin_c + SWEAT_CORE_WEIGHT * core_c) - SWEAT_NEUTRAL_BODY_C)
}

/// Core-shell conduction at a fixed unit blood flow. Comparison
/// correlation.
pub fn core_shell_flux_fixed_w(core_c: f64, skin_c: f64, total_area_m2: f64) -> f64 {
    core_surface_area_m2(shell_fraction(1.0), total_area_m2)
        * FIXED_CORE_CONDUCTANCE
        * (core_c - skin_c)
}
