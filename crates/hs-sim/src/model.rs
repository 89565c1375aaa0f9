//! Two-node (core/shell) thermal model.

use crate::error::{SimError, SimResult};
use crate::state::{FluxSnapshot, STEP_SECONDS, ThermalState};
use hs_core::ensure_finite;
use hs_physio::exchange::{
    blackbody_flux_w, blood_flow_l_per_h_m2, convective_flux_w, core_shell_flux_w,
    evaporative_flux_w, shell_fraction_checked, solar_flux_w,
};
use hs_physio::{Body, Environment};
use uom::si::area::square_meter;
use uom::si::power::watt;

/// Specific-heat proxy of body tissue [J/(kg*K)].
pub const BODY_SPECIFIC_HEAT: f64 = 3874.0;
/// Latent heat of vaporization of sweat [J/L].
pub const LATENT_HEAT_J_PER_L: f64 = 2_416_000.0;

/// A body in an environment, reduced to the per-run scalars the step
/// function needs.
///
/// Construction resolves the metabolic rate once (an override of exactly
/// 0 W means "compute from the body parameters") and caches the total
/// surface area; both stay fixed for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct TwoNodeModel {
    area_m2: f64,
    metabolic_w: f64,
    mass_kg: f64,
    reflectivity: f64,
    dry_c: f64,
    wet_c: f64,
    wind_mps: f64,
}

impl TwoNodeModel {
    /// Build a model for one run.
    pub fn new(body: &Body, env: &Environment, metabolic_override_w: f64) -> SimResult<Self> {
        if !metabolic_override_w.is_finite() || metabolic_override_w < 0.0 {
            return Err(SimError::InvalidArg {
                what: "metabolic override must be finite and non-negative",
            });
        }
        let metabolic_w = if metabolic_override_w == 0.0 {
            body.basal_metabolic_rate().get::<watt>()
        } else {
            metabolic_override_w
        };
        Ok(Self {
            area_m2: body.surface_area().get::<square_meter>(),
            metabolic_w,
            mass_kg: body.mass_kg(),
            reflectivity: body.reflectivity,
            dry_c: env.dry_bulb_c(),
            wet_c: env.wet_bulb_c(),
            wind_mps: env.wind_mps(),
        })
    }

    /// Resolved metabolic heat production [W].
    pub fn metabolic_w(&self) -> f64 {
        self.metabolic_w
    }

    /// Total body surface area [m^2].
    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    /// Advance the state by one step.
    ///
    /// Returns the fluxes computed during the step together with the new
    /// state; the caller owns the mutable loop. The skin update uses the
    /// shell fraction at the current temperatures, the core update the
    /// shell fraction at the already-updated skin temperature.
    pub fn step(&self, state: &ThermalState) -> SimResult<(FluxSnapshot, ThermalState)> {
        let convective_w = convective_flux_w(self.wind_mps, self.dry_c, state.skin_c);
        let evaporative_w =
            evaporative_flux_w(self.wind_mps, self.dry_c, state.skin_c, self.wet_c);
        let solar_w = solar_flux_w(self.area_m2, self.reflectivity);
        let radiant_w = blackbody_flux_w(self.area_m2, self.dry_c, state.skin_c);
        let core_shell_w = core_shell_flux_w(state.core_c, state.skin_c, self.area_m2)?;

        let skin_w =
            STEP_SECONDS * (convective_w + evaporative_w + solar_w + radiant_w + core_shell_w);
        let core_w = STEP_SECONDS * (self.metabolic_w - core_shell_w);

        let water_l = state.water_l - evaporative_w / LATENT_HEAT_J_PER_L;

        let shell_pre = shell_fraction_checked(blood_flow_l_per_h_m2(state.core_c, state.skin_c))?;
        let skin_c = ensure_finite(
            state.skin_c + skin_w / (BODY_SPECIFIC_HEAT * shell_pre * self.mass_kg),
            "updated skin temperature",
        )?;

        let shell_post = shell_fraction_checked(blood_flow_l_per_h_m2(state.core_c, skin_c))?;
        if shell_post >= 1.0 {
            return Err(SimError::NonPhysical {
                what: "shell fraction at or above one leaves no core capacity",
            });
        }
        let core_c = ensure_finite(
            state.core_c + core_w / (BODY_SPECIFIC_HEAT * (1.0 - shell_post) * self.mass_kg),
            "updated core temperature",
        )?;

        let fluxes = FluxSnapshot {
            convective_w,
            evaporative_w,
            metabolic_w: self.metabolic_w,
            solar_w,
            radiant_w,
            core_shell_w,
            skin_w,
            core_w,
        };
        let state = ThermalState {
            core_c,
            skin_c,
            water_l,
        };
        Ok((fluxes, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::units::{celsius, cm, kg, mps};
    use hs_physio::Sex;

    fn default_body() -> Body {
        Body::new(kg(80.0), cm(185.0), 25.0, Sex::Male, 0.5).unwrap()
    }

    fn temperate_env() -> Environment {
        Environment::new(celsius(30.0), celsius(22.0), mps(5.0)).unwrap()
    }

    #[test]
    fn metabolic_override_zero_computes_from_body() {
        let model = TwoNodeModel::new(&default_body(), &temperate_env(), 0.0).unwrap();
        assert!((model.metabolic_w() - 88.43).abs() < 0.01);
    }

    #[test]
    fn metabolic_override_nonzero_is_used_verbatim() {
        let model = TwoNodeModel::new(&default_body(), &temperate_env(), 150.0).unwrap();
        assert_eq!(model.metabolic_w(), 150.0);
    }

    #[test]
    fn negative_metabolic_override_rejected() {
        assert!(TwoNodeModel::new(&default_body(), &temperate_env(), -5.0).is_err());
        assert!(TwoNodeModel::new(&default_body(), &temperate_env(), f64::NAN).is_err());
    }

    #[test]
    fn first_step_cools_skin_in_temperate_conditions() {
        let model = TwoNodeModel::new(&default_body(), &temperate_env(), 0.0).unwrap();
        let initial = ThermalState::new(37.0, 35.0);
        let (fluxes, next) = model.step(&initial).unwrap();

        // Strong evaporative cooling at 22 C wet bulb dominates
        assert!(fluxes.evaporative_w < 0.0);
        assert!(fluxes.skin_w < 0.0);
        assert!(next.skin_c < initial.skin_c);
        // Evaporated sweat shows up as positive water demand
        assert!(next.water_l > 0.0);
        // Solar loading is switched off
        assert_eq!(fluxes.solar_w, 0.0);
    }

    #[test]
    fn step_conserves_sign_convention_between_compartments() {
        let model = TwoNodeModel::new(&default_body(), &temperate_env(), 0.0).unwrap();
        let (fluxes, _) = model.step(&ThermalState::new(37.0, 35.0)).unwrap();
        // Core hotter than skin: exchange flows core -> shell
        assert!(fluxes.core_shell_w > 0.0);
        // The exchange drains the core faster than metabolism refills it
        assert!(fluxes.core_w < 0.0);
    }

    #[test]
    fn step_fails_on_degenerate_blood_flow() {
        let model = TwoNodeModel::new(&default_body(), &temperate_env(), 0.0).unwrap();
        // Core cold enough that the linear blood-flow term goes negative
        let err = model.step(&ThermalState::new(36.0, 30.0)).unwrap_err();
        assert!(matches!(err, SimError::Physiology { .. }));
    }
}
