//! Ambient conditions seen by the body.

use crate::error::{PhysioError, PhysioResult};
use hs_core::units::{Temperature, Velocity, celsius};
use uom::si::thermodynamic_temperature::degree_celsius;
use uom::si::velocity::meter_per_second;

/// Environmental conditions, immutable per integration run.
///
/// Humidity enters through the wet-bulb temperature. The wet-bulb value is
/// allowed to exceed the dry-bulb value: sweep runs deliberately cross it
/// to drive the evaporation term through zero and negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Ambient (dry-bulb) temperature
    pub dry_bulb: Temperature,
    /// Wet-bulb temperature
    pub wet_bulb: Temperature,
    /// Wind speed
    pub wind: Velocity,
}

impl Environment {
    /// Create a new set of conditions, rejecting non-physical values.
    pub fn new(dry_bulb: Temperature, wet_bulb: Temperature, wind: Velocity) -> PhysioResult<Self> {
        let env = Self {
            dry_bulb,
            wet_bulb,
            wind,
        };
        if !env.dry_bulb_c().is_finite() {
            return Err(PhysioError::NonPhysical {
                what: "dry-bulb temperature",
            });
        }
        if !env.wet_bulb_c().is_finite() {
            return Err(PhysioError::NonPhysical {
                what: "wet-bulb temperature",
            });
        }
        let wind_mps = env.wind_mps();
        if !wind_mps.is_finite() || wind_mps < 0.0 {
            return Err(PhysioError::NonPhysical { what: "wind speed" });
        }
        Ok(env)
    }

    pub fn dry_bulb_c(&self) -> f64 {
        self.dry_bulb.get::<degree_celsius>()
    }

    pub fn wet_bulb_c(&self) -> f64 {
        self.wet_bulb.get::<degree_celsius>()
    }

    pub fn wind_mps(&self) -> f64 {
        self.wind.get::<meter_per_second>()
    }

    /// Same conditions at a different wet-bulb temperature. Used by the
    /// sweep controller to step through the humidity grid.
    pub fn with_wet_bulb_c(&self, wet_bulb_c: f64) -> Self {
        Self {
            wet_bulb: celsius(wet_bulb_c),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::units::mps;

    #[test]
    fn accessors_round_trip() {
        let env = Environment::new(celsius(30.0), celsius(22.0), mps(5.0)).unwrap();
        assert!((env.dry_bulb_c() - 30.0).abs() < 1e-9);
        assert!((env.wet_bulb_c() - 22.0).abs() < 1e-9);
        assert!((env.wind_mps() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_negative_wind() {
        assert!(Environment::new(celsius(30.0), celsius(22.0), mps(-0.1)).is_err());
    }

    #[test]
    fn wet_bulb_above_dry_bulb_is_allowed() {
        assert!(Environment::new(celsius(30.0), celsius(35.0), mps(5.0)).is_ok());
    }

    #[test]
    fn with_wet_bulb_replaces_only_wet_bulb() {
        let env = Environment::new(celsius(30.0), celsius(22.0), mps(5.0)).unwrap();
        let stepped = env.with_wet_bulb_c(24.5);
        assert!((stepped.wet_bulb_c() - 24.5).abs() < 1e-9);
        assert!((stepped.dry_bulb_c() - 30.0).abs() < 1e-9);
        assert!((stepped.wind_mps() - 5.0).abs() < 1e-9);
    }
}
