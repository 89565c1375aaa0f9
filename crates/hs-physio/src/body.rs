//! Body parameters and the quantities derived from them.

use crate::constants::*;
use crate::error::{PhysioError, PhysioResult};
use hs_core::units::{Area, Length, Mass, Power, m2, watts};
use uom::si::length::centimeter;
use uom::si::mass::kilogram;

/// Biological sex, used by the metabolic-rate estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Body surface area via the Mosteller formula, as recommended by
/// Verbraecken et al.
///
/// Arguments: mass in kg, height in cm. Returns m^2.
pub fn surface_area_m2(mass_kg: f64, height_cm: f64) -> f64 {
    (mass_kg * height_cm / MOSTELLER_NORMALIZATION).sqrt()
}

/// Body surface area via the DuBois & DuBois formula. Retained for
/// comparison; the model itself uses Mosteller.
///
/// Arguments: mass in kg, height in cm. Returns m^2.
pub fn surface_area_dubois_m2(mass_kg: f64, height_cm: f64) -> f64 {
    DUBOIS_SCALE * mass_kg.powf(DUBOIS_MASS_EXP) * height_cm.powf(DUBOIS_HEIGHT_EXP)
}

/// Resting energy expenditure (basal metabolic rate) in watts.
///
/// Linear estimate in mass (kg), height (cm) and age (years) with a
/// sex-dependent offset.
pub fn basal_metabolic_rate_w(mass_kg: f64, height_cm: f64, age_yr: f64, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => METABOLIC_MALE_OFFSET,
        Sex::Female => METABOLIC_FEMALE_OFFSET,
    };
    METABOLIC_SCALE
        * (METABOLIC_MASS_COEFF * mass_kg + METABOLIC_HEIGHT_COEFF * height_cm
            - METABOLIC_AGE_COEFF * age_yr
            + offset)
}

/// Subject description, immutable for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Body mass
    pub mass: Mass,
    /// Standing height
    pub height: Length,
    /// Age in years
    pub age_yr: f64,
    /// Biological sex
    pub sex: Sex,
    /// Skin reflectivity, in [0, 1]
    pub reflectivity: f64,
}

impl Body {
    /// Create a new body description, rejecting non-physical parameters.
    pub fn new(
        mass: Mass,
        height: Length,
        age_yr: f64,
        sex: Sex,
        reflectivity: f64,
    ) -> PhysioResult<Self> {
        let mass_kg = mass.get::<kilogram>();
        if !mass_kg.is_finite() || mass_kg <= 0.0 {
            return Err(PhysioError::NonPhysical { what: "body mass" });
        }
        let height_cm = height.get::<centimeter>();
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(PhysioError::NonPhysical {
                what: "body height",
            });
        }
        if !age_yr.is_finite() || age_yr < 0.0 {
            return Err(PhysioError::NonPhysical { what: "age" });
        }
        if !reflectivity.is_finite() || !(0.0..=1.0).contains(&reflectivity) {
            return Err(PhysioError::InvalidArg {
                what: "reflectivity must lie in [0, 1]",
            });
        }
        Ok(Self {
            mass,
            height,
            age_yr,
            sex,
            reflectivity,
        })
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass.get::<kilogram>()
    }

    pub fn height_cm(&self) -> f64 {
        self.height.get::<centimeter>()
    }

    /// Total body surface area (Mosteller), fixed once computed.
    pub fn surface_area(&self) -> Area {
        m2(surface_area_m2(self.mass_kg(), self.height_cm()))
    }

    /// Basal metabolic rate from the body parameters alone.
    pub fn basal_metabolic_rate(&self) -> Power {
        watts(basal_metabolic_rate_w(
            self.mass_kg(),
            self.height_cm(),
            self.age_yr,
            self.sex,
        ))
    }
}
