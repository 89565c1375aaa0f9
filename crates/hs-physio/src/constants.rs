//! Physical and empirical constants for the heat-exchange correlations.
//!
//! Every coefficient used by the correlations lives here under a name; the
//! correlation functions never embed bare magic numbers.

// Metabolic rate (Mifflin-style linear estimate)

/// Conversion of the metabolic linear form from kcal/day to watts [-].
pub const METABOLIC_SCALE: f64 = 0.0484;
/// Mass coefficient of the metabolic estimate [kcal/(day*kg)].
pub const METABOLIC_MASS_COEFF: f64 = 10.0;
/// Height coefficient of the metabolic estimate [kcal/(day*cm)].
pub const METABOLIC_HEIGHT_COEFF: f64 = 6.2;
/// Age coefficient of the metabolic estimate [kcal/(day*yr)].
pub const METABOLIC_AGE_COEFF: f64 = 5.0;
/// Additive offset for males [kcal/day].
pub const METABOLIC_MALE_OFFSET: f64 = 5.0;
/// Additive offset for females [kcal/day].
pub const METABOLIC_FEMALE_OFFSET: f64 = -161.0;

// Body surface area

/// Mosteller normalization divisor [kg*cm/m^4].
pub const MOSTELLER_NORMALIZATION: f64 = 3600.0;
/// DuBois & DuBois scale factor [-].
pub const DUBOIS_SCALE: f64 = 0.007184;
/// DuBois & DuBois mass exponent [-].
pub const DUBOIS_MASS_EXP: f64 = 0.425;
/// DuBois & DuBois height exponent [-].
pub const DUBOIS_HEIGHT_EXP: f64 = 0.725;

// Psychrometrics (Tetens saturation curve and wet-bulb correction)

/// Saturation vapor pressure at 0 degrees C [kPa].
pub const TETENS_SCALE_KPA: f64 = 6.108;
/// Tetens exponent numerator coefficient [-].
pub const TETENS_EXP_COEFF: f64 = 17.27;
/// Tetens exponent denominator offset [C].
pub const TETENS_EXP_OFFSET_C: f64 = 237.3;
/// Psychrometer coefficient [1/C].
pub const PSYCHROMETER_COEFF: f64 = 0.00066;
/// Wet-bulb sensitivity of the psychrometer coefficient [1/C].
pub const PSYCHROMETER_WETBULB_COEFF: f64 = 0.00115;
/// Standard barometric pressure [kPa].
pub const STANDARD_PRESSURE_KPA: f64 = 101.3;

// Skin-surface heat exchange

/// Kerslake convective coefficient [W/(C*(m/s)^0.5)].
pub const KERSLAKE_CONVECTIVE_COEFF: f64 = 8.3;
/// Kerslake evaporative coefficient [W/(kPa*(m/s)^0.5)].
pub const KERSLAKE_EVAPORATIVE_COEFF: f64 = 12.4;
/// Wheeler bulk convective coefficient [W/(m^2*C*(m/s)^0.5)].
pub const WHEELER_CONVECTIVE_COEFF: f64 = 8.0;
/// Sherwood & Huber heat-transfer coefficient [W*s/(m*C)].
pub const SHERWOOD_COEFF: f64 = 12.5;
/// Stefan-Boltzmann constant [W/(m^2*K^4)].
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;
/// Solar irradiance applied to the body [W/m^2]. Zero: no solar loading
/// in the current model.
pub const SOLAR_IRRADIANCE_W_PER_M2: f64 = 0.0;
/// Fraction of body surface area presented to direct sunlight [-].
pub const SOLAR_CROSS_SECTION_FACTOR: f64 = 0.25;
/// Latent heat of sweat evaporation [kJ/L].
pub const SWEAT_LATENT_HEAT_KJ_PER_L: f64 = 2416.0;
/// Ventilation mass-transfer coefficient of the sweat evaporation
/// correlation [1/(m/s)].
pub const SWEAT_VENTILATION_COEFF: f64 = 0.00277;
/// Molar mass ratio of water vapor to dry air [-].
pub const VAPOR_AIR_MASS_RATIO: f64 = 0.662;

// Blood flow and the core/shell split

/// Overall blood-flow gain [-].
pub const BLOOD_FLOW_GAIN: f64 = 0.7;
/// Core-temperature slope of the blood-flow estimate [L/(h*m^2*C)].
pub const BLOOD_FLOW_CORE_SLOPE: f64 = 2.07;
/// Core-temperature offset of the blood-flow estimate [L/(h*m^2)].
pub const BLOOD_FLOW_CORE_OFFSET: f64 = 75.44;
/// Skin-temperature gain inside the saturating term [1/C].
pub const BLOOD_FLOW_SKIN_GAIN: f64 = 0.75;
/// Skin temperature at the midpoint of the saturating term [C].
pub const BLOOD_FLOW_SKIN_MIDPOINT_C: f64 = 34.7;
/// Scale of the saturating term, fitted with a truncated pi [-].
pub const BLOOD_FLOW_ATAN_SCALE: f64 = 100.0 / 3.14159;
/// Offset of the saturating term [-].
pub const BLOOD_FLOW_SKIN_OFFSET: f64 = 53.0;
/// Base shell fraction at large blood flow [-].
pub const SHELL_FRACTION_BASE: f64 = 0.044;
/// Blood-flow gain of the shell fraction [L/(h*m^2)].
pub const SHELL_FRACTION_GAIN: f64 = 0.35;
/// Blood flow at which the shell fraction diverges [L/(h*m^2)].
pub const SHELL_FLOW_SINGULARITY: f64 = 0.1386;
/// Exponent converting a volume fraction to an area fraction [-].
pub const CORE_AREA_EXPONENT: f64 = 2.0 / 3.0;
/// Blood flow scale applied in the core-shell exchange term [-].
pub const BLOOD_FLOW_EXCHANGE_SCALE: f64 = 1e-6;
/// Density of blood [kg/m^3].
pub const BLOOD_DENSITY_KG_PER_M3: f64 = 1060.0;
/// Specific heat of blood [J/(kg*K)].
pub const BLOOD_SPECIFIC_HEAT_J_PER_KG_K: f64 = 3860.0;
/// Core-shell conductance of the fixed-flow comparison correlation
/// [W/(m^2*C)].
pub const FIXED_CORE_CONDUCTANCE: f64 = 10.0;

// Sweating

/// Hoppe (1993) sweat-rate coefficient [kg/(s*m^2*C)].
pub const HOPPE_SWEAT_COEFF: f64 = 8.47e-4;
/// Weighted mean body temperature of thermal neutrality [C].
pub const SWEAT_NEUTRAL_BODY_C: f64 = 36.6;
/// Skin weight in the mean body temperature [-].
pub const SWEAT_SKIN_WEIGHT: f64 = 0.1;
/// Core weight in the mean body temperature [-].
pub const SWEAT_CORE_WEIGHT: f64 = 0.9;
