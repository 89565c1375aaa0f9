//! Positional configuration records and their parser.
//!
//! A config file is an ordered sequence of whitespace-separated scalar
//! fields, read positionally with no keys. Every field that is missing
//! or fails to parse falls back to its documented default, and the
//! substitution is reported back to the caller instead of happening
//! silently.

use std::fmt;
use std::path::Path;

use hs_physio::Sex;
use tracing::warn;

/// Parameters of a sweep run, in config-file order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub mass_kg: f64,
    pub height_cm: f64,
    pub age_yr: f64,
    pub reflectivity: f64,
    pub dry_bulb_c: f64,
    pub wet_bulb_low_c: f64,
    pub wet_bulb_high_c: f64,
    pub wind_mps: f64,
    /// Metabolic heat in watts; exactly 0 means "compute the basal
    /// rate from the body parameters".
    pub metabolic_override_w: f64,
    pub sex: Sex,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            mass_kg: 80.0,
            height_cm: 185.0,
            age_yr: 25.0,
            reflectivity: 0.50,
            dry_bulb_c: 30.0,
            wet_bulb_low_c: 22.0,
            wet_bulb_high_c: 35.0,
            wind_mps: 5.0,
            metabolic_override_w: 0.0,
            sex: Sex::Male,
        }
    }
}

impl SweepConfig {
    /// Parse config text, one token per field. Returns the config and
    /// one record per field that fell back to its default.
    pub fn parse(text: &str) -> (Self, Vec<FieldFallback>) {
        let defaults = Self::default();
        let mut parser = FieldParser::new(text);
        let config = Self {
            mass_kg: parser.number("mass", defaults.mass_kg),
            height_cm: parser.number("height", defaults.height_cm),
            age_yr: parser.number("age", defaults.age_yr),
            reflectivity: parser.number("reflectivity", defaults.reflectivity),
            dry_bulb_c: parser.number("dryTemp", defaults.dry_bulb_c),
            wet_bulb_low_c: parser.number("wetBulbLow", defaults.wet_bulb_low_c),
            wet_bulb_high_c: parser.number("wetBulbHigh", defaults.wet_bulb_high_c),
            wind_mps: parser.number("windSpeed", defaults.wind_mps),
            metabolic_override_w: parser.number("metabolicOverride", defaults.metabolic_override_w),
            sex: parser.sex("sex", defaults.sex),
        };
        (config, parser.fallbacks)
    }

    /// Read and parse the file at `path`. An unreadable file yields the
    /// full defaults, which is reported but not fatal.
    pub fn load(path: &Path) -> (Self, Vec<FieldFallback>) {
        load_or_default(path, Self::parse)
    }
}

/// Parameters of a time-series run: a single wet-bulb value instead of
/// the low/high sweep bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig {
    pub mass_kg: f64,
    pub height_cm: f64,
    pub age_yr: f64,
    pub reflectivity: f64,
    pub dry_bulb_c: f64,
    pub wet_bulb_c: f64,
    pub wind_mps: f64,
    /// Metabolic heat in watts; exactly 0 means "compute the basal
    /// rate from the body parameters".
    pub metabolic_override_w: f64,
    pub sex: Sex,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            mass_kg: 80.0,
            height_cm: 185.0,
            age_yr: 25.0,
            reflectivity: 0.50,
            dry_bulb_c: 30.0,
            wet_bulb_c: 35.0,
            wind_mps: 5.0,
            metabolic_override_w: 0.0,
            sex: Sex::Male,
        }
    }
}

impl SeriesConfig {
    /// Parse config text, one token per field. Returns the config and
    /// one record per field that fell back to its default.
    pub fn parse(text: &str) -> (Self, Vec<FieldFallback>) {
        let defaults = Self::default();
        let mut parser = FieldParser::new(text);
        let config = Self {
            mass_kg: parser.number("mass", defaults.mass_kg),
            height_cm: parser.number("height", defaults.height_cm),
            age_yr: parser.number("age", defaults.age_yr),
            reflectivity: parser.number("reflectivity", defaults.reflectivity),
            dry_bulb_c: parser.number("dryTemp", defaults.dry_bulb_c),
            wet_bulb_c: parser.number("wetBulb", defaults.wet_bulb_c),
            wind_mps: parser.number("windSpeed", defaults.wind_mps),
            metabolic_override_w: parser.number("metabolicOverride", defaults.metabolic_override_w),
            sex: parser.sex("sex", defaults.sex),
        };
        (config, parser.fallbacks)
    }

    /// Read and parse the file at `path`. An unreadable file yields the
    /// full defaults, which is reported but not fatal.
    pub fn load(path: &Path) -> (Self, Vec<FieldFallback>) {
        load_or_default(path, Self::parse)
    }
}

fn load_or_default<C>(
    path: &Path,
    parse: fn(&str) -> (C, Vec<FieldFallback>),
) -> (C, Vec<FieldFallback>)
where
    C: Default,
{
    match std::fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(err) => {
            warn!(
                "cannot read config file {}: {err}; using defaults",
                path.display()
            );
            (C::default(), Vec::new())
        }
    }
}

/// One configuration field that fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFallback {
    /// Positional field name
    pub field: &'static str,
    /// The offending token, or `None` when the field was missing
    pub token: Option<String>,
    /// The substituted default, rendered as config-file text
    pub default: String,
}

impl fmt::Display for FieldFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(
                f,
                "config field {} could not be parsed from {token:?}, using {}",
                self.field, self.default
            ),
            None => write!(f, "config field {} missing, using {}", self.field, self.default),
        }
    }
}

/// Positional token consumer shared by the two config records.
struct FieldParser<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    fallbacks: Vec<FieldFallback>,
}

impl<'a> FieldParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
            fallbacks: Vec::new(),
        }
    }

    fn number(&mut self, field: &'static str, default: f64) -> f64 {
        let token = self.tokens.next();
        if let Some(token) = token {
            if let Ok(value) = token.parse::<f64>() {
                if value.is_finite() {
                    return value;
                }
            }
        }
        self.fallbacks.push(FieldFallback {
            field,
            token: token.map(str::to_string),
            default: default.to_string(),
        });
        default
    }

    fn sex(&mut self, field: &'static str, default: Sex) -> Sex {
        let token = self.tokens.next();
        match token.and_then(|t| t.chars().next()).map(|c| c.to_ascii_lowercase()) {
            Some('m') => Sex::Male,
            Some('f') => Sex::Female,
            _ => {
                self.fallbacks.push(FieldFallback {
                    field,
                    token: token.map(str::to_string),
                    default: match default {
                        Sex::Male => "m".to_string(),
                        Sex::Female => "f".to_string(),
                    },
                });
                default
            }
        }
    }
}
