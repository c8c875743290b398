//! Analysis configuration. The defaults describe a NACA 2412 section with a 100 unit chord, two
//! spars at 20% and 65% of the chord and eighteen stringers.

use crate::airfoil::{NacaDesignation, Sampling};
use crate::errors::{ConfigError, SectionError, SectionResult};
use crate::evaluator::SpanwiseLoads;
use crate::structure::StringerCounts;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Chords shorter than this are lengthened to it
pub const MIN_CHORD: f64 = 10.0;

/// Longest accepted chord. Dense sampling takes about 3.25 stations per unit of chord, so this
/// keeps a section to a few thousand points.
pub const MAX_CHORD: f64 = 1000.0;

/// Validates a chord length, raising it to [`MIN_CHORD`] when it is shorter
pub fn checked_chord(chord: f64) -> SectionResult<f64> {
    if !chord.is_finite() || chord <= 0.0 || chord > MAX_CHORD {
        return Err(SectionError::InvalidChord(chord));
    }

    if chord < MIN_CHORD {
        warn!("Chord {} is below the minimum, using {}", chord, MIN_CHORD);
        Ok(MIN_CHORD)
    } else {
        Ok(chord)
    }
}

/// The fixed dimensions of the wing which every component of the section is built against
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionDimensions {
    pub chord: f64,
    pub semi_span: usize,
}

impl SectionDimensions {
    pub fn new(chord: f64, semi_span: usize) -> SectionResult<SectionDimensions> {
        Ok(SectionDimensions {
            chord: checked_chord(chord)?,
            semi_span,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparConfig {
    /// Chordwise fractions of each spar, from the leading edge aft
    pub fractions: Vec<f64>,
    pub cap_area: f64,
    pub unit_mass: f64,
    pub web_thickness: f64,
}

impl Default for SparConfig {
    fn default() -> Self {
        Self {
            fractions: vec![0.20, 0.65],
            cap_area: 0.3,
            unit_mass: 10.0,
            web_thickness: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringerConfig {
    pub upper_nose: usize,
    pub upper_mid: usize,
    pub lower_nose: usize,
    pub lower_mid: usize,
    pub area: f64,
    pub unit_mass: f64,
    pub skin_thickness: f64,
}

impl StringerConfig {
    pub fn counts(&self) -> StringerCounts {
        StringerCounts::new(self.upper_nose, self.upper_mid, self.lower_nose, self.lower_mid)
    }
}

impl Default for StringerConfig {
    fn default() -> Self {
        Self {
            upper_nose: 3,
            upper_mid: 6,
            lower_nose: 5,
            lower_mid: 4,
            area: 0.1,
            unit_mass: 5.0,
            skin_thickness: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub total_lift: f64,
    pub elliptical_root_lift: f64,
    pub base_drag: f64,
    /// Shear forces used for the bending load terms of the report
    pub shear_x: f64,
    pub shear_z: f64,
}

impl LoadConfig {
    pub fn spanwise(&self) -> SpanwiseLoads {
        SpanwiseLoads {
            total_lift: self.total_lift,
            elliptical_root_lift: self.elliptical_root_lift,
            base_drag: self.base_drag,
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            total_lift: 10.0,
            elliptical_root_lift: 15.0,
            base_drag: 10.0,
            shear_x: 1.0,
            shear_z: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub naca: NacaDesignation,
    pub chord: f64,
    pub semi_span: usize,
    /// Station layout along the chord. The dense default folds strongly cambered sections such
    /// as NACA 4412 at chord 100 forward of the leading edge, and building them then fails with
    /// `NonMonotonicSurface`; use `uniform` for those.
    pub sampling: Sampling,
    pub airfoil_mass: f64,
    pub spars: SparConfig,
    pub stringers: StringerConfig,
    pub loads: LoadConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            naca: NacaDesignation::default(),
            chord: 100.0,
            semi_span: 40,
            sampling: Sampling::default(),
            airfoil_mass: 10.0,
            spars: SparConfig::default(),
            stringers: StringerConfig::default(),
            loads: LoadConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values which serde cannot. Spar fractions and ordering are checked again when
    /// the spars are placed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.semi_span == 0 {
            return Err(ConfigError::ValidationError(
                "semi_span must be at least one station".to_string(),
            ));
        }

        if !self.chord.is_finite() || self.chord <= 0.0 || self.chord > MAX_CHORD {
            return Err(ConfigError::ValidationError(format!(
                "chord must be positive and at most {}, got {}",
                MAX_CHORD, self.chord
            )));
        }

        let non_negative = [
            ("airfoil_mass", self.airfoil_mass),
            ("spars.cap_area", self.spars.cap_area),
            ("spars.unit_mass", self.spars.unit_mass),
            ("spars.web_thickness", self.spars.web_thickness),
            ("stringers.area", self.stringers.area),
            ("stringers.unit_mass", self.stringers.unit_mass),
            ("stringers.skin_thickness", self.stringers.skin_thickness),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must not be negative, got {}",
                    field, value
                )));
            }
        }

        Ok(())
    }

    pub fn dimensions(&self) -> SectionResult<SectionDimensions> {
        SectionDimensions::new(self.chord, self.semi_span)
    }
}
