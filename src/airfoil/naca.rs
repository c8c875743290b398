use crate::errors::SectionError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A NACA 4-digit designation of the form MPTT, where M is the maximum camber in percent of the
/// chord, P is the location of the maximum camber in tenths of the chord, and TT is the maximum
/// thickness in percent of the chord. A NACA 2412 has 2% camber at 40% of the chord and is 12%
/// thick.
///
/// Integer designations are zero padded, so `12` is read as `0012`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NacaDesignation {
    camber: u8,
    location: u8,
    thickness: u8,
}

impl NacaDesignation {
    pub fn new(camber: u8, location: u8, thickness: u8) -> Result<Self, SectionError> {
        if camber > 9 || location > 9 || thickness > 99 {
            return Err(SectionError::InvalidDesignation(format!(
                "{}{}{}",
                camber, location, thickness
            )));
        }

        Ok(Self {
            camber,
            location,
            thickness,
        })
    }

    /// Maximum camber as a fraction of the chord, `m`
    pub fn max_camber(&self) -> f64 {
        self.camber as f64 / 100.0
    }

    /// Chordwise location of the maximum camber as a fraction of the chord, `p`
    pub fn camber_location(&self) -> f64 {
        self.location as f64 / 10.0
    }

    /// Maximum thickness as a fraction of the chord, `t`
    pub fn max_thickness(&self) -> f64 {
        self.thickness as f64 / 100.0
    }

    pub fn number(&self) -> u32 {
        self.camber as u32 * 1000 + self.location as u32 * 100 + self.thickness as u32
    }
}

impl Default for NacaDesignation {
    fn default() -> Self {
        Self {
            camber: 2,
            location: 4,
            thickness: 12,
        }
    }
}

impl TryFrom<u32> for NacaDesignation {
    type Error = SectionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > 9999 {
            return Err(SectionError::InvalidDesignation(value.to_string()));
        }

        NacaDesignation::new(
            (value / 1000) as u8,
            (value / 100 % 10) as u8,
            (value % 100) as u8,
        )
    }
}

impl From<NacaDesignation> for u32 {
    fn from(value: NacaDesignation) -> Self {
        value.number()
    }
}

impl FromStr for NacaDesignation {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let code = code
            .strip_prefix("NACA")
            .or_else(|| code.strip_prefix("naca"))
            .unwrap_or(code)
            .trim();

        let digits: Vec<u8> = code
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| SectionError::InvalidDesignation(s.to_string()))?;

        if digits.len() != 4 {
            return Err(SectionError::InvalidDesignation(s.to_string()));
        }

        NacaDesignation::new(digits[0], digits[1], digits[2] * 10 + digits[3])
    }
}

impl Display for NacaDesignation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case("2412", 0.02, 0.4, 0.12)]
    #[test_case("0012", 0.0, 0.0, 0.12)]
    #[test_case("NACA 4415", 0.04, 0.4, 0.15)]
    #[test_case("9999", 0.09, 0.9, 0.99)]
    fn test_parse_designation(s: &str, m: f64, p: f64, t: f64) {
        let naca: NacaDesignation = s.parse().unwrap();
        assert_relative_eq!(m, naca.max_camber(), epsilon = 1e-12);
        assert_relative_eq!(p, naca.camber_location(), epsilon = 1e-12);
        assert_relative_eq!(t, naca.max_thickness(), epsilon = 1e-12);
    }

    #[test_case("241")]
    #[test_case("24120")]
    #[test_case("24a2")]
    #[test_case("-412")]
    #[test_case("")]
    fn test_parse_invalid_designation(s: &str) {
        let result = s.parse::<NacaDesignation>();
        assert!(matches!(result, Err(SectionError::InvalidDesignation(_))));
    }

    #[test_case(2412, "2412")]
    #[test_case(12, "0012")]
    #[test_case(0, "0000")]
    fn test_from_integer(value: u32, e: &str) {
        let naca = NacaDesignation::try_from(value).unwrap();
        assert_eq!(e, naca.to_string());
        assert_eq!(value, u32::from(naca));
    }

    #[test]
    fn test_integer_out_of_range() {
        assert!(NacaDesignation::try_from(12345).is_err());
    }

    #[test]
    fn test_serde_as_integer() {
        let naca: NacaDesignation = serde_json::from_str("4412").unwrap();
        assert_eq!(naca, NacaDesignation::new(4, 4, 12).unwrap());
        assert_eq!("4412", serde_json::to_string(&naca).unwrap());
        assert!(serde_json::from_str::<NacaDesignation>("10000").is_err());
    }
}
