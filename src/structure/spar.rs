use crate::airfoil::{Airfoil, Surface};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::dist;
use crate::serialize::Point2f64;
use crate::structure::{Component, StructuralGroup, StructuralPoint, SurfaceCoordinates};
use log::debug;
use ncollide2d::na::Point2;
use serde::Serialize;
use std::io::Write;

/// A single spar, resolved onto the sampled airfoil surfaces
#[derive(Debug, Clone, Serialize)]
pub struct Spar {
    pub fraction: f64,
    pub upper_index: usize,
    pub lower_index: usize,
    #[serde(with = "Point2f64")]
    pub upper: Point2<f64>,
    #[serde(with = "Point2f64")]
    pub lower: Point2<f64>,
}

/// The web of a spar, spanning from its upper cap to its lower cap
#[derive(Debug, Clone, Serialize)]
pub struct SparWeb {
    #[serde(with = "Point2f64")]
    pub upper: Point2<f64>,
    #[serde(with = "Point2f64")]
    pub lower: Point2<f64>,
    pub thickness: f64,
}

impl SparWeb {
    pub fn height(&self) -> f64 {
        self.upper.y - self.lower.y
    }

    pub fn length(&self) -> f64 {
        dist(&self.upper, &self.lower)
    }

    pub fn area(&self) -> f64 {
        self.length() * self.thickness
    }
}

/// An ordered set of spars. Every spar shares the same cap area and unit mass.
#[derive(Debug, Clone, Default)]
pub struct SparSet {
    spars: Vec<Spar>,
    cap_area: f64,
    unit_mass: f64,
    web_thickness: Option<f64>,
}

impl SparSet {
    pub fn new() -> SparSet {
        SparSet::default()
    }

    /// Adds a spar at a fraction of the chord. Spars must be added from the leading edge aft, and
    /// each must land on surface samples not already used by the previous spar.
    pub fn add_spar(&mut self, airfoil: &Airfoil, fraction: f64) -> SectionResult<&Spar> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(SectionError::InvalidFraction(fraction));
        }

        if let Some(previous) = self.spars.last() {
            if fraction <= previous.fraction {
                return Err(SectionError::UnorderedSpars {
                    previous: previous.fraction,
                    fraction,
                });
            }
        }

        let x = fraction * airfoil.chord();
        let (upper_index, upper) = airfoil.snap(Surface::Upper, x);
        let (lower_index, lower) = airfoil.snap(Surface::Lower, x);

        if let Some(previous) = self.spars.last() {
            if previous.upper_index == upper_index {
                return Err(SectionError::CoincidentSpars {
                    fraction,
                    index: upper_index,
                });
            }
            if previous.lower_index == lower_index {
                return Err(SectionError::CoincidentSpars {
                    fraction,
                    index: lower_index,
                });
            }
        }

        debug!(
            "Spar at {} of chord snapped to upper {:?} and lower {:?}",
            fraction, upper, lower
        );

        self.spars.push(Spar {
            fraction,
            upper_index,
            lower_index,
            upper,
            lower,
        });

        Ok(&self.spars[self.spars.len() - 1])
    }

    /// Sets the cap area shared by all spars, including those added later
    pub fn add_caps(&mut self, area: f64) {
        self.cap_area = area;
    }

    /// Sets the mass of a single spar, the set's mass is this multiplied by the spar count
    pub fn add_mass(&mut self, unit_mass: f64) {
        self.unit_mass = unit_mass;
    }

    pub fn add_webs(&mut self, thickness: f64) {
        self.web_thickness = Some(thickness);
    }

    pub fn spars(&self) -> &[Spar] {
        &self.spars
    }

    pub fn len(&self) -> usize {
        self.spars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spars.is_empty()
    }

    pub fn first(&self) -> Option<&Spar> {
        self.spars.first()
    }

    pub fn last(&self) -> Option<&Spar> {
        self.spars.last()
    }

    pub fn cap_area(&self) -> f64 {
        self.cap_area
    }

    pub fn web_thickness(&self) -> Option<f64> {
        self.web_thickness
    }

    pub fn total_mass(&self) -> f64 {
        self.spars.len() as f64 * self.unit_mass
    }

    /// The web of every spar, empty until a web thickness has been set
    pub fn webs(&self) -> Vec<SparWeb> {
        match self.web_thickness {
            Some(thickness) => self
                .spars
                .iter()
                .map(|s| SparWeb {
                    upper: s.upper,
                    lower: s.lower,
                    thickness,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Upper and lower cap of every spar, in insertion order
    pub fn cap_points(&self) -> Vec<StructuralPoint> {
        self.spars
            .iter()
            .flat_map(|s| {
                let cap = |point, surface| {
                    StructuralPoint::new(point, self.cap_area, StructuralGroup::SparCaps, surface)
                };
                [cap(s.upper, Surface::Upper), cap(s.lower, Surface::Lower)]
            })
            .collect()
    }
}

impl Component for SparSet {
    fn name(&self) -> &'static str {
        "spar"
    }

    fn coordinates(&self) -> SurfaceCoordinates {
        SurfaceCoordinates::new(
            self.spars.iter().map(|s| s.upper).collect(),
            self.spars.iter().map(|s| s.lower).collect(),
        )
    }

    fn mass(&self) -> f64 {
        self.total_mass()
    }

    fn describe(&self, writer: &mut dyn Write, precision: usize) -> std::io::Result<()> {
        writeln!(writer, "Spar cap area: {:.*}", precision, self.cap_area)?;
        if let Some(thickness) = self.web_thickness {
            writeln!(writer, "Spar web thickness: {:.*}", precision, thickness)?;
        }
        self.coordinates().describe(writer, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::{Naca4Digit, Sampling};
    use approx::assert_relative_eq;
    use ncollide2d::math::Isometry;
    use ncollide2d::query::PointQuery;
    use test_case::test_case;

    fn naca_2412() -> Airfoil {
        Naca4Digit::new("2412".parse().unwrap(), 100.0)
            .unwrap()
            .generate(Sampling::DenseLeadingEdge)
            .unwrap()
    }

    #[test]
    fn test_add_spars() {
        let airfoil = naca_2412();
        let mut spars = SparSet::new();
        spars.add_spar(&airfoil, 0.2).unwrap();
        spars.add_spar(&airfoil, 0.65).unwrap();

        assert_eq!(2, spars.len());
        let first = spars.first().unwrap();
        assert!(first.upper.x >= 20.0 && first.upper.x < 21.0);
        assert!(first.lower.x >= 20.0 && first.lower.x < 21.0);
        assert!(first.upper.y > first.lower.y);
        assert!(spars.last().unwrap().upper.x >= 65.0);
    }

    #[test]
    fn test_spar_points_lie_on_contour() {
        let airfoil = naca_2412();
        let line = airfoil.contour_polyline(1e-9);
        let mut spars = SparSet::new();
        spars.add_spar(&airfoil, 0.35).unwrap();

        let coords = spars.coordinates();
        for p in coords.upper.iter().chain(coords.lower.iter()) {
            let d = line.distance_to_point(&Isometry::identity(), p, true);
            assert_relative_eq!(0.0, d, epsilon = 1e-9);
        }
    }

    #[test_case(0.0)]
    #[test_case(1.0)]
    #[test_case(-0.2)]
    #[test_case(1.5)]
    #[test_case(f64::NAN)]
    fn test_invalid_fraction(fraction: f64) {
        let airfoil = naca_2412();
        let mut spars = SparSet::new();
        let result = spars.add_spar(&airfoil, fraction).map(|s| s.fraction);
        assert!(matches!(result, Err(SectionError::InvalidFraction(_))));
        assert!(spars.is_empty());
    }

    #[test_case(0.65, 0.2)]
    #[test_case(0.5, 0.5)]
    fn test_unordered_spars(first: f64, second: f64) {
        let airfoil = naca_2412();
        let mut spars = SparSet::new();
        spars.add_spar(&airfoil, first).unwrap();
        let result = spars.add_spar(&airfoil, second).map(|s| s.fraction);
        assert_eq!(
            Err(SectionError::UnorderedSpars {
                previous: first,
                fraction: second
            }),
            result
        );
        assert_eq!(1, spars.len());
    }

    #[test]
    fn test_coincident_spars() {
        let airfoil = naca_2412();
        let mut spars = SparSet::new();
        spars.add_spar(&airfoil, 0.501).unwrap();
        let result = spars.add_spar(&airfoil, 0.502).map(|s| s.fraction);
        assert!(matches!(result, Err(SectionError::CoincidentSpars { .. })));
    }

    #[test]
    fn test_mass_caps_and_webs() {
        let airfoil = naca_2412();
        let mut spars = SparSet::new();
        spars.add_spar(&airfoil, 0.2).unwrap();
        spars.add_caps(0.3);
        spars.add_mass(10.0);
        assert!(spars.webs().is_empty());

        spars.add_spar(&airfoil, 0.65).unwrap();
        spars.add_webs(0.4);

        assert_relative_eq!(20.0, spars.total_mass());
        let caps = spars.cap_points();
        assert_eq!(4, caps.len());
        assert!(caps.iter().all(|c| c.area == 0.3));

        let webs = spars.webs();
        assert_eq!(2, webs.len());
        for w in webs.iter() {
            assert!(w.height() > 0.0);
            assert_relative_eq!(w.length() * 0.4, w.area());
        }
    }
}
