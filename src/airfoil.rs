use crate::algorithms::{first_decrease, left_bisect};
use crate::config::MAX_CHORD;
use crate::errors::{SectionError, SectionResult};
use crate::geometry::cleaned_polyline;
use crate::report::write_array;
use crate::structure::{Component, SurfaceCoordinates};
use ncollide2d::na::Point2;
use ncollide2d::shape::Polyline;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod generate;
pub mod naca;

pub use generate::{AirfoilGenerator, Naca4Digit};
pub use naca::NacaDesignation;

/// Chordwise sampling policy used when generating an airfoil. The choice changes the number of
/// surface samples, and therefore the indices which spars and stringers snap onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// One station per unit of chord, from 0 to the chord inclusive
    Uniform,

    /// Ten stations per unit of chord over the leading quarter of the chord, then one per unit.
    /// This resolves the leading edge curvature much better than uniform sampling, but with a
    /// strongly sloped camber line (NACA 4412 at chord 100, for one) the upper surface folds
    /// forward between the first samples and generation fails with `NonMonotonicSurface`.
    #[default]
    DenseLeadingEdge,
}

impl Sampling {
    /// Returns the chordwise station positions for a chord of the given length. The trailing edge
    /// (x = chord) is always the last station, even for a chord which is not a whole number.
    pub fn stations(&self, chord: f64) -> SectionResult<Vec<f64>> {
        if !chord.is_finite() || chord < 0.0 || chord > MAX_CHORD {
            return Err(SectionError::InvalidChord(chord));
        }

        let whole = chord.floor() as usize;
        let mut stations: Vec<f64> = match self {
            Sampling::Uniform => (0..=whole).map(|x| x as f64).collect(),
            Sampling::DenseLeadingEdge => {
                let quarter = ((chord / 4.0).round() as usize).min(whole);
                let dense = quarter
                    .checked_mul(10)
                    .ok_or(SectionError::InvalidChord(chord))?;
                (0..dense)
                    .map(|x| x as f64 / 10.0)
                    .chain((quarter..=whole).map(|x| x as f64))
                    .collect()
            }
        };

        if chord - whole as f64 > 1e-9 {
            stations.push(chord);
        }

        Ok(stations)
    }
}

/// Identifies one side of the airfoil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Upper,
    Lower,
}

impl Surface {
    pub fn name(&self) -> &'static str {
        match self {
            Surface::Upper => "upper",
            Surface::Lower => "lower",
        }
    }
}

/// A single chordwise station of a generated airfoil. Points use the `y` component for the
/// vertical (z) coordinate of the section.
#[derive(Debug, Clone)]
pub struct CamberStation {
    pub x: f64,
    pub camber: Point2<f64>,
    pub thickness: f64,
    pub theta: f64,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    /// Builds a station by offsetting the thickness normal to the camber line, which has the slope
    /// angle theta at this station.
    pub fn new(x: f64, camber_y: f64, thickness: f64, theta: f64) -> CamberStation {
        let (sin, cos) = theta.sin_cos();
        CamberStation {
            x,
            camber: Point2::new(x, camber_y),
            thickness,
            theta,
            upper: Point2::new(x - thickness * sin, camber_y + thickness * cos),
            lower: Point2::new(x + thickness * sin, camber_y - thickness * cos),
        }
    }

    /// A station with both surfaces pinned to the chord line, used to close the trailing edge
    pub fn closed(x: f64, camber_y: f64, theta: f64) -> CamberStation {
        CamberStation {
            x,
            camber: Point2::new(x, camber_y),
            thickness: 0.0,
            theta,
            upper: Point2::new(x, 0.0),
            lower: Point2::new(x, 0.0),
        }
    }
}

/// A sampled airfoil section. Once generated the geometry is immutable, only the attached mass
/// can change.
#[derive(Debug, Clone)]
pub struct Airfoil {
    designation: NacaDesignation,
    chord: f64,
    stations: Vec<CamberStation>,
    upper_x: Vec<f64>,
    lower_x: Vec<f64>,
    mass: f64,
}

impl Airfoil {
    /// Assembles an airfoil from its stations, verifying that the x-coordinates of both surfaces
    /// never decrease. Surface lookups bisect those coordinates and would be wrong otherwise.
    pub fn from_stations(
        designation: NacaDesignation,
        chord: f64,
        stations: Vec<CamberStation>,
    ) -> SectionResult<Airfoil> {
        let upper_x: Vec<f64> = stations.iter().map(|s| s.upper.x).collect();
        let lower_x: Vec<f64> = stations.iter().map(|s| s.lower.x).collect();

        if let Some(index) = first_decrease(&upper_x) {
            return Err(SectionError::NonMonotonicSurface {
                surface: Surface::Upper.name(),
                index,
            });
        }
        if let Some(index) = first_decrease(&lower_x) {
            return Err(SectionError::NonMonotonicSurface {
                surface: Surface::Lower.name(),
                index,
            });
        }

        Ok(Airfoil {
            designation,
            chord,
            stations,
            upper_x,
            lower_x,
            mass: 0.0,
        })
    }

    pub fn designation(&self) -> NacaDesignation {
        self.designation
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    pub fn stations(&self) -> &[CamberStation] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    pub fn x_c(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.camber.x).collect()
    }

    pub fn y_c(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.camber.y).collect()
    }

    pub fn y_t(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.thickness).collect()
    }

    pub fn theta(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.theta).collect()
    }

    pub fn x_u(&self) -> &[f64] {
        &self.upper_x
    }

    pub fn z_u(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.upper.y).collect()
    }

    pub fn x_l(&self) -> &[f64] {
        &self.lower_x
    }

    pub fn z_l(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.lower.y).collect()
    }

    pub fn camber(&self) -> Vec<Point2<f64>> {
        self.stations.iter().map(|s| s.camber).collect()
    }

    pub fn upper(&self) -> Vec<Point2<f64>> {
        self.stations.iter().map(|s| s.upper).collect()
    }

    pub fn lower(&self) -> Vec<Point2<f64>> {
        self.stations.iter().map(|s| s.lower).collect()
    }

    /// The sorted x-coordinates of one surface
    pub fn surface_x(&self, surface: Surface) -> &[f64] {
        match surface {
            Surface::Upper => &self.upper_x,
            Surface::Lower => &self.lower_x,
        }
    }

    pub fn surface_point(&self, surface: Surface, index: usize) -> Point2<f64> {
        match surface {
            Surface::Upper => self.stations[index].upper,
            Surface::Lower => self.stations[index].lower,
        }
    }

    /// Snaps a chordwise position onto the first sample of the given surface at or aft of it.
    /// Positions beyond the trailing edge snap onto the last sample.
    pub fn snap(&self, surface: Surface, x: f64) -> (usize, Point2<f64>) {
        let index = left_bisect(self.surface_x(surface), x);
        (index, self.surface_point(surface, index))
    }

    /// The closed outer contour, running from the leading edge along the upper surface to the
    /// trailing edge and back along the lower surface.
    pub fn outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper();
        let mut lower = self.lower();
        lower.reverse();
        result.append(&mut lower);
        result
    }

    pub fn contour_polyline(&self, tol: f64) -> Polyline<f64> {
        cleaned_polyline(&self.outer_contour(), tol)
    }
}

impl Component for Airfoil {
    fn name(&self) -> &'static str {
        "airfoil"
    }

    fn coordinates(&self) -> SurfaceCoordinates {
        SurfaceCoordinates::new(self.upper(), self.lower())
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn describe(&self, writer: &mut dyn Write, precision: usize) -> std::io::Result<()> {
        writeln!(writer, "NACA designation: {}", self.designation)?;
        self.coordinates().describe(writer, precision)?;
        let camber_x = self.x_c();
        let camber_z = self.y_c();
        write_array(writer, "x_c the camber x-coordinates", &camber_x, precision)?;
        write_array(writer, "z_c the camber z-coordinates", &camber_z, precision)
    }
}
