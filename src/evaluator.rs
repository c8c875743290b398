//! Structural evaluation of an assembled wing section.
//!
//! The evaluator is created with the wing dimensions and loads, then bound to an airfoil, a spar
//! set and a stringer set, and finally analyzed. Every result is read back through a getter which
//! fails with [`SectionError::NotAnalyzed`] until `analyze` has succeeded.

use crate::airfoil::Airfoil;
use crate::config::SectionDimensions;
use crate::errors::{SectionError, SectionResult};
use crate::structure::{Component, SparSet, StringerSet, StructuralGroup, StructuralPoint};
use log::{debug, info};
use ncollide2d::na::Point2;
use serde::Serialize;

pub mod distributions;
pub mod properties;

pub use distributions::SpanwiseLoads;
pub use properties::Inertia;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorState {
    Created,
    GeometryBound,
    Analyzed,
}

#[derive(Debug, Clone, Copy)]
struct Geometry<'a> {
    airfoil: &'a Airfoil,
    spars: &'a SparSet,
    stringers: &'a StringerSet,
}

#[derive(Debug, Clone)]
struct Analysis {
    total_mass: f64,
    points: Vec<StructuralPoint>,
    centroid: Point2<f64>,
    inertia: Inertia,
    lift_rectangular: Vec<f64>,
    lift_elliptical: Vec<f64>,
    lift_total: Vec<f64>,
    mass: Vec<f64>,
    drag: Vec<f64>,
}

/// Computes the mass, centroid, second moments and spanwise distributions of a wing section.
/// The section geometry is borrowed, so it cannot change while the evaluator holds it.
#[derive(Debug, Clone)]
pub struct StructuralEvaluator<'a> {
    dimensions: SectionDimensions,
    loads: SpanwiseLoads,
    geometry: Option<Geometry<'a>>,
    analysis: Option<Analysis>,
}

impl<'a> StructuralEvaluator<'a> {
    pub fn new(dimensions: SectionDimensions, loads: SpanwiseLoads) -> StructuralEvaluator<'a> {
        StructuralEvaluator {
            dimensions,
            loads,
            geometry: None,
            analysis: None,
        }
    }

    /// Binds the section components. Binding again replaces the previous geometry and discards
    /// any earlier analysis.
    pub fn bind(&mut self, airfoil: &'a Airfoil, spars: &'a SparSet, stringers: &'a StringerSet) {
        self.geometry = Some(Geometry {
            airfoil,
            spars,
            stringers,
        });
        self.analysis = None;
    }

    pub fn state(&self) -> EvaluatorState {
        match (&self.geometry, &self.analysis) {
            (None, _) => EvaluatorState::Created,
            (Some(_), None) => EvaluatorState::GeometryBound,
            (Some(_), Some(_)) => EvaluatorState::Analyzed,
        }
    }

    pub fn dimensions(&self) -> SectionDimensions {
        self.dimensions
    }

    pub fn loads(&self) -> SpanwiseLoads {
        self.loads
    }

    /// Runs the analysis over the bound geometry. On failure the evaluator stays in the bound
    /// state and no results are available.
    pub fn analyze(&mut self) -> SectionResult<()> {
        let geometry = self.geometry.ok_or(SectionError::GeometryNotBound)?;

        let total_mass =
            geometry.airfoil.mass() + geometry.spars.mass() + geometry.stringers.mass();

        let mut points = geometry.spars.cap_points();
        points.extend(geometry.stringers.points());

        let centroid = properties::centroid(&points)?;
        let inertia = properties::inertia(&points, &centroid);

        let span = self.dimensions.semi_span;
        let lift_rectangular = distributions::lift_rectangular(span, self.loads.total_lift);
        let lift_elliptical =
            distributions::lift_elliptical(span, self.loads.elliptical_root_lift);
        let lift_total = distributions::lift_total(&lift_rectangular, &lift_elliptical);
        let mass = distributions::mass_distribution(span, total_mass);
        let drag = distributions::drag_distribution(span, self.loads.base_drag);

        debug!(
            "Section of {} structural points has centroid ({:.4}, {:.4})",
            points.len(),
            centroid.x,
            centroid.y
        );
        info!(
            "Analyzed NACA {} section: mass {}, Ix {:.4}, Iz {:.4}, Ixz {:.4}",
            geometry.airfoil.designation(),
            total_mass,
            inertia.ix,
            inertia.iz,
            inertia.ixz
        );

        self.analysis = Some(Analysis {
            total_mass,
            points,
            centroid,
            inertia,
            lift_rectangular,
            lift_elliptical,
            lift_total,
            mass,
            drag,
        });

        Ok(())
    }

    fn analysis(&self) -> SectionResult<&Analysis> {
        self.analysis.as_ref().ok_or(SectionError::NotAnalyzed)
    }

    pub fn airfoil(&self) -> SectionResult<&'a Airfoil> {
        self.geometry
            .map(|g| g.airfoil)
            .ok_or(SectionError::GeometryNotBound)
    }

    pub fn total_mass(&self) -> SectionResult<f64> {
        Ok(self.analysis()?.total_mass)
    }

    pub fn centroid(&self) -> SectionResult<Point2<f64>> {
        Ok(self.analysis()?.centroid)
    }

    pub fn inertia(&self) -> SectionResult<Inertia> {
        Ok(self.analysis()?.inertia)
    }

    /// Spar caps followed by stringers, the points which carry area in the idealized section
    pub fn structural_points(&self) -> SectionResult<&[StructuralPoint]> {
        Ok(&self.analysis()?.points)
    }

    pub fn lift_rectangular(&self) -> SectionResult<&[f64]> {
        Ok(&self.analysis()?.lift_rectangular)
    }

    pub fn lift_elliptical(&self) -> SectionResult<&[f64]> {
        Ok(&self.analysis()?.lift_elliptical)
    }

    pub fn lift_total(&self) -> SectionResult<&[f64]> {
        Ok(&self.analysis()?.lift_total)
    }

    pub fn mass_distribution(&self) -> SectionResult<&[f64]> {
        Ok(&self.analysis()?.mass)
    }

    pub fn drag(&self) -> SectionResult<&[f64]> {
        Ok(&self.analysis()?.drag)
    }

    /// Bending load term for the points of one structural group, taken about the centroid of the
    /// whole section.
    pub fn bending_load_term(
        &self,
        group: StructuralGroup,
        vx: f64,
        vz: f64,
    ) -> SectionResult<f64> {
        let analysis = self.analysis()?;
        let points: Vec<StructuralPoint> = analysis
            .points
            .iter()
            .filter(|p| p.group == group)
            .cloned()
            .collect();

        properties::bending_load_term(&points, &analysis.centroid, &analysis.inertia, vx, vz)
    }

    /// Bending load terms of the spar caps and the stringers, in that order
    pub fn bending_load_terms(&self, vx: f64, vz: f64) -> SectionResult<(f64, f64)> {
        Ok((
            self.bending_load_term(StructuralGroup::SparCaps, vx, vz)?,
            self.bending_load_term(StructuralGroup::Stringers, vx, vz)?,
        ))
    }
}
