use crate::airfoil::Surface;
use crate::report::write_array;
use crate::serialize::Point2f64;
use ncollide2d::na::Point2;
use serde::Serialize;
use std::io::Write;

pub mod spar;
pub mod stringer;

pub use spar::{Spar, SparSet, SparWeb};
pub use stringer::{Stringer, StringerCounts, StringerSet, StringerZone};

/// The upper and lower point sequences of a section component
#[derive(Debug, Clone, Default)]
pub struct SurfaceCoordinates {
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl SurfaceCoordinates {
    pub fn new(upper: Vec<Point2<f64>>, lower: Vec<Point2<f64>>) -> SurfaceCoordinates {
        SurfaceCoordinates { upper, lower }
    }

    pub fn x_u(&self) -> Vec<f64> {
        self.upper.iter().map(|p| p.x).collect()
    }

    pub fn z_u(&self) -> Vec<f64> {
        self.upper.iter().map(|p| p.y).collect()
    }

    pub fn x_l(&self) -> Vec<f64> {
        self.lower.iter().map(|p| p.x).collect()
    }

    pub fn z_l(&self) -> Vec<f64> {
        self.lower.iter().map(|p| p.y).collect()
    }

    pub fn describe(&self, writer: &mut dyn Write, precision: usize) -> std::io::Result<()> {
        write_array(writer, "x_u the upper x-coordinates", &self.x_u(), precision)?;
        write_array(writer, "z_u the upper z-coordinates", &self.z_u(), precision)?;
        write_array(writer, "x_l the lower x-coordinates", &self.x_l(), precision)?;
        write_array(writer, "z_l the lower z-coordinates", &self.z_l(), precision)
    }
}

/// Common capabilities of the airfoil, spar and stringer components: they expose their surface
/// coordinates and mass, and can describe themselves as text.
pub trait Component {
    fn name(&self) -> &'static str;

    fn coordinates(&self) -> SurfaceCoordinates;

    fn mass(&self) -> f64;

    /// Writes the component specific part of the text report
    fn describe(&self, writer: &mut dyn Write, precision: usize) -> std::io::Result<()>;
}

/// The two classes of concentrated area in the idealized section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralGroup {
    SparCaps,
    Stringers,
}

/// A concentrated area at a point of the cross-section
#[derive(Debug, Clone, Serialize)]
pub struct StructuralPoint {
    #[serde(with = "Point2f64")]
    pub position: Point2<f64>,
    pub area: f64,
    pub group: StructuralGroup,
    pub surface: Surface,
}

impl StructuralPoint {
    pub fn new(
        position: Point2<f64>,
        area: f64,
        group: StructuralGroup,
        surface: Surface,
    ) -> StructuralPoint {
        StructuralPoint {
            position,
            area,
            group,
            surface,
        }
    }
}
