use crate::airfoil::{Airfoil, Surface};
use crate::errors::{SectionError, SectionResult};
use crate::serialize::Point2f64;
use crate::structure::{Component, SparSet, StructuralGroup, StructuralPoint, SurfaceCoordinates};
use log::debug;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Number of stringers in each of the four zones of the section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringerCounts {
    /// Upper surface, from the leading edge to the first spar
    pub upper_nose: usize,
    /// Upper surface, from the first spar to the last spar
    pub upper_mid: usize,
    /// Lower surface, from the leading edge to the first spar
    pub lower_nose: usize,
    /// Lower surface, from the first spar to the last spar
    pub lower_mid: usize,
}

impl StringerCounts {
    pub fn new(upper_nose: usize, upper_mid: usize, lower_nose: usize, lower_mid: usize) -> Self {
        Self {
            upper_nose,
            upper_mid,
            lower_nose,
            lower_mid,
        }
    }

    pub fn upper(&self) -> usize {
        self.upper_nose + self.upper_mid
    }

    pub fn lower(&self) -> usize {
        self.lower_nose + self.lower_mid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StringerZone {
    Nose,
    Mid,
}

impl StringerZone {
    pub fn name(&self) -> &'static str {
        match self {
            StringerZone::Nose => "nose",
            StringerZone::Mid => "mid",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Stringer {
    pub surface: Surface,
    pub zone: StringerZone,
    pub index: usize,
    #[serde(with = "Point2f64")]
    pub position: Point2<f64>,
}

/// Stringers distributed along the skin. Every stringer shares the same area and unit mass.
#[derive(Debug, Clone, Default)]
pub struct StringerSet {
    stringers: Vec<Stringer>,
    area: f64,
    unit_mass: f64,
    skin_thickness: Option<f64>,
}

impl StringerSet {
    pub fn new() -> StringerSet {
        StringerSet::default()
    }

    /// Distributes stringers at equal chordwise intervals in each zone. The nose zones run from
    /// the leading edge to the first spar, the mid zones from the first spar to the last, using
    /// the spar's position on the same surface. Needs at least two spars.
    ///
    /// Fails with `CoincidentStringers` when a zone holds more stringers than the surface has
    /// samples to give them, and nothing is added in that case.
    pub fn add_stringers(
        &mut self,
        airfoil: &Airfoil,
        spars: &SparSet,
        counts: StringerCounts,
    ) -> SectionResult<()> {
        let (first, last) = match (spars.first(), spars.last()) {
            (Some(first), Some(last)) if spars.len() >= 2 => (first, last),
            _ => return Err(SectionError::InsufficientSpars(spars.len())),
        };

        let (upper_first, upper_last) = (first.upper.x, last.upper.x);
        let (lower_first, lower_last) = (first.lower.x, last.lower.x);
        let zones = [
            (Surface::Upper, StringerZone::Nose, 0.0, upper_first, counts.upper_nose),
            (Surface::Upper, StringerZone::Mid, upper_first, upper_last, counts.upper_mid),
            (Surface::Lower, StringerZone::Nose, 0.0, lower_first, counts.lower_nose),
            (Surface::Lower, StringerZone::Mid, lower_first, lower_last, counts.lower_mid),
        ];

        let mut placed = Vec::with_capacity(counts.upper() + counts.lower());
        for (surface, zone, x0, x1, count) in zones {
            place_zone(airfoil, surface, zone, (x0, x1), count, &mut placed)?;
        }

        debug!(
            "Placed {} upper and {} lower stringers",
            counts.upper(),
            counts.lower()
        );
        self.stringers.append(&mut placed);
        Ok(())
    }

    pub fn add_area(&mut self, area: f64) {
        self.area = area;
    }

    /// Sets the mass of a single stringer, the set's mass is this multiplied by the stringer count
    pub fn add_mass(&mut self, unit_mass: f64) {
        self.unit_mass = unit_mass;
    }

    /// Records the thickness of the skin which the stringers stiffen
    pub fn add_webs(&mut self, skin_thickness: f64) {
        self.skin_thickness = Some(skin_thickness);
    }

    pub fn skin_thickness(&self) -> Option<f64> {
        self.skin_thickness
    }

    pub fn stringers(&self) -> &[Stringer] {
        &self.stringers
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn len(&self) -> usize {
        self.stringers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stringers.is_empty()
    }

    pub fn surface(&self, surface: Surface) -> impl Iterator<Item = &Stringer> {
        self.stringers.iter().filter(move |s| s.surface == surface)
    }

    pub fn total_mass(&self) -> f64 {
        self.stringers.len() as f64 * self.unit_mass
    }

    pub fn points(&self) -> Vec<StructuralPoint> {
        self.stringers
            .iter()
            .map(|s| {
                StructuralPoint::new(s.position, self.area, StructuralGroup::Stringers, s.surface)
            })
            .collect()
    }
}

/// Divides the span from x0 to x1 into count + 1 equal intervals and snaps a stringer onto the
/// surface at each interior boundary. Neighbors must land on distinct samples.
fn place_zone(
    airfoil: &Airfoil,
    surface: Surface,
    zone: StringerZone,
    (x0, x1): (f64, f64),
    count: usize,
    placed: &mut Vec<Stringer>,
) -> SectionResult<()> {
    let interval = (x1 - x0) / (count + 1) as f64;
    let mut previous: Option<usize> = None;

    for k in 1..=count {
        let (index, position) = airfoil.snap(surface, x0 + k as f64 * interval);
        if previous == Some(index) {
            return Err(SectionError::CoincidentStringers {
                surface: surface.name(),
                zone: zone.name(),
                first: k - 1,
                second: k,
                index,
            });
        }
        previous = Some(index);

        placed.push(Stringer {
            surface,
            zone,
            index,
            position,
        });
    }

    Ok(())
}

impl Component for StringerSet {
    fn name(&self) -> &'static str {
        "stringer"
    }

    fn coordinates(&self) -> SurfaceCoordinates {
        SurfaceCoordinates::new(
            self.surface(Surface::Upper).map(|s| s.position).collect(),
            self.surface(Surface::Lower).map(|s| s.position).collect(),
        )
    }

    fn mass(&self) -> f64 {
        self.total_mass()
    }

    fn describe(&self, writer: &mut dyn Write, precision: usize) -> std::io::Result<()> {
        writeln!(writer, "Stringer area: {:.*}", precision, self.area)?;
        if let Some(thickness) = self.skin_thickness {
            writeln!(writer, "Skin thickness: {:.*}", precision, thickness)?;
        }
        self.coordinates().describe(writer, precision)
    }
}
