//! Text and JSON reports of the section components and the evaluation results.
//!
//! The text layout is a short header block followed by labeled arrays, each value rounded to the
//! requested number of decimals. Files are written through a `BufWriter` and flushed explicitly.

use crate::airfoil::NacaDesignation;
use crate::config::SectionDimensions;
use crate::errors::{ReportError, SectionResult};
use crate::evaluator::{Inertia, StructuralEvaluator};
use crate::serialize::Point2f64;
use crate::structure::{Component, StructuralPoint};
use itertools::Itertools;
use log::info;
use ncollide2d::na::Point2;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes a label line followed by the values on one line, as `[a, b, c]`
pub fn write_array(
    writer: &mut dyn Write,
    label: &str,
    values: &[f64],
    precision: usize,
) -> std::io::Result<()> {
    writeln!(writer, "{}:", label)?;
    writeln!(
        writer,
        "[{}]",
        values.iter().map(|v| format!("{:.*}", precision, v)).join(", ")
    )
}

pub fn write_component(
    writer: &mut dyn Write,
    component: &dyn Component,
    dimensions: &SectionDimensions,
    precision: usize,
) -> std::io::Result<()> {
    writeln!(writer, "{}", "-".repeat(20))?;
    writeln!(writer, "    CREATOR DATA    ")?;
    writeln!(writer, "Component: {}", component.name())?;
    writeln!(writer, "Chord length: {}", dimensions.chord)?;
    writeln!(writer, "Semi-span: {}", dimensions.semi_span)?;
    writeln!(writer, "Mass: {}", component.mass())?;
    writeln!(writer, "{}", "-".repeat(20))?;
    component.describe(writer, precision)
}

pub fn write_evaluation(
    writer: &mut dyn Write,
    evaluator: &StructuralEvaluator,
    precision: usize,
) -> Result<(), ReportError> {
    let airfoil = evaluator.airfoil()?;
    let dimensions = evaluator.dimensions();
    let centroid = evaluator.centroid()?;
    let inertia = evaluator.inertia()?;

    writeln!(writer, "{}", "-".repeat(22))?;
    writeln!(writer, "    EVALUATOR DATA    ")?;
    writeln!(writer, "Evaluating: NACA {}", airfoil.designation())?;
    writeln!(writer, "Chord length: {}", dimensions.chord)?;
    writeln!(writer, "Semi-span: {}", dimensions.semi_span)?;
    writeln!(writer, "Total airfoil mass: {}", evaluator.total_mass()?)?;
    writeln!(
        writer,
        "Centroid location: [{:.*}, {:.*}]",
        precision + 1,
        centroid.x,
        precision + 1,
        centroid.y
    )?;
    writeln!(
        writer,
        "Second moments: Ix {:.*}, Iz {:.*}, Ixz {:.*}",
        precision, inertia.ix, precision, inertia.iz, precision, inertia.ixz
    )?;
    writeln!(writer, "{}", "-".repeat(22))?;
    write_array(writer, "Rectangular lift", evaluator.lift_rectangular()?, precision)?;
    write_array(writer, "Elliptical lift", evaluator.lift_elliptical()?, precision)?;
    write_array(writer, "Combined lift", evaluator.lift_total()?, precision)?;
    write_array(writer, "Distribution of mass", evaluator.mass_distribution()?, precision)?;
    write_array(writer, "Drag", evaluator.drag()?, precision)?;

    Ok(())
}

/// Writes `<name>_<tag>.txt` into the directory and returns its path
pub fn save_component(
    dir: &Path,
    component: &dyn Component,
    dimensions: &SectionDimensions,
    tag: &str,
    precision: usize,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(format!("{}_{}.txt", component.name(), tag));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_component(&mut writer, component, dimensions, precision)?;
    writer.flush()?;

    info!("Wrote {} data to {}", component.name(), path.display());
    Ok(path)
}

/// Writes `airfoil_<tag>_eval.txt` into the directory and returns its path
pub fn save_evaluation(
    dir: &Path,
    evaluator: &StructuralEvaluator,
    tag: &str,
    precision: usize,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(format!("airfoil_{}_eval.txt", tag));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_evaluation(&mut writer, evaluator, precision)?;
    writer.flush()?;

    info!("Wrote evaluation to {}", path.display());
    Ok(path)
}

/// Writes `airfoil_<tag>.json` into the directory and returns its path
pub fn save_json(dir: &Path, summary: &SectionSummary, tag: &str) -> Result<PathBuf, ReportError> {
    let path = dir.join(format!("airfoil_{}.json", tag));
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;

    info!("Wrote summary to {}", path.display());
    Ok(path)
}

/// Bending load terms of both structural groups for one pair of shear forces
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BendingTerms {
    pub shear_x: f64,
    pub shear_z: f64,
    pub spar_caps: f64,
    pub stringers: f64,
}

/// Everything the evaluation produced, in a form which serializes to JSON
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub naca: NacaDesignation,
    pub chord: f64,
    pub semi_span: usize,
    pub total_mass: f64,
    pub x_u: Vec<f64>,
    pub z_u: Vec<f64>,
    pub x_l: Vec<f64>,
    pub z_l: Vec<f64>,
    pub structural_points: Vec<StructuralPoint>,
    #[serde(with = "Point2f64")]
    pub centroid: Point2<f64>,
    pub inertia: Inertia,
    pub lift_rectangular: Vec<f64>,
    pub lift_elliptical: Vec<f64>,
    pub lift_total: Vec<f64>,
    pub mass_distribution: Vec<f64>,
    pub drag: Vec<f64>,
    pub bending: BendingTerms,
}

impl SectionSummary {
    pub fn from_evaluator(
        evaluator: &StructuralEvaluator,
        shear_x: f64,
        shear_z: f64,
    ) -> SectionResult<SectionSummary> {
        let airfoil = evaluator.airfoil()?;
        let dimensions = evaluator.dimensions();
        let (spar_caps, stringers) = evaluator.bending_load_terms(shear_x, shear_z)?;

        Ok(SectionSummary {
            naca: airfoil.designation(),
            chord: dimensions.chord,
            semi_span: dimensions.semi_span,
            total_mass: evaluator.total_mass()?,
            x_u: airfoil.x_u().to_vec(),
            z_u: airfoil.z_u(),
            x_l: airfoil.x_l().to_vec(),
            z_l: airfoil.z_l(),
            structural_points: evaluator.structural_points()?.to_vec(),
            centroid: evaluator.centroid()?,
            inertia: evaluator.inertia()?,
            lift_rectangular: evaluator.lift_rectangular()?.to_vec(),
            lift_elliptical: evaluator.lift_elliptical()?.to_vec(),
            lift_total: evaluator.lift_total()?.to_vec(),
            mass_distribution: evaluator.mass_distribution()?.to_vec(),
            drag: evaluator.drag()?.to_vec(),
            bending: BendingTerms {
                shear_x,
                shear_z,
                spar_caps,
                stringers,
            },
        })
    }
}
