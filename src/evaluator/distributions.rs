//! Spanwise load distributions. These are synthetic arrays with one entry per spanwise station,
//! defined entirely by the semi-span and a load magnitude, not by the section geometry.
//!
//! Both lift distributions give the share of one station, so they are divided by
//! `2 * semi_span` and can be averaged with each other.

use itertools::izip;
use serde::{Deserialize, Serialize};

/// Fraction of the semi-span after which the drag steps up
const DRAG_STEP_FRACTION: f64 = 0.8;

/// Drag multiplier outboard of the step
const DRAG_STEP_FACTOR: f64 = 1.25;

/// Load magnitudes used to build the spanwise distributions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanwiseLoads {
    pub total_lift: f64,
    pub elliptical_root_lift: f64,
    pub base_drag: f64,
}

pub fn lift_rectangular(semi_span: usize, total_lift: f64) -> Vec<f64> {
    vec![total_lift / (2.0 * semi_span as f64); semi_span]
}

pub fn lift_elliptical(semi_span: usize, root_lift: f64) -> Vec<f64> {
    let b = semi_span as f64;
    (0..semi_span)
        .map(|y| root_lift * (1.0 - (y as f64 / b).powi(2)).sqrt() / (2.0 * b))
        .collect()
}

/// Station by station average of the rectangular and elliptical distributions
pub fn lift_total(rectangular: &[f64], elliptical: &[f64]) -> Vec<f64> {
    izip!(rectangular, elliptical)
        .map(|(r, e)| (r + e) / 2.0)
        .collect()
}

pub fn mass_distribution(semi_span: usize, total_mass: f64) -> Vec<f64> {
    vec![total_mass / semi_span as f64; semi_span]
}

/// Uniform drag over the inboard 80% of the semi-span, 25% higher outboard of it
pub fn drag_distribution(semi_span: usize, base_drag: f64) -> Vec<f64> {
    let cutoff = (DRAG_STEP_FRACTION * semi_span as f64).round() as usize;
    (0..semi_span)
        .map(|y| {
            if y < cutoff {
                base_drag
            } else {
                DRAG_STEP_FACTOR * base_drag
            }
        })
        .collect()
}
