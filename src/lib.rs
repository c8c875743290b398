//! Geometry generation and structural idealization of a wing cross-section built around a NACA
//! 4-digit airfoil, with spars and stringers placed on its surface and a simple structural
//! evaluation of the result.

pub mod airfoil;
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod geometry;
pub mod report;
pub mod section;
pub mod serialize;
pub mod structure;

pub mod prelude {
    pub use crate::airfoil::{
        Airfoil, AirfoilGenerator, Naca4Digit, NacaDesignation, Sampling, Surface,
    };
    pub use crate::config::{AnalysisConfig, SectionDimensions};
    pub use crate::errors::{ConfigError, ReportError, SectionError, SectionResult};
    pub use crate::evaluator::{EvaluatorState, Inertia, SpanwiseLoads, StructuralEvaluator};
    pub use crate::report::SectionSummary;
    pub use crate::section::WingSection;
    pub use crate::structure::{
        Component, SparSet, StringerCounts, StringerSet, StructuralGroup, StructuralPoint,
    };
}
