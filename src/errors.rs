use thiserror::Error;

pub type SectionResult<T> = Result<T, SectionError>;

/// Precondition violations raised by geometry generation, spar/stringer placement and the
/// structural evaluator. Every variant is detected at the call which violates it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SectionError {
    #[error("invalid NACA designation '{0}': expected four digits of the form MPTT")]
    InvalidDesignation(String),

    #[error("chordwise fraction {0} is outside the open interval (0, 1)")]
    InvalidFraction(f64),

    #[error("chord length {0} must be finite, positive and no longer than the maximum chord")]
    InvalidChord(f64),

    #[error("stringer placement needs at least two spars, found {0}")]
    InsufficientSpars(usize),

    #[error("spar at fraction {fraction} does not lie aft of the previous spar at {previous}")]
    UnorderedSpars { previous: f64, fraction: f64 },

    #[error("spar at fraction {fraction} resolves to surface sample {index}, already used")]
    CoincidentSpars { fraction: f64, index: usize },

    #[error("{surface} {zone} stringers {first} and {second} share surface sample {index}")]
    CoincidentStringers {
        surface: &'static str,
        zone: &'static str,
        first: usize,
        second: usize,
        index: usize,
    },

    #[error("{surface} surface x-coordinates decrease at sample {index}")]
    NonMonotonicSurface { surface: &'static str, index: usize },

    #[error("no geometry has been bound to the evaluator")]
    GeometryNotBound,

    #[error("the evaluator has not been analyzed yet")]
    NotAnalyzed,

    #[error("the section has no structural area")]
    EmptySection,

    #[error("singular inertia: Ix * Iz - Ixz^2 = {0}")]
    SingularInertia(f64),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid analysis configuration: {0}")]
    ValidationError(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Section(#[from] SectionError),
}
