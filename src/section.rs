use crate::airfoil::{Airfoil, Naca4Digit};
use crate::config::AnalysisConfig;
use crate::errors::SectionResult;
use crate::evaluator::StructuralEvaluator;
use crate::structure::{SparSet, StringerSet};
use log::debug;

/// An airfoil with its spars and stringers, assembled from an analysis configuration
#[derive(Debug, Clone)]
pub struct WingSection {
    pub airfoil: Airfoil,
    pub spars: SparSet,
    pub stringers: StringerSet,
}

impl WingSection {
    pub fn build(config: &AnalysisConfig) -> SectionResult<WingSection> {
        let dimensions = config.dimensions()?;

        let mut airfoil =
            Naca4Digit::new(config.naca, dimensions.chord)?.generate(config.sampling)?;
        airfoil.set_mass(config.airfoil_mass);

        let mut spars = SparSet::new();
        for fraction in config.spars.fractions.iter() {
            spars.add_spar(&airfoil, *fraction)?;
        }
        spars.add_caps(config.spars.cap_area);
        spars.add_mass(config.spars.unit_mass);
        spars.add_webs(config.spars.web_thickness);

        let mut stringers = StringerSet::new();
        stringers.add_stringers(&airfoil, &spars, config.stringers.counts())?;
        stringers.add_area(config.stringers.area);
        stringers.add_mass(config.stringers.unit_mass);
        stringers.add_webs(config.stringers.skin_thickness);

        debug!(
            "Built NACA {} section with {} spars and {} stringers",
            airfoil.designation(),
            spars.len(),
            stringers.len()
        );

        Ok(WingSection {
            airfoil,
            spars,
            stringers,
        })
    }

    /// Binds the section to a new evaluator and analyzes it
    pub fn evaluate(&self, config: &AnalysisConfig) -> SectionResult<StructuralEvaluator<'_>> {
        let mut evaluator = StructuralEvaluator::new(config.dimensions()?, config.loads.spanwise());
        evaluator.bind(&self.airfoil, &self.spars, &self.stringers);
        evaluator.analyze()?;
        Ok(evaluator)
    }
}
