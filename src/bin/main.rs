use log::info;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use wing_section_rs::prelude::*;
use wing_section_rs::report;

const PRECISION: usize = 2;
const TAG: &str = "section";

fn run(config_path: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            AnalysisConfig::from_file(path)?
        }
        None => AnalysisConfig::default(),
    };

    let section = WingSection::build(&config)?;
    let evaluator = section.evaluate(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_evaluation(&mut out, &evaluator, PRECISION)?;
    let (caps, stringers) =
        evaluator.bending_load_terms(config.loads.shear_x, config.loads.shear_z)?;
    writeln!(out, "Bending load term (spar caps): {:.*}", PRECISION + 2, caps)?;
    writeln!(out, "Bending load term (stringers): {:.*}", PRECISION + 2, stringers)?;

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(&dir)?;
        let dimensions = evaluator.dimensions();
        let components: [&dyn Component; 3] =
            [&section.airfoil, &section.spars, &section.stringers];
        for component in components {
            report::save_component(&dir, component, &dimensions, TAG, PRECISION)?;
        }
        report::save_evaluation(&dir, &evaluator, TAG, PRECISION)?;

        let summary = SectionSummary::from_evaluator(
            &evaluator,
            config.loads.shear_x,
            config.loads.shear_z,
        )?;
        report::save_json(&dir, &summary, TAG)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let config_path = args.next();
    let output_dir = args.next();

    match run(config_path, output_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
