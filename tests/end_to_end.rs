use approx::assert_relative_eq;
use itertools::Itertools;
use std::fs;
use test_case::test_case;
use wing_section_rs::prelude::*;
use wing_section_rs::report;

fn config_2412() -> AnalysisConfig {
    AnalysisConfig::from_json(
        r#"{
            "naca": 2412,
            "chord": 100,
            "semi_span": 40,
            "spars": {"fractions": [0.20, 0.65]},
            "stringers": {"upper_nose": 3, "upper_mid": 6, "lower_nose": 5, "lower_mid": 4}
        }"#,
    )
    .unwrap()
}

#[test]
fn stringer_zones_are_filled_in_order() {
    let config = config_2412();
    let section = WingSection::build(&config).unwrap();

    assert_eq!(9, section.stringers.surface(Surface::Upper).count());
    assert_eq!(9, section.stringers.surface(Surface::Lower).count());

    let zones = section
        .stringers
        .stringers()
        .iter()
        .group_by(|s| (s.surface, s.zone));
    let mut sizes = Vec::new();
    for (_, group) in &zones {
        let xs: Vec<f64> = group.map(|s| s.position.x).collect();
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
        sizes.push(xs.len());
    }
    assert_eq!(vec![3, 6, 5, 4], sizes);
}

#[test_case("2412", 100.0)]
#[test_case("0012", 68.0)]
#[test_case("0012", 150.0)]
#[test_case("2412", 68.0)]
fn edges_are_closed(code: &str, chord: f64) {
    let airfoil = Naca4Digit::new(code.parse().unwrap(), chord)
        .unwrap()
        .generate(Sampling::DenseLeadingEdge)
        .unwrap();

    let first = &airfoil.stations()[0];
    let last = &airfoil.stations()[airfoil.len() - 1];
    assert_relative_eq!(0.0, first.camber.y);
    assert_relative_eq!(0.0, first.thickness);
    assert_relative_eq!(chord, last.x);
    assert_relative_eq!(0.0, last.camber.y, epsilon = 1e-12);
    assert_eq!(0.0, last.thickness);
    assert_eq!(0.0, airfoil.z_u()[airfoil.len() - 1]);
    assert_eq!(0.0, airfoil.z_l()[airfoil.len() - 1]);
}

#[test]
fn full_analysis_matches_hand_totals() {
    let config = config_2412();
    let section = WingSection::build(&config).unwrap();
    let evaluator = section.evaluate(&config).unwrap();

    // Airfoil 10, two spars at 10, eighteen stringers at 5
    assert_relative_eq!(120.0, evaluator.total_mass().unwrap());
    assert_eq!(22, evaluator.structural_points().unwrap().len());

    let drag = evaluator.drag().unwrap();
    assert_eq!(32, drag.iter().filter(|d| **d == 10.0).count());
    assert_eq!(8, drag.iter().filter(|d| **d == 12.5).count());

    let inertia = evaluator.inertia().unwrap();
    assert!(inertia.ix > 0.0);
    assert!(inertia.iz > inertia.ix);
}

#[test]
fn component_reports_written_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_2412();
    let section = WingSection::build(&config).unwrap();
    let evaluator = section.evaluate(&config).unwrap();
    let dims = evaluator.dimensions();

    let airfoil_path =
        report::save_component(dir.path(), &section.airfoil, &dims, "foo", 2).unwrap();
    let spar_path = report::save_component(dir.path(), &section.spars, &dims, "foo", 2).unwrap();
    let stringer_path =
        report::save_component(dir.path(), &section.stringers, &dims, "foo", 2).unwrap();
    let eval_path = report::save_evaluation(dir.path(), &evaluator, "foo", 2).unwrap();

    assert_eq!(dir.path().join("airfoil_foo.txt"), airfoil_path);
    assert_eq!(dir.path().join("spar_foo.txt"), spar_path);
    assert_eq!(dir.path().join("stringer_foo.txt"), stringer_path);
    assert_eq!(dir.path().join("airfoil_foo_eval.txt"), eval_path);

    let airfoil_text = fs::read_to_string(airfoil_path).unwrap();
    assert!(airfoil_text.contains("Component: airfoil"));
    assert!(airfoil_text.contains("NACA designation: 2412"));
    assert!(airfoil_text.contains("x_c the camber x-coordinates:"));

    let stringer_text = fs::read_to_string(stringer_path).unwrap();
    assert!(stringer_text.contains("Mass: 90"));
    assert!(stringer_text.contains("Stringer area: 0.10"));

    let eval_text = fs::read_to_string(eval_path).unwrap();
    assert!(eval_text.contains("EVALUATOR DATA"));
    assert!(eval_text.contains("Total airfoil mass: 120"));
    assert!(eval_text.contains("Drag:\n[10.00, 10.00"));
}

#[test]
fn json_summary_round_trips_through_serde() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_2412();
    let section = WingSection::build(&config).unwrap();
    let evaluator = section.evaluate(&config).unwrap();

    let summary = SectionSummary::from_evaluator(&evaluator, 1.0, 1.0).unwrap();
    let path = report::save_json(dir.path(), &summary, "foo").unwrap();

    let text = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(2412, value["naca"]);
    assert_eq!(22, value["structural_points"].as_array().unwrap().len());
    assert_eq!("spar_caps", value["structural_points"][0]["group"]);
    assert_eq!(40, value["drag"].as_array().unwrap().len());
    assert!(value["centroid"]["x"].as_f64().unwrap() > 0.0);
}

#[test]
fn report_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let config = config_2412();
    let section = WingSection::build(&config).unwrap();
    let evaluator = section.evaluate(&config).unwrap();

    let result = report::save_evaluation(&missing, &evaluator, "foo", 2);
    assert!(matches!(result, Err(ReportError::Io(_))));
}

#[test]
fn evaluation_written_to_memory() {
    let config = config_2412();
    let section = WingSection::build(&config).unwrap();
    let evaluator = section.evaluate(&config).unwrap();

    let mut out: Vec<u8> = Vec::new();
    report::write_evaluation(&mut out, &evaluator, 3).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(&"-".repeat(22)));
    assert!(text.contains("Evaluating: NACA 2412"));
    assert!(text.contains("Semi-span: 40"));
    assert!(text.contains("Distribution of mass:\n[3.000, 3.000"));
}
