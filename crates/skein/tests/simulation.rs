//! End-to-end runs through the facade.

use proptest::prelude::*;
use skein::prelude::*;
use skein_test_utils::{chart_from_bytes, fixtures};

#[test]
fn stockinette_matches_direct_pipeline() {
    let chart = fixtures::stockinette(2, 2);
    let sim = Simulation::run(&chart, &SimConfig::default()).unwrap();

    let padded = skein_test_utils::pad(&chart);
    let run = ContactAutomaton::new().run(&padded);
    let path = YarnPathTracer::new().trace(&run.grid);

    assert_eq!(sim.padded_chart(), &padded);
    assert_eq!(sim.contact_grid(), &run.grid);
    assert_eq!(sim.path(), &path);
    assert_eq!(sim.links(), path.links().as_slice());
    assert_eq!(sim.path().len(), 20);
    let tags: Vec<String> = sim.path().points()[..4]
        .iter()
        .map(|p| p.tag.to_string())
        .collect();
    assert_eq!(tags, ["FBa", "FBb", "LHa", "LHb"]);
}

#[test]
fn miss_diagnostics_surface_through_facade() {
    // A miss over an empty row finds no loop to lift.
    let chart: StitchGrid = "M\n.".parse().unwrap();
    let sim = Simulation::run(&chart, &SimConfig::default()).unwrap();
    assert_eq!(sim.diagnostics().len(), 2);
    assert!(sim
        .diagnostics()
        .iter()
        .all(|d| matches!(d, Diagnostic::SearchBottomedOut { .. })));
}

#[test]
fn extra_row_padding_keeps_the_path_inside() {
    let config = SimConfig {
        y_padding: 1,
        ..SimConfig::default()
    };
    let chart = fixtures::stockinette(2, 2);
    let sim = Simulation::run(&chart, &config).unwrap();
    assert_eq!(sim.padded_chart().height(), 4);
    for p in sim.path().points() {
        let (col, row) = sim.chart_coord(p.at.i, p.at.j);
        assert!((0..2).contains(&col), "{p:?} -> col {col}");
        assert!((0..=2).contains(&row), "{p:?} -> row {row}");
    }
}

#[test]
fn config_errors_are_reported() {
    let chart = fixtures::stockinette(1, 1);
    let err = Simulation::run(
        &chart,
        &SimConfig {
            search_limit: 0,
            ..SimConfig::default()
        },
    )
    .unwrap_err();
    assert_eq!(err, SimError::Config(ConfigError::ZeroSearchLimit));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn fingerprint_separates_charts() {
    let config = SimConfig::default();
    let knit = Simulation::run(&fixtures::stockinette(3, 3), &config).unwrap();
    let purl = Simulation::run(&fixtures::single_in_field(StitchOp::Purl), &config).unwrap();
    let tuck = Simulation::run(&fixtures::single_in_field(StitchOp::Tuck), &config).unwrap();
    assert_ne!(knit.fingerprint(), purl.fingerprint());
    assert_ne!(knit.fingerprint(), tuck.fingerprint());
    assert_ne!(purl.fingerprint(), tuck.fingerprint());
}

proptest! {
    #[test]
    fn identical_runs_share_a_fingerprint(
        width in 1u32..6,
        height in 1u32..6,
        bytes in prop::collection::vec(any::<u8>(), 36),
    ) {
        let chart = chart_from_bytes(width, height, &bytes);
        let config = SimConfig::default();
        let a = Simulation::run(&chart, &config).unwrap();
        let b = Simulation::run(&chart, &config).unwrap();
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
        prop_assert_eq!(a.path(), b.path());
        prop_assert_eq!(a.diagnostics(), b.diagnostics());
    }

    #[test]
    fn row_zero_is_always_anchored(
        width in 1u32..6,
        height in 1u32..6,
        bytes in prop::collection::vec(any::<u8>(), 36),
    ) {
        let chart = chart_from_bytes(width, height, &bytes);
        let sim = Simulation::run(&chart, &SimConfig::default()).unwrap();
        let grid = sim.contact_grid();
        for i in 0..grid.width() as i32 {
            let av = grid.av(CnCoord::new(i, 0));
            prop_assert!(matches!(av, Some(ActualizationValue::Pcn | ActualizationValue::Acn)));
        }
    }
}
