use approx::assert_relative_eq;
use pairfloat::codec::CodePair;
use pairfloat::consts::DEFAULT_HARNESS_COUNT;
use pairfloat::harness::{harness_input, round_trip_error, run_harness, HarnessReport, RoundTrip};
use pairfloat::io::{dump_data_to_file, load_data_from_file};
use std::env::temp_dir;

// Accumulated error of the reference run over i = 0..65535
const REFERENCE_ERROR_SUM: f32 = 302.723_85;

#[test]
fn inputs() {
    assert_eq!(harness_input(0), 0.0);
    assert_eq!(harness_input(1), 1.0);
    assert_eq!(harness_input(4), 0.25);
    assert_eq!(harness_input(3), (1.0_f64 / 3.0) as f32);
}

#[test]
fn error_is_absolute_at_zero_and_relative_elsewhere() {
    assert_eq!(round_trip_error(0.0, 0.25), 0.25);
    assert_eq!(round_trip_error(0.5, 0.25), 0.5);
    assert_eq!(round_trip_error(2.0, 2.0), 0.0);
}

#[test]
fn first_trips() {
    let zero = RoundTrip::run(0);
    assert_eq!(zero.code, CodePair::new(0.0, 511.0));
    assert_eq!(zero.reconstructed, 0.0);
    assert_eq!(zero.error, 0.0);

    let third = RoundTrip::run(3);
    assert_eq!(third.code, CodePair::new(30.0, 681.0));
    assert_relative_eq!(third.reconstructed, 0.333_170_27, max_relative = 1e-6);
    assert_relative_eq!(third.error, 4.892_349e-4, max_relative = 1e-4);
    assert_eq!(
        third.to_string(),
        format!(
            "i: 3, f: {}, xy: 30 681 {}, i - x: {}",
            third.input,
            third.reconstructed,
            third.absolute_error()
        )
    );
}

#[test]
fn last_trip_collapses() {
    let trip = RoundTrip::run(65535);
    assert_eq!(trip.code, CodePair::new(16.0, 511.0));
    assert!(trip.collapsed());
    assert_eq!(trip.error, 1.0);
}

#[test]
fn reference_error_sum() {
    let report = run_harness(DEFAULT_HARNESS_COUNT);
    assert_eq!(report.trips.len(), 65536);
    assert_relative_eq!(report.error_sum, REFERENCE_ERROR_SUM, max_relative = 1e-4);
    assert_eq!(report.collapsed_count(), 255);
    assert_eq!(report.low_saturated_count(), 1);
    assert_eq!(report.worst().map(|trip| trip.error), Some(1.0));
}

#[test]
fn empty_run() {
    let report = run_harness(0);
    assert!(report.trips.is_empty());
    assert_eq!(report.error_sum, 0.0);
    assert!(report.worst().is_none());
}

#[test]
fn report_survives_a_dump() {
    let report = run_harness(100);
    let path = temp_dir().join(format!("pairfloat-report-{}.bin", std::process::id()));
    dump_data_to_file(&report, &path).unwrap();
    let loaded: HarnessReport = load_data_from_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, report);
}
