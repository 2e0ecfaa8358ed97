use crate::codec::{compose, decompose, CodePair};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// The value the harness feeds the codec at iteration `index`: zero first, then `1 / index`.
pub fn harness_input(index: u32) -> f32 {
    if index == 0 {
        0.0
    } else {
        (1.0 / f64::from(index)) as f32
    }
}

/// Absolute error for a zero input, relative error otherwise.
pub fn round_trip_error(input: f32, reconstructed: f32) -> f32 {
    let difference = (input - reconstructed).abs();
    if input == 0.0 {
        difference
    } else {
        difference / input
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundTrip {
    pub index: u32,
    pub input: f32,
    pub code: CodePair,
    pub reconstructed: f32,
    pub error: f32,
}

impl RoundTrip {
    pub fn run(index: u32) -> Self {
        let input = harness_input(index);
        let code = decompose(input).floor();
        let reconstructed = compose(code.exponent, code.mantissa);
        RoundTrip {
            index,
            input,
            code,
            reconstructed,
            error: round_trip_error(input, reconstructed),
        }
    }

    pub fn absolute_error(&self) -> f32 {
        (self.input - self.reconstructed).abs()
    }

    /// A nonzero input that came back as zero
    pub fn collapsed(&self) -> bool {
        self.input != 0.0 && self.reconstructed == 0.0
    }
}

impl fmt::Display for RoundTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "i: {}, f: {}, xy: {} {} {}, i - x: {}",
            self.index,
            self.input,
            self.code.exponent,
            self.code.mantissa,
            self.reconstructed,
            self.absolute_error()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessReport {
    pub trips: Vec<RoundTrip>,
    /// Sum of every trip's error, accumulated in iteration order
    pub error_sum: f32,
}

impl HarnessReport {
    pub fn worst(&self) -> Option<&RoundTrip> {
        self.trips
            .iter()
            .max_by(|a, b| a.error.total_cmp(&b.error))
    }

    pub fn collapsed_count(&self) -> usize {
        self.trips.iter().filter(|trip| trip.collapsed()).count()
    }

    pub fn low_saturated_count(&self) -> usize {
        self.trips
            .iter()
            .filter(|trip| trip.code.is_low_saturated())
            .count()
    }
}

/// Round trips `harness_input(i)` for every `i` in `0..count`.
pub fn run_harness(count: u32) -> HarnessReport {
    info!("running {} round trips", count);
    let trips = (0..count).map(RoundTrip::run).collect_vec();
    let error_sum = trips.iter().fold(0.0_f32, |sum, trip| sum + trip.error);
    debug!("accumulated error {}", error_sum);
    HarnessReport { trips, error_sum }
}
