use clap::Parser;
use pairfloat::consts::DEFAULT_HARNESS_COUNT;
use pairfloat::harness::run_harness;
use pairfloat::io::dump_data_to_file;
use pairfloat::tracing::start_pairfloat_tracing_subscriber;
use std::path::Path;
use tracing::{info, warn};

/// Round trips 0 and 1/i for i in 1..count through the pair codec and reports the accumulated
/// error (absolute for zero, relative otherwise).
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short, long, default_value_t = DEFAULT_HARNESS_COUNT)]
    /// Number of inputs to round trip, starting from i = 0
    count: u32,

    #[arg(short, long)]
    /// Only print the accumulated error, not one line per input
    quiet: bool,

    #[arg(short, long)]
    /// Optionally write the full report (bincode) to this file
    output: Option<String>,
}

fn main() {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_pairfloat_tracing_subscriber("info");

    // Parse arguments from the command line
    let args = Args::parse();

    let report = run_harness(args.count);
    if !args.quiet {
        for trip in &report.trips {
            println!("{}", trip);
        }
    }

    if let Some(worst) = report.worst() {
        info!("worst round trip: {}", worst);
    }
    let collapsed = report.collapsed_count();
    if collapsed > 0 {
        warn!("{} nonzero inputs reconstructed to zero", collapsed);
    }
    info!(
        "{} inputs landed in the bottom exponent bucket",
        report.low_saturated_count()
    );

    if let Some(output) = &args.output {
        let output_path = Path::new(output);
        info!("dumping report to {:?}", output_path);
        dump_data_to_file(&report, output_path)
            .expect(&*format!("could not write report to {:?}", output_path));
    }

    println!("SX: {}", report.error_sum);
}
