use clap::Parser;
use pairfloat::byte_float::ByteFloat;
use pairfloat::tracing::start_pairfloat_tracing_subscriber;
use tracing::info;

/// Prints the value of every 8-bit code under the byte float decoding.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short, long, default_value_t = 0)]
    /// First code to print
    start: u16,

    #[arg(short, long, default_value_t = 255)]
    /// Last code to print (inclusive)
    end: u16,
}

fn main() {
    start_pairfloat_tracing_subscriber("info");
    let args = Args::parse();

    info!("decoding codes {} to {}", args.start, args.end);
    for code in args.start..=args.end {
        let decoded = ByteFloat::from_code(code as f32);
        println!(
            "i: {}, e: {}, m: {}: {}",
            code,
            decoded.exponent,
            decoded.mantissa,
            decoded.value()
        );
    }
}
