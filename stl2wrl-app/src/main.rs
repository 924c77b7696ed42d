//! stl2wrl
//!
//! Converts an ASCII STL file into a VRML 2.0 (`.wrl`) scene next to it.
//!
//! ```text
//! stl2wrl part.stl 25.4        # mm -> inch, writes part.wrl
//! stl2wrl part.stl 1 -o out.wrl
//! ```

mod app;
mod errors;
mod paths;

use app::{ConvertJob, LoggingConfig};
use clap::Parser;
use std::path::PathBuf;
use stl2wrl::ScalingFactor;

/// stl2wrl - ASCII STL to VRML 2.0 converter
#[derive(Parser, Debug)]
#[command(name = "stl2wrl")]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Path to the ASCII STL file to convert
    stl: PathBuf,

    /// Divisor applied to every vertex coordinate (e.g. 25.4 for mm to inch)
    scaling: ScalingFactor,

    /// Output path (defaults to the STL name with a .wrl extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    LoggingConfig {
        level: args.log_level,
    }
    .init();

    let mut job = ConvertJob::new(args.stl, args.scaling);
    if let Some(output) = args.output {
        job = job.with_output(output);
    }

    if let Err(e) = job.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    println!("Conversion complete!");
}
