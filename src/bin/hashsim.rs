use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use hashsim::config::DEFAULT_MULTIPLIERS;
use hashsim::input::read_keys;
use hashsim::logger::initialize_logger;
use hashsim::{CharPolicy, SweepConfig};

/// Count collisions and probes of the H1/H2/H3 name hashes under linear probing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one key per line
    file: PathBuf,

    /// Capacity as a multiple of the key count (repeatable)
    #[arg(short, long = "multiplier")]
    multipliers: Vec<usize>,

    /// Explicit table capacity (repeatable); overrides multipliers
    #[arg(short, long = "capacity")]
    capacities: Vec<usize>,

    /// Run the capacity x hash function combinations in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Hash H2 over characters exactly as given instead of uppercasing them first
    #[arg(long)]
    raw_h2: bool,
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    let keys = match read_keys(&args.file) {
        Ok(keys) => keys,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(1);
        }
    };

    let multipliers = if args.multipliers.is_empty() {
        DEFAULT_MULTIPLIERS.to_vec()
    } else {
        args.multipliers
    };
    let policy = if args.raw_h2 {
        CharPolicy::Raw
    } else {
        CharPolicy::Normalized
    };
    let config = SweepConfig::new()
        .with_multipliers(multipliers)
        .with_capacities(args.capacities)
        .with_parallel(args.parallel)
        .with_char_policy(policy);

    let reports = match config.run(&keys) {
        Ok(reports) => reports,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(1);
        }
    };

    let source = args.file.display().to_string();
    let mut failed = 0;
    for report in &reports {
        println!();
        print!("{}", report.display(&source));
        failed += report.failures().count();
    }

    if failed > 0 {
        error!("{} simulation run(s) failed", failed);
        return ExitCode::from(2);
    }
    info!("{} capacities simulated", reports.len());
    ExitCode::SUCCESS
}
