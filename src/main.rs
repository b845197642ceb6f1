mod element;
mod error;
mod forward;
mod instance;
mod multiplicity;
mod report;
mod table;
mod witness;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use element::MalformedPolicy;
use error::SolveError;
use instance::{Limits, SsumInstance};
use report::Report;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Subset-sum counter and minimum-size witness finder", long_about = None)]
#[command(
    after_help = "Input: whitespace separated <weight> <name> pairs, e.g.\n  12 alice\n  9  bob\n  22 cathy\n  12 doug\n\nExample:\n  ./ssum 21 < people.txt"
)]
struct Args {
    /// Target sum
    target: u64,

    /// Read elements from this file instead of standard input
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Fail on a malformed pair instead of ignoring it and everything after it
    #[arg(long)]
    strict: bool,

    /// Memory budget for the DP tables, in MiB
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..), default_value = "1024")]
    max_table_mib: u64,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // Command line parsing, exits with status 2 on a usage error
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    match run(&args) {
        Ok(report) => {
            print!("{}", report);
            if report.feasible() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            log::error!("{}", e);
            e.exit_code()
        }
    }
}

fn run(args: &Args) -> Result<Report, SolveError> {
    let policy = if args.strict {
        MalformedPolicy::Reject
    } else {
        MalformedPolicy::Truncate
    };

    let pairs = match &args.input {
        Some(path) => element::read_elements_from_file(path, policy)?,
        None => element::read_elements(io::stdin().lock(), policy)?,
    };

    let limits = Limits {
        max_table_bytes: args.max_table_mib.saturating_mul(1 << 20),
    };
    let mut ssi = SsumInstance::with_limits(limits);
    ssi.load_elements(pairs);
    ssi.solve(args.target)?;

    // a successful solve always leaves a solved target behind
    Ok(Report::new(&ssi).unwrap_or_else(|| unreachable!("no solved target after solve")))
}
