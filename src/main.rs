// Wed Jan 28 2026 - Alex

use clap::Parser;
use colored::Colorize;
use polyquad::config::RunConfig;
use polyquad::logging;
use polyquad::orchestration::{report, runner};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Parallel trapezoidal integration of polynomials", long_about = None)]
struct Args {
    /// Problem file: degree, coeffs, interval and integration lines
    input: PathBuf,

    /// Worker count; defaults to one per logical CPU
    #[arg(short, long)]
    workers: Option<usize>,

    /// Write the run summary as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    let mut config = RunConfig::new(args.input);
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    if let Some(output) = args.output {
        config = config.with_output_file(output);
    }

    let start_time = Instant::now();

    let summary = match runner::run(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    println!();
    report::print_summary(&summary);

    if let Some(path) = &config.output_file {
        if let Err(e) = report::save_summary(&summary, path) {
            eprintln!("{} Failed to save summary: {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
        println!("{} Summary saved to: {}", "[+]".green(), path.display());
    }

    let elapsed = start_time.elapsed();
    println!();
    println!(
        "{} Run complete in {:.2}s",
        "[+]".green(),
        elapsed.as_secs_f64()
    );
}
