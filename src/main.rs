use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use search_bench::constants::*;
use search_bench::experiment::{self, Config, Report};
use search_bench::util::init_logging;
use search_bench::{DataStructure, DataType, SearchAlgorithm, TargetPosition};

/// Benchmark search algorithms over datasets of doubling size.
#[derive(Parser)]
#[clap(name = "search-bench", version)]
struct Args {
    #[clap(short, long, value_enum, default_value_t = DataStructure::UnsortedList)]
    data_structure: DataStructure,
    #[clap(short, long, value_enum, default_value_t = SearchAlgorithm::LinearSearch)]
    search_algorithm: SearchAlgorithm,
    #[clap(short = 't', long, value_enum, default_value_t = DataType::Integers)]
    data_type: DataType,
    #[clap(short = 'p', long, value_enum, default_value_t = TargetPosition::Random)]
    target_position: TargetPosition,

    /// Size of the first dataset; every following run doubles it.
    #[clap(long, default_value_t = DEFAULT_START_SIZE)]
    start_size: usize,
    #[clap(long, default_value_t = DEFAULT_RUNS)]
    runs: usize,
    /// Targets searched per pass.
    #[clap(long, default_value_t = DEFAULT_SEARCHES)]
    searches: usize,
    /// Passes timed per run.
    #[clap(long, default_value_t = REPETITIONS)]
    repetitions: usize,
    #[clap(long)]
    seed: Option<u64>,

    /// Write configuration, runs and summary as JSON.
    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            data_structure: self.data_structure,
            search_algorithm: self.search_algorithm,
            data_type: self.data_type,
            target_position: self.target_position,
            start_size: self.start_size,
            runs: self.runs,
            searches: self.searches,
            repetitions: self.repetitions,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> search_bench::Result<()> {
    init_logging(1 + args.verbose as usize, args.quiet)?;
    let config = args.config();
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    println!("Search Algorithm Benchmarking Tool\n");
    println!("Data structure: {}", config.data_structure);
    println!("Search algorithm: {}", config.search_algorithm);
    println!("Data type: {}", config.data_type);
    println!("Target position: {}", config.target_position);
    println!("Number of runs: {}", config.runs);
    println!("Searches per run: {}\n", config.searches);

    let report = experiment::run(&config, &mut rng, |r| {
        println!(
            "Run {:2}/{}: {} on {} (size {:8}) completed in {:.*} seconds",
            r.run,
            config.runs,
            config.search_algorithm,
            config.data_structure,
            r.size,
            DECIMAL_PLACES,
            r.seconds
        );
    })?;
    print_summary(&report);

    if let Some(path) = &args.output {
        report.save(path)?;
    }
    Ok(())
}

fn print_summary(report: &Report) {
    let Some(s) = &report.summary else {
        return;
    };
    const P: usize = DECIMAL_PLACES;
    println!("\nBenchmark Summary:");
    println!("Minimum time: {:.P$}s (size {})", s.min, s.min_size);
    println!("Maximum time: {:.P$}s (size {})", s.max, s.max_size);
    println!("Average time: {:.P$}s", s.average);
    println!("Median time:  {:.P$}s", s.median);
}
