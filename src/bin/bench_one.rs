//! Time all four algorithms side by side on sorted datasets of power-of-two sizes.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use search_bench::bench::Timer;
use search_bench::constants::{DEFAULT_SEARCHES, REPETITIONS};
use search_bench::experiment::compare;
use search_bench::generate::gen_vals;
use search_bench::util::{time, INIT_TRACE};
use search_bench::{DataType, Element, SearchAlgorithm, TargetPosition};

#[derive(Parser)]
struct Args {
    /// log2 of the smallest size.
    #[clap(short, long, default_value_t = 4)]
    from: u32,
    /// log2 of the largest size.
    #[clap(long, default_value_t = 16)]
    to: u32,
    #[clap(short = 't', long, value_enum, default_value_t = DataType::Integers)]
    data_type: DataType,
    #[clap(short = 'p', long, value_enum, default_value_t = TargetPosition::Random)]
    target_position: TargetPosition,
    #[clap(long, default_value_t = DEFAULT_SEARCHES)]
    searches: usize,
    #[clap(long, default_value_t = REPETITIONS)]
    repetitions: usize,
    #[clap(long, default_value_t = 31415)]
    seed: u64,
}

fn main() -> search_bench::Result<()> {
    *INIT_TRACE;
    let args = Args::parse();
    let timer = Timer::new(args.repetitions)?;
    let rng = &mut ChaCha8Rng::seed_from_u64(args.seed);

    print!("{:>10} {:>10}", "n", "bytes");
    for algorithm in SearchAlgorithm::ALL {
        print!(" {:>24}", algorithm.name());
    }
    println!();

    for b in args.from..=args.to {
        let size = 1usize << b;
        let row = time(&format!("n = {size}"), || match args.data_type {
            DataType::Integers => compare_row::<i64>(size, &args, &timer, rng),
            DataType::Floats => compare_row::<f64>(size, &args, &timer, rng),
            DataType::Strings => compare_row::<String>(size, &args, &timer, rng),
        })?;
        println!("{row}");
    }
    Ok(())
}

fn compare_row<T: Element>(
    size: usize,
    args: &Args,
    timer: &Timer,
    rng: &mut ChaCha8Rng,
) -> search_bench::Result<String> {
    let vals: Vec<T> = gen_vals(size, true, rng);
    let times = compare(&vals, args.target_position, args.searches, timer, rng)?;
    let bytes = size::Size::from_bytes(T::footprint(&vals));
    let mut line = format!("{size:>10} {:>10}", format!("{bytes}"));
    for (_, seconds) in times {
        // Per target, in nanoseconds.
        let ns = seconds * 1e9 / args.searches.max(1) as f64;
        line += &format!(" {ns:>22.2}ns");
    }
    Ok(line)
}
