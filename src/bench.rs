//! Amortized timing of fast operations.
//!
//! A single search over a small dataset finishes well below the resolution of
//! the clock, so the operation is repeated `repetitions` times back to back,
//! the whole loop is timed once and the total is divided by the repetition
//! count.

use std::hint::black_box;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use log::debug;

use crate::approach::SearchAlgorithm;
use crate::constants::REPETITIONS;
use crate::error::{Error, Result};
use crate::search::{
    binary_search_iterative, binary_search_recursive, bst_search, linear_search, Container,
};

const DEFAULT_REPETITIONS: NonZeroUsize = match NonZeroUsize::new(REPETITIONS) {
    Some(n) => n,
    None => panic!("REPETITIONS must be non-zero"),
};

/// Total time of a measured loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub total: Duration,
    pub repetitions: NonZeroUsize,
}

impl Measurement {
    pub fn average(&self) -> Duration {
        self.total.div_f64(self.repetitions.get() as f64)
    }

    /// Average duration of one repetition, in seconds.
    pub fn seconds(&self) -> f64 {
        self.total.as_secs_f64() / self.repetitions.get() as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    repetitions: NonZeroUsize,
}

impl Default for Timer {
    fn default() -> Self {
        Timer {
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl Timer {
    pub fn new(repetitions: usize) -> Result<Self> {
        NonZeroUsize::new(repetitions)
            .map(|repetitions| Timer { repetitions })
            .ok_or(Error::ZeroRepetitions)
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions.get()
    }

    /// Run `op` once per repetition and time the whole loop.
    pub fn time<R>(&self, mut op: impl FnMut() -> R) -> Measurement {
        let start = Instant::now();
        for _ in 0..self.repetitions.get() {
            black_box(op());
        }
        let total = start.elapsed();
        Measurement {
            total,
            repetitions: self.repetitions,
        }
    }

    /// Average time of one pass searching every target once, in list order.
    pub fn time_search<C: ?Sized, T, R>(
        &self,
        search: impl Fn(&C, &T) -> R,
        dataset: &C,
        targets: &[T],
    ) -> f64 {
        self.time(|| {
            for target in targets {
                black_box(search(black_box(dataset), target));
            }
        })
        .seconds()
    }
}

/// Average time of `op` over `REPETITIONS` runs, in seconds.
pub fn benchmark<R>(op: impl FnMut() -> R) -> f64 {
    Timer::default().time(op).seconds()
}

/// Like `benchmark`, with an explicit repetition count.
pub fn benchmark_with<R>(op: impl FnMut() -> R, repetitions: usize) -> Result<f64> {
    Ok(Timer::new(repetitions)?.time(op).seconds())
}

/// Average time of one full pass over `targets`, in seconds.
pub fn benchmark_search<C: ?Sized, T, R>(
    search: impl Fn(&C, &T) -> R,
    dataset: &C,
    targets: &[T],
) -> f64 {
    Timer::default().time_search(search, dataset, targets)
}

/// Time `algorithm` on `container`. Dispatch happens once, outside the timed loop.
pub fn bench_scheme<T: PartialOrd>(
    timer: &Timer,
    algorithm: SearchAlgorithm,
    container: Container<'_, T>,
    targets: &[T],
) -> Result<f64> {
    debug!(
        "Benching {algorithm} on a {} of {} values with {} targets",
        container.kind(),
        container.len(),
        targets.len()
    );
    Ok(match (algorithm, container) {
        (SearchAlgorithm::LinearSearch, Container::List(vals)) => {
            timer.time_search(linear_search, vals, targets)
        }
        (SearchAlgorithm::BinarySearchIterative, Container::List(vals)) => {
            timer.time_search(binary_search_iterative, vals, targets)
        }
        (SearchAlgorithm::BinarySearchRecursive, Container::List(vals)) => {
            timer.time_search(binary_search_recursive, vals, targets)
        }
        (SearchAlgorithm::BstSearch, Container::Tree(tree)) => {
            timer.time_search(bst_search, tree, targets)
        }
        (algorithm, container) => return Err(algorithm.incompatible(container)),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::Outcome;
    use crate::tree::Tree;
    use std::cell::Cell;

    #[test]
    fn zero_repetitions() {
        assert!(matches!(Timer::new(0), Err(Error::ZeroRepetitions)));
        assert_eq!(Timer::new(3).unwrap().repetitions(), 3);
        assert_eq!(Timer::default().repetitions(), REPETITIONS);
    }

    #[test]
    fn op_runs_once_per_repetition() {
        let calls = Cell::new(0);
        let m = Timer::new(25).unwrap().time(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 25);
        assert!(m.seconds() >= 0.0);
        assert!(m.average() <= m.total);
    }

    #[test]
    fn one_search_per_target_per_pass() {
        let vals = vec![4, 8, 15, 16, 23, 42];
        let targets = [15, 99, 4];
        let calls = Cell::new(0);
        let counted = |vals: &[i32], q: &i32| {
            calls.set(calls.get() + 1);
            linear_search(vals, q)
        };
        let secs = Timer::new(10)
            .unwrap()
            .time_search(counted, &vals[..], &targets);
        assert_eq!(calls.get(), targets.len() * 10);
        assert!(secs >= 0.0);

        calls.set(0);
        let secs = benchmark_search(counted, &vals[..], &targets);
        assert_eq!(calls.get(), targets.len() * REPETITIONS);
        assert!(secs >= 0.0);
    }

    #[test]
    fn empty_targets() {
        let vals = [1, 2, 3];
        let secs = benchmark_search(linear_search, &vals[..], &[]);
        assert!(secs >= 0.0);
    }

    #[test]
    fn sleeping_op_is_measured() {
        let m = Timer::new(2)
            .unwrap()
            .time(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(m.total >= Duration::from_millis(10));
        assert!(m.seconds() >= 0.005);
    }

    #[test]
    fn scheme_dispatch() {
        let vals = [1, 3, 5, 7, 9];
        let tree = Tree::build_balanced(&vals);
        let timer = Timer::new(5).unwrap();
        let list = Container::List(&vals[..]);
        let targets = [3, 4];
        for algorithm in [
            SearchAlgorithm::LinearSearch,
            SearchAlgorithm::BinarySearchIterative,
            SearchAlgorithm::BinarySearchRecursive,
        ] {
            assert!(bench_scheme(&timer, algorithm, list, &targets).unwrap() >= 0.0);
            assert!(bench_scheme(&timer, algorithm, Container::Tree(&tree), &targets).is_err());
        }
        let t = bench_scheme(&timer, SearchAlgorithm::BstSearch, Container::Tree(&tree), &targets);
        assert!(t.unwrap() >= 0.0);
        assert!(bench_scheme(&timer, SearchAlgorithm::BstSearch, list, &targets).is_err());
        assert_eq!(bst_search(&tree, &4), Outcome::MISSING);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn average_of_huge_repetition_counts() {
        let m = Measurement {
            total: Duration::from_secs(1 << 32),
            repetitions: NonZeroUsize::new(1 << 32).unwrap(),
        };
        assert_eq!(m.average(), Duration::from_secs(1));
        let m = Measurement {
            total: Duration::from_secs(3 << 32),
            repetitions: NonZeroUsize::new((1 << 32) + 1).unwrap(),
        };
        assert!(m.average() < Duration::from_secs(3));
        assert!(m.average() > Duration::from_millis(2999));
    }

    #[test]
    fn explicit_repetitions() {
        let calls = Cell::new(0usize);
        let secs = benchmark_with(|| calls.set(calls.get() + 1), 7).unwrap();
        assert_eq!(calls.get(), 7);
        assert!(secs >= 0.0);
        // Rejected before the op ever runs.
        assert!(matches!(
            benchmark_with(|| calls.set(calls.get() + 1), 0),
            Err(Error::ZeroRepetitions)
        ));
        assert_eq!(calls.get(), 7);
    }

    #[test]
    fn benchmark_default_repetitions() {
        let calls = Cell::new(0usize);
        let secs = benchmark(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), REPETITIONS);
        assert!(secs >= 0.0);
    }
}
