//! Running a configured benchmark over datasets of doubling size.

use std::path::Path;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::approach::{DataStructure, DataType, SearchAlgorithm, TargetPosition};
use crate::bench::{bench_scheme, Timer};
use crate::constants::*;
use crate::dataset::{is_sorted, Dataset, Element};
use crate::error::{Error, Result};
use crate::generate::generate_dataset;
use crate::search::Container;
use crate::targets::select_targets;
use crate::tree::Tree;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Config {
    pub data_structure: DataStructure,
    pub search_algorithm: SearchAlgorithm,
    pub data_type: DataType,
    pub target_position: TargetPosition,
    pub start_size: usize,
    pub runs: usize,
    pub searches: usize,
    pub repetitions: usize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_structure: DataStructure::UnsortedList,
            search_algorithm: SearchAlgorithm::LinearSearch,
            data_type: DataType::Integers,
            target_position: TargetPosition::Random,
            start_size: DEFAULT_START_SIZE,
            runs: DEFAULT_RUNS,
            searches: DEFAULT_SEARCHES,
            repetitions: REPETITIONS,
            seed: None,
        }
    }
}

impl Config {
    /// Reject algorithm and data structure combinations that cannot work.
    pub fn validate(&self) -> Result<()> {
        let invalid = |required| {
            Err(Error::InvalidConfig {
                algorithm: self.search_algorithm,
                structure: self.data_structure,
                required,
            })
        };
        match (self.search_algorithm, self.data_structure) {
            (SearchAlgorithm::BstSearch, DataStructure::BinarySearchTree) => {}
            (SearchAlgorithm::BstSearch, _) => return invalid("binary_search_tree"),
            (_, DataStructure::BinarySearchTree) => return invalid("list"),
            (a, DataStructure::UnsortedList) if a.needs_sorted() => {
                return invalid("sorted_list")
            }
            _ => {}
        }
        Timer::new(self.repetitions)?;
        Ok(())
    }

    /// Whether generated datasets must be sorted before use.
    pub fn needs_sorted(&self) -> bool {
        self.data_structure == DataStructure::SortedList || self.search_algorithm.needs_sorted()
    }

    /// Dataset sizes of successive runs.
    pub fn sizes(&self) -> Vec<usize> {
        std::iter::successors(Some(self.start_size), |s| s.checked_mul(DOUBLING_FACTOR))
            .take(self.runs)
            .collect()
    }
}

/// Measurement of one dataset size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunResult {
    /// 1-based run number.
    pub run: usize,
    pub size: usize,
    /// Average duration of one pass over all targets.
    pub seconds: f64,
    pub targets: usize,
    /// Number of targets present in the dataset.
    pub found: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub min: f64,
    pub min_size: usize,
    pub max: f64,
    pub max_size: usize,
    pub average: f64,
    pub median: f64,
}

impl Summary {
    /// `None` when there are no runs.
    pub fn new(runs: &[RunResult]) -> Option<Summary> {
        let min = runs.iter().min_by(|a, b| a.seconds.total_cmp(&b.seconds))?;
        // `max_by` keeps the last of equal maxima; report the first, like `min_by`.
        let max = runs.iter().rev().max_by(|a, b| a.seconds.total_cmp(&b.seconds))?;
        let average = runs.iter().map(|r| r.seconds).sum::<f64>() / runs.len() as f64;
        let sorted = runs
            .iter()
            .map(|r| r.seconds)
            .sorted_by(f64::total_cmp)
            .collect_vec();
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        };
        Some(Summary {
            min: min.seconds,
            min_size: min.size,
            max: max.seconds,
            max_size: max.size,
            average,
            median,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub config: Config,
    pub runs: Vec<RunResult>,
    pub summary: Option<Summary>,
}

impl Report {
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let f = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(f, self)?;
        info!("Saved results to {}", path.display());
        Ok(())
    }
}

/// Run every configured size, calling `on_run` as soon as each one finishes.
pub fn run(
    config: &Config,
    rng: &mut impl Rng,
    mut on_run: impl FnMut(&RunResult),
) -> Result<Report> {
    config.validate()?;
    let timer = Timer::new(config.repetitions)?;
    let mut runs = vec![];
    for (i, size) in config.sizes().into_iter().enumerate() {
        info!("Benchmarking size {size}");
        let start = Instant::now();
        let dataset = generate_dataset(size, config.data_type, config.needs_sorted(), rng);
        info!("Generating took {:?}", start.elapsed());
        debug_assert!(!config.needs_sorted() || dataset.is_sorted());

        let (seconds, targets, found) = match dataset {
            Dataset::Integers(vals) => run_one(config, &timer, &vals, rng)?,
            Dataset::Floats(vals) => run_one(config, &timer, &vals, rng)?,
            Dataset::Strings(vals) => run_one(config, &timer, &vals, rng)?,
        };
        let result = RunResult {
            run: i + 1,
            size,
            seconds,
            targets,
            found,
        };
        on_run(&result);
        runs.push(result);
    }
    let summary = Summary::new(&runs);
    Ok(Report {
        config: config.clone(),
        runs,
        summary,
    })
}

/// Returns the measured seconds, the number of targets and how many were found.
fn run_one<T: Element>(
    config: &Config,
    timer: &Timer,
    vals: &[T],
    rng: &mut impl Rng,
) -> Result<(f64, usize, usize)> {
    let targets = select_targets(
        vals,
        config.target_position,
        config.searches,
        config.data_type,
        rng,
    )?;
    let tree;
    let container = match config.data_structure {
        DataStructure::BinarySearchTree => {
            let start = Instant::now();
            tree = build_balanced_tree(vals);
            info!("Building the tree took {:?}", start.elapsed());
            Container::Tree(&tree)
        }
        DataStructure::UnsortedList | DataStructure::SortedList => Container::List(vals),
    };
    let seconds = bench_scheme(timer, config.search_algorithm, container, &targets)?;
    // Outside the timed region.
    let found = targets
        .iter()
        .map(|t| config.search_algorithm.search(container, t))
        .process_results(|outcomes| outcomes.filter(|o| o.found).count())?;
    debug!("Found {found} of {} targets", targets.len());
    Ok((seconds, targets.len(), found))
}

/// Build a balanced tree from a sorted copy of `vals`.
pub fn build_balanced_tree<T: Element>(vals: &[T]) -> Tree<T> {
    if is_sorted(vals) {
        return Tree::build_balanced(vals);
    }
    let mut sorted = vals.to_vec();
    T::sort(&mut sorted);
    Tree::build_balanced(&sorted)
}

/// Time every algorithm on its natural container for one dataset of sorted
/// values: the three list searches on the list and BST search on a balanced
/// tree built from it.
pub fn compare<T: Element>(
    vals: &[T],
    position: TargetPosition,
    searches: usize,
    timer: &Timer,
    rng: &mut impl Rng,
) -> Result<Vec<(SearchAlgorithm, f64)>> {
    debug_assert!(is_sorted(vals));
    let targets = select_targets(vals, position, searches, T::DATA_TYPE, rng)?;
    let tree = Tree::build_balanced(vals);
    SearchAlgorithm::ALL
        .into_iter()
        .map(|algorithm| -> Result<(SearchAlgorithm, f64)> {
            let container = match algorithm {
                SearchAlgorithm::BstSearch => Container::Tree(&tree),
                _ => Container::List(vals),
            };
            Ok((algorithm, bench_scheme(timer, algorithm, container, &targets)?))
        })
        .collect()
}
