//! Numerical defaults shared by generation, selection, measurement and the CLI.

/// Size of the first dataset.
pub const DEFAULT_START_SIZE: usize = 1000;
/// Number of doubling runs.
pub const DEFAULT_RUNS: usize = 5;
/// Number of targets searched per run.
pub const DEFAULT_SEARCHES: usize = 100;
/// Factor by which the dataset size grows between runs.
pub const DOUBLING_FACTOR: usize = 2;

/// Inclusive bounds of generated integers.
pub const RANDOM_INT_MIN: i64 = 1;
pub const RANDOM_INT_MAX: i64 = 10000;
/// Half-open bounds of generated floats.
pub const RANDOM_FLOAT_MIN: f64 = 0.0;
pub const RANDOM_FLOAT_MAX: f64 = 10000.0;
/// Length of generated strings.
pub const STRING_LENGTH: usize = 10;

/// Decimal places used when printing durations in seconds.
pub const DECIMAL_PLACES: usize = 6;

/// Number of times a measured operation is repeated before averaging.
pub const REPETITIONS: usize = 1000;
