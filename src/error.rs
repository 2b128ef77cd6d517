use crate::approach::{DataStructure, DataType, SearchAlgorithm};

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations and I/O failures surfaced by the harness.
///
/// Empty inputs are never errors: they produce empty target lists and
/// not-found outcomes instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the repetition count must be at least 1")]
    ZeroRepetitions,

    #[error("expected a dataset of {expected}, got {found}")]
    DataTypeMismatch { expected: DataType, found: DataType },

    #[error("no {0} value above the dataset maximum is representable")]
    NoAbsentValue(DataType),

    #[error("{algorithm} cannot search a {container}")]
    IncompatibleContainer {
        algorithm: SearchAlgorithm,
        container: &'static str,
    },

    #[error("{algorithm} requires a {required}, got {structure}")]
    InvalidConfig {
        algorithm: SearchAlgorithm,
        structure: DataStructure,
        required: &'static str,
    },

    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
