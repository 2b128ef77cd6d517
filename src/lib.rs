//! Benchmark linear search, binary search and binary search tree lookups
//! over generated datasets of doubling size.

pub mod approach;
pub mod bench;
pub mod constants;
pub mod dataset;
mod error;
pub mod experiment;
pub mod generate;
pub mod search;
pub mod targets;
pub mod tree;
pub mod util;

pub use approach::{DataStructure, DataType, SearchAlgorithm, TargetPosition};
pub use bench::{benchmark, benchmark_search, benchmark_with, Timer};
pub use dataset::{Dataset, Element};
pub use error::{Error, Result};
pub use experiment::build_balanced_tree;
pub use generate::generate_dataset;
pub use search::{
    binary_search_iterative, binary_search_recursive, bst_search, linear_search, Container,
    Outcome,
};
pub use targets::select_targets;
pub use tree::Tree;

#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}
