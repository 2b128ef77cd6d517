//! Closed sets of configuration values selecting what gets benchmarked.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The container the targets are searched in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DataStructure {
    UnsortedList,
    SortedList,
    BinarySearchTree,
}

/// The search algorithm being measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    LinearSearch,
    BinarySearchIterative,
    BinarySearchRecursive,
    BstSearch,
}

/// Region of the dataset the targets are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TargetPosition {
    /// First 10% of the elements.
    Beginning,
    /// Middle 10% of the elements.
    Middle,
    /// Last 10% of the elements.
    End,
    /// Anywhere in the dataset.
    Random,
    /// Values guaranteed not to be in the dataset.
    Nonexistent,
}

/// Element type of a generated dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Integers,
    Floats,
    Strings,
}

impl DataStructure {
    pub fn name(self) -> &'static str {
        match self {
            DataStructure::UnsortedList => "unsorted_list",
            DataStructure::SortedList => "sorted_list",
            DataStructure::BinarySearchTree => "binary_search_tree",
        }
    }
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 4] = [
        SearchAlgorithm::LinearSearch,
        SearchAlgorithm::BinarySearchIterative,
        SearchAlgorithm::BinarySearchRecursive,
        SearchAlgorithm::BstSearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::LinearSearch => "linear_search",
            SearchAlgorithm::BinarySearchIterative => "binary_search_iterative",
            SearchAlgorithm::BinarySearchRecursive => "binary_search_recursive",
            SearchAlgorithm::BstSearch => "bst_search",
        }
    }

    /// Whether the algorithm only gives meaningful answers on sorted input.
    pub fn needs_sorted(self) -> bool {
        matches!(
            self,
            SearchAlgorithm::BinarySearchIterative | SearchAlgorithm::BinarySearchRecursive
        )
    }
}

impl TargetPosition {
    pub fn name(self) -> &'static str {
        match self {
            TargetPosition::Beginning => "beginning",
            TargetPosition::Middle => "middle",
            TargetPosition::End => "end",
            TargetPosition::Random => "random",
            TargetPosition::Nonexistent => "nonexistent",
        }
    }
}

impl DataType {
    pub fn name(self) -> &'static str {
        match self {
            DataType::Integers => "integers",
            DataType::Floats => "floats",
            DataType::Strings => "strings",
        }
    }
}

macro_rules! display_by_name {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

display_by_name!(DataStructure, SearchAlgorithm, TargetPosition, DataType);
