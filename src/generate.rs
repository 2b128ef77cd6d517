use log::debug;
use rand::Rng;

use crate::approach::DataType;
use crate::dataset::{Dataset, Element};

/// Generate `n` random values, sorted ascending if `sort` is set.
pub fn gen_vals<T: Element>(n: usize, sort: bool, rng: &mut impl Rng) -> Vec<T> {
    let mut vals: Vec<T> = (0..n).map(|_| T::random(rng)).collect();
    if sort {
        T::sort(&mut vals);
    }
    vals
}

pub fn generate_dataset(size: usize, data_type: DataType, sort: bool, rng: &mut impl Rng) -> Dataset {
    debug!("Generating {size} {data_type} (sorted: {sort})");
    match data_type {
        DataType::Integers => Dataset::Integers(gen_vals(size, sort, rng)),
        DataType::Floats => Dataset::Floats(gen_vals(size, sort, rng)),
        DataType::Strings => Dataset::Strings(gen_vals(size, sort, rng)),
    }
}
