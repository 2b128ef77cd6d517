//! Choosing the values to search for.
//!
//! Existing targets are sampled with replacement from a region of the dataset.
//! Region bounds use integer arithmetic: for `n` elements, BEGINNING is
//! `0..ceil(n/10)`, MIDDLE is `floor(0.45n)..ceil(0.55n)`, END is
//! `floor(0.9n)..n` and RANDOM is `0..n`.

use std::ops::Range;

use rand::Rng;

use crate::approach::{DataType, TargetPosition};
use crate::dataset::Element;
use crate::error::{Error, Result};

/// Index range targets at `position` are drawn from, or `None` for NONEXISTENT.
pub fn target_range(len: usize, position: TargetPosition) -> Option<Range<usize>> {
    let range = match position {
        TargetPosition::Beginning => 0..len.div_ceil(10).max(1),
        TargetPosition::Middle => len * 45 / 100..(len * 55).div_ceil(100),
        TargetPosition::End => len * 9 / 10..len,
        TargetPosition::Random => 0..len,
        TargetPosition::Nonexistent => return None,
    };
    Some(range.start.min(len)..range.end.min(len))
}

/// Select `count` targets at `position`.
///
/// An empty dataset yields no targets, except for NONEXISTENT, which still
/// synthesizes `count` values. `data_type` must match the element type.
pub fn select_targets<T: Element>(
    vals: &[T],
    position: TargetPosition,
    count: usize,
    data_type: DataType,
    rng: &mut impl Rng,
) -> Result<Vec<T>> {
    if data_type != T::DATA_TYPE {
        return Err(Error::DataTypeMismatch {
            expected: data_type,
            found: T::DATA_TYPE,
        });
    }
    let Some(range) = target_range(vals.len(), position) else {
        return T::absent(vals, count, rng);
    };
    let segment = &vals[range];
    if segment.is_empty() {
        return Ok(vec![]);
    }
    Ok((0..count)
        .map(|_| segment[rng.gen_range(0..segment.len())].clone())
        .collect())
}
