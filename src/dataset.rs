//! Homogeneous datasets and the element types they can hold.

use std::fmt::Debug;

use itertools::Itertools;
use rand::distributions::Alphanumeric;
use rand::Rng;
use rdst::RadixSort;
use serde::Serialize;

use crate::approach::DataType;
use crate::constants::*;
use crate::error::{Error, Result};

/// A value type the harness can generate, sort and search.
pub trait Element: PartialOrd + Clone + Debug + Serialize {
    const DATA_TYPE: DataType;

    /// Draw one value from the generation range.
    fn random(rng: &mut impl Rng) -> Self;

    /// Sort ascending in place.
    fn sort(vals: &mut [Self]);

    /// `count` values that compare unequal to every element of `vals`.
    fn absent(vals: &[Self], count: usize, rng: &mut impl Rng) -> Result<Vec<Self>>;

    /// Bytes occupied by `vals`, including heap data owned by each element.
    fn footprint(vals: &[Self]) -> usize {
        std::mem::size_of_val(vals)
    }
}

impl Element for i64 {
    const DATA_TYPE: DataType = DataType::Integers;

    fn random(rng: &mut impl Rng) -> Self {
        rng.gen_range(RANDOM_INT_MIN..=RANDOM_INT_MAX)
    }

    fn sort(vals: &mut [Self]) {
        vals.radix_sort_unstable();
    }

    fn absent(vals: &[Self], count: usize, _rng: &mut impl Rng) -> Result<Vec<Self>> {
        let max = vals.iter().copied().max().unwrap_or(RANDOM_INT_MAX);
        (1..=count as i64)
            .map(|i| max.checked_add(i).ok_or(Error::NoAbsentValue(Self::DATA_TYPE)))
            .collect()
    }
}

impl Element for f64 {
    const DATA_TYPE: DataType = DataType::Floats;

    fn random(rng: &mut impl Rng) -> Self {
        rng.gen_range(RANDOM_FLOAT_MIN..RANDOM_FLOAT_MAX)
    }

    fn sort(vals: &mut [Self]) {
        vals.radix_sort_unstable();
    }

    // Above 2^53, `max + i` rounds back down, so fall back to the next
    // representable value.
    fn absent(vals: &[Self], count: usize, _rng: &mut impl Rng) -> Result<Vec<Self>> {
        let max = vals.iter().copied().reduce(f64::max).unwrap_or(RANDOM_FLOAT_MAX);
        let mut prev = max;
        let mut out = Vec::with_capacity(count);
        for i in 1..=count {
            let mut v = max + i as f64;
            if v <= prev {
                v = next_up(prev);
            }
            if !v.is_finite() {
                return Err(Error::NoAbsentValue(Self::DATA_TYPE));
            }
            out.push(v);
            prev = v;
        }
        Ok(out)
    }
}

impl Element for String {
    const DATA_TYPE: DataType = DataType::Strings;

    fn random(rng: &mut impl Rng) -> Self {
        random_string(STRING_LENGTH, rng)
    }

    fn sort(vals: &mut [Self]) {
        vals.sort_unstable();
    }

    /// Strings longer than every element, so they cannot collide.
    fn absent(vals: &[Self], count: usize, rng: &mut impl Rng) -> Result<Vec<Self>> {
        let len = vals
            .iter()
            .map(|s| s.len())
            .max()
            .map_or(STRING_LENGTH + 10, |l| l + 5);
        Ok((0..count).map(|_| random_string(len, rng)).collect())
    }

    fn footprint(vals: &[Self]) -> usize {
        vals.iter()
            .map(|s| std::mem::size_of::<String>() + s.len())
            .sum()
    }
}

/// Smallest `f64` greater than `x`. NaN and +inf map to themselves.
fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    f64::from_bits(if x > 0.0 { bits + 1 } else { bits - 1 })
}

/// Generate a random ASCII letters-and-digits string of length `n`.
pub fn random_string(n: usize, rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(n)
        .map(char::from)
        .collect()
}

pub fn is_sorted<T: PartialOrd>(vals: &[T]) -> bool {
    vals.iter().tuple_windows().all(|(a, b)| a <= b)
}

/// A generated dataset. All elements share one type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "values")]
pub enum Dataset {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
    Strings(Vec<String>),
}

impl Dataset {
    pub fn data_type(&self) -> DataType {
        match self {
            Dataset::Integers(_) => DataType::Integers,
            Dataset::Floats(_) => DataType::Floats,
            Dataset::Strings(_) => DataType::Strings,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Integers(v) => v.len(),
            Dataset::Floats(v) => v.len(),
            Dataset::Strings(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_sorted(&self) -> bool {
        match self {
            Dataset::Integers(v) => is_sorted(v),
            Dataset::Floats(v) => is_sorted(v),
            Dataset::Strings(v) => is_sorted(v),
        }
    }

    pub fn sort(&mut self) {
        match self {
            Dataset::Integers(v) => i64::sort(v),
            Dataset::Floats(v) => f64::sort(v),
            Dataset::Strings(v) => String::sort(v),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn absent_integers() {
        let rng = &mut ChaCha8Rng::seed_from_u64(1);
        assert_eq!(i64::absent(&[3, 17, 5], 3, rng).unwrap(), vec![18, 19, 20]);
        assert_eq!(
            i64::absent(&[], 2, rng).unwrap(),
            vec![RANDOM_INT_MAX + 1, RANDOM_INT_MAX + 2]
        );
    }

    #[test]
    fn absent_integers_overflow() {
        let rng = &mut ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            i64::absent(&[0, i64::MAX], 1, rng),
            Err(Error::NoAbsentValue(DataType::Integers))
        ));
        assert_eq!(i64::absent(&[i64::MAX - 1], 1, rng).unwrap(), vec![i64::MAX]);
        assert!(i64::absent(&[i64::MAX - 1], 2, rng).is_err());
        assert!(i64::absent(&[i64::MAX], 0, rng).unwrap().is_empty());
    }

    #[test]
    fn absent_floats() {
        let rng = &mut ChaCha8Rng::seed_from_u64(1);
        assert_eq!(f64::absent(&[0.5, 9.25, 3.0], 2, rng).unwrap(), vec![10.25, 11.25]);
        assert_eq!(f64::absent(&[], 1, rng).unwrap(), vec![RANDOM_FLOAT_MAX + 1.0]);
    }

    #[test]
    fn absent_floats_beyond_integer_precision() {
        let rng = &mut ChaCha8Rng::seed_from_u64(1);
        let vals = [3.0, 1e16];
        let absent = f64::absent(&vals, 4, rng).unwrap();
        assert_eq!(absent.len(), 4);
        assert!(absent.iter().all(|v| !vals.contains(v)));
        assert!(absent.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(absent[0] > 1e16);

        assert!(matches!(
            f64::absent(&[f64::MAX], 1, rng),
            Err(Error::NoAbsentValue(DataType::Floats))
        ));
    }

    #[test]
    fn next_representable() {
        assert_eq!(next_up(1.0), 1.0 + f64::EPSILON);
        assert!(next_up(0.0) > 0.0);
        assert!(next_up(-1.0) > -1.0);
        assert_eq!(next_up(f64::MAX), f64::INFINITY);
    }

    #[test]
    fn absent_strings_are_longer() {
        let rng = &mut ChaCha8Rng::seed_from_u64(1);
        let vals = vec!["zz".to_string(), "abcdefg".to_string()];
        let absent = String::absent(&vals, 4, rng).unwrap();
        assert_eq!(absent.len(), 4);
        assert!(absent.iter().all(|s| s.len() == 12));
        assert!(absent.iter().all(|s| s.chars().all(|c| c.is_ascii_alphanumeric())));

        let absent = String::absent(&[], 2, rng).unwrap();
        assert!(absent.iter().all(|s| s.len() == STRING_LENGTH + 10));
    }

    #[test]
    fn sorting() {
        let mut d = Dataset::Floats(vec![3.5, 0.25, 9999.0, 1.0]);
        assert!(!d.is_sorted());
        d.sort();
        assert_eq!(d, Dataset::Floats(vec![0.25, 1.0, 3.5, 9999.0]));

        let mut d = Dataset::Integers(vec![5, -2, 5, 0]);
        d.sort();
        assert_eq!(d, Dataset::Integers(vec![-2, 0, 5, 5]));
        assert!(d.is_sorted());
        assert_eq!(d.data_type(), DataType::Integers);
    }

    #[test]
    fn footprints() {
        assert_eq!(i64::footprint(&[5, -2, 5, 0]), 32);
        assert_eq!(f64::footprint(&[1.0; 3]), 24);
        let strings = vec!["abcdefghij".to_string(); 4];
        assert_eq!(
            String::footprint(&strings),
            4 * (std::mem::size_of::<String>() + 10)
        );
        assert_eq!(String::footprint(&[]), 0);
    }

    #[test]
    fn serialized_form() {
        let d = Dataset::Strings(vec!["ab".into()]);
        assert_eq!(
            serde_json::to_string(&d).unwrap(),
            r#"{"type":"strings","values":["ab"]}"#
        );
    }
}
