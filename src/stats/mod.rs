//! Descriptive statistics over slices.
//!
//! Every helper returns `None` for an empty slice and never panics.
//!
//! - max/min: index or element of the first greatest/least element,
//! - median: the element at position `len / 2` of a stable sort by the
//!   comparator (the upper median for even lengths),
//! - average: arithmetic mean of extracted values.
//!
//! # Examples
//!
//! ```rust
//! use polycurry::stats::{get_average_value, get_max_element, get_median_index};
//!
//! let ages = [31, 25, 47, 25];
//! assert_eq!(get_max_element(&ages, i32::cmp), Some(&47));
//! assert_eq!(get_median_index(&ages, i32::cmp), Some(0));
//! assert_eq!(get_average_value(&ages, |age| f64::from(*age)), Some(32.0));
//! assert_eq!(get_average_value(&[] as &[i32], |age| f64::from(*age)), None);
//! ```

use std::cmp::Ordering;

/// Index of the first greatest element.
pub fn get_max_index<T, C>(input: &[T], comparator: C) -> Option<usize>
where
    C: Fn(&T, &T) -> Ordering,
{
    extreme_index(input, |candidate, best| {
        comparator(candidate, best) == Ordering::Greater
    })
}

/// First greatest element.
pub fn get_max_element<T, C>(input: &[T], comparator: C) -> Option<&T>
where
    C: Fn(&T, &T) -> Ordering,
{
    get_max_index(input, comparator).map(|index| &input[index])
}

/// Index of the first least element.
pub fn get_min_index<T, C>(input: &[T], comparator: C) -> Option<usize>
where
    C: Fn(&T, &T) -> Ordering,
{
    extreme_index(input, |candidate, best| {
        comparator(candidate, best) == Ordering::Less
    })
}

/// First least element.
pub fn get_min_element<T, C>(input: &[T], comparator: C) -> Option<&T>
where
    C: Fn(&T, &T) -> Ordering,
{
    get_min_index(input, comparator).map(|index| &input[index])
}

/// Index, in `input`, of the median element.
pub fn get_median_index<T, C>(input: &[T], comparator: C) -> Option<usize>
where
    C: Fn(&T, &T) -> Ordering,
{
    if input.is_empty() {
        return None;
    }
    let mut order: Vec<usize> = (0..input.len()).collect();
    order.sort_by(|&left, &right| comparator(&input[left], &input[right]));
    Some(order[order.len() / 2])
}

/// The median element.
pub fn get_median_element<T, C>(input: &[T], comparator: C) -> Option<&T>
where
    C: Fn(&T, &T) -> Ordering,
{
    get_median_index(input, comparator).map(|index| &input[index])
}

/// Mean of `get_value` over `input`; `None` when `input` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn get_average_value<T, G>(input: &[T], get_value: G) -> Option<f64>
where
    G: Fn(&T) -> f64,
{
    if input.is_empty() {
        return None;
    }
    let total: f64 = input.iter().map(get_value).sum();
    Some(total / input.len() as f64)
}

fn extreme_index<T>(input: &[T], replaces: impl Fn(&T, &T) -> bool) -> Option<usize> {
    (0..input.len()).reduce(|best, index| {
        if replaces(&input[index], &input[best]) {
            index
        } else {
            best
        }
    })
}
