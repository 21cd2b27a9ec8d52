//! Linear-scan algorithms over [`LinkedSequence`].

use num_traits::Zero;

use crate::criterion::RangeCriterion;
use crate::sequence::LinkedSequence;
use crate::traits::PeakSearch;

/// Returns the largest peak-search value in `sequence`.
///
/// The scan starts from zero rather than from the first element, so a
/// sequence whose values are all `<= 0` (or an empty one) yields zero.
///
/// ```
/// use carlog_seeker::{peak_value, LinkedSequence, PeakSearch};
///
/// struct Trip(f64);
///
/// impl PeakSearch for Trip {
///     type Value = f64;
///     fn peak_search_value(&self) -> f64 {
///         self.0
///     }
/// }
///
/// let trips: LinkedSequence<Trip> = vec![Trip(10.0), Trip(250.5), Trip(87.3)]
///     .into_iter()
///     .collect();
/// assert_eq!(peak_value(&trips), 250.5);
///
/// let negative: LinkedSequence<Trip> = vec![Trip(-4.0)].into_iter().collect();
/// assert_eq!(peak_value(&negative), 0.0);
/// ```
pub fn peak_value<T, V>(sequence: &LinkedSequence<T>) -> V
where
    T: PeakSearch<Value = V>,
    V: Zero + PartialOrd + Copy,
{
    let mut peak = V::zero();
    for item in sequence {
        let value = item.peak_search_value();
        if value > peak {
            peak = value;
        }
    }
    peak
}

/// Collects the elements of `source` that lie inside `[from, to]`.
///
/// The criterion type picks the test (see [`RangeCriterion`]). The result
/// borrows the source's elements in their original relative order; the
/// source, including its built-in cursor, is left untouched.
pub fn filter<'a, T, C>(source: &'a LinkedSequence<T>, from: C, to: C) -> LinkedSequence<&'a T>
where
    C: RangeCriterion<T>,
{
    source
        .iter()
        .filter(|item| C::inclusive(item, from, to))
        .collect()
}

/// Collects the elements of `source` that pass the exclusive test against
/// `(from, to)`.
pub fn filter_outside<'a, T, C>(
    source: &'a LinkedSequence<T>,
    from: C,
    to: C,
) -> LinkedSequence<&'a T>
where
    C: RangeCriterion<T>,
{
    source
        .iter()
        .filter(|item| C::exclusive(item, from, to))
        .collect()
}
