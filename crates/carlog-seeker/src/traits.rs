//! Capability traits consumed by the sequence algorithms.
//!
//! Each algorithm asks for exactly the capability it needs:
//!
//! - [`Ranking`] for [`LinkedSequence::sort`](crate::LinkedSequence::sort)
//! - [`PeakSearch`] for [`peak_value`](crate::peak_value)
//! - [`MakerMembership`] and [`MileageRange`] for [`filter`](crate::filter),
//!   selected by the criterion type (see [`RangeCriterion`](crate::RangeCriterion))
//!
//! Every trait is also implemented for `&T`, so sequences of borrowed items
//! (the output of `filter`) support the same algorithms as their source.

use std::cmp::Ordering;

/// Total order used by the in-place sort.
///
/// `other == None` stands for an absent item, which ranks below any real
/// item: implementations return [`Ordering::Greater`] for it.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use carlog_seeker::Ranking;
///
/// struct Score(u32);
///
/// impl Ranking for Score {
///     fn compare(&self, other: Option<&Self>) -> Ordering {
///         match other {
///             None => Ordering::Greater,
///             Some(other) => other.0.cmp(&self.0),
///         }
///     }
/// }
///
/// assert_eq!(Score(10).compare(Some(&Score(3))), Ordering::Less);
/// assert_eq!(Score(10).compare(None), Ordering::Greater);
/// ```
pub trait Ranking {
    /// Compares `self` with `other`; `Less` means `self` sorts first.
    fn compare(&self, other: Option<&Self>) -> Ordering;
}

/// Selects the scalar inspected by [`peak_value`](crate::peak_value).
pub trait PeakSearch {
    /// Scalar type of the peak-search value.
    type Value;

    /// Returns the value this item contributes to a peak search.
    fn peak_search_value(&self) -> Self::Value;
}

/// Maker-name membership against a pair of endpoints.
///
/// This is not an ordered range: "inclusive" means the maker equals either
/// endpoint, ignoring case. An absent endpoint never matches.
pub trait MakerMembership {
    /// `true` when the maker equals `from` or `to`, ignoring case.
    fn maker_in_inclusive_range(&self, from: Option<&str>, to: Option<&str>) -> bool;

    /// `true` when the maker differs from `from` or differs from `to`,
    /// ignoring case.
    fn maker_outside_exclusive_range(&self, from: Option<&str>, to: Option<&str>) -> bool;
}

/// Numeric interval tests over the mileage.
pub trait MileageRange {
    /// `true` when `from <= mileage <= to`.
    fn mileage_in_inclusive_range(&self, from: f64, to: f64) -> bool;

    /// `true` when `mileage <= from` or `mileage >= to`.
    fn mileage_outside_exclusive_range(&self, from: f64, to: f64) -> bool;
}

impl<T: Ranking + ?Sized> Ranking for &T {
    fn compare(&self, other: Option<&Self>) -> Ordering {
        (**self).compare(other.map(|other| &**other))
    }
}

impl<T: PeakSearch + ?Sized> PeakSearch for &T {
    type Value = T::Value;

    fn peak_search_value(&self) -> Self::Value {
        (**self).peak_search_value()
    }
}

impl<T: MakerMembership + ?Sized> MakerMembership for &T {
    fn maker_in_inclusive_range(&self, from: Option<&str>, to: Option<&str>) -> bool {
        (**self).maker_in_inclusive_range(from, to)
    }

    fn maker_outside_exclusive_range(&self, from: Option<&str>, to: Option<&str>) -> bool {
        (**self).maker_outside_exclusive_range(from, to)
    }
}

impl<T: MileageRange + ?Sized> MileageRange for &T {
    fn mileage_in_inclusive_range(&self, from: f64, to: f64) -> bool {
        (**self).mileage_in_inclusive_range(from, to)
    }

    fn mileage_outside_exclusive_range(&self, from: f64, to: f64) -> bool {
        (**self).mileage_outside_exclusive_range(from, to)
    }
}
