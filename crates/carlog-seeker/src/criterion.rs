//! Criterion dispatch for range filtering.
//!
//! The type of the bounds passed to [`filter`](crate::filter) decides which
//! capability is consulted:
//!
//! | Criterion | Capability | Inclusive test |
//! |-----------|------------|----------------|
//! | `Option<&str>` | [`MakerMembership`] | maker equals either endpoint (ignoring case) |
//! | `f64` | [`MileageRange`] | `from <= mileage <= to` |

use crate::traits::{MakerMembership, MileageRange};

/// A bound type that knows how to test an item of type `T`.
pub trait RangeCriterion<T: ?Sized>: Copy {
    /// Inclusive membership of `item` in `[from, to]`.
    fn inclusive(item: &T, from: Self, to: Self) -> bool;

    /// Exclusive test of `item` against `(from, to)`.
    fn exclusive(item: &T, from: Self, to: Self) -> bool;
}

impl<T: MakerMembership + ?Sized> RangeCriterion<T> for Option<&str> {
    fn inclusive(item: &T, from: Self, to: Self) -> bool {
        item.maker_in_inclusive_range(from, to)
    }

    fn exclusive(item: &T, from: Self, to: Self) -> bool {
        item.maker_outside_exclusive_range(from, to)
    }
}

impl<T: MileageRange + ?Sized> RangeCriterion<T> for f64 {
    fn inclusive(item: &T, from: Self, to: Self) -> bool {
        item.mileage_in_inclusive_range(from, to)
    }

    fn exclusive(item: &T, from: Self, to: Self) -> bool {
        item.mileage_outside_exclusive_range(from, to)
    }
}
