//! Seeker - cursor-driven sequences and the scans that run over them.
//!
//! The crate provides one container and a handful of capability-driven
//! algorithms:
//!
//! - [`LinkedSequence`]: append-only, cursor-traversed, sortable in place
//! - [`peak_value`]: the largest [`PeakSearch`] value, scanning up from zero
//! - [`filter`] / [`filter_outside`]: range selection whose test is chosen by
//!   the criterion type ([`RangeCriterion`])
//!
//! # Quick Start
//!
//! ```rust
//! use std::cmp::Ordering;
//! use carlog_seeker::{filter, peak_value, LinkedSequence, MileageRange, PeakSearch, Ranking};
//!
//! struct Car {
//!     mileage: f64,
//! }
//!
//! impl PeakSearch for Car {
//!     type Value = f64;
//!     fn peak_search_value(&self) -> f64 {
//!         self.mileage
//!     }
//! }
//!
//! impl MileageRange for Car {
//!     fn mileage_in_inclusive_range(&self, from: f64, to: f64) -> bool {
//!         from <= self.mileage && self.mileage <= to
//!     }
//!     fn mileage_outside_exclusive_range(&self, from: f64, to: f64) -> bool {
//!         self.mileage <= from || self.mileage >= to
//!     }
//! }
//!
//! impl Ranking for Car {
//!     fn compare(&self, other: Option<&Self>) -> Ordering {
//!         match other {
//!             None => Ordering::Greater,
//!             Some(other) => other.mileage.total_cmp(&self.mileage),
//!         }
//!     }
//! }
//!
//! let cars: LinkedSequence<Car> = [120.0, 40.5, 300.0]
//!     .into_iter()
//!     .map(|mileage| Car { mileage })
//!     .collect();
//!
//! assert_eq!(peak_value(&cars), 300.0);
//!
//! let mut mid = filter(&cars, 40.0, 150.0);
//! mid.sort();
//! let order: Vec<f64> = mid.iter().map(|c| c.mileage).collect();
//! assert_eq!(order, vec![120.0, 40.5]);
//! ```
//!
//! # Cursor Semantics
//!
//! A sequence owns exactly one built-in cursor. Advancing it while it is
//! off-sequence is a precondition violation and panics;
//! [`LinkedSequence::try_advance_cursor`] reports it as
//! [`SeekerError::CursorExhausted`] instead. Algorithms in this crate
//! traverse through [`LinkedSequence::iter`] and never move the built-in
//! cursor.

mod algorithms;
mod criterion;
mod error;
mod sequence;
mod traits;

pub use algorithms::{filter, filter_outside, peak_value};
pub use criterion::RangeCriterion;
pub use error::{Result, SeekerError};
pub use sequence::{Cursor, LinkedSequence};
pub use traits::{MakerMembership, MileageRange, PeakSearch, Ranking};
