//! Column formatting for report tables.
//!
//! A [`TableSpec`] lists the columns (fixed width, alignment, header text)
//! and the [`Decorations`] placed between and around cells. A [`Table`]
//! turns a spec into rows, rules and whole titled sections.
//!
//! ## Overflow
//!
//! Cells are never truncated. Content wider than its column pushes the rest
//! of the row to the right, the way composite-format padding behaves.
//!
//! ## Utility Functions
//!
//! ```rust
//! use carlog_render::tabular::{display_width, pad_left, pad_right};
//!
//! assert_eq!(pad_right("42", 5), "42   ");
//! assert_eq!(pad_left("42", 5), "   42");
//! assert_eq!(display_width(&pad_right("hello", 3)), 5);
//! ```

mod decorator;
mod types;
mod util;

pub use decorator::{Table, DEFAULT_RULE_WIDTH};
pub use types::{Align, Col, Column, Decorations, TableSpec, TableSpecBuilder};
pub use util::{display_width, pad_cell, pad_left, pad_right};
