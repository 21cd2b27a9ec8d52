//! Fixed-width report tables.
//!
//! `carlog-render` lays out rows of text cells into padded, pipe-delimited
//! lines framed by dashed rules. Widths are measured in display columns, so
//! wide Unicode characters and ANSI escapes do not skew alignment.
//!
//! ```rust
//! use carlog_render::tabular::{Col, Decorations, Table, TableSpec};
//!
//! let spec = TableSpec::builder()
//!     .column(Col::fixed(6).header("Maker"))
//!     .column(Col::fixed(8).right().header("Mileage"))
//!     .decorations(Decorations::with_separator(" | ").suffix(" |"))
//!     .build();
//!
//! let table = Table::new(spec).rule_width(10);
//! assert_eq!(table.header_row(), "Maker  | Mileage  |");
//! assert_eq!(table.row(&["Kia", "12.5"]), "Kia    |     12.5 |");
//! assert_eq!(table.rule(), "----------");
//! ```

pub mod tabular;
