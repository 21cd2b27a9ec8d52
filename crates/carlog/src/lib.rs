//! carlog - a vehicle report built from a flat data file.
//!
//! Reads `owner; plate; maker; model; year; mileage` records, asks for two
//! makers, and writes up to four fixed-width tables plus a peak-mileage
//! summary:
//!
//! | Section | Contents |
//! |---------|----------|
//! | First list | every record, in file order |
//! | Second list | records of the first maker |
//! | Third list | records of the second maker |
//! | Fourth list | records between the two peak mileages, highest first |
//!
//! The building blocks live in their own crates: `carlog-seeker` for the
//! sequence and its algorithms, `carlog-input` for flag-or-prompt input,
//! `carlog-render` for table layout.
//!
//! ```rust
//! use carlog::{parse_records, Makers, NumberFormat, Outcome, Pipeline};
//!
//! let format = NumberFormat::default();
//! let records = parse_records(
//!     "Ona; A1; Audi; A4; 2010; 120.5\nJonas; B2; BMW; X5; 2012; 80\n",
//!     &format,
//! )?;
//!
//! let mut report = String::new();
//! let outcome = Pipeline::new(format).run(&records, &mut report, || {
//!     Ok(Makers::new(Some("audi".into()), Some("bmw".into())))
//! })?;
//!
//! assert!(matches!(outcome, Outcome::Completed { fourth_len: 2, .. }));
//! assert!(report.ends_with("The biggest mileage from the third list: 80 made by bmw\n"));
//! # Ok::<(), carlog::CarlogError>(())
//! ```

pub mod app;
pub mod config;
pub mod data_file;
pub mod error;
pub mod logging;
pub mod number;
pub mod pipeline;
pub mod record;
pub mod report;

pub use app::{ask_makers, run};
pub use config::{Cli, Config};
pub use data_file::{parse_records, read_records};
pub use error::{CarlogError, Result};
pub use number::NumberFormat;
pub use pipeline::{Makers, Outcome, Pipeline};
pub use record::Record;
pub use report::{vehicle_table, ReportFile, ReportSink};
