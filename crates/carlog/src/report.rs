//! Report output: the vehicle table layout and where the text goes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use carlog_render::tabular::{Col, Decorations, Table, TableSpec};

use crate::error::{CarlogError, Result};

/// The fixed-width vehicle table: name, plate, maker, model, year, mileage.
pub fn vehicle_table() -> Table {
    let spec = TableSpec::builder()
        .column(Col::fixed(20).header("Name and surname"))
        .column(Col::fixed(15).header("Car number"))
        .column(Col::fixed(10).header("Car maker"))
        .column(Col::fixed(15).header("Car model"))
        .column(Col::fixed(10).right().header("Car year"))
        .column(Col::fixed(13).right().header("Car mileage"))
        .decorations(Decorations::with_separator(" | ").suffix(" |"))
        .build();
    Table::new(spec)
}

/// Destination for report text.
///
/// Text is appended as-is; nothing already written is ever rewritten.
pub trait ReportSink {
    fn append(&mut self, text: &str) -> Result<()>;
}

impl ReportSink for String {
    fn append(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// A report file opened in append mode for every write.
#[derive(Debug, Clone)]
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file if it exists.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.write_error(source)),
        }
    }

    fn write_error(&self, source: io::Error) -> CarlogError {
        CarlogError::WriteReport {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReportSink for ReportFile {
    fn append(&mut self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;
        file.write_all(text.as_bytes())
            .map_err(|source| self.write_error(source))
    }
}
