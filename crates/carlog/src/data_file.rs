//! Input data file reader.
//!
//! One record per line, six fields separated by `"; "`:
//!
//! ```text
//! owner name; plate number; maker; model; year; mileage
//! ```

use std::fs;
use std::io;
use std::path::Path;

use carlog_seeker::LinkedSequence;
use tracing::debug;

use crate::error::{CarlogError, Result};
use crate::number::NumberFormat;
use crate::record::Record;

/// Field delimiter within a line.
pub const FIELD_DELIMITER: &str = "; ";

const FIELD_COUNT: usize = 6;

/// Read every record of `path` in file order.
///
/// Any line that is not a well-formed record, blank lines included, fails
/// the whole read.
pub fn read_records(path: &Path, format: &NumberFormat) -> Result<LinkedSequence<Record>> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CarlogError::MissingInputFile {
                path: path.to_path_buf(),
                source,
            }
        } else {
            CarlogError::ReadInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let records = parse_records(&content, format)?;
    debug!(path = %path.display(), records = records.len(), "read input file");
    Ok(records)
}

/// Parse file content into records.
pub fn parse_records(content: &str, format: &NumberFormat) -> Result<LinkedSequence<Record>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = LinkedSequence::new();
    for (index, line) in content.lines().enumerate() {
        records.append(parse_line(line, index + 1, format)?);
    }
    Ok(records)
}

fn parse_line(line: &str, line_no: usize, format: &NumberFormat) -> Result<Record> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(CarlogError::malformed(
            line_no,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let year = fields[4]
        .trim()
        .parse::<i32>()
        .map_err(|_| CarlogError::malformed(line_no, format!("invalid year '{}'", fields[4])))?;
    let mileage = format
        .parse(fields[5])
        .map_err(|reason| CarlogError::malformed(line_no, format!("invalid mileage: {}", reason)))?;

    Ok(Record::new(
        fields[0], fields[1], fields[2], fields[3], year, mileage,
    ))
}
