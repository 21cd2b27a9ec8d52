//! Command-line configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::number::NumberFormat;

/// Build a vehicle report from a `; `-separated data file.
///
/// Makers not given as flags are asked for on the console.
#[derive(Debug, Parser)]
#[command(name = "carlog", version, about, long_about = None)]
pub struct Cli {
    /// Input data file
    #[arg(short, long, default_value = "Duomenys.txt")]
    pub input: PathBuf,

    /// Report file, replaced on every run
    #[arg(short, long, default_value = "Rezultatai.txt")]
    pub output: PathBuf,

    /// Maker for the second list (skips the first prompt)
    #[arg(long)]
    pub first_maker: Option<String>,

    /// Maker for the third list (skips the second prompt)
    #[arg(long)]
    pub second_maker: Option<String>,

    /// Decimal separator used for mileage, in and out
    #[arg(long, default_value_t = '.', value_parser = parse_separator)]
    pub decimal_separator: char,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_separator(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        // Anything `f64` parsing or the record delimiter gives meaning to.
        (Some(c), None)
            if c.is_ascii_alphanumeric() || c.is_whitespace() || "+-_;".contains(c) =>
        {
            Err(format!("'{}' cannot separate decimals", c))
        }
        (Some(c), None) => Ok(c),
        _ => Err("expected a single character".to_string()),
    }
}

/// Settings the application runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub number_format: NumberFormat,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Duomenys.txt"),
            output: PathBuf::from("Rezultatai.txt"),
            number_format: NumberFormat::default(),
            verbosity: 0,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            number_format: NumberFormat::new(cli.decimal_separator),
            verbosity: cli.verbose,
        }
    }
}
