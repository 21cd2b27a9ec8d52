//! Run order: load records, reset the report, run the pipeline.

use std::sync::Arc;

use carlog_input::{ArgSource, InputChain, LinePromptSource, RealTerminal, TerminalIO};
use clap::ArgMatches;
use tracing::info;

use crate::config::Config;
use crate::data_file::read_records;
use crate::error::Result;
use crate::pipeline::{Makers, Outcome, Pipeline};
use crate::report::ReportFile;

pub const FIRST_MAKER_PROMPT: &str = "Input first car maker: ";
pub const SECOND_MAKER_PROMPT: &str = "Input second car maker: ";

/// Produce the report described by `config`.
///
/// The input is read before the report file is touched, so a missing or
/// malformed input leaves any previous report in place.
pub fn run(config: &Config, matches: &ArgMatches) -> Result<Outcome> {
    let records = read_records(&config.input, &config.number_format)?;
    info!(input = %config.input.display(), records = records.len(), "loaded records");

    let mut report = ReportFile::new(&config.output);
    report.reset()?;

    let outcome = Pipeline::new(config.number_format)
        .run(&records, &mut report, || ask_makers(matches))?;
    info!(output = %report.path().display(), ?outcome, "report written");
    Ok(outcome)
}

/// Collect both makers from `--first-maker`/`--second-maker` or the console.
pub fn ask_makers(matches: &ArgMatches) -> Result<Makers> {
    ask_makers_with(matches, Arc::new(RealTerminal))
}

/// Like [`ask_makers`], prompting on `terminal`.
///
/// Answers are used as typed. End of input leaves that maker absent.
pub fn ask_makers_with<T: TerminalIO + 'static>(
    matches: &ArgMatches,
    terminal: Arc<T>,
) -> Result<Makers> {
    let first = maker_chain("first_maker", FIRST_MAKER_PROMPT, terminal.clone())
        .resolve(matches)?;
    let second = maker_chain("second_maker", SECOND_MAKER_PROMPT, terminal).resolve(matches)?;
    Ok(Makers::new(first, second))
}

fn maker_chain<T: TerminalIO + 'static>(
    arg: &str,
    prompt: &str,
    terminal: Arc<T>,
) -> InputChain<String> {
    InputChain::new()
        .try_source(ArgSource::new(arg))
        .try_source(LinePromptSource::with_shared_terminal(prompt, terminal))
}
