//! The trait shared by every place a value can come from.

use clap::ArgMatches;

use crate::InputError;

/// One place a value may come from.
///
/// carlog has two: a command-line flag ([`ArgSource`](crate::ArgSource))
/// and a console prompt ([`LinePromptSource`](crate::LinePromptSource)).
/// `Ok(None)` means this source has nothing to offer and the next one in
/// the [`InputChain`](crate::InputChain) should be asked.
pub trait InputCollector<T>: Send + Sync {
    /// Produce a value, or `None` to pass to the next source.
    fn collect(&self, matches: &ArgMatches) -> Result<Option<T>, InputError>;
}
