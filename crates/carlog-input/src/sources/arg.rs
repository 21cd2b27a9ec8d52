//! Command-line flag source.

use clap::ArgMatches;

use crate::collector::InputCollector;
use crate::InputError;

/// The string value of a clap argument, when the user gave it.
///
/// # Example
///
/// ```ignore
/// use carlog_input::{InputChain, ArgSource};
///
/// // For: carlog --first-maker Audi
/// let chain = InputChain::<String>::new()
///     .try_source(ArgSource::new("first_maker"));
/// ```
#[derive(Debug, Clone)]
pub struct ArgSource {
    id: String,
}

impl ArgSource {
    /// `id` is the argument id defined in clap.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl InputCollector<String> for ArgSource {
    fn collect(&self, matches: &ArgMatches) -> Result<Option<String>, InputError> {
        // Unknown ids pass instead of panicking.
        Ok(matches
            .try_get_one::<String>(&self.id)
            .ok()
            .flatten()
            .cloned())
    }
}
