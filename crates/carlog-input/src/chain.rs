//! Ordered fallback over input sources.

use clap::ArgMatches;

use crate::collector::InputCollector;
use crate::InputError;

/// Sources tried in the order they were added.
///
/// The first source that returns a value wins and later sources are never
/// asked, so a given flag suppresses its prompt.
///
/// # Example
///
/// ```ignore
/// use carlog_input::{InputChain, ArgSource, LinePromptSource};
///
/// let maker = InputChain::<String>::new()
///     .try_source(ArgSource::new("first_maker"))
///     .try_source(LinePromptSource::new("Input first car maker: "))
///     .resolve(&matches)?;
/// ```
pub struct InputChain<T> {
    sources: Vec<Box<dyn InputCollector<T>>>,
}

impl<T> InputChain<T> {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a source.
    pub fn try_source<C: InputCollector<T> + 'static>(mut self, source: C) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// The first value any source produces, or `None` when all pass.
    pub fn resolve(&self, matches: &ArgMatches) -> Result<Option<T>, InputError> {
        for source in &self.sources {
            if let Some(value) = source.collect(matches)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

impl<T> Default for InputChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
