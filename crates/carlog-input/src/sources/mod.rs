//! Input source implementations.
//!
//! - [`ArgSource`]: a string-valued clap argument
//! - [`LinePromptSource`]: a console prompt answered with one line

mod arg;
mod prompt;

pub use arg::ArgSource;
pub use prompt::{LinePromptSource, MockTerminal, RealTerminal, TerminalIO};
