//! Input collection for the carlog CLI.
//!
//! `carlog-input` resolves a value from a command-line argument and falls
//! back to a console prompt when the argument is missing.
//!
//! # Quick Start
//!
//! ```ignore
//! use carlog_input::{InputChain, ArgSource, LinePromptSource};
//!
//! // --first-maker wins, otherwise ask on the console
//! let maker = InputChain::<String>::new()
//!     .try_source(ArgSource::new("first_maker"))
//!     .try_source(LinePromptSource::new("Input first car maker: "))
//!     .resolve(&matches)?;
//! ```
//!
//! # Architecture
//!
//! Every source implements [`InputCollector`]. Sources are composed into an
//! [`InputChain`] that tries each one in order until one provides input;
//! when none does the result is `None`.
//!
//! ```text
//! InputChain
//! ├── ArgSource         → None (flag not given)
//! └── LinePromptSource  → Some("Audi") ← returns this
//! ```
//!
//! # Testing
//!
//! Prompts accept a [`MockTerminal`] that hands out scripted answers:
//!
//! ```
//! use carlog_input::{InputChain, LinePromptSource, MockTerminal};
//!
//! let matches = clap::Command::new("demo").get_matches_from(["demo"]);
//! let maker = InputChain::<String>::new()
//!     .try_source(LinePromptSource::with_terminal("Maker: ", MockTerminal::with_responses(["Audi"])))
//!     .resolve(&matches)
//!     .unwrap();
//! assert_eq!(maker.as_deref(), Some("Audi"));
//! ```

mod chain;
mod collector;
mod error;
pub mod sources;

// Re-export core types
pub use chain::InputChain;
pub use collector::InputCollector;
pub use error::InputError;

// Re-export sources at crate root for convenience
pub use sources::{ArgSource, LinePromptSource, MockTerminal, RealTerminal, TerminalIO};
