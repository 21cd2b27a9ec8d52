//! Line-oriented console prompts.
//!
//! A prompt is written without a trailing newline and answered with one
//! line read from stdin. Piped stdin is read the same way as a console, so
//! scripted runs answer the same questions an interactive user would.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use clap::ArgMatches;

use crate::collector::InputCollector;
use crate::InputError;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Write a prompt to stdout.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read a line from stdin. An empty string means EOF.
    fn read_line(&self) -> io::Result<String>;
}

/// Real terminal I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Text prompt answered with a single line.
///
/// The answer is returned as typed, minus its line ending. End of input
/// yields `None`.
///
/// # Example
///
/// ```ignore
/// use carlog_input::{InputChain, ArgSource, LinePromptSource};
///
/// let chain = InputChain::<String>::new()
///     .try_source(ArgSource::new("second_maker"))
///     .try_source(LinePromptSource::new("Input second car maker: "));
///
/// let maker = chain.resolve(&matches)?;
/// ```
#[derive(Clone)]
pub struct LinePromptSource<T: TerminalIO = RealTerminal> {
    terminal: Arc<T>,
    prompt: String,
}

impl LinePromptSource<RealTerminal> {
    /// Create a prompt on the process console.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::with_shared_terminal(prompt, Arc::new(RealTerminal))
    }
}

impl<T: TerminalIO> LinePromptSource<T> {
    /// Create a prompt with a custom terminal for testing.
    pub fn with_terminal(prompt: impl Into<String>, terminal: T) -> Self {
        Self::with_shared_terminal(prompt, Arc::new(terminal))
    }

    /// Create a prompt over a terminal the caller keeps a handle to.
    ///
    /// Prompts sharing a terminal read consecutive lines of one stream.
    pub fn with_shared_terminal(prompt: impl Into<String>, terminal: Arc<T>) -> Self {
        Self {
            terminal,
            prompt: prompt.into(),
        }
    }
}

impl<T: TerminalIO + 'static> InputCollector<String> for LinePromptSource<T> {
    fn collect(&self, _matches: &ArgMatches) -> Result<Option<String>, InputError> {
        self.terminal
            .write_prompt(&self.prompt)
            .map_err(|e| InputError::prompt(&self.prompt, e))?;

        let line = self
            .terminal
            .read_line()
            .map_err(|e| InputError::prompt(&self.prompt, e))?;

        if line.is_empty() {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }
}

fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Mock terminal for testing prompts.
///
/// Answers are handed out in order; once they run out every read is EOF.
/// Prompts written to the mock are recorded.
#[derive(Debug)]
pub struct MockTerminal {
    responses: Vec<String>,
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTerminal {
    /// Create a mock terminal that returns the given lines in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that simulates EOF (Ctrl+D).
    pub fn eof() -> Self {
        Self::with_responses(Vec::<String>::new())
    }

    /// Prompts written so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl TerminalIO for MockTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}
