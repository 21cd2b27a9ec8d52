use std::io;

/// A prompt could not be shown or answered.
#[derive(Debug, thiserror::Error)]
#[error("cannot prompt {prompt:?}: {source}")]
pub struct InputError {
    prompt: String,
    #[source]
    source: io::Error,
}

impl InputError {
    pub(crate) fn prompt(prompt: &str, source: io::Error) -> Self {
        Self {
            prompt: prompt.to_string(),
            source,
        }
    }
}
