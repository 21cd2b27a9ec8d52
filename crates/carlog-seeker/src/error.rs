//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when driving a sequence cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekerError {
    /// The cursor was advanced while it did not designate an element.
    #[error("cursor is off-sequence and cannot be advanced")]
    CursorExhausted,

    /// The cursor was read while it did not designate an element.
    #[error("cursor is off-sequence and has no current element")]
    NoCurrent,
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
