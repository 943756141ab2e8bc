//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A square number outside 1-9 was passed to `human_move`.
    #[display("Square {} is not on the board (expected 1-9)", _0)]
    InvalidArgument(u8),

    /// An operation was called in a state its contract forbids.
    #[display("Precondition violated: {}", _0)]
    PreconditionViolation(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`EngineErrorKind::PreconditionViolation`].
    #[track_caller]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::new(EngineErrorKind::PreconditionViolation(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}
