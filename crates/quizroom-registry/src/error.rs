//! Error types for the registry.

use quizroom_protocol::{QuizError, RoomCode};

/// Errors that can occur during registry operations.
///
/// Every variant is recoverable and leaves registry state untouched —
/// a failed operation never partially applies.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// No live room has this code (never existed, mistyped, or evicted).
    #[error("room '{0}' not found")]
    NotFound(RoomCode),

    /// The supplied host or player credential does not match the
    /// room's records.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The operation is not legal in the room's current state.
    /// For example, starting a room twice or answering after Finished.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// The supplied quiz failed structural validation at creation time.
    #[error("invalid quiz: {0}")]
    InvalidQuiz(#[from] QuizError),
}

/// Coarse classification of an error for the API layer.
///
/// The transport maps each class to a status family without having to
/// match individual [`RoomError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// "Not found" family (e.g. HTTP 404).
    NotFound,
    /// "Forbidden" family (e.g. HTTP 403).
    Forbidden,
    /// "Bad request / conflict" family (e.g. HTTP 400/409).
    BadRequest,
}

impl RoomError {
    /// Returns the status class this error maps to.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound(_) => ErrorClass::NotFound,
            Self::Unauthorized(_) => ErrorClass::Forbidden,
            Self::InvalidAction(_) | Self::InvalidQuiz(_) => ErrorClass::BadRequest,
        }
    }
}
