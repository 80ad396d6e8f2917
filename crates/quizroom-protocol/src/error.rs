//! Error types for quiz validation.

/// A structural defect in an externally supplied quiz.
///
/// The quiz generator is an opaque collaborator, so its output is
/// checked once, up front, before a room is ever built around it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    /// The quiz has no questions at all.
    #[error("quiz contains no questions")]
    Empty,

    /// A question has a choice count other than 2 or 4.
    #[error("question {index} has {count} choices (expected 2 or 4)")]
    BadChoiceCount { index: usize, count: usize },

    /// A question lists the same choice text more than once.
    #[error("question {index} has duplicate choices")]
    DuplicateChoices { index: usize },

    /// A question's correct answer is not one of its choices.
    #[error("question {index}: answer is not one of the choices")]
    AnswerNotInChoices { index: usize },
}
