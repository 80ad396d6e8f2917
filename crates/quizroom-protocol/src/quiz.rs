//! The quiz data model.
//!
//! A [`Quiz`] is produced by an external generation service and handed
//! to the registry at room-creation time. Once attached to a room it is
//! immutable — the room owns it exclusively for the room's lifetime.

use serde::{Deserialize, Serialize};

use crate::QuizError;

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to players.
    pub text: String,

    /// The ordered answer choices. Either 2 or 4 entries, all distinct.
    pub choices: Vec<String>,

    /// The correct answer — must be one of `choices`, compared
    /// case-sensitively. Never included in state projections.
    pub answer: String,
}

/// An ordered list of questions plus a display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Display title, e.g. "Capitals of Europe".
    pub title: String,

    /// The questions, played in order.
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Checks the structural invariants of an externally supplied quiz.
    ///
    /// Run before a room is created around the quiz, so a malformed
    /// generator response is rejected up front instead of surfacing as
    /// an index error mid-game.
    ///
    /// Invariants: at least one question; every question has exactly 2
    /// or 4 distinct choices; every answer is one of its choices.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::Empty);
        }
        for (index, question) in self.questions.iter().enumerate() {
            let count = question.choices.len();
            if count != 2 && count != 4 {
                return Err(QuizError::BadChoiceCount { index, count });
            }
            for (i, choice) in question.choices.iter().enumerate() {
                if question.choices[..i].contains(choice) {
                    return Err(QuizError::DuplicateChoices { index });
                }
            }
            if !question.choices.contains(&question.answer) {
                return Err(QuizError::AnswerNotInChoices { index });
            }
        }
        Ok(())
    }

    /// Returns the number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

// =========================================================================
// Tests
// =========================================================================
