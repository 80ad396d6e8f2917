//! A single quiz room: players, scores, and the question state machine.
//!
//! `Room` methods validate first and mutate last, so a rejected
//! operation never leaves partial state behind. The registry holds the
//! lock; nothing here is aware of concurrency.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use quizroom_protocol::{
    ActiveQuestion, HostId, PlayerId, PlayerStateView, Quiz, RoomCode, RoomStateView, RoomStatus,
};

use crate::RoomError;

/// One answer a player gave to one question.
#[derive(Debug, Clone)]
pub(crate) struct AnswerRecord {
    /// The raw submitted text, untrimmed.
    pub answer: String,
    /// Whether it matched the question's correct answer.
    pub correct: bool,
}

/// A joined participant. Owned by exactly one room for its lifetime.
#[derive(Debug, Clone)]
pub(crate) struct Player {
    pub id: PlayerId,
    /// Display name, stored as given. Duplicates are allowed.
    pub name: String,
    /// Count of correctly answered questions.
    pub score: u32,
    /// Per-question answer history, keyed by question index.
    pub answers: HashMap<usize, AnswerRecord>,
}

/// One quiz-playing session.
///
/// The room exclusively owns its quiz (immutable once attached) and its
/// players. Progression is entirely host-driven: the only state
/// transitions are `start` and `advance`, both gated on the host
/// credential.
#[derive(Debug)]
pub(crate) struct Room {
    pub code: RoomCode,
    host_id: HostId,
    /// The creator's display name. Stored as given, like player names.
    pub host_name: String,
    pub quiz: Quiz,
    pub difficulty: String,
    pub status: RoomStatus,
    /// Index of the active question. `Some` only while InProgress.
    current_question: Option<usize>,
    pub players: HashMap<PlayerId, Player>,
    /// Raw answers submitted for the active question, keyed by player.
    /// Cleared on every question transition.
    current_answers: HashMap<PlayerId, String>,
    /// When the room last saw a mutating operation. Reads don't count.
    last_activity: Instant,
}

impl Room {
    pub fn new(
        code: RoomCode,
        host_id: HostId,
        host_name: String,
        quiz: Quiz,
        difficulty: String,
    ) -> Self {
        Self {
            code,
            host_id,
            host_name,
            quiz,
            difficulty,
            status: RoomStatus::Waiting,
            current_question: None,
            players: HashMap::new(),
            current_answers: HashMap::new(),
            last_activity: Instant::now(),
        }
    }

    /// Adds a new player. Joining is allowed in any status — a late
    /// joiner simply starts with score 0 and no answer history.
    pub fn add_player(&mut self, player_id: PlayerId, name: &str) {
        self.players.insert(
            player_id.clone(),
            Player {
                id: player_id,
                name: name.to_string(),
                score: 0,
                answers: HashMap::new(),
            },
        );
        self.touch();
    }

    /// Starts the game: Waiting → InProgress, question 0 active.
    pub fn start(&mut self, host_id: &HostId) -> Result<(), RoomError> {
        self.authorize_host(host_id)?;
        if self.status != RoomStatus::Waiting {
            return Err(RoomError::InvalidAction(
                "this room has already been started".into(),
            ));
        }
        if self.players.is_empty() {
            return Err(RoomError::InvalidAction(
                "at least one player must join before starting the game".into(),
            ));
        }

        self.status = RoomStatus::InProgress;
        self.current_question = Some(0);
        self.current_answers.clear();
        self.touch();
        tracing::info!(
            code = %self.code,
            players = self.players.len(),
            "game started"
        );
        Ok(())
    }

    /// Advances to the next question, or to Finished after the last one.
    pub fn advance(&mut self, host_id: &HostId) -> Result<(), RoomError> {
        self.authorize_host(host_id)?;
        if self.status != RoomStatus::InProgress {
            return Err(RoomError::InvalidAction(
                "cannot advance questions when the game is not in progress".into(),
            ));
        }
        let index = self.current_question.ok_or_else(|| {
            RoomError::InvalidAction("no active question to advance from".into())
        })?;

        let total = self.quiz.question_count();
        if index >= total - 1 {
            self.status = RoomStatus::Finished;
            self.current_question = None;
            tracing::info!(code = %self.code, "game finished");
        } else {
            self.current_question = Some(index + 1);
            tracing::debug!(
                code = %self.code,
                question = index + 1,
                "advanced to next question"
            );
        }
        self.current_answers.clear();
        self.touch();
        Ok(())
    }

    /// Records a player's answer to the active question and scores it.
    ///
    /// At most one answer per player per question: a resubmission is
    /// rejected and the score is untouched.
    pub fn submit_answer(
        &mut self,
        player_id: &PlayerId,
        answer: &str,
    ) -> Result<(), RoomError> {
        if self.status != RoomStatus::InProgress {
            return Err(RoomError::InvalidAction(
                "answers can only be submitted while the game is in progress".into(),
            ));
        }
        if !self.players.contains_key(player_id) {
            return Err(RoomError::Unauthorized(
                "player is not part of this room".into(),
            ));
        }
        let index = self
            .current_question
            .ok_or_else(|| RoomError::InvalidAction("no active question to answer".into()))?;
        if self.current_answers.contains_key(player_id) {
            return Err(RoomError::InvalidAction(
                "player has already answered the current question".into(),
            ));
        }

        // The index invariant holds because `current_question` is only
        // ever set within the bounds of the validated quiz.
        let question = self
            .quiz
            .questions
            .get(index)
            .expect("active question index is in bounds");

        // Case-sensitive comparison, whitespace-trimmed only.
        let correct = answer.trim() == question.answer;

        if let Some(player) = self.players.get_mut(player_id) {
            player.answers.insert(
                index,
                AnswerRecord {
                    answer: answer.to_string(),
                    correct,
                },
            );
            if correct {
                player.score += 1;
            }
            tracing::debug!(
                code = %self.code,
                player = %player_id,
                question = index,
                correct,
                "answer submitted"
            );
        }
        self.current_answers.insert(player_id.clone(), answer.to_string());
        self.touch();
        Ok(())
    }

    /// Builds the read-only projection returned to callers.
    ///
    /// Computed fresh on every call. Never includes a correct-answer
    /// string.
    pub fn state_view(&self) -> RoomStateView {
        let total = self.quiz.question_count();
        let current = self
            .current_question
            .filter(|_| self.status.is_in_progress());

        let question = current.map(|index| {
            let q = &self.quiz.questions[index];
            ActiveQuestion {
                index,
                number: index + 1,
                text: q.text.clone(),
                choices: q.choices.clone(),
                total_questions: total,
            }
        });

        let players = self
            .players
            .values()
            .map(|p| PlayerStateView {
                id: p.id.clone(),
                name: p.name.clone(),
                score: p.score,
                has_answered_current: current.is_some()
                    && self.current_answers.contains_key(&p.id),
            })
            .collect();

        RoomStateView {
            code: self.code.clone(),
            status: self.status,
            quiz_title: self.quiz.title.clone(),
            difficulty: self.difficulty.clone(),
            current_question_index: current,
            question_count: total,
            players,
            question,
        }
    }

    /// How long since the last mutating operation.
    pub fn idle_for(&self) -> Duration {
        self.last_activity.elapsed()
    }

    fn authorize_host(&self, host_id: &HostId) -> Result<(), RoomError> {
        if &self.host_id != host_id {
            return Err(RoomError::Unauthorized(
                "invalid host credentials for this room".into(),
            ));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

// =========================================================================
// Tests
// =========================================================================
