//! Derived, read-only projections of room state.
//!
//! These are what the registry hands back to the API layer — computed
//! fresh on every call, never the stored representation itself. The one
//! hard rule: nothing in here may carry a question's correct answer.

use serde::{Deserialize, Serialize};

use crate::{HostId, PlayerId, Quiz, RoomCode, RoomStatus};

// ---------------------------------------------------------------------------
// Operation results
// ---------------------------------------------------------------------------

/// The result of creating a room.
///
/// The `host_id` is returned exactly once, here. The caller must store
/// it — it is the only way to authorize `start`/`advance` later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRoom {
    pub code: RoomCode,
    pub host_id: HostId,
    /// Echo of the quiz the room was built around, so the host UI can
    /// show questions (and answers) without a second fetch.
    pub quiz: Quiz,
}

/// The result of joining a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedRoom {
    /// The normalized room code.
    pub code: RoomCode,
    /// The new player's credential. Returned only here.
    pub player_id: PlayerId,
    pub quiz_title: String,
    /// The room status at join time (joining mid-game is allowed).
    pub status: RoomStatus,
}

// ---------------------------------------------------------------------------
// RoomStateView
// ---------------------------------------------------------------------------

/// One player's entry in the scoreboard projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStateView {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    /// `true` iff the game is in progress and this player has submitted
    /// an answer for the currently active question.
    pub has_answered_current: bool,
}

/// The question currently presented to players.
///
/// Deliberately excludes the correct answer — this view is sent to
/// every poller, players included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuestion {
    /// Zero-based index into the quiz.
    pub index: usize,
    /// One-based display number ("Question 3 of 5").
    pub number: usize,
    pub text: String,
    pub choices: Vec<String>,
    pub total_questions: usize,
}

/// The full room projection returned by every registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStateView {
    pub code: RoomCode,
    pub status: RoomStatus,
    pub quiz_title: String,
    pub difficulty: String,
    /// Present only while the game is in progress.
    pub current_question_index: Option<usize>,
    pub question_count: usize,
    pub players: Vec<PlayerStateView>,
    /// Present only while the game is in progress; omitted entirely
    /// while Waiting or Finished.
    pub question: Option<ActiveQuestion>,
}

// =========================================================================
// Tests
// =========================================================================
