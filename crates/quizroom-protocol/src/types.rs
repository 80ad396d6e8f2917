//! Identity types and the room lifecycle enum.
//!
//! Everything here crosses the API boundary, so it all derives serde
//! traits. The identifiers are newtype wrappers around `String`:
//! a `HostId` can never be passed where a `PlayerId` is expected, even
//! though both are opaque strings underneath.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// RoomCode
// ---------------------------------------------------------------------------

/// A short human-enterable room code (6 uppercase alphanumeric chars).
///
/// Codes are generated by the registry; anything user-typed goes through
/// [`RoomCode::normalize`] first so that `" ab12cd "` and `"AB12CD"`
/// refer to the same room.
///
/// `#[serde(transparent)]` makes a code serialize as a plain JSON string,
/// not `{ "0": "AB12CD" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(pub String);

impl RoomCode {
    /// Normalizes raw user input into lookup form: trimmed and uppercased.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// HostId / PlayerId
// ---------------------------------------------------------------------------

/// The host's secret credential, generated at room creation.
///
/// Knowing this token is what authorizes `start` and `advance` — it is
/// returned exactly once, to the creator, and never appears in any
/// state projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostId(pub String);

impl HostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A player's secret credential, generated at join time.
///
/// Doubles as the player's identity in state projections (scoreboards
/// key off it), so unlike [`HostId`] it is visible to everyone in the
/// room. It still gates `submit_answer`: only the holder can answer as
/// that player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of a quiz room.
///
/// Transitions are strictly ordered and entirely host-driven:
///
/// ```text
/// Waiting ──(start)──→ InProgress ──(advance past last question)──→ Finished
/// ```
///
/// - **Waiting**: room exists, players are joining, no active question.
/// - **InProgress**: the host started the game; exactly one question is
///   active at a time.
/// - **Finished**: the host advanced past the last question. Terminal.
///
/// `rename_all = "snake_case"` gives `"waiting"` / `"in_progress"` /
/// `"finished"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Waiting,
    InProgress,
    Finished,
}

impl RoomStatus {
    /// Returns `true` while the game is running.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns `true` once the game has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_code_normalize_trims_and_uppercases() {
        assert_eq!(RoomCode::normalize("  ab12cd "), RoomCode("AB12CD".into()));
        assert_eq!(RoomCode::normalize("AB12CD"), RoomCode("AB12CD".into()));
    }

    #[test]
    fn test_room_code_serializes_as_plain_string() {
        // `#[serde(transparent)]` means RoomCode("X") → `"X"`, not `{"0":"X"}`.
        let json = serde_json::to_string(&RoomCode("AB12CD".into())).unwrap();
        assert_eq!(json, "\"AB12CD\"");
    }

    #[test]
    fn test_player_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PlayerId("deadbeef".into())).unwrap();
        assert_eq!(json, "\"deadbeef\"");
    }

    #[test]
    fn test_room_status_serializes_as_snake_case() {
        let json = serde_json::to_string(&RoomStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let json = serde_json::to_string(&RoomStatus::Waiting).unwrap();
        assert_eq!(json, "\"waiting\"");
    }

    #[test]
    fn test_room_status_predicates() {
        assert!(!RoomStatus::Waiting.is_in_progress());
        assert!(RoomStatus::InProgress.is_in_progress());
        assert!(!RoomStatus::Finished.is_in_progress());
        assert!(RoomStatus::Finished.is_finished());
    }

    #[test]
    fn test_room_status_display() {
        assert_eq!(RoomStatus::InProgress.to_string(), "in_progress");
        assert_eq!(RoomStatus::Finished.to_string(), "finished");
    }
}
