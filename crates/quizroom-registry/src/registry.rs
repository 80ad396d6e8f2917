//! The room registry: creates, tracks, and mutates quiz rooms.
//!
//! # Concurrency note
//!
//! Every operation runs under a single `tokio::sync::Mutex` covering
//! the entire room table. Operations are short and never block on I/O
//! while holding the lock, so the coarse lock is a deliberate
//! simplicity-over-throughput choice for small session counts. Within
//! one operation, reads and writes of a room are atomic with respect to
//! every other operation — no caller ever observes a half-updated room.

use std::collections::HashMap;
use std::time::Duration;

use quizroom_protocol::{
    CreatedRoom, HostId, JoinedRoom, PlayerId, Quiz, RoomCode, RoomStateView,
};
use tokio::sync::Mutex;

use crate::code::{generate_token, unique_room_code};
use crate::room::Room;
use crate::{RegistryConfig, RoomError};

/// In-memory, concurrency-safe store of live quiz rooms.
///
/// This is an explicit, constructible object — the process's
/// composition root owns it (typically behind an `Arc`) and hands it to
/// the API layer. There is no ambient singleton. All state is
/// process-lifetime only; a restart loses every room.
pub struct RoomRegistry {
    /// Live rooms, keyed by normalized code.
    rooms: Mutex<HashMap<RoomCode, Room>>,
    config: RegistryConfig,
}

impl RoomRegistry {
    /// Creates a new, empty registry with the given config.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Creates a room around an externally generated quiz.
    ///
    /// The quiz is validated eagerly — a malformed generator response
    /// is rejected here instead of surfacing as an index error
    /// mid-game. On success the caller receives the room code and the
    /// host credential; the credential is returned only this once and
    /// is the sole way to authorize `start_room`/`advance_room` later.
    pub async fn create_room(
        &self,
        host_name: &str,
        quiz: Quiz,
        difficulty: &str,
    ) -> Result<CreatedRoom, RoomError> {
        quiz.validate()?;

        let mut rooms = self.rooms.lock().await;
        let code = unique_room_code(&rooms);
        let host_id = HostId(generate_token());
        let room = Room::new(
            code.clone(),
            host_id.clone(),
            host_name.to_string(),
            quiz,
            difficulty.to_string(),
        );
        let created = CreatedRoom {
            code: code.clone(),
            host_id,
            quiz: room.quiz.clone(),
        };
        tracing::info!(
            %code,
            host = %room.host_name,
            questions = room.quiz.question_count(),
            "room created"
        );
        rooms.insert(code, room);
        Ok(created)
    }

    /// Adds a player to a room looked up by (normalized) code.
    ///
    /// Generates a fresh player credential, returned only this once.
    /// Joining is not restricted to Waiting rooms; the returned status
    /// tells the client what they walked into.
    pub async fn join_room(
        &self,
        code: &str,
        player_name: &str,
    ) -> Result<JoinedRoom, RoomError> {
        let code = RoomCode::normalize(code);
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(&code)
            .ok_or_else(|| RoomError::NotFound(code.clone()))?;

        let player_id = PlayerId(generate_token());
        room.add_player(player_id.clone(), player_name);
        tracing::info!(
            %code,
            player = %player_id,
            players = room.players.len(),
            "player joined"
        );
        Ok(JoinedRoom {
            code,
            player_id,
            quiz_title: room.quiz.title.clone(),
            status: room.status,
        })
    }

    /// Returns the current state projection without mutating anything.
    ///
    /// Clients poll this — there is no push notification path.
    pub async fn room_state(&self, code: &str) -> Result<RoomStateView, RoomError> {
        let code = RoomCode::normalize(code);
        let rooms = self.rooms.lock().await;
        let room = rooms
            .get(&code)
            .ok_or_else(|| RoomError::NotFound(code.clone()))?;
        Ok(room.state_view())
    }

    /// Starts the game. Host-only.
    pub async fn start_room(
        &self,
        code: &str,
        host_id: &HostId,
    ) -> Result<RoomStateView, RoomError> {
        let code = RoomCode::normalize(code);
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(&code)
            .ok_or_else(|| RoomError::NotFound(code.clone()))?;
        room.start(host_id)?;
        Ok(room.state_view())
    }

    /// Advances to the next question (or finishes the game). Host-only.
    ///
    /// This is the sole question-advancement path — progression is
    /// entirely host-driven, never timer-driven.
    pub async fn advance_room(
        &self,
        code: &str,
        host_id: &HostId,
    ) -> Result<RoomStateView, RoomError> {
        let code = RoomCode::normalize(code);
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(&code)
            .ok_or_else(|| RoomError::NotFound(code.clone()))?;
        room.advance(host_id)?;
        Ok(room.state_view())
    }

    /// Records and scores a player's answer to the active question.
    pub async fn submit_answer(
        &self,
        code: &str,
        player_id: &PlayerId,
        answer: &str,
    ) -> Result<RoomStateView, RoomError> {
        let code = RoomCode::normalize(code);
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(&code)
            .ok_or_else(|| RoomError::NotFound(code.clone()))?;
        room.submit_answer(player_id, answer)?;
        Ok(room.state_view())
    }

    /// Evicts every room idle longer than the configured TTL and
    /// returns the evicted codes.
    ///
    /// Never called automatically — the embedding process schedules the
    /// sweep. "Idle" means no mutating operation; polling `room_state`
    /// does not keep a room alive.
    pub async fn expire_idle(&self) -> Vec<RoomCode> {
        let ttl = Duration::from_secs(self.config.idle_ttl_secs);
        let mut rooms = self.rooms.lock().await;

        let expired: Vec<RoomCode> = rooms
            .iter()
            .filter(|(_, room)| room.idle_for() > ttl)
            .map(|(code, _)| code.clone())
            .collect();

        for code in &expired {
            rooms.remove(code);
            tracing::info!(%code, "room expired (idle TTL elapsed)");
        }
        expired
    }

    /// Returns the number of live rooms.
    pub async fn room_count(&self) -> usize {
        self.rooms.lock().await.len()
    }

    /// Returns `true` if there are no live rooms.
    pub async fn is_empty(&self) -> bool {
        self.rooms.lock().await.is_empty()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

// =========================================================================
// Tests
// =========================================================================
