//! Boundary types for Quizroom.
//!
//! Everything the registry exchanges with the outside world lives here:
//! identity newtypes, the quiz data model (with eager validation), the
//! room lifecycle enum, and the read-only state projections the API
//! layer serializes.
//!
//! # Key types
//!
//! - [`RoomCode`], [`HostId`], [`PlayerId`] — opaque identifiers
//! - [`Quiz`] / [`Question`] — the externally generated quiz content
//! - [`RoomStatus`] — lifecycle state machine
//! - [`RoomStateView`] — the projection returned by every operation

mod error;
mod quiz;
mod types;
mod view;

pub use error::QuizError;
pub use quiz::{Question, Quiz};
pub use types::{HostId, PlayerId, RoomCode, RoomStatus};
pub use view::{ActiveQuestion, CreatedRoom, JoinedRoom, PlayerStateView, RoomStateView};
