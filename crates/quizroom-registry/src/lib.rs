//! In-memory quiz room registry for Quizroom.
//!
//! The registry is the coordination core of a multiplayer quiz session:
//! a host creates a room around an externally generated quiz, players
//! join with a short code, the host advances through questions in
//! lockstep, and answers are scored against the active question. All
//! mutation goes through one coarse lock; all reads return fresh,
//! derived projections.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — the operation surface (create, join, start,
//!   advance, submit-answer, read-state, idle expiry)
//! - [`RegistryConfig`] — injectable settings (idle TTL)
//! - [`RoomError`] / [`ErrorClass`] — the typed error surface and its
//!   mapping to transport status families

mod code;
mod config;
mod error;
mod registry;
mod room;

pub use config::RegistryConfig;
pub use error::{ErrorClass, RoomError};
pub use registry::RoomRegistry;
