//! Room code and credential generation.
//!
//! Both draw from `rand::rng()`, which is cryptographically strong —
//! room codes are guessable by design (36^6 keyspace, they're meant to
//! be typed from a screen), but host/player credentials must not be.

use std::collections::HashMap;

use quizroom_protocol::RoomCode;
use rand::Rng;

/// The characters a room code is drawn from.
pub(crate) const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a room code.
pub(crate) const CODE_LENGTH: usize = 6;

/// Draws one candidate room code uniformly from the alphabet.
fn random_code() -> RoomCode {
    let mut rng = rand::rng();
    let code: String = (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    RoomCode(code)
}

/// Generates a room code that no live room currently uses.
///
/// Collisions are retried. With a 36^6 keyspace and small room counts
/// the expected retry count is ~0, but the check is real — a duplicate
/// code would let two sessions answer each other's questions.
pub(crate) fn unique_room_code<V>(live: &HashMap<RoomCode, V>) -> RoomCode {
    loop {
        let code = random_code();
        if !live.contains_key(&code) {
            return code;
        }
    }
}

/// Generates a random 32-character hex string (128 bits of entropy).
///
/// Used for host and player credentials. 128 bits makes guessing a
/// valid credential computationally infeasible.
pub(crate) fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// =========================================================================
// Tests
// =========================================================================
