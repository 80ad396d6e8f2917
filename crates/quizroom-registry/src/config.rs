//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`RoomRegistry`](crate::RoomRegistry).
///
/// The embedding process builds one of these at its composition root
/// and hands it to the registry constructor. Sensible defaults are
/// provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// How long (in seconds) a room may go without any mutating
    /// operation before [`expire_idle`](crate::RoomRegistry::expire_idle)
    /// evicts it.
    ///
    /// Rooms are never evicted automatically — the embedding process
    /// decides when to sweep. Default: 3600 seconds (one hour).
    pub idle_ttl_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: 3600,
        }
    }
}
