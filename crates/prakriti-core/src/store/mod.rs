//! Record store: typed get/set/remove over a flat key-value namespace.
//!
//! Reads never fail: an absent key or a malformed payload both read as
//! absent. Writes can be rejected by the medium, in which case the
//! previous value is left untouched and the rejection is reported.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Fixed keys for the active session and the snapshot registry.
pub mod keys {
    pub const PROFILE: &str = "prakriti_profile";
    pub const RESULT: &str = "prakriti_result";
    pub const FOLLOWUPS: &str = "prakriti_followups";
    pub const USERS: &str = "prakriti_users";
}

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Write rejected: {0}")]
    WriteRejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Flat key-value storage with JSON payloads.
///
/// Components take the store as an injected dependency so tests can swap
/// in [`MemoryStore`] for the durable [`SqliteStore`].
pub trait RecordStore {
    /// Raw payload at `key`, or `None` if absent or unreadable.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Persist a raw payload under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`. Deleting an absent key is a no-op.
    fn remove(&self, key: &str);

    /// Read and parse the value at `key`. A malformed payload reads as
    /// absent rather than surfacing an error.
    fn get_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("treating malformed payload at {} as absent: {}", key, e);
                None
            }
        }
    }

    /// Serialize and persist a value under `key`.
    fn set_value<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}
