//! Active-session operations: profile save/load, result read, bulk clear.
//!
//! The active session is the single well-known slot in the store (one
//! profile, one result, one follow-up collection), as opposed to the
//! archived snapshots in the registry.

use log::debug;
use thiserror::Error;

use crate::models::{FollowUpTask, Profile, ProfileError, QuizResult};
use crate::store::{keys, RecordStore, StoreError};

/// Active-session errors.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ProfileError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Thin facade over the active session's keys.
pub struct ActiveSession<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> ActiveSession<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate and store the profile, replacing any previous one
    /// wholesale. An invalid profile leaves the stored one untouched.
    pub fn save_profile(&self, profile: &Profile) -> Result<(), SessionError> {
        profile.validate()?;
        self.store.set_value(keys::PROFILE, profile)?;
        Ok(())
    }

    pub fn profile(&self) -> Option<Profile> {
        self.store.get_value(keys::PROFILE)
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.store.get_value(keys::RESULT)
    }

    pub fn followups(&self) -> Option<Vec<FollowUpTask>> {
        self.store.get_value(keys::FOLLOWUPS)
    }

    /// Remove profile, result and follow-ups together. Confirmation
    /// happens at the collaborator boundary before this is called.
    pub fn clear(&self) {
        self.store.remove(keys::PROFILE);
        self.store.remove(keys::RESULT);
        self.store.remove(keys::FOLLOWUPS);
        debug!("active session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_save_and_load_profile() {
        let store = MemoryStore::new();
        let session = ActiveSession::new(&store);

        session.save_profile(&Profile::new("Asha", 32)).unwrap();
        assert_eq!(session.profile().unwrap().name, "Asha");
    }

    #[test]
    fn test_resave_replaces_wholesale() {
        let store = MemoryStore::new();
        let session = ActiveSession::new(&store);

        let mut first = Profile::new("Asha", 32);
        first.health_notes = Some("mild asthma".into());
        session.save_profile(&first).unwrap();

        session.save_profile(&Profile::new("Asha", 33)).unwrap();
        let stored = session.profile().unwrap();
        assert_eq!(stored.age, 33);
        assert_eq!(stored.health_notes, None); // no field-level merge
    }

    #[test]
    fn test_invalid_profile_keeps_previous() {
        let store = MemoryStore::new();
        let session = ActiveSession::new(&store);
        session.save_profile(&Profile::new("Asha", 32)).unwrap();

        assert!(session.save_profile(&Profile::new("", 40)).is_err());
        assert!(session.save_profile(&Profile::new("Ravi", 0)).is_err());
        assert_eq!(session.profile().unwrap().name, "Asha");
    }

    #[test]
    fn test_clear_removes_all_three_keys() {
        let store = MemoryStore::new();
        let session = ActiveSession::new(&store);

        session.save_profile(&Profile::new("Asha", 32)).unwrap();
        store.set_raw(keys::RESULT, "{}").unwrap();
        store.set_raw(keys::FOLLOWUPS, "[]").unwrap();

        session.clear();
        assert!(store.get_raw(keys::PROFILE).is_none());
        assert!(store.get_raw(keys::RESULT).is_none());
        assert!(store.get_raw(keys::FOLLOWUPS).is_none());
    }
}
