//! Snapshot registry: capture, browse, export and impersonate saved
//! sessions.
//!
//! The registry holds no state of its own; every operation is a single
//! read-modify-persist cycle over the users list in the store. Records are
//! ordered newest first.

use log::debug;
use thiserror::Error;

use crate::export::{export_collection, export_record, ExportFormat, ExportPayload};
use crate::models::{FollowUpTask, Profile, QuizResult, UserRecord};
use crate::store::{keys, RecordStore, StoreError};

/// Registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("No local profile, result or follow-ups to save")]
    NothingToCapture,

    #[error("No saved user with id {0}")]
    NotFound(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a capture attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// Snapshot stored as the newest registry entry.
    Captured(UserRecord),
    /// The newest saved record has the same profile name and prakriti as
    /// the candidate. Nothing was stored; retry with `confirmed = true`
    /// to save anyway.
    DuplicateSuspected,
}

/// Saved-session registry over the injected store.
pub struct SnapshotRegistry<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> SnapshotRegistry<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Capture the active session as a new snapshot.
    ///
    /// Fails without mutation when profile, result and follow-ups are all
    /// absent. The duplicate check compares the candidate against the
    /// newest record only (not the full history): a match asks for a
    /// confirmed retry instead of saving.
    pub fn capture(&self, confirmed: bool) -> Result<CaptureOutcome, RegistryError> {
        let profile: Option<Profile> = self.store.get_value(keys::PROFILE);
        let result: Option<QuizResult> = self.store.get_value(keys::RESULT);
        let followups: Option<Vec<FollowUpTask>> = self.store.get_value(keys::FOLLOWUPS);

        if profile.is_none() && result.is_none() && followups.is_none() {
            return Err(RegistryError::NothingToCapture);
        }

        let record = UserRecord::new(profile, result, followups);
        let mut users = self.load_users();

        if !confirmed {
            if let Some(newest) = users.first() {
                if looks_duplicate(newest, &record) {
                    return Ok(CaptureOutcome::DuplicateSuspected);
                }
            }
        }

        users.insert(0, record.clone());
        self.persist(&users)?;
        debug!("captured snapshot {} ({})", record.id, record.display_name());
        Ok(CaptureOutcome::Captured(record))
    }

    /// All records, optionally filtered by a case-insensitive substring
    /// match against profile name or prakriti. Insertion order (newest
    /// first) is preserved; pagination is the collaborator's job.
    pub fn list(&self, filter: Option<&str>) -> Vec<UserRecord> {
        let users = self.load_users();
        let needle = match filter.map(str::trim).filter(|f| !f.is_empty()) {
            Some(f) => f.to_lowercase(),
            None => return users,
        };

        users
            .into_iter()
            .filter(|u| {
                let name_match = u
                    .profile
                    .as_ref()
                    .map(|p| p.name.to_lowercase().contains(&needle))
                    .unwrap_or(false);
                let prakriti_match = u
                    .prakriti()
                    .map(|d| d.as_str().contains(&needle))
                    .unwrap_or(false);
                name_match || prakriti_match
            })
            .collect()
    }

    /// Read one record by id.
    pub fn view(&self, id: &str) -> Option<UserRecord> {
        self.load_users().into_iter().find(|u| u.id == id)
    }

    /// Delete one record by id. Returns whether the id existed, so the
    /// collaborator can drop a dangling selection pointing at it.
    pub fn remove(&self, id: &str) -> Result<bool, RegistryError> {
        let mut users = self.load_users();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.persist(&users)?;
        Ok(true)
    }

    /// Delete every record. Confirmation happens at the collaborator
    /// boundary before this is called.
    pub fn clear_all(&self) -> Result<(), RegistryError> {
        self.persist(&[])
    }

    /// Export one record. Does not touch the stored collection.
    pub fn export_one(
        &self,
        id: &str,
        format: ExportFormat,
    ) -> Result<ExportPayload, RegistryError> {
        let record = self
            .view(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        Ok(export_record(&record, format)?)
    }

    /// Export the whole collection. Does not touch the stored collection.
    pub fn export_all(&self, format: ExportFormat) -> Result<ExportPayload, RegistryError> {
        Ok(export_collection(&self.load_users(), format)?)
    }

    /// Replace the active session with deep copies of the snapshot's
    /// fields. A null field removes the corresponding active key: this is
    /// a session replacement, not a merge. The snapshot itself is never
    /// mutated. Confirmation happens at the collaborator boundary; the
    /// returned record lets the caller navigate to the session view.
    pub fn impersonate(&self, id: &str) -> Result<UserRecord, RegistryError> {
        let record = self
            .view(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        match &record.profile {
            Some(profile) => self.store.set_value(keys::PROFILE, profile)?,
            None => self.store.remove(keys::PROFILE),
        }
        match &record.result {
            Some(result) => self.store.set_value(keys::RESULT, result)?,
            None => self.store.remove(keys::RESULT),
        }
        match &record.followups {
            Some(followups) => self.store.set_value(keys::FOLLOWUPS, followups)?,
            None => self.store.remove(keys::FOLLOWUPS),
        }

        debug!("impersonating {} ({})", record.id, record.display_name());
        Ok(record)
    }

    fn load_users(&self) -> Vec<UserRecord> {
        self.store.get_value(keys::USERS).unwrap_or_default()
    }

    fn persist(&self, users: &[UserRecord]) -> Result<(), RegistryError> {
        self.store.set_value(keys::USERS, &users)?;
        Ok(())
    }
}

fn looks_duplicate(newest: &UserRecord, candidate: &UserRecord) -> bool {
    let name = |u: &UserRecord| u.profile.as_ref().map(|p| p.name.clone());
    name(newest) == name(candidate) && newest.prakriti() == candidate.prakriti()
}
