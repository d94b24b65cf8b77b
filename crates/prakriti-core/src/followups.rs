//! Follow-up task manager.
//!
//! Operations over an ordered task collection, persisted to the store
//! after every mutation. A rejected persist rolls back: the in-memory
//! collection and the stored one both keep their prior state.

use log::warn;
use thiserror::Error;

use crate::models::{default_tasks, FollowUpTask};
use crate::store::{keys, RecordStore, StoreError};

/// Follow-up manager errors.
#[derive(Error, Debug)]
pub enum FollowUpError {
    #[error("Please enter a title")]
    EmptyTitle,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD and progress over the persisted follow-up collection.
pub struct FollowUpManager<'a, S: RecordStore> {
    store: &'a S,
    items: Vec<FollowUpTask>,
}

impl<'a, S: RecordStore> FollowUpManager<'a, S> {
    /// Load the stored collection. When nothing has ever been stored (or
    /// the payload is unreadable) the starter tasks are seeded and
    /// persisted; an explicitly cleared collection stays empty.
    pub fn load(store: &'a S) -> Self {
        let items = match store.get_value::<Vec<FollowUpTask>>(keys::FOLLOWUPS) {
            Some(items) => items,
            None => {
                let seeded = default_tasks();
                if let Err(e) = store.set_value(keys::FOLLOWUPS, &seeded) {
                    warn!("could not persist seeded follow-ups: {}", e);
                }
                seeded
            }
        };
        Self { store, items }
    }

    /// Tasks in display order, newest first.
    pub fn items(&self) -> &[FollowUpTask] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend a new open task. An empty or whitespace title is rejected
    /// without touching the collection.
    pub fn add(
        &mut self,
        title: &str,
        note: Option<&str>,
        due: Option<&str>,
    ) -> Result<&FollowUpTask, FollowUpError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FollowUpError::EmptyTitle);
        }

        let task = FollowUpTask::new(title, clean(note), clean(due));
        let mut next = self.items.clone();
        next.insert(0, task);
        self.commit(next)?;
        Ok(&self.items[0])
    }

    /// Replace the editable fields of the task with matching id. Returns
    /// `false` (no-op) when the id is absent.
    pub fn update(
        &mut self,
        id: &str,
        title: &str,
        note: Option<&str>,
        due: Option<&str>,
    ) -> Result<bool, FollowUpError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FollowUpError::EmptyTitle);
        }
        if !self.items.iter().any(|t| t.id == id) {
            return Ok(false);
        }

        let mut next = self.items.clone();
        for task in next.iter_mut().filter(|t| t.id == id) {
            task.title = title.to_string();
            task.note = clean(note);
            task.due = clean(due);
        }
        self.commit(next)?;
        Ok(true)
    }

    /// Flip the done flag of the task with matching id.
    pub fn toggle(&mut self, id: &str) -> Result<bool, FollowUpError> {
        if !self.items.iter().any(|t| t.id == id) {
            return Ok(false);
        }

        let mut next = self.items.clone();
        for task in next.iter_mut().filter(|t| t.id == id) {
            task.done = !task.done;
        }
        self.commit(next)?;
        Ok(true)
    }

    /// Delete the task with matching id. Confirmation happens at the
    /// collaborator boundary before this is called.
    pub fn remove(&mut self, id: &str) -> Result<bool, FollowUpError> {
        let mut next = self.items.clone();
        let before = next.len();
        next.retain(|t| t.id != id);
        if next.len() == before {
            return Ok(false);
        }
        self.commit(next)?;
        Ok(true)
    }

    /// Empty the collection. Confirmation happens at the collaborator
    /// boundary before this is called.
    pub fn clear_all(&mut self) -> Result<(), FollowUpError> {
        self.commit(Vec::new())
    }

    /// Completion percentage, rounded; 0 for an empty collection.
    pub fn progress(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let done = self.items.iter().filter(|t| t.done).count();
        ((done as f64 / self.items.len() as f64) * 100.0).round() as u8
    }

    fn commit(&mut self, next: Vec<FollowUpTask>) -> Result<(), FollowUpError> {
        self.store.set_value(keys::FOLLOWUPS, &next)?;
        self.items = next;
        Ok(())
    }
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
