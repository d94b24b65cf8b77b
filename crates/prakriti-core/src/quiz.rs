//! Quiz session state machine.
//!
//! A session moves `AwaitingProfile -> InProgress -> Completed`. The first
//! state is the entry guard: [`QuizSession::start`] refuses to construct a
//! running session while no profile is stored, and the collaborator is
//! expected to send the user to profile creation instead. Completion
//! commits the result to the store; `Completed` is stable until
//! [`QuizSession::restart`].

use log::debug;
use thiserror::Error;

use crate::classify::classify;
use crate::models::{Dosha, Profile, QuizResult};
use crate::questions::QUESTIONS;
use crate::store::{keys, RecordStore, StoreError};

/// Quiz session errors.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("A profile is required before starting the quiz")]
    ProfileRequired,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of an [`QuizSession::answer`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// Answer recorded; now at question `index`.
    Advanced { index: usize },
    /// Final answer recorded and result committed.
    Completed(Dosha),
    /// Input dropped: the session is complete, or another transition was
    /// still being applied (rapid repeated input).
    Ignored,
}

/// An in-progress or completed quiz run over the injected store.
pub struct QuizSession<'a, S: RecordStore> {
    store: &'a S,
    total: usize,
    index: usize,
    answers: Vec<Dosha>,
    applying: bool,
    result: Option<QuizResult>,
}

impl<'a, S: RecordStore> QuizSession<'a, S> {
    /// Start a session over the canonical question bank.
    pub fn start(store: &'a S) -> Result<Self, QuizError> {
        Self::with_length(store, QUESTIONS.len())
    }

    /// Start a session with an explicit question count.
    pub fn with_length(store: &'a S, total: usize) -> Result<Self, QuizError> {
        if store.get_value::<Profile>(keys::PROFILE).is_none() {
            return Err(QuizError::ProfileRequired);
        }
        Ok(Self {
            store,
            total,
            index: 0,
            answers: Vec::new(),
            applying: false,
            result: None,
        })
    }

    /// Current question index (0-based).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Answers recorded so far, in order.
    pub fn answers(&self) -> &[Dosha] {
        &self.answers
    }

    /// Total number of questions in this run.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// The committed result, once the session is complete.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Record an answer tag.
    ///
    /// On the last question this classifies the full sequence, commits
    /// `{prakriti, answers, profile}` under the result key (overwriting
    /// any prior result, with the profile read as a value copy at this
    /// moment) and completes the session. A rejected commit leaves both
    /// the store and the session state unchanged.
    pub fn answer(&mut self, tag: Dosha) -> Result<AnswerOutcome, QuizError> {
        if self.applying || self.is_complete() {
            return Ok(AnswerOutcome::Ignored);
        }
        self.applying = true;
        let outcome = self.apply_answer(tag);
        self.applying = false;
        outcome
    }

    fn apply_answer(&mut self, tag: Dosha) -> Result<AnswerOutcome, QuizError> {
        self.answers.push(tag);

        if self.answers.len() >= self.total {
            let prakriti = classify(&self.answers);
            let result = QuizResult {
                prakriti,
                answers: self.answers.clone(),
                profile: self.store.get_value(keys::PROFILE),
            };
            if let Err(e) = self.store.set_value(keys::RESULT, &result) {
                self.answers.pop();
                return Err(e.into());
            }
            self.result = Some(result);
            debug!("quiz complete: {}", prakriti);
            Ok(AnswerOutcome::Completed(prakriti))
        } else {
            self.index += 1;
            Ok(AnswerOutcome::Advanced { index: self.index })
        }
    }

    /// Drop the most recent answer and step back one question. No-op at
    /// the first question, after completion, or while a transition is
    /// being applied. Returns whether a step was taken.
    pub fn go_back(&mut self) -> bool {
        if self.applying || self.is_complete() || self.index == 0 {
            return false;
        }
        self.answers.pop();
        self.index -= 1;
        true
    }

    /// Reset to the first question from any state. The stored result is
    /// removed immediately: a retake invalidates the prior classification
    /// up front, not lazily.
    pub fn restart(&mut self) {
        self.index = 0;
        self.answers.clear();
        self.result = None;
        self.applying = false;
        self.store.remove(keys::RESULT);
        debug!("quiz restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use Dosha::{Kapha, Pitta, Vata};

    fn store_with_profile() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .set_value(keys::PROFILE, &Profile::new("Asha", 32))
            .unwrap();
        store
    }

    #[test]
    fn test_entry_guard_requires_profile() {
        let store = MemoryStore::new();
        assert!(matches!(
            QuizSession::start(&store),
            Err(QuizError::ProfileRequired)
        ));
    }

    #[test]
    fn test_advances_through_questions() {
        let store = store_with_profile();
        let mut session = QuizSession::with_length(&store, 3).unwrap();

        assert_eq!(
            session.answer(Vata).unwrap(),
            AnswerOutcome::Advanced { index: 1 }
        );
        assert_eq!(
            session.answer(Pitta).unwrap(),
            AnswerOutcome::Advanced { index: 2 }
        );
        assert_eq!(session.answers(), &[Vata, Pitta]);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_completion_commits_result() {
        let store = store_with_profile();
        let mut session = QuizSession::with_length(&store, 3).unwrap();

        session.answer(Kapha).unwrap();
        session.answer(Kapha).unwrap();
        let outcome = session.answer(Vata).unwrap();
        assert_eq!(outcome, AnswerOutcome::Completed(Kapha));
        assert!(session.is_complete());

        let stored: QuizResult = store.get_value(keys::RESULT).unwrap();
        assert_eq!(stored.prakriti, Kapha);
        assert_eq!(stored.answers, vec![Kapha, Kapha, Vata]);
        assert_eq!(stored.profile.unwrap().name, "Asha");
    }

    #[test]
    fn test_completed_session_ignores_input() {
        let store = store_with_profile();
        let mut session = QuizSession::with_length(&store, 1).unwrap();

        session.answer(Pitta).unwrap();
        assert_eq!(session.answer(Vata).unwrap(), AnswerOutcome::Ignored);
        assert!(!session.go_back());
        assert_eq!(session.answers(), &[Pitta]);
    }

    #[test]
    fn test_go_back_reverts_last_answer() {
        let store = store_with_profile();
        let mut session = QuizSession::with_length(&store, 3).unwrap();

        session.answer(Vata).unwrap();
        session.answer(Pitta).unwrap();

        assert!(session.go_back());
        assert_eq!(session.index(), 1);
        assert_eq!(session.answers(), &[Vata]);
    }

    #[test]
    fn test_go_back_noop_at_first_question() {
        let store = store_with_profile();
        let mut session = QuizSession::with_length(&store, 3).unwrap();

        assert!(!session.go_back());
        assert_eq!(session.index(), 0);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_restart_clears_answers_and_stored_result() {
        let store = store_with_profile();
        let mut session = QuizSession::with_length(&store, 2).unwrap();

        session.answer(Vata).unwrap();
        session.answer(Vata).unwrap();
        assert!(store.get_raw(keys::RESULT).is_some());

        session.restart();
        assert_eq!(session.index(), 0);
        assert!(session.answers().is_empty());
        assert!(!session.is_complete());
        assert!(store.get_raw(keys::RESULT).is_none());
    }

    #[test]
    fn test_retake_overwrites_prior_result() {
        let store = store_with_profile();
        let mut session = QuizSession::with_length(&store, 1).unwrap();

        session.answer(Kapha).unwrap();
        session.restart();
        session.answer(Pitta).unwrap();

        let stored: QuizResult = store.get_value(keys::RESULT).unwrap();
        assert_eq!(stored.prakriti, Pitta);
    }

    #[test]
    fn test_rejected_commit_keeps_session_state() {
        let store = store_with_profile();
        let mut session = QuizSession::with_length(&store, 2).unwrap();

        session.answer(Vata).unwrap();
        store.set_reject_writes(true);
        assert!(session.answer(Pitta).is_err());

        // Still in progress on the last question, final answer not kept.
        assert!(!session.is_complete());
        assert_eq!(session.answers(), &[Vata]);
        assert_eq!(session.index(), 1);

        store.set_reject_writes(false);
        assert_eq!(
            session.answer(Pitta).unwrap(),
            AnswerOutcome::Completed(Vata)
        );
    }
}
