//! Prakriti Core Library
//!
//! Local-first data layer for a single-user wellness tool: a questionnaire
//! classifies the user into one of three prakriti categories (vata, pitta,
//! kapha), drives derived diet/routine content, and an operator view
//! captures, replays, and exports snapshots of whole sessions.
//!
//! # Architecture
//!
//! ```text
//!        Presentation layer (external collaborator)
//!   profile form / quiz input / follow-up edits / operator view
//!        │              │              │              │
//!        ▼              ▼              ▼              ▼
//!  ActiveSession   QuizSession   FollowUpManager  SnapshotRegistry
//!        │              │              │              │
//!        │        classify(answers)    │       capture / impersonate
//!        │              │              │       JSON / CSV export
//!        └──────────────┴──────┬───────┴──────────────┘
//!                              ▼
//!                 RecordStore (flat key → JSON)
//!        prakriti_profile   prakriti_result
//!        prakriti_followups prakriti_users
//! ```
//!
//! Components never call back into the presentation layer, and the store
//! is injected so every component can run against [`store::MemoryStore`]
//! in tests and [`store::SqliteStore`] in production.
//!
//! # Modules
//!
//! - [`store`]: typed get/set/remove over a flat key-value namespace;
//!   corrupt payloads read as absent, rejected writes keep prior state
//! - [`models`]: domain types (Profile, QuizResult, FollowUpTask, UserRecord)
//! - [`classify`]: deterministic prakriti classification with fixed
//!   tie-break priority
//! - [`quiz`] / [`questions`]: quiz session state machine and question bank
//! - [`followups`]: follow-up task CRUD with progress computation
//! - [`registry`] / [`export`]: saved-session snapshots, impersonation,
//!   JSON/CSV export
//! - [`content`]: per-dosha diet charts, routines, and recommendations
//! - [`session`]: active-session profile/result access and bulk clear

pub mod classify;
pub mod content;
pub mod export;
pub mod followups;
pub mod models;
pub mod questions;
pub mod quiz;
pub mod registry;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use classify::classify;
pub use export::{ExportFormat, ExportPayload};
pub use followups::{FollowUpError, FollowUpManager};
pub use models::{Dosha, FollowUpTask, Profile, ProfileError, QuizResult, UserRecord};
pub use quiz::{AnswerOutcome, QuizError, QuizSession};
pub use registry::{CaptureOutcome, RegistryError, SnapshotRegistry};
pub use session::{ActiveSession, SessionError};
pub use store::{MemoryStore, RecordStore, SqliteStore, StoreError};
