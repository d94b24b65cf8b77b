//! Saved-session snapshot model.

use serde::{Deserialize, Serialize};

use super::{Dosha, FollowUpTask, Profile, QuizResult};

/// A captured session snapshot. Immutable once created (apart from
/// deletion); each payload field is a deep, independent copy of the active
/// session's value at capture time, or null if that key was absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// Unique record ID
    pub id: String,
    /// Capture timestamp
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Profile at capture time
    pub profile: Option<Profile>,
    /// Quiz result at capture time
    pub result: Option<QuizResult>,
    /// Follow-up collection at capture time
    pub followups: Option<Vec<FollowUpTask>>,
}

impl UserRecord {
    /// Build a snapshot with a fresh id and timestamp.
    pub fn new(
        profile: Option<Profile>,
        result: Option<QuizResult>,
        followups: Option<Vec<FollowUpTask>>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            profile,
            result,
            followups,
        }
    }

    /// Profile name for display and export filenames, with the fallback
    /// used for records captured without a profile.
    pub fn display_name(&self) -> &str {
        self.profile.as_ref().map(|p| p.name.as_str()).unwrap_or("user")
    }

    /// Captured prakriti, if a result was present.
    pub fn prakriti(&self) -> Option<Dosha> {
        self.result.as_ref().map(|r| r.prakriti)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = UserRecord::new(Some(Profile::new("Asha", 32)), None, None);
        assert_eq!(record.id.len(), 36);
        assert_eq!(record.display_name(), "Asha");
        assert_eq!(record.prakriti(), None);
    }

    #[test]
    fn test_display_name_fallback() {
        let record = UserRecord::new(None, None, Some(vec![]));
        assert_eq!(record.display_name(), "user");
    }

    #[test]
    fn test_null_fields_round_trip() {
        let record = UserRecord::new(None, None, None);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"profile\":null"));

        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
