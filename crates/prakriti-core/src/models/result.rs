//! Quiz result model.

use serde::{Deserialize, Serialize};

use super::{Dosha, Profile};

/// A committed quiz result. Created once on quiz completion and replaced
/// wholesale on a retake.
///
/// The embedded profile is a value copy taken at completion time; later
/// edits to the live profile do not change a stored result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizResult {
    /// Dominant category
    pub prakriti: Dosha,
    /// Ordered answer sequence, one tag per question
    pub answers: Vec<Dosha>,
    /// Profile snapshot at completion time
    pub profile: Option<Profile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_shape() {
        let result = QuizResult {
            prakriti: Dosha::Pitta,
            answers: vec![Dosha::Pitta, Dosha::Vata, Dosha::Pitta],
            profile: Some(Profile::new("Asha", 32)),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["prakriti"], "pitta");
        assert_eq!(json["answers"][1], "vata");
        assert_eq!(json["profile"]["name"], "Asha");
    }

    #[test]
    fn test_profile_is_value_copy() {
        let mut live = Profile::new("Asha", 32);
        let result = QuizResult {
            prakriti: Dosha::Vata,
            answers: vec![Dosha::Vata],
            profile: Some(live.clone()),
        };

        live.name = "Renamed".into();
        assert_eq!(result.profile.as_ref().unwrap().name, "Asha");
    }
}
