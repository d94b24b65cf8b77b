//! End-to-end flow over a durable store: profile creation, quiz run,
//! follow-ups, snapshot capture, export, and impersonation.

use prakriti_core::{
    ActiveSession, AnswerOutcome, CaptureOutcome, Dosha, ExportFormat, FollowUpManager, Profile,
    QuizError, QuizSession, SnapshotRegistry, SqliteStore,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn captured(outcome: CaptureOutcome) -> prakriti_core::UserRecord {
    match outcome {
        CaptureOutcome::Captured(record) => record,
        CaptureOutcome::DuplicateSuspected => panic!("expected a capture"),
    }
}

/// Split one all-quoted CSV row back into its values.
fn parse_csv_row(row: &str) -> Vec<String> {
    let inner = row
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .expect("row should be fully quoted");
    inner
        .split("\",\"")
        .map(|field| field.replace("\"\"", "\""))
        .collect()
}

#[test]
fn full_session_lifecycle() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(dir.path().join("prakriti.db")).unwrap();
    let session = ActiveSession::new(&store);

    // Quiz refuses to start before a profile exists.
    assert!(matches!(
        QuizSession::start(&store),
        Err(QuizError::ProfileRequired)
    ));

    let mut profile = Profile::new("Asha", 32);
    profile.health_notes = Some("mild asthma".into());
    session.save_profile(&profile).unwrap();

    // Take the quiz, stepping back once along the way.
    let mut quiz = QuizSession::with_length(&store, 4).unwrap();
    quiz.answer(Dosha::Pitta).unwrap();
    quiz.answer(Dosha::Vata).unwrap();
    assert!(quiz.go_back());
    quiz.answer(Dosha::Pitta).unwrap();
    quiz.answer(Dosha::Pitta).unwrap();
    let outcome = quiz.answer(Dosha::Kapha).unwrap();
    assert_eq!(outcome, AnswerOutcome::Completed(Dosha::Pitta));

    let result = session.result().unwrap();
    assert_eq!(result.prakriti, Dosha::Pitta);
    assert_eq!(
        result.answers,
        vec![Dosha::Pitta, Dosha::Pitta, Dosha::Pitta, Dosha::Kapha]
    );
    assert_eq!(result.profile.as_ref().unwrap().name, "Asha");

    // Manage follow-ups.
    let mut followups = FollowUpManager::load(&store);
    followups.clear_all().unwrap();
    let walk = followups.add("Evening walk", None, None).unwrap().id.clone();
    followups.add("Mint tea", Some("after lunch"), None).unwrap();
    followups.toggle(&walk).unwrap();
    assert_eq!(followups.progress(), 50);

    // Capture the session.
    let registry = SnapshotRegistry::new(&store);
    let record = captured(registry.capture(false).unwrap());
    assert_eq!(record.display_name(), "Asha");
    assert_eq!(record.prakriti(), Some(Dosha::Pitta));
    assert_eq!(record.followups.as_ref().unwrap().len(), 2);

    // Later edits to the live session leave the snapshot untouched.
    session.save_profile(&Profile::new("Ravi", 41)).unwrap();
    let mut live = FollowUpManager::load(&store);
    live.clear_all().unwrap();

    let stored = registry.view(&record.id).unwrap();
    assert_eq!(stored.profile.as_ref().unwrap().name, "Asha");
    assert_eq!(stored.followups.as_ref().unwrap().len(), 2);

    // Impersonation swaps the active session back.
    registry.impersonate(&record.id).unwrap();
    assert_eq!(session.profile().unwrap().name, "Asha");
    assert_eq!(session.followups().unwrap().len(), 2);

    // Bulk clear empties the active session but not the registry.
    session.clear();
    assert!(session.profile().is_none());
    assert!(session.result().is_none());
    assert!(session.followups().is_none());
    assert_eq!(registry.list(None).len(), 1);
}

#[test]
fn csv_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(dir.path().join("prakriti.db")).unwrap();
    let session = ActiveSession::new(&store);

    session
        .save_profile(&Profile::new("Mira \"MJ\" Rao", 28))
        .unwrap();
    let mut quiz = QuizSession::with_length(&store, 2).unwrap();
    quiz.answer(Dosha::Kapha).unwrap();
    quiz.answer(Dosha::Kapha).unwrap();

    let registry = SnapshotRegistry::new(&store);
    let record = captured(registry.capture(false).unwrap());

    let payload = registry.export_one(&record.id, ExportFormat::Csv).unwrap();
    let mut lines = payload.content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,age,prakriti,answers_count,followups_count,createdAt"
    );

    let fields = parse_csv_row(lines.next().unwrap());
    assert_eq!(fields[0], record.id);
    assert_eq!(fields[1], "Mira \"MJ\" Rao");
    assert_eq!(fields[2], "28");
    assert_eq!(fields[3], "kapha");
    assert_eq!(fields[4], "2");
}

#[test]
fn export_all_covers_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(dir.path().join("prakriti.db")).unwrap();
    let session = ActiveSession::new(&store);
    let registry = SnapshotRegistry::new(&store);

    for (name, age) in [("Asha", 32), ("Ravi", 41), ("Mira", 28)] {
        session.save_profile(&Profile::new(name, age)).unwrap();
        captured(registry.capture(false).unwrap());
    }

    let csv = registry.export_all(ExportFormat::Csv).unwrap();
    assert_eq!(csv.content.lines().count(), 4); // header + 3 rows

    let json = registry.export_all(ExportFormat::Json).unwrap();
    let parsed: Vec<prakriti_core::UserRecord> = serde_json::from_str(&json.content).unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0].display_name(), "Mira"); // newest first
}

#[test]
fn corrupt_keys_degrade_to_absent_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(dir.path().join("prakriti.db")).unwrap();
    use prakriti_core::store::{keys, RecordStore};

    for key in [keys::PROFILE, keys::RESULT, keys::FOLLOWUPS, keys::USERS] {
        store.set_raw(key, "not-json{{{").unwrap();
    }

    let session = ActiveSession::new(&store);
    assert!(session.profile().is_none());
    assert!(session.result().is_none());
    assert!(session.followups().is_none());
    assert!(SnapshotRegistry::new(&store).list(None).is_empty());

    // A corrupt profile also re-arms the quiz entry guard.
    assert!(matches!(
        QuizSession::start(&store),
        Err(QuizError::ProfileRequired)
    ));
}
