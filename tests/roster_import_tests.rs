//! Integration tests for roster ingestion.

use timetable_rs::db::repositories::LocalRepository;
use timetable_rs::db::services;
use timetable_rs::services::{import_roster, ImportError};

const NESTED_ROSTER: &str = r#"[
    {
        "lesson_id": 1,
        "lesson_title": "Quadratic equations",
        "topic": "Algebra",
        "location": "B11",
        "lesson_date": "2026-08-10",
        "start_time": "08:00:00",
        "end_time": "08:45:00",
        "class_subject": {
            "class": { "class_name": "4B" },
            "subject_offering": { "subject": { "subject_name": "Mathematics" } },
            "teacher": { "name": "M. Joseph" }
        }
    },
    {
        "lesson_id": 2,
        "lesson_date": "2026-08-10",
        "start_time": "08:45",
        "end_time": "09:30",
        "lesson_title": "Reading comprehension"
    }
]"#;

#[tokio::test]
async fn test_import_resolves_nested_and_flat_records() {
    let repo = LocalRepository::new();
    let outcome = import_roster(&repo, "Autumn".to_string(), NESTED_ROSTER)
        .await
        .unwrap();

    assert_eq!(outcome.lesson_count, 2);
    assert!(outcome.warnings.is_empty());

    let roster = services::get_roster(&repo, outcome.roster_id).await.unwrap();
    assert_eq!(roster.lessons[0].subject_name, "Mathematics");
    assert_eq!(roster.lessons[0].class_name, "4B");
    assert_eq!(roster.lessons[0].teacher_name.as_deref(), Some("M. Joseph"));
    // Flat record falls back to its title
    assert_eq!(roster.lessons[1].subject_name, "Reading comprehension");
    assert_eq!(roster.lessons[1].class_name, "");
}

#[tokio::test]
async fn test_import_collects_warnings_but_succeeds() {
    let repo = LocalRepository::new();
    let payload = r#"[
        {"lesson_date": "2026-08-10", "start_time": "08:00", "end_time": "08:45"},
        {"lesson_date": "garbage", "start_time": "08:00"},
        {"lesson_date": "2026-08-11"},
        {}
    ]"#;

    let outcome = import_roster(&repo, "messy".to_string(), payload)
        .await
        .unwrap();

    // Record 1 drops (bad date), record 3 drops (no date); record 2
    // degrades its missing times.
    assert_eq!(outcome.lesson_count, 2);
    let codes: Vec<&str> = outcome.warnings.iter().map(|w| w.code.as_str()).collect();
    assert!(codes.contains(&"MALFORMED_DATE"));
    assert!(codes.contains(&"MISSING_DATE"));
    assert!(codes.contains(&"MISSING_START_TIME"));
}

#[tokio::test]
async fn test_import_rejects_wrong_shape() {
    let repo = LocalRepository::new();
    for payload in [r#"{"lessons": []}"#, "42", "\"text\""] {
        let result = import_roster(&repo, "bad".to_string(), payload).await;
        assert!(
            matches!(result, Err(ImportError::InvalidPayload(_))),
            "payload {:?} should be rejected",
            payload
        );
    }
}

#[tokio::test]
async fn test_import_is_idempotent_per_payload() {
    let repo = LocalRepository::new();
    let first = import_roster(&repo, "term".to_string(), NESTED_ROSTER)
        .await
        .unwrap();
    let again = import_roster(&repo, "term (retry)".to_string(), NESTED_ROSTER)
        .await
        .unwrap();

    assert!(!first.deduplicated);
    assert!(again.deduplicated);
    assert_eq!(first.roster_id, again.roster_id);
    assert_eq!(services::list_rosters(&repo).await.unwrap().len(), 1);

    // A different payload stores separately.
    let other = import_roster(&repo, "spring".to_string(), "[]").await.unwrap();
    assert_ne!(other.roster_id, first.roster_id);
}

#[tokio::test]
async fn test_empty_roster_imports_cleanly() {
    let repo = LocalRepository::new();
    let outcome = import_roster(&repo, "empty".to_string(), "[]").await.unwrap();
    assert_eq!(outcome.lesson_count, 0);
    assert!(outcome.warnings.is_empty());
}
