//! Integration tests: full quiz sessions driven through the registry.

use quizroom_protocol::{HostId, Question, Quiz, RoomStatus};
use quizroom_registry::{ErrorClass, RegistryConfig, RoomError, RoomRegistry};

// =========================================================================
// Helpers
// =========================================================================

fn capitals_quiz() -> Quiz {
    Quiz {
        title: "Capitals".into(),
        questions: vec![
            Question {
                text: "Capital of France?".into(),
                choices: vec!["Paris".into(), "Lyon".into()],
                answer: "Paris".into(),
            },
            Question {
                text: "Capital of Japan?".into(),
                choices: vec![
                    "Osaka".into(),
                    "Tokyo".into(),
                    "Kyoto".into(),
                    "Nagoya".into(),
                ],
                answer: "Tokyo".into(),
            },
        ],
    }
}

fn registry() -> RoomRegistry {
    RoomRegistry::new(RegistryConfig::default())
}

// =========================================================================
// The full lockstep flow from the product walkthrough:
// create → Alice and Bob join → start → answer → advance → finish.
// =========================================================================

#[tokio::test]
async fn test_full_capitals_session() {
    let reg = registry();
    let created = reg
        .create_room("Quinn", capitals_quiz(), "Medium")
        .await
        .unwrap();
    let code = created.code.as_str();

    let alice = reg.join_room(code, "Alice").await.unwrap();
    let bob = reg.join_room(code, "Bob").await.unwrap();
    assert_eq!(alice.status, RoomStatus::Waiting);

    // Host starts the game: question 0 becomes active.
    let view = reg.start_room(code, &created.host_id).await.unwrap();
    assert_eq!(view.status, RoomStatus::InProgress);
    assert_eq!(view.current_question_index, Some(0));
    let question = view.question.as_ref().expect("question 1 active");
    assert_eq!(question.number, 1);
    assert_eq!(question.text, "Capital of France?");
    assert_eq!(question.total_questions, 2);

    // Alice answers Q1 correctly; Bob hasn't answered yet.
    let view = reg
        .submit_answer(code, &alice.player_id, "Paris")
        .await
        .unwrap();
    let a = view.players.iter().find(|p| p.id == alice.player_id).unwrap();
    let b = view.players.iter().find(|p| p.id == bob.player_id).unwrap();
    assert_eq!(a.score, 1);
    assert!(a.has_answered_current);
    assert_eq!(b.score, 0);
    assert!(!b.has_answered_current);

    // Host advances: both players' answered flags reset.
    let view = reg.advance_room(code, &created.host_id).await.unwrap();
    assert_eq!(view.current_question_index, Some(1));
    assert!(view.players.iter().all(|p| !p.has_answered_current));

    // Bob answers Q2 wrong: score stays 0.
    let view = reg
        .submit_answer(code, &bob.player_id, "Kyoto")
        .await
        .unwrap();
    let b = view.players.iter().find(|p| p.id == bob.player_id).unwrap();
    assert_eq!(b.score, 0);
    assert!(b.has_answered_current);

    // Advancing past the last question finishes the game.
    let view = reg.advance_room(code, &created.host_id).await.unwrap();
    assert_eq!(view.status, RoomStatus::Finished);
    assert!(view.question.is_none());
    assert!(view.current_question_index.is_none());

    // Scores survive into the final projection.
    let view = reg.room_state(code).await.unwrap();
    let a = view.players.iter().find(|p| p.id == alice.player_id).unwrap();
    assert_eq!(a.score, 1);
}

// =========================================================================
// Error paths
// =========================================================================

#[tokio::test]
async fn test_join_never_created_code_fails_not_found() {
    let reg = registry();
    let result = reg.join_room("ZZZZZZ", "Eve").await;
    match result {
        Err(err @ RoomError::NotFound(_)) => {
            assert_eq!(err.class(), ErrorClass::NotFound);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_forged_host_id_cannot_start_the_game() {
    let reg = registry();
    let created = reg
        .create_room("Quinn", capitals_quiz(), "Medium")
        .await
        .unwrap();
    let code = created.code.as_str();
    reg.join_room(code, "Alice").await.unwrap();

    let forged = HostId("00000000000000000000000000000000".into());
    let result = reg.start_room(code, &forged).await;

    match result {
        Err(err @ RoomError::Unauthorized(_)) => {
            assert_eq!(err.class(), ErrorClass::Forbidden);
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    // The room must remain untouched.
    let view = reg.room_state(code).await.unwrap();
    assert_eq!(view.status, RoomStatus::Waiting);
}

#[tokio::test]
async fn test_double_submit_rejected_without_double_scoring() {
    let reg = registry();
    let created = reg
        .create_room("Quinn", capitals_quiz(), "Medium")
        .await
        .unwrap();
    let code = created.code.as_str();
    let alice = reg.join_room(code, "Alice").await.unwrap();
    reg.start_room(code, &created.host_id).await.unwrap();

    reg.submit_answer(code, &alice.player_id, "Paris")
        .await
        .unwrap();
    let result = reg.submit_answer(code, &alice.player_id, "Paris").await;

    assert!(matches!(result, Err(RoomError::InvalidAction(_))));
    let view = reg.room_state(code).await.unwrap();
    assert_eq!(view.players[0].score, 1);
}

#[tokio::test]
async fn test_submit_after_finish_rejected() {
    let reg = registry();
    let created = reg
        .create_room("Quinn", capitals_quiz(), "Medium")
        .await
        .unwrap();
    let code = created.code.as_str();
    let alice = reg.join_room(code, "Alice").await.unwrap();
    reg.start_room(code, &created.host_id).await.unwrap();
    reg.advance_room(code, &created.host_id).await.unwrap();
    reg.advance_room(code, &created.host_id).await.unwrap();
    // Game is now Finished.

    let result = reg.submit_answer(code, &alice.player_id, "Paris").await;

    assert!(matches!(result, Err(RoomError::InvalidAction(_))));
}

#[tokio::test]
async fn test_start_with_zero_players_rejected() {
    let reg = registry();
    let created = reg
        .create_room("Quinn", capitals_quiz(), "Medium")
        .await
        .unwrap();

    let result = reg
        .start_room(created.code.as_str(), &created.host_id)
        .await;

    assert!(matches!(result, Err(RoomError::InvalidAction(_))));
}

// =========================================================================
// Scoring edge cases
// =========================================================================

#[tokio::test]
async fn test_scoring_trims_whitespace_but_keeps_case_sensitivity() {
    let reg = registry();
    let created = reg
        .create_room("Quinn", capitals_quiz(), "Medium")
        .await
        .unwrap();
    let code = created.code.as_str();
    let a = reg.join_room(code, "A").await.unwrap();
    let b = reg.join_room(code, "B").await.unwrap();
    let c = reg.join_room(code, "C").await.unwrap();
    reg.start_room(code, &created.host_id).await.unwrap();

    reg.submit_answer(code, &a.player_id, "  Paris\n").await.unwrap();
    reg.submit_answer(code, &b.player_id, "PARIS").await.unwrap();
    reg.submit_answer(code, &c.player_id, "Par is").await.unwrap();

    let view = reg.room_state(code).await.unwrap();
    let score_of = |id| {
        view.players
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.score)
            .unwrap()
    };
    assert_eq!(score_of(&a.player_id), 1, "surrounding whitespace is trimmed");
    assert_eq!(score_of(&b.player_id), 0, "casing must match exactly");
    assert_eq!(score_of(&c.player_id), 0, "inner whitespace is not forgiven");
}

// =========================================================================
// Projection hygiene
// =========================================================================

/// Walks a JSON value and asserts no object carries an "answer" field.
/// (`has_answered_current` is a legitimate scoreboard flag; the exact
/// key "answer" is what must never appear.)
fn assert_no_answer_key(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, inner) in map {
                assert!(key != "answer", "projection leaked an answer field");
                assert_no_answer_key(inner);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                assert_no_answer_key(item);
            }
        }
        _ => {}
    }
}

#[tokio::test]
async fn test_projection_never_contains_correct_answer() {
    let reg = registry();
    let created = reg
        .create_room("Quinn", capitals_quiz(), "Medium")
        .await
        .unwrap();
    let code = created.code.as_str();
    let alice = reg.join_room(code, "Alice").await.unwrap();

    // Check the projection at every phase of the session.
    let waiting = reg.room_state(code).await.unwrap();
    assert_no_answer_key(&serde_json::to_value(&waiting).unwrap());

    let started = reg.start_room(code, &created.host_id).await.unwrap();
    let json = serde_json::to_value(&started).unwrap();
    assert_no_answer_key(&json);
    // The active question exposes exactly these fields and nothing more.
    let mut keys: Vec<&str> = json["question"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort();
    assert_eq!(
        keys,
        ["choices", "index", "number", "text", "total_questions"]
    );
    assert_eq!(json["question"]["choices"][0], "Paris");

    let answered = reg
        .submit_answer(code, &alice.player_id, "Lyon")
        .await
        .unwrap();
    assert_no_answer_key(&serde_json::to_value(&answered).unwrap());

    reg.advance_room(code, &created.host_id).await.unwrap();
    let finished = reg.advance_room(code, &created.host_id).await.unwrap();
    assert_no_answer_key(&serde_json::to_value(&finished).unwrap());
}

// =========================================================================
// Late join
// =========================================================================

#[tokio::test]
async fn test_join_mid_game_reports_in_progress_status() {
    let reg = registry();
    let created = reg
        .create_room("Quinn", capitals_quiz(), "Medium")
        .await
        .unwrap();
    let code = created.code.as_str();
    reg.join_room(code, "Alice").await.unwrap();
    reg.start_room(code, &created.host_id).await.unwrap();

    let late = reg.join_room(code, "Larry").await.unwrap();

    assert_eq!(late.status, RoomStatus::InProgress);
    let view = reg.room_state(code).await.unwrap();
    assert_eq!(view.players.len(), 2);
    let larry = view.players.iter().find(|p| p.id == late.player_id).unwrap();
    assert_eq!(larry.score, 0);
    assert!(!larry.has_answered_current);
}
