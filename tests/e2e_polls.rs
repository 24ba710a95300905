// tests/e2e_polls.rs
use axum::http::StatusCode;
use chrono::Duration;

mod support;
use support::helpers::{TestApp, body_string};
use support::mocks::fixed_now;

/// An empty database still answers 200, with an explicit empty-state message.
#[tokio::test]
async fn index_without_questions_shows_empty_message() {
    let app = TestApp::spawn().await;

    let resp = app.get("/polls").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("No polls are available."));
}

#[tokio::test]
async fn index_lists_past_question() {
    let app = TestApp::spawn().await;
    let question = app
        .seed_question("Past question.", fixed_now() - Duration::days(30))
        .await;

    let resp = app.get("/polls").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("Past question."));
    assert!(html.contains(&format!("/polls/{}", i64::from(question.id))));
}

#[tokio::test]
async fn index_hides_future_question() {
    let app = TestApp::spawn().await;
    app.seed_question("Future question.", fixed_now() + Duration::days(30))
        .await;

    let resp = app.get("/polls").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(!html.contains("Future question."));
    assert!(html.contains("No polls are available."));
}

/// Two published questions come back newest first.
#[tokio::test]
async fn index_orders_newest_first() {
    let app = TestApp::spawn().await;
    app.seed_question("Older question", fixed_now() - Duration::days(30))
        .await;
    app.seed_question("Newer question", fixed_now() - Duration::days(5))
        .await;

    let resp = app.get("/polls").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    let newer = html.find("Newer question").expect("newer question listed");
    let older = html.find("Older question").expect("older question listed");
    assert!(newer < older, "expected the newer question first");
}

/// Only questions inside the one-day window carry the recent marker.
#[tokio::test]
async fn index_marks_recent_questions() {
    let app = TestApp::spawn().await;
    app.seed_question("Fresh question", fixed_now() - Duration::hours(1))
        .await;
    app.seed_question("Stale question", fixed_now() - Duration::days(30))
        .await;

    let html = body_string(app.get("/polls").await).await;
    assert_eq!(html.matches("(new)").count(), 1);
}

#[tokio::test]
async fn detail_shows_question_and_choices() {
    let app = TestApp::spawn().await;
    let question = app
        .seed_question("Current question", fixed_now() - Duration::days(1))
        .await;
    app.seed_choice(&question, "Not much", 0).await;
    app.seed_choice(&question, "The sky", 0).await;

    let resp = app
        .get(&format!("/polls/{}", i64::from(question.id)))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("Current question"));
    assert!(html.contains("Not much"));
    assert!(html.contains("The sky"));
}

#[tokio::test]
async fn detail_returns_404_for_future_question() {
    let app = TestApp::spawn().await;
    let question = app
        .seed_question("Future question.", fixed_now() + Duration::days(30))
        .await;

    let resp = app
        .get(&format!("/polls/{}", i64::from(question.id)))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_returns_404_for_unknown_question() {
    let app = TestApp::spawn().await;

    let resp = app.get("/polls/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

/// Tallies render as "<choice_text> -- <votes> vote", singular regardless of
/// the count.
#[tokio::test]
async fn results_render_vote_tallies() {
    let app = TestApp::spawn().await;
    let question = app
        .seed_question("Current question", fixed_now() - Duration::days(2))
        .await;
    app.seed_choice(&question, "Choice 1", 1).await;
    app.seed_choice(&question, "Choice 2", 2).await;

    let resp = app
        .get(&format!("/polls/{}/results", i64::from(question.id)))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("Choice 1 -- 1 vote"));
    assert!(html.contains("Choice 2 -- 2 vote"));
}

#[tokio::test]
async fn results_return_404_for_future_question() {
    let app = TestApp::spawn().await;
    let question = app
        .seed_question("Future question.", fixed_now() + Duration::days(30))
        .await;

    let resp = app
        .get(&format!("/polls/{}/results", i64::from(question.id)))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_answers_ok() {
    let app = TestApp::spawn().await;

    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body["status"], "ok");
}
