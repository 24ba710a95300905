// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, header::CONTENT_TYPE};
use axum::response::Response;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt as _;

use tohyo_core::application::ports::time::Clock;
use tohyo_core::application::services::ApplicationServices;
use tohyo_core::domain::choice::{Choice, ChoiceRepository, ChoiceText, NewChoice, VoteCount};
use tohyo_core::domain::question::{
    NewQuestion, Question, QuestionReadRepository, QuestionText, QuestionWriteRepository,
};
use tohyo_core::infrastructure::repositories::{
    SqliteChoiceRepository, SqliteQuestionReadRepository, SqliteQuestionWriteRepository,
};
use tohyo_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{FixedClock, fixed_now};

/// In-memory SQLite database with the schema applied. A `sqlite::memory:`
/// database exists per connection, so the pool is pinned to one connection.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("failed to enable foreign keys");

    tohyo_core::infrastructure::database::run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Full application wired over in-memory SQLite and a clock frozen at
/// [`fixed_now`], plus direct repository handles for seeding.
pub struct TestApp {
    pub router: axum::Router,
    questions: SqliteQuestionWriteRepository,
    choices: SqliteChoiceRepository,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let pool = Arc::new(memory_pool().await);

        let question_read: Arc<dyn QuestionReadRepository> =
            Arc::new(SqliteQuestionReadRepository::new(Arc::clone(&pool)));
        let choice_repo = SqliteChoiceRepository::new(Arc::clone(&pool));
        let choices: Arc<dyn ChoiceRepository> = Arc::new(choice_repo.clone());
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_now()));

        let services = Arc::new(ApplicationServices::new(question_read, choices, clock));
        let router = build_router(HttpState { services });

        Self {
            router,
            questions: SqliteQuestionWriteRepository::new(pool),
            choices: choice_repo,
        }
    }

    pub async fn seed_question(&self, text: &str, pub_date: DateTime<Utc>) -> Question {
        self.questions
            .insert(NewQuestion {
                question_text: QuestionText::new(text).expect("valid question text"),
                pub_date,
            })
            .await
            .expect("failed to seed question")
    }

    pub async fn seed_choice(&self, question: &Question, text: &str, votes: i64) -> Choice {
        self.choices
            .insert(NewChoice {
                question_id: question.id,
                choice_text: ChoiceText::new(text).expect("valid choice text"),
                votes: VoteCount::new(votes).expect("valid vote count"),
            })
            .await
            .expect("failed to seed choice")
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, form_body: &str) -> Response {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form_body.to_owned()))
            .unwrap();
        self.router.clone().oneshot(req).await.unwrap()
    }
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}
