use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::question::{
    NewQuestion, Question, QuestionId, QuestionReadRepository, QuestionText,
    QuestionWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteQuestionWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteQuestionWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteQuestionReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteQuestionReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i64,
    question_text: String,
    pub_date: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = DomainError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id: QuestionId::new(row.id)?,
            question_text: QuestionText::new(row.question_text)?,
            pub_date: row.pub_date,
        })
    }
}

#[async_trait]
impl QuestionWriteRepository for SqliteQuestionWriteRepository {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let NewQuestion {
            question_text,
            pub_date,
        } = question;

        let row = sqlx::query_as::<_, QuestionRow>(
            "INSERT INTO questions (question_text, pub_date) VALUES (?, ?) RETURNING id, question_text, pub_date",
        )
        .bind(question_text.as_str())
        .bind(pub_date)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Question::try_from(row)
    }
}

#[async_trait]
impl QuestionReadRepository for SqliteQuestionReadRepository {
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question_text, pub_date FROM questions WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Question::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question_text, pub_date FROM questions ORDER BY id ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Question::try_from).collect()
    }
}
