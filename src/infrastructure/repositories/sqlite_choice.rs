use crate::domain::choice::{
    Choice, ChoiceId, ChoiceRepository, ChoiceText, NewChoice, VoteCount,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::question::QuestionId;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteChoiceRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteChoiceRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ChoiceRow {
    id: i64,
    question_id: i64,
    choice_text: String,
    votes: i64,
}

impl TryFrom<ChoiceRow> for Choice {
    type Error = DomainError;

    fn try_from(row: ChoiceRow) -> Result<Self, Self::Error> {
        Ok(Choice {
            id: ChoiceId::new(row.id)?,
            question_id: QuestionId::new(row.question_id)?,
            choice_text: ChoiceText::new(row.choice_text)?,
            votes: VoteCount::new(row.votes)?,
        })
    }
}

#[async_trait]
impl ChoiceRepository for SqliteChoiceRepository {
    async fn insert(&self, choice: NewChoice) -> DomainResult<Choice> {
        let NewChoice {
            question_id,
            choice_text,
            votes,
        } = choice;

        let row = sqlx::query_as::<_, ChoiceRow>(
            "INSERT INTO choices (question_id, choice_text, votes) VALUES (?, ?, ?) RETURNING id, question_id, choice_text, votes",
        )
        .bind(i64::from(question_id))
        .bind(choice_text.as_str())
        .bind(i64::from(votes))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Choice::try_from(row)
    }

    async fn list_by_question(&self, question_id: QuestionId) -> DomainResult<Vec<Choice>> {
        let rows = sqlx::query_as::<_, ChoiceRow>(
            "SELECT id, question_id, choice_text, votes FROM choices WHERE question_id = ? ORDER BY id ASC",
        )
        .bind(i64::from(question_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Choice::try_from).collect()
    }

    async fn find_for_question(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> DomainResult<Option<Choice>> {
        let row = sqlx::query_as::<_, ChoiceRow>(
            "SELECT id, question_id, choice_text, votes FROM choices WHERE id = ? AND question_id = ?",
        )
        .bind(i64::from(choice_id))
        .bind(i64::from(question_id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Choice::try_from).transpose()
    }

    async fn increment_votes(&self, choice_id: ChoiceId) -> DomainResult<Choice> {
        let row = sqlx::query_as::<_, ChoiceRow>(
            "UPDATE choices SET votes = votes + 1 WHERE id = ? RETURNING id, question_id, choice_text, votes",
        )
        .bind(i64::from(choice_id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        match row {
            Some(row) => Choice::try_from(row),
            None => Err(DomainError::NotFound("choice not found".into())),
        }
    }
}
