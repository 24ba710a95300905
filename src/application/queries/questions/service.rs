use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::choice::ChoiceRepository;
use crate::domain::question::{Question, QuestionId, QuestionReadRepository};

pub struct QuestionQueryService {
    pub(super) read_repo: Arc<dyn QuestionReadRepository>,
    pub(super) choice_repo: Arc<dyn ChoiceRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl QuestionQueryService {
    pub fn new(
        read_repo: Arc<dyn QuestionReadRepository>,
        choice_repo: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            choice_repo,
            clock,
        }
    }

    /// Shared 404 gate for the detail and results pages: a question that does
    /// not exist and one whose `pub_date` is still in the future are
    /// indistinguishable to the caller.
    pub(super) async fn load_published_question(&self, id: i64) -> ApplicationResult<Question> {
        let id = QuestionId::new(id)?;
        let question = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        if !question.is_published(self.clock.now()) {
            return Err(ApplicationError::not_found("question not found"));
        }

        Ok(question)
    }
}
