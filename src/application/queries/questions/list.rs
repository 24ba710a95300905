use super::QuestionQueryService;
use crate::application::{dto::QuestionDto, error::ApplicationResult};
use crate::domain::question::list_published;

impl QuestionQueryService {
    /// Published questions, newest first.
    pub async fn list_questions(&self) -> ApplicationResult<Vec<QuestionDto>> {
        let now = self.clock.now();
        let records = self.read_repo.list().await?;
        let published = list_published(records, now);

        Ok(published
            .into_iter()
            .map(|question| QuestionDto::from_question(question, now))
            .collect())
    }
}
