use super::QuestionQueryService;
use crate::application::{dto::QuestionDetailDto, error::ApplicationResult};

pub struct GetQuestionQuery {
    pub id: i64,
}

impl QuestionQueryService {
    pub async fn get_question(
        &self,
        query: GetQuestionQuery,
    ) -> ApplicationResult<QuestionDetailDto> {
        let question = self.load_published_question(query.id).await?;
        let choices = self.choice_repo.list_by_question(question.id).await?;
        Ok(QuestionDetailDto::from_parts(question, choices))
    }
}
