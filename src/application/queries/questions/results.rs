use super::QuestionQueryService;
use crate::application::{dto::QuestionDetailDto, error::ApplicationResult};

pub struct GetQuestionResultsQuery {
    pub id: i64,
}

impl QuestionQueryService {
    /// Results carry the same shape as the detail page; the template decides
    /// what to show.
    pub async fn get_question_results(
        &self,
        query: GetQuestionResultsQuery,
    ) -> ApplicationResult<QuestionDetailDto> {
        let question = self.load_published_question(query.id).await?;
        let choices = self.choice_repo.list_by_question(question.id).await?;
        Ok(QuestionDetailDto::from_parts(question, choices))
    }
}
