use crate::domain::errors::DomainResult;
use crate::domain::question::entity::{NewQuestion, Question};
use crate::domain::question::value_objects::QuestionId;
use async_trait::async_trait;

#[async_trait]
pub trait QuestionWriteRepository: Send + Sync {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question>;
}

#[async_trait]
pub trait QuestionReadRepository: Send + Sync {
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>>;
    /// All questions in creation order; publication filtering happens above
    /// the repository.
    async fn list(&self) -> DomainResult<Vec<Question>>;
}
