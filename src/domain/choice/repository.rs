use crate::domain::choice::entity::{Choice, NewChoice};
use crate::domain::choice::value_objects::ChoiceId;
use crate::domain::errors::DomainResult;
use crate::domain::question::value_objects::QuestionId;
use async_trait::async_trait;

#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    async fn insert(&self, choice: NewChoice) -> DomainResult<Choice>;
    /// Choices of a question in creation order.
    async fn list_by_question(&self, question_id: QuestionId) -> DomainResult<Vec<Choice>>;
    /// A choice only resolves through the question it belongs to.
    async fn find_for_question(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> DomainResult<Option<Choice>>;
    /// Atomic `votes = votes + 1`; returns the updated choice.
    async fn increment_votes(&self, choice_id: ChoiceId) -> DomainResult<Choice>;
}
