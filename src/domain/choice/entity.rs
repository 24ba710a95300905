// src/domain/choice/entity.rs
use crate::domain::choice::value_objects::{ChoiceId, ChoiceText, VoteCount};
use crate::domain::question::value_objects::QuestionId;

/// One selectable answer under a question. A choice refers to its question,
/// it does not own it.
#[derive(Debug, Clone)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub choice_text: ChoiceText,
    pub votes: VoteCount,
}

impl Choice {
    pub fn record_vote(&mut self) {
        self.votes = self.votes.incremented();
    }

    pub fn belongs_to(&self, question_id: QuestionId) -> bool {
        self.question_id == question_id
    }
}

#[derive(Debug, Clone)]
pub struct NewChoice {
    pub question_id: QuestionId,
    pub choice_text: ChoiceText,
    pub votes: VoteCount,
}
