// src/application/commands/votes/cast.rs
use super::VoteCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::choice::ChoiceId;
use crate::domain::question::QuestionId;

/// Shown on the re-rendered form when the submission names no usable choice.
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

pub struct CastVoteCommand {
    pub question_id: i64,
    /// `None` when the form was submitted without picking a choice.
    pub choice_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The tally was incremented; the caller should redirect to results.
    Recorded,
    /// No choice, or a choice that does not belong to the question. The
    /// caller re-renders the form with [`NO_CHOICE_SELECTED`].
    NotSelected,
}

impl VoteCommandService {
    pub async fn cast_vote(&self, command: CastVoteCommand) -> ApplicationResult<VoteOutcome> {
        let question_id = QuestionId::new(command.question_id)?;
        let question = self
            .question_repo
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        // Voting on an unpublished question is indistinguishable from voting
        // on a missing one.
        if !question.is_published(self.clock.now()) {
            return Err(ApplicationError::not_found("question not found"));
        }

        let Some(raw_choice_id) = command.choice_id else {
            return Ok(VoteOutcome::NotSelected);
        };
        let Ok(choice_id) = ChoiceId::new(raw_choice_id) else {
            return Ok(VoteOutcome::NotSelected);
        };

        let selected = self
            .choice_repo
            .find_for_question(question_id, choice_id)
            .await?;
        if selected.is_none() {
            return Ok(VoteOutcome::NotSelected);
        }

        let updated = self.choice_repo.increment_votes(choice_id).await?;
        tracing::info!(
            question_id = i64::from(question_id),
            choice_id = i64::from(choice_id),
            votes = i64::from(updated.votes),
            "vote recorded"
        );

        Ok(VoteOutcome::Recorded)
    }
}
