use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::choice::ChoiceRepository;
use crate::domain::question::QuestionReadRepository;

pub struct VoteCommandService {
    pub(super) question_repo: Arc<dyn QuestionReadRepository>,
    pub(super) choice_repo: Arc<dyn ChoiceRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl VoteCommandService {
    pub fn new(
        question_repo: Arc<dyn QuestionReadRepository>,
        choice_repo: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            question_repo,
            choice_repo,
            clock,
        }
    }
}
