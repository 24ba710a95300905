// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::votes::VoteCommandService, ports::time::Clock,
        queries::questions::QuestionQueryService,
    },
    domain::{choice::ChoiceRepository, question::QuestionReadRepository},
};

pub struct ApplicationServices {
    pub question_queries: Arc<QuestionQueryService>,
    pub vote_commands: Arc<VoteCommandService>,
}

impl ApplicationServices {
    pub fn new(
        question_repo: Arc<dyn QuestionReadRepository>,
        choice_repo: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let question_queries = Arc::new(QuestionQueryService::new(
            Arc::clone(&question_repo),
            Arc::clone(&choice_repo),
            Arc::clone(&clock),
        ));

        let vote_commands = Arc::new(VoteCommandService::new(
            question_repo,
            choice_repo,
            clock,
        ));

        Self {
            question_queries,
            vote_commands,
        }
    }
}
