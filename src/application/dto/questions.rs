use crate::domain::choice::Choice;
use crate::domain::question::Question;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Listing entry for the index page. `published_recently` is evaluated
/// against the same `now` the listing was filtered with.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub published_recently: bool,
}

impl QuestionDto {
    pub fn from_question(question: Question, now: DateTime<Utc>) -> Self {
        let published_recently = question.was_published_recently(now);
        Self {
            id: question.id.into(),
            question_text: question.question_text.into(),
            pub_date: question.pub_date,
            published_recently,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceDto {
    pub id: i64,
    pub choice_text: String,
    pub votes: i64,
}

impl From<Choice> for ChoiceDto {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id.into(),
            choice_text: choice.choice_text.into(),
            votes: choice.votes.into(),
        }
    }
}

/// Detail and results pages share this shape.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetailDto {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub choices: Vec<ChoiceDto>,
}

impl QuestionDetailDto {
    pub fn from_parts(question: Question, choices: Vec<Choice>) -> Self {
        Self {
            id: question.id.into(),
            question_text: question.question_text.into(),
            pub_date: question.pub_date,
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}
