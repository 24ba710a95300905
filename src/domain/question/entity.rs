// src/domain/question/entity.rs
use crate::domain::question::value_objects::{QuestionId, QuestionText};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub question_text: QuestionText,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// True iff `pub_date` falls in the rolling one-day window
    /// `[now - 1 day, now]`, inclusive at both ends.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        let window_start = now - Duration::days(1);
        window_start <= self.pub_date && self.pub_date <= now
    }

    /// A question is published once `pub_date` is at or before `now`.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question_text: QuestionText,
    pub pub_date: DateTime<Utc>,
}
