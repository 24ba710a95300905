use chrono::{DateTime, Utc};

use crate::domain::question::entity::Question;

/// Filter a collection of questions down to those published at or before
/// `now`, newest first. Ties on `pub_date` keep their input order (the sort
/// is stable), so equal instants come out in creation order.
pub fn list_published(questions: Vec<Question>, now: DateTime<Utc>) -> Vec<Question> {
    let mut published: Vec<Question> = questions
        .into_iter()
        .filter(|question| question.is_published(now))
        .collect();
    published.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    published
}
