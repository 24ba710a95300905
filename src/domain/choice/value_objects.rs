use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChoiceId(pub i64);

impl ChoiceId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("choice id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ChoiceId> for i64 {
    fn from(value: ChoiceId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceText(String);

impl ChoiceText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "choice text cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ChoiceText> for String {
    fn from(value: ChoiceText) -> Self {
        value.0
    }
}

/// Vote tally for a choice. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VoteCount(i64);

impl VoteCount {
    pub fn new(count: i64) -> DomainResult<Self> {
        if count < 0 {
            Err(DomainError::Validation(
                "vote count cannot be negative".into(),
            ))
        } else {
            Ok(Self(count))
        }
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn incremented(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn count(self) -> i64 {
        self.0
    }
}

impl From<VoteCount> for i64 {
    fn from(value: VoteCount) -> Self {
        value.0
    }
}
