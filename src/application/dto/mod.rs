pub mod questions;

pub use questions::{ChoiceDto, QuestionDetailDto, QuestionDto};
