pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewQuestion, Question};
pub use repository::{QuestionReadRepository, QuestionWriteRepository};
pub use specifications::list_published;
pub use value_objects::{QuestionId, QuestionText};
