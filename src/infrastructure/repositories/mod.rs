mod sqlite_choice;
mod sqlite_question;

pub use sqlite_choice::SqliteChoiceRepository;
pub use sqlite_question::{SqliteQuestionReadRepository, SqliteQuestionWriteRepository};
