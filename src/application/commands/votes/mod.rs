mod cast;
mod service;

pub use cast::{CastVoteCommand, NO_CHOICE_SELECTED, VoteOutcome};
pub use service::VoteCommandService;
