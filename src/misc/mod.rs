pub use closed::Closed;
pub use paths::{join_base, participant_path, ACTIVITIES_PATH};

pub mod log;

mod closed;
mod command;
mod paths;
