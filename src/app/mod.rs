pub use board::ActivityBoard;
pub use prompt::{Confirm, TerminalLines, TerminalPrompt};

pub mod board;
mod prompt;
