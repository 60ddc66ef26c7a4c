use std::time::Duration;

use clap::Parser;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOG_FILTER: &str = "activity_board=info";
pub const COMMAND_BUFFER: usize = 30;
pub const SIGNUP_MESSAGE_TTL: Duration = Duration::from_secs(5);
pub const UNREGISTER_MESSAGE_TTL: Duration = Duration::from_secs(4);

#[derive(Parser, Debug)]
#[command(author, version, about = "Sign up for activities from the terminal", long_about = None)]
pub struct Settings {
    /// Base url of the activities server
    #[arg(long, short, env = "ACTIVITY_BOARD_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,
    /// Log filter, overrides RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}
