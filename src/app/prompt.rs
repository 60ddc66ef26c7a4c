use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// A yes/no question put to the user before a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, question: &str) -> bool;
}

pub type TerminalLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

/// Asks on stdout and reads the answer from the shared stdin reader.
pub struct TerminalPrompt {
    lines: TerminalLines,
}

impl TerminalPrompt {
    pub fn new(lines: TerminalLines) -> TerminalPrompt {
        TerminalPrompt { lines }
    }
}

#[async_trait]
impl Confirm for TerminalPrompt {
    async fn confirm(&self, question: &str) -> bool {
        let mut stdout = tokio::io::stdout();
        let prompt = format!("{question} [y/N] ");
        if stdout.write_all(prompt.as_bytes()).await.is_err() || stdout.flush().await.is_err() {
            return false;
        }
        match self.lines.lock().await.next_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
