use thiserror::Error;

/// The actor behind a `CommandSender` has stopped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("actor is no longer running")]
pub struct Closed;
