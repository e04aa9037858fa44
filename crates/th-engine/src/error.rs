//! Error types for the town engine and session controller.

use thiserror::Error;

use crate::session::SessionState;

/// Result type for town operations.
pub type TownResult<T> = Result<T, TownError>;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised by a town.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TownError {
    /// The operation needs a hunter and none has arrived.
    #[error("no hunter is in town")]
    Unoccupied,
}

/// Errors raised while dispatching player actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The action token was not recognized.
    #[error("Yikes! That's an invalid option! Try again. ({0})")]
    InvalidChoice(String),

    /// The session already reached a terminal state.
    #[error("the game is over ({0})")]
    Finished(SessionState),

    /// Town engine error.
    #[error("{0}")]
    Town(#[from] TownError),
}

/// Errors raised while building a game configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The difficulty token did not name a preset.
    #[error("unknown mode: {0}")]
    UnknownPreset(String),

    /// The hunter's name was blank.
    #[error("the hunter needs a name")]
    EmptyName,
}
