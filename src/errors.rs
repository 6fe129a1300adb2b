use thiserror::Error as ThisError;
use thisslime::TracingError;

/// Errors that stop a game from being set up.
///
/// Misplayed actions are never errors; the engines ignore them.
#[derive(Debug, ThisError, TracingError)]
pub enum Error {
    #[error("puzzle catalog is empty")]
    #[event(level = WARN)]
    EmptyCatalog,

    #[error("problem loading config: {0}")]
    #[event(level = ERROR)]
    Config(#[from] crate::config::Error),

    #[error("problem building the wheel: {0}")]
    #[event(level = ERROR)]
    Wheel(#[from] crate::wheel::Error),

    #[error("problem fetching puzzles: {0}")]
    #[event(level = WARN)]
    Source(#[from] crate::puzzle::source::Error),
}
