//! Error types for state transitions and configuration.

use thiserror::Error;

/// Rejected state transition.
///
/// Widgets treat every variant as a no-op; the error only exists so callers
/// can skip a redundant update and log why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("todo text is empty")]
    EmptyText,

    #[error("todo ids exhausted")]
    IdsExhausted,

    #[error("no todo with id {0}")]
    UnknownTodo(u32),

    #[error("invalid step value: {0:?}")]
    InvalidStep(String),
}

/// Invalid or unreadable workshop configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max_stars must be between 1 and {max}, got {value}")]
    MaxStars { value: u32, max: u32 },

    #[error("initial_rating {rating} exceeds max_stars {max_stars}")]
    InitialRating { rating: u32, max_stars: u32 },

    #[error("counter step must be between 1 and 100, got {0}")]
    Step(i64),

    #[error("default_day must be between 1 and {max}, got {value}")]
    DefaultDay { value: u8, max: u8 },

    #[error("unknown log level: {0:?}")]
    LogLevel(String),

    #[error("log_capacity must be greater than zero")]
    LogCapacity,
}
