//! Workshop State
//!
//! Pure state transitions behind the workshop widgets. Every operation takes
//! the current state by reference and returns the next state, so the view
//! layer only has to store the result in a signal.

pub mod config;
pub mod counter;
pub mod error;
pub mod rating;
pub mod todo;

pub use config::{CounterConfig, RatingConfig, StarSize, WorkshopConfig};
pub use counter::{CountTone, Counter};
pub use error::{ConfigError, StateError};
pub use rating::{StarKind, StarRating};
pub use todo::{Todo, TodoDraft, TodoList};
