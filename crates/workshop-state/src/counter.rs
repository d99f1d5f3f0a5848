//! Counter State
//!
//! Count, step and the history of every value the count has taken.

use crate::error::StateError;

/// Smallest accepted step
pub const MIN_STEP: i64 = 1;
/// Largest accepted step
pub const MAX_STEP: i64 = 100;

/// Beyond this magnitude the count changes colour
const TONE_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountTone {
    Positive,
    Neutral,
    Negative,
}

impl CountTone {
    /// CSS colour used by the count display
    pub fn color(self) -> &'static str {
        match self {
            CountTone::Positive => "blue",
            CountTone::Neutral => "black",
            CountTone::Negative => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i64,
    step: i64,
    initial: i64,
    history: Vec<i64>,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl Counter {
    pub fn new(initial: i64, step: i64) -> Self {
        Self {
            count: initial,
            step: clamp_step(step),
            initial,
            history: vec![initial],
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// History is only worth showing once the count has moved
    pub fn has_history(&self) -> bool {
        self.history.len() > 1
    }

    pub fn history_line(&self) -> String {
        self.history
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" → ")
    }

    pub fn tone(&self) -> CountTone {
        if self.count > TONE_THRESHOLD {
            CountTone::Positive
        } else if self.count < -TONE_THRESHOLD {
            CountTone::Negative
        } else {
            CountTone::Neutral
        }
    }

    pub fn increment(&self) -> Self {
        self.moved_to(self.count.saturating_add(self.step))
    }

    pub fn decrement(&self) -> Self {
        self.moved_to(self.count.saturating_sub(self.step))
    }

    pub fn reset(&self) -> Self {
        Self::new(self.initial, self.step)
    }

    pub fn with_step(&self, step: i64) -> Self {
        Self {
            step: clamp_step(step),
            ..self.clone()
        }
    }

    fn moved_to(&self, count: i64) -> Self {
        let mut history = self.history.clone();
        history.push(count);
        Self {
            count,
            history,
            ..self.clone()
        }
    }
}

fn clamp_step(step: i64) -> i64 {
    step.clamp(MIN_STEP, MAX_STEP)
}

/// Parse the raw value of the step input.
pub fn parse_step(raw: &str) -> Result<i64, StateError> {
    raw.trim()
        .parse::<i64>()
        .map(clamp_step)
        .map_err(|_| StateError::InvalidStep(raw.to_string()))
}
