//! Workshop Configuration
//!
//! Optional JSON document supplied by the host page. Every field has a
//! default, so `{}` is a valid configuration.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::counter::{MAX_STEP, MIN_STEP};
use crate::error::ConfigError;

/// Number of lesson days in the course
pub const DAY_COUNT: u8 = 5;

/// Upper bound for the star rating widget
pub const MAX_STARS_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl StarSize {
    pub fn class(self) -> &'static str {
        match self {
            StarSize::Small => "size-small",
            StarSize::Medium => "size-medium",
            StarSize::Large => "size-large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub initial: i64,
    pub step: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { initial: 0, step: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub max_stars: u32,
    pub initial_rating: u32,
    pub size: StarSize,
    pub color: String,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            max_stars: 5,
            initial_rating: 0,
            size: StarSize::Medium,
            color: "#ffd700".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkshopConfig {
    /// Day shown on load (1-based)
    pub default_day: u8,
    pub log_level: String,
    /// Entries kept by the in-memory log buffer
    pub log_capacity: usize,
    pub counter: CounterConfig,
    pub rating: RatingConfig,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            default_day: 1,
            log_level: "info".to_string(),
            log_capacity: 200,
            counter: CounterConfig::default(),
            rating: RatingConfig::default(),
        }
    }
}

impl WorkshopConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=DAY_COUNT).contains(&self.default_day) {
            return Err(ConfigError::DefaultDay {
                value: self.default_day,
                max: DAY_COUNT,
            });
        }

        let rating = &self.rating;
        if !(1..=MAX_STARS_LIMIT).contains(&rating.max_stars) {
            return Err(ConfigError::MaxStars {
                value: rating.max_stars,
                max: MAX_STARS_LIMIT,
            });
        }
        if rating.initial_rating > rating.max_stars {
            return Err(ConfigError::InitialRating {
                rating: rating.initial_rating,
                max_stars: rating.max_stars,
            });
        }

        if !(MIN_STEP..=MAX_STEP).contains(&self.counter.step) {
            return Err(ConfigError::Step(self.counter.step));
        }

        self.log_filter()?;
        if self.log_capacity == 0 {
            return Err(ConfigError::LogCapacity);
        }

        Ok(())
    }

    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
