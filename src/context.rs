//! Application Context
//!
//! Read-only configuration provided via Leptos Context API.

use leptos::prelude::*;
use workshop_state::{CounterConfig, RatingConfig, WorkshopConfig};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<WorkshopConfig>,
}

impl AppContext {
    pub fn new(config: WorkshopConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Starting values for the counter demos
    pub fn counter_config(&self) -> CounterConfig {
        self.config.with_value(|config| config.counter.clone())
    }

    /// Props for the star rating demo
    pub fn rating_config(&self) -> RatingConfig {
        self.config.with_value(|config| config.rating.clone())
    }
}
