//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Day;

/// Workshop-wide state. Widget state stays inside each demo.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Day whose demo and notes are shown
    pub current_day: Day,
}

impl AppState {
    pub fn new(current_day: Day) -> Self {
        Self { current_day }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Switch the visible day
pub fn store_select_day(store: &AppStore, day: Day) {
    if store.current_day().get_untracked() == day {
        return;
    }
    log::info!("[Store] Switching to {} ({})", day.label(), day.topic());
    store.current_day().set(day);
}
