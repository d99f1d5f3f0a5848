//! Day Tab Bar Component
//!
//! Tab bar for switching between course days.

use leptos::prelude::*;

use crate::models::Day;
use crate::store::{store_select_day, use_app_store, AppStateStoreFields};

/// Day Tab Bar component
#[component]
pub fn DayTabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="day-tab-bar">
            {Day::ALL.into_iter().map(|day| {
                let is_active = move || store.current_day().get() == day;
                let tab_class = move || {
                    if is_active() { "day-tab active" } else { "day-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        title=day.topic()
                        on:click=move |_| store_select_day(&store, day)
                    >
                        {day.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
