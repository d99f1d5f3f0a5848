//! Component Workshop App
//!
//! Day tabs on top, the day's demo next to its lesson notes, activity log
//! at the bottom.

use leptos::prelude::*;
use reactive_stores::Store;
use workshop_state::WorkshopConfig;

use crate::components::{
    CardDemo, CounterDemo, DayTabBar, LessonNotes, LogPanel, StarRating, TodoList,
};
use crate::context::AppContext;
use crate::models::Day;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: WorkshopConfig) -> impl IntoView {
    let first_day = Day::from_number(config.default_day).unwrap_or_default();
    let store = Store::new(AppState::new(first_day));

    // Provide state and configuration to all children
    provide_context(store);
    provide_context(AppContext::new(config));

    view! {
        <div class="app-layout">
            <header class="App-header">
                <h1>"Component Workshop"</h1>
                <DayTabBar />
            </header>

            <div class="day-layout">
                <main class="main-content">
                    {move || view! { <DayDemo day=store.current_day().get() /> }}
                </main>
                <LessonNotes />
            </div>

            <LogPanel />
        </div>
    }
}

/// Demo widget for one day. Switching days drops the previous demo's state.
#[component]
fn DayDemo(day: Day) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    match day {
        Day::One => view! {
            <CounterDemo subtitle="Day 1: Building your first interactive component" />
        }.into_any(),
        Day::Two => view! {
            <CounterDemo subtitle="Day 2: The same counter, assembled from typed components" />
        }.into_any(),
        Day::Three => {
            let rating = ctx.rating_config();
            view! {
                <section class="rating-section">
                    <p class="day-subtitle">"Day 3: Interactive Component Mini-Project"</p>
                    <StarRating
                        max_stars=rating.max_stars
                        initial_rating=rating.initial_rating
                        size=rating.size
                        color=rating.color
                        on_rating_change=move |value: u32| log::info!("User rated: {} stars", value)
                    />
                </section>
            }.into_any()
        }
        Day::Four => view! { <CardDemo /> }.into_any(),
        Day::Five => view! {
            <section class="todo-section">
                <p class="day-subtitle">"Day 5: Todo List App with list state"</p>
                <TodoList />
            </section>
        }.into_any(),
    }
}
