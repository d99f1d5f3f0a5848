//! Lesson Notes Component
//!
//! Renders the current day's markdown notes.

use leptos::prelude::*;

use crate::markdown::parse_markdown;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LessonNotes() -> impl IntoView {
    let store = use_app_store();
    let html = Memo::new(move |_| parse_markdown(store.current_day().get().notes()));

    view! {
        <aside class="lesson-notes">
            <div class="markdown-body" inner_html=move || html.get()></div>
        </aside>
    }
}
