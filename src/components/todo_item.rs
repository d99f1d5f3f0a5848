//! Todo Item Component
//!
//! Individual row in the todo list.

use leptos::prelude::*;
use workshop_state::Todo;

/// A single todo row
#[component]
pub fn TodoItem(
    todo: Todo,
    on_toggle: Callback<u32>,
    on_remove: Callback<u32>,
) -> impl IntoView {
    let Todo { id, text, completed } = todo;

    view! {
        <div class=if completed { "todo-item completed" } else { "todo-item" }>
            // Checkbox
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=completed
                on:change=move |_| on_toggle.run(id)
            />

            // Text
            <span class="todo-text">{text}</span>

            // Delete button
            <button class="delete-button" on:click=move |_| on_remove.run(id)>
                "Delete"
            </button>
        </div>
    }
}
