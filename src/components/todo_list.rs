//! Todo List Component
//!
//! Owns the todo collection. Children get the items and the add, toggle and
//! remove callbacks; every change goes through a `TodoList` transition.

use leptos::prelude::*;
use workshop_state::{StateError, TodoList as TodoState};

use crate::components::{TodoInput, TodoItem};

#[component]
pub fn TodoList() -> impl IntoView {
    let (todos, set_todos) = signal(TodoState::new());

    // Rejected transitions leave the signal untouched
    let apply = move |action: &str, result: Result<TodoState, StateError>| match result {
        Ok(next) => set_todos.set(next),
        Err(e) => log::debug!("[TodoList] {} ignored: {}", action, e),
    };

    let on_add = Callback::new(move |text: String| {
        let result = todos.with_untracked(|list| list.try_add(&text));
        if result.is_ok() {
            log::info!("[TodoList] Added {:?}", text);
        }
        apply("add", result);
    });
    let on_toggle = Callback::new(move |id: u32| {
        apply("toggle", todos.with_untracked(|list| list.try_toggle(id)));
    });
    let on_remove = Callback::new(move |id: u32| {
        let result = todos.with_untracked(|list| list.try_remove(id));
        if result.is_ok() {
            log::info!("[TodoList] Removed #{}", id);
        }
        apply("remove", result);
    });
    let on_clear = move |_| {
        set_todos.update(|list| *list = list.clear());
        log::info!("[TodoList] Cleared");
    };

    view! {
        <div class="todo-list-container">
            <h2>"My Todo List"</h2>

            <TodoInput on_add=on_add />

            <div class="todo-stats">
                <p>
                    {move || todos.with(|list| {
                        format!("Total: {} | Done: {}", list.total(), list.completed_count())
                    })}
                </p>
            </div>

            <div class="todo-items">
                <Show
                    when=move || !todos.with(TodoState::is_empty)
                    fallback=|| view! {
                        <p class="empty-message">"No todos yet! Add one to get started."</p>
                    }
                >
                    // Keyed on completion too, so a toggled row re-renders
                    <For
                        each=move || todos.with(|list| list.items().to_vec())
                        key=|todo| (todo.id, todo.completed)
                        children=move |todo| view! {
                            <TodoItem todo=todo on_toggle=on_toggle on_remove=on_remove />
                        }
                    />
                    <button class="clear-button" on:click=on_clear>"Clear all"</button>
                </Show>
            </div>
        </div>
    }
}
