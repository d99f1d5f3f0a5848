//! Todo Input Component
//!
//! Buffers one line of text and hands it to the list on submit.

use leptos::prelude::*;
use workshop_state::TodoDraft;

/// Text field plus Add button. Enter submits as well.
#[component]
pub fn TodoInput(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
    let (draft, set_draft) = signal(TodoDraft::new());

    let submit = move || {
        let mut next = draft.get_untracked();
        match next.submit() {
            Some(text) => {
                set_draft.set(next);
                on_add.run(text);
            }
            None => log::debug!("[TodoInput] Ignoring blank input"),
        }
    };

    view! {
        <div class="todo-input">
            <input
                type="text"
                placeholder="Add a new todo..."
                prop:value=move || draft.with(|d| d.value().to_string())
                on:input=move |ev| set_draft.update(|d| d.set(event_target_value(&ev)))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button on:click=move |_| submit()>"Add"</button>
        </div>
    }
}
