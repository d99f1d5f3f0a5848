//! Button Component
//!
//! Labelled button with a typed click callback.

use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <button disabled=disabled on:click=move |_| on_click.run(())>
            {label}
        </button>
    }
}
