//! Counter Components
//!
//! Count display, step control and value history around one `Counter`.

use leptos::prelude::*;
use workshop_state::counter::{parse_step, MAX_STEP, MIN_STEP};
use workshop_state::Counter;

use crate::components::Button;
use crate::context::AppContext;

/// Large coloured count
#[component]
pub fn CounterDisplay(
    #[prop(into)] count: Signal<i64>,
    #[prop(into)] color: Signal<String>,
    #[prop(default = "Count".to_string(), into)] label: String,
) -> impl IntoView {
    view! {
        <p
            class="count-display"
            style=move || format!("color: {}; font-size: 32px; font-weight: bold;", color.get())
        >
            {label}": "{move || count.get()}
        </p>
    }
}

/// Counter demo: buttons, step input and history
#[component]
pub fn CounterDemo(#[prop(into)] subtitle: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let settings = ctx.counter_config();

    let (counter, set_counter) = signal(Counter::new(settings.initial, settings.step));

    let count = Signal::derive(move || counter.with(Counter::count));
    let color = Signal::derive(move || counter.with(|c| c.tone().color().to_string()));

    let increment = move |_: ()| {
        set_counter.update(|c| *c = c.increment());
        log::debug!("[Counter] Incremented to {}", counter.with_untracked(Counter::count));
    };
    let decrement = move |_: ()| {
        set_counter.update(|c| *c = c.decrement());
        log::debug!("[Counter] Decremented to {}", counter.with_untracked(Counter::count));
    };
    let reset = move |_: ()| {
        set_counter.update(|c| *c = c.reset());
        log::debug!("[Counter] Reset");
    };

    view! {
        <section class="counter-section">
            <p class="day-subtitle">{subtitle}</p>

            <div class="counter">
                <CounterDisplay count=count color=color label="Count" />
                <div class="button-group">
                    <Button label="Increment" on_click=increment />
                    <Button label="Decrement" on_click=decrement />
                    <Button label="Reset" on_click=reset />
                </div>
            </div>

            <div class="step-control">
                <label for="step-input">"Step Amount: "</label>
                <input
                    id="step-input"
                    type="number"
                    min=MIN_STEP.to_string()
                    max=MAX_STEP.to_string()
                    prop:value=move || counter.with(|c| c.step().to_string())
                    on:input=move |ev| match parse_step(&event_target_value(&ev)) {
                        Ok(step) => set_counter.update(|c| *c = c.with_step(step)),
                        Err(e) => log::debug!("[Counter] Ignoring step input: {}", e),
                    }
                />
            </div>

            <Show when=move || counter.with(Counter::has_history)>
                <div class="history">
                    <h3>"History"</h3>
                    <p class="history-display">{move || counter.with(Counter::history_line)}</p>
                </div>
            </Show>
        </section>
    }
}
