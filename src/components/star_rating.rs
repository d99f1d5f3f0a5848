//! Star Rating Components
//!
//! `StarRating` owns the rating state; `StarsRow` and `RatingDisplay` only
//! render it and relay interactions.

use leptos::prelude::*;
use workshop_state::rating::{self, StarRating as RatingState};
use workshop_state::StarSize;

/// Interactive star rating widget
///
/// # Arguments
/// * `max_stars` - Number of stars shown
/// * `initial_rating` - Rating before any click, and the value restored by reset
/// * `on_rating_change` - Called with the new rating on click and reset
#[component]
pub fn StarRating(
    #[prop(default = 5)] max_stars: u32,
    #[prop(default = 0)] initial_rating: u32,
    #[prop(optional)] size: StarSize,
    #[prop(default = "#ffd700".to_string(), into)] color: String,
    #[prop(optional, into)] on_rating_change: Option<Callback<u32>>,
) -> impl IntoView {
    let (state, set_state) = signal(RatingState::new(max_stars, initial_rating));

    let notify = move |value: u32| {
        if let Some(callback) = on_rating_change {
            callback.run(value);
        }
    };

    let commit = move |next: RatingState| {
        set_state.set(next);
        notify(next.rating());
    };

    let on_click = Callback::new(move |index: u32| commit(state.get_untracked().click(index)));
    let on_hover = Callback::new(move |index: u32| set_state.update(|s| *s = s.hover(index)));
    let on_leave = Callback::new(move |_: ()| set_state.update(|s| *s = s.leave()));
    let on_reset = Callback::new(move |_: ()| commit(state.get_untracked().reset()));

    view! {
        <div class=format!("star-rating-container {}", size.class())>
            <StarsRow
                state=state
                color=color
                on_click=on_click
                on_hover=on_hover
                on_leave=on_leave
            />
            <RatingDisplay state=state on_reset=on_reset />
        </div>
    }
}

/// One clickable star per rating step
#[component]
pub fn StarsRow(
    #[prop(into)] state: Signal<RatingState>,
    #[prop(into)] color: String,
    on_click: Callback<u32>,
    on_hover: Callback<u32>,
    on_leave: Callback<()>,
) -> impl IntoView {
    let max_stars = state.with_untracked(|s| s.max_stars());
    let style = format!("color: {};", color);

    view! {
        <div class="stars">
            {(0..max_stars).map(|index| {
                let kind = move || state.with(|s| s.star_kind(index));
                view! {
                    <span
                        class=move || format!("star {}", kind().class())
                        role="button"
                        tabindex="0"
                        style=style.clone()
                        on:click=move |_| on_click.run(index)
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                on_click.run(index);
                            }
                        }
                        on:mouseenter=move |_| on_hover.run(index)
                        on:mouseleave=move |_| on_leave.run(())
                    >
                        {move || kind().glyph()}
                    </span>
                }
            }).collect_view()}
        </div>
    }
}

/// Feedback text, numeric rating and reset button
#[component]
pub fn RatingDisplay(
    #[prop(into)] state: Signal<RatingState>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let current = move || state.with(|s| s.rating());

    view! {
        <div class="rating-display">
            <p class="feedback-message">{move || rating::feedback(current())}</p>

            <p class="rating-text">
                "Rating: "<span class="rating-number">{current}</span>" / "
                {move || state.with(|s| s.max_stars())}
            </p>

            <Show when=move || state.with(|s| s.can_reset())>
                <button class="reset-button" on:click=move |_| on_reset.run(())>
                    "Reset Rating"
                </button>
            </Show>
        </div>
    }
}
