//! Card Demo
//!
//! Day four: the composed card next to a card driven by an action list.

use leptos::prelude::*;

use crate::components::{Button, Card, CardAction, CardBody, CardFooter, CardHeader, CardWithActions};

const SAMPLE_IMAGE: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='320' height='160'>\
<rect width='320' height='160' fill='%23dfe6e9'/>\
<text x='160' y='86' font-size='20' text-anchor='middle' fill='%23636e72'>Sample image</text>\
</svg>";

#[component]
pub fn CardDemo() -> impl IntoView {
    let (closed, set_closed) = signal(false);
    let (clicks, set_clicks) = signal(0u32);
    let (likes, set_likes) = signal(0u32);

    let close = move |_: ()| {
        log::info!("[Card] Closed");
        set_closed.set(true);
    };
    let click_me = move |_: ()| {
        set_clicks.update(|n| *n += 1);
        log::debug!("[Card] Footer button clicked {} times", clicks.get_untracked());
    };

    let actions = vec![
        CardAction::new("Like", move || {
            set_likes.update(|n| *n += 1);
            log::info!("[Card] Liked ({} total)", likes.get_untracked());
        }),
        CardAction::new("Share", || log::info!("[Card] Share requested")),
    ];

    view! {
        <section class="card-section">
            <p class="day-subtitle">"Day 4: Building components from smaller components"</p>

            <div class="card-grid">
                <Show
                    when=move || !closed.get()
                    fallback=move || view! {
                        <div class="card card-closed">
                            <p>"Card closed."</p>
                            <button class="button" on:click=move |_| set_closed.set(false)>"Show again"</button>
                        </div>
                    }
                >
                    <Card>
                        <CardHeader title="Card Title" on_close=close />
                        <CardBody>
                            <p>"Body content goes here"</p>
                            <p class="card-clicks">{move || format!("Clicked {} times", clicks.get())}</p>
                        </CardBody>
                        <CardFooter>
                            <Button label="Click Me" on_click=click_me />
                            <Button label="Click Me" on_click=click_me />
                        </CardFooter>
                    </Card>
                </Show>

                <CardWithActions
                    title="Card With Actions"
                    description="Each footer button comes from the actions list passed in as a prop."
                    image_url=SAMPLE_IMAGE
                    actions=actions
                />
            </div>

            <p class="card-likes">{move || format!("Likes: {}", likes.get())}</p>
        </section>
    }
}
