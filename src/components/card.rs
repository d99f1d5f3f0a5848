//! Card Components
//!
//! A card frame plus header, body and footer pieces that compose through
//! children.

use leptos::prelude::*;

/// Footer button of a `CardWithActions`
#[derive(Clone)]
pub struct CardAction {
    pub label: String,
    pub handler: Callback<()>,
}

impl CardAction {
    pub fn new(label: impl Into<String>, handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Callback::new(move |_: ()| handler()),
        }
    }
}

/// Card frame
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

/// Title row with an optional close button
///
/// The close button is only rendered when `on_close` is given.
#[component]
pub fn CardHeader(
    #[prop(default = "Title".to_string(), into)] title: String,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <h2>{title}</h2>
            {on_close.map(|on_close| view! {
                <button class="close-button" on:click=move |_| on_close.run(())>"X"</button>
            })}
        </div>
    }
}

#[component]
pub fn CardBody(children: Children) -> impl IntoView {
    view! { <div class="card-body">{children()}</div> }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <div class="card-footer">{children()}</div> }
}

/// Image card with one footer button per action
#[component]
pub fn CardWithActions(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] image_url: String,
    #[prop(optional)] actions: Vec<CardAction>,
) -> impl IntoView {
    let alt = title.clone();

    view! {
        <Card>
            <CardHeader title=title />
            <CardBody>
                <img src=image_url alt=alt class="card-image" />
                <p>{description}</p>
            </CardBody>
            <CardFooter>
                {actions.into_iter().map(|action| {
                    let handler = action.handler;
                    view! {
                        <button class="card-button" on:click=move |_| handler.run(())>
                            {action.label}
                        </button>
                    }
                }).collect_view()}
            </CardFooter>
        </Card>
    }
}
