//! Log Panel Component
//!
//! Collapsible list of the newest entries from the rolling logger.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use rolling_logger::LogEntry;

/// Lines shown when expanded
const VISIBLE_LINES: usize = 12;
/// Polling period for new entries
const REFRESH_MS: u32 = 1_000;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<LogEntry>::new());
    let (expanded, set_expanded) = signal(false);

    let refresh = move || {
        let Some(logger) = rolling_logger::global() else {
            return;
        };
        let shown = entries.with_untracked(|e| e.last().map_or(0, |entry| entry.seq));
        if logger.last_seq() != shown {
            set_entries.set(logger.recent(VISIBLE_LINES));
        }
    };
    refresh();

    // The panel is mounted once at the root and lives as long as the page
    Interval::new(REFRESH_MS, refresh).forget();

    view! {
        <footer class="log-panel">
            <button class="log-toggle" on:click=move |_| set_expanded.update(|v| *v = !*v)>
                {move || if expanded.get() { "▼ Activity log" } else { "▶ Activity log" }}
            </button>
            <Show when=move || expanded.get()>
                <ul class="log-lines">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.seq
                        children=|entry| {
                            let class = format!("log-line level-{}", entry.level.as_str().to_lowercase());
                            view! { <li class=class>{entry.format_line()}</li> }
                        }
                    />
                </ul>
            </Show>
        </footer>
    }
}
