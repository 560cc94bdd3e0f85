//! Timeline Component
//!
//! Vertical timeline of the wedding day, alternating sides.

use leptos::prelude::*;

use crate::models::TimelineEvent;

const CARD_TONES: [&str; 4] = ["tone-champagne", "tone-blush", "tone-rose", "tone-olive"];

#[component]
pub fn Timeline(#[prop(into)] events: Signal<Vec<TimelineEvent>>) -> impl IntoView {
    view! {
        <Show
            when=move || !events.with(Vec::is_empty)
            fallback=|| view! { <p class="empty-state">"No timeline events yet."</p> }
        >
            <div class="timeline">
                <div class="timeline-line" />
                {move || {
                    events
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, event)| {
                            let side = if index % 2 == 0 { "timeline-entry left" } else { "timeline-entry right" };
                            view! {
                                <div class=side>
                                    <div class="timeline-node" />
                                    <div class=format!("timeline-card {}", CARD_TONES[index % CARD_TONES.len()])>
                                        {event.icon.as_ref().map(|_| view! { <span class="timeline-icon">"⏰"</span> })}
                                        <div class="timeline-time">{event.display_time()}</div>
                                        <h3 class="timeline-title">{event.title}</h3>
                                        {event.description.map(|d| view! { <p class="timeline-description">{d}</p> })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
