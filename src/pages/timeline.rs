//! Timeline Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Loading, PageHeader};
use crate::components::Timeline;
use crate::context::use_api;
use crate::models::TimelineEvent;
use crate::reorder::sorted_by_order;

#[component]
pub fn TimelinePage() -> impl IntoView {
    let api = use_api();
    let (events, set_events) = signal(Vec::<TimelineEvent>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api.list_timeline_events().await {
            Ok(loaded) => set_events.set(sorted_by_order(loaded)),
            Err(e) => tracing::error!("Error fetching timeline events: {e}"),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page timeline-page">
            <PageHeader title="Timeline" tagline="Join us as we celebrate throughout the day" />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Timeline events=events />
            </Show>
        </div>
    }
}
