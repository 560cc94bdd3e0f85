//! Our Story Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Loading, PageHeader};
use crate::components::GalleryGrid;
use crate::context::use_api;
use crate::models::{Slide, StoryImage, StorySection};
use crate::reorder::sorted_by_order;

#[component]
pub fn StoryPage() -> impl IntoView {
    let api = use_api();
    let (sections, set_sections) = signal(Vec::<StorySection>::new());
    let (images, set_images) = signal(Vec::<StoryImage>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api.list_story_sections().await {
            Ok(mut loaded) => {
                loaded.sort_by_key(|s| s.order);
                set_sections.set(loaded);
            }
            Err(e) => tracing::error!("Error fetching story sections: {e}"),
        }
        match api.list_story_images().await {
            Ok(loaded) => set_images.set(sorted_by_order(loaded)),
            Err(e) => tracing::error!("Error fetching story images: {e}"),
        }
        set_loading.set(false);
    });

    let slides = Signal::derive(move || images.with(|imgs| imgs.iter().map(Slide::from).collect::<Vec<_>>()));

    view! {
        <div class="page story-page">
            <PageHeader title="Our Story" tagline="A tale of love and commitment" />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="story-sections">
                    {move || {
                        sections
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, section)| view! {
                                <article class=if index % 2 == 0 { "story-section left" } else { "story-section right" }>
                                    <h2>{section.title}</h2>
                                    <p>{section.content}</p>
                                </article>
                            })
                            .collect_view()
                    }}
                </div>
                <Show when=move || !images.with(Vec::is_empty)>
                    <GalleryGrid slides=slides />
                </Show>
            </Show>
        </div>
    }
}
