//! Gallery Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Loading, PageHeader};
use crate::components::GalleryGrid;
use crate::context::use_api;
use crate::models::Slide;
use crate::reorder::sorted_by_order;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let api = use_api();
    let (slides, set_slides) = signal(Vec::<Slide>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api.list_gallery_images().await {
            Ok(loaded) => set_slides.set(sorted_by_order(loaded).iter().map(Slide::from).collect()),
            Err(e) => tracing::error!("Error fetching gallery images: {e}"),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page gallery-page">
            <PageHeader title="Gallery" tagline="Moments we've shared together" />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <GalleryGrid slides=slides />
            </Show>
        </div>
    }
}
