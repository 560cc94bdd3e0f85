//! Gallery Grid Component
//!
//! Image grid; clicking an image opens it in the lightbox.

use leptos::prelude::*;

use crate::components::Lightbox;
use crate::context::use_api;
use crate::media::normalize_image_url;
use crate::models::Slide;

#[component]
pub fn GalleryGrid(
    #[prop(into)] slides: Signal<Vec<Slide>>,
    #[prop(default = "No gallery images yet.")] empty_message: &'static str,
) -> impl IntoView {
    let base = use_api().base_url().to_string();
    let (selected, set_selected) = signal::<Option<usize>>(None);

    view! {
        <Show
            when=move || !slides.with(Vec::is_empty)
            fallback=move || view! { <p class="empty-state">{empty_message}</p> }
        >
            <div class="gallery-grid">
                {
                    let base = base.clone();
                    move || {
                        slides
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, slide)| {
                                let alt = slide.caption.clone().unwrap_or_else(|| "Gallery image".to_string());
                                view! {
                                    <div class="gallery-item" on:click=move |_| set_selected.set(Some(i))>
                                        <img src=normalize_image_url(&slide.image_url, &base) alt=alt loading="lazy" />
                                        {slide.caption.map(|c| view! { <div class="gallery-caption"><p>{c}</p></div> })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }
                }
            </div>
        </Show>

        {move || selected.get().map(|i| view! {
            <Lightbox
                slides=slides.get_untracked()
                initial_index=i
                on_close=move |_| set_selected.set(None)
            />
        })}
    }
}
