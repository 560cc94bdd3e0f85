//! Information Card Components
//!
//! A card per information section and a detail modal with the full
//! description, map and photos.

use leptos::prelude::*;

use crate::components::Lightbox;
use crate::context::use_api;
use crate::media::normalize_image_url;
use crate::models::{InfoSection, Slide};

/// Icon shown for a section type
pub fn section_icon(section_type: &str) -> &'static str {
    match section_type {
        "ceremony" | "reception" => "📅",
        "dress_code" => "👔",
        "parking" => "🚗",
        "hotel" => "🏨",
        _ => "📍",
    }
}

/// Embeds arrive either as a bare URL or as a full `<iframe>` snippet
fn is_embed_markup(embed: &str) -> bool {
    embed.trim_start().starts_with('<')
}

#[component]
pub fn InfoCard(section: InfoSection, #[prop(into)] on_open: Callback<()>) -> impl IntoView {
    view! {
        <div class="info-card" on:click=move |_| on_open.run(())>
            <div class="info-card-icon">{section_icon(&section.section_type)}</div>
            <h3 class="info-card-title">{section.title}</h3>
            {section.description.map(|d| view! { <p class="info-card-description">{d}</p> })}
        </div>
    }
}

#[component]
pub fn InfoModal(section: InfoSection, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let base = use_api().base_url().to_string();
    let images = section.all_images();
    let slides: Vec<Slide> = images
        .iter()
        .map(|url| Slide { image_url: url.clone(), caption: None })
        .collect();
    let (viewing, set_viewing) = signal::<Option<usize>>(None);
    let slides = StoredValue::new(slides);

    let map = section.map_embed_url.filter(|m| !m.trim().is_empty()).map(|embed| {
        if is_embed_markup(&embed) {
            view! { <div class="info-modal-map" inner_html=embed /> }.into_any()
        } else {
            view! {
                <div class="info-modal-map">
                    {view! { <iframe src=embed allowfullscreen=true referrerpolicy="no-referrer-when-downgrade" /> }.attr("loading", "lazy")}
                </div>
            }
            .into_any()
        }
    });

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal info-modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                <div class="info-modal-header">
                    <span class="info-card-icon">{section_icon(&section.section_type)}</span>
                    <h2>{section.title}</h2>
                </div>
                {section.description.map(|d| view! { <p class="info-modal-description">{d}</p> })}
                {section.additional_info.map(|a| view! { <div class="info-modal-additional">{a}</div> })}
                {map}
                {(!images.is_empty()).then(|| view! {
                    <div class="info-modal-gallery">
                        {images
                            .iter()
                            .enumerate()
                            .map(|(i, url)| view! {
                                <img
                                    src=normalize_image_url(url, &base)
                                    alt="Section photo"
                                    on:click=move |_| set_viewing.set(Some(i))
                                />
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        </div>

        {move || viewing.get().map(|i| view! {
            <Lightbox
                slides=slides.get_value()
                initial_index=i
                on_close=move |_| set_viewing.set(None)
            />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_icons() {
        assert_eq!(section_icon("ceremony"), section_icon("reception"));
        assert_eq!(section_icon("hotel"), "🏨");
        assert_eq!(section_icon("something_new"), "📍");
    }

    #[test]
    fn test_embed_detection() {
        assert!(is_embed_markup(r#" <iframe src="https://maps.google.com/..."></iframe>"#));
        assert!(!is_embed_markup("https://www.google.com/maps/embed?pb=1"));
    }
}
