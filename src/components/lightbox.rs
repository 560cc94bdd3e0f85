//! Lightbox Component
//!
//! Full-screen image viewer with wrap-around navigation.
//! Escape closes, arrow keys move between slides.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_api;
use crate::media::normalize_image_url;
use crate::models::Slide;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn previous_index(current: usize, len: usize) -> usize {
    match (len, current) {
        (0, _) => 0,
        (_, 0) => len - 1,
        _ => current - 1,
    }
}

#[component]
pub fn Lightbox(
    slides: Vec<Slide>,
    initial_index: usize,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let base = use_api().base_url().to_string();
    let len = slides.len();
    let (index, set_index) = signal(initial_index.min(len.saturating_sub(1)));
    let slides = StoredValue::new(slides);

    let show_previous = move || set_index.update(|i| *i = previous_index(*i, len));
    let show_next = move || set_index.update(|i| *i = next_index(*i, len));

    let keys = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Escape" => on_close.run(()),
        "ArrowLeft" => show_previous(),
        "ArrowRight" => show_next(),
        _ => {}
    });
    on_cleanup(move || keys.remove());

    let current = move || slides.with_value(|s| s.get(index.get()).cloned());

    view! {
        <div class="lightbox" on:click=move |_| on_close.run(())>
            <div class="lightbox-backdrop" />
            <div class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                {move || current().map(|slide| {
                    let alt = slide.caption.clone().unwrap_or_else(|| "Gallery image".to_string());
                    view! {
                        <img class="lightbox-image" src=normalize_image_url(&slide.image_url, &base) alt=alt />
                        {slide.caption.map(|caption| view! { <p class="lightbox-caption">{caption}</p> })}
                    }
                })}

                <button class="lightbox-close" on:click=move |_| on_close.run(())>"×"</button>

                <Show when=move || (len > 1)>
                    <button class="lightbox-prev" on:click=move |_| show_previous()>"‹"</button>
                    <button class="lightbox-next" on:click=move |_| show_next()>"›"</button>
                    <div class="lightbox-counter">{move || format!("{} / {}", index.get() + 1, len)}</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(previous_index(0, 3), 2);
        assert_eq!(previous_index(2, 3), 1);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(previous_index(0, 0), 0);
    }
}
