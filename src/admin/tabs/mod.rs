//! Admin Content Tabs
//!
//! One tab per content collection. Each tab loads its collection on mount
//! and edits it through the API client.

mod gallery;
mod gifts;
mod home;
mod info;
mod rsvp;
mod story;
mod timeline;

pub use gallery::GalleryTab;
pub use gifts::GiftsTab;
pub use home::HomeTab;
pub use info::InfoTab;
pub use rsvp::RsvpTab;
pub use story::StoryTab;
pub use timeline::TimelineTab;

use leptos::prelude::*;

use super::fields::TextField;
use super::forms::ImageForm;
use crate::components::ImagePicker;
use crate::context::use_api;
use crate::media::normalize_image_url;

/// Upload-or-URL image entry with a caption, shared by story and gallery
#[component]
fn ImageEntry(
    form: RwSignal<ImageForm>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let current = Signal::derive(move || form.with(|f| f.image_url.clone()));
    let in_use = Signal::derive(move || vec![current.get()]);

    view! {
        <form
            class="admin-form inline-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            <div class="form-field">
                <label>"Image"</label>
                <ImagePicker current=current in_use=in_use on_uploaded=move |url: String| form.update(|f| f.image_url = url) />
            </div>
            <div class="form-or">"OR"</div>
            <TextField form=form label="Image URL (if already hosted)" input_type="url" placeholder="https://..."
                get=|f: &ImageForm| f.image_url.clone() set=|f: &mut ImageForm, v| f.image_url = v />
            <TextField form=form label="Caption" placeholder="Caption (optional)"
                get=|f: &ImageForm| f.caption.clone() set=|f: &mut ImageForm, v| f.caption = v />
            <FormActions saving=saving on_cancel=on_cancel />
        </form>
    }
}

/// Save and Cancel buttons closing every admin form
#[component]
fn FormActions(#[prop(into)] saving: Signal<bool>, #[prop(into)] on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button type="submit" class="btn-primary" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
            <button type="button" class="btn-secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
        </div>
    }
}

/// Small preview of a stored image
#[component]
fn Thumbnail(url: String, caption: Option<String>) -> impl IntoView {
    let src = normalize_image_url(&url, use_api().base_url());
    let alt = caption.clone().unwrap_or_else(|| "Image".to_string());
    view! {
        <figure class="admin-thumb">
            <img src=src alt=alt />
            {caption.map(|c| view! { <figcaption>{c}</figcaption> })}
        </figure>
    }
}
