//! Image Picker Component
//!
//! File input that validates, previews and uploads an image, then hands the
//! hosted URL back to the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::UploadFile;
use crate::context::use_api;
use crate::media::{normalize_image_url, validate_upload, ImageInfo, ACCEPT_IMAGES};
use crate::notify;

/// Browser-side leftovers of the picks made so far
#[derive(Debug, Default)]
struct PickState {
    /// Object URL behind the local preview
    preview: Option<String>,
    /// Newest upload, until a later pick supersedes it
    upload: Option<String>,
}

impl PickState {
    /// Track a new preview, returning the object URL it replaces
    fn show_preview(&mut self, url: String) -> Option<String> {
        self.preview.replace(url)
    }

    /// Track a finished upload, returning the superseded upload when
    /// neither a saved record nor the open form still points at it
    fn uploaded(&mut self, url: String, in_use: &[String]) -> Option<String> {
        self.upload
            .replace(url)
            .filter(|old| !in_use.iter().any(|used| used == old))
    }

    fn release_preview(&mut self) -> Option<String> {
        self.preview.take()
    }
}

fn revoke_preview(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::debug!("could not revoke preview url: {e:?}");
    }
}

/// Load `src` off-screen to learn its pixel size
fn measure_image(src: &str, file_name: String, size_bytes: u64, set_info: WriteSignal<Option<ImageInfo>>) {
    let Ok(img) = web_sys::HtmlImageElement::new() else { return };
    let probe = img.clone();
    let onload = Closure::once_into_js(move || {
        set_info.set(Some(ImageInfo {
            file_name,
            width: probe.natural_width(),
            height: probe.natural_height(),
            size_bytes,
        }));
    });
    img.set_onload(Some(onload.unchecked_ref()));
    img.set_src(src);
}

#[component]
pub fn ImagePicker(
    /// URL already stored on the record, shown until a new file is picked
    #[prop(into)]
    current: Signal<String>,
    /// URLs that must survive a newer pick: the saved record's and the form's
    #[prop(into)]
    in_use: Signal<Vec<String>>,
    #[prop(into)] on_uploaded: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let base = api.base_url().to_string();
    let max_bytes = api.max_upload_bytes();

    let (preview, set_preview) = signal::<Option<String>>(None);
    let (info, set_info) = signal::<Option<ImageInfo>>(None);
    let (uploading, set_uploading) = signal(false);
    let status = RwSignal::new(None::<String>);
    let picks = StoredValue::new(PickState::default());

    on_cleanup(move || {
        if let Some(url) = picks.try_update_value(PickState::release_preview).flatten() {
            revoke_preview(&url);
        }
    });

    let on_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };

        let name = file.name();
        let size = file.size() as u64;
        if let Err(e) = validate_upload(&name, size, max_bytes) {
            tracing::warn!("rejected image {name}: {e}");
            notify::alert(&e.to_string());
            input.set_value("");
            return;
        }

        set_info.set(None);
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                measure_image(&url, name, size, set_info);
                if let Some(old) = picks.try_update_value(|p| p.show_preview(url.clone())).flatten() {
                    revoke_preview(&old);
                }
                set_preview.set(Some(url));
            }
            Err(e) => tracing::warn!("no preview available: {e:?}"),
        }

        let api = api.clone();
        set_uploading.set(true);
        status.set(Some("Uploading...".to_string()));
        spawn_local(async move {
            let result = match UploadFile::read(&file, max_bytes).await {
                Ok(upload) => api.upload_file(upload).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(uploaded) => {
                    notify::flash(status, "Upload completed successfully!");
                    on_uploaded.run(uploaded.url.clone());
                    let in_use = in_use.get_untracked();
                    let replaced = picks.try_update_value(|p| p.uploaded(uploaded.url, &in_use)).flatten();
                    if let Some(replaced) = replaced {
                        if let Err(e) = api.delete_uploaded_url(&replaced).await {
                            tracing::warn!("could not remove replaced upload {replaced}: {e}");
                        }
                    }
                }
                Err(e) => {
                    status.set(Some("Error uploading image. Please try again.".to_string()));
                    notify::report("uploading image", &e);
                }
            }
            set_uploading.set(false);
        });
    };

    let shown = move || {
        preview.get().or_else(|| {
            let url = current.get();
            (!url.is_empty()).then(|| normalize_image_url(&url, &base))
        })
    };

    view! {
        <div class="image-picker">
            <input type="file" accept=ACCEPT_IMAGES disabled=move || uploading.get() on:change=on_change />
            <p class="form-hint">"JPG, PNG, GIF or WEBP, up to 5MB."</p>

            {move || shown().map(|src| view! { <img class="image-picker-preview" src=src alt="Preview" /> })}

            {move || info.get().map(|info| view! {
                <div class="image-info">
                    <h4>"Image Information"</h4>
                    <div><strong>"Name: "</strong>{info.file_name.clone()}</div>
                    <div><strong>"Dimensions: "</strong>{format!("{} × {}px", info.width, info.height)}</div>
                    <div><strong>"Size: "</strong>{format!("{:.2} MB", info.size_mb())}</div>
                    <div><strong>"Aspect Ratio: "</strong>{info.aspect_ratio()}</div>
                    <div class="image-hints">
                        {info.hints().into_iter().map(|hint| view! {
                            <span class=if hint.is_positive() { "hint hint-good" } else { "hint hint-warn" }>
                                {hint.message()}
                            </span>
                        }).collect_view()}
                    </div>
                </div>
            })}

            {move || status.get().map(|msg| {
                let class = if msg.starts_with("Error") { "upload-status error" } else { "upload-status" };
                view! { <div class=class>{msg}</div> }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_superseded_unsaved_upload_is_discarded() {
        let mut picks = PickState::default();
        assert_eq!(picks.uploaded("/uploads/a.jpg".into(), &urls(&["/uploads/a.jpg"])), None);
        // B replaces A in the form and nothing saved A
        assert_eq!(
            picks.uploaded("/uploads/b.jpg".into(), &urls(&["/uploads/b.jpg"])),
            Some("/uploads/a.jpg".to_string())
        );
    }

    #[test]
    fn test_saved_upload_survives_a_new_pick() {
        let mut picks = PickState::default();
        picks.uploaded("/uploads/a.jpg".into(), &urls(&["/uploads/a.jpg"]));
        // A was saved, then B picked while the picker stayed mounted
        let in_use = urls(&["/uploads/a.jpg", "/uploads/b.jpg"]);
        assert_eq!(picks.uploaded("/uploads/b.jpg".into(), &in_use), None);
    }

    #[test]
    fn test_gallery_picks_accumulate() {
        let mut picks = PickState::default();
        picks.uploaded("/uploads/1.jpg".into(), &urls(&["/uploads/1.jpg"]));
        let in_use = urls(&["/uploads/1.jpg", "/uploads/2.jpg"]);
        assert_eq!(picks.uploaded("/uploads/2.jpg".into(), &in_use), None);
    }

    #[test]
    fn test_previews_hand_back_the_url_to_revoke() {
        let mut picks = PickState::default();
        assert_eq!(picks.show_preview("blob:one".into()), None);
        assert_eq!(picks.show_preview("blob:two".into()), Some("blob:one".to_string()));
        assert_eq!(picks.release_preview(), Some("blob:two".to_string()));
        assert_eq!(picks.release_preview(), None);
    }
}
