//! Information Tab
//!
//! Ceremony, reception and practical-info cards. Cards are reordered by
//! dragging and may carry a map embed and a photo gallery.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{FormActions, Thumbnail};
use crate::admin::fields::{Select, TextArea, TextField};
use crate::admin::forms::InfoForm;
use crate::components::{DeleteConfirmButton, ImagePicker, SortableList};
use crate::context::use_api;
use crate::models::{InfoSection, SECTION_TYPES};
use crate::notify;
use crate::reorder::ReorderList;

#[component]
fn GalleryUrls(form: RwSignal<InfoForm>, in_use: Signal<Vec<String>>) -> impl IntoView {
    let nothing = Signal::derive(String::new);

    view! {
        <div class="form-field">
            <label>"Gallery"</label>
            <div class="admin-thumb-grid">
                {move || {
                    form.with(|f| f.gallery_urls.clone())
                        .into_iter()
                        .map(|url| {
                            let target = url.clone();
                            view! {
                                <div class="admin-thumb-item">
                                    <Thumbnail url=url caption=None />
                                    <button
                                        type="button"
                                        class="btn-link"
                                        on:click=move |_| form.update(|f| f.gallery_urls.retain(|u| *u != target))
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <ImagePicker current=nothing in_use=in_use on_uploaded=move |url: String| form.update(|f| f.add_gallery_url(url)) />
        </div>
    }
}

#[component]
pub fn InfoTab() -> impl IntoView {
    let api = use_api();

    let sections = RwSignal::new(ReorderList::<InfoSection>::default());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let editing = RwSignal::new(None::<Option<u32>>);
    let form = RwSignal::new(InfoForm::default());
    // Images of the section as last loaded from the server
    let saved_images = RwSignal::new(Vec::<String>::new());
    let in_use = Signal::derive(move || {
        let mut urls = saved_images.get();
        form.with(|f| {
            urls.push(f.image_url.clone());
            urls.extend(f.gallery_urls.iter().cloned());
        });
        urls
    });

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.list_info_sections().await {
                    Ok(loaded) => sections.update(|l| l.replace(loaded)),
                    Err(e) => tracing::error!("Error fetching info sections: {e}"),
                }
                set_loading.set(false);
            });
        }
    };
    fetch();

    let open = move |section: Option<&InfoSection>| {
        form.set(section.map(InfoForm::from_section).unwrap_or_default());
        saved_images.set(section.map(InfoSection::all_images).unwrap_or_default());
        editing.set(Some(section.map(|s| s.id)));
    };

    let save = {
        let api = api.clone();
        let fetch = fetch.clone();
        move || {
            let Some(target) = editing.get_untracked() else { return };
            let input = match form.with_untracked(InfoForm::to_input) {
                Ok(input) => input,
                Err(e) => return notify::alert(&e.to_string()),
            };
            let api = api.clone();
            let fetch = fetch.clone();
            set_saving.set(true);
            spawn_local(async move {
                let result = match target {
                    Some(id) => api.update_info_section(id, &input).await,
                    None => api.create_info_section(&input).await,
                };
                match result {
                    Ok(saved) => {
                        tracing::info!(id = saved.id, "info section saved");
                        editing.set(None);
                        fetch();
                    }
                    Err(e) => notify::report("saving section", &e),
                }
                set_saving.set(false);
            });
        }
    };

    let delete = {
        let api = api.clone();
        move |id: u32| {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_info_section(id).await {
                    Ok(()) => sections.update(|l| l.remove(id)),
                    Err(e) => notify::report("deleting section", &e),
                }
            });
        }
    };

    let render_section = move |section: InfoSection| {
        let delete = delete.clone();
        let id = section.id;
        let kind = SECTION_TYPES
            .iter()
            .find(|(value, _)| *value == section.section_type)
            .map_or(section.section_type.clone(), |(_, label)| label.to_string());
        let photos = section.all_images().len();
        let for_edit = section.clone();
        view! {
            <div class="admin-card">
                <div class="admin-card-header">
                    <h3>{section.title}</h3>
                    <span class="admin-badge">{kind}</span>
                    <div class="admin-card-actions">
                        <button class="btn-link" on:click=move |_| open(Some(&for_edit))>"Edit"</button>
                        <DeleteConfirmButton button_class="btn-danger" on_confirm=move |_| delete(id) />
                    </div>
                </div>
                {section.description.map(|d| view! { <p>{d}</p> })}
                {(photos > 0).then(|| view! { <p class="form-hint">{format!("{photos} photo(s)")}</p> })}
            </div>
        }
    };

    view! {
        <section class="admin-section">
            <div class="admin-section-header">
                <h2>"Wedding Information"</h2>
                <button class="btn-secondary" on:click=move |_| open(None)>"+ Add Section"</button>
            </div>

            {move || editing.get().is_some().then(|| {
                let save = save.clone();
                let legacy_image = Signal::derive(move || form.with(|f| f.image_url.clone()));
                view! {
                    <form
                        class="admin-form inline-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            save();
                        }
                    >
                        <TextField form=form label="Title" required=true
                            get=|f: &InfoForm| f.title.clone() set=|f: &mut InfoForm, v| f.title = v />
                        <Select form=form label="Type" options=SECTION_TYPES
                            get=|f: &InfoForm| f.section_type.clone() set=|f: &mut InfoForm, v| f.section_type = v />
                        <TextArea form=form label="Description" rows=3
                            get=|f: &InfoForm| f.description.clone() set=|f: &mut InfoForm, v| f.description = v />
                        <TextField form=form label="Icon" placeholder="Optional"
                            get=|f: &InfoForm| f.icon.clone() set=|f: &mut InfoForm, v| f.icon = v />
                        <TextArea form=form label="Map Embed" rows=2 placeholder="Google Maps embed URL or <iframe> snippet"
                            get=|f: &InfoForm| f.map_embed_url.clone() set=|f: &mut InfoForm, v| f.map_embed_url = v />

                        <div class="form-field">
                            <label>"Cover Image"</label>
                            <ImagePicker current=legacy_image in_use=in_use on_uploaded=move |url: String| form.update(|f| f.image_url = url) />
                        </div>
                        <TextField form=form label="Image URL (if already hosted)" input_type="url" placeholder="https://..."
                            get=|f: &InfoForm| f.image_url.clone() set=|f: &mut InfoForm, v| f.image_url = v />

                        <GalleryUrls form=form in_use=in_use />

                        <TextArea form=form label="Additional Information (shown in the details view)"
                            placeholder="Extra details, directions, contact info, etc."
                            get=|f: &InfoForm| f.additional_info.clone() set=|f: &mut InfoForm, v| f.additional_info = v />
                        <FormActions saving=saving on_cancel=move |_| editing.set(None) />
                    </form>
                }
            })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <p class="form-hint">"Drag by the ⋮⋮ handle to reorder."</p>
                <SortableList list=sections render=render_section.clone() />
            </Show>
        </section>
    }
}
