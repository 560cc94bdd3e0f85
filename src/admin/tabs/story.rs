//! Story Tab
//!
//! Story sections (text blocks) and the draggable story image strip.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{FormActions, ImageEntry, Thumbnail};
use crate::admin::fields::{TextArea, TextField};
use crate::admin::forms::{ImageForm, StorySectionForm};
use crate::components::{DeleteConfirmButton, SortableList};
use crate::context::use_api;
use crate::models::{StoryImage, StorySection};
use crate::notify;
use crate::reorder::ReorderList;

#[component]
pub fn StoryTab() -> impl IntoView {
    let api = use_api();

    let (sections, set_sections) = signal(Vec::<StorySection>::new());
    let images = RwSignal::new(ReorderList::<StoryImage>::default());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    // Section editor: None = closed, Some(None) = new, Some(Some(id)) = editing
    let editing = RwSignal::new(None::<Option<u32>>);
    let section_form = RwSignal::new(StorySectionForm::default());
    let adding_image = RwSignal::new(false);
    let image_draft = RwSignal::new(ImageForm::default());

    let fetch_sections = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.list_story_sections().await {
                    Ok(mut loaded) => {
                        loaded.sort_by_key(|s| s.order);
                        set_sections.set(loaded);
                    }
                    Err(e) => tracing::error!("Error fetching story sections: {e}"),
                }
            });
        }
    };

    fetch_sections();
    {
        let api = api.clone();
        spawn_local(async move {
            match api.list_story_images().await {
                Ok(loaded) => images.update(|l| l.replace(loaded)),
                Err(e) => tracing::error!("Error fetching story images: {e}"),
            }
            set_loading.set(false);
        });
    }

    let open_section = move |section: Option<&StorySection>| {
        section_form.set(section.map(StorySectionForm::from_section).unwrap_or_default());
        editing.set(Some(section.map(|s| s.id)));
    };

    let save_section = {
        let api = api.clone();
        let fetch_sections = fetch_sections.clone();
        move || {
            let Some(target) = editing.get_untracked() else { return };
            let input = match section_form.with_untracked(StorySectionForm::to_input) {
                Ok(input) => input,
                Err(e) => return notify::alert(&e.to_string()),
            };
            let api = api.clone();
            let fetch_sections = fetch_sections.clone();
            set_saving.set(true);
            spawn_local(async move {
                let result = match target {
                    Some(id) => api.update_story_section(id, &input).await,
                    None => api.create_story_section(&input).await,
                };
                match result {
                    Ok(_) => {
                        editing.set(None);
                        fetch_sections();
                    }
                    Err(e) => notify::report("saving section", &e),
                }
                set_saving.set(false);
            });
        }
    };

    let delete_section = {
        let api = api.clone();
        move |id: u32| {
            let api = api.clone();
            let fetch_sections = fetch_sections.clone();
            spawn_local(async move {
                match api.delete_story_section(id).await {
                    Ok(()) => fetch_sections(),
                    Err(e) => notify::report("deleting section", &e),
                }
            });
        }
    };

    let save_image = {
        let api = api.clone();
        move || {
            let order = images.with_untracked(|l| l.len() as i32);
            let input = match image_draft.with_untracked(|f| f.to_story_input(order)) {
                Ok(input) => input,
                Err(_) => return notify::alert("Please add an image: upload a file or enter an image URL."),
            };
            let api = api.clone();
            set_saving.set(true);
            spawn_local(async move {
                match api.create_story_image(&input).await {
                    Ok(created) => {
                        images.update(|l| l.push(created));
                        adding_image.set(false);
                    }
                    Err(e) => notify::report("saving image", &e),
                }
                set_saving.set(false);
            });
        }
    };

    let delete_image = {
        let api = api.clone();
        move |id: u32| {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_story_image(id).await {
                    Ok(()) => images.update(|l| l.remove(id)),
                    Err(e) => notify::report("deleting image", &e),
                }
            });
        }
    };

    let render_image = move |image: StoryImage| {
        let delete_image = delete_image.clone();
        let id = image.id;
        view! {
            <div class="admin-image-row">
                <Thumbnail url=image.image_url caption=image.caption />
                <DeleteConfirmButton button_class="btn-danger" on_confirm=move |_| delete_image(id) />
            </div>
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
            <section class="admin-section">
                <div class="admin-section-header">
                    <h2>"Story Sections"</h2>
                    <button class="btn-secondary" on:click=move |_| open_section(None)>"+ Add Section"</button>
                </div>

                {
                    let save_section = save_section.clone();
                    move || editing.get().is_some().then(|| {
                        let save_section = save_section.clone();
                        view! {
                            <form
                                class="admin-form inline-form"
                                on:submit=move |ev: web_sys::SubmitEvent| {
                                    ev.prevent_default();
                                    save_section();
                                }
                            >
                                <TextField form=section_form label="Title" required=true
                                    get=|f: &StorySectionForm| f.title.clone() set=|f: &mut StorySectionForm, v| f.title = v />
                                <TextArea form=section_form label="Content"
                                    get=|f: &StorySectionForm| f.content.clone() set=|f: &mut StorySectionForm, v| f.content = v />
                                <TextField form=section_form label="Order" input_type="number"
                                    get=|f: &StorySectionForm| f.order.clone() set=|f: &mut StorySectionForm, v| f.order = v />
                                <FormActions saving=saving on_cancel=move |_| editing.set(None) />
                            </form>
                        }
                    })
                }

                <div class="admin-list">
                    {
                        let delete_section = delete_section.clone();
                        move || {
                            sections
                                .get()
                                .into_iter()
                                .map(|section| {
                                    let delete_section = delete_section.clone();
                                    let id = section.id;
                                    let for_edit = section.clone();
                                    view! {
                                        <div class="admin-card">
                                            <div class="admin-card-header">
                                                <h3>{section.title}</h3>
                                                <div class="admin-card-actions">
                                                    <button class="btn-link" on:click=move |_| open_section(Some(&for_edit))>"Edit"</button>
                                                    <DeleteConfirmButton button_class="btn-danger" on_confirm=move |_| delete_section(id) />
                                                </div>
                                            </div>
                                            <p>{section.content}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </div>
            </section>

            <section class="admin-section">
                <div class="admin-section-header">
                    <h2>"Story Images"</h2>
                    <button
                        class="btn-secondary"
                        on:click=move |_| {
                            image_draft.set(ImageForm::default());
                            adding_image.set(true);
                        }
                    >
                        "+ Add Image"
                    </button>
                </div>

                {
                    let save_image = save_image.clone();
                    move || adding_image.get().then(|| {
                        let save_image = save_image.clone();
                        view! {
                            <ImageEntry
                                form=image_draft
                                saving=saving
                                on_save=move |_| save_image()
                                on_cancel=move |_| adding_image.set(false)
                            />
                        }
                    })
                }

                <p class="form-hint">"Drag by the ⋮⋮ handle to reorder."</p>
                <SortableList list=images render=render_image.clone() />
            </section>
        </Show>
    }
}
