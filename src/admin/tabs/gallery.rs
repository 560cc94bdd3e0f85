//! Gallery Tab

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ImageEntry, Thumbnail};
use crate::admin::forms::ImageForm;
use crate::components::DeleteConfirmButton;
use crate::context::use_api;
use crate::models::GalleryImage;
use crate::notify;
use crate::reorder::sorted_by_order;

#[component]
pub fn GalleryTab() -> impl IntoView {
    let api = use_api();

    let (images, set_images) = signal(Vec::<GalleryImage>::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let adding = RwSignal::new(false);
    let draft = RwSignal::new(ImageForm::default());

    {
        let api = api.clone();
        spawn_local(async move {
            match api.list_gallery_images().await {
                Ok(loaded) => set_images.set(sorted_by_order(loaded)),
                Err(e) => tracing::error!("Error fetching gallery images: {e}"),
            }
            set_loading.set(false);
        });
    }

    let save = {
        let api = api.clone();
        move || {
            let order = images.with_untracked(Vec::len) as i32;
            let input = match draft.with_untracked(|f| f.to_gallery_input(order)) {
                Ok(input) => input,
                Err(_) => return notify::alert("Please add an image: upload a file or enter an image URL."),
            };
            let api = api.clone();
            set_saving.set(true);
            spawn_local(async move {
                match api.create_gallery_image(&input).await {
                    Ok(created) => {
                        set_images.update(|list| list.push(created));
                        adding.set(false);
                    }
                    Err(e) => notify::report("saving image", &e),
                }
                set_saving.set(false);
            });
        }
    };

    let delete = move |id: u32| {
        let api = api.clone();
        spawn_local(async move {
            match api.delete_gallery_image(id).await {
                Ok(()) => set_images.update(|list| list.retain(|img| img.id != id)),
                Err(e) => notify::report("deleting image", &e),
            }
        });
    };

    view! {
        <section class="admin-section">
            <div class="admin-section-header">
                <h2>"Gallery Images"</h2>
                <button
                    class="btn-secondary"
                    on:click=move |_| {
                        draft.set(ImageForm::default());
                        adding.set(true);
                    }
                >
                    "+ Add Image"
                </button>
            </div>

            {move || adding.get().then(|| {
                let save = save.clone();
                view! {
                    <ImageEntry
                        form=draft
                        saving=saving
                        on_save=move |_| save()
                        on_cancel=move |_| adding.set(false)
                    />
                }
            })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                {
                let delete = delete.clone();
                view! {
                <Show
                    when=move || !images.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"No images yet."</p> }
                >
                    <div class="admin-thumb-grid">
                        {
                            let delete = delete.clone();
                            move || {
                                images
                                    .get()
                                    .into_iter()
                                    .map(|image| {
                                        let delete = delete.clone();
                                        let id = image.id;
                                        view! {
                                            <div class="admin-thumb-item">
                                                <Thumbnail url=image.image_url caption=image.caption />
                                                <DeleteConfirmButton button_class="btn-danger" on_confirm=move |_| delete(id) />
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </div>
                </Show>
                }
                }
            </Show>
        </section>
    }
}
