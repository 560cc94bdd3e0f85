//! Gifts Tab

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::FormActions;
use crate::admin::fields::{Select, TextArea, TextField};
use crate::admin::forms::GiftForm;
use crate::components::DeleteConfirmButton;
use crate::context::use_api;
use crate::models::{GiftItem, GIFT_TYPES};
use crate::notify;

#[component]
pub fn GiftsTab() -> impl IntoView {
    let api = use_api();

    let (gifts, set_gifts) = signal(Vec::<GiftItem>::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let editing = RwSignal::new(None::<Option<u32>>);
    let form = RwSignal::new(GiftForm::default());

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.list_gift_items().await {
                    Ok(mut loaded) => {
                        loaded.sort_by_key(|g| g.order);
                        set_gifts.set(loaded);
                    }
                    Err(e) => tracing::error!("Error fetching gift items: {e}"),
                }
                set_loading.set(false);
            });
        }
    };
    fetch();

    let open = move |gift: Option<&GiftItem>| {
        form.set(gift.map(GiftForm::from_item).unwrap_or_default());
        editing.set(Some(gift.map(|g| g.id)));
    };

    let save = {
        let api = api.clone();
        let fetch = fetch.clone();
        move || {
            let Some(target) = editing.get_untracked() else { return };
            let input = match form.with_untracked(GiftForm::to_input) {
                Ok(input) => input,
                Err(e) => return notify::alert(&e.to_string()),
            };
            let api = api.clone();
            let fetch = fetch.clone();
            set_saving.set(true);
            spawn_local(async move {
                let result = match target {
                    Some(id) => api.update_gift_item(id, &input).await,
                    None => api.create_gift_item(&input).await,
                };
                match result {
                    Ok(_) => {
                        editing.set(None);
                        fetch();
                    }
                    Err(e) => notify::report("saving gift item", &e),
                }
                set_saving.set(false);
            });
        }
    };

    let delete = move |id: u32| {
        let api = api.clone();
        spawn_local(async move {
            match api.delete_gift_item(id).await {
                Ok(()) => set_gifts.update(|list| list.retain(|g| g.id != id)),
                Err(e) => notify::report("deleting gift item", &e),
            }
        });
    };

    view! {
        <section class="admin-section">
            <div class="admin-section-header">
                <h2>"Gift Registry"</h2>
                <button class="btn-secondary" on:click=move |_| open(None)>"+ Add Gift"</button>
            </div>

            {move || editing.get().is_some().then(|| {
                let save = save.clone();
                view! {
                    <form
                        class="admin-form inline-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            save();
                        }
                    >
                        <TextField form=form label="Title" required=true
                            get=|f: &GiftForm| f.title.clone() set=|f: &mut GiftForm, v| f.title = v />
                        <Select form=form label="Type" options=GIFT_TYPES
                            get=|f: &GiftForm| f.item_type.clone() set=|f: &mut GiftForm, v| f.item_type = v />
                        <TextArea form=form label="Description" rows=3
                            get=|f: &GiftForm| f.description.clone() set=|f: &mut GiftForm, v| f.description = v />
                        <TextField form=form label="Link" input_type="url" required=true
                            get=|f: &GiftForm| f.link.clone() set=|f: &mut GiftForm, v| f.link = v />
                        <TextField form=form label="Image URL" input_type="url" placeholder="Optional"
                            get=|f: &GiftForm| f.image_url.clone() set=|f: &mut GiftForm, v| f.image_url = v />
                        <TextField form=form label="Order" input_type="number"
                            get=|f: &GiftForm| f.order.clone() set=|f: &mut GiftForm, v| f.order = v />
                        <FormActions saving=saving on_cancel=move |_| editing.set(None) />
                    </form>
                }
            })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="admin-list">
                    {
                        let delete = delete.clone();
                        move || {
                            gifts
                                .get()
                                .into_iter()
                                .map(|gift| {
                                    let delete = delete.clone();
                                    let id = gift.id;
                                    let for_edit = gift.clone();
                                    view! {
                                        <div class="admin-card">
                                            <div class="admin-card-header">
                                                <h3>{gift.title}</h3>
                                                <span class="admin-badge">{gift.item_type}</span>
                                                <div class="admin-card-actions">
                                                    <button class="btn-link" on:click=move |_| open(Some(&for_edit))>"Edit"</button>
                                                    <DeleteConfirmButton button_class="btn-danger" on_confirm=move |_| delete(id) />
                                                </div>
                                            </div>
                                            {gift.description.map(|d| view! { <p>{d}</p> })}
                                            <a href=gift.link target="_blank" rel="noopener noreferrer">"View Link →"</a>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </div>
            </Show>
        </section>
    }
}
