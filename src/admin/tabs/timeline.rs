//! Timeline Tab

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::FormActions;
use crate::admin::fields::{TextArea, TextField};
use crate::admin::forms::TimelineForm;
use crate::components::{DeleteConfirmButton, SortableList};
use crate::context::use_api;
use crate::models::TimelineEvent;
use crate::notify;
use crate::reorder::ReorderList;

#[component]
pub fn TimelineTab() -> impl IntoView {
    let api = use_api();

    let events = RwSignal::new(ReorderList::<TimelineEvent>::default());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let editing = RwSignal::new(None::<Option<u32>>);
    let form = RwSignal::new(TimelineForm::default());

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.list_timeline_events().await {
                    Ok(loaded) => events.update(|l| l.replace(loaded)),
                    Err(e) => tracing::error!("Error fetching timeline events: {e}"),
                }
                set_loading.set(false);
            });
        }
    };
    fetch();

    let open = move |event: Option<&TimelineEvent>| {
        let next = match event {
            Some(event) => TimelineForm::from_event(event),
            None => TimelineForm {
                order: events.with_untracked(|l| l.len()).to_string(),
                ..TimelineForm::default()
            },
        };
        form.set(next);
        editing.set(Some(event.map(|e| e.id)));
    };

    let save = {
        let api = api.clone();
        let fetch = fetch.clone();
        move || {
            let Some(target) = editing.get_untracked() else { return };
            let input = match form.with_untracked(TimelineForm::to_input) {
                Ok(input) => input,
                Err(e) => return notify::alert(&e.to_string()),
            };
            let api = api.clone();
            let fetch = fetch.clone();
            set_saving.set(true);
            spawn_local(async move {
                let result = match target {
                    Some(id) => api.update_timeline_event(id, &input).await,
                    None => api.create_timeline_event(&input).await,
                };
                match result {
                    Ok(_) => {
                        editing.set(None);
                        fetch();
                    }
                    Err(e) => notify::report("saving event", &e),
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
                match api.delete_timeline_event(id).await {
                    Ok(()) => events.update(|l| l.remove(id)),
                    Err(e) => notify::report("deleting event", &e),
                }
            });
        }
    };

    let render_event = move |event: TimelineEvent| {
        let delete = delete.clone();
        let id = event.id;
        let time = event.display_time();
        let for_edit = event.clone();
        view! {
            <div class="admin-card">
                <div class="admin-card-header">
                    <span class="admin-time">{time}</span>
                    <h3>{event.title}</h3>
                    <div class="admin-card-actions">
                        <button class="btn-link" on:click=move |_| open(Some(&for_edit))>"Edit"</button>
                        <DeleteConfirmButton button_class="btn-danger" on_confirm=move |_| delete(id) />
                    </div>
                </div>
                {event.description.map(|d| view! { <p>{d}</p> })}
            </div>
        }
    };

    view! {
        <section class="admin-section">
            <div class="admin-section-header">
                <h2>"Timeline Events"</h2>
                <button class="btn-secondary" on:click=move |_| open(None)>"+ Add Event"</button>
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
                        <TextField form=form label="Time" input_type="time" required=true
                            get=|f: &TimelineForm| f.time.clone() set=|f: &mut TimelineForm, v| f.time = v />
                        <TextField form=form label="Title" required=true
                            get=|f: &TimelineForm| f.title.clone() set=|f: &mut TimelineForm, v| f.title = v />
                        <TextArea form=form label="Description" rows=3
                            get=|f: &TimelineForm| f.description.clone() set=|f: &mut TimelineForm, v| f.description = v />
                        <TextField form=form label="Icon" placeholder="Optional"
                            get=|f: &TimelineForm| f.icon.clone() set=|f: &mut TimelineForm, v| f.icon = v />
                        <FormActions saving=saving on_cancel=move |_| editing.set(None) />
                    </form>
                }
            })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <p class="form-hint">"Drag by the ⋮⋮ handle to reorder."</p>
                <SortableList list=events render=render_event.clone() />
            </Show>
        </section>
    }
}
