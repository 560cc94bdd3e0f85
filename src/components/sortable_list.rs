//! Sortable List Component
//!
//! Drag-to-reorder list for admin collections.
//! Rows are dragged by their handle; the new order is applied at once and
//! persisted through the collection's reorder endpoint.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::api::ApiClient;
use crate::context::use_api;
use crate::models::Ordered;
use crate::notify;
use crate::reorder::{self, ReorderList, ReorderStore};

#[component]
pub fn SortableList<T, R, IV>(list: RwSignal<ReorderList<T>>, render: R) -> impl IntoView
where
    T: Ordered + Clone + Send + Sync + 'static,
    ApiClient: ReorderStore<T>,
    R: Fn(T) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let api = use_api();
    let dnd = create_dnd_signals();

    bind_list_listeners(dnd, move |request: DropRequest| {
        let Some(pending) = list
            .try_update(|l| l.begin_reorder(request.dragged, request.target))
            .flatten()
        else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let result = reorder::submit(&api, &pending).await;
            if let Some(Err(e)) = list.try_update(|l| l.settle(pending, result)) {
                notify::report("saving the new order", &e);
            }
        });
    });

    // Escape abandons a drag in progress
    let keys = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && !dnd.phase.get_untracked().is_idle() {
            end_drag(&dnd);
        }
    });
    on_cleanup(move || keys.remove());

    let rows = move || {
        list.with(|l| l.items().to_vec())
            .into_iter()
            .map(|item| {
                let id = item.id();
                let row_class = move || {
                    let mut c = String::from("sortable-row");
                    if dnd.dragging_id() == Some(id) {
                        c.push_str(" dragging");
                    }
                    if dnd.drop_target() == Some(id) {
                        c.push_str(" drop-target");
                    }
                    c
                };
                view! {
                    <li
                        class=row_class
                        on:mouseenter=make_on_item_mouseenter(dnd, id)
                        on:mouseleave=make_on_mouseleave(dnd)
                        on:click=move |ev| {
                            if dnd.drag_just_ended.get_untracked() {
                                ev.stop_propagation();
                                ev.prevent_default();
                            }
                        }
                    >
                        <span class="drag-handle" title="Drag to reorder" on:mousedown=make_on_mousedown(dnd, id)>
                            "⋮⋮"
                        </span>
                        <div class="sortable-content">{render(item)}</div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <ul class="sortable-list" class:is-dragging=move || dnd.dragging_id().is_some()>
            {rows}
        </ul>
    }
}
