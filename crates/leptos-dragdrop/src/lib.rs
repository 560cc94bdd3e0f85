//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag-and-drop for flat, reorderable lists.
//! Uses a movement threshold to distinguish click from drag.

mod machine;
mod order;

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use machine::{DragPhase, DropRequest, DRAG_THRESHOLD_PX};
pub use order::{move_onto, same_members};

/// DnD state signals for one list
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub phase: RwSignal<DragPhase>,
    /// True for a moment after a drag, so the trailing click can be ignored
    pub drag_just_ended: RwSignal<bool>,
}

impl DndSignals {
    /// Id of the item being dragged (tracked)
    pub fn dragging_id(&self) -> Option<u32> {
        self.phase.get().dragged()
    }

    /// Id of the highlighted drop target (tracked)
    pub fn drop_target(&self) -> Option<u32> {
        self.phase.get().over()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        phase: RwSignal::new(DragPhase::Idle),
        drag_just_ended: RwSignal::new(false),
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.phase.get_untracked().dragged().is_some();
    dnd.phase.update(DragPhase::end);
    if was_dragging {
        mark_drag_ended(dnd);
    }
}

fn mark_drag_ended(dnd: &DndSignals) {
    dnd.drag_just_ended.set(true);
    let clear = dnd.drag_just_ended;
    set_timeout(move || clear.set(false), Duration::from_millis(100));
}

fn is_form_control(ev: &web_sys::MouseEvent) -> bool {
    let Some(target) = ev.target() else { return false };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
}

/// Create mousedown handler for a drag handle
/// Records a pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_form_control(&ev) {
            return;
        }
        ev.prevent_default();
        dnd.phase.update(|p| p.arm(item_id, ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.phase.get_untracked().dragged().is_some() {
            dnd.phase.update(|p| p.drag_over(item_id));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.phase.get_untracked().over().is_some() {
            dnd.phase.update(DragPhase::leave);
        }
    }
}

/// Bind window mousemove/mouseup for this list.
///
/// `on_drop` runs after the drag state is cleared, so the list is already
/// idle when persistence starts. Listeners are removed with the owner.
pub fn bind_list_listeners<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DropRequest) + 'static,
{
    let move_handle = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        if matches!(dnd.phase.get_untracked(), DragPhase::Pending { .. }) {
            dnd.phase.update(|p| {
                p.pointer_moved(ev.client_x(), ev.client_y());
            });
        }
    });

    let up_handle = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        if dnd.phase.get_untracked().is_idle() {
            return;
        }
        let was_dragging = dnd.phase.get_untracked().dragged().is_some();
        let request = dnd.phase.try_update(DragPhase::release).flatten();
        if was_dragging {
            mark_drag_ended(&dnd);
        }
        if let Some(request) = request {
            on_drop(request);
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });
}
