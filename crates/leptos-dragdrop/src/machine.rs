//! Drag Phase State Machine
//!
//! Gesture state for a single reorderable list, free of DOM and signals.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Where a drag gesture currently is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pressed on a handle, not yet moved past the threshold
    Pending { id: u32, start_x: i32, start_y: i32 },
    /// Actively dragging; `over` is the highlighted drop target
    Dragging { dragged: u32, over: Option<u32> },
    /// Drop accepted, waiting for `end`
    Dropping { dragged: u32, target: u32 },
}

/// A resolved drop: move `dragged` to the slot currently held by `target`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropRequest {
    pub dragged: u32,
    pub target: u32,
}

impl DragPhase {
    /// Record a press on `id`. Only valid from `Idle`.
    pub fn arm(&mut self, id: u32, x: i32, y: i32) {
        if *self == DragPhase::Idle {
            *self = DragPhase::Pending { id, start_x: x, start_y: y };
        }
    }

    /// Promote a pending press to a drag once the pointer moved far enough.
    /// Returns true when the drag started on this call.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        if let DragPhase::Pending { id, start_x, start_y } = *self {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                *self = DragPhase::Dragging { dragged: id, over: None };
                return true;
            }
        }
        false
    }

    /// Start dragging `id` immediately, discarding any previous gesture.
    pub fn begin(&mut self, id: u32) {
        *self = DragPhase::Dragging { dragged: id, over: None };
    }

    /// Mark `id` as the drop target unless it is the dragged item.
    pub fn drag_over(&mut self, id: u32) {
        if let DragPhase::Dragging { dragged, over } = self {
            if *dragged != id {
                *over = Some(id);
            }
        }
    }

    /// Pointer left the current target.
    pub fn leave(&mut self) {
        if let DragPhase::Dragging { over, .. } = self {
            *over = None;
        }
    }

    /// Resolve a drop onto `target`.
    ///
    /// Returns `None` (and leaves the phase untouched) when nothing is being
    /// dragged, the target is absent, or the target is the dragged item.
    pub fn drop_on(&mut self, target: Option<u32>) -> Option<DropRequest> {
        let DragPhase::Dragging { dragged, .. } = *self else {
            return None;
        };
        let target = target?;
        if target == dragged {
            return None;
        }
        *self = DragPhase::Dropping { dragged, target };
        Some(DropRequest { dragged, target })
    }

    /// Back to `Idle`, whatever happened before.
    pub fn end(&mut self) {
        *self = DragPhase::Idle;
    }

    /// Drop on the highlighted target and end the gesture in one step.
    /// The phase is always `Idle` afterwards.
    pub fn release(&mut self) -> Option<DropRequest> {
        let over = self.over();
        let request = self.drop_on(over);
        self.end();
        request
    }

    pub fn dragged(&self) -> Option<u32> {
        match *self {
            DragPhase::Dragging { dragged, .. } | DragPhase::Dropping { dragged, .. } => Some(dragged),
            _ => None,
        }
    }

    pub fn over(&self) -> Option<u32> {
        match *self {
            DragPhase::Dragging { over, .. } => over,
            DragPhase::Dropping { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == DragPhase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_without_movement_is_not_a_drag() {
        let mut phase = DragPhase::default();
        phase.arm(1, 100, 100);
        assert!(!phase.pointer_moved(103, 102));
        assert_eq!(phase.dragged(), None);
        assert_eq!(phase.release(), None);
        assert!(phase.is_idle());
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        let mut phase = DragPhase::default();
        phase.arm(7, 10, 10);
        assert!(phase.pointer_moved(10, 16));
        assert_eq!(phase.dragged(), Some(7));
        // Already dragging, further moves are not a new start
        assert!(!phase.pointer_moved(50, 50));
    }

    #[test]
    fn test_drag_over_self_is_ignored() {
        let mut phase = DragPhase::default();
        phase.begin(2);
        phase.drag_over(2);
        assert_eq!(phase.over(), None);
        phase.drag_over(3);
        phase.drag_over(3);
        assert_eq!(phase.over(), Some(3));
        phase.leave();
        assert_eq!(phase.over(), None);
    }

    #[test]
    fn test_drop_on_self_or_nothing_is_noop() {
        let mut phase = DragPhase::default();
        phase.begin(4);
        assert_eq!(phase.drop_on(Some(4)), None);
        assert_eq!(phase.drop_on(None), None);
        assert_eq!(phase.dragged(), Some(4));
    }

    #[test]
    fn test_release_always_ends_in_idle() {
        let mut phase = DragPhase::default();
        phase.begin(1);
        phase.drag_over(3);
        assert_eq!(phase.release(), Some(DropRequest { dragged: 1, target: 3 }));
        assert!(phase.is_idle());

        phase.begin(1);
        assert_eq!(phase.release(), None);
        assert!(phase.is_idle());
        assert_eq!(phase.dragged(), None);
        assert_eq!(phase.over(), None);
    }

    #[test]
    fn test_arm_ignored_while_dragging() {
        let mut phase = DragPhase::default();
        phase.begin(1);
        phase.arm(2, 0, 0);
        assert_eq!(phase.dragged(), Some(1));
    }
}
