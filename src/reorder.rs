//! Reorderable Collections
//!
//! Local state for a list that the admin rearranges by dragging. A drop is
//! applied optimistically, the full id order is sent to the server, and the
//! server's reply (sorted by `order`) becomes the new local state.
//!
//! Completions may arrive out of order. Successful replies are applied as
//! they arrive; a failure restores the pre-drop snapshot only when it belongs
//! to the most recently issued reorder, so a stale failure never clobbers a
//! newer arrangement.

use async_trait::async_trait;
use leptos_dragdrop::{move_onto, same_members};

use crate::error::ApiResult;
use crate::models::Ordered;

/// Persists a complete ordering of a collection
#[async_trait(?Send)]
pub trait ReorderStore<T> {
    async fn reorder(&self, ids: &[u32]) -> ApiResult<Vec<T>>;
}

/// Stable sort by `order`, ties keep server order
pub fn sorted_by_order<T: Ordered>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(Ordered::order);
    items
}

/// An issued, not yet settled reorder
#[derive(Debug, Clone)]
pub struct PendingReorder<T> {
    pub ticket: u64,
    pub ids: Vec<u32>,
    snapshot: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct ReorderList<T> {
    items: Vec<T>,
    issued: u64,
}

impl<T> Default for ReorderList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), issued: 0 }
    }
}

impl<T: Ordered + Clone> ReorderList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items: sorted_by_order(items), issued: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(Ordered::id).collect()
    }

    /// Replace the contents after a fresh load
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = sorted_by_order(items);
    }

    /// Append a freshly created record
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn remove(&mut self, id: u32) {
        self.items.retain(|item| item.id() != id);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply a drop locally and return what must be persisted
    ///
    /// `None` means nothing to do: a self-drop, an unknown id, or an order
    /// that failed the membership check.
    pub fn begin_reorder(&mut self, dragged: u32, target: u32) -> Option<PendingReorder<T>> {
        let before = self.ids();
        let ids = move_onto(&before, dragged, target)?;
        if !same_members(&before, &ids) {
            tracing::error!(?before, ?ids, "reorder changed the set of ids, not submitting");
            return None;
        }

        let snapshot = self.items.clone();
        self.items = ids
            .iter()
            .filter_map(|id| snapshot.iter().find(|item| item.id() == *id).cloned())
            .collect();
        self.issued += 1;

        tracing::debug!(ticket = self.issued, ?ids, "reorder issued");
        Some(PendingReorder { ticket: self.issued, ids, snapshot })
    }

    /// Fold a server reply into local state
    pub fn settle(&mut self, pending: PendingReorder<T>, result: ApiResult<Vec<T>>) -> ApiResult<()> {
        match result {
            Ok(items) => {
                self.items = sorted_by_order(items);
                Ok(())
            }
            Err(e) => {
                if pending.ticket == self.issued {
                    tracing::warn!(ticket = pending.ticket, "reorder failed, restoring previous order");
                    self.items = pending.snapshot;
                } else {
                    tracing::warn!(ticket = pending.ticket, latest = self.issued, "stale reorder failed, keeping newer order");
                }
                Err(e)
            }
        }
    }
}

/// Send a pending reorder to its store
pub async fn submit<T, S>(store: &S, pending: &PendingReorder<T>) -> ApiResult<Vec<T>>
where
    S: ReorderStore<T> + ?Sized,
{
    store.reorder(&pending.ids).await
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::ApiError;
    use crate::models::StoryImage;

    fn image(id: u32, order: i32) -> StoryImage {
        StoryImage { id, image_url: format!("/static/{id}.jpg"), caption: None, order }
    }

    /// Recomputes contiguous orders like the content service does
    #[derive(Default)]
    struct FakeStore {
        calls: RefCell<Vec<Vec<u32>>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl ReorderStore<StoryImage> for FakeStore {
        async fn reorder(&self, ids: &[u32]) -> ApiResult<Vec<StoryImage>> {
            self.calls.borrow_mut().push(ids.to_vec());
            if self.fail {
                return Err(ApiError::Status { status: 404, detail: "Some story images not found".into() });
            }
            // reply in id order on purpose, callers must sort
            let mut reply: Vec<StoryImage> =
                ids.iter().enumerate().map(|(pos, id)| image(*id, pos as i32)).collect();
            reply.sort_by_key(|i| i.id);
            Ok(reply)
        }
    }

    const A: u32 = 10;
    const B: u32 = 20;
    const C: u32 = 30;

    fn abc() -> ReorderList<StoryImage> {
        ReorderList::new(vec![image(C, 2), image(A, 0), image(B, 1)])
    }

    #[tokio::test]
    async fn test_drag_first_onto_last() {
        let store = FakeStore::default();
        let mut list = abc();
        assert_eq!(list.ids(), vec![A, B, C]);

        let pending = list.begin_reorder(A, C).unwrap();
        assert_eq!(pending.ids, vec![B, C, A]);
        assert_eq!(list.ids(), vec![B, C, A], "applied before the server answers");

        let result = submit(&store, &pending).await;
        list.settle(pending, result).unwrap();

        assert_eq!(store.calls.borrow().as_slice(), &[vec![B, C, A]]);
        assert_eq!(list.ids(), vec![B, C, A]);
        let orders: Vec<i32> = list.items().iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_self_drop_and_unknown_ids_do_nothing() {
        let mut list = abc();
        assert!(list.begin_reorder(B, B).is_none());
        assert!(list.begin_reorder(A, 99).is_none());
        assert!(list.begin_reorder(99, A).is_none());
        assert_eq!(list.ids(), vec![A, B, C]);
    }

    #[tokio::test]
    async fn test_failure_rolls_back_latest() {
        let store = FakeStore { fail: true, ..FakeStore::default() };
        let mut list = abc();

        let pending = list.begin_reorder(C, A).unwrap();
        assert_eq!(list.ids(), vec![C, A, B]);

        let result = submit(&store, &pending).await;
        assert!(list.settle(pending, result).is_err());
        assert_eq!(list.ids(), vec![A, B, C]);
    }

    #[tokio::test]
    async fn test_stale_failure_keeps_newer_order() {
        let failing = FakeStore { fail: true, ..FakeStore::default() };
        let mut list = abc();

        let first = list.begin_reorder(A, C).unwrap();
        let second = list.begin_reorder(B, C).unwrap();
        assert_eq!(list.ids(), vec![C, B, A]);

        let first_result = submit(&failing, &first).await;
        assert!(list.settle(first, first_result).is_err());
        assert_eq!(list.ids(), vec![C, B, A], "older failure must not undo the newer drop");

        let second_result = submit(&FakeStore::default(), &second).await;
        list.settle(second, second_result).unwrap();
        assert_eq!(list.ids(), vec![C, B, A]);
    }

    #[tokio::test]
    async fn test_out_of_order_success_is_last_write_wins() {
        let store = FakeStore::default();
        let mut list = abc();

        let first = list.begin_reorder(A, C).unwrap(); // B C A
        let second = list.begin_reorder(C, B).unwrap(); // C B A

        let second_result = submit(&store, &second).await;
        let first_result = submit(&store, &first).await;
        list.settle(second, second_result).unwrap();
        list.settle(first, first_result).unwrap();

        assert_eq!(list.ids(), vec![B, C, A]);
    }

    #[test]
    fn test_sorted_by_order_is_stable() {
        let items = vec![image(1, 1), image(2, 0), image(3, 1), image(4, 0)];
        let ids: Vec<u32> = sorted_by_order(items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_push_and_remove_keep_positions() {
        let mut list = abc();
        list.push(image(40, 3));
        list.remove(B);
        assert_eq!(list.ids(), vec![A, C, 40]);
        assert_eq!(list.len(), 3);
        assert!(ReorderList::<StoryImage>::default().is_empty());
    }
}
