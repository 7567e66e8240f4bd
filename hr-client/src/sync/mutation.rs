//! Confirm-then-apply mutation coordination
//!
//! Mutations go to the server first; the in-memory list is only patched
//! once the canonical response is back. A per-record guard refuses a
//! second mutation for a record whose previous one is still pending.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashSet;

use crate::error::{ApiError, ApiResult};

use super::controller::ListHandle;
use super::state::{ItemChange, Keyed};

/// Applies server-confirmed mutations to one synchronized list
pub struct Mutator<T> {
    list: ListHandle<T>,
    in_flight: Arc<DashSet<i64>>,
}

impl<T> Clone for Mutator<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<T: Keyed> Mutator<T> {
    pub fn new(list: ListHandle<T>) -> Self {
        Self {
            list,
            in_flight: Arc::new(DashSet::new()),
        }
    }

    /// Run a create call; append the canonical record on success
    pub async fn create<F>(&self, op: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
        T: Clone,
    {
        let created = op.await?;
        self.list.apply(ItemChange::Created(created.clone()));
        Ok(created)
    }

    /// Run an update call; replace the matching row on success
    pub async fn update<F>(&self, id: i64, op: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
        T: Clone,
    {
        let _guard = self.claim(id)?;
        let updated = op.await?;
        self.list.apply(ItemChange::Updated(updated.clone()));
        Ok(updated)
    }

    /// Run a delete call; the row stays visible until the server confirms
    pub async fn delete<F>(&self, id: i64, op: F) -> ApiResult<()>
    where
        F: Future<Output = ApiResult<()>>,
    {
        let _guard = self.claim(id)?;
        op.await?;
        self.list.apply(ItemChange::Removed(id));
        Ok(())
    }

    /// Whether a mutation for this record is still pending; drives
    /// disabled row actions
    pub fn is_pending(&self, id: i64) -> bool {
        self.in_flight.contains(&id)
    }

    fn claim(&self, id: i64) -> ApiResult<InFlightGuard> {
        if !self.in_flight.insert(id) {
            tracing::debug!(id, "mutation refused, previous one still pending");
            return Err(ApiError::new(format!(
                "Another request for record {id} is still pending"
            )));
        }

        Ok(InFlightGuard {
            set: Arc::clone(&self.in_flight),
            id,
        })
    }
}

/// Releases the claimed record when the mutation settles either way
struct InFlightGuard {
    set: Arc<DashSet<i64>>,
    id: i64,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.set.remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::{oneshot, watch};

    use shared::response::Page;

    use super::super::controller::{ListController, ListOptions, PageFetcher};
    use super::super::state::{ListFilter, ListState, LoadPhase};
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
    }

    impl Keyed for Row {
        fn key(&self) -> i64 {
            self.id
        }
    }

    struct FixedFetcher(Vec<Row>);

    #[async_trait]
    impl PageFetcher<Row> for FixedFetcher {
        async fn fetch(&self, _filter: &ListFilter) -> ApiResult<Page<Row>> {
            Ok(Page::single(self.0.clone()))
        }
    }

    async fn wait_for<F>(rx: &mut watch::Receiver<ListState<Row>>, mut pred: F) -> ListState<Row>
    where
        F: FnMut(&ListState<Row>) -> bool,
    {
        loop {
            {
                let state = rx.borrow();
                if pred(&state) {
                    return state.clone();
                }
            }
            rx.changed().await.expect("driver gone");
        }
    }

    async fn loaded_controller(rows: Vec<Row>) -> ListController<Row> {
        let controller = ListController::spawn(FixedFetcher(rows), ListOptions::default());
        let mut rx = controller.watch();
        wait_for(&mut rx, |s| s.phase == LoadPhase::Loaded).await;
        controller
    }

    #[tokio::test]
    async fn test_failed_create_leaves_items_untouched() {
        let controller = loaded_controller(vec![Row { id: 1 }]).await;
        let mutator = Mutator::new(controller.handle());

        let result = mutator.create(async { Err(ApiError::new("boom")) }).await;
        assert_eq!(result.unwrap_err().message, "boom");

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(controller.state().items, vec![Row { id: 1 }]);
    }

    #[tokio::test]
    async fn test_delete_applies_only_after_confirmation() {
        let controller = loaded_controller(vec![Row { id: 1 }, Row { id: 2 }]).await;
        let mutator = Mutator::new(controller.handle());
        let (confirm_tx, confirm_rx) = oneshot::channel::<()>();

        let pending = {
            let mutator = mutator.clone();
            tokio::spawn(async move {
                mutator
                    .delete(2, async {
                        confirm_rx.await.expect("confirmation dropped");
                        Ok(())
                    })
                    .await
            })
        };

        // Server has not answered; the row must still be there.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(controller.state().items.len(), 2);
        assert!(mutator.is_pending(2));

        confirm_tx.send(()).expect("delete task gone");
        pending.await.expect("join").expect("delete failed");

        let mut rx = controller.watch();
        let state = wait_for(&mut rx, |s| s.items.len() == 1).await;
        assert_eq!(state.items, vec![Row { id: 1 }]);
        assert!(!mutator.is_pending(2));
    }

    #[tokio::test]
    async fn test_second_mutation_for_same_record_is_refused() {
        let controller = loaded_controller(vec![Row { id: 7 }]).await;
        let mutator = Mutator::new(controller.handle());
        let (confirm_tx, confirm_rx) = oneshot::channel::<()>();

        let first = {
            let mutator = mutator.clone();
            tokio::spawn(async move {
                mutator
                    .update(7, async {
                        confirm_rx.await.expect("confirmation dropped");
                        Ok(Row { id: 7 })
                    })
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        let refused = mutator.update(7, async { Ok(Row { id: 7 }) }).await;
        assert!(
            refused
                .unwrap_err()
                .message
                .contains("still pending")
        );

        confirm_tx.send(()).expect("update task gone");
        first.await.expect("join").expect("update failed");

        // The guard is released once the first mutation settles.
        let again = mutator.update(7, async { Ok(Row { id: 7 }) }).await;
        assert!(again.is_ok());
    }

    #[tokio::test]
    async fn test_guard_released_on_failure() {
        let controller = loaded_controller(vec![Row { id: 3 }]).await;
        let mutator = Mutator::new(controller.handle());

        let failed = mutator
            .delete(3, async { Err(ApiError::new("not allowed")) })
            .await;
        assert!(failed.is_err());
        assert!(!mutator.is_pending(3));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(controller.state().items.len(), 1, "row survives a failed delete");
    }
}
