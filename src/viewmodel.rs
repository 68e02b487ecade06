//! Presentation state for the item screens.
//!
//! The view model owns the only writers of the item list and fetch status.
//! It starts one fetch on creation; a failed fetch leaves the list as it was
//! and reports the failure through [`FetchStatus`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::ItemSource;
use crate::model::Item;
use crate::observable::{self, Publisher, Subscriber};

/// Progress of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded {
        count: usize,
    },
    Failed {
        message: String,
    },
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, FetchStatus::Loaded { .. } | FetchStatus::Failed { .. })
    }
}

struct Shared<S> {
    source: S,
    items: Publisher<Vec<Item>>,
    status: Publisher<FetchStatus>,
    in_flight: AtomicBool,
}

pub struct ItemViewModel<S: ItemSource> {
    shared: Arc<Shared<S>>,
    items: Subscriber<Vec<Item>>,
    status: Subscriber<FetchStatus>,
    runtime: Handle,
}

impl<S: ItemSource> ItemViewModel<S> {
    /// Build the view model and launch the initial fetch on `runtime`.
    pub fn new(source: S, runtime: Handle) -> Self {
        let (items_tx, items) = observable::channel(Vec::new());
        let (status_tx, status) = observable::channel(FetchStatus::Idle);
        let view_model = Self {
            shared: Arc::new(Shared {
                source,
                items: items_tx,
                status: status_tx,
                in_flight: AtomicBool::new(false),
            }),
            items,
            status,
            runtime,
        };
        // Detached; completion is observed through `status()`.
        let _initial = view_model.refresh();
        view_model
    }

    /// Read-only view of the current list. Empty until the first success.
    pub fn items(&self) -> Subscriber<Vec<Item>> {
        self.items.clone()
    }

    pub fn status(&self) -> Subscriber<FetchStatus> {
        self.status.clone()
    }

    /// Run the fetch again, unless one is already running.
    ///
    /// Returns the task handle when a fetch was started.
    pub fn refresh(&self) -> Option<JoinHandle<()>> {
        if self
            .shared
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Fetch already in flight, refresh ignored");
            return None;
        }

        let shared = Arc::clone(&self.shared);
        shared.status.publish(FetchStatus::Loading);
        Some(self.runtime.spawn(async move {
            let status = match shared.source.fetch_items().await {
                Ok(items) => {
                    let count = items.len();
                    shared.items.publish(items);
                    FetchStatus::Loaded { count }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Fetch failed, keeping previous items");
                    FetchStatus::Failed {
                        message: err.user_message(),
                    }
                }
            };
            // A settled status must allow the next refresh.
            shared.in_flight.store(false, Ordering::Release);
            shared.status.publish(status);
        }))
    }
}
