//! Live Queue State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the
//! doctor's queue view.

use leptos::prelude::*;
use queue_sync::LinkStatus;
use reactive_stores::Store;

use crate::models::QueueItem;

/// Doctor queue state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct QueueState {
    /// Current snapshot, in server priority order
    pub entries: Vec<QueueItem>,
    /// Push channel health, drives the live/offline indicator
    pub link: LinkStatus,
    /// True until the first snapshot lands
    pub loading: bool,
}

impl QueueState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type QueueStore = Store<QueueState>;

/// Get the queue store from context
pub fn use_queue_store() -> QueueStore {
    expect_context::<QueueStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole snapshot. Every update path goes through here, so
/// concurrent updaters can only race toward the newest full list.
pub fn store_replace_queue(store: &QueueStore, entries: Vec<QueueItem>) {
    *store.entries().write() = entries;
    store.loading().set(false);
}

pub fn store_set_link(store: &QueueStore, link: LinkStatus) {
    store.link().set(link);
}
