//! Live Queue Synchronization
//!
//! Keeps the doctor dashboard's queue in step with the backend: full
//! snapshot on start, per-doctor push channel treated as an
//! invalidation feed, bounded fixed-delay reconnection, and a
//! fixed-interval snapshot poll as the fallback once the channel is
//! gone. Every update path writes the authoritative full snapshot, so
//! racing updaters can only converge on the newest list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::channel::oneshot;
use futures::{select, FutureExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;
use gloo_timers::future::sleep;
use leptos::task::spawn_local;

use queue_sync::{classify, LinkStatus, Reconnector, SyncConfig, SyncDecision};

use crate::api;
use crate::config;
use crate::context::AppContext;
use crate::models::QueueItem;
use crate::store::{store_replace_queue, store_set_link, QueueStore};

/// Handle owned by the dashboard view. Dropping it cancels the poll
/// timer, aborts the push loop, and closes the channel, so no update
/// can reach an unmounted view.
pub struct QueueSync {
    alive: Arc<AtomicBool>,
    cancel: Option<oneshot::Sender<()>>,
}

impl QueueSync {
    /// Start the three loops for one doctor: initial snapshot fetch,
    /// push subscription, fallback poll.
    pub fn start(doctor_id: String, store: QueueStore, ctx: AppContext) -> QueueSync {
        Self::with_config(doctor_id, store, ctx, SyncConfig::default())
    }

    pub fn with_config(
        doctor_id: String,
        store: QueueStore,
        ctx: AppContext,
        sync_config: SyncConfig,
    ) -> QueueSync {
        let alive = Arc::new(AtomicBool::new(true));
        let (cancel_tx, cancel_rx) = oneshot::channel();

        {
            let doctor_id = doctor_id.clone();
            spawn_local(async move {
                refetch(&doctor_id, store, ctx).await;
            });
        }

        {
            let doctor_id = doctor_id.clone();
            let alive = Arc::clone(&alive);
            spawn_local(push_loop(doctor_id, store, ctx, sync_config, cancel_rx, alive));
        }

        {
            let alive = Arc::clone(&alive);
            spawn_local(async move {
                loop {
                    sleep(sync_config.poll_interval).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    refetch(&doctor_id, store, ctx).await;
                }
            });
        }

        QueueSync {
            alive,
            cancel: Some(cancel_tx),
        }
    }
}

impl Drop for QueueSync {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Relaxed);
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

/// Snapshot fetch shared by every update path. A failure keeps the
/// previous list on screen and surfaces a toast; it is never fatal to
/// the page.
async fn refetch(doctor_id: &str, store: QueueStore, ctx: AppContext) {
    match api::fetch_queue(doctor_id).await {
        Ok(entries) => store_replace_queue(&store, entries),
        // The 401 path has already cleared the session and redirected.
        Err(err) if err.is_unauthorized() => {}
        Err(err) => {
            web_sys::console::warn_1(&format!("[QUEUE] snapshot fetch failed: {err}").into());
            ctx.notify("Failed to load queue.");
        }
    }
}

async fn push_loop(
    doctor_id: String,
    store: QueueStore,
    ctx: AppContext,
    sync_config: SyncConfig,
    cancel_rx: oneshot::Receiver<()>,
    alive: Arc<AtomicBool>,
) {
    let mut cancel_rx = cancel_rx.fuse();
    let mut reconnector = Reconnector::new(sync_config);

    'channel: loop {
        match WebSocket::open(&config::doctor_ws_url(&doctor_id)) {
            Ok(socket) => {
                let mut socket = socket.fuse();
                loop {
                    select! {
                        _ = cancel_rx => break 'channel,
                        frame = socket.next() => match frame {
                            Some(Ok(Message::Text(raw))) => {
                                // A frame is the only proof the server
                                // is really there; reset the budget.
                                reconnector.reset();
                                store_set_link(&store, LinkStatus::Live);
                                handle_frame(&raw, &doctor_id, store, ctx).await;
                            }
                            Some(Ok(Message::Bytes(_))) => {}
                            Some(Err(_)) | None => break,
                        },
                    }
                }
                // Dropping the socket here closes the channel.
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("[QUEUE] channel open failed: {err}").into());
            }
        }

        if !alive.load(Ordering::Relaxed) {
            break;
        }
        match reconnector.next_delay() {
            Some(delay) => {
                store_set_link(&store, LinkStatus::Reconnecting);
                select! {
                    _ = cancel_rx => break 'channel,
                    _ = sleep(delay).fuse() => {}
                }
            }
            None => {
                // Retries exhausted: from here on the fallback poll is
                // the only consistency mechanism.
                store_set_link(&store, LinkStatus::Offline);
                break;
            }
        }
    }
}

/// Push messages are invalidation hints or full replacement lists,
/// never incremental deltas. Malformed frames are dropped, not fatal.
async fn handle_frame(raw: &str, doctor_id: &str, store: QueueStore, ctx: AppContext) {
    match classify::<QueueItem>(raw) {
        Ok(SyncDecision::Replace(entries)) => store_replace_queue(&store, entries),
        Ok(SyncDecision::Refetch) => refetch(doctor_id, store, ctx).await,
        Ok(SyncDecision::Ignore) => {}
        Err(err) => {
            web_sys::console::warn_1(&format!("[QUEUE] dropped frame: {err}").into());
        }
    }
}
