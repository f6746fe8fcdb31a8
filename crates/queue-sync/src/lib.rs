//! Live Queue Synchronization Policy
//!
//! Keeps a client-side queue view consistent with server push
//! notifications. Push messages are treated as invalidation hints (or
//! full replacement lists), never as incremental deltas: every hint
//! triggers a full snapshot re-fetch, so the last write wins and no
//! merge logic exists to get wrong.
//!
//! This crate is framework-free so the policy can be exercised off-WASM.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Events the channel emits for housekeeping rather than queue changes.
const HOUSEKEEPING_EVENTS: &[&str] = &["connected", "ack"];

/// Prefix shared by all queue-change events (`queue_insert`,
/// `queue_start`, `queue_complete`, ...).
const QUEUE_EVENT_PREFIX: &str = "queue_";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("malformed push envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

/// What the client should do with one inbound push frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncDecision<T> {
    /// Housekeeping or unrecognized event; leave the list alone.
    Ignore,
    /// The envelope carried a full replacement list.
    Replace(Vec<T>),
    /// Queue changed without a payload; re-fetch the snapshot.
    Refetch,
}

/// JSON event envelope as emitted by the push channel.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    event: String,
    #[serde(default = "Option::default")]
    queue: Option<Vec<T>>,
}

/// Classify one raw text frame from the push channel.
///
/// Order matters and mirrors the server contract: housekeeping events
/// are dropped even if they grow a payload later; an embedded `queue`
/// array always wins over the event name; any other `queue_*` event is
/// an invalidation hint.
pub fn classify<T: DeserializeOwned>(raw: &str) -> Result<SyncDecision<T>, SyncError> {
    let envelope: Envelope<T> = serde_json::from_str(raw)?;

    if HOUSEKEEPING_EVENTS.contains(&envelope.event.as_str()) {
        return Ok(SyncDecision::Ignore);
    }
    if let Some(queue) = envelope.queue {
        return Ok(SyncDecision::Replace(queue));
    }
    if envelope.event.starts_with(QUEUE_EVENT_PREFIX) {
        return Ok(SyncDecision::Refetch);
    }
    Ok(SyncDecision::Ignore)
}

/// Connection state of the push channel, as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    /// Initial state, before the first frame arrives.
    #[default]
    Connecting,
    /// Frames are flowing.
    Live,
    /// Channel dropped; a bounded reconnect is in progress.
    Reconnecting,
    /// Retries exhausted; only the fallback poll keeps the view fresh.
    Offline,
}

impl LinkStatus {
    pub fn is_live(self) -> bool {
        self == LinkStatus::Live
    }
}

/// Tunables for the synchronization loops.
///
/// Defaults match the production client: reconnect every 3 s at most
/// 5 times, poll a full snapshot every 30 s regardless of link state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncConfig {
    pub reconnect_delay: Duration,
    pub max_retries: u32,
    pub poll_interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            reconnect_delay: Duration::from_secs(3),
            max_retries: 5,
            poll_interval: Duration::from_secs(30),
        }
    }
}

/// Bounded fixed-delay reconnect bookkeeping.
///
/// The counter resets on any received frame, not on socket open: a
/// frame is the only proof the server is really there.
#[derive(Debug, Clone)]
pub struct Reconnector {
    config: SyncConfig,
    attempts: u32,
}

impl Reconnector {
    pub fn new(config: SyncConfig) -> Self {
        Self { config, attempts: 0 }
    }

    /// Record a channel failure. Returns the delay to wait before the
    /// next attempt, or `None` once retries are exhausted.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.attempts >= self.config.max_retries {
            return None;
        }
        self.attempts += 1;
        Some(self.config.reconnect_delay)
    }

    /// A frame arrived; the channel is healthy again.
    pub fn reset(&mut self) {
        self.attempts = 0;
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempts >= self.config.max_retries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, serde::Deserialize)]
    struct Entry {
        queue_id: String,
        position: i32,
    }

    #[test]
    fn test_connected_frame_is_ignored() {
        let decision: SyncDecision<Entry> =
            classify(r#"{"event":"connected","doctor_id":"d-1"}"#).expect("Classify failed");
        assert_eq!(decision, SyncDecision::Ignore);
    }

    #[test]
    fn test_ack_frame_is_ignored() {
        let decision: SyncDecision<Entry> = classify(r#"{"event":"ack"}"#).expect("Classify failed");
        assert_eq!(decision, SyncDecision::Ignore);
    }

    #[test]
    fn test_embedded_queue_replaces() {
        let raw = r#"{
            "event": "queue_complete",
            "queue_id": "q-9",
            "queue": [
                {"queue_id": "q-1", "position": 1},
                {"queue_id": "q-2", "position": 2}
            ]
        }"#;
        match classify::<Entry>(raw).expect("Classify failed") {
            SyncDecision::Replace(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].queue_id, "q-1");
            }
            other => panic!("expected Replace, got {other:?}"),
        }
    }

    #[test]
    fn test_queue_event_without_payload_refetches() {
        for event in ["queue_insert", "queue_start", "queue_complete", "queue_reorder"] {
            let raw = format!(r#"{{"event":"{event}","queue_id":"q-1"}}"#);
            let decision: SyncDecision<Entry> = classify(&raw).expect("Classify failed");
            assert_eq!(decision, SyncDecision::Refetch, "event {event}");
        }
    }

    #[test]
    fn test_unknown_event_is_ignored() {
        let decision: SyncDecision<Entry> =
            classify(r#"{"event":"heartbeat"}"#).expect("Classify failed");
        assert_eq!(decision, SyncDecision::Ignore);
    }

    #[test]
    fn test_missing_event_with_queue_still_replaces() {
        let raw = r#"{"queue": [{"queue_id": "q-1", "position": 1}]}"#;
        match classify::<Entry>(raw).expect("Classify failed") {
            SyncDecision::Replace(entries) => assert_eq!(entries.len(), 1),
            other => panic!("expected Replace, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_frame_is_an_error() {
        assert!(classify::<Entry>("not json").is_err());
    }

    #[test]
    fn test_reconnector_bounds_attempts() {
        let config = SyncConfig::default();
        let mut reconnector = Reconnector::new(config);

        for attempt in 1..=config.max_retries {
            let delay = reconnector.next_delay();
            assert_eq!(delay, Some(config.reconnect_delay), "attempt {attempt}");
        }
        assert_eq!(reconnector.next_delay(), None);
        assert!(reconnector.is_exhausted());
        // Still exhausted on repeated asks.
        assert_eq!(reconnector.next_delay(), None);
    }

    #[test]
    fn test_reconnector_resets_on_frame() {
        let mut reconnector = Reconnector::new(SyncConfig::default());
        while reconnector.next_delay().is_some() {}
        assert!(reconnector.is_exhausted());

        reconnector.reset();
        assert!(!reconnector.is_exhausted());
        assert_eq!(reconnector.attempts(), 0);
        assert!(reconnector.next_delay().is_some());
    }

    #[test]
    fn test_poll_interval_independent_of_link_state() {
        // The fallback poll reads its interval from the config, never
        // from the reconnector, so an offline link cannot stall it.
        let config = SyncConfig::default();
        let mut reconnector = Reconnector::new(config);
        while reconnector.next_delay().is_some() {}

        assert!(reconnector.is_exhausted());
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_default_link_status_is_connecting() {
        assert_eq!(LinkStatus::default(), LinkStatus::Connecting);
        assert!(!LinkStatus::Offline.is_live());
        assert!(LinkStatus::Live.is_live());
    }
}
