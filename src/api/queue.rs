//! Doctor Queue Commands
//!
//! Snapshot retrieval and consultation state transitions. The snapshot
//! keeps the server-determined priority ordering; the client never
//! re-sorts.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::QueueItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeAction {
    Start,
    Complete,
}

impl ServeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ServeAction::Start => "start",
            ServeAction::Complete => "complete",
        }
    }

    /// Toast wording on failure.
    pub fn verb(self) -> &'static str {
        match self {
            ServeAction::Start => "start",
            ServeAction::Complete => "complete",
        }
    }
}

#[derive(Deserialize)]
struct QueueEnvelope {
    #[serde(default)]
    queue: Vec<QueueItem>,
}

pub async fn fetch_queue(doctor_id: &str) -> Result<Vec<QueueItem>, ApiError> {
    let envelope: QueueEnvelope =
        super::get_json(&format!("/doctor/queue/{doctor_id}")).await?;
    Ok(envelope.queue)
}

#[derive(Serialize)]
struct ServeArgs<'a> {
    action: &'a str,
}

/// Fire-and-forget transition; the caller re-fetches the snapshot to
/// observe the new state.
pub async fn serve(queue_id: &str, action: ServeAction) -> Result<(), ApiError> {
    let _: serde_json::Value = super::post_json(
        &format!("/doctor/queue/{queue_id}/serve"),
        &ServeArgs { action: action.as_str() },
    )
    .await?;
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordArgs {
    pub doctor_id: String,
    pub diagnosis: String,
    pub syndrome_identified: String,
    pub treatment_plan: String,
    pub follow_up_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    pub notes: String,
}

pub async fn submit_record(visit_id: &str, args: &RecordArgs) -> Result<(), ApiError> {
    let _: serde_json::Value =
        super::post_json(&format!("/doctor/visits/{visit_id}/record"), args).await?;
    Ok(())
}
