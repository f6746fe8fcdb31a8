//! Stats Commands

use crate::error::ApiError;
use crate::models::StatsSnapshot;

pub async fn stats() -> Result<StatsSnapshot, ApiError> {
    super::get_json("/stats").await
}
