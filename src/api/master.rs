//! Master Data Commands
//!
//! Symptom and chronic-condition lists backing the pickers and the
//! autocomplete.

use crate::error::ApiError;
use crate::models::MasterEntry;

pub async fn symptoms(query: Option<&str>) -> Result<Vec<MasterEntry>, ApiError> {
    match query {
        Some(q) => super::get_json_with_query("/master/symptoms", &[("q", q)]).await,
        None => super::get_json("/master/symptoms").await,
    }
}

pub async fn chronic_conditions() -> Result<Vec<MasterEntry>, ApiError> {
    super::get_json("/master/chronic-conditions").await
}
