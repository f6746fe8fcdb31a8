//! Visit Commands
//!
//! Intake submission and the document upload that can pre-fill it.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{UploadResult, VisitOutcome};

#[derive(Debug, Clone, Default, Serialize)]
pub struct VisitArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    pub age: u32,
    pub gender: String,
    pub symptoms: Vec<String>,
    pub systolic_bp: u32,
    pub heart_rate: u32,
    pub temperature: f64,
    pub visit_type: String,
    pub chronic_conditions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uploaded_documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_preferred_doctor: Option<bool>,
}

pub async fn create_visit(args: &VisitArgs) -> Result<VisitOutcome, ApiError> {
    super::post_json("/visits", args).await
}

/// Multipart upload; the browser sets the boundary header itself.
pub async fn upload_document(file: &web_sys::File) -> Result<UploadResult, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".into()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("could not attach file".into()))?;

    let request = super::post("/documents/upload")
        .body(form)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let response = super::check(response).await?;
    super::decode(response).await
}
