//! Patient & Recipient Commands
//!
//! Patient search and registration for the triage desk, the signed-in
//! patient's own records, per-patient medical insights, and the
//! doctors roster.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{DoctorProfile, MyRecords, PatientInsights, PatientSummary};

/// Empty query returns the most recent patients.
pub async fn search_patients(query: &str) -> Result<Vec<PatientSummary>, ApiError> {
    super::get_json_with_query("/recipient/patients/search", &[("q", query)]).await
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientRegistrationArgs {
    pub full_name: String,
    pub age: u32,
    pub gender: String,
    pub phone_number: String,
    pub symptoms: String,
    pub blood_pressure: String,
    pub heart_rate: u32,
    pub temperature: f64,
    pub pre_existing_conditions: String,
}

pub async fn register_patient(
    args: &PatientRegistrationArgs,
) -> Result<PatientSummary, ApiError> {
    super::post_json("/recipient/patients", args).await
}

pub async fn my_records() -> Result<MyRecords, ApiError> {
    super::get_json("/patient/my-records").await
}

pub async fn patient_insights(patient_id: &str) -> Result<PatientInsights, ApiError> {
    super::get_json(&format!("/patient/{patient_id}/insights")).await
}

pub async fn doctors() -> Result<Vec<DoctorProfile>, ApiError> {
    super::get_json("/doctors").await
}
