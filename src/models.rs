//! Frontend Models
//!
//! Data structures matching backend API payloads. These are render-only
//! projections; the backend owns every invariant and the last fetch wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Vitals-derived risk level as computed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// Unrecognized server value; rendered neutrally instead of failing
    /// the whole snapshot decode.
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }

    /// CSS modifier class for badges and bars.
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
            RiskLevel::Unknown => "risk-unknown",
        }
    }
}

/// One server-ranked entry in a doctor's queue (matches backend).
///
/// Produced entirely by the backend; the client never recomputes
/// priority or position, only displays and requests transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    pub queue_id: String,
    pub visit_id: String,
    pub patient_name: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    pub age: u32,
    pub gender: String,
    pub symptoms: String,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub priority_score: f64,
    #[serde(default)]
    pub dynamic_score: f64,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub waiting_minutes: i64,
    #[serde(default)]
    pub wait_time_boost: Option<f64>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub visit_status: Option<String>,
}

impl QueueItem {
    /// "Start consultation" is offered only while the visit is still
    /// waiting; the confirming snapshot flips this.
    pub fn can_start(&self) -> bool {
        self.visit_status.as_deref() != Some("In Consultation")
    }

    pub fn is_critical(&self) -> bool {
        self.risk_level == RiskLevel::High || self.is_emergency
    }
}

/// Average waiting time across a queue, for the stat cards.
pub fn average_wait_minutes(queue: &[QueueItem]) -> i64 {
    if queue.is_empty() {
        return 0;
    }
    let total: i64 = queue.iter().map(|item| item.waiting_minutes).sum();
    total / queue.len() as i64
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: String,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Department {
    pub department_id: String,
    pub name: String,
}

/// Master-list entry for symptom and chronic-condition pickers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MasterEntry {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatientSummary {
    pub patient_id: String,
    pub full_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisitOutcome {
    #[serde(default)]
    pub visit_id: Option<String>,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub queue_position: Option<i32>,
    #[serde(default)]
    pub assigned_department: Option<String>,
    #[serde(default)]
    pub assigned_doctor: Option<String>,
}

/// `GET /patient/my-records` response. The backend signals "no patient
/// record linked to this account" in-band rather than with an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MyRecords {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub patient: Option<PatientProfile>,
    #[serde(default)]
    pub visits: Vec<VisitSummary>,
}

impl MyRecords {
    pub fn no_record(&self) -> bool {
        self.status.as_deref() == Some("no_record")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatientProfile {
    pub full_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub blood_pressure: Option<String>,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(default)]
    pub pre_existing_conditions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisitSummary {
    pub visit_id: String,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub dept: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub risk_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub department_load: HashMap<String, u64>,
    #[serde(default)]
    pub total_visits: u64,
    #[serde(default)]
    pub recent_visits: Vec<RecentVisit>,
}

impl StatsSnapshot {
    pub fn high_risk_count(&self) -> u64 {
        self.risk_distribution.get("High").copied().unwrap_or(0)
    }

    pub fn currently_waiting(&self) -> u64 {
        self.department_load.values().sum()
    }

    /// Department load sorted busiest-first for the overview list.
    pub fn departments_by_load(&self) -> Vec<(String, u64)> {
        let mut load: Vec<(String, u64)> = self
            .department_load
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        load.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        load
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentVisit {
    pub visit_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DoctorProfile {
    pub doctor_id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatientInsights {
    #[serde(default)]
    pub chronic_conditions: Vec<ChronicCondition>,
    #[serde(default)]
    pub recent_high_risk: Vec<HighRiskFinding>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub recurring_symptoms: HashMap<String, u32>,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChronicCondition {
    pub condition: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HighRiskFinding {
    pub finding: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Medication {
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub prescribed_date: String,
}

/// `POST /documents/upload` response; detected conditions are merged
/// into the intake selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResult {
    pub file_path: String,
    #[serde(default)]
    pub detected_conditions: DetectedConditions,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DetectedConditions {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_item_decodes_backend_payload() {
        let raw = r#"{
            "queue_id": "8b1c", "visit_id": "v-77", "patient_name": "Asha Rao",
            "patient_id": "p-12", "age": 63, "gender": "Female",
            "symptoms": "Chest Pain, Dizziness", "risk_level": "High",
            "priority_score": 8.4, "dynamic_score": 9.1, "queue_position": 1,
            "is_emergency": true, "waiting_minutes": 42, "wait_time_boost": 0.7,
            "position": 1, "visit_status": "Waiting"
        }"#;
        let item: QueueItem = serde_json::from_str(raw).expect("Decode failed");
        assert_eq!(item.risk_level, RiskLevel::High);
        assert!(item.is_critical());
        assert!(item.can_start());
        assert_eq!(item.waiting_minutes, 42);
    }

    #[test]
    fn test_in_consultation_blocks_start() {
        let raw = r#"{
            "queue_id": "q", "visit_id": "v", "patient_name": "N",
            "age": 30, "gender": "Male", "symptoms": "Fever",
            "risk_level": "Low", "visit_status": "In Consultation"
        }"#;
        let item: QueueItem = serde_json::from_str(raw).expect("Decode failed");
        assert!(!item.can_start());
        assert!(!item.is_critical());
    }

    #[test]
    fn test_unknown_risk_level_is_tolerated() {
        let raw = r#"{
            "queue_id": "q", "visit_id": "v", "patient_name": "N",
            "age": 30, "gender": "Male", "symptoms": "Fever",
            "risk_level": "Catastrophic"
        }"#;
        let item: QueueItem = serde_json::from_str(raw).expect("Decode failed");
        assert_eq!(item.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn test_average_wait() {
        let mut items: Vec<QueueItem> = Vec::new();
        for minutes in [10, 20, 33] {
            let raw = format!(
                r#"{{"queue_id":"q","visit_id":"v","patient_name":"N","age":1,
                     "gender":"F","symptoms":"","risk_level":"Low","waiting_minutes":{minutes}}}"#
            );
            items.push(serde_json::from_str(&raw).expect("Decode failed"));
        }
        assert_eq!(average_wait_minutes(&items), 21);
        assert_eq!(average_wait_minutes(&[]), 0);
    }

    #[test]
    fn test_login_response_optional_ids() {
        let raw = r#"{"access_token":"tok","role":"Recipient"}"#;
        let login: LoginResponse = serde_json::from_str(raw).expect("Decode failed");
        assert_eq!(login.role, "Recipient");
        assert!(login.doctor_id.is_none());
    }

    #[test]
    fn test_stats_helpers() {
        let raw = r#"{
            "risk_distribution": {"High": 3, "Low": 10},
            "department_load": {"Cardiology": 5, "General": 2},
            "total_visits": 40,
            "recent_visits": []
        }"#;
        let stats: StatsSnapshot = serde_json::from_str(raw).expect("Decode failed");
        assert_eq!(stats.high_risk_count(), 3);
        assert_eq!(stats.currently_waiting(), 7);
        assert_eq!(stats.departments_by_load()[0].0, "Cardiology");
    }

    #[test]
    fn test_my_records_no_record_envelope() {
        let raw = r#"{"status":"no_record","message":"No patient record found"}"#;
        let records: MyRecords = serde_json::from_str(raw).expect("Decode failed");
        assert!(records.no_record());
        assert!(records.patient.is_none());
    }
}
