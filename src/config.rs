//! Backend Endpoints
//!
//! The backend runs beside the dev server; both URL families derive
//! from one base so a deployment only has to change it here.

pub const API_BASE: &str = "http://127.0.0.1:8000";

pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Push channel URL for one doctor, derived from the API base by
/// scheme swap (http → ws, https → wss).
pub fn doctor_ws_url(doctor_id: &str) -> String {
    let ws_base = if let Some(rest) = API_BASE.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = API_BASE.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        API_BASE.to_string()
    };
    format!("{ws_base}/ws/doctor/{doctor_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_path() {
        assert_eq!(api_url("/stats"), "http://127.0.0.1:8000/stats");
    }

    #[test]
    fn test_ws_url_swaps_scheme() {
        assert_eq!(
            doctor_ws_url("d-42"),
            "ws://127.0.0.1:8000/ws/doctor/d-42"
        );
    }
}
