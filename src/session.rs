//! Session Handling
//!
//! Browser key-value storage for the signed-in session: bearer token,
//! role, and the identifiers the dashboards key off. Cleared wholesale
//! on logout or on any authorization failure.

use crate::models::LoginResponse;

const KEY_TOKEN: &str = "token";
const KEY_ROLE: &str = "role";
const KEY_DOCTOR_ID: &str = "doctor_id";
const KEY_USER_ID: &str = "user_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Doctor,
    Recipient,
    Patient,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Recipient => "Recipient",
            Role::Patient => "Patient",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "Admin" => Some(Role::Admin),
            "Doctor" => Some(Role::Doctor),
            "Recipient" => Some(Role::Recipient),
            "Patient" => Some(Role::Patient),
            _ => None,
        }
    }

    /// Landing route after login.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin-dashboard",
            Role::Doctor => "/doctor-dashboard",
            Role::Recipient => "/recipient-dashboard",
            Role::Patient => "/patient-dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub doctor_id: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    /// Unknown roles land on the admin dashboard, same as the backend's
    /// own default routing.
    pub fn from_login(login: &LoginResponse) -> Session {
        Session {
            token: login.access_token.clone(),
            role: Role::parse(&login.role).unwrap_or(Role::Admin),
            doctor_id: login.doctor_id.clone(),
            user_id: login.user_id.clone(),
        }
    }

    pub fn load() -> Option<Session> {
        let storage = storage()?;
        let token = storage.get_item(KEY_TOKEN).ok().flatten()?;
        let role = Role::parse(&storage.get_item(KEY_ROLE).ok().flatten()?)?;
        Some(Session {
            token,
            role,
            doctor_id: storage.get_item(KEY_DOCTOR_ID).ok().flatten(),
            user_id: storage.get_item(KEY_USER_ID).ok().flatten(),
        })
    }

    pub fn store(&self) {
        let Some(storage) = storage() else { return };
        let _ = storage.set_item(KEY_TOKEN, &self.token);
        let _ = storage.set_item(KEY_ROLE, self.role.as_str());
        if let Some(doctor_id) = &self.doctor_id {
            let _ = storage.set_item(KEY_DOCTOR_ID, doctor_id);
        }
        if let Some(user_id) = &self.user_id {
            let _ = storage.set_item(KEY_USER_ID, user_id);
        }
    }

    /// Clears the whole store. Returns whether a token was present, so
    /// the unauthorized path can redirect exactly once even when
    /// several in-flight requests fail together.
    pub fn clear() -> bool {
        let Some(storage) = storage() else {
            return false;
        };
        let had_token = matches!(storage.get_item(KEY_TOKEN), Ok(Some(_)));
        let _ = storage.clear();
        had_token
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Doctor, Role::Recipient, Role::Patient] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Nurse"), None);
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(Role::Doctor.dashboard_path(), "/doctor-dashboard");
        assert_eq!(Role::Recipient.dashboard_path(), "/recipient-dashboard");
    }

    #[test]
    fn test_session_from_login_defaults_unknown_role_to_admin() {
        let login = crate::models::LoginResponse {
            access_token: "tok".into(),
            role: "Superuser".into(),
            doctor_id: None,
            user_id: Some("u-1".into()),
        };
        let session = Session::from_login(&login);
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.user_id.as_deref(), Some("u-1"));
    }
}
