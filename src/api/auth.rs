//! Auth Commands
//!
//! Bindings for login, signup, and the department list the signup form
//! needs.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Department, LoginResponse};

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    super::post_json("/auth/login", &LoginArgs { email, password }).await
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterArgs {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
}

pub async fn register(args: &RegisterArgs) -> Result<(), ApiError> {
    let _: serde_json::Value = super::post_json("/auth/register", args).await?;
    Ok(())
}

pub async fn departments() -> Result<Vec<Department>, ApiError> {
    super::get_json("/departments").await
}
