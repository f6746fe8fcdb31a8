//! Backend API Wrappers
//!
//! HTTP bindings to the triage backend, organized by domain. Every
//! request passes through one authorized send path: bearer token on the
//! way out, fail-fast 401 handling on the way back. No retry, no
//! queuing.

mod auth;
mod master;
mod patients;
mod queue;
mod stats;
mod visits;

// Re-export all public items
pub use auth::*;
pub use master::*;
pub use patients::*;
pub use queue::*;
pub use stats::*;
pub use visits::*;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::error::{detail_message, ApiError};
use crate::session::Session;

fn get(path: &str) -> RequestBuilder {
    authorized(Request::get(&config::api_url(path)))
}

fn post(path: &str) -> RequestBuilder {
    authorized(Request::post(&config::api_url(path)))
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match Session::load() {
        Some(session) => builder.header("Authorization", &format!("Bearer {}", session.token)),
        None => builder,
    }
}

/// Shared response path: 401 clears the session and bounces to the
/// login view; any other non-2xx surfaces the backend's `detail`.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        force_logout();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let fallback = format!("request failed ({})", response.status());
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(
            response.status(),
            detail_message(&body, &fallback),
        ));
    }
    Ok(response)
}

/// `Session::clear` reports whether a session was actually present, so
/// a burst of failing requests bounces the user at most once.
fn force_logout() {
    if Session::clear() {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request = builder
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send(get(path)).await?).await
}

pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, &str)],
) -> Result<T, ApiError> {
    let builder = get(path).query(params.iter().copied());
    decode(send(builder).await?).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(send_json(post(path), body).await?).await
}
