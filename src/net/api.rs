//! REST API helpers for communicating with the backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds compile
//! stubs returning `Err`/`None` since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! to inline notices without crashing the UI. Protected calls attach
//! `Authorization: Token <token>` through one shared helper; a rejected
//! token surfaces as a request failure and never touches the session store.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AssignHoursRequest, EventRecord, LoginResponse, MarkAttendanceRequest, NewEvent,
    RegisterRequest, ResetPasswordRequest, VolunteerProfile, VolunteerRecord,
};
#[cfg(feature = "csr")]
use super::types::{DetailResponse, MessageResponse, RegisterErrors};

/// Backend base URL; override at build time via `VOLUNTEER_API_BASE`.
#[cfg(any(test, feature = "csr"))]
const API_BASE: &str = match option_env!("VOLUNTEER_API_BASE") {
    Some(base) => base,
    None => "http://127.0.0.1:8000",
};

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

#[cfg(any(test, feature = "csr"))]
fn events_list_endpoint(search: &str) -> String {
    if search.is_empty() {
        endpoint("/api/events/list/")
    } else {
        format!("{}?search={}", endpoint("/api/events/list/"), urlencoding::encode(search))
    }
}

#[cfg(any(test, feature = "csr"))]
fn volunteers_endpoint(search: &str) -> String {
    if search.is_empty() {
        endpoint("/api/admin/volunteers/")
    } else {
        format!("{}?search={}", endpoint("/api/admin/volunteers/"), urlencoding::encode(search))
    }
}

#[cfg(any(test, feature = "csr"))]
fn delete_event_endpoint(title: &str, date: &str) -> String {
    format!(
        "{}?event_name={}&event_date={}",
        endpoint("/api/events/delete_event/"),
        urlencoding::encode(title),
        urlencoding::encode(date)
    )
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// GET a JSON payload from a protected endpoint.
#[cfg(feature = "csr")]
async fn authed_get<T: serde::de::DeserializeOwned>(url: &str, token: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &auth_header(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// POST a JSON payload to a protected endpoint, returning the raw response
/// once its status has been checked.
#[cfg(feature = "csr")]
async fn authed_post(
    url: &str,
    token: &str,
    payload: &impl serde::Serialize,
) -> Result<gloo_net::http::Response, String> {
    let resp = gloo_net::http::Request::post(url)
        .header("Authorization", &auth_header(token))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    Ok(resp)
}

/// Authenticate against `POST /token/`.
///
/// # Errors
///
/// Returns an error string when the request fails or the credentials are
/// rejected; the caller decides how to phrase it for the user.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint("/token/"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an account via `POST /register/`.
///
/// # Errors
///
/// Surfaces the backend's first field-level message when present, otherwise a
/// generic failure string.
pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/register/"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let message = resp
            .json::<RegisterErrors>()
            .await
            .ok()
            .and_then(|errors| errors.first_message())
            .unwrap_or_else(|| "Registration failed.".to_owned());
        Err(message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the signed-in volunteer's profile from `GET /api/volunteer/profile/`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be parsed.
pub async fn fetch_profile(token: &str) -> Result<VolunteerProfile, String> {
    #[cfg(feature = "csr")]
    {
        authed_get(&endpoint("/api/volunteer/profile/"), token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err("not available outside the browser".to_owned())
    }
}

/// List events via `GET /api/events/list/`, optionally filtered by title.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be parsed.
pub async fn list_events(token: &str, search: &str) -> Result<Vec<EventRecord>, String> {
    #[cfg(feature = "csr")]
    {
        authed_get(&events_list_endpoint(search), token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, search);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an event via `POST /api/events/`.
///
/// # Errors
///
/// Prefers the backend's `detail` message when the creation is rejected.
pub async fn create_event(token: &str, event: &NewEvent) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/api/events/"))
            .header("Authorization", &auth_header(token))
            .json(event)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let detail = resp.json::<DetailResponse>().await.ok().and_then(|body| body.detail);
        Err(detail.unwrap_or_else(|| request_failed_message(status)))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, event);
        Err("not available outside the browser".to_owned())
    }
}

/// Delete an event by title and date via `DELETE /api/events/delete_event/`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_event(token: &str, title: &str, date: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&delete_event_endpoint(title, date))
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, title, date);
        Err("not available outside the browser".to_owned())
    }
}

/// List volunteers via `GET /api/admin/volunteers/`, optionally filtered by
/// username.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be parsed.
pub async fn list_volunteers(token: &str, search: &str) -> Result<Vec<VolunteerRecord>, String> {
    #[cfg(feature = "csr")]
    {
        authed_get(&volunteers_endpoint(search), token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, search);
        Err("not available outside the browser".to_owned())
    }
}

/// Assign event hours to a volunteer via `POST /api/assign_hours/`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn assign_hours(token: &str, request: &AssignHoursRequest) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        authed_post(&endpoint("/api/assign_hours/"), token, request).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, request);
        Err("not available outside the browser".to_owned())
    }
}

/// Record online-work hours via `POST /api/admin/attendance/mark/`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn mark_attendance(token: &str, request: &MarkAttendanceRequest) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = authed_post(&endpoint("/api/admin/attendance/mark/"), token, request).await?;
        let body = resp.json::<MessageResponse>().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, request);
        Err("not available outside the browser".to_owned())
    }
}

/// Reset a volunteer's password via `POST /api/admin/reset-password/`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn reset_password(token: &str, request: &ResetPasswordRequest) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = authed_post(&endpoint("/api/admin/reset-password/"), token, request).await?;
        let body = resp.json::<MessageResponse>().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, request);
        Err("not available outside the browser".to_owned())
    }
}
