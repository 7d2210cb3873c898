//! Wire DTOs for the backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde does the parsing
//! and views stay schema-driven. Numeric identifiers arrive as JSON numbers
//! but are carried as strings client-side, since they are only ever echoed
//! back or displayed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Successful response of `POST /token/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential for subsequent requests.
    pub token: String,
    /// Identifier of the authenticated principal.
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub user_id: String,
    /// Display name.
    pub username: String,
    /// Staff signal the client derives the role from.
    pub is_staff: bool,
}

/// Body of `POST /register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// Field-level validation errors returned by `POST /register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterErrors {
    #[serde(default)]
    pub username: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
}

impl RegisterErrors {
    /// First field message to surface inline, username errors first.
    pub fn first_message(&self) -> Option<String> {
        self.username.first().or_else(|| self.email.first()).cloned()
    }
}

/// An event as returned by `GET /api/events/list/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    #[serde(default)]
    pub time: String,
    /// Usernames of volunteers linked to the event.
    #[serde(default)]
    pub volunteers: Vec<String>,
}

/// Body of `POST /api/events/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

/// A meeting entry inside a volunteer record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeetingRecord {
    #[serde(default)]
    pub topic: Option<String>,
    pub online_hours: f64,
}

/// A volunteer as returned by `GET /api/admin/volunteers/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VolunteerRecord {
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub total_hours: i64,
    #[serde(default)]
    pub events_attended: Vec<String>,
    #[serde(default)]
    pub meetings_attended: Vec<MeetingRecord>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// An attended event inside the volunteer profile.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AttendedEvent {
    pub title: String,
    pub date: String,
}

/// An upcoming event inside the volunteer profile.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UpcomingEvent {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
}

/// An online-work record inside the volunteer profile.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AttendanceEntry {
    #[serde(default)]
    pub topic: Option<String>,
    pub hours: f64,
}

/// Response of `GET /api/volunteer/profile/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VolunteerProfile {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub hours_worked: i64,
    #[serde(default)]
    pub events_attended: Vec<AttendedEvent>,
    #[serde(default)]
    pub upcoming_events: Vec<UpcomingEvent>,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

/// Body of `POST /api/assign_hours/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignHoursRequest {
    /// Volunteer username.
    pub volunteer: String,
    /// Event title.
    pub event: String,
    /// Event date (`YYYY-MM-DD`), disambiguating same-titled events.
    pub event_date: String,
    pub hours: f64,
}

/// Body of `POST /api/admin/attendance/mark/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkAttendanceRequest {
    pub topic: String,
    /// Hours per volunteer username; unselected volunteers are omitted.
    pub volunteer_hours: BTreeMap<String, f64>,
}

/// Body of `POST /api/admin/reset-password/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub username: String,
    pub new_password: String,
}

/// Generic `{"message": ...}` acknowledgement body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Generic `{"detail": ...}` error body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

fn deserialize_string_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
