use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use diary_core::models::DiaryEntry;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

// Missing string fields bind as empty strings; only type mismatches are rejected.

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    /// Login key
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TokenResponse {
    /// HS256 JWT, valid for 24 hours
    pub token: String,
}

// ---------------------------------------------------------------------------
// Diary
// ---------------------------------------------------------------------------

/// Body of create and update requests.
///
/// `user_id` and `diary_user` are accepted as aliases for the mobile client.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DiaryRequest {
    /// Owning user
    #[serde(alias = "user_id")]
    pub id_user: i64,
    #[serde(default)]
    pub title: String,
    /// Entry body
    #[serde(alias = "diary_user", default)]
    pub diary: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DiaryEntryResponse {
    pub id_diary: i64,
    pub user_id: i64,
    pub title: String,
    pub diary_user: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl From<DiaryEntry> for DiaryEntryResponse {
    fn from(e: DiaryEntry) -> Self {
        Self {
            id_diary: e.id_diary,
            user_id: e.user_id,
            title: e.title,
            diary_user: e.diary_user,
            create_at: e.create_at,
            update_at: e.update_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Common
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
