use chrono::{DateTime, Utc};

/// A registered user.
#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    pub id_user: i64,
    pub name: String,
    /// Login key.
    pub email: String,
    /// Argon2id PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub create_at: DateTime<Utc>,
}

/// DTO for inserting a new user. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A stored diary entry.
///
/// Field names follow the `diary` table columns, which is also what clients
/// receive on the wire.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DiaryEntry {
    pub id_diary: i64,
    /// Owning user. Not validated against `user` at write time.
    pub user_id: i64,
    pub title: String,
    pub diary_user: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

/// DTO for inserting a diary entry.
#[derive(Debug, Clone)]
pub struct NewDiaryEntry {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// DTO for an in-place update, matched on both entry id and owner.
#[derive(Debug, Clone)]
pub struct DiaryUpdate {
    pub id_diary: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}
