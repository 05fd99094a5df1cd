//! Test utilities: in-memory mock of [`UserStore`].
//!
//! Uses `Arc<Mutex<_>>` for interior mutability so tests can inspect
//! what was stored.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::error::AppError;
use crate::models::{NewUser, User};
use crate::traits::UserStore;

/// Mock user store backed by an in-memory Vec. Ids start at 1.
#[derive(Clone)]
pub struct MockUserStore {
    pub users: Arc<Mutex<Vec<User>>>,
    error: Arc<Mutex<Option<AppError>>>,
}

impl MockUserStore {
    pub fn empty() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }

    /// Store whose next call fails with `error`.
    pub fn with_error(error: AppError) -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(Some(error))),
        }
    }

    fn take_error(&self) -> Option<AppError> {
        self.error.lock().unwrap().take()
    }
}

impl UserStore for MockUserStore {
    async fn create_user(&self, user: &NewUser) -> Result<(), AppError> {
        if let Some(e) = self.take_error() {
            return Err(e);
        }
        let mut users = self.users.lock().unwrap();
        let id_user = users.len() as i64 + 1;
        users.push(User {
            id_user,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
            create_at: Utc::now(),
        });
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        if let Some(e) = self.take_error() {
            return Err(e);
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}
