use std::future::Future;

use crate::error::AppError;
use crate::models::{NewUser, User};

/// Persists and looks up user accounts.
pub trait UserStore: Send + Sync + Clone {
    /// Insert a new user. No duplicate pre-check; constraint violations
    /// surface as [`AppError::DatabaseError`].
    fn create_user(&self, user: &NewUser) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Find a user by exact email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;
}
