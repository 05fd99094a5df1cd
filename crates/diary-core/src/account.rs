use crate::error::AppError;
use crate::models::NewUser;
use crate::password::{hash_password, verify_password};
use crate::token::TokenIssuer;
use crate::traits::UserStore;

/// Registration and login on top of a [`UserStore`].
///
/// Generic over the store so it can be exercised without a database.
pub struct AccountService<S: UserStore> {
    store: S,
    issuer: TokenIssuer,
}

impl<S: UserStore> AccountService<S> {
    pub fn new(store: S, issuer: TokenIssuer) -> Self {
        Self { store, issuer }
    }

    /// Hash the password and insert the user. Name and email are stored verbatim.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), AppError> {
        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
        };

        self.store.create_user(&new_user).await?;
        tracing::info!(email, "User registered");
        Ok(())
    }

    /// Check credentials and issue a session token.
    ///
    /// An unknown email and a wrong password both yield
    /// [`AppError::InvalidCredentials`]; a store failure yields
    /// [`AppError::LoginFailed`] with the store's message.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .store
            .find_by_email(email)
            .await
            .map_err(|e| AppError::LoginFailed(e.to_string()))?
            .filter(|user| verify_password(password, &user.password))
            .ok_or(AppError::InvalidCredentials)?;

        let token = self.issuer.issue(&user)?;
        tracing::info!(id_user = user.id_user, "User logged in");
        Ok(token)
    }
}
