use diary_core::TokenIssuer;
use diary_db::Database;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// Signs session tokens at login.
    pub tokens: TokenIssuer,
}
