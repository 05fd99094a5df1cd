pub mod account;
pub mod error;
pub mod models;
pub mod password;
pub mod token;
pub mod traits;

#[cfg(test)]
mod testutil;

pub use account::AccountService;
pub use error::AppError;
pub use models::{DiaryEntry, DiaryUpdate, NewDiaryEntry, NewUser, User};
pub use token::{AuthConfig, SessionClaims, TokenIssuer};
pub use traits::UserStore;
