pub mod config;
pub mod database;
pub mod diary_repository;
pub mod user_repository;

pub use config::DatabaseConfig;
pub use database::Database;
pub use diary_repository::DiaryRepository;
pub use user_repository::UserRepository;
