use chrono::{DateTime, Utc};
use diary_core::error::AppError;
use diary_core::models::{NewUser, User};
use sqlx::{PgPool, Pool, Postgres};

/// Repository for user accounts in PostgreSQL.
#[derive(Clone)]
pub struct UserRepository {
    pool: Pool<Postgres>,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user. A duplicate email fails on the unique constraint.
    pub async fn create(&self, user: &NewUser) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO "user" (name, email, password)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// Look up a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id_user, name, email, password, create_at
            FROM "user"
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct UserRow {
    id_user: i64,
    name: String,
    email: String,
    password: String,
    create_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id_user: row.id_user,
            name: row.name,
            email: row.email,
            password: row.password,
            create_at: row.create_at,
        }
    }
}

// -- Trait implementation --

impl diary_core::traits::UserStore for UserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<(), AppError> {
        UserRepository::create(self, user).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        UserRepository::find_by_email(self, email).await
    }
}
