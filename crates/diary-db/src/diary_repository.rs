use chrono::{DateTime, Utc};
use diary_core::error::AppError;
use diary_core::models::{DiaryEntry, DiaryUpdate, NewDiaryEntry};
use sqlx::{PgPool, Pool, Postgres};

/// Repository for diary entries in PostgreSQL.
///
/// Every method runs a single statement on a pooled connection. Listing
/// queries carry no `ORDER BY`, so row order is whatever the store returns.
#[derive(Clone)]
pub struct DiaryRepository {
    pool: Pool<Postgres>,
}

impl DiaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an entry. The owner is not checked for existence.
    pub async fn create(&self, entry: &NewDiaryEntry) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO diary (user_id, title, diary_user)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(entry.user_id)
        .bind(&entry.title)
        .bind(&entry.body)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// All entries owned by `user_id`. Empty when there are none.
    pub async fn list_by_owner(&self, user_id: i64) -> Result<Vec<DiaryEntry>, AppError> {
        let rows = sqlx::query_as::<_, DiaryRow>(
            r#"
            SELECT id_diary, user_id, title, diary_user, create_at, update_at
            FROM diary
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Entries with the given id, as a list (zero or one element).
    pub async fn list_by_id(&self, id_diary: i64) -> Result<Vec<DiaryEntry>, AppError> {
        let rows = sqlx::query_as::<_, DiaryRow>(
            r#"
            SELECT id_diary, user_id, title, diary_user, create_at, update_at
            FROM diary
            WHERE id_diary = $1
            "#,
        )
        .bind(id_diary)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update title and body where both id and owner match.
    ///
    /// Returns the number of rows touched; zero is not an error.
    pub async fn update(&self, update: &DiaryUpdate) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE diary
            SET title = $1, diary_user = $2, update_at = NOW()
            WHERE id_diary = $3 AND user_id = $4
            "#,
        )
        .bind(&update.title)
        .bind(&update.body)
        .bind(update.id_diary)
        .bind(update.user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let rows = result.rows_affected();
        if rows == 0 {
            tracing::debug!(
                id_diary = update.id_diary,
                user_id = update.user_id,
                "Update matched no rows"
            );
        }
        Ok(rows)
    }

    /// Delete by id, without an owner check. Returns the number of rows removed.
    pub async fn delete_by_id(&self, id_diary: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM diary WHERE id_diary = $1")
            .bind(id_diary)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let rows = result.rows_affected();
        tracing::debug!(id_diary, rows, "Deleted diary entry");
        Ok(rows)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct DiaryRow {
    id_diary: i64,
    user_id: i64,
    title: String,
    diary_user: String,
    create_at: DateTime<Utc>,
    update_at: DateTime<Utc>,
}

impl From<DiaryRow> for DiaryEntry {
    fn from(row: DiaryRow) -> Self {
        DiaryEntry {
            id_diary: row.id_diary,
            user_id: row.user_id,
            title: row.title,
            diary_user: row.diary_user,
            create_at: row.create_at,
            update_at: row.update_at,
        }
    }
}
