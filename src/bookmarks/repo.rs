use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Bookmark record. `owner_id` is set at creation and immutable after.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

// Every statement below create is scoped by owner_id as well as id, so a
// bookmark owned by someone else behaves exactly like a missing row.
impl Bookmark {
    pub async fn create(
        db: &PgPool,
        owner_id: Uuid,
        title: &str,
        link: &str,
        description: Option<&str>,
    ) -> Result<Bookmark, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (owner_id, title, link, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, title, link, description, created_at, updated_at
            "#,
        )
        .bind(owner_id)
        .bind(title)
        .bind(link)
        .bind(description)
        .fetch_one(db)
        .await
    }

    pub async fn list_by_owner(
        db: &PgPool,
        owner_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Bookmark>, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, owner_id, title, link, description, created_at, updated_at
            FROM bookmarks
            WHERE owner_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    pub async fn find(
        db: &PgPool,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Bookmark>, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, owner_id, title, link, description, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(db)
        .await
    }

    /// Partial update; returns `None` when the row is absent or owned by
    /// another user.
    pub async fn update(
        db: &PgPool,
        owner_id: Uuid,
        id: Uuid,
        title: Option<&str>,
        link: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Bookmark>, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            UPDATE bookmarks
            SET title = COALESCE($3, title),
                link = COALESCE($4, link),
                description = COALESCE($5, description),
                updated_at = now()
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, title, link, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(title)
        .bind(link)
        .bind(description)
        .fetch_optional(db)
        .await
    }

    /// Returns whether a row was deleted.
    pub async fn delete(db: &PgPool, owner_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
