use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    pub position: i32,
}

#[derive(Debug, Deserialize)]
pub struct LinkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug)]
pub struct LinkFields {
    pub title: String,
    pub url: String,
}

fn require(value: Option<String>, message: &'static str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

impl LinkRequest {
    pub fn validate(self) -> Result<LinkFields, AppError> {
        Ok(LinkFields {
            title: require(self.title, "Title is required")?,
            url: require(self.url, "Url is required")?,
        })
    }
}

impl Link {
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Link>(
            "SELECT id, title, url, position FROM linkinbio_links ORDER BY position",
        )
        .fetch_all(pool)
        .await
    }

    /// Position is insertion order, assigned in the same statement.
    pub async fn create(pool: &PgPool, fields: LinkFields) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO linkinbio_links (id, title, url, position)
            VALUES ($1, $2, $3, (SELECT COALESCE(MAX(position), 0) + 1 FROM linkinbio_links))
            RETURNING id, title, url, position
            "#,
        )
        .bind(&id)
        .bind(&fields.title)
        .bind(&fields.url)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: LinkFields,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Link>(
            r#"
            UPDATE linkinbio_links
            SET title = $2, url = $3
            WHERE id = $1
            RETURNING id, title, url, position
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.url)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM linkinbio_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
