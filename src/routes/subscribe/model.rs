use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<String>,
}

impl SubscribeRequest {
    /// Presence plus a minimal shape check; full address validation is the
    /// mail provider's problem.
    pub fn validate(self) -> Result<String, AppError> {
        match self.email {
            Some(email) if !email.trim().is_empty() && email.contains('@') => {
                Ok(email.trim().to_string())
            }
            _ => Err(AppError::Validation("A valid email is required".to_string())),
        }
    }
}

impl Subscriber {
    pub async fn create(pool: &PgPool, email: &str) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        sqlx::query_as::<_, Subscriber>(
            r#"
            INSERT INTO newsletter_subscribers (id, email, created_at)
            VALUES ($1, $2, NOW())
            RETURNING id, email, created_at
            "#,
        )
        .bind(&id)
        .bind(email)
        .fetch_one(pool)
        .await
    }
}
