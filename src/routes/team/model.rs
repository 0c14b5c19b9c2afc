use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(rename = "group")]
    pub group_name: String,
    pub display_order: i32,
}

/// Wire shape for create and update. Required fields are optional here so a
/// missing one produces a field-specific 400 instead of a decode failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub group: Option<String>,
}

/// The same request after presence validation.
#[derive(Debug)]
pub struct TeamMemberFields {
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub group_name: String,
}

fn require(value: Option<String>, message: &'static str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

impl TeamMemberRequest {
    pub fn validate(self) -> Result<TeamMemberFields, AppError> {
        Ok(TeamMemberFields {
            name: require(self.name, "Name is required")?,
            role: require(self.role, "Role is required")?,
            image_url: self.image_url,
            linkedin_url: self.linkedin_url,
            group_name: require(self.group, "Group is required")?,
        })
    }
}

impl TeamMember {
    /// Full scan; presentation order is a client concern on this path.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT id, name, role, image_url, linkedin_url, group_name, display_order
            FROM team_members
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Insert with the display order computed in the same statement as
    /// max-within-group plus one. Two concurrent creates in one group can
    /// still both read the same max and end up with equal orders; the value
    /// is a presentation hint, not an identity, so that outcome stands.
    pub async fn create(pool: &PgPool, fields: TeamMemberFields) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        sqlx::query_as::<_, TeamMember>(
            r#"
            INSERT INTO team_members (id, name, role, image_url, linkedin_url, group_name, display_order)
            VALUES (
                $1, $2, $3, $4, $5, $6,
                (SELECT COALESCE(MAX(display_order), 0) + 1 FROM team_members WHERE group_name = $6)
            )
            RETURNING id, name, role, image_url, linkedin_url, group_name, display_order
            "#,
        )
        .bind(&id)
        .bind(&fields.name)
        .bind(&fields.role)
        .bind(&fields.image_url)
        .bind(&fields.linkedin_url)
        .bind(&fields.group_name)
        .fetch_one(pool)
        .await
    }

    /// Full replace of the mutable fields. Id and display order never change
    /// after creation.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: TeamMemberFields,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            r#"
            UPDATE team_members
            SET name = $2, role = $3, image_url = $4, linkedin_url = $5, group_name = $6
            WHERE id = $1
            RETURNING id, name, role, image_url, linkedin_url, group_name, display_order
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.role)
        .bind(&fields.image_url)
        .bind(&fields.linkedin_url)
        .bind(&fields.group_name)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
