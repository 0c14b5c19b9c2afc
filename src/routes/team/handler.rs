use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::AppError};

use super::model::{TeamMember, TeamMemberRequest};

#[axum::debug_handler]
pub async fn list_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = TeamMember::list(&state.pool).await?;
    Ok(Json(members))
}

#[axum::debug_handler]
pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<TeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let fields = req.validate()?;
    let member = TeamMember::create(&state.pool, fields).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[axum::debug_handler]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let fields = req.validate()?;
    match TeamMember::update(&state.pool, &id, fields).await? {
        Some(member) => Ok(Json(member)),
        None => Err(AppError::NotFound("Team member")),
    }
}

#[axum::debug_handler]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if TeamMember::delete(&state.pool, &id).await? {
        Ok(Json(serde_json::json!({ "success": true })))
    } else {
        Err(AppError::NotFound("Team member"))
    }
}
