use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::AppError};

use super::model::{Link, LinkRequest};

#[axum::debug_handler]
pub async fn list_links(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let links = Link::list(&state.pool).await?;
    Ok(Json(links))
}

#[axum::debug_handler]
pub async fn create_link(
    State(state): State<AppState>,
    Json(req): Json<LinkRequest>,
) -> Result<impl IntoResponse, AppError> {
    let fields = req.validate()?;
    let link = Link::create(&state.pool, fields).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

#[axum::debug_handler]
pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<LinkRequest>,
) -> Result<impl IntoResponse, AppError> {
    let fields = req.validate()?;
    match Link::update(&state.pool, &id, fields).await? {
        Some(link) => Ok(Json(link)),
        None => Err(AppError::NotFound("Link")),
    }
}

#[axum::debug_handler]
pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if Link::delete(&state.pool, &id).await? {
        Ok(Json(serde_json::json!({ "success": true })))
    } else {
        Err(AppError::NotFound("Link"))
    }
}
