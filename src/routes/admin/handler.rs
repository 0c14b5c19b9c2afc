use axum::{
    Extension, Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::{AppState, error::AppError, utils::Claims};

use super::model::{
    LINKINBIO_CACHE_KEY, LINKINBIO_SNAPSHOT, TEAM_CACHE_KEY, TEAM_SNAPSHOT, read_collection,
    write_collection,
};

// The cached blob is already JSON text, so it goes out as the raw body
// rather than through a serialize round-trip.

#[axum::debug_handler]
pub async fn read_team(State(state): State<AppState>) -> impl IntoResponse {
    let body = read_collection(&state.redis, TEAM_CACHE_KEY, TEAM_SNAPSHOT).await;
    ([(header::CONTENT_TYPE, "application/json")], body)
}

#[axum::debug_handler]
pub async fn read_linkinbio(State(state): State<AppState>) -> impl IntoResponse {
    let body = read_collection(&state.redis, LINKINBIO_CACHE_KEY, LINKINBIO_SNAPSHOT).await;
    ([(header::CONTENT_TYPE, "application/json")], body)
}

#[axum::debug_handler]
pub async fn write_team(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Bulk team update by {}", claims.sub);
    write_collection(&state.redis, TEAM_CACHE_KEY, payload.to_string()).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

#[axum::debug_handler]
pub async fn write_linkinbio(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Bulk linkinbio update by {}", claims.sub);
    write_collection(&state.redis, LINKINBIO_CACHE_KEY, payload.to_string()).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
