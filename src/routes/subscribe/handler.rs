use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    AppState,
    error::{AppError, is_unique_violation},
};

use super::model::{SubscribeRequest, Subscriber};

#[axum::debug_handler]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = req.validate()?;

    match Subscriber::create(&state.pool, &email).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({ "success": true })),
        )),
        Err(e) if is_unique_violation(&e) => {
            Err(AppError::Duplicate("This email is already subscribed"))
        }
        Err(e) => Err(AppError::Storage(e)),
    }
}
