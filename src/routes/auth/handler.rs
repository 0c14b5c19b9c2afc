use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppError,
    utils::{clear_session_cookie, issue_session_token, session_cookie, verify_admin_password},
};

use super::model::{AuthResponse, LoginRequest};

/// Check the submitted secret and, on success, set the session cookie. The
/// 401 body is the same whether the password was wrong or absent.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let candidate = req.password.unwrap_or_default();
    if !verify_admin_password(&state.config, &candidate) {
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_session_token(&state.config)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, session_cookie(&token, &state.config))],
        Json(AuthResponse { success: true }),
    ))
}

/// Overwrite the session cookie with an expired one. The token itself stays
/// valid until its own expiry; there is no server-side revocation.
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_session_cookie(&state.config))],
        Json(AuthResponse { success: true }),
    )
}
