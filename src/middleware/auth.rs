use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    AppState,
    utils::{ADMIN_SUBJECT, AUTH_COOKIE, clear_session_cookie, verify_session_token},
};

/// Route guard for the administrative surface. Reads the session cookie,
/// verifies the token, and stashes the claims in request extensions for the
/// handler. Any failure ends the request with a redirect to the site root;
/// a bad token additionally gets its cookie cleared. No reason is disclosed.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = match jar.get(AUTH_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Redirect::to("/").into_response(),
    };

    match verify_session_token(&token, &state.config) {
        Ok(claims) if claims.sub == ADMIN_SUBJECT => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        _ => (
            [(header::SET_COOKIE, clear_session_cookie(&state.config))],
            Redirect::to("/"),
        )
            .into_response(),
    }
}
