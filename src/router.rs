use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{
    AppState,
    middleware::{log_errors, require_admin},
    routes,
};

/// Routes reachable without a session: login/logout, the public read
/// endpoints, and the newsletter signup.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/team", get(routes::team::list_members))
        .route("/linkinbio", get(routes::linkinbio::list_links))
        .route("/subscribe", post(routes::subscribe::subscribe))
}

/// Everything that mutates content, plus the cache-backed admin endpoints.
/// The guard redirects to the site root before any of these handlers run.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/team", post(routes::team::create_member))
        .route("/team/{id}", put(routes::team::update_member))
        .route("/team/{id}", delete(routes::team::delete_member))
        .route("/linkinbio", post(routes::linkinbio::create_link))
        .route("/linkinbio/{id}", put(routes::linkinbio::update_link))
        .route("/linkinbio/{id}", delete(routes::linkinbio::delete_link))
        .route("/admin/team", get(routes::admin::read_team))
        .route("/admin/team", post(routes::admin::write_team))
        .route("/admin/linkinbio", get(routes::admin::read_linkinbio))
        .route("/admin/linkinbio", post(routes::admin::write_linkinbio))
        .layer(axum::middleware::from_fn_with_state(state, require_admin))
}

/// Assemble the full application router. Shared with the integration tests,
/// which drive it directly without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()));

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
