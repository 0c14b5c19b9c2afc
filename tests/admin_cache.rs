mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{admin_cookie, body_json, send, test_app};

#[tokio::test]
async fn unreachable_cache_degrades_to_the_bundled_team_snapshot() {
    let app = test_app();
    let response = send(&app, "GET", "/api/admin/team", Some(&admin_cookie()), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = body_json(response).await;
    let members = body.as_array().expect("snapshot is an array");
    assert!(!members.is_empty());
    assert!(members.iter().all(|m| m["group"].is_string()));
}

#[tokio::test]
async fn unreachable_cache_degrades_to_the_bundled_link_snapshot() {
    let app = test_app();
    let response = send(
        &app,
        "GET",
        "/api/admin/linkinbio",
        Some(&admin_cookie()),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let links = body.as_array().expect("snapshot is an array");
    assert!(!links.is_empty());
    assert!(links.iter().all(|l| l["url"].is_string()));
}

#[tokio::test]
async fn bulk_write_fails_loudly_when_the_cache_is_down() {
    let app = test_app();
    let response = send(
        &app,
        "POST",
        "/api/admin/linkinbio",
        Some(&admin_cookie()),
        Some(json!([{ "id": "l1", "title": "X", "url": "https://x.test", "position": 1 }])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "Internal server error");
}

/// The cache-backed path and the relational CRUD path are independent copies
/// of the data. A CRUD write attempt changes nothing on this endpoint.
#[tokio::test]
async fn cache_backed_read_is_unaffected_by_crud_writes() {
    let app = test_app();
    let cookie = admin_cookie();

    let before = body_json(send(&app, "GET", "/api/admin/team", Some(&cookie), None).await).await;

    let _ = send(
        &app,
        "POST",
        "/api/team",
        Some(&cookie),
        Some(json!({ "name": "New Member", "role": "Member", "group": "Board Members" })),
    )
    .await;

    let after = body_json(send(&app, "GET", "/api/admin/team", Some(&cookie), None).await).await;
    assert_eq!(before, after);
}

mod live_cache {
    //! Read-through semantics against a real Redis, pointed at by
    //! TEST_REDIS_URL. The divergence test also needs a live Postgres at
    //! TEST_DATABASE_URL. Kept out of the default run.

    use std::sync::Arc;

    use axum::http::StatusCode;
    use redis::AsyncCommands;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    use site_backend::{AppState, router::build_router};

    use crate::common::{admin_cookie, body_json, send, test_config};

    fn redis_url() -> String {
        std::env::var("TEST_REDIS_URL").expect("TEST_REDIS_URL must be set")
    }

    fn cache_app(redis_url: &str, pool: sqlx::PgPool) -> axum::Router {
        let mut config = test_config();
        config.redis_url = redis_url.to_string();
        let redis = redis::Client::open(redis_url).expect("redis client construction");
        build_router(AppState {
            pool,
            config,
            redis: Arc::new(redis),
        })
    }

    fn lazy_pool() -> sqlx::PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://postgres@127.0.0.1:1/site_test")
            .expect("lazy pool construction must not fail")
    }

    async fn del_key(url: &str, key: &str) {
        let client = redis::Client::open(url).expect("redis client construction");
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .expect("live Redis must be reachable");
        let _: () = conn.del(key).await.expect("key deletes");
    }

    #[tokio::test]
    #[ignore = "requires a live Redis at TEST_REDIS_URL"]
    async fn miss_seeds_the_key_and_later_reads_return_the_cached_blob() {
        let url = redis_url();
        del_key(&url, "linkinbio").await;
        let app = cache_app(&url, lazy_pool());
        let cookie = admin_cookie();

        // First read after deletion: a confirmed miss, served from the
        // bundled snapshot and seeded into the key.
        let first =
            body_json(send(&app, "GET", "/api/admin/linkinbio", Some(&cookie), None).await).await;
        assert!(first.as_array().is_some_and(|l| !l.is_empty()));

        // Bulk-write a replacement blob; subsequent reads return it, not the
        // snapshot.
        let blob = json!([
            { "id": "l9", "title": "Replaced", "url": "https://r.test", "position": 1 }
        ]);
        let written = send(
            &app,
            "POST",
            "/api/admin/linkinbio",
            Some(&cookie),
            Some(blob.clone()),
        )
        .await;
        assert_eq!(written.status(), StatusCode::OK);

        let second =
            body_json(send(&app, "GET", "/api/admin/linkinbio", Some(&cookie), None).await).await;
        assert_eq!(second, blob);
    }

    #[tokio::test]
    #[ignore = "requires live Redis (TEST_REDIS_URL) and Postgres (TEST_DATABASE_URL)"]
    async fn bulk_written_blob_is_not_disturbed_by_a_crud_create() {
        let url = redis_url();
        let db = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&db)
            .await
            .expect("live Postgres must be reachable");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations apply");
        let app = cache_app(&url, pool);
        let cookie = admin_cookie();

        let blob = json!([{
            "id": "m9",
            "name": "Cached Only",
            "role": "Member",
            "imageUrl": null,
            "linkedinUrl": null,
            "group": "Board Members",
            "displayOrder": 1
        }]);
        let written = send(&app, "POST", "/api/admin/team", Some(&cookie), Some(blob.clone())).await;
        assert_eq!(written.status(), StatusCode::OK);

        // The per-record CRUD path writes to the relational store only; the
        // cache key must not move.
        let created = send(
            &app,
            "POST",
            "/api/team",
            Some(&cookie),
            Some(json!({ "name": "Store Only", "role": "Member", "group": "divergence-group" })),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let read = body_json(send(&app, "GET", "/api/admin/team", Some(&cookie), None).await).await;
        assert_eq!(read, blob);
    }
}
