//! Integration tests for live sessions, session categories, public live
//! events, and subscriptions.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth, seed_and_login,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_category(pool: &PgPool, admin_token: &str) -> i64 {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/session-categories",
        admin_token,
        serde_json::json!({ "name": "Preparacao de cena", "description": "Trabalho de texto" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn book_session(
    pool: &PgPool,
    actor_token: &str,
    tutor_id: i64,
    category_id: i64,
) -> serde_json::Value {
    let body = serde_json::json!({
        "tutor_id": tutor_id,
        "category_id": category_id,
        "scheduled_at": "2099-06-01T14:00:00Z",
        "duration_mins": 45,
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/sessions",
        actor_token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Live sessions
// ---------------------------------------------------------------------------

/// An actor books a session; both participants see it under /mine.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_book_session(pool: PgPool) {
    let (_admin, admin_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;
    let (tutor, tutor_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "rui", "tutor").await;
    let (_actor, actor_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "ana", "actor").await;

    let category_id = seed_category(&pool, &admin_token).await;
    let session = book_session(&pool, &actor_token, tutor.id, category_id).await;

    assert_eq!(session["status"], "scheduled");
    assert_eq!(session["tutor_id"], tutor.id);

    for token in [&actor_token, &tutor_token] {
        let mine = body_json(
            get_auth(
                common::build_test_app(pool.clone()),
                "/api/sessions/mine",
                token,
            )
            .await,
        )
        .await;
        assert_eq!(mine["data"].as_array().unwrap().len(), 1);
    }
}

/// Booking rejects past slots, non-tutors as hosts, and unknown categories.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_book_session_validation(pool: PgPool) {
    let (_admin, admin_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;
    let (tutor, _) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "rui", "tutor").await;
    let (other_actor, _) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "bia", "actor").await;
    let (_actor, actor_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "ana", "actor").await;

    let category_id = seed_category(&pool, &admin_token).await;

    // Past slot.
    let past = serde_json::json!({
        "tutor_id": tutor.id,
        "category_id": category_id,
        "scheduled_at": "2020-01-01T14:00:00Z",
        "duration_mins": 45,
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/sessions",
        &actor_token,
        past,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Host is not a tutor.
    let not_tutor = serde_json::json!({
        "tutor_id": other_actor.id,
        "category_id": category_id,
        "scheduled_at": "2099-06-01T14:00:00Z",
        "duration_mins": 45,
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/sessions",
        &actor_token,
        not_tutor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown category.
    let bad_category = serde_json::json!({
        "tutor_id": tutor.id,
        "category_id": 999,
        "scheduled_at": "2099-06-01T14:00:00Z",
        "duration_mins": 45,
    });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/sessions",
        &actor_token,
        bad_category,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The session tutor completes a session; end states are terminal.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_session_status_lifecycle(pool: PgPool) {
    let (_admin, admin_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;
    let (tutor, tutor_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "rui", "tutor").await;
    let (_actor, actor_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "ana", "actor").await;

    let category_id = seed_category(&pool, &admin_token).await;
    let session = book_session(&pool, &actor_token, tutor.id, category_id).await;
    let id = session["id"].as_i64().unwrap();

    // The actor may not mark the session completed.
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/sessions/{id}/status"),
        &actor_token,
        serde_json::json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/sessions/{id}/status"),
        &tutor_token,
        serde_json::json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "completed");

    // Completed is terminal; cancelling now conflicts.
    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/sessions/{id}/status"),
        &tutor_token,
        serde_json::json!({ "status": "cancelled" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Either participant may cancel a scheduled session.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_actor_can_cancel(pool: PgPool) {
    let (_admin, admin_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;
    let (tutor, _) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "rui", "tutor").await;
    let (_actor, actor_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "ana", "actor").await;

    let category_id = seed_category(&pool, &admin_token).await;
    let session = book_session(&pool, &actor_token, tutor.id, category_id).await;
    let id = session["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/sessions/{id}/status"),
        &actor_token,
        serde_json::json!({ "status": "cancelled" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "cancelled");
}

// ---------------------------------------------------------------------------
// Live events
// ---------------------------------------------------------------------------

/// Guests see only published events; admins see everything and publish
/// via partial update.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_event_publishing(pool: PgPool) {
    let (_admin, admin_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;
    let (tutor, _) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "rui", "tutor").await;

    let body = serde_json::json!({
        "title": "Masterclass de self-tape",
        "description": "Enquadramento, luz e som.",
        "host_tutor_id": tutor.id,
        "starts_at": "2099-03-01T19:00:00Z",
        "stream_url": "https://stream.test/masterclass",
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/events",
        &admin_token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let event = body_json(response).await["data"].clone();
    assert_eq!(event["is_published"], false);

    // Unpublished events are invisible to guests.
    let public = body_json(get(common::build_test_app(pool.clone()), "/api/events").await).await;
    assert_eq!(public["data"].as_array().unwrap().len(), 0);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/events/{}", event["id"]),
        &admin_token,
        serde_json::json!({ "is_published": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let public = body_json(get(common::build_test_app(pool), "/api/events").await).await;
    let rows = public["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Masterclass de self-tape");
}

/// Events must be hosted by a tutor.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_event_host_must_be_tutor(pool: PgPool) {
    let (_admin, admin_token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;
    let (actor, _) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "ana", "actor").await;

    let body = serde_json::json!({
        "title": "Falso evento",
        "description": "x",
        "host_tutor_id": actor.id,
        "starts_at": "2099-03-01T19:00:00Z",
    });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/admin/events",
        &admin_token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

/// Subscribe, change plan in place, cancel, and observe the 204 empty state.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_subscription_lifecycle(pool: PgPool) {
    let (_actor, token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "ana", "actor").await;

    // No subscription yet: 204.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/subscriptions/mine",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/subscriptions",
        &token,
        serde_json::json!({ "plan": "basico" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let sub = body_json(response).await["data"].clone();
    assert_eq!(sub["status"], "active");

    // Plan change updates the active row rather than stacking a second one.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/subscriptions",
        &token,
        serde_json::json!({ "plan": "pro" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let changed = body_json(response).await["data"].clone();
    assert_eq!(changed["id"], sub["id"]);
    assert_eq!(changed["plan"], "pro");

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        "/api/subscriptions/mine",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Cancelling again: nothing active, 404.
    let response = delete_auth(
        common::build_test_app(pool.clone()),
        "/api/subscriptions/mine",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/subscriptions/mine",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Unknown plan names are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_plan_rejected(pool: PgPool) {
    let (_actor, token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "ana", "actor").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/subscriptions",
        &token,
        serde_json::json!({ "plan": "diamante" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
