//! HTTP-level integration tests for authentication and admin user
//! management: login, token refresh with rotation, logout, RBAC
//! enforcement, and account lockout.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get_auth, login_user, post_json, post_json_auth, put_json_auth,
    seed_and_login,
};
use sqlx::PgPool;
use palco_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with token, refresh_token, and user info
/// inside the `data` envelope.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser", "actor").await;
    let app = common::build_test_app(pool);

    let auth = login_user(app, &user.email, &password).await;

    assert!(auth["token"].is_string(), "payload must contain token");
    assert!(
        auth["refresh_token"].is_string(),
        "payload must contain refresh_token"
    );
    assert!(auth["expires_in"].is_number());
    assert_eq!(auth["user"]["id"], user.id);
    assert_eq!(auth["user"]["username"], "loginuser");
    assert_eq!(auth["user"]["email"], "loginuser@test.com");
    assert_eq!(auth["user"]["role"], "actor");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (user, _password) = create_test_user(&pool, "wrongpw", "actor").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": user.email, "password": "incorrect_password" });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent email returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inactive", "actor").await;
    UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": user.email, "password": password });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Five consecutive wrong passwords lock the account; the correct password
/// is then rejected with 403 until the lock expires.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_lockout_after_failed_attempts(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "lockme", "actor").await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "email": user.email, "password": "wrong" });
        let response = post_json(app, "/api/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": user.email, "password": password });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh and logout
// ---------------------------------------------------------------------------

/// A valid refresh token returns a new token pair; the old refresh token is
/// revoked (rotation) and cannot be used again.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh_rotates(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "refresher", "actor").await;

    let auth = login_user(common::build_test_app(pool.clone()), &user.email, &password).await;
    let refresh_token = auth["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/auth/refresh",
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let refreshed = body_json(response).await;
    assert!(refreshed["data"]["token"].is_string());
    assert_ne!(refreshed["data"]["refresh_token"], refresh_token);

    // Replaying the original refresh token must fail.
    let replay = post_json(common::build_test_app(pool), "/api/auth/refresh", body).await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes sessions so the refresh token stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "leaver", "actor").await;

    let auth = login_user(common::build_test_app(pool.clone()), &user.email, &password).await;
    let token = auth["token"].as_str().unwrap();
    let refresh_token = auth["refresh_token"].as_str().unwrap();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/auth/logout",
        token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let replay = post_json(common::build_test_app(pool), "/api/auth/refresh", body).await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Admin user management + RBAC
// ---------------------------------------------------------------------------

/// Admin creates a tutor; the new account can log in.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_creates_user(pool: PgPool) {
    let (_admin, token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;

    let body = serde_json::json!({
        "username": "newtutor",
        "email": "newtutor@test.com",
        "password": "sufficiently-long-pw-1",
        "role": "tutor",
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/users",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "newtutor");
    // The hash must never leak through serialization.
    assert!(json["data"].get("password_hash").is_none());

    let auth = login_user(
        common::build_test_app(pool),
        "newtutor@test.com",
        "sufficiently-long-pw-1",
    )
    .await;
    assert_eq!(auth["user"]["role"], "tutor");
}

/// Duplicate email is rejected with 409 via the unique constraint.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_duplicate_email_conflicts(pool: PgPool) {
    let (_admin, token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;
    create_test_user(&pool, "taken", "actor").await;

    let body = serde_json::json!({
        "username": "other",
        "email": "taken@test.com",
        "password": "sufficiently-long-pw-1",
        "role": "actor",
    });
    let response =
        post_json_auth(common::build_test_app(pool), "/api/admin/users", &token, body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Too-short passwords are rejected before any database work.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_weak_password_rejected(pool: PgPool) {
    let (_admin, token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;

    let body = serde_json::json!({
        "username": "weakling",
        "email": "weakling@test.com",
        "password": "short",
        "role": "actor",
    });
    let response =
        post_json_auth(common::build_test_app(pool), "/api/admin/users", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Non-admin callers get 403 from admin endpoints.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_routes_forbidden_for_actor(pool: PgPool) {
    let (_actor, token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "pleb", "actor").await;

    let response = get_auth(common::build_test_app(pool), "/api/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Missing bearer token yields 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_routes_require_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/admin/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Admin deactivates a user; subsequent logins fail. Self-deactivation is
/// rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_deactivates_user(pool: PgPool) {
    let (admin, token) =
        seed_and_login(common::build_test_app(pool.clone()), &pool, "boss", "admin").await;
    let (victim, password) = create_test_user(&pool, "victim", "actor").await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/users/{}/deactivate", victim.id),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "email": victim.email, "password": password });
    let login = post_json(common::build_test_app(pool.clone()), "/api/auth/login", body).await;
    assert_eq!(login.status(), StatusCode::FORBIDDEN);

    let own = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/admin/users/{}/deactivate", admin.id),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(own.status(), StatusCode::BAD_REQUEST);
}
