//! Integration tests per gli endpoints di autenticazione
//!
//! Test per:
//! - POST /auth/signup
//! - POST /auth/login
//!
//! Questi test usano `#[sqlx::test]` che:
//! - Crea automaticamente un database di test isolato
//! - Applica le migrations da `migrations/`
//! - Applica i fixtures specificati da `fixtures/`

mod common;

#[cfg(test)]
mod auth_tests {
    use super::common::*;
    use axum_test::http::HeaderName;
    use serde_json::json;
    use sqlx::SqlitePool;

    // ============================================================
    // Test per POST /auth/signup - signup
    // ============================================================

    #[sqlx::test]
    async fn test_signup_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/auth/signup")
            .json(&json!({
                "username": "random",
                "email": "random1@test.com",
                "password": "password1",
                "image_url": "http://wxwex.sdx.com/pic.png"
            }))
            .await;

        response.assert_status_ok();
        let user: serde_json::Value = response.json();
        assert_eq!(user["username"], "random");
        assert_eq!(user["email"], "random1@test.com");
        assert!(user.get("id").is_some());
        assert!(user.get("password").is_none(), "Password must never be exposed");
        Ok(())
    }

    #[sqlx::test]
    async fn test_signup_default_image(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/auth/signup")
            .json(&json!({
                "username": "random",
                "email": "random1@test.com",
                "password": "password1"
            }))
            .await;

        response.assert_status_ok();
        let user: serde_json::Value = response.json();
        assert_eq!(user["image_url"], "/static/images/default-pic.png");
        Ok(())
    }

    #[sqlx::test]
    async fn test_signup_missing_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // manca la password: il JSON non si deserializza nel DTO
        let response = server
            .post("/auth/signup")
            .json(&json!({
                "username": "random",
                "email": "random1@test.com"
            }))
            .await;

        response.assert_status_unprocessable_entity();
        Ok(())
    }

    #[sqlx::test]
    async fn test_signup_invalid_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/auth/signup")
            .json(&json!({
                "username": "with spaces",
                "email": "random1@test.com",
                "password": "password1"
            }))
            .await;
        response.assert_status_bad_request();

        let response = server
            .post("/auth/signup")
            .json(&json!({
                "username": "random",
                "email": "random1@test.com",
                "password": "abc"
            }))
            .await;
        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_signup_duplicate_username(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/auth/signup")
            .json(&json!({
                "username": "alice",
                "email": "alice2@test.com",
                "password": "password1"
            }))
            .await;

        response.assert_status_conflict();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_signup_duplicate_email(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/auth/signup")
            .json(&json!({
                "username": "alice2",
                "email": "alice@test.com",
                "password": "password1"
            }))
            .await;

        response.assert_status_conflict();
        Ok(())
    }

    // ============================================================
    // Test per POST /auth/login - login
    // ============================================================

    #[sqlx::test]
    async fn test_login_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // Prima registriamo un nuovo utente
        server
            .post("/auth/signup")
            .json(&json!({
                "username": "logintest",
                "email": "login@test.com",
                "password": "TestLogin123"
            }))
            .await
            .assert_status_ok();

        // Poi facciamo login con le stesse credenziali
        let response = server
            .post("/auth/login")
            .json(&json!({
                "username": "logintest",
                "password": "TestLogin123"
            }))
            .await;

        response.assert_status_ok();

        let headers = response.headers();
        assert!(
            headers.get("set-cookie").is_some(),
            "Set-Cookie header should be present"
        );
        let auth_header = headers
            .get("authorization")
            .expect("Authorization header should be present")
            .to_str()
            .unwrap()
            .to_string();
        assert!(
            auth_header.starts_with("Bearer "),
            "Authorization should start with 'Bearer '"
        );

        // il token restituito funziona sulle route protette
        let me: serde_json::Value = response.json();
        let profile = server
            .get(&format!("/users/{}", me["id"]))
            .add_header(HeaderName::from_static("authorization"), auth_header)
            .await;
        profile.assert_status_ok();
        Ok(())
    }

    #[sqlx::test]
    async fn test_login_wrong_password(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .post("/auth/signup")
            .json(&json!({
                "username": "logintest",
                "email": "login@test.com",
                "password": "TestLogin123"
            }))
            .await
            .assert_status_ok();

        let response = server
            .post("/auth/login")
            .json(&json!({
                "username": "logintest",
                "password": "wrongpassword"
            }))
            .await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_nonexistent_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/auth/login")
            .json(&json!({
                "username": "nonexistent",
                "password": "password123"
            }))
            .await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_unhashed_password(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // nei fixtures le password non sono hash bcrypt
        let response = server
            .post("/auth/login")
            .json(&json!({
                "username": "alice",
                "password": "HASHED_PASSWORD1"
            }))
            .await;

        response.assert_status_unauthorized();
        Ok(())
    }

    // ============================================================
    // Middleware di autenticazione
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_protected_route_without_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/users/1").await;

        response.assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_protected_route_with_invalid_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/users/1")
            .add_header(
                HeaderName::from_static("authorization"),
                "Bearer invalid_token_here",
            )
            .await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_protected_route_with_deleted_user_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // token valido ma per un utente che non esiste
        let response = server
            .get("/users/1")
            .add_header(HeaderName::from_static("authorization"), bearer(999, "ghost"))
            .await;

        response.assert_status_unauthorized();
        Ok(())
    }
}
