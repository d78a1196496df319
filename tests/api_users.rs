//! Integration tests per gli endpoints degli utenti
//!
//! Test per:
//! - GET /users?search=username
//! - GET /users/{user_id}
//! - PATCH /users/me, DELETE /users/me
//! - GET /users/{user_id}/following, /followers, /messages, /likes
//! - POST /users/{user_id}/follow, DELETE /users/{user_id}/follow
//!
//! Fixtures: alice (1), bob (2), charlie (3); alice e bob si seguono, charlie segue alice.

mod common;

#[cfg(test)]
mod user_tests {
    use super::common::*;
    use axum_test::http::HeaderName;
    use serde_json::json;
    use sqlx::SqlitePool;
    use warbler::repositories::Read;

    fn auth() -> HeaderName {
        HeaderName::from_static("authorization")
    }

    // ============================================================
    // Ricerca e profilo
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_search_users(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/users")
            .add_query_param("search", "b")
            .add_header(auth(), bearer(1, "alice"))
            .await;

        response.assert_status_ok();
        let users: Vec<serde_json::Value> = response.json();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["username"], "bob");
        assert!(users[0].get("password").is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "follows", "messages", "likes")))]
    async fn test_get_profile(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // charlie guarda il profilo di alice
        let response = server
            .get("/users/1")
            .add_header(auth(), bearer(3, "charlie"))
            .await;

        response.assert_status_ok();
        let profile: serde_json::Value = response.json();
        assert_eq!(profile["username"], "alice");
        assert_eq!(profile["bio"], "ciao, sono alice");
        assert_eq!(profile["messages_count"], 2);
        assert_eq!(profile["followers_count"], 2);
        assert_eq!(profile["following_count"], 1);
        assert_eq!(profile["likes_count"], 1);
        assert_eq!(profile["is_followed_by_me"], true);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_get_profile_of_new_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/users/3")
            .add_header(auth(), bearer(1, "alice"))
            .await;

        response.assert_status_ok();
        let profile: serde_json::Value = response.json();
        assert_eq!(profile["messages_count"], 0);
        assert_eq!(profile["followers_count"], 0);
        assert_eq!(profile["is_followed_by_me"], false);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_get_profile_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/users/999")
            .add_header(auth(), bearer(1, "alice"))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_update_my_profile(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .patch("/users/me")
            .add_header(auth(), bearer(2, "bob"))
            .json(&json!({ "bio": "sono bob", "location": "Roma" }))
            .await;

        response.assert_status_ok();
        let user: serde_json::Value = response.json();
        assert_eq!(user["bio"], "sono bob");
        assert_eq!(user["location"], "Roma");
        assert_eq!(user["username"], "bob");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_update_my_profile_taken_username(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .patch("/users/me")
            .add_header(auth(), bearer(2, "bob"))
            .json(&json!({ "username": "alice" }))
            .await;

        response.assert_status_conflict();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "follows", "messages")))]
    async fn test_delete_my_account(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server
            .delete("/users/me")
            .add_header(auth(), bearer(1, "alice"))
            .await;

        response.assert_status_ok();
        assert!(state.user.read(&1).await?.is_none());
        assert!(state.msg.find_many_by_user_id(&1).await?.is_empty());
        assert!(!state.user.is_following(&2, &1).await?);

        // il token di un account cancellato non vale più
        let response = server
            .get("/users/2")
            .add_header(auth(), bearer(1, "alice"))
            .await;
        response.assert_status_unauthorized();
        Ok(())
    }

    // ============================================================
    // Liste di relazioni
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "follows")))]
    async fn test_list_following_and_followers(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/users/3/following")
            .add_header(auth(), bearer(2, "bob"))
            .await;
        response.assert_status_ok();
        let following: Vec<serde_json::Value> = response.json();
        assert_eq!(following.len(), 1);
        assert_eq!(following[0]["username"], "alice");

        let response = server
            .get("/users/1/followers")
            .add_header(auth(), bearer(2, "bob"))
            .await;
        response.assert_status_ok();
        let followers: Vec<serde_json::Value> = response.json();
        let names: Vec<&str> = followers.iter().filter_map(|u| u["username"].as_str()).collect();
        assert_eq!(names, vec!["bob", "charlie"]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "messages", "likes")))]
    async fn test_list_user_messages_and_likes(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/users/1/messages")
            .add_header(auth(), bearer(2, "bob"))
            .await;
        response.assert_status_ok();
        let messages: Vec<serde_json::Value> = response.json();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["text"], "secondo warble di alice");

        let response = server
            .get("/users/2/likes")
            .add_header(auth(), bearer(1, "alice"))
            .await;
        response.assert_status_ok();
        let liked: Vec<serde_json::Value> = response.json();
        assert_eq!(liked.len(), 1);
        assert_eq!(liked[0]["text"], "primo warble di alice");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_list_of_missing_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/users/999/followers")
            .add_header(auth(), bearer(1, "alice"))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Follow / unfollow
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_follow_user(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server
            .post("/users/2/follow")
            .add_header(auth(), bearer(3, "charlie"))
            .await;

        response.assert_status_ok();
        let followed: serde_json::Value = response.json();
        assert_eq!(followed["username"], "bob");

        assert!(state.user.is_following(&3, &2).await?);
        assert!(state.user.is_followed_by(&2, &3).await?);
        assert!(!state.user.is_following(&2, &3).await?);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "follows")))]
    async fn test_follow_twice_is_conflict(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/users/1/follow")
            .add_header(auth(), bearer(3, "charlie"))
            .await;

        response.assert_status_conflict();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_follow_self_or_missing(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/users/1/follow")
            .add_header(auth(), bearer(1, "alice"))
            .await;
        response.assert_status_bad_request();

        let response = server
            .post("/users/999/follow")
            .add_header(auth(), bearer(1, "alice"))
            .await;
        response.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "follows")))]
    async fn test_unfollow_user(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server
            .delete("/users/1/follow")
            .add_header(auth(), bearer(3, "charlie"))
            .await;
        response.assert_status(axum_test::http::StatusCode::NO_CONTENT);
        assert!(!state.user.is_following(&3, &1).await?);

        // non c'è più niente da togliere
        let response = server
            .delete("/users/1/follow")
            .add_header(auth(), bearer(3, "charlie"))
            .await;
        response.assert_status_not_found();
        Ok(())
    }
}
