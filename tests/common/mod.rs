#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use warbler::core::AppState;
use warbler::dtos::CreateUserDTO;
use warbler::entities::User;
use warbler::repositories::{Create, UserRepository};

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool del database di test creato da `#[sqlx::test]`
///
/// # Returns
/// Arc<AppState> configurato con il JWT secret di test
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, JWT_SECRET.to_string()))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = warbler::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT token per testing, valido per 24 ore
pub fn create_test_jwt(user_id: i64, username: &str) -> String {
    warbler::core::encode_jwt(username.to_string(), user_id, JWT_SECRET)
        .expect("Failed to create JWT token")
}

/// Valore dell'header Authorization per l'utente indicato
pub fn bearer(user_id: i64, username: &str) -> String {
    format!("Bearer {}", create_test_jwt(user_id, username))
}

/// Inserisce un utente con password "già hashata" (come nei test del modello)
pub async fn insert_user(
    repo: &UserRepository,
    email: &str,
    username: &str,
    password: &str,
) -> sqlx::Result<User> {
    repo.create(&CreateUserDTO::new(email, username, password)).await
}
