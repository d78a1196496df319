//! Warbler - libreria del server: espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .nest("/users", configure_user_routes(state.clone()))
        .nest("/messages", configure_message_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes di autenticazione (signup, login)
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Configura le routes per profili e relazioni tra utenti
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(search_user_with_username))
        .route("/me", patch(update_my_profile).delete(delete_my_account))
        .route("/{user_id}", get(get_user_profile))
        .route("/{user_id}/following", get(list_following))
        .route("/{user_id}/followers", get(list_followers))
        .route("/{user_id}/messages", get(list_user_messages))
        .route("/{user_id}/likes", get(list_user_likes))
        .route("/{user_id}/follow", post(follow_user).delete(unfollow_user))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes per messaggi, timeline e like
fn configure_message_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(get_timeline).post(create_message))
        .route("/{message_id}", get(get_message).delete(delete_message))
        .route("/{message_id}/like", post(toggle_like))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
