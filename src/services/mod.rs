//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod message;
pub mod user;

// Re-exports per facilitare l'import
pub use auth::{LoginDTO, login, signup, signup_user};
pub use message::{create_message, delete_message, get_message, get_timeline, toggle_like};
pub use user::{
    delete_my_account, follow_user, get_user_profile, list_followers, list_following,
    list_user_likes, list_user_messages, search_user_with_username, unfollow_user,
    update_my_profile,
};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Warbler is running!")
}
