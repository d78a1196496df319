//! User services - Profili utente e relazioni follower/seguito

use crate::core::{AppError, AppState};
use crate::dtos::{MessageDTO, UpdateUserDTO, UserDTO, UserProfileDTO, UserSearchQuery};
use crate::entities::{Follows, User};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use axum_macros::debug_handler;
use futures::try_join;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Verifica che l'utente esista, altrimenti 404
async fn require_user(state: &AppState, user_id: &i64) -> Result<User, AppError> {
    state.user.read(user_id).await?.ok_or_else(|| {
        warn!("User {} not found", user_id);
        AppError::not_found("User not found")
    })
}

#[instrument(skip(state), fields(search = %params.search))]
pub async fn search_user_with_username(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserSearchQuery>, // query params /users?search=username
) -> Result<Json<Vec<UserDTO>>, AppError> {
    debug!("Searching users with username prefix");
    let users = state.user.search_by_username_partial(&params.search).await?;
    info!("Found {} users matching search criteria", users.len());
    Ok(Json(users.into_iter().map(UserDTO::from).collect()))
}

#[instrument(skip(state, current_user), fields(user_id = %user_id, current_user_id = %current_user.id))]
pub async fn get_user_profile(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>, // parametro dalla URL /users/{user_id}
) -> Result<Json<UserProfileDTO>, AppError> {
    debug!("Fetching user profile");
    let user = require_user(&state, &user_id).await?;

    // contatori indipendenti: query in parallelo sul pool
    let (messages_count, followers_count, following_count, likes_count, is_followed_by_me) = try_join!(
        state.msg.count_by_user_id(&user_id),
        state.user.count_followers(&user_id),
        state.user.count_following(&user_id),
        state.likes.count_by_user_id(&user_id),
        state.user.is_following(&current_user.id, &user_id),
    )?;

    Ok(Json(UserProfileDTO {
        user: UserDTO::from(user),
        messages_count,
        followers_count,
        following_count,
        likes_count,
        is_followed_by_me,
    }))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id))]
pub async fn update_my_profile(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<UpdateUserDTO>,
) -> Result<Json<UserDTO>, AppError> {
    debug!("Updating profile");
    body.validate()?;
    let updated = state.user.update(&current_user.id, &body).await?;
    info!("Profile updated");
    Ok(Json(UserDTO::from(updated)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id, username = %current_user.username))]
pub async fn delete_my_account(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<impl IntoResponse, AppError> {
    info!("User account deletion initiated");
    // messaggi, follows e likes vengono cancellati in cascata dal database
    state.user.delete(&current_user.id).await?;

    // cookie con Max-Age=0 per forzare il logout lato client
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_static("token=; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age=0"),
    );

    info!("Account deleted successfully");
    Ok((StatusCode::OK, headers, "Account deleted successfully"))
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_following(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<UserDTO>>, AppError> {
    require_user(&state, &user_id).await?;
    let users = state.user.find_following(&user_id).await?;
    debug!("User follows {} users", users.len());
    Ok(Json(users.into_iter().map(UserDTO::from).collect()))
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_followers(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<UserDTO>>, AppError> {
    require_user(&state, &user_id).await?;
    let users = state.user.find_followers(&user_id).await?;
    debug!("User has {} followers", users.len());
    Ok(Json(users.into_iter().map(UserDTO::from).collect()))
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_user_messages(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<MessageDTO>>, AppError> {
    require_user(&state, &user_id).await?;
    let messages = state.msg.find_many_by_user_id(&user_id).await?;
    Ok(Json(messages.into_iter().map(MessageDTO::from).collect()))
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_user_likes(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<MessageDTO>>, AppError> {
    require_user(&state, &user_id).await?;
    let messages = state.msg.find_liked_by_user(&user_id).await?;
    Ok(Json(messages.into_iter().map(MessageDTO::from).collect()))
}

#[debug_handler]
#[instrument(skip(state, current_user), fields(follower = %current_user.id, followed = %user_id))]
pub async fn follow_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserDTO>, AppError> {
    // 1. Non si può seguire se stessi -> BAD_REQUEST
    // 2. L'utente da seguire deve esistere -> NOT_FOUND
    // 3. Se la relazione esiste già la chiave primaria fallisce -> CONFLICT
    if current_user.id == user_id {
        warn!("User tried to follow themselves");
        return Err(AppError::bad_request("You cannot follow yourself"));
    }

    let followed = require_user(&state, &user_id).await?;

    state
        .follows
        .create(&Follows {
            user_being_followed_id: user_id,
            user_following_id: current_user.id,
        })
        .await?;

    info!("Now following user {}", user_id);
    Ok(Json(UserDTO::from(followed)))
}

#[debug_handler]
#[instrument(skip(state, current_user), fields(follower = %current_user.id, followed = %user_id))]
pub async fn unfollow_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.user.is_following(&current_user.id, &user_id).await? {
        warn!("Unfollow requested but no follow relation exists");
        return Err(AppError::not_found("You are not following this user"));
    }

    state.follows.delete(&(user_id, current_user.id)).await?;

    info!("Stopped following user {}", user_id);
    Ok(StatusCode::NO_CONTENT)
}
