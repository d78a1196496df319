//! Message services - Messaggi, timeline e like

use crate::core::{AppError, AppState};
use crate::dtos::{CreateMessageDTO, LikeStatusDTO, MessageDTO, NewMessageDTO, TimelineQuery};
use crate::entities::{Message, User};
use crate::repositories::{Create, DEFAULT_TIMELINE_LIMIT, Delete, Read};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

async fn require_message(state: &AppState, message_id: &i64) -> Result<Message, AppError> {
    state.msg.read(message_id).await?.ok_or_else(|| {
        warn!("Message {} not found", message_id);
        AppError::not_found("Message not found")
    })
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn get_timeline(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<TimelineQuery>,
) -> Result<Json<Vec<MessageDTO>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_TIMELINE_LIMIT);
    if limit <= 0 {
        return Err(AppError::bad_request("Limit must be a positive number"));
    }

    let messages = state.msg.find_timeline(&current_user.id, limit).await?;
    debug!("Timeline contains {} messages", messages.len());
    Ok(Json(messages.into_iter().map(MessageDTO::from).collect()))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id))]
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<NewMessageDTO>,
) -> Result<Json<MessageDTO>, AppError> {
    body.validate()?;

    let message = state
        .msg
        .create(&CreateMessageDTO::new(current_user.id, &body.text))
        .await?;

    info!("Message {} created", message.id);
    Ok(Json(MessageDTO::from(message)))
}

#[instrument(skip(state), fields(message_id = %message_id))]
pub async fn get_message(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<i64>,
) -> Result<Json<MessageDTO>, AppError> {
    let message = require_message(&state, &message_id).await?;
    Ok(Json(MessageDTO::from(message)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id, message_id = %message_id))]
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(message_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let message = require_message(&state, &message_id).await?;

    if message.user_id != current_user.id {
        warn!("User tried to delete a message written by user {}", message.user_id);
        return Err(AppError::forbidden("You can only delete your own messages"));
    }

    state.msg.delete(&message_id).await?;
    info!("Message deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id, message_id = %message_id))]
pub async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(message_id): Path<i64>,
) -> Result<Json<LikeStatusDTO>, AppError> {
    let message = require_message(&state, &message_id).await?;

    if message.user_id == current_user.id {
        warn!("User tried to like their own message");
        return Err(AppError::forbidden("You cannot like your own message"));
    }

    let liked = state.likes.toggle(&current_user.id, &message_id).await?;
    info!("Like toggled, liked = {}", liked);
    Ok(Json(LikeStatusDTO { message_id, liked }))
}
