//! Auth services - Gestione autenticazione e registrazione utenti

use crate::core::auth::TOKEN_DURATION_HOURS;
use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, SignupDTO, UserDTO};
use crate::entities::User;
use crate::repositories::{Create, UserRepository};
use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// DTO per il login (solo username e password)
#[derive(serde::Deserialize, serde::Serialize, Debug)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

/// Registra un nuovo utente: valida i dati, calcola l'hash bcrypt della password e salva.
/// Username o email già usati -> 409 (violazione di unicità dal database)
#[instrument(skip(users, data), fields(username = %data.username))]
pub async fn signup_user(users: &UserRepository, data: &SignupDTO) -> Result<User, AppError> {
    data.validate()?;

    let password_hash = User::hash_password(&data.password)?;

    let new_user = CreateUserDTO {
        email: data.email.clone(),
        username: data.username.clone(),
        password: password_hash,
        image_url: data.image_url.clone(),
    };

    let created = users.create(&new_user).await.map_err(|e| {
        warn!("Signup failed: {}", e);
        AppError::from(e)
    })?;

    info!("New user registered with id {}", created.id);
    Ok(created)
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupDTO>, // JSON body
) -> Result<Json<UserDTO>, AppError> {
    debug!("Signup request");
    let created = signup_user(&state.user, &body).await?;
    Ok(Json(UserDTO::from(created)))
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Cercare l'utente per username e verificare la password contro l'hash bcrypt
    // 2. Se l'utente non esiste o la password è sbagliata, UNAUTHORIZED (stesso messaggio nei due casi)
    // 3. Generare il token JWT e restituirlo sia come cookie HttpOnly sia nell'header Authorization
    let user = match state.user.authenticate(&body.username, &body.password).await? {
        Some(user) => user,
        None => {
            warn!("Invalid credentials");
            return Err(AppError::unauthorized("Invalid username or password"));
        }
    };

    let token = encode_jwt(user.username.clone(), user.id, &state.jwt_secret)?;

    let cookie_value = format!(
        "token={}; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age={}",
        token,
        TOKEN_DURATION_HOURS * 60 * 60
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie_value)
            .map_err(|_| AppError::internal_server_error("Invalid token characters"))?,
    );
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::internal_server_error("Invalid token characters"))?,
    );

    info!("User {} logged in", user.id);
    Ok((StatusCode::OK, headers, Json(UserDTO::from(user))))
}
