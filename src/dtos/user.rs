//! User DTOs - Data Transfer Objects per utenti

use crate::entities::User;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    /// Username ammessi: lettere, cifre e underscore
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDTO {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        // la password non viene mai esposta al client!!!
        Self {
            id: value.id,
            email: value.email,
            username: value.username,
            image_url: value.image_url,
            header_image_url: value.header_image_url,
            bio: value.bio,
            location: value.location,
        }
    }
}

/// Pagina profilo: dati utente più i contatori delle relazioni
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserProfileDTO {
    #[serde(flatten)]
    pub user: UserDTO,
    pub messages_count: i64,
    pub followers_count: i64,
    pub following_count: i64,
    pub likes_count: i64,
    /// true se l'utente che fa la richiesta segue questo profilo
    pub is_followed_by_me: bool,
}

/// DTO per creare un nuovo utente (senza id).
/// `password` deve già contenere l'hash, la repository lo salva così com'è
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateUserDTO {
    pub email: String,
    pub username: String,
    pub password: String,
    pub image_url: Option<String>,
}

impl CreateUserDTO {
    pub fn new(email: &str, username: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            image_url: None,
        }
    }
}

/// Body della richiesta di registrazione
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct SignupDTO {
    #[validate(
        length(min = 1, max = 30, message = "Username must be between 1 and 30 characters"),
        regex(path = *USERNAME_REGEX, message = "Username can only contain letters, digits and underscores")
    )]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
}

/// DTO per aggiornare il profilo (solo i campi `Some(_)` vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateUserDTO {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(
        length(min = 1, max = 30, message = "Username must be between 1 and 30 characters"),
        regex(path = *USERNAME_REGEX, message = "Username can only contain letters, digits and underscores")
    )]
    pub username: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(url(message = "Header image URL must be a valid URL"))]
    pub header_image_url: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,
}
