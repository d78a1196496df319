//! Message DTOs - Data Transfer Objects per messaggi

use crate::entities::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageDTO {
    pub id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
}

impl From<Message> for MessageDTO {
    fn from(value: Message) -> Self {
        Self {
            id: value.id,
            text: value.text,
            timestamp: value.timestamp,
            user_id: value.user_id,
        }
    }
}

/// DTO per creare un nuovo messaggio (senza id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateMessageDTO {
    pub user_id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl CreateMessageDTO {
    /// Messaggio con timestamp impostato all'istante corrente
    pub fn new(user_id: i64, text: &str) -> Self {
        Self {
            user_id,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Body della richiesta POST /messages
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct NewMessageDTO {
    #[validate(length(min = 1, max = 140, message = "Message text must be between 1 and 140 characters"))]
    pub text: String,
}
