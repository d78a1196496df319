//! Message entity - Entità messaggio (warble)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    // al massimo 140 caratteri, validato in NewMessageDTO
    pub text: String,
    // istante di creazione, salvato in UTC
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
}
