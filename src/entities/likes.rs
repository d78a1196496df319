//! Likes entity - Un utente ha messo like a un messaggio

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Likes {
    pub id: i64,
    pub user_id: i64,
    pub message_id: i64,
}
