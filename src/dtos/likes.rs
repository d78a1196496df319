//! Likes DTOs - Data Transfer Objects per i like

use serde::{Deserialize, Serialize};

/// DTO per creare un like (senza id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateLikeDTO {
    pub user_id: i64,
    pub message_id: i64,
}

/// Risposta del toggle: stato del like dopo l'operazione
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LikeStatusDTO {
    pub message_id: i64,
    pub liked: bool,
}
