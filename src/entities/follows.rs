//! Follows entity - Relazione "user_following_id segue user_being_followed_id"

use serde::{Deserialize, Serialize};

/// La chiave primaria è la coppia (user_being_followed_id, user_following_id)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, sqlx::FromRow)]
pub struct Follows {
    pub user_being_followed_id: i64,
    pub user_following_id: i64,
}
