//! MessageRepository - Repository per la gestione dei messaggi

use super::{Count, Create, Delete, DeleteAll, PoolType, Read, ReadAll};
use crate::dtos::CreateMessageDTO;
use crate::entities::Message;
use sqlx::Error;

/// Numero di messaggi della home se il client non specifica un limite
pub const DEFAULT_TIMELINE_LIMIT: i64 = 100;

// MESSAGE REPO
pub struct MessageRepository {
    connection_pool: PoolType,
}

impl MessageRepository {
    pub fn new(connection_pool: PoolType) -> Self {
        Self { connection_pool }
    }

    /// Messaggi scritti da un utente, dal più recente
    pub async fn find_many_by_user_id(&self, user_id: &i64) -> Result<Vec<Message>, Error> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, text, timestamp, user_id
            FROM messages
            WHERE user_id = ?
            ORDER BY datetime(timestamp) DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(messages)
    }

    pub async fn count_by_user_id(&self, user_id: &i64) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.connection_pool)
            .await
    }

    /// Home timeline: messaggi dell'utente e di chi segue, dal più recente, al massimo `limit`
    pub async fn find_timeline(&self, user_id: &i64, limit: i64) -> Result<Vec<Message>, Error> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, text, timestamp, user_id
            FROM messages
            WHERE user_id = ?
               OR user_id IN (
                   SELECT user_being_followed_id FROM follows WHERE user_following_id = ?
               )
            ORDER BY datetime(timestamp) DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(messages)
    }

    /// Messaggi a cui l'utente ha messo like, dal like più recente
    pub async fn find_liked_by_user(&self, user_id: &i64) -> Result<Vec<Message>, Error> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT m.id, m.text, m.timestamp, m.user_id
            FROM messages m
            JOIN likes l ON l.message_id = m.id
            WHERE l.user_id = ?
            ORDER BY l.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(messages)
    }
}

impl Create<Message, CreateMessageDTO> for MessageRepository {
    async fn create(&self, data: &CreateMessageDTO) -> Result<Message, Error> {
        let result = sqlx::query("INSERT INTO messages (text, timestamp, user_id) VALUES (?, ?, ?)")
            .bind(&data.text)
            .bind(data.timestamp)
            .bind(data.user_id)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();

        Ok(Message {
            id: new_id,
            text: data.text.clone(),
            timestamp: data.timestamp,
            user_id: data.user_id,
        })
    }
}

impl Read<Message, i64> for MessageRepository {
    async fn read(&self, id: &i64) -> Result<Option<Message>, Error> {
        let message = sqlx::query_as::<_, Message>(
            "SELECT id, text, timestamp, user_id FROM messages WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(message)
    }
}

impl ReadAll<Message> for MessageRepository {
    async fn read_all(&self) -> Result<Vec<Message>, Error> {
        sqlx::query_as::<_, Message>("SELECT id, text, timestamp, user_id FROM messages ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Delete<i64> for MessageRepository {
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl DeleteAll for MessageRepository {
    async fn delete_all(&self) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM messages")
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}

impl Count for MessageRepository {
    async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.connection_pool)
            .await
    }
}
