//! LikesRepository - Repository per i like ai messaggi

use super::{Count, Create, Delete, DeleteAll, PoolType, Read, ReadAll};
use crate::dtos::CreateLikeDTO;
use crate::entities::Likes;
use sqlx::Error;

// LIKES REPO
pub struct LikesRepository {
    connection_pool: PoolType,
}

impl LikesRepository {
    pub fn new(connection_pool: PoolType) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_user_id(&self, user_id: &i64) -> Result<Vec<Likes>, Error> {
        sqlx::query_as::<_, Likes>("SELECT id, user_id, message_id FROM likes WHERE user_id = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.connection_pool)
            .await
    }

    pub async fn find_by_user_and_message(
        &self,
        user_id: &i64,
        message_id: &i64,
    ) -> Result<Option<Likes>, Error> {
        sqlx::query_as::<_, Likes>(
            "SELECT id, user_id, message_id FROM likes WHERE user_id = ? AND message_id = ?",
        )
        .bind(user_id)
        .bind(message_id)
        .fetch_optional(&self.connection_pool)
        .await
    }

    pub async fn count_by_user_id(&self, user_id: &i64) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.connection_pool)
            .await
    }

    /// Mette il like se non c'è, altrimenti lo toglie.
    /// Ritorna lo stato finale (`true` = messaggio piaciuto)
    pub async fn toggle(&self, user_id: &i64, message_id: &i64) -> Result<bool, Error> {
        let mut tx = self.connection_pool.begin().await?;

        let removed = sqlx::query("DELETE FROM likes WHERE user_id = ? AND message_id = ?")
            .bind(user_id)
            .bind(message_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            sqlx::query("INSERT INTO likes (user_id, message_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(message_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(removed == 0)
    }
}

impl Create<Likes, CreateLikeDTO> for LikesRepository {
    async fn create(&self, data: &CreateLikeDTO) -> Result<Likes, Error> {
        let result = sqlx::query("INSERT INTO likes (user_id, message_id) VALUES (?, ?)")
            .bind(data.user_id)
            .bind(data.message_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(Likes {
            id: result.last_insert_rowid(),
            user_id: data.user_id,
            message_id: data.message_id,
        })
    }
}

impl Read<Likes, i64> for LikesRepository {
    async fn read(&self, id: &i64) -> Result<Option<Likes>, Error> {
        sqlx::query_as::<_, Likes>("SELECT id, user_id, message_id FROM likes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl ReadAll<Likes> for LikesRepository {
    async fn read_all(&self) -> Result<Vec<Likes>, Error> {
        sqlx::query_as::<_, Likes>("SELECT id, user_id, message_id FROM likes ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Delete<i64> for LikesRepository {
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM likes WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl DeleteAll for LikesRepository {
    async fn delete_all(&self) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM likes")
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}

impl Count for LikesRepository {
    async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes")
            .fetch_one(&self.connection_pool)
            .await
    }
}
