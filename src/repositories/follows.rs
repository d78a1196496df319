//! FollowsRepository - Repository per la relazione follower/seguito

use super::{Count, Create, Delete, DeleteAll, PoolType, Read, ReadAll};
use crate::entities::Follows;
use sqlx::Error;

// FOLLOWS REPO
pub struct FollowsRepository {
    connection_pool: PoolType,
}

impl FollowsRepository {
    pub fn new(connection_pool: PoolType) -> Self {
        Self { connection_pool }
    }
}

/// Non c'è un id generato: il DTO di creazione coincide con l'entità.
/// Inserire due volte la stessa coppia viola la chiave primaria
impl Create<Follows, Follows> for FollowsRepository {
    async fn create(&self, data: &Follows) -> Result<Follows, Error> {
        sqlx::query("INSERT INTO follows (user_being_followed_id, user_following_id) VALUES (?, ?)")
            .bind(data.user_being_followed_id)
            .bind(data.user_following_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(data.clone())
    }
}

/// Chiave: (user_being_followed_id, user_following_id)
impl Read<Follows, (i64, i64)> for FollowsRepository {
    async fn read(&self, id: &(i64, i64)) -> Result<Option<Follows>, Error> {
        let follows = sqlx::query_as::<_, Follows>(
            r#"
            SELECT user_being_followed_id, user_following_id
            FROM follows
            WHERE user_being_followed_id = ? AND user_following_id = ?
            "#,
        )
        .bind(id.0)
        .bind(id.1)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(follows)
    }
}

impl ReadAll<Follows> for FollowsRepository {
    async fn read_all(&self) -> Result<Vec<Follows>, Error> {
        sqlx::query_as::<_, Follows>(
            r#"
            SELECT user_being_followed_id, user_following_id
            FROM follows
            ORDER BY user_being_followed_id, user_following_id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Delete<(i64, i64)> for FollowsRepository {
    async fn delete(&self, id: &(i64, i64)) -> Result<(), Error> {
        sqlx::query("DELETE FROM follows WHERE user_being_followed_id = ? AND user_following_id = ?")
            .bind(id.0)
            .bind(id.1)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl DeleteAll for FollowsRepository {
    async fn delete_all(&self) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM follows")
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}

impl Count for FollowsRepository {
    async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM follows")
            .fetch_one(&self.connection_pool)
            .await
    }
}
