//! UserRepository - Repository per la gestione degli utenti e delle loro relazioni

use super::{Count, Create, Delete, DeleteAll, PoolType, Read, ReadAll, Update};
use crate::dtos::{CreateUserDTO, UpdateUserDTO};
use crate::entities::{DEFAULT_IMAGE_URL, User};
use sqlx::Error;

// USER REPO
pub struct UserRepository {
    connection_pool: PoolType,
}

impl UserRepository {
    pub fn new(connection_pool: PoolType) -> UserRepository {
        Self { connection_pool }
    }

    /// Find user by exact username match (username è univoco)
    /// For partial username search, use search_by_username_partial
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, image_url, header_image_url, bio, location, password
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    /// Search users by username prefix (for search functionality)
    pub async fn search_by_username_partial(&self, username_pattern: &str) -> Result<Vec<User>, Error> {
        // `%` e `_` nell'input vanno presi alla lettera
        let escaped = username_pattern
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("{}%", escaped);
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, image_url, header_image_url, bio, location, password
            FROM users
            WHERE username LIKE ? ESCAPE '\'
            ORDER BY username
            LIMIT 10
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(users)
    }

    /// Restituisce l'utente se username esiste e la password corrisponde all'hash salvato.
    /// Username sconosciuto o password sbagliata -> `Ok(None)`
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, Error> {
        let user = self.find_by_username(username).await?;
        Ok(user.filter(|u| u.verify_password(password)))
    }

    /// `user_id` segue `other_id`?
    /// Falso anche quando uno dei due utenti non esiste
    pub async fn is_following(&self, user_id: &i64, other_id: &i64) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM follows
            WHERE user_following_id = ? AND user_being_followed_id = ?
            "#,
        )
        .bind(user_id)
        .bind(other_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }

    /// `user_id` è seguito da `other_id`?
    pub async fn is_followed_by(&self, user_id: &i64, other_id: &i64) -> Result<bool, Error> {
        self.is_following(other_id, user_id).await
    }

    /// Utenti che seguono `user_id`
    pub async fn find_followers(&self, user_id: &i64) -> Result<Vec<User>, Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.username, u.image_url, u.header_image_url, u.bio, u.location, u.password
            FROM users u
            JOIN follows f ON f.user_following_id = u.id
            WHERE f.user_being_followed_id = ?
            ORDER BY u.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(users)
    }

    /// Utenti seguiti da `user_id`
    pub async fn find_following(&self, user_id: &i64) -> Result<Vec<User>, Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.username, u.image_url, u.header_image_url, u.bio, u.location, u.password
            FROM users u
            JOIN follows f ON f.user_being_followed_id = u.id
            WHERE f.user_following_id = ?
            ORDER BY u.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(users)
    }

    pub async fn count_followers(&self, user_id: &i64) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE user_being_followed_id = ?")
            .bind(user_id)
            .fetch_one(&self.connection_pool)
            .await
    }

    pub async fn count_following(&self, user_id: &i64) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE user_following_id = ?")
            .bind(user_id)
            .fetch_one(&self.connection_pool)
            .await
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        let image_url = data.image_url.as_deref().unwrap_or(DEFAULT_IMAGE_URL);

        let result = sqlx::query(
            "INSERT INTO users (email, username, password, image_url) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.email)
        .bind(&data.username)
        .bind(&data.password)
        .bind(image_url)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid();

        // rilettura per avere anche i valori di default assegnati dal db
        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl Read<User, i64> for UserRepository {
    async fn read(&self, id: &i64) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, image_url, header_image_url, bio, location, password
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl ReadAll<User> for UserRepository {
    async fn read_all(&self) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, image_url, header_image_url, bio, location, password
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Update<User, UpdateUserDTO, i64> for UserRepository {
    async fn update(&self, id: &i64, data: &UpdateUserDTO) -> Result<User, Error> {
        // COALESCE: i campi None mantengono il valore attuale
        let result = sqlx::query(
            r#"
            UPDATE users SET
                email = COALESCE(?, email),
                username = COALESCE(?, username),
                image_url = COALESCE(?, image_url),
                header_image_url = COALESCE(?, header_image_url),
                bio = COALESCE(?, bio),
                location = COALESCE(?, location)
            WHERE id = ?
            "#,
        )
        .bind(&data.email)
        .bind(&data.username)
        .bind(&data.image_url)
        .bind(&data.header_image_url)
        .bind(&data.bio)
        .bind(&data.location)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

/// Hard delete: messaggi, follows e likes dell'utente spariscono in cascata
impl Delete<i64> for UserRepository {
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl DeleteAll for UserRepository {
    async fn delete_all(&self) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}

impl Count for UserRepository {
    async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.connection_pool)
            .await
    }
}
