//! Connessione al database: pool sqlx e migrations

use super::Config;
use crate::repositories::PoolType;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Migrations incluse nel binario a compile time (cartella `migrations/`)
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Crea il pool di connessioni e applica le migrations mancanti
#[instrument(skip(config))]
pub async fn connect_pool(config: &Config) -> Result<PoolType, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect_with(options)
        .await?;

    debug!("Connection pool created, running migrations");
    MIGRATOR.run(&pool).await?;
    info!("Database ready");

    Ok(pool)
}
