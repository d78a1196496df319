//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.

// ************************* NOTA SULLE QUERY SQLX ************************* //

/*
   Le query sono scritte con le funzioni "runtime" di sqlx (query, query_as, query_scalar)
   e non con le macro query!/query_as!: le macro vogliono un database raggiungibile (o la cache
   offline di `cargo sqlx prepare`) già in fase di compilazione, noi invece compiliamo anche senza.
   Il mapping riga -> struct lo fa #[derive(sqlx::FromRow)] sulle entity, quindi i nomi delle
   colonne nella SELECT devono coincidere con i nomi dei campi.

   Promemoria sui metodi di fetch:
   Number of Rows   Method to Call              Returns
   None             .execute(...).await         sqlx::Result<DB::QueryResult>   (INSERT/UPDATE/DELETE)
   Zero or One      .fetch_optional(...).await  sqlx::Result<Option<T>>
   Exactly One      .fetch_one(...).await       sqlx::Result<T>                 (aggregate, es. COUNT)
   Multiple         .fetch_all(...).await       sqlx::Result<Vec<T>>

   Gli errori di sqlx vengono propagati con ? fino al service, che li converte in AppError.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod follows;
pub mod likes;
pub mod message;
pub mod traits;
pub mod user;

// alias di tipo per il pool, per semplificare lo switch in caso in cui vogliamo usare un altro db
pub type PoolType = sqlx::SqlitePool;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Count, Create, Delete, DeleteAll, Read, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use follows::FollowsRepository;
pub use likes::LikesRepository;
pub use message::{DEFAULT_TIMELINE_LIMIT, MessageRepository};
pub use user::UserRepository;
