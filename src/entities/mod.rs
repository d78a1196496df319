//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod follows;
pub mod likes;
pub mod message;
pub mod user;

// Re-exports per facilitare l'import
pub use follows::Follows;
pub use likes::Likes;
pub use message::Message;
pub use user::{DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL, User};
