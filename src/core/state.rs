//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository e la configurazione condivisa
//! necessaria per gestire l'applicazione.

use crate::repositories::{
    FollowsRepository, LikesRepository, MessageRepository, PoolType, UserRepository,
};

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    /// Repository per la gestione dei messaggi
    pub msg: MessageRepository,

    /// Repository della relazione follower/seguito
    pub follows: FollowsRepository,

    /// Repository dei like
    pub likes: LikesRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni condiviso
    /// * `jwt_secret` - Chiave segreta per la firma dei token JWT
    pub fn new(pool: PoolType, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            msg: MessageRepository::new(pool.clone()),
            follows: FollowsRepository::new(pool.clone()),
            likes: LikesRepository::new(pool),
            jwt_secret,
        }
    }
}
