//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod likes;
pub mod message;
pub mod query;
pub mod user;

pub use likes::{CreateLikeDTO, LikeStatusDTO};
pub use message::{CreateMessageDTO, MessageDTO, NewMessageDTO};
pub use query::{TimelineQuery, UserSearchQuery};
pub use user::{CreateUserDTO, SignupDTO, UpdateUserDTO, UserDTO, UserProfileDTO};
