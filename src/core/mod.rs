//! Core module containing the record model, errors, and the service facade

pub mod character;
pub mod error;
pub mod service;

pub use character::{Character, CharacterDraft, CharacterId, CharacterPage, CharacterPatch};
pub use error::{ErrorResponse, MaesterError, MaesterResult, QueryError, StoreError};
pub use service::CharacterService;
