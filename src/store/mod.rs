//! Character record storage

use async_trait::async_trait;

use crate::core::character::{Character, CharacterDraft, CharacterId, CharacterPatch};
use crate::core::error::StoreError;

mod in_memory;
pub mod seed;

pub use in_memory::InMemoryCharacterStore;

/// Storage abstraction for character records
///
/// The query engine is agnostic to the underlying storage mechanism; it only
/// needs `list` to hand back a snapshot in ascending identifier order, which
/// is the original relative order every downstream contract refers to.
/// `update` and `delete` return `None` when no record has the identifier.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Snapshot of all records, ascending by identifier
    async fn list(&self) -> Result<Vec<Character>, StoreError>;

    /// Get a record by identifier
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError>;

    /// Insert a new record, assigning it the next identifier
    async fn insert(&self, draft: CharacterDraft) -> Result<Character, StoreError>;

    /// Patch an existing record, returning the updated record
    async fn update(
        &self,
        id: CharacterId,
        patch: CharacterPatch,
    ) -> Result<Option<Character>, StoreError>;

    /// Remove a record, returning it
    async fn delete(&self, id: CharacterId) -> Result<Option<Character>, StoreError>;
}
