//! In-memory implementation of the character store
//!
//! Useful for development and the default deployment. Uses RwLock for
//! thread-safe access; records live in a `BTreeMap` so snapshots come back
//! in ascending identifier order.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::CharacterStore;
use crate::core::character::{Character, CharacterDraft, CharacterId, CharacterPatch};
use crate::core::error::StoreError;

/// Thread-safe in-memory character store
///
/// Identifiers come from a counter that only moves forward, starting at 1;
/// deleting a record never frees its identifier.
#[derive(Clone)]
pub struct InMemoryCharacterStore {
    records: Arc<RwLock<Records>>,
}

struct Records {
    by_id: BTreeMap<CharacterId, Character>,
    next_id: CharacterId,
}

impl InMemoryCharacterStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Records {
                by_id: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryCharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterStore for InMemoryCharacterStore {
    async fn list(&self) -> Result<Vec<Character>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        Ok(records.by_id.values().cloned().collect())
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        Ok(records.by_id.get(&id).cloned())
    }

    async fn insert(&self, draft: CharacterDraft) -> Result<Character, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        let id = records.next_id;
        records.next_id += 1;

        let character = Character::from_draft(id, draft);
        records.by_id.insert(id, character.clone());

        Ok(character)
    }

    async fn update(
        &self,
        id: CharacterId,
        patch: CharacterPatch,
    ) -> Result<Option<Character>, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        let Some(character) = records.by_id.get_mut(&id) else {
            return Ok(None);
        };

        character.apply_patch(patch);

        Ok(Some(character.clone()))
    }

    async fn delete(&self, id: CharacterId) -> Result<Option<Character>, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        Ok(records.by_id.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CharacterDraft {
        CharacterDraft {
            name: Some(name.to_string()),
            ..CharacterDraft::default()
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids_from_one() {
        let store = InMemoryCharacterStore::new();

        let first = store.insert(named("Jon Snow")).await.unwrap();
        let second = store.insert(named("Arya Stark")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_returns_inserted_record() {
        let store = InMemoryCharacterStore::new();
        let created = store.insert(named("Sansa Stark")).await.unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = InMemoryCharacterStore::new();
        assert!(store.get(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_ascending_by_id() {
        let store = InMemoryCharacterStore::new();
        for name in ["Bran", "Rickon", "Robb"] {
            store.insert(named(name)).await.unwrap();
        }

        let ids: Vec<CharacterId> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_patches_only_given_fields() {
        let store = InMemoryCharacterStore::new();
        let created = store
            .insert(CharacterDraft {
                name: Some("Tyrion Lannister".to_string()),
                house: Some("Lannister".to_string()),
                ..CharacterDraft::default()
            })
            .await
            .unwrap();

        let updated = store
            .update(
                created.id,
                CharacterPatch {
                    nickname: Some("The Imp".to_string()),
                    ..CharacterPatch::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.nickname.as_deref(), Some("The Imp"));
        assert_eq!(updated.name.as_deref(), Some("Tyrion Lannister"));
        assert_eq!(updated.house.as_deref(), Some("Lannister"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store = InMemoryCharacterStore::new();
        let result = store.update(7, CharacterPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_the_record() {
        let store = InMemoryCharacterStore::new();
        let created = store.insert(named("Hodor")).await.unwrap();

        let deleted = store.delete(created.id).await.unwrap();
        assert_eq!(deleted.map(|c| c.id), Some(created.id));

        assert!(store.get(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_none() {
        let store = InMemoryCharacterStore::new();
        assert!(store.delete(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = InMemoryCharacterStore::new();
        let first = store.insert(named("Viserys")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.insert(named("Daenerys")).await.unwrap();
        assert_eq!(second.id, 2);
    }
}
