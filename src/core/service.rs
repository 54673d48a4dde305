//! Character service
//!
//! A facade that owns the store handle and the configured text-match mode.
//! Queries are resolved against a fresh snapshot, so a resolution never
//! observes a half-applied mutation; store misses on a known identifier
//! surface as [`MaesterError::NotFound`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::character::{
    Character, CharacterDraft, CharacterId, CharacterPage, CharacterPatch,
};
use crate::core::error::{MaesterError, MaesterResult};
use crate::query::{self, TextMatch};
use crate::store::CharacterStore;

/// Service facade over a character store
#[derive(Clone)]
pub struct CharacterService {
    store: Arc<dyn CharacterStore>,
    text_match: TextMatch,
}

impl CharacterService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn CharacterStore>, text_match: TextMatch) -> Self {
        Self { store, text_match }
    }

    /// Resolve raw query parameters against the current records
    pub async fn query(&self, params: &HashMap<String, String>) -> MaesterResult<CharacterPage> {
        let records = self.store.list().await?;
        let page = query::resolve(records, params, self.text_match)?;

        tracing::debug!(
            "Resolved query: {} matched, {} returned",
            page.total_matched,
            page.characters.len()
        );

        Ok(page)
    }

    /// Get a single record by identifier
    pub async fn get(&self, id: CharacterId) -> MaesterResult<Character> {
        self.store
            .get(id)
            .await?
            .ok_or(MaesterError::NotFound { id })
    }

    /// Create a record from a draft
    pub async fn create(&self, draft: CharacterDraft) -> MaesterResult<Character> {
        let character = self.store.insert(draft).await?;
        tracing::info!("Created character {}", character.id);
        Ok(character)
    }

    /// Patch a record by identifier
    pub async fn update(&self, id: CharacterId, patch: CharacterPatch) -> MaesterResult<Character> {
        let character = self
            .store
            .update(id, patch)
            .await?
            .ok_or(MaesterError::NotFound { id })?;

        tracing::info!("Updated character {}", id);
        Ok(character)
    }

    /// Delete a record by identifier, returning it
    pub async fn delete(&self, id: CharacterId) -> MaesterResult<Character> {
        let character = self
            .store
            .delete(id)
            .await?
            .ok_or(MaesterError::NotFound { id })?;

        tracing::info!("Deleted character {}", id);
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCharacterStore;

    fn service() -> CharacterService {
        CharacterService::new(Arc::new(InMemoryCharacterStore::new()), TextMatch::Exact)
    }

    fn draft(name: &str, house: &str, age: i64) -> CharacterDraft {
        CharacterDraft {
            name: Some(name.to_string()),
            house: Some(house.to_string()),
            age: Some(age),
            ..CharacterDraft::default()
        }
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_query_resolves_against_store_snapshot() {
        let service = service();
        service.create(draft("Jon Snow", "Stark", 25)).await.unwrap();
        service.create(draft("Cersei Lannister", "Lannister", 42)).await.unwrap();
        service.create(draft("Arya Stark", "Stark", 18)).await.unwrap();

        let page = service
            .query(&params(&[("house", "Stark"), ("sort_by", "age")]))
            .await
            .unwrap();

        let names: Vec<&str> = page
            .characters
            .iter()
            .filter_map(|c| c.name.as_deref())
            .collect();
        assert_eq!(names, vec!["Arya Stark", "Jon Snow"]);
        assert_eq!(page.total_matched, 2);
    }

    #[tokio::test]
    async fn test_invalid_query_surfaces_validation_error() {
        let service = service();

        let err = service
            .query(&params(&[("sort_by", "animal")]))
            .await
            .unwrap_err();

        assert!(matches!(err, MaesterError::Query(_)));
    }

    #[tokio::test]
    async fn test_get_missing_record_is_not_found() {
        let service = service();

        let err = service.get(42).await.unwrap_err();
        assert!(matches!(err, MaesterError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let service = service();

        let created = service.create(draft("Brienne", "Tarth", 32)).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let service = service();

        let err = service
            .update(9, CharacterPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, MaesterError::NotFound { id: 9 }));
    }

    #[tokio::test]
    async fn test_delete_removes_the_record() {
        let service = service();
        let created = service.create(draft("Hodor", "Stark", 40)).await.unwrap();

        service.delete(created.id).await.unwrap();

        let err = service.get(created.id).await.unwrap_err();
        assert!(matches!(err, MaesterError::NotFound { .. }));
    }
}
