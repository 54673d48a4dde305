//! Seed data loading
//!
//! A seed file is a JSON array of character drafts. Records receive their
//! identifiers from the store as they are inserted, in file order.

use std::path::Path;

use anyhow::{Context, Result};

use super::CharacterStore;
use crate::core::character::CharacterDraft;

/// Load drafts from a JSON file and insert them into the store
///
/// Returns the number of records inserted.
pub async fn load_from_file(store: &dyn CharacterStore, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file '{}'", path.display()))?;

    let drafts: Vec<CharacterDraft> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse seed file '{}'", path.display()))?;

    let count = drafts.len();
    for draft in drafts {
        store.insert(draft).await?;
    }

    tracing::info!("Seeded {} characters from {}", count, path.display());
    Ok(count)
}
