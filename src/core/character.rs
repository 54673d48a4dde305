//! Character record model and request/response payloads
//!
//! A record always has a store-assigned identifier; every descriptive field
//! is optional. Missing fields serialize as `null`, never match a filter on
//! that field, and sort after records that have the field.

use serde::{Deserialize, Serialize};

/// Identifier assigned to every character record by the store
pub type CharacterId = i64;

/// A character record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: Option<String>,
    pub house: Option<String>,
    pub animal: Option<String>,
    pub symbol: Option<String>,
    pub nickname: Option<String>,
    pub role: Option<String>,
    pub age: Option<i64>,
    pub death: Option<i64>,
    pub strength: Option<String>,
}

/// Payload for creating a character
///
/// Every field is optional; the store assigns the identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: Option<String>,
    pub house: Option<String>,
    pub animal: Option<String>,
    pub symbol: Option<String>,
    pub nickname: Option<String>,
    pub role: Option<String>,
    pub age: Option<i64>,
    pub death: Option<i64>,
    pub strength: Option<String>,
}

/// Payload for updating a character. All fields are optional.
///
/// A field absent from the patch is left untouched; the identifier can
/// never be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub house: Option<String>,
    pub animal: Option<String>,
    pub symbol: Option<String>,
    pub nickname: Option<String>,
    pub role: Option<String>,
    pub age: Option<i64>,
    pub death: Option<i64>,
    pub strength: Option<String>,
}

impl Character {
    /// Build a record from a creation payload and a store-assigned identifier
    pub fn from_draft(id: CharacterId, draft: CharacterDraft) -> Self {
        Self {
            id,
            name: draft.name,
            house: draft.house,
            animal: draft.animal,
            symbol: draft.symbol,
            nickname: draft.nickname,
            role: draft.role,
            age: draft.age,
            death: draft.death,
            strength: draft.strength,
        }
    }

    /// Apply a patch, overwriting only the fields the patch carries
    pub fn apply_patch(&mut self, patch: CharacterPatch) {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.house.is_some() {
            self.house = patch.house;
        }
        if patch.animal.is_some() {
            self.animal = patch.animal;
        }
        if patch.symbol.is_some() {
            self.symbol = patch.symbol;
        }
        if patch.nickname.is_some() {
            self.nickname = patch.nickname;
        }
        if patch.role.is_some() {
            self.role = patch.role;
        }
        if patch.age.is_some() {
            self.age = patch.age;
        }
        if patch.death.is_some() {
            self.death = patch.death;
        }
        if patch.strength.is_some() {
            self.strength = patch.strength;
        }
    }
}

/// One page of query results
///
/// `total_matched` counts every record that survived filtering, before the
/// pagination window was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub characters: Vec<Character>,
    pub total_matched: usize,
}
