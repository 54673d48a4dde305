//! # Maester
//!
//! A record-query service for character records: filterable, sortable,
//! paginated lookups over an abstract store, served over HTTP.
//!
//! ## Features
//!
//! - **Query pipeline**: parse, filter, sort, paginate, in that fixed order
//! - **Validated queries**: every rejected parameter is named in the error
//! - **Stable ordering**: stable sorts, deterministic snapshots, missing
//!   fields always last
//! - **Explicitly optional fields**: missing is distinct from zero and
//!   never matches a filter
//! - **Typed errors**: validation, not-found, and store failures map to
//!   400, 404, and 500
//! - **Owned stores**: services hold their own store instance, nothing
//!   global
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use maester::prelude::*;
//!
//! let store = Arc::new(InMemoryCharacterStore::new());
//! store
//!     .insert(CharacterDraft {
//!         name: Some("Jon Snow".to_string()),
//!         house: Some("Stark".to_string()),
//!         age: Some(25),
//!         ..CharacterDraft::default()
//!     })
//!     .await?;
//!
//! let service = CharacterService::new(store, TextMatch::Exact);
//!
//! // ?house=Stark&sort_by=age&order=desc&skip=0&limit=10
//! let page = service.query(&params).await?;
//! println!("{} of {} matched", page.characters.len(), page.total_matched);
//! ```

pub mod config;
pub mod core;
pub mod query;
pub mod server;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        character::{Character, CharacterDraft, CharacterId, CharacterPage, CharacterPatch},
        error::{ErrorResponse, MaesterError, MaesterResult, QueryError, StoreError},
        service::CharacterService,
    };

    // === Query engine ===
    pub use crate::query::{QuerySpec, SortField, SortOrder, TextMatch, resolve, resolve_spec};

    // === Storage ===
    pub use crate::store::{CharacterStore, InMemoryCharacterStore};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{build_router, serve};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
