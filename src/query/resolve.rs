//! Query resolver
//!
//! Chains the engines in their fixed order: parse, filter, sort, paginate.
//! The resolver holds no state between calls; it works on the snapshot it
//! is given and reports how many records matched before pagination.

use std::collections::HashMap;

use super::spec::{QuerySpec, TextMatch};
use super::{filter, page, sort};
use crate::core::character::{Character, CharacterPage};
use crate::core::error::QueryError;

/// Resolve raw query parameters against a snapshot of records
pub fn resolve(
    records: Vec<Character>,
    params: &HashMap<String, String>,
    text_match: TextMatch,
) -> Result<CharacterPage, QueryError> {
    let spec = QuerySpec::parse(params)?;
    Ok(resolve_spec(records, &spec, text_match))
}

/// Resolve an already parsed query specification
pub fn resolve_spec(
    records: Vec<Character>,
    spec: &QuerySpec,
    text_match: TextMatch,
) -> CharacterPage {
    let matched = filter::apply(records, spec, text_match);
    let total_matched = matched.len();
    let sorted = sort::apply(matched, spec);
    let characters = page::apply(sorted, spec);

    CharacterPage {
        characters,
        total_matched,
    }
}
