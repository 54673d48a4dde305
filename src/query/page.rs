//! Pagination engine
//!
//! Cuts the skip/limit window out of an already filtered and sorted
//! sequence. A window past the end is an empty page, not an error; an
//! absent limit means everything from `skip` onward.

use super::spec::QuerySpec;
use crate::core::character::Character;

/// Apply the pagination window from `spec`
pub fn apply(records: Vec<Character>, spec: &QuerySpec) -> Vec<Character> {
    let window = records.into_iter().skip(spec.skip);
    match spec.limit {
        Some(limit) => window.take(limit).collect(),
        None => window.collect(),
    }
}
