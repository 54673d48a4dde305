//! Filter engine
//!
//! Applies the conjunction of every constraint present in a query. A record
//! must satisfy all of them to survive; input order is preserved. A record
//! missing a field never matches a constraint on that field.

use super::spec::{QuerySpec, TextMatch};
use crate::core::character::Character;

/// Keep the records matching every constraint in `spec`, preserving order
pub fn apply(records: Vec<Character>, spec: &QuerySpec, text_match: TextMatch) -> Vec<Character> {
    records
        .into_iter()
        .filter(|character| matches(character, spec, text_match))
        .collect()
}

fn matches(character: &Character, spec: &QuerySpec, text_match: TextMatch) -> bool {
    text_eq(character.name.as_deref(), spec.name.as_deref(), text_match)
        && text_eq(character.house.as_deref(), spec.house.as_deref(), text_match)
        && text_eq(character.role.as_deref(), spec.role.as_deref(), text_match)
        && text_eq(
            character.strength.as_deref(),
            spec.strength.as_deref(),
            text_match,
        )
        && int_eq(character.age, spec.age)
        && int_eq(character.death, spec.death)
        && above(character.age, spec.age_more_than)
        && below(character.age, spec.age_less_than)
        && above(character.death, spec.death_more_than)
        && below(character.death, spec.death_less_than)
}

fn text_eq(field: Option<&str>, wanted: Option<&str>, text_match: TextMatch) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    field.is_some_and(|value| match text_match {
        TextMatch::Exact => value == wanted,
        TextMatch::IgnoreCase => value.eq_ignore_ascii_case(wanted),
    })
}

fn int_eq(field: Option<i64>, wanted: Option<i64>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    field.is_some_and(|value| value == wanted)
}

/// Exclusive lower bound
fn above(field: Option<i64>, bound: Option<i64>) -> bool {
    let Some(bound) = bound else {
        return true;
    };
    field.is_some_and(|value| value > bound)
}

/// Exclusive upper bound
fn below(field: Option<i64>, bound: Option<i64>) -> bool {
    let Some(bound) = bound else {
        return true;
    };
    field.is_some_and(|value| value < bound)
}
