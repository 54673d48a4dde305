//! Sort engine
//!
//! Sorting is stable: records whose keys compare equal keep the relative
//! order they arrived in, whichever direction was requested. Records missing
//! the sort field order after records that have it, for both `asc` and
//! `desc`; only the comparison between two present keys is reversed for
//! `desc`. Without a sort field the input passes through unchanged.

use std::cmp::Ordering;

use super::spec::{QuerySpec, SortField, SortOrder};
use crate::core::character::Character;

/// Sort `records` by the field named in `spec`, if any
pub fn apply(mut records: Vec<Character>, spec: &QuerySpec) -> Vec<Character> {
    let Some(field) = spec.sort_by else {
        return records;
    };

    let order = spec.order;
    match field {
        SortField::Name => {
            records.sort_by(|a, b| compare(a.name.as_deref(), b.name.as_deref(), order))
        }
        SortField::House => {
            records.sort_by(|a, b| compare(a.house.as_deref(), b.house.as_deref(), order))
        }
        SortField::Role => {
            records.sort_by(|a, b| compare(a.role.as_deref(), b.role.as_deref(), order))
        }
        SortField::Age => records.sort_by(|a, b| compare(a.age, b.age, order)),
        SortField::Strength => {
            records.sort_by(|a, b| compare(a.strength.as_deref(), b.strength.as_deref(), order))
        }
    }

    records
}

/// Compare two optional sort keys
///
/// Present keys compare by value, reversed for descending; a missing key
/// orders after any present key regardless of direction.
fn compare<T: Ord>(a: Option<T>, b: Option<T>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.cmp(&b),
            SortOrder::Desc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::CharacterDraft;

    fn character(id: i64, name: Option<&str>, age: Option<i64>) -> Character {
        Character::from_draft(
            id,
            CharacterDraft {
                name: name.map(String::from),
                age,
                ..CharacterDraft::default()
            },
        )
    }

    fn ids(records: &[Character]) -> Vec<i64> {
        records.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_no_sort_field_passes_input_through() {
        let records = vec![
            character(3, Some("Cersei"), Some(42)),
            character(1, Some("Arya"), Some(18)),
            character(2, Some("Bran"), Some(10)),
        ];

        let sorted = apply(records, &QuerySpec::default());
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_age_ascending() {
        let records = vec![
            character(1, Some("Cersei"), Some(42)),
            character(2, Some("Arya"), Some(18)),
            character(3, Some("Tyrion"), Some(39)),
        ];

        let spec = QuerySpec {
            sort_by: Some(SortField::Age),
            ..QuerySpec::default()
        };

        let sorted = apply(records, &spec);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_age_descending() {
        let records = vec![
            character(1, Some("Cersei"), Some(42)),
            character(2, Some("Arya"), Some(18)),
            character(3, Some("Tyrion"), Some(39)),
        ];

        let spec = QuerySpec {
            sort_by: Some(SortField::Age),
            order: SortOrder::Desc,
            ..QuerySpec::default()
        };

        let sorted = apply(records, &spec);
        assert_eq!(ids(&sorted), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_by_name_is_lexicographic() {
        let records = vec![
            character(1, Some("Tyrion"), None),
            character(2, Some("Arya"), None),
            character(3, Some("Jon"), None),
        ];

        let spec = QuerySpec {
            sort_by: Some(SortField::Name),
            ..QuerySpec::default()
        };

        let sorted = apply(records, &spec);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_missing_keys_order_last_ascending() {
        let records = vec![
            character(1, Some("Hodor"), None),
            character(2, Some("Arya"), Some(18)),
            character(3, Some("Cersei"), Some(42)),
        ];

        let spec = QuerySpec {
            sort_by: Some(SortField::Age),
            ..QuerySpec::default()
        };

        let sorted = apply(records, &spec);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_missing_keys_order_last_descending_too() {
        let records = vec![
            character(1, Some("Hodor"), None),
            character(2, Some("Arya"), Some(18)),
            character(3, Some("Cersei"), Some(42)),
        ];

        let spec = QuerySpec {
            sort_by: Some(SortField::Age),
            order: SortOrder::Desc,
            ..QuerySpec::default()
        };

        let sorted = apply(records, &spec);
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_arrival_order_in_both_directions() {
        let records = vec![
            character(1, Some("Jon"), Some(25)),
            character(2, Some("Daenerys"), Some(25)),
            character(3, Some("Arya"), Some(18)),
            character(4, Some("Sandor"), Some(25)),
        ];

        let spec = QuerySpec {
            sort_by: Some(SortField::Age),
            ..QuerySpec::default()
        };
        let sorted = apply(records.clone(), &spec);
        assert_eq!(ids(&sorted), vec![3, 1, 2, 4]);

        let spec = QuerySpec {
            sort_by: Some(SortField::Age),
            order: SortOrder::Desc,
            ..QuerySpec::default()
        };
        let sorted = apply(records, &spec);
        // The tied run is not reversed, only moved ahead of the lower key
        assert_eq!(ids(&sorted), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_missing_key_runs_keep_arrival_order() {
        let records = vec![
            character(1, Some("Hodor"), None),
            character(2, Some("Ghost"), None),
            character(3, Some("Arya"), Some(18)),
        ];

        let spec = QuerySpec {
            sort_by: Some(SortField::Age),
            order: SortOrder::Desc,
            ..QuerySpec::default()
        };

        let sorted = apply(records, &spec);
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }
}
