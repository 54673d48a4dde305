//! Query specification parser
//!
//! Turns the raw key/value parameters of a request into a validated
//! [`QuerySpec`]. Recognized keys must validate or the whole query is
//! rejected; unrecognized keys are ignored, including record fields that
//! are not filterable (`animal`, `symbol`, `nickname`).

use std::collections::HashMap;

use super::spec::{QuerySpec, SortField, SortOrder};
use crate::core::error::QueryError;

impl QuerySpec {
    /// Parse and validate raw query parameters
    ///
    /// Fails on the first invalid value, naming the offending parameter.
    pub fn parse(params: &HashMap<String, String>) -> Result<QuerySpec, QueryError> {
        let mut spec = QuerySpec {
            name: params.get("name").cloned(),
            house: params.get("house").cloned(),
            role: params.get("role").cloned(),
            strength: params.get("strength").cloned(),
            ..QuerySpec::default()
        };

        spec.age = int_param(params, "age")?;
        spec.death = int_param(params, "death")?;
        spec.age_more_than = int_param(params, "age_more_than")?;
        spec.age_less_than = int_param(params, "age_less_than")?;
        spec.death_more_than = int_param(params, "death_more_than")?;
        spec.death_less_than = int_param(params, "death_less_than")?;

        if let Some(value) = int_param(params, "skip")? {
            spec.skip = non_negative("skip", value)? as usize;
        }
        if let Some(value) = int_param(params, "limit")? {
            spec.limit = Some(non_negative("limit", value)? as usize);
        }

        if let Some(value) = params.get("sort_by") {
            spec.sort_by = Some(sort_field(value)?);
        }
        if let Some(value) = params.get("order") {
            spec.order = sort_order(value)?;
        }

        Ok(spec)
    }
}

fn int_param(params: &HashMap<String, String>, param: &str) -> Result<Option<i64>, QueryError> {
    match params.get(param) {
        Some(value) => {
            value
                .parse::<i64>()
                .map(Some)
                .map_err(|_| QueryError::NotAnInteger {
                    param: param.to_string(),
                    value: value.clone(),
                })
        }
        None => Ok(None),
    }
}

fn non_negative(param: &str, value: i64) -> Result<i64, QueryError> {
    if value < 0 {
        return Err(QueryError::Negative {
            param: param.to_string(),
            value,
        });
    }
    Ok(value)
}

fn sort_field(value: &str) -> Result<SortField, QueryError> {
    match value {
        "name" => Ok(SortField::Name),
        "house" => Ok(SortField::House),
        "role" => Ok(SortField::Role),
        "age" => Ok(SortField::Age),
        "strength" => Ok(SortField::Strength),
        other => Err(QueryError::UnknownSortField {
            value: other.to_string(),
        }),
    }
}

fn sort_order(value: &str) -> Result<SortOrder, QueryError> {
    match value {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => Err(QueryError::UnknownSortOrder {
            value: other.to_string(),
        }),
    }
}
