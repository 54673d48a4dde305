//! Validated query specification
//!
//! A [`QuerySpec`] is the parsed, validated form of a request's query
//! parameters. It is immutable once built; each request gets its own.

use serde::{Deserialize, Serialize};

/// Fields a query may sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    House,
    Role,
    Age,
    Strength,
}

/// Sort direction, ascending unless the query says otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// How text equality filters compare values
///
/// Exact comparison is the default; the case-insensitive variant is opted
/// into through server configuration, never per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextMatch {
    #[default]
    Exact,
    IgnoreCase,
}

/// A parsed and validated query
///
/// Absent filters are `None` and constrain nothing. Defaults: no sort,
/// ascending order, `skip` 0, no limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    /// Equality filters on text fields
    pub name: Option<String>,
    pub house: Option<String>,
    pub role: Option<String>,
    pub strength: Option<String>,

    /// Equality filters on numeric fields
    pub age: Option<i64>,
    pub death: Option<i64>,

    /// Range filters, all bounds exclusive
    pub age_more_than: Option<i64>,
    pub age_less_than: Option<i64>,
    pub death_more_than: Option<i64>,
    pub death_less_than: Option<i64>,

    /// Sorting
    pub sort_by: Option<SortField>,
    pub order: SortOrder,

    /// Pagination window
    pub skip: usize,
    pub limit: Option<usize>,
}
