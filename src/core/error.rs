//! Typed error handling for the maester service
//!
//! Every failure surfaces as one of three kinds: a query that failed
//! validation, a record that does not exist, or a store that could not
//! complete an operation. Each kind maps to a fixed HTTP status so clients
//! can handle errors specifically rather than dealing with generic
//! `anyhow::Error` types.
//!
//! # Example
//!
//! ```rust,ignore
//! use maester::prelude::*;
//!
//! match service.get(42).await {
//!     Ok(character) => println!("Found: {:?}", character),
//!     Err(MaesterError::NotFound { id }) => println!("Character {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::core::character::CharacterId;

/// The main error type for the maester service
#[derive(Debug)]
pub enum MaesterError {
    /// A query parameter failed validation
    Query(QueryError),

    /// No record has the requested identifier
    NotFound { id: CharacterId },

    /// The store could not complete an operation
    Store(StoreError),
}

impl fmt::Display for MaesterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaesterError::Query(e) => write!(f, "{}", e),
            MaesterError::NotFound { id } => {
                write!(f, "character with id '{}' not found", id)
            }
            MaesterError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MaesterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaesterError::Query(e) => Some(e),
            MaesterError::NotFound { .. } => None,
            MaesterError::Store(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl MaesterError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MaesterError::Query(_) => StatusCode::BAD_REQUEST,
            MaesterError::NotFound { .. } => StatusCode::NOT_FOUND,
            MaesterError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            MaesterError::Query(_) => "VALIDATION_ERROR",
            MaesterError::NotFound { .. } => "CHARACTER_NOT_FOUND",
            MaesterError::Store(_) => "STORE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            MaesterError::Query(e) => e.param().map(|param| {
                serde_json::json!({
                    "parameter": param
                })
            }),
            MaesterError::NotFound { id } => Some(serde_json::json!({
                "id": id
            })),
            MaesterError::Store(_) => None,
        }
    }
}

impl IntoResponse for MaesterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// A query parameter that failed validation
///
/// Every variant names the offending parameter so the client can point at
/// the exact part of the query that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A numeric parameter carried a non-integer value
    #[error("parameter '{param}' must be an integer, got '{value}'")]
    NotAnInteger { param: String, value: String },

    /// skip or limit was negative
    #[error("parameter '{param}' must not be negative, got {value}")]
    Negative { param: String, value: i64 },

    /// sort_by named a field outside the sortable set
    #[error("cannot sort by unknown field '{value}'")]
    UnknownSortField { value: String },

    /// order was neither 'asc' nor 'desc'
    #[error("unknown sort order '{value}', expected 'asc' or 'desc'")]
    UnknownSortOrder { value: String },
}

impl QueryError {
    /// The name of the query parameter that was rejected
    pub fn param(&self) -> Option<&str> {
        match self {
            QueryError::NotAnInteger { param, .. } => Some(param),
            QueryError::Negative { param, .. } => Some(param),
            QueryError::UnknownSortField { .. } => Some("sort_by"),
            QueryError::UnknownSortOrder { .. } => Some("order"),
        }
    }
}

impl From<QueryError> for MaesterError {
    fn from(err: QueryError) -> Self {
        MaesterError::Query(err)
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// A store operation that could not complete
///
/// The query engine neither masks nor retries these; they propagate
/// unchanged to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A lock was poisoned by a panicking writer
    #[error("failed to acquire store lock: {0}")]
    LockPoisoned(String),
}

impl From<StoreError> for MaesterError {
    fn from(err: StoreError) -> Self {
        MaesterError::Store(err)
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for maester operations
pub type MaesterResult<T> = Result<T, MaesterError>;

// =============================================================================
// Tests
// =============================================================================
