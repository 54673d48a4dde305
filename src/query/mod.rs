//! Query resolution engine
//!
//! A query moves through a fixed pipeline: the parser turns raw parameters
//! into a [`QuerySpec`], the filter engine keeps the matching records, the
//! sort engine orders them, and the pagination engine cuts the requested
//! window. Every stage is a pure function over an owned snapshot; the
//! resolver chains them and reports the pre-pagination match count.

pub mod filter;
pub mod page;
mod parse;
pub mod resolve;
pub mod sort;
pub mod spec;

pub use resolve::{resolve, resolve_spec};
pub use spec::{QuerySpec, SortField, SortOrder, TextMatch};
