//! Report domain.
//!
//! - [`entities::Report`] — overall score, per-category results and maturity
//! - [`entities::CategoryResult`] — one category's score, average and tier

pub mod entities;

pub use entities::{CategoryResult, Report};
