//! Domain layer for ai-maturity
//!
//! This crate contains the question catalog, the answer store and the
//! scoring engine. It has no dependencies on storage, rendering or any
//! other infrastructure concern.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! Five categories of Likert-scale questions. A [`Catalog`] is validated on
//! construction: no empty categories, globally unique question ids.
//!
//! ## Scoring
//!
//! - **Category score**: average rating × 20, rounded to two decimals
//! - **Overall score**: question-weighted average across the whole catalog
//! - **Maturity level**: tier derived from a raw 1–5 average

pub mod answers;
pub mod catalog;
pub mod config;
pub mod core;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use answers::{
    AnswerStore,
    rating::{MAX_RATING, MIN_RATING, UNANSWERED, rating_label},
};
pub use catalog::{
    builtin::{BUILTIN_CATALOG_VERSION, sample_answers},
    entities::{Catalog, Category, CategoryGuidance},
    question::Question,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, OverallWeighting, Severity};
pub use core::error::DomainError;
pub use report::{CategoryResult, Report};
pub use scoring::{
    CategoryScore, CompletionStatus, MaturityLevel, classify_maturity, completion_status,
    compute_category_score, compute_overall_score, rank_categories_by_score,
};
