//! Scoring domain
//!
//! Pure transforms from a [`Catalog`](crate::Catalog) and an
//! [`AnswerStore`](crate::AnswerStore) to scores, maturity tiers and
//! completion status. Nothing here owns mutable state.
//!
//! ```text
//!   ratings (0–5) ──► category average ──► × 20 ──► CategoryScore (0–100)
//!                  │                    └──────────► MaturityLevel (1–5)
//!                  └► catalog average ───► × 20 ──► overall score (0–100)
//! ```

pub mod engine;
pub mod maturity;
pub mod progress;

pub use engine::{
    CategoryScore, SCORE_SCALE, category_average, compute_category_score,
    compute_category_scores, compute_overall_score, compute_overall_score_with, overall_average,
    rank_categories_by_score, round2, to_percent,
};
pub use maturity::{MaturityLevel, classify_maturity};
pub use progress::{CompletionStatus, catalog_completion, completion_status, first_incomplete};
