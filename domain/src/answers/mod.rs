//! Answer domain.
//!
//! - [`store::AnswerStore`] — question id → rating map, owned by the session
//! - [`rating`] — the 0–5 Likert scale (0 = unanswered)

pub mod rating;
pub mod store;

pub use store::AnswerStore;
