//! Question catalog domain.
//!
//! - [`question::Question`] — a single Likert-scale statement
//! - [`entities::Category`] — an ordered group of questions with one sub-score
//! - [`entities::Catalog`] — the validated, read-only set of categories
//! - [`builtin`] — the shipped assessment content and sample answers

pub mod builtin;
pub mod entities;
pub mod question;
