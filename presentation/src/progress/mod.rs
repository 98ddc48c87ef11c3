//! Questionnaire progress display

pub mod reporter;
