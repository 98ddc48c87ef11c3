//! Likert rating scale

use crate::core::error::DomainError;

/// Sentinel rating for a question that has not been answered yet
pub const UNANSWERED: u8 = 0;

/// Lowest Likert answer
pub const MIN_RATING: u8 = 1;

/// Highest Likert answer
pub const MAX_RATING: u8 = 5;

/// Check that a rating lies in `0..=5`
pub fn validate_rating(rating: u8) -> Result<u8, DomainError> {
    if rating <= MAX_RATING {
        Ok(rating)
    } else {
        Err(DomainError::InvalidRating(rating))
    }
}

/// Respondent-facing label for an answered rating
///
/// Returns `None` for the unanswered sentinel and out-of-range values.
pub fn rating_label(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("전혀 그렇지 않다"),
        2 => Some("그렇지 않다"),
        3 => Some("보통이다"),
        4 => Some("그렇다"),
        5 => Some("매우 그렇다"),
        _ => None,
    }
}
