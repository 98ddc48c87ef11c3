//! Question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single Likert-scale statement in the catalog (Value Object)
///
/// Questions are identified by an id that is unique across the whole
/// catalog, so answers can be stored in a flat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    text: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the id or text is empty or only whitespace
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        match Self::try_new(id, text) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }

    /// Try to create a new question, rejecting blank ids and text
    pub fn try_new(id: impl Into<String>, text: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let text = text.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidQuestion("question id cannot be empty".to_string()));
        }
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "question '{}' has no text",
                id
            )));
        }
        Ok(Self { id, text })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("q_vision_1", "Is the AI goal documented?");
        assert_eq!(q.id(), "q_vision_1");
        assert_eq!(q.text(), "Is the AI goal documented?");
        assert_eq!(q.to_string(), "Is the AI goal documented?");
    }

    #[test]
    #[should_panic]
    fn test_empty_text_panics() {
        Question::new("q1", "");
    }

    #[test]
    fn test_try_new_rejects_blank() {
        assert!(Question::try_new("", "text").is_err());
        assert!(Question::try_new("q1", "   ").is_err());
        assert!(Question::try_new("q1", "text").is_ok());
    }

    #[test]
    fn test_deserialize() {
        let q: Question = serde_json::from_str(r#"{"id":"q1","text":"Hello"}"#).unwrap();
        assert_eq!(q, Question::new("q1", "Hello"));
    }
}
