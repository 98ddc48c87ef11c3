//! Answer store: question id → rating

use super::rating::{UNANSWERED, validate_rating};
use crate::catalog::entities::Catalog;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from question id to rating (0 = unanswered, 1–5 = answered)
///
/// A missing key reads as [`UNANSWERED`]. Serializes as a flat JSON object,
/// which is also the session snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u8>", into = "BTreeMap<String, u8>")]
pub struct AnswerStore {
    ratings: BTreeMap<String, u8>,
}

impl AnswerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with every catalog question set to unanswered
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            ratings: catalog
                .questions()
                .map(|q| (q.id().to_string(), UNANSWERED))
                .collect(),
        }
    }

    /// Rating for a question; missing keys read as unanswered
    pub fn get(&self, question_id: &str) -> u8 {
        self.ratings
            .get(question_id)
            .copied()
            .unwrap_or(UNANSWERED)
    }

    /// Set a rating, returning the previous value
    pub fn set(&mut self, question_id: impl Into<String>, rating: u8) -> Result<u8, DomainError> {
        let rating = validate_rating(rating)?;
        let previous = self.ratings.insert(question_id.into(), rating);
        Ok(previous.unwrap_or(UNANSWERED))
    }

    pub(crate) fn insert_trusted(&mut self, question_id: impl Into<String>, rating: u8) {
        debug_assert!(validate_rating(rating).is_ok());
        self.ratings.insert(question_id.into(), rating);
    }

    /// Copy every entry of `other` over this store
    pub fn overlay(&mut self, other: &AnswerStore) {
        for (id, rating) in other.iter() {
            self.ratings.insert(id.to_string(), rating);
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.ratings.clear();
    }

    /// Number of stored entries (answered or not)
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.ratings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Drop entries whose question id is not in the catalog
    ///
    /// Returns the removed ids so callers can log them.
    pub fn retain_known(&mut self, catalog: &Catalog) -> Vec<String> {
        let unknown: Vec<String> = self
            .ratings
            .keys()
            .filter(|id| !catalog.contains_question(id))
            .cloned()
            .collect();
        for id in &unknown {
            self.ratings.remove(id);
        }
        unknown
    }
}

impl TryFrom<BTreeMap<String, u8>> for AnswerStore {
    type Error = DomainError;

    fn try_from(ratings: BTreeMap<String, u8>) -> Result<Self, Self::Error> {
        for rating in ratings.values() {
            validate_rating(*rating)?;
        }
        Ok(Self { ratings })
    }
}

impl From<AnswerStore> for BTreeMap<String, u8> {
    fn from(store: AnswerStore) -> Self {
        store.ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entities::Category;
    use crate::catalog::question::Question;

    fn catalog() -> Catalog {
        Catalog::new(vec![Category::new(
            "a",
            "A",
            "A",
            vec![Question::new("a1", "one"), Question::new("a2", "two")],
        )])
        .unwrap()
    }

    #[test]
    fn test_missing_key_reads_as_unanswered() {
        let store = AnswerStore::new();
        assert_eq!(store.get("nope"), UNANSWERED);
    }

    #[test]
    fn test_for_catalog_is_all_zero() {
        let store = AnswerStore::for_catalog(&catalog());
        assert_eq!(store.len(), 2);
        assert!(store.iter().all(|(_, r)| r == 0));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut store = AnswerStore::new();
        assert_eq!(store.set("a1", 3), Ok(0));
        assert_eq!(store.set("a1", 5), Ok(3));
        assert_eq!(store.get("a1"), 5);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut store = AnswerStore::new();
        assert_eq!(store.set("a1", 6), Err(DomainError::InvalidRating(6)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_retain_known() {
        let mut store = AnswerStore::new();
        store.set("a1", 4).unwrap();
        store.set("ghost", 2).unwrap();
        let removed = store.retain_known(&catalog());
        assert_eq!(removed, vec!["ghost".to_string()]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overlay_keeps_unset_entries() {
        let mut base = AnswerStore::for_catalog(&catalog());
        let mut restored = AnswerStore::new();
        restored.set("a2", 5).unwrap();

        base.overlay(&restored);
        assert_eq!(base.get("a1"), 0);
        assert_eq!(base.get("a2"), 5);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_json_snapshot_format() {
        let mut store = AnswerStore::new();
        store.set("a2", 1).unwrap();
        store.set("a1", 4).unwrap();
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"a1":4,"a2":1}"#);

        let restored: AnswerStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn test_deserialize_rejects_invalid_rating() {
        let result: Result<AnswerStore, _> = serde_json::from_str(r#"{"a1":9}"#);
        assert!(result.is_err());
    }
}
