//! Overall score weighting

use serde::{Deserialize, Serialize};

/// How the overall score combines category results
///
/// Categories have different sizes (5 to 8 questions), so the two modes
/// disagree whenever category scores differ.
///
/// # Example
///
/// ```
/// use maturity_domain::OverallWeighting;
///
/// assert_eq!(OverallWeighting::default(), OverallWeighting::Question);
/// assert_eq!("category".parse::<OverallWeighting>(), Ok(OverallWeighting::Category));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallWeighting {
    /// Every question counts once; larger categories weigh more
    #[default]
    Question,
    /// Every category counts once regardless of its size
    Category,
}

impl OverallWeighting {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallWeighting::Question => "question",
            OverallWeighting::Category => "category",
        }
    }
}

impl std::fmt::Display for OverallWeighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OverallWeighting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "question" | "questions" => Ok(OverallWeighting::Question),
            "category" | "categories" => Ok(OverallWeighting::Category),
            _ => Err(format!(
                "Unknown weighting: {}. Valid: question, category",
                s
            )),
        }
    }
}
