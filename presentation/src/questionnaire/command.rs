//! Questionnaire input parsing

use maturity_domain::{MAX_RATING, MIN_RATING, UNANSWERED};

/// One line of questionnaire input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireCommand {
    /// Rate the current question (bare number, never 0)
    Rate(u8),
    /// Rate question `index` (1-based, within the current step); 0 clears it
    Set { index: usize, rating: u8 },
    /// Fill every answer with the built-in sample
    Sample,
    Next,
    Prev,
    Show,
    Submit,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

fn parse_rating(token: &str, min: u8) -> Option<u8> {
    token
        .parse::<u8>()
        .ok()
        .filter(|r| (min..=MAX_RATING).contains(r))
}

impl QuestionnaireCommand {
    /// Parse a trimmed, non-empty input line
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Self::Unknown(String::new());
        };

        if !head.starts_with('/') {
            return match (parse_rating(head, MIN_RATING), tokens.next()) {
                (Some(rating), None) => Self::Rate(rating),
                _ => Self::Unknown(line.to_string()),
            };
        }

        match head {
            "/next" | "/n" => Self::Next,
            "/prev" | "/p" | "/back" => Self::Prev,
            "/show" | "/s" => Self::Show,
            "/submit" => Self::Submit,
            "/reset" => Self::Reset,
            "/sample" => Self::Sample,
            "/help" | "/h" | "/?" => Self::Help,
            "/quit" | "/exit" | "/q" => Self::Quit,
            "/set" => {
                let index = tokens.next().and_then(|t| t.parse::<usize>().ok());
                let rating = tokens.next().and_then(|t| parse_rating(t, UNANSWERED));
                match (index, rating, tokens.next()) {
                    (Some(index), Some(rating), None) if index > 0 => Self::Set { index, rating },
                    _ => Self::Unknown(line.to_string()),
                }
            }
            _ => Self::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_rating() {
        assert_eq!(QuestionnaireCommand::parse("4"), QuestionnaireCommand::Rate(4));
        assert_eq!(
            QuestionnaireCommand::parse("0"),
            QuestionnaireCommand::Unknown("0".to_string())
        );
        assert!(matches!(
            QuestionnaireCommand::parse("6"),
            QuestionnaireCommand::Unknown(_)
        ));
        assert!(matches!(
            QuestionnaireCommand::parse("4 5"),
            QuestionnaireCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_set() {
        assert_eq!(
            QuestionnaireCommand::parse("/set 3 5"),
            QuestionnaireCommand::Set {
                index: 3,
                rating: 5
            }
        );
        assert_eq!(
            QuestionnaireCommand::parse("/set 2 0"),
            QuestionnaireCommand::Set {
                index: 2,
                rating: 0
            }
        );
        assert!(matches!(
            QuestionnaireCommand::parse("/set 0 5"),
            QuestionnaireCommand::Unknown(_)
        ));
        assert!(matches!(
            QuestionnaireCommand::parse("/set 2"),
            QuestionnaireCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(QuestionnaireCommand::parse("/n"), QuestionnaireCommand::Next);
        assert_eq!(QuestionnaireCommand::parse("/back"), QuestionnaireCommand::Prev);
        assert_eq!(QuestionnaireCommand::parse("/q"), QuestionnaireCommand::Quit);
        assert_eq!(QuestionnaireCommand::parse("/sample"), QuestionnaireCommand::Sample);
        assert_eq!(
            QuestionnaireCommand::parse("/frobnicate"),
            QuestionnaireCommand::Unknown("/frobnicate".to_string())
        );
    }
}
