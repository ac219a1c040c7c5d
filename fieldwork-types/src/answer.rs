use serde::{Deserialize, Serialize};

use crate::QuestionKind;

/// A single answer value, tagged by the question type it belongs to.
///
/// The tag makes the answer shape explicit at construction instead of being
/// inferred at each call site: text-like kinds carry free-form text, `Single`
/// carries one choice id, `Multiple` carries a set of choice ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Answer {
    /// Free-form text.
    Text(String),

    /// Numeric text, interpreted as a decimal at validation time.
    Number(String),

    /// A date, carried as text.
    Date(String),

    /// The id of the selected choice; empty until the respondent picks one.
    Single(String),

    /// The ids of the selected choices.
    Multiple(Vec<String>),
}

impl Answer {
    /// The type-appropriate empty value used to seed a draft response.
    pub fn empty(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Text => Self::Text(String::new()),
            QuestionKind::Number => Self::Number(String::new()),
            QuestionKind::Date => Self::Date(String::new()),
            QuestionKind::Single => Self::Single(String::new()),
            QuestionKind::Multiple => Self::Multiple(Vec::new()),
        }
    }

    /// The question kind this answer belongs to.
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Text(_) => QuestionKind::Text,
            Self::Number(_) => QuestionKind::Number,
            Self::Date(_) => QuestionKind::Date,
            Self::Single(_) => QuestionKind::Single,
            Self::Multiple(_) => QuestionKind::Multiple,
        }
    }

    /// Whether the respondent actually answered.
    ///
    /// Blank-after-trim text and empty selections count as unanswered; this
    /// drives required-field validation and tally denominators.
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Text(s) | Self::Number(s) | Self::Date(s) => !s.trim().is_empty(),
            Self::Single(choice_id) => !choice_id.is_empty(),
            Self::Multiple(choice_ids) => !choice_ids.is_empty(),
        }
    }

    /// The textual content of text-like answers.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Number(s) | Self::Date(s) => Some(s),
            _ => None,
        }
    }

    /// The selected choice id of a single-choice answer, if one was picked.
    pub fn selected_choice(&self) -> Option<&str> {
        match self {
            Self::Single(choice_id) if !choice_id.is_empty() => Some(choice_id),
            _ => None,
        }
    }

    /// Whether this answer selects the given choice id.
    ///
    /// For `Single` this is an equality check, for `Multiple` a containment
    /// check; always false for other kinds.
    pub fn selects(&self, choice_id: &str) -> bool {
        match self {
            Self::Single(selected) => selected == choice_id,
            Self::Multiple(selected) => selected.iter().any(|id| id == choice_id),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_seed_matches_kind() {
        for kind in [
            QuestionKind::Text,
            QuestionKind::Number,
            QuestionKind::Date,
            QuestionKind::Single,
            QuestionKind::Multiple,
        ] {
            let answer = Answer::empty(kind);
            assert_eq!(answer.kind(), kind);
            assert!(!answer.is_answered());
        }
    }

    #[test]
    fn whitespace_text_is_unanswered() {
        assert!(!Answer::Text("   ".to_string()).is_answered());
        assert!(Answer::Text("hello".to_string()).is_answered());
    }

    #[test]
    fn selects_checks_single_and_multiple() {
        let single = Answer::Single("a".to_string());
        assert!(single.selects("a"));
        assert!(!single.selects("b"));

        let multiple = Answer::Multiple(vec!["a".to_string(), "b".to_string()]);
        assert!(multiple.selects("b"));
        assert!(!multiple.selects("c"));

        assert!(!Answer::Text("a".to_string()).selects("a"));
    }
}
