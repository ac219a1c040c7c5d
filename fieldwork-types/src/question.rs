use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of question, determining the input control and answer shape.
///
/// This is a closed tag set; all rendering, validation, and tabulation
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free-form text input.
    Text,

    /// Pick exactly one choice.
    Single,

    /// Pick any number of choices.
    Multiple,

    /// Numeric text, interpreted as a decimal, with optional bounds.
    Number,

    /// A date, carried as text.
    Date,
}

impl QuestionKind {
    /// Check if this kind offers a list of choices to pick from.
    pub fn has_choices(self) -> bool {
        matches!(self, Self::Single | Self::Multiple)
    }

    /// Check if this kind supports min/max bounds.
    pub fn has_bounds(self) -> bool {
        self == Self::Number
    }

    /// Human-readable name, used in result summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Single => "single choice",
            Self::Multiple => "multiple choice",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

/// A selectable choice in a single/multiple question.
///
/// The id is unique within the parent question and is what answers reference;
/// the text is the label shown to respondents and used as the tally key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub text: String,
}

impl Choice {
    /// Create a new choice with a generated id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            text: text.into(),
        }
    }
}

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique within the parent survey, immutable.
    pub id: String,

    /// The question type tag.
    #[serde(rename = "type")]
    pub kind: QuestionKind,

    /// The prompt text shown to respondents.
    pub title: String,

    /// Whether an answer is mandatory at submit time.
    pub required: bool,

    /// Choices for single/multiple questions; unused for other kinds.
    #[serde(rename = "options", default)]
    pub choices: Vec<Choice>,

    /// Lower bound for number questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound for number questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Question {
    /// Create a new question of the given kind with a generated id.
    pub fn new(kind: QuestionKind, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            kind,
            title: title.into(),
            required: false,
            choices: Vec::new(),
            min: None,
            max: None,
        }
    }

    /// The default question appended by the editor: free text, empty title.
    pub fn blank() -> Self {
        Self::new(QuestionKind::Text, "")
    }

    /// Look up a choice by id.
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    /// A copy of this question with a fresh id, for duplication.
    /// All other fields (title, choices, bounds) are cloned as-is.
    pub fn duplicated(&self) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_question_is_text_with_empty_title() {
        let question = Question::blank();
        assert_eq!(question.kind, QuestionKind::Text);
        assert!(question.title.is_empty());
        assert!(!question.required);
        assert!(question.choices.is_empty());
    }

    #[test]
    fn duplicated_question_gets_fresh_id() {
        let mut original = Question::new(QuestionKind::Single, "Favorite color?");
        original.choices.push(Choice::new("Red"));
        original.choices.push(Choice::new("Blue"));
        original.required = true;

        let copy = original.duplicated();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, original.title);
        assert_eq!(copy.choices, original.choices);
        assert!(copy.required);
    }

    #[test]
    fn kind_tag_serializes_lowercase() {
        let question = Question::new(QuestionKind::Multiple, "Pick some");
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "multiple");
    }
}
