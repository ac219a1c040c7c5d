use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Question, SurveyViolation};

/// A named, ordered collection of questions.
///
/// Question order is meaningful: it determines display order, response
/// collection order, and the order in which validation violations are
/// reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub questions: Vec<Question>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation, even ones that are never saved.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Survey {
    /// Create a fresh in-memory draft with a generated id and no questions.
    pub fn draft() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            title: String::new(),
            description: String::new(),
            questions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Look up a question by id.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// The position of a question by id.
    pub fn position(&self, question_id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == question_id)
    }

    /// Refresh `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Collect every structural violation, in reporting order.
    ///
    /// An empty result means the survey may be saved. Violations are
    /// collected exhaustively rather than fail-fast so the caller can surface
    /// all of them positionally at once.
    pub fn validate(&self) -> Vec<SurveyViolation> {
        let mut violations = Vec::new();

        if self.title.trim().is_empty() {
            violations.push(SurveyViolation::EmptyTitle);
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.title.trim().is_empty() {
                violations.push(SurveyViolation::EmptyQuestionTitle { index });
            }
            if question.kind.has_choices() && question.choices.len() < 2 {
                violations.push(SurveyViolation::TooFewChoices { index });
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Choice, QuestionKind};

    fn survey_with(questions: Vec<Question>) -> Survey {
        Survey {
            title: "Customer feedback".to_string(),
            questions,
            ..Survey::draft()
        }
    }

    #[test]
    fn valid_survey_has_no_violations() {
        let mut question = Question::new(QuestionKind::Single, "Happy?");
        question.choices.push(Choice::new("Yes"));
        question.choices.push(Choice::new("No"));

        assert!(survey_with(vec![question]).validate().is_empty());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut survey = survey_with(Vec::new());
        survey.title = "   ".to_string();

        assert_eq!(survey.validate(), vec![SurveyViolation::EmptyTitle]);
    }

    #[test]
    fn violations_come_in_reporting_order() {
        let mut choice_question = Question::new(QuestionKind::Multiple, "");
        choice_question.choices.push(Choice::new("Only one"));

        let mut survey = survey_with(vec![Question::blank(), choice_question]);
        survey.title = String::new();

        let violations = survey.validate();
        assert_eq!(
            violations,
            vec![
                SurveyViolation::EmptyTitle,
                SurveyViolation::EmptyQuestionTitle { index: 0 },
                SurveyViolation::EmptyQuestionTitle { index: 1 },
                SurveyViolation::TooFewChoices { index: 1 },
            ]
        );
        assert_eq!(violations[0].anchor(), "title");
        assert_eq!(violations[3].anchor(), "question_options_1");
    }

    #[test]
    fn single_question_needs_two_choices() {
        let mut question = Question::new(QuestionKind::Single, "Pick one");
        question.choices.push(Choice::new("Lonely"));

        let violations = survey_with(vec![question]).validate();
        assert_eq!(violations, vec![SurveyViolation::TooFewChoices { index: 0 }]);
    }

    #[test]
    fn text_question_ignores_choice_rule() {
        let question = Question::new(QuestionKind::Text, "Thoughts?");
        assert!(survey_with(vec![question]).validate().is_empty());
    }
}
