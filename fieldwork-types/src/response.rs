use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Answer;

/// One respondent's set of answers to a survey.
///
/// A response is created when the respondent starts the survey, mutated in
/// place as questions are answered, and persisted exactly once at submit.
/// `submitted_at` stays `None` while the response is in progress; a response
/// is never mutated after it is set.
///
/// `survey_id` is a weak reference: if the survey definition changes after
/// responses exist, stale choice references simply match nothing during
/// tabulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: String,

    #[serde(rename = "surveyId")]
    pub survey_id: String,

    /// Question id to answer value.
    pub answers: HashMap<String, Answer>,

    #[serde(rename = "submittedAt")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Response {
    /// Start a fresh draft response bound to a survey.
    pub fn begin(survey_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            survey_id: survey_id.into(),
            answers: HashMap::new(),
            submitted_at: None,
        }
    }

    /// The answer recorded for a question, if any.
    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Record an answer, fully replacing any previous entry for the question.
    pub fn set_answer(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.answers.insert(question_id.into(), answer);
    }

    /// Whether the question has a non-empty answer recorded.
    pub fn has_answered(&self, question_id: &str) -> bool {
        self.answers
            .get(question_id)
            .is_some_and(Answer::is_answered)
    }

    /// Whether this response has been submitted.
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }
}
