//! Response collector: captures one respondent's answers to a survey and
//! finalizes them on submit.
//!
//! The collector owns a snapshot of the survey (so a concurrent edit cannot
//! shift questions underneath a respondent) and a draft response. Answers are
//! replaced whole per question; submit validation collects every error before
//! reporting, in question order, and the first error's anchor is exposed for
//! deterministic scroll/focus.

use chrono::Utc;
use fieldwork_types::{Answer, QuestionKind, Response, Survey};

/// An error message attached to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub question_id: String,
    pub message: String,
}

impl FieldError {
    /// The anchor id of the offending control.
    pub fn anchor(&self) -> String {
        format!("question-{}", self.question_id)
    }
}

/// Why an answer update was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectError {
    #[error("no question with id {0}")]
    UnknownQuestion(String),

    #[error("answer shape {got:?} does not match question kind {expected:?}")]
    KindMismatch {
        expected: QuestionKind,
        got: QuestionKind,
    },
}

/// Why a submit attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    /// The survey has no questions; there is nothing to submit.
    #[error("this survey has no questions")]
    NoQuestions,

    /// One or more answers failed validation, in question order.
    #[error("{} answer(s) failed validation", errors.len())]
    Invalid { errors: Vec<FieldError> },
}

impl SubmitRejected {
    /// The anchor of the first invalid question, if any.
    pub fn first_anchor(&self) -> Option<String> {
        match self {
            Self::NoQuestions => None,
            Self::Invalid { errors } => errors.first().map(FieldError::anchor),
        }
    }
}

/// Collects answers for one survey into one draft response.
#[derive(Debug, Clone)]
pub struct ResponseCollector {
    survey: Survey,
    response: Response,
    errors: Vec<FieldError>,
}

impl ResponseCollector {
    /// Begin (or resume) collecting answers.
    ///
    /// Every question without an existing answer entry is seeded with the
    /// type-appropriate empty value; answers already present are left alone,
    /// which is what makes resuming a partially filled response safe.
    pub fn begin(survey: Survey, mut response: Response) -> Self {
        for question in &survey.questions {
            if response.answer(&question.id).is_none() {
                response.set_answer(question.id.clone(), Answer::empty(question.kind));
            }
        }
        Self {
            survey,
            response,
            errors: Vec::new(),
        }
    }

    /// The survey snapshot being answered.
    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    /// The draft response.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Validation errors from the last submit attempt, in question order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The error recorded for one question, if any.
    pub fn error(&self, question_id: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.question_id == question_id)
            .map(|e| e.message.as_str())
    }

    /// Whether submit is available at all (a survey without questions shows
    /// an empty state and keeps submit disabled).
    pub fn can_submit(&self) -> bool {
        !self.survey.questions.is_empty()
    }

    /// Replace the answer for one question.
    ///
    /// The answer's tag must match the question's kind; any error recorded
    /// for the question is cleared on a successful update.
    pub fn set_answer(&mut self, question_id: &str, answer: Answer) -> Result<(), CollectError> {
        let Some(question) = self.survey.question(question_id) else {
            return Err(CollectError::UnknownQuestion(question_id.to_string()));
        };
        if answer.kind() != question.kind {
            return Err(CollectError::KindMismatch {
                expected: question.kind,
                got: answer.kind(),
            });
        }
        self.response.set_answer(question_id.to_string(), answer);
        self.errors.retain(|e| e.question_id != question_id);
        Ok(())
    }

    /// Validate every answer and finalize the response.
    ///
    /// Errors are collected for all questions (not fail-fast). On success the
    /// response is stamped with the submission time and returned; the caller
    /// commits it to the response store and drops this collector, so the
    /// submit side effect happens exactly once.
    pub fn submit(&mut self) -> Result<Response, SubmitRejected> {
        if !self.can_submit() {
            return Err(SubmitRejected::NoQuestions);
        }

        let mut errors = Vec::new();
        for question in &self.survey.questions {
            let answer = self.response.answer(&question.id);

            if question.required && !answer.is_some_and(Answer::is_answered) {
                errors.push(FieldError {
                    question_id: question.id.clone(),
                    message: "This question is required".to_string(),
                });
                continue;
            }

            if question.kind == QuestionKind::Number
                && let Some(answer) = answer
                && answer.is_answered()
                && let Some(message) = numeric_error(question.min, question.max, answer)
            {
                errors.push(FieldError {
                    question_id: question.id.clone(),
                    message,
                });
            }
        }

        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitRejected::Invalid { errors });
        }

        self.errors.clear();
        let mut finalized = self.response.clone();
        finalized.submitted_at = Some(Utc::now());
        Ok(finalized)
    }
}

/// At most one numeric error per question: unparseable first, then the min
/// violation, then the max violation.
fn numeric_error(min: Option<f64>, max: Option<f64>, answer: &Answer) -> Option<String> {
    let raw = answer.as_text().unwrap_or_default().trim();
    let Ok(value) = raw.parse::<f64>() else {
        return Some("Enter a valid number".to_string());
    };
    if let Some(min) = min
        && value < min
    {
        return Some(format!("The minimum value is {min}"));
    }
    if let Some(max) = max
        && value > max
    {
        return Some(format!("The maximum value is {max}"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldwork_types::{Choice, Question, Survey};

    fn survey(questions: Vec<Question>) -> Survey {
        Survey {
            title: "Test".to_string(),
            questions,
            ..Survey::draft()
        }
    }

    fn number_question(min: Option<f64>, max: Option<f64>, required: bool) -> Question {
        Question {
            min,
            max,
            required,
            ..Question::new(QuestionKind::Number, "How many?")
        }
    }

    #[test]
    fn begin_seeds_empty_answers_per_kind() {
        let multi = Question::new(QuestionKind::Multiple, "Pick");
        let text = Question::new(QuestionKind::Text, "Say");
        let (multi_id, text_id) = (multi.id.clone(), text.id.clone());
        let survey = survey(vec![multi, text]);

        let collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));
        assert_eq!(
            collector.response().answer(&multi_id),
            Some(&Answer::Multiple(Vec::new()))
        );
        assert_eq!(
            collector.response().answer(&text_id),
            Some(&Answer::Text(String::new()))
        );
    }

    #[test]
    fn begin_never_overwrites_existing_answers() {
        let question = Question::new(QuestionKind::Text, "Say");
        let question_id = question.id.clone();
        let survey = survey(vec![question]);

        let mut resumed = Response::begin(&survey.id);
        resumed.set_answer(question_id.clone(), Answer::Text("kept".to_string()));

        let collector = ResponseCollector::begin(survey, resumed);
        assert_eq!(
            collector.response().answer(&question_id),
            Some(&Answer::Text("kept".to_string()))
        );
    }

    #[test]
    fn answer_kind_must_match_question() {
        let question = Question::new(QuestionKind::Number, "How many?");
        let question_id = question.id.clone();
        let survey = survey(vec![question]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        let error = collector
            .set_answer(&question_id, Answer::Text("7".to_string()))
            .unwrap_err();
        assert_eq!(
            error,
            CollectError::KindMismatch {
                expected: QuestionKind::Number,
                got: QuestionKind::Text,
            }
        );
    }

    #[test]
    fn required_multiple_needs_a_selection() {
        let mut question = Question::new(QuestionKind::Multiple, "Pick");
        question.required = true;
        question.choices.push(Choice::new("A"));
        question.choices.push(Choice::new("B"));
        let question_id = question.id.clone();
        let survey = survey(vec![question]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        let rejected = collector.submit().unwrap_err();
        assert_eq!(
            rejected.first_anchor(),
            Some(format!("question-{question_id}"))
        );
        assert_eq!(collector.error(&question_id), Some("This question is required"));

        let choice_id = collector.survey().questions[0].choices[0].id.clone();
        collector
            .set_answer(&question_id, Answer::Multiple(vec![choice_id]))
            .unwrap();
        assert!(collector.errors().is_empty());
        assert!(collector.submit().is_ok());
    }

    #[test]
    fn required_text_rejects_blank_after_trim() {
        let mut question = Question::new(QuestionKind::Text, "Say");
        question.required = true;
        let question_id = question.id.clone();
        let survey = survey(vec![question]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        collector
            .set_answer(&question_id, Answer::Text("   ".to_string()))
            .unwrap();
        assert!(matches!(
            collector.submit(),
            Err(SubmitRejected::Invalid { .. })
        ));
    }

    #[test]
    fn number_over_max_reports_max_violation() {
        // required number, min 1 max 5, answer "6"
        let question = number_question(Some(1.0), Some(5.0), true);
        let question_id = question.id.clone();
        let survey = survey(vec![question]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        collector
            .set_answer(&question_id, Answer::Number("6".to_string()))
            .unwrap();
        let rejected = collector.submit().unwrap_err();
        let SubmitRejected::Invalid { errors } = rejected else {
            panic!("expected invalid");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "The maximum value is 5");
    }

    #[test]
    fn number_min_violation_wins_over_max() {
        let question = number_question(Some(10.0), Some(5.0), false);
        let question_id = question.id.clone();
        let survey = survey(vec![question]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        collector
            .set_answer(&question_id, Answer::Number("7".to_string()))
            .unwrap();
        let SubmitRejected::Invalid { errors } = collector.submit().unwrap_err() else {
            panic!("expected invalid");
        };
        assert_eq!(errors[0].message, "The minimum value is 10");
    }

    #[test]
    fn unparseable_number_is_reported() {
        let question = number_question(None, None, false);
        let question_id = question.id.clone();
        let survey = survey(vec![question]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        collector
            .set_answer(&question_id, Answer::Number("lots".to_string()))
            .unwrap();
        let SubmitRejected::Invalid { errors } = collector.submit().unwrap_err() else {
            panic!("expected invalid");
        };
        assert_eq!(errors[0].message, "Enter a valid number");
    }

    #[test]
    fn optional_unanswered_number_passes() {
        let question = number_question(Some(1.0), Some(5.0), false);
        let survey = survey(vec![question]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        let response = collector.submit().unwrap();
        assert!(response.is_submitted());
    }

    #[test]
    fn errors_collected_for_all_questions_not_fail_fast() {
        let mut first = Question::new(QuestionKind::Text, "Say");
        first.required = true;
        let second = number_question(Some(1.0), None, false);
        let second_id = second.id.clone();
        let survey = survey(vec![first, second]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        collector
            .set_answer(&second_id, Answer::Number("0".to_string()))
            .unwrap();
        let SubmitRejected::Invalid { errors } = collector.submit().unwrap_err() else {
            panic!("expected invalid");
        };
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn empty_survey_disables_submit() {
        let survey = survey(Vec::new());
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        assert!(!collector.can_submit());
        assert_eq!(collector.submit(), Err(SubmitRejected::NoQuestions));
    }

    #[test]
    fn successful_submit_stamps_submitted_at() {
        let question = Question::new(QuestionKind::Text, "Say");
        let question_id = question.id.clone();
        let survey = survey(vec![question]);
        let mut collector = ResponseCollector::begin(survey.clone(), Response::begin(&survey.id));

        collector
            .set_answer(&question_id, Answer::Text("hello".to_string()))
            .unwrap();
        let response = collector.submit().unwrap();
        assert!(response.submitted_at.is_some());
        // the draft itself stays unstamped; the finalized copy is what gets stored
        assert!(!collector.response().is_submitted());
    }
}
