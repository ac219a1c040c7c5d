//! Results aggregator: per-question tallies and percentages.
//!
//! Aggregation is a pure function over a survey and its responses; running
//! it twice over the same input yields identical statistics. Answers that
//! reference a choice id no longer present in the survey definition are a
//! consequence of the weak survey reference and tally into no bucket.

use fieldwork_types::{Answer, QuestionKind, Response, Survey};

/// Count and percentage for one choice of a single/multiple question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceTally {
    pub choice_id: String,
    pub text: String,
    pub count: usize,
    /// `round(count / answered × 100)`; 0 when nobody answered the question.
    pub percent: u32,
}

/// Statistics for one question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionStats {
    pub question_id: String,
    pub title: String,
    pub kind: QuestionKind,

    /// Responses with a non-empty answer for this question. This is the
    /// percentage denominator: a respondent who skipped a non-required
    /// question does not count against it.
    pub answered: usize,

    /// Per-choice breakdown; empty for kinds without choices.
    pub tallies: Vec<ChoiceTally>,
}

/// Aggregated statistics for one survey.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResults {
    pub survey_id: String,
    pub total_responses: usize,
    pub questions: Vec<QuestionStats>,
}

impl SurveyResults {
    /// Whether there is anything to show; callers render a "no responses
    /// yet" empty state otherwise.
    pub fn has_responses(&self) -> bool {
        self.total_responses > 0
    }
}

/// Tabulate every question of `survey` over the matching responses.
///
/// Only responses whose `survey_id` matches contribute; with no matching
/// responses, no per-question computation is performed.
pub fn aggregate(survey: &Survey, responses: &[Response]) -> SurveyResults {
    let matching: Vec<&Response> = responses
        .iter()
        .filter(|r| r.survey_id == survey.id)
        .collect();

    if matching.is_empty() {
        return SurveyResults {
            survey_id: survey.id.clone(),
            total_responses: 0,
            questions: Vec::new(),
        };
    }

    let questions = survey
        .questions
        .iter()
        .map(|question| {
            let answers: Vec<&Answer> = matching
                .iter()
                .filter_map(|r| r.answer(&question.id))
                .filter(|a| a.is_answered())
                .collect();
            let answered = answers.len();

            let tallies = question
                .choices
                .iter()
                .map(|choice| {
                    let count = answers.iter().filter(|a| a.selects(&choice.id)).count();
                    ChoiceTally {
                        choice_id: choice.id.clone(),
                        text: choice.text.clone(),
                        count,
                        percent: percentage(count, answered),
                    }
                })
                .collect();

            QuestionStats {
                question_id: question.id.clone(),
                title: question.title.clone(),
                kind: question.kind,
                answered,
                tallies: if question.kind.has_choices() {
                    tallies
                } else {
                    Vec::new()
                },
            }
        })
        .collect();

    SurveyResults {
        survey_id: survey.id.clone(),
        total_responses: matching.len(),
        questions,
    }
}

fn percentage(count: usize, answered: usize) -> u32 {
    if answered == 0 {
        return 0;
    }
    (count as f64 / answered as f64 * 100.0).round() as u32
}
