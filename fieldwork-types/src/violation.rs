/// A structural problem that blocks saving a survey.
///
/// Violations are collected in reporting order: the survey title first, then
/// per question in display order, with the title violation before the
/// choice-count violation for the same question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyViolation {
    #[error("The survey title is required")]
    EmptyTitle,

    #[error("The question title is required")]
    EmptyQuestionTitle { index: usize },

    #[error("At least 2 options are required")]
    TooFewChoices { index: usize },
}

impl SurveyViolation {
    /// A stable anchor id for scrolling/focusing the offending field.
    pub fn anchor(&self) -> String {
        match self {
            Self::EmptyTitle => "title".to_string(),
            Self::EmptyQuestionTitle { index } => format!("question_{index}"),
            Self::TooFewChoices { index } => format!("question_options_{index}"),
        }
    }
}
