//! Survey editor: mutates a single survey draft and commits it only when
//! validation passes.
//!
//! Every applied mutation refreshes the draft's `updated_at`, whether or not
//! a later commit succeeds; the in-memory draft always reflects the latest
//! edit time, and only a successful commit makes it the caller's problem to
//! persist. Operations addressing an unknown question or choice id are
//! no-ops and report it through their return value.

use fieldwork_types::{Choice, Question, QuestionKind, Survey, SurveyViolation};

/// A commit attempt that failed validation.
///
/// Carries every violation in reporting order; the draft is left untouched so
/// no edits are lost.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("survey draft failed validation ({} problem(s))", violations.len())]
pub struct DraftRejected {
    pub violations: Vec<SurveyViolation>,
}

impl DraftRejected {
    /// The anchor of the first violation, for deterministic scroll/focus.
    pub fn first_anchor(&self) -> Option<String> {
        self.violations.first().map(SurveyViolation::anchor)
    }
}

/// Edits one survey draft, new or existing.
#[derive(Debug, Clone)]
pub struct SurveyEditor {
    draft: Survey,
}

impl SurveyEditor {
    /// Start editing the given survey.
    pub fn new(survey: Survey) -> Self {
        Self { draft: survey }
    }

    /// The current draft.
    pub fn draft(&self) -> &Survey {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        self.draft.touch();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.draft.touch();
    }

    /// Append a default question (free text, empty title) and return its id.
    pub fn add_question(&mut self) -> String {
        let question = Question::blank();
        let id = question.id.clone();
        self.draft.questions.push(question);
        self.draft.touch();
        id
    }

    /// Remove a question by id. No confirmation at this layer.
    pub fn delete_question(&mut self, question_id: &str) -> bool {
        let Some(index) = self.draft.position(question_id) else {
            return false;
        };
        self.draft.questions.remove(index);
        self.draft.touch();
        true
    }

    /// Clone a question (fresh id, all other fields as-is) and insert the
    /// copy immediately after the source. Returns the copy's id.
    pub fn duplicate_question(&mut self, question_id: &str) -> Option<String> {
        let index = self.draft.position(question_id)?;
        let copy = self.draft.questions[index].duplicated();
        let copy_id = copy.id.clone();
        self.draft.questions.insert(index + 1, copy);
        self.draft.touch();
        Some(copy_id)
    }

    /// Swap a question with its predecessor. No-op at the top.
    pub fn move_question_up(&mut self, question_id: &str) -> bool {
        let Some(index) = self.draft.position(question_id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        self.draft.questions.swap(index, index - 1);
        self.draft.touch();
        true
    }

    /// Swap a question with its successor. No-op at the bottom.
    pub fn move_question_down(&mut self, question_id: &str) -> bool {
        let Some(index) = self.draft.position(question_id) else {
            return false;
        };
        if index + 1 >= self.draft.questions.len() {
            return false;
        }
        self.draft.questions.swap(index, index + 1);
        self.draft.touch();
        true
    }

    /// Reposition a question to an arbitrary index (drag reorder).
    /// The target index is clamped to the question list.
    pub fn move_question_to(&mut self, question_id: &str, to: usize) -> bool {
        let Some(from) = self.draft.position(question_id) else {
            return false;
        };
        let to = to.min(self.draft.questions.len() - 1);
        if from == to {
            return false;
        }
        let question = self.draft.questions.remove(from);
        self.draft.questions.insert(to, question);
        self.draft.touch();
        true
    }

    pub fn set_question_title(&mut self, question_id: &str, title: impl Into<String>) -> bool {
        self.edit_question(question_id, |q| q.title = title.into())
    }

    /// Change a question's type tag. Existing choices and bounds are kept so
    /// switching back and forth loses nothing; validation only looks at the
    /// fields relevant to the current kind.
    pub fn set_question_kind(&mut self, question_id: &str, kind: QuestionKind) -> bool {
        self.edit_question(question_id, |q| q.kind = kind)
    }

    pub fn set_question_required(&mut self, question_id: &str, required: bool) -> bool {
        self.edit_question(question_id, |q| q.required = required)
    }

    /// Set the numeric bounds of a number question.
    pub fn set_question_bounds(
        &mut self,
        question_id: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> bool {
        self.edit_question(question_id, |q| {
            q.min = min;
            q.max = max;
        })
    }

    /// Append a choice to a question and return its id.
    pub fn add_choice(&mut self, question_id: &str, text: impl Into<String>) -> Option<String> {
        let index = self.draft.position(question_id)?;
        let choice = Choice::new(text);
        let choice_id = choice.id.clone();
        self.draft.questions[index].choices.push(choice);
        self.draft.touch();
        Some(choice_id)
    }

    pub fn set_choice_text(
        &mut self,
        question_id: &str,
        choice_id: &str,
        text: impl Into<String>,
    ) -> bool {
        let Some(index) = self.draft.position(question_id) else {
            return false;
        };
        let Some(choice) = self.draft.questions[index]
            .choices
            .iter_mut()
            .find(|c| c.id == choice_id)
        else {
            return false;
        };
        choice.text = text.into();
        self.draft.touch();
        true
    }

    /// Remove a choice. Blocked when it would leave fewer than one choice;
    /// the two-choice minimum for single/multiple questions is enforced at
    /// commit time, not here.
    pub fn delete_choice(&mut self, question_id: &str, choice_id: &str) -> bool {
        let Some(index) = self.draft.position(question_id) else {
            return false;
        };
        let question = &mut self.draft.questions[index];
        if question.choices.len() <= 1 {
            return false;
        }
        let Some(choice_index) = question.choices.iter().position(|c| c.id == choice_id) else {
            return false;
        };
        question.choices.remove(choice_index);
        self.draft.touch();
        true
    }

    /// Validate the draft and hand back a saveable survey.
    ///
    /// On rejection all violations are reported at once and the draft keeps
    /// every edit made so far.
    pub fn commit(&self) -> Result<Survey, DraftRejected> {
        let violations = self.draft.validate();
        if violations.is_empty() {
            Ok(self.draft.clone())
        } else {
            Err(DraftRejected { violations })
        }
    }

    fn edit_question(&mut self, question_id: &str, edit: impl FnOnce(&mut Question)) -> bool {
        let Some(index) = self.draft.position(question_id) else {
            return false;
        };
        edit(&mut self.draft.questions[index]);
        self.draft.touch();
        true
    }
}
