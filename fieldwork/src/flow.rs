//! View controller: switches between the list, editor, form, and results
//! views and owns the stores.
//!
//! `List` is both the initial view and the return state from every other
//! view; all transitions are user-triggered. Store writes go through the
//! persistence port *before* the in-memory state is updated, so a failed
//! save aborts the operation with the prior state retained. Leaving a view
//! through [`App::back`] discards unsaved work without confirmation; only
//! survey deletion demands an explicit confirmation.

use fieldwork_store::{Persistence, StoreError, load_or_default, save_value};
use fieldwork_types::{Response, Survey};

use crate::collector::{ResponseCollector, SubmitRejected};
use crate::editor::{DraftRejected, SurveyEditor};
use crate::results::{SurveyResults, aggregate};
use crate::store::{ResponseStore, SurveyStore};

const SURVEYS_KEY: &str = "surveys";
const RESPONSES_KEY: &str = "responses";

/// The active view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Editor,
    Form,
    Results,
}

/// Who is using the application; gates the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

/// Explicit application context passed to the controller instead of ambient
/// global state. The controller reads it; the embedding shell owns writes.
#[derive(Debug, Clone)]
pub struct AppContext {
    role: Role,
}

impl AppContext {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Error type for controller actions.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("this action requires the admin role")]
    NotPermitted,

    #[error("no survey with id {0}")]
    UnknownSurvey(String),

    #[error("another view is already active")]
    ViewActive,

    #[error("nothing is being edited or answered")]
    NothingActive,

    #[error("survey deletion requires confirmation")]
    ConfirmationRequired,

    /// The editor draft failed validation; the editor stays open with every
    /// edit retained.
    #[error(transparent)]
    InvalidDraft(#[from] DraftRejected),

    /// The response failed validation; the form stays open.
    #[error(transparent)]
    InvalidResponse(#[from] SubmitRejected),

    /// The persistence port failed; in-memory state is unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The application controller.
pub struct App {
    context: AppContext,
    persistence: Box<dyn Persistence>,
    surveys: SurveyStore,
    responses: ResponseStore,
    view: View,
    editor: Option<SurveyEditor>,
    collector: Option<ResponseCollector>,
    results: Option<SurveyResults>,
}

impl App {
    /// Load both stores through the persistence port and start on the list.
    pub fn new(
        context: AppContext,
        persistence: impl Persistence + 'static,
    ) -> Result<Self, StoreError> {
        let surveys = load_or_default(&persistence, SURVEYS_KEY)?;
        let responses = load_or_default(&persistence, RESPONSES_KEY)?;
        Ok(Self {
            context,
            persistence: Box::new(persistence),
            surveys,
            responses,
            view: View::List,
            editor: None,
            collector: None,
            results: None,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn surveys(&self) -> &SurveyStore {
        &self.surveys
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    /// The active editor, while in the editor view.
    pub fn editor_mut(&mut self) -> Option<&mut SurveyEditor> {
        self.editor.as_mut()
    }

    /// The active collector, while in the form view.
    pub fn collector_mut(&mut self) -> Option<&mut ResponseCollector> {
        self.collector.as_mut()
    }

    /// The computed results, while in the results view.
    pub fn results(&self) -> Option<&SurveyResults> {
        self.results.as_ref()
    }

    /// Whether leaving the current view would discard anything.
    pub fn has_unsaved_work(&self) -> bool {
        self.editor.is_some() || self.collector.is_some()
    }

    /// List -> editor with a fresh draft. Admin only.
    pub fn create_survey(&mut self) -> Result<(), FlowError> {
        self.require_admin()?;
        self.require_list()?;
        self.editor = Some(SurveyEditor::new(Survey::draft()));
        self.view = View::Editor;
        Ok(())
    }

    /// List -> editor for an existing survey. Admin only.
    pub fn edit_survey(&mut self, survey_id: &str) -> Result<(), FlowError> {
        self.require_admin()?;
        self.require_list()?;
        let survey = self.lookup(survey_id)?.clone();
        self.editor = Some(SurveyEditor::new(survey));
        self.view = View::Editor;
        Ok(())
    }

    /// List -> form with a fresh draft response bound to the survey.
    pub fn answer_survey(&mut self, survey_id: &str) -> Result<(), FlowError> {
        self.require_list()?;
        let survey = self.lookup(survey_id)?.clone();
        let draft = Response::begin(&survey.id);
        self.collector = Some(ResponseCollector::begin(survey, draft));
        self.view = View::Form;
        Ok(())
    }

    /// List -> results.
    pub fn view_results(&mut self, survey_id: &str) -> Result<(), FlowError> {
        self.require_list()?;
        let survey = self.lookup(survey_id)?;
        self.results = Some(aggregate(survey, self.responses.all()));
        self.view = View::Results;
        Ok(())
    }

    /// Validate and save the edited survey, then return to the list.
    ///
    /// A validation rejection or a persistence failure leaves the editor
    /// open with the draft intact.
    pub fn save_editor(&mut self) -> Result<(), FlowError> {
        let editor = self.editor.as_ref().ok_or(FlowError::NothingActive)?;
        let survey = editor.commit()?;

        let mut updated = self.surveys.clone();
        updated.upsert(survey);
        save_value(self.persistence.as_mut(), SURVEYS_KEY, &updated)?;
        tracing::debug!(count = updated.len(), "saved surveys");

        self.surveys = updated;
        self.editor = None;
        self.view = View::List;
        Ok(())
    }

    /// Validate and submit the in-progress response, then return to the list.
    pub fn submit_form(&mut self) -> Result<(), FlowError> {
        let collector = self.collector.as_mut().ok_or(FlowError::NothingActive)?;
        let response = collector.submit()?;

        let mut updated = self.responses.clone();
        updated.append(response);
        save_value(self.persistence.as_mut(), RESPONSES_KEY, &updated)?;
        tracing::debug!(count = updated.len(), "saved responses");

        self.responses = updated;
        self.collector = None;
        self.view = View::List;
        Ok(())
    }

    /// Delete a survey and exactly the responses that reference it.
    ///
    /// Requires the admin role and an explicit confirmation; unsaved-edit
    /// discards elsewhere are silent, deletion is not.
    pub fn delete_survey(&mut self, survey_id: &str, confirmed: bool) -> Result<(), FlowError> {
        self.require_admin()?;
        self.lookup(survey_id)?;
        if !confirmed {
            return Err(FlowError::ConfirmationRequired);
        }

        let mut surveys = self.surveys.clone();
        surveys.remove(survey_id);
        let mut responses = self.responses.clone();
        let cascaded = responses.remove_for_survey(survey_id);

        save_value(self.persistence.as_mut(), SURVEYS_KEY, &surveys)?;
        if let Err(error) = save_value(self.persistence.as_mut(), RESPONSES_KEY, &responses) {
            // restore the surveys key so a restart does not load a
            // half-applied delete with orphaned responses
            if let Err(rollback) = save_value(self.persistence.as_mut(), SURVEYS_KEY, &self.surveys)
            {
                tracing::warn!(survey_id, %rollback, "could not restore surveys after failed cascade");
            }
            return Err(error.into());
        }
        tracing::debug!(survey_id, cascaded, "deleted survey");

        self.surveys = surveys;
        self.responses = responses;
        Ok(())
    }

    /// Return to the list, discarding any unsaved editor or form state.
    pub fn back(&mut self) {
        self.editor = None;
        self.collector = None;
        self.results = None;
        self.view = View::List;
    }

    fn require_admin(&self) -> Result<(), FlowError> {
        if self.context.is_admin() {
            Ok(())
        } else {
            Err(FlowError::NotPermitted)
        }
    }

    fn require_list(&self) -> Result<(), FlowError> {
        if self.view == View::List {
            Ok(())
        } else {
            Err(FlowError::ViewActive)
        }
    }

    fn lookup(&self, survey_id: &str) -> Result<&Survey, FlowError> {
        self.surveys
            .get(survey_id)
            .ok_or_else(|| FlowError::UnknownSurvey(survey_id.to_string()))
    }
}
