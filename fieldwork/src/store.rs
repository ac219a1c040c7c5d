//! In-memory survey and response stores.
//!
//! Both stores serialize transparently as plain lists, which is exactly the
//! JSON blob shape the persistence port stores under the `surveys` and
//! `responses` keys.

use fieldwork_types::{Response, Survey};
use serde::{Deserialize, Serialize};

/// The set of saved surveys, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyStore {
    surveys: Vec<Survey>,
}

impl SurveyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a survey by id.
    pub fn get(&self, survey_id: &str) -> Option<&Survey> {
        self.surveys.iter().find(|s| s.id == survey_id)
    }

    /// Replace the survey with the same id, or append it as new.
    pub fn upsert(&mut self, survey: Survey) {
        match self.surveys.iter_mut().find(|s| s.id == survey.id) {
            Some(existing) => *existing = survey,
            None => self.surveys.push(survey),
        }
    }

    /// Remove a survey by id. The caller is responsible for cascading the
    /// delete to the response store.
    pub fn remove(&mut self, survey_id: &str) -> bool {
        let before = self.surveys.len();
        self.surveys.retain(|s| s.id != survey_id);
        self.surveys.len() != before
    }

    /// Case-insensitive substring search over title and description, for the
    /// list view's filter box.
    pub fn search(&self, term: &str) -> Vec<&Survey> {
        let term = term.to_lowercase();
        self.surveys
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&term)
                    || s.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Survey> {
        self.surveys.iter()
    }

    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}

/// Submitted responses, append-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseStore {
    responses: Vec<Response>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted response. Responses are never mutated afterwards.
    pub fn append(&mut self, response: Response) {
        self.responses.push(response);
    }

    /// All responses, in submission order.
    pub fn all(&self) -> &[Response] {
        &self.responses
    }

    /// The responses belonging to one survey.
    pub fn for_survey(&self, survey_id: &str) -> Vec<&Response> {
        self.responses
            .iter()
            .filter(|r| r.survey_id == survey_id)
            .collect()
    }

    /// The badge count shown next to each survey in the list.
    pub fn count_for_survey(&self, survey_id: &str) -> usize {
        self.for_survey(survey_id).len()
    }

    /// Drop every response referencing the survey; used when a survey is
    /// deleted. Returns how many were removed.
    pub fn remove_for_survey(&mut self, survey_id: &str) -> usize {
        let before = self.responses.len();
        self.responses.retain(|r| r.survey_id != survey_id);
        before - self.responses.len()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
