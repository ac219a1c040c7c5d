//! # fieldwork
//!
//! Survey builder, response collection, and result tabulation.
//! Presentation-agnostic: this crate owns the domain logic; rendering binds
//! controls to the editor/collector state, and persistence goes through the
//! port in `fieldwork-store`.
//!
//! ## Pieces
//!
//! - [`editor::SurveyEditor`] - mutates a single survey draft and commits it
//!   only when validation passes
//! - [`collector::ResponseCollector`] - captures one respondent's answers
//!   and finalizes them on submit
//! - [`results`] - per-question tallies and percentages
//! - [`flow::App`] - the view controller switching between list, editor,
//!   form, and results
//! - [`store`] - in-memory survey and response stores
//!
//! ## Usage
//!
//! ```rust
//! use fieldwork::flow::{App, AppContext, Role};
//! use fieldwork_store::MemoryStore;
//!
//! let mut app = App::new(AppContext::new(Role::Admin), MemoryStore::new()).unwrap();
//! app.create_survey().unwrap();
//! let editor = app.editor_mut().unwrap();
//! editor.set_title("Lunch poll");
//! let question = editor.add_question();
//! editor.set_question_title(&question, "Any allergies?");
//! app.save_editor().unwrap();
//! ```

// Re-export all types from fieldwork-types
pub use fieldwork_types::*;

pub mod collector;
pub mod editor;
pub mod flow;
pub mod results;
pub mod store;
