//! Core types for the fieldwork crates.
//!
//! This crate provides the foundational survey domain model:
//! - `Survey` - The top-level survey structure with ordered questions
//! - `Question`, `QuestionKind`, and `Choice` - Individual prompts and their types
//! - `Answer` and `Response` - One respondent's collected data
//! - `SurveyViolation` - Structural validation failures, in reporting order
//!
//! The types are presentation-agnostic: rendering and persistence live in the
//! `fieldwork` and `fieldwork-store` crates.

mod answer;
pub use answer::Answer;

mod question;
pub use question::{Choice, Question, QuestionKind};

mod response;
pub use response::Response;

mod survey;
pub use survey::Survey;

mod violation;
pub use violation::SurveyViolation;
