//! Core types of the KYC registration form.
//!
//! No DOM access lives here: only the document kinds, the submission plan
//! each kind implies, and the element ids the browser side binds to.

pub mod error;
pub mod form_layout;
pub mod id_document;
pub mod submission_plan;

pub use error::DomainError;
pub use form_layout::{ElementIds, ElementRole, GroupIds, UncheckedPolicy};
pub use id_document::{IdDocumentKind, CANONICAL_FILE_FIELD};
pub use submission_plan::{GroupState, SubmissionPlan};
