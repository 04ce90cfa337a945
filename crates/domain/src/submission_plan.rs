//! Submission plan derived from the active document kind
//!
//! Hiding a field group is not enough to keep its file out of the request:
//! the inactive file input is both disabled and renamed. `SubmissionPlan`
//! spells out the resulting attribute values for both groups so callers
//! apply (and tests check) a single deterministic mapping.

use serde::{Deserialize, Serialize};

use crate::id_document::{IdDocumentKind, CANONICAL_FILE_FIELD};

/// Attribute values one field group must carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    /// Container shown (`display: block`) or hidden (`display: none`)
    pub visible: bool,
    /// `required` on both the number and the file input
    pub required: bool,
    /// `disabled` on the file input
    pub file_disabled: bool,
    /// `name` of the file input
    pub file_name: String,
}

impl GroupState {
    /// State of the group the applicant is filling in
    pub fn active() -> Self {
        Self {
            visible: true,
            required: true,
            file_disabled: false,
            file_name: CANONICAL_FILE_FIELD.to_string(),
        }
    }

    /// State of the hidden group for `kind`
    pub fn inactive(kind: IdDocumentKind) -> Self {
        Self {
            visible: false,
            required: false,
            file_disabled: true,
            file_name: kind.disabled_file_field().to_string(),
        }
    }

    /// Whether this group's file would be submitted under the canonical name
    pub fn submits_canonical(&self) -> bool {
        !self.file_disabled && self.file_name == CANONICAL_FILE_FIELD
    }
}

/// Full form state for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPlan {
    pub active: IdDocumentKind,
    pub active_group: GroupState,
    pub inactive_group: GroupState,
}

impl SubmissionPlan {
    pub fn for_kind(active: IdDocumentKind) -> Self {
        Self {
            active,
            active_group: GroupState::active(),
            inactive_group: GroupState::inactive(active.other()),
        }
    }

    pub fn inactive(&self) -> IdDocumentKind {
        self.active.other()
    }

    /// Target state for the group belonging to `kind`
    pub fn group_state(&self, kind: IdDocumentKind) -> &GroupState {
        if kind == self.active {
            &self.active_group
        } else {
            &self.inactive_group
        }
    }

    /// Field name the file upload arrives under
    pub fn canonical_file_field(&self) -> &'static str {
        CANONICAL_FILE_FIELD
    }

    /// Field name the excluded file input is parked under
    pub fn excluded_file_field(&self) -> &'static str {
        self.inactive().disabled_file_field()
    }

    /// Text field the server reads the document number from
    pub fn number_field(&self) -> &'static str {
        self.active.number_field()
    }
}
