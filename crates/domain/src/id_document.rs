//! Identity document kinds accepted by the registration form
//!
//! The form offers two mutually exclusive documents. Exactly one of them is
//! active at a time; the active kind decides which field group is shown and
//! which file input submits under the canonical field name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Form field name the server reads the uploaded document photo from.
pub const CANONICAL_FILE_FIELD: &str = "id_photo";

/// Which identity document the applicant is submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdDocumentKind {
    /// Aadhaar card (12 digit number)
    #[default]
    Aadhar,
    /// Permanent Account Number card
    Pan,
}

impl IdDocumentKind {
    /// All kinds, in selector order
    pub fn all() -> &'static [IdDocumentKind] {
        &[IdDocumentKind::Aadhar, IdDocumentKind::Pan]
    }

    /// Value submitted in the `id_type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            IdDocumentKind::Aadhar => "aadhar",
            IdDocumentKind::Pan => "pan",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            IdDocumentKind::Aadhar => "Aadhar",
            IdDocumentKind::Pan => "PAN",
        }
    }

    /// The mutually exclusive counterpart
    pub fn other(&self) -> Self {
        match self {
            IdDocumentKind::Aadhar => IdDocumentKind::Pan,
            IdDocumentKind::Pan => IdDocumentKind::Aadhar,
        }
    }

    /// Name of the text field holding the document number.
    ///
    /// The server reads whichever of these is non-empty, so the inactive one
    /// only needs to be non-required.
    pub fn number_field(&self) -> &'static str {
        match self {
            IdDocumentKind::Aadhar => "aadhar_number",
            IdDocumentKind::Pan => "pan_number",
        }
    }

    /// Name given to this kind's file input while it is inactive
    pub fn disabled_file_field(&self) -> &'static str {
        match self {
            IdDocumentKind::Aadhar => "id_photo_aadhar_disabled",
            IdDocumentKind::Pan => "id_photo_pan_disabled",
        }
    }
}

impl fmt::Display for IdDocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdDocumentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aadhar" | "aadhaar" => Ok(IdDocumentKind::Aadhar),
            "pan" => Ok(IdDocumentKind::Pan),
            other => Err(DomainError::parse(format!(
                "Unknown identity document kind: {other}"
            ))),
        }
    }
}
