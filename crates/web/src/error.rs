//! Error types for wiring the toggler to a document

use thiserror::Error;

use kycform_domain::{DomainError, ElementRole};

/// Errors raised while binding the toggler to the page
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// An expected element is absent from the markup
    #[error("Missing element: {role} (#{id})")]
    MissingElement { role: ElementRole, id: String },

    /// An element exists but is not the expected kind of element
    #[error("Element #{id} for {role} is not a {expected}")]
    WrongElementType {
        role: ElementRole,
        id: String,
        expected: &'static str,
    },

    /// No window or document is reachable (not running in a browser page)
    #[error("No document available")]
    NoDocument,

    /// Configuration could not be read
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Event listener registration failed
    #[error("Failed to register listener: {0}")]
    Listener(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ToggleError {
    pub fn missing(role: ElementRole, id: impl Into<String>) -> Self {
        Self::MissingElement {
            role,
            id: id.into(),
        }
    }

    pub fn wrong_type(role: ElementRole, id: impl Into<String>) -> Self {
        Self::WrongElementType {
            role,
            id: id.into(),
            expected: role.expected_element(),
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kycform_domain::IdDocumentKind;

    #[test]
    fn test_missing_element_names_the_id() {
        let err = ToggleError::missing(ElementRole::Fields(IdDocumentKind::Pan), "pan_fields");
        assert_eq!(err.to_string(), "Missing element: PAN field group (#pan_fields)");
    }

    #[test]
    fn test_wrong_type_reports_expected_element() {
        let err = ToggleError::wrong_type(
            ElementRole::PhotoInput(IdDocumentKind::Aadhar),
            "id_photo_aadhar",
        );
        assert_eq!(
            err.to_string(),
            "Element #id_photo_aadhar for Aadhar photo input is not a file input"
        );
    }
}
