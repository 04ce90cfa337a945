//! DOM element contract of the registration form
//!
//! The HTML template owns the markup; this module only names the elements the
//! toggler expects to find and what each of them is for.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::DomainError;
use crate::id_document::IdDocumentKind;

/// Role an element plays in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    Selector(IdDocumentKind),
    Fields(IdDocumentKind),
    NumberInput(IdDocumentKind),
    PhotoInput(IdDocumentKind),
}

impl ElementRole {
    /// Kind of HTML element expected for this role
    pub fn expected_element(&self) -> &'static str {
        match self {
            ElementRole::Selector(_) => "radio input",
            ElementRole::Fields(_) => "container element",
            ElementRole::NumberInput(_) => "text input",
            ElementRole::PhotoInput(_) => "file input",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRole::Selector(kind) => write!(f, "{} selector", kind.display_name()),
            ElementRole::Fields(kind) => write!(f, "{} field group", kind.display_name()),
            ElementRole::NumberInput(kind) => write!(f, "{} number input", kind.display_name()),
            ElementRole::PhotoInput(kind) => write!(f, "{} photo input", kind.display_name()),
        }
    }
}

/// Element ids for one document kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupIds {
    pub selector: String,
    pub fields: String,
    pub number: String,
    pub photo: String,
}

impl GroupIds {
    /// Ids used by the stock registration template
    pub fn standard(kind: IdDocumentKind) -> Self {
        let prefix = kind.as_str();
        Self {
            selector: prefix.to_string(),
            fields: format!("{prefix}_fields"),
            number: kind.number_field().to_string(),
            photo: format!("id_photo_{prefix}"),
        }
    }
}

/// Ids of every element the toggler manages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub aadhar: GroupIds,
    pub pan: GroupIds,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            aadhar: GroupIds::standard(IdDocumentKind::Aadhar),
            pan: GroupIds::standard(IdDocumentKind::Pan),
        }
    }
}

impl ElementIds {
    pub fn group(&self, kind: IdDocumentKind) -> &GroupIds {
        match kind {
            IdDocumentKind::Aadhar => &self.aadhar,
            IdDocumentKind::Pan => &self.pan,
        }
    }

    /// Id for a single role
    pub fn id_for(&self, role: ElementRole) -> &str {
        match role {
            ElementRole::Selector(kind) => &self.group(kind).selector,
            ElementRole::Fields(kind) => &self.group(kind).fields,
            ElementRole::NumberInput(kind) => &self.group(kind).number,
            ElementRole::PhotoInput(kind) => &self.group(kind).photo,
        }
    }

    /// Every `(role, id)` pair, selectors first
    pub fn all(&self) -> Vec<(ElementRole, &str)> {
        let roles = [
            ElementRole::Selector(IdDocumentKind::Aadhar),
            ElementRole::Selector(IdDocumentKind::Pan),
            ElementRole::Fields(IdDocumentKind::Aadhar),
            ElementRole::Fields(IdDocumentKind::Pan),
            ElementRole::NumberInput(IdDocumentKind::Aadhar),
            ElementRole::PhotoInput(IdDocumentKind::Aadhar),
            ElementRole::NumberInput(IdDocumentKind::Pan),
            ElementRole::PhotoInput(IdDocumentKind::Pan),
        ];
        roles.into_iter().map(|role| (role, self.id_for(role))).collect()
    }

    /// Reject empty or duplicated ids
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for (role, id) in self.all() {
            if id.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "element id for {role} is empty"
                )));
            }
            if !seen.insert(id) {
                return Err(DomainError::validation(format!(
                    "element id `{id}` is used more than once"
                )));
            }
        }
        Ok(())
    }
}

/// What to do when neither selector is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UncheckedPolicy {
    /// Check the Aadhar selector and apply its state
    #[default]
    DefaultToAadhar,
    /// Touch nothing and log a warning
    Leave,
}
