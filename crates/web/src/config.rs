//! Toggler configuration
//!
//! Pages using the stock template need no configuration at all. Pages with
//! different markup pass an object to `init_with_config`, e.g.
//! `{ elementIds: { pan: { ... } }, uncheckedPolicy: "leave" }`.

use serde::{Deserialize, Serialize};

use kycform_domain::{ElementIds, UncheckedPolicy};

use crate::error::ToggleError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToggleConfig {
    pub element_ids: ElementIds,
    pub unchecked_policy: UncheckedPolicy,
    /// Maximum log level (`"error"` .. `"trace"`); debug when unset
    pub log_level: Option<String>,
}

impl ToggleConfig {
    pub fn validate(&self) -> Result<(), ToggleError> {
        self.element_ids.validate()?;
        if let Some(level) = &self.log_level {
            parse_level(level)?;
        }
        Ok(())
    }

    /// The configured level, defaulting to debug
    pub fn level(&self) -> Result<tracing::Level, ToggleError> {
        match &self.log_level {
            Some(level) => parse_level(level),
            None => Ok(tracing::Level::DEBUG),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ToggleError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ToggleError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_level(level: &str) -> Result<tracing::Level, ToggleError> {
    level
        .trim()
        .parse::<tracing::Level>()
        .map_err(|_| ToggleError::invalid_config(format!("unknown log level: {level}")))
}
