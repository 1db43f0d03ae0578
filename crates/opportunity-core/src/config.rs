//! List Configuration
//!
//! Labels, notification texts and timing for the opportunity list.
//! Every field has a default, so a partial JSON document is enough.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stage value that marks an opportunity as won and no longer actionable
pub const CLOSED_WON: &str = "Closed Won";

/// Debounce window applied to filter keystrokes
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid list config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("debounce window must be greater than zero")]
    ZeroDebounce,
    #[error("closed stage must not be empty")]
    EmptyClosedStage,
}

/// Labels of the row action buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionLabels {
    pub view_details: String,
    pub mark_closed: String,
    /// Shown on the mark-closed button while the row is in flight
    pub loading: String,
}

impl Default for ActionLabels {
    fn default() -> Self {
        Self {
            view_details: "View Details".to_string(),
            mark_closed: "Mark as Closed".to_string(),
            loading: "Loading...".to_string(),
        }
    }
}

/// Titles and messages of the notifications raised by row actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTexts {
    pub info_title: String,
    pub already_closed: String,
    pub success_title: String,
    pub closed: String,
    pub error_title: String,
    /// Prepended to the fault message
    pub error_prefix: String,
}

impl Default for NotificationTexts {
    fn default() -> Self {
        Self {
            info_title: "Info".to_string(),
            already_closed: "Opportunity is already Closed Won.".to_string(),
            success_title: "Success".to_string(),
            closed: "Opportunity marked as Closed Won".to_string(),
            error_title: "Error".to_string(),
            error_prefix: "Error marking opportunity: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub debounce_ms: u64,
    pub closed_stage: String,
    pub labels: ActionLabels,
    pub notifications: NotificationTexts,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            closed_stage: CLOSED_WON.to_string(),
            labels: ActionLabels::default(),
            notifications: NotificationTexts::default(),
        }
    }
}

impl ListConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ListConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.closed_stage.trim().is_empty() {
            return Err(ConfigError::EmptyClosedStage);
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
