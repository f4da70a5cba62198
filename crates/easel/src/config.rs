//! Configuration for submission metadata.
//!
//! All types implement [`serde::Deserialize`] so a configuration can be
//! loaded from an external source as well as built in code.

use serde::Deserialize;

/// Metadata attached to a submission document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionConfig {
    /// Title shown by the visualization backend.
    #[serde(default)]
    title: String,

    /// Longer description shown alongside the visualization.
    #[serde(default)]
    description: String,
}

impl SubmissionConfig {
    /// Creates a configuration with the given title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the submission title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the submission description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_fields() {
        let config: SubmissionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.title(), "");
        assert_eq!(config.description(), "");
    }

    #[test]
    fn deserializes_provided_fields() {
        let config: SubmissionConfig =
            serde_json::from_str(r#"{"title":"sorting demo"}"#).unwrap();
        assert_eq!(config.title(), "sorting demo");
    }
}
