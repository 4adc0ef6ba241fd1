//! Configuration for resting.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

fn default_author() -> String {
    "gamemaster".to_string()
}

/// World-level settings that shape how characters rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestConfig {
    /// Whether the stamina variant rules are in play.
    #[serde(default)]
    pub stamina_variant: bool,
    /// The user posting the chat messages.
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            stamina_variant: false,
            author: default_author(),
        }
    }
}

impl RestConfig {
    /// Enable or disable the stamina variant.
    pub fn with_stamina_variant(mut self, enabled: bool) -> Self {
        self.stamina_variant = enabled;
        self
    }

    /// Set the posting user.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> RulesResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.author.trim().is_empty() {
            return Err(RulesError::InvalidConfig("author must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> RulesResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Per-invocation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestOptions {
    /// Skip the confirmation prompt.
    pub skip_dialog: bool,
}

impl RestOptions {
    /// Options that skip the confirmation prompt.
    pub fn skip_dialog() -> Self {
        Self { skip_dialog: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RestConfig::default();
        assert!(!cfg.stamina_variant);
        assert_eq!(cfg.author, "gamemaster");
    }

    #[test]
    fn builder_methods() {
        let cfg = RestConfig::default()
            .with_stamina_variant(true)
            .with_author("alice");
        assert!(cfg.stamina_variant);
        assert_eq!(cfg.author, "alice");
    }

    #[test]
    fn json_defaults() {
        let cfg = RestConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, RestConfig::default());
        let cfg = RestConfig::from_json_str(r#"{"stamina_variant": true}"#).unwrap();
        assert!(cfg.stamina_variant);
    }

    #[test]
    fn rejects_blank_author() {
        let err = RestConfig::from_json_str(r#"{"author": "  "}"#).unwrap_err();
        assert!(matches!(err, RulesError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            RestConfig::from_json_str("{"),
            Err(RulesError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rest.json");
        std::fs::write(&path, r#"{"stamina_variant": true, "author": "gm"}"#).unwrap();
        let cfg = RestConfig::load(&path).unwrap();
        assert!(cfg.stamina_variant);
        assert_eq!(cfg.author, "gm");
        assert!(matches!(
            RestConfig::load(&dir.path().join("missing.json")),
            Err(RulesError::Io(_))
        ));
    }

    #[test]
    fn options() {
        assert!(!RestOptions::default().skip_dialog);
        assert!(RestOptions::skip_dialog().skip_dialog);
    }
}
