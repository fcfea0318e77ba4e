//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Example configuration:
//!
//! ```toml
//! [[providers]]
//! id = "sage"
//! name = "The Sage"
//! description = "measured, cites precedent"
//!
//! [deliberation]
//! stream_delay_ms = 15
//! min_latency_ms = 300
//! max_latency_ms = 1800
//! sentinel = "Abstained."
//! ```

use council_domain::{DomainError, Provider, Roster};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// One `[[providers]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileProviderConfig {
    /// Stable provider id
    pub id: String,
    /// Display name
    pub name: String,
    /// Persona/role label
    #[serde(default)]
    pub description: String,
}

impl FileProviderConfig {
    pub fn to_provider(&self) -> Provider {
        Provider::new(self.id.as_str(), self.name.as_str(), self.description.as_str())
    }
}

/// `[deliberation]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeliberationConfig {
    /// Delay between streamed verdict units, in milliseconds
    pub stream_delay_ms: u64,
    /// Lower bound of the simulated provider latency window
    pub min_latency_ms: u64,
    /// Upper bound of the simulated provider latency window
    pub max_latency_ms: u64,
    /// Text substituted for a failed provider
    pub sentinel: String,
}

impl Default for FileDeliberationConfig {
    fn default() -> Self {
        Self {
            stream_delay_ms: 15,
            min_latency_ms: 300,
            max_latency_ms: 1800,
            sentinel: "Abstained.".to_string(),
        }
    }
}

impl FileDeliberationConfig {
    pub fn stream_delay(&self) -> Duration {
        Duration::from_millis(self.stream_delay_ms)
    }

    pub fn min_latency(&self) -> Duration {
        Duration::from_millis(self.min_latency_ms)
    }

    pub fn max_latency(&self) -> Duration {
        Duration::from_millis(self.max_latency_ms)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// The provider roster, in seating order
    pub providers: Vec<FileProviderConfig>,
    /// Deliberation timing and substitution settings
    pub deliberation: FileDeliberationConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            providers: default_roster(),
            deliberation: FileDeliberationConfig::default(),
        }
    }
}

/// Roster shipped when no config file provides one
fn default_roster() -> Vec<FileProviderConfig> {
    vec![
        FileProviderConfig {
            id: "sage".to_string(),
            name: "The Sage".to_string(),
            description: "measured, cites precedent".to_string(),
        },
        FileProviderConfig {
            id: "contrarian".to_string(),
            name: "The Contrarian".to_string(),
            description: "argues the strongest opposing case".to_string(),
        },
        FileProviderConfig {
            id: "pragmatist".to_string(),
            name: "The Pragmatist".to_string(),
            description: "optimizes for what ships this week".to_string(),
        },
    ]
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for provider in &self.providers {
            if provider.id.trim().is_empty() {
                return Err("Provider id cannot be empty".to_string());
            }
            if provider.name.trim().is_empty() {
                return Err(format!("Provider '{}' has an empty name", provider.id));
            }
            if !seen.insert(provider.id.as_str()) {
                return Err(format!("Duplicate provider id: {}", provider.id));
            }
        }
        if self.deliberation.min_latency_ms > self.deliberation.max_latency_ms {
            return Err("min_latency_ms exceeds max_latency_ms".to_string());
        }
        Ok(())
    }

    /// Build the domain roster from the `[[providers]]` entries
    pub fn to_roster(&self) -> Result<Roster, DomainError> {
        Roster::new(self.providers.iter().map(|p| p.to_provider()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        config.validate().unwrap();
        assert_eq!(config.providers.len(), 3);
        assert_eq!(config.deliberation.sentinel, "Abstained.");
        assert_eq!(config.to_roster().unwrap().len(), 3);
    }

    #[test]
    fn test_config_deserialize() {
        let toml_str = r#"
[[providers]]
id = "owl"
name = "The Owl"
description = "sees at night"

[deliberation]
stream_delay_ms = 5
min_latency_ms = 10
max_latency_ms = 20
sentinel = "No comment."
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.providers.len(), 1);
        assert_eq!(config.providers[0].id, "owl");
        assert_eq!(config.deliberation.stream_delay(), Duration::from_millis(5));
        assert_eq!(config.deliberation.sentinel, "No comment.");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.providers.len(), 3);
        assert_eq!(config.deliberation.stream_delay_ms, 15);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml_str = r#"
[[providers]]
id = "owl"
name = "The Owl"

[[providers]]
id = "owl"
name = "The Other Owl"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
        assert!(config.to_roster().is_err());
    }

    #[test]
    fn test_inverted_latency_window_rejected() {
        let toml_str = r#"
[deliberation]
min_latency_ms = 500
max_latency_ms = 100
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }
}
