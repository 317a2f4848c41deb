use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::queue::{EventQueue, OverflowPolicy};

/// Keyboard input settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Maximum number of undelivered events. Ignored when `overflow` is
    /// `unbounded`.
    pub queue_capacity: usize,
    /// Behavior when the game loop falls behind.
    pub overflow: OverflowPolicy,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            queue_capacity: Self::DEFAULT_QUEUE_CAPACITY,
            overflow: OverflowPolicy::DropOldest,
        }
    }
}

impl KeyboardConfig {
    pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

    /// No cap on queued events; nothing is ever dropped.
    pub fn unbounded() -> Self {
        Self {
            queue_capacity: 0,
            overflow: OverflowPolicy::Unbounded,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.overflow != OverflowPolicy::Unbounded && self.queue_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                policy: self.overflow,
            });
        }
        Ok(())
    }

    /// Build an empty queue with these settings.
    pub fn build_queue(&self) -> EventQueue {
        EventQueue::new(self.queue_capacity, self.overflow)
    }

    /// Load settings from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyboard config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse keyboard config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save settings as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write keyboard config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bounded() {
        let config = KeyboardConfig::default();
        assert_eq!(config.queue_capacity, 64);
        assert_eq!(config.overflow, OverflowPolicy::DropOldest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected_when_bounded() {
        let config = KeyboardConfig {
            queue_capacity: 0,
            overflow: OverflowPolicy::DropNewest,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroCapacity {
                policy: OverflowPolicy::DropNewest
            })
        );
        assert!(KeyboardConfig::unbounded().validate().is_ok());
    }

    #[test]
    fn missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = KeyboardConfig::load(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, KeyboardConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("keyboard.json");
        let config = KeyboardConfig {
            queue_capacity: 8,
            overflow: OverflowPolicy::DropNewest,
        };
        config.save(&path).unwrap();

        assert_eq!(KeyboardConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyboard.json");
        fs::write(&path, r#"{ "overflow": "unbounded" }"#).unwrap();

        let config = KeyboardConfig::load(&path).unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Unbounded);
        assert_eq!(config.queue_capacity, KeyboardConfig::DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyboard.json");
        fs::write(&path, "not json").unwrap();
        assert!(KeyboardConfig::load(&path).is_err());

        fs::write(&path, r#"{ "queue_capacity": 0, "overflow": "drop_oldest" }"#).unwrap();
        let err = KeyboardConfig::load(&path).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
