// src/generator/config.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::generator::{GeneratorError, Result};

/// Tunables of the path-growth engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Minimum normalized distance between start and goal on at least one axis.
    pub finish_threshold: f64,
    /// Probability of keeping the greedy room choice.
    pub room_random: f64,
    /// Probability of keeping the greedy exit door.
    pub door_random: f64,
    /// Path length at which the finish room is forced.
    pub path_length: usize,
    /// Failure-list size from which the engine stops backtracking.
    pub allowed_fails: usize,
    /// Seed for reproducible dungeons. A fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Optional cap on growth iterations per dungeon.
    pub max_iterations: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            finish_threshold: 0.3,
            room_random: 0.7,
            door_random: 0.65,
            path_length: 15,
            allowed_fails: 3,
            seed: None,
            max_iterations: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        let probability = |name: &str, value: f64| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(GeneratorError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )))
            }
        };
        probability("room_random", self.room_random)?;
        probability("door_random", self.door_random)?;

        if !(0.0..1.0).contains(&self.finish_threshold) {
            return Err(GeneratorError::InvalidConfig(format!(
                "finish_threshold must be within [0, 1), got {}",
                self.finish_threshold
            )));
        }
        if self.path_length < 2 {
            return Err(GeneratorError::InvalidConfig(format!(
                "path_length must be at least 2, got {}",
                self.path_length
            )));
        }
        if self.allowed_fails == 0 {
            return Err(GeneratorError::InvalidConfig(
                "allowed_fails must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(GeneratorError::InvalidConfig(
                "max_iterations must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.path_length, 15);
        assert_eq!(config.allowed_fails, 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "path_length": 8, "seed": 42 }"#).unwrap();
        assert_eq!(config.path_length, 8);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.room_random, 0.7);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = GeneratorConfig {
            door_random: 1.5,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_short_path() {
        let err = GeneratorConfig::from_json_str(r#"{ "path_length": 1 }"#).unwrap_err();
        assert!(err.to_string().contains("path_length"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GeneratorConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, GeneratorError::Json(_)));
    }
}
