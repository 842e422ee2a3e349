//! Engine configuration, loadable from TOML

use crate::error::{EngineError, Result};
use serde::Deserialize;
use std::path::Path;

/// Default cap on the number of simple paths enumerated between two nodes.
pub const DEFAULT_MAX_PATHS: usize = 100_000;

/// When a collider on a path stops blocking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColliderRule {
    /// The collider or any of its descendants is conditioned on.
    #[default]
    Descendants,
    /// The collider and every one of its children are conditioned on.
    AllChildren,
}

/// Settings shared by every query of a [`crate::DSeparation`] engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub collider_rule: ColliderRule,
    /// `None` disables the limit.
    pub max_paths: Option<usize>,
}

impl EngineConfig {
    pub fn new(collider_rule: ColliderRule) -> Self {
        Self {
            collider_rule,
            ..Self::default()
        }
    }

    /// Same settings without a path limit.
    pub fn unbounded(mut self) -> Self {
        self.max_paths = None;
        self
    }

    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded engine config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            collider_rule: ColliderRule::Descendants,
            max_paths: Some(DEFAULT_MAX_PATHS),
        }
    }
}
