//! Optional TOML configuration for the `vision` binary.
//!
//! ```toml
//! default_level = 6
//! seed = 42
//! log_filter = "vision_engine=debug"
//!
//! [selfplay]
//! games = 20
//! max_moves = 160
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use vision_engine::Tier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Tier used until a GUI sends `setoption name Level`
    pub default_level: Tier,
    /// Fixed seed for reproducible play; OS entropy when absent
    pub seed: Option<u64>,
    /// `tracing` filter directives, overridden by `RUST_LOG`
    pub log_filter: String,
    pub selfplay: SelfPlayConfig,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            default_level: Tier::MIN,
            seed: None,
            log_filter: "info".to_string(),
            selfplay: SelfPlayConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub games: u32,
    /// Ply cap per game
    pub max_moves: u32,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_moves: 200,
        }
    }
}

impl VisionConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid vision config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
