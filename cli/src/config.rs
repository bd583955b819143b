//! Configuration for the series CLI
//!
//! Layers, lowest to highest: defaults, a JSON file given by `--config`,
//! `SERIES_*` environment variables, then command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use series_engine::DEFAULT_WINS_NEEDED;
use series_tree::{Names, Style};

/// Rows opened when the tree is first shown
pub const DEFAULT_INITIAL_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Wins required to take the series
    pub wins_needed: i64,

    /// Display name for side A
    pub team_a: String,

    /// Display name for side B
    pub team_b: String,

    /// Rows expanded before the tree is first printed
    pub initial_rows: usize,

    /// Colour leaves by winner
    pub color: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            wins_needed: i64::from(DEFAULT_WINS_NEEDED),
            team_a: "A".to_string(),
            team_b: "B".to_string(),
            initial_rows: DEFAULT_INITIAL_ROWS,
            color: true,
        }
    }
}

/// Settings given on the command line; unset fields leave the config alone
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub wins: Option<i64>,
    pub team_a: Option<String>,
    pub team_b: Option<String>,
    pub no_color: bool,
}

impl SeriesConfig {
    /// Every layer applied in order: defaults, file, environment, flags
    pub fn resolve(path: Option<&Path>, flags: &Flags) -> Result<Self> {
        Self::resolve_with(path, flags, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        path: Option<&Path>,
        flags: &Flags,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_vars(var);
        config.apply_flags(flags);
        Ok(config)
    }

    /// Defaults, overlaid with the JSON file at `path` if given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Overlay `SERIES_WINS_NEEDED`, `SERIES_TEAM_A`, `SERIES_TEAM_B` and `NO_COLOR`
    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(value) = var("SERIES_WINS_NEEDED") {
            match value.trim().parse() {
                Ok(wins) => self.wins_needed = wins,
                Err(_) => log::warn!("ignoring SERIES_WINS_NEEDED={:?}: not an integer", value),
            }
        }
        if let Some(name) = var("SERIES_TEAM_A").filter(|s| !s.trim().is_empty()) {
            self.team_a = name;
        }
        if let Some(name) = var("SERIES_TEAM_B").filter(|s| !s.trim().is_empty()) {
            self.team_b = name;
        }
        if var("NO_COLOR").is_some_and(|s| !s.is_empty()) {
            self.color = false;
        }
    }

    pub fn apply_flags(&mut self, flags: &Flags) {
        if let Some(wins) = flags.wins {
            self.wins_needed = wins;
        }
        if let Some(name) = &flags.team_a {
            self.team_a = name.clone();
        }
        if let Some(name) = &flags.team_b {
            self.team_b = name.clone();
        }
        if flags.no_color {
            self.color = false;
        }
    }

    pub fn names(&self) -> Names {
        Names::new(self.team_a.clone(), self.team_b.clone())
    }

    pub fn style(&self) -> Style {
        Style { color: self.color }
    }
}
