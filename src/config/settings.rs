use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::format_rules::{self, RulesetAlias, ToolDefault, VendorRule};
use crate::errors::load_context;
use crate::format::MacroFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Squad lists sampled per tournament when voting on its format
    pub sample_size: usize,
    pub vendor_keys: Vec<String>,
    pub vendor_rules: Vec<VendorRule>,
    pub tool_defaults: Vec<ToolDefault>,
    pub ruleset_vocabulary: Vec<RulesetAlias>,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            sample_size: 20,
            vendor_keys: format_rules::get_vendor_keys(),
            vendor_rules: format_rules::get_vendor_rules(),
            tool_defaults: format_rules::get_tool_defaults(),
            ruleset_vocabulary: format_rules::get_ruleset_vocabulary(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTable {
    pub win: i64,
    pub draw: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsSettings {
    pub modern: PointsTable,
    pub legacy: PointsTable,
}

impl StandingsSettings {
    /// Event points table for a macro format; unclassified events score like modern ones
    pub fn points_for(&self, macro_format: MacroFormat) -> PointsTable {
        match macro_format {
            MacroFormat::Legacy => self.legacy,
            MacroFormat::Modern | MacroFormat::Unclassified => self.modern,
        }
    }
}

impl Default for StandingsSettings {
    fn default() -> Self {
        Self {
            modern: PointsTable { win: 3, draw: 1 },
            legacy: PointsTable { win: 1, draw: 0 },
        }
    }
}

/// Thresholds for deciding two tournament records are the same event.
///
/// Hand-tuned defaults; recalibrate against labelled duplicate pairs before changing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupSettings {
    pub date_window_days: i64,
    pub roster_overlap_threshold: f64,
    pub name_similarity_threshold: f64,
    /// Allowed player-count difference as a fraction of the candidate's count
    pub player_count_tolerance: f64,
}

impl Default for DedupSettings {
    fn default() -> Self {
        Self {
            date_window_days: 2,
            roster_overlap_threshold: 0.5,
            name_similarity_threshold: 0.85,
            player_count_tolerance: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub store_dir: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("ledger"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub format: FormatSettings,
    pub standings: StandingsSettings,
    pub dedup: DedupSettings,
    pub store: StoreSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads overrides from a json file; missing sections keep their defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::new());
        };

        let json = std::fs::read_to_string(path).with_context(|| load_context(path))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();

        assert_eq!(config.format.sample_size, 20);
        assert_eq!(config.dedup.date_window_days, 2);
        assert_eq!(config.dedup.roster_overlap_threshold, 0.5);
        assert_eq!(config.dedup.name_similarity_threshold, 0.85);
        assert_eq!(config.dedup.player_count_tolerance, 0.2);
        assert_eq!(config.standings.points_for(MacroFormat::Modern), PointsTable { win: 3, draw: 1 });
        assert_eq!(config.standings.points_for(MacroFormat::Legacy), PointsTable { win: 1, draw: 0 });
        assert_eq!(config.standings.points_for(MacroFormat::Unclassified), PointsTable { win: 3, draw: 1 });
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"dedup": {"date_window_days": 3}, "format": {"sample_size": 5}}"#).unwrap();

        assert_eq!(config.dedup.date_window_days, 3);
        assert_eq!(config.dedup.name_similarity_threshold, 0.85);
        assert_eq!(config.format.sample_size, 5);
        assert_eq!(config.format.vendor_rules, format_rules::get_vendor_rules());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.store.store_dir, PathBuf::from("ledger"));
    }
}
