pub mod format_rules;
pub mod settings;

pub use format_rules::{RulesetAlias, ToolDefault, VendorRule};
pub use settings::{AppConfig, DedupSettings, FormatSettings, PointsTable, StandingsSettings, StoreSettings};
