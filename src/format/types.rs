use serde::{Deserialize, Serialize};

/// Coarse rules generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroFormat {
    /// Current rulesets, scored 3/1/0
    Modern,
    /// Frozen or retired rulesets, scored 1/0/0
    Legacy,
    Unclassified,
}

/// Rulebook / points revision within a macro format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubFormat {
    /// Community-maintained ruleset
    Xwa,
    /// Official publisher ruleset
    Amg,
    /// Frozen 2.0 Legacy points
    Legacy,
    FirstEdition,
    Unknown,
}

impl SubFormat {
    pub fn macro_format(self) -> MacroFormat {
        match self {
            SubFormat::Xwa | SubFormat::Amg => MacroFormat::Modern,
            SubFormat::Legacy | SubFormat::FirstEdition => MacroFormat::Legacy,
            SubFormat::Unknown => MacroFormat::Unclassified,
        }
    }
}

/// Two-level format tag attached to a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatTag {
    #[serde(rename = "macro")]
    pub macro_format: MacroFormat,
    #[serde(rename = "sub")]
    pub sub_format: SubFormat,
}

impl FormatTag {
    pub const UNCLASSIFIED: FormatTag = FormatTag {
        macro_format: MacroFormat::Unclassified,
        sub_format: SubFormat::Unknown,
    };

    pub fn from_sub(sub_format: SubFormat) -> Self {
        Self {
            macro_format: sub_format.macro_format(),
            sub_format,
        }
    }

    pub fn is_unclassified(&self) -> bool {
        self.macro_format == MacroFormat::Unclassified
    }
}

impl Default for FormatTag {
    fn default() -> Self {
        Self::UNCLASSIFIED
    }
}
