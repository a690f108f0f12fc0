//! Curated signals used to recognise a squad list's ruleset.
//!
//! Table order is priority order. Specific markers (a legacy builder's domain) must sit
//! above generic ones ("2.0" appears in almost every second edition builder name), so
//! that the generic rule only catches what nothing more specific claimed.

use serde::{Deserialize, Serialize};

use crate::format::SubFormat;

/// Substring looked for in a vendor's builder/link/url fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRule {
    pub pattern: String,
    pub sub_format: SubFormat,
}

impl VendorRule {
    pub fn new(pattern: &str, sub_format: SubFormat) -> Self {
        Self {
            pattern: pattern.to_lowercase(),
            sub_format,
        }
    }

    pub fn matches(&self, fingerprint: &str) -> bool {
        !self.pattern.is_empty() && fingerprint.contains(&self.pattern)
    }
}

/// Ruleset a list-building tool implies when none of its fields say otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefault {
    pub vendor: String,
    pub sub_format: SubFormat,
}

impl ToolDefault {
    pub fn new(vendor: &str, sub_format: SubFormat) -> Self {
        Self {
            vendor: vendor.to_lowercase(),
            sub_format,
        }
    }
}

/// Accepted spelling of an explicit top-level ruleset field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetAlias {
    pub name: String,
    pub sub_format: SubFormat,
}

impl RulesetAlias {
    pub fn new(name: &str, sub_format: SubFormat) -> Self {
        Self {
            name: name.to_lowercase(),
            sub_format,
        }
    }
}

/// Vendor keys inspected under the XWS `vendor` object, in priority order
pub fn get_vendor_keys() -> Vec<String> {
    ["yasb", "launchbaynext", "lbn"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn get_vendor_rules() -> Vec<VendorRule> {
    vec![
        VendorRule::new("xwing-legacy", SubFormat::Legacy),
        VendorRule::new("legacy", SubFormat::Legacy),
        VendorRule::new("xwa", SubFormat::Xwa),
        VendorRule::new("yasb.app", SubFormat::Xwa),
        VendorRule::new("amg", SubFormat::Amg),
        VendorRule::new("launchbaynext", SubFormat::Amg),
        VendorRule::new("raithos.github.io", SubFormat::Amg),
        VendorRule::new("geordanr.github.io", SubFormat::FirstEdition),
        VendorRule::new("2.0", SubFormat::Amg),
    ]
}

pub fn get_tool_defaults() -> Vec<ToolDefault> {
    vec![
        ToolDefault::new("yasb", SubFormat::Xwa),
        ToolDefault::new("launchbaynext", SubFormat::Amg),
        ToolDefault::new("lbn", SubFormat::Amg),
    ]
}

pub fn get_ruleset_vocabulary() -> Vec<RulesetAlias> {
    vec![
        RulesetAlias::new("xwa", SubFormat::Xwa),
        RulesetAlias::new("amg", SubFormat::Amg),
        RulesetAlias::new("legacy", SubFormat::Legacy),
        RulesetAlias::new("2.0 legacy", SubFormat::Legacy),
        RulesetAlias::new("x2po", SubFormat::Legacy),
        RulesetAlias::new("1.0", SubFormat::FirstEdition),
        RulesetAlias::new("first edition", SubFormat::FirstEdition),
    ]
}
