use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Key aliases, in lookup order. The first key holding a non-empty string wins.
const FACTION_KEYS: &[&str] = &["faction"];
const RULESET_KEYS: &[&str] = &["ruleset", "rules"];
const VENDOR_KEYS: &[&str] = &["vendor"];
const BUILDER_KEYS: &[&str] = &["builder"];
const LINK_KEYS: &[&str] = &["link", "permalink"];
const BUILDER_URL_KEYS: &[&str] = &["builder_url", "url"];

/// Metadata one list-building tool embeds in its export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorMetadata {
    pub vendor: String,
    pub builder: Option<String>,
    pub link: Option<String>,
    pub builder_url: Option<String>,
}

impl VendorMetadata {
    /// Builder name, link and builder url joined into one lowercase haystack
    pub fn fingerprint(&self) -> String {
        [&self.builder, &self.link, &self.builder_url]
            .into_iter()
            .flatten()
            .map(|s| s.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Normalised view over a player's XWS squad-list export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadListDescriptor {
    pub faction: Option<String>,
    pub ruleset: Option<String>,
    pub vendors: Vec<VendorMetadata>,
}

impl SquadListDescriptor {
    /// Builds a descriptor from raw XWS json.
    ///
    /// Anything that is not shaped like an XWS object yields an empty descriptor, which
    /// format inference treats as "no signal".
    pub fn from_xws(xws: &Value) -> Self {
        match xws {
            Value::Object(obj) => Self::from_object(obj),
            // Some platforms ship the export as an embedded json string
            Value::String(s) => serde_json::from_str::<Value>(s)
                .ok()
                .filter(Value::is_object)
                .map(|v| Self::from_xws(&v))
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            faction: first_string(obj, FACTION_KEYS),
            ruleset: first_string(obj, RULESET_KEYS),
            vendors: extract_vendors(obj),
        }
    }

    pub fn vendor(&self, key: &str) -> Option<&VendorMetadata> {
        self.vendors.iter().find(|v| v.vendor.eq_ignore_ascii_case(key))
    }
}

fn extract_vendors(obj: &Map<String, Value>) -> Vec<VendorMetadata> {
    let Some(vendors) = VENDOR_KEYS
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_object))
    else {
        return Vec::new();
    };

    vendors
        .iter()
        .filter_map(|(name, meta)| {
            let meta = meta.as_object()?;
            Some(VendorMetadata {
                vendor: name.to_lowercase(),
                builder: first_string(meta, BUILDER_KEYS),
                link: first_string(meta, LINK_KEYS),
                builder_url: first_string(meta, BUILDER_URL_KEYS),
            })
        })
        .collect()
}

fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        obj.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}
