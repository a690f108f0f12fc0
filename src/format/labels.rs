use super::types::{FormatTag, MacroFormat, SubFormat};

pub fn macro_format_label(macro_format: MacroFormat) -> &'static str {
    match macro_format {
        MacroFormat::Modern => "Modern",
        MacroFormat::Legacy => "Legacy",
        MacroFormat::Unclassified => "Unclassified",
    }
}

pub fn sub_format_label(sub_format: SubFormat) -> &'static str {
    match sub_format {
        SubFormat::Xwa => "XWA",
        SubFormat::Amg => "AMG",
        SubFormat::Legacy => "2.0 Legacy",
        SubFormat::FirstEdition => "First Edition",
        SubFormat::Unknown => "Unknown",
    }
}

/// Label shown in reports, e.g. "Modern (XWA)"
pub fn format_label(tag: FormatTag) -> String {
    match tag.sub_format {
        SubFormat::Unknown => macro_format_label(tag.macro_format).to_string(),
        sub => format!("{} ({})", macro_format_label(tag.macro_format), sub_format_label(sub)),
    }
}
