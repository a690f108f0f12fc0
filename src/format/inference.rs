use log::{debug, trace};

use super::types::{FormatTag, SubFormat};
use crate::config::FormatSettings;
use crate::domain::SquadListDescriptor;

/// Infers a tournament's format by majority vote over a bounded sample of its squad lists.
///
/// Unclassified lists do not vote. Ties go to the tag seen first. Returns
/// `FormatTag::UNCLASSIFIED` when no sampled list carries a signal.
pub fn infer(descriptors: &[SquadListDescriptor], settings: &FormatSettings) -> FormatTag {
    let votes = tally_votes(descriptors, settings);
    trace!("Format votes: {:?}", votes);

    let winner = pick_winner(&votes).unwrap_or(FormatTag::UNCLASSIFIED);
    debug!(
        "Inferred format {:?}/{:?} from {} sampled lists",
        winner.macro_format,
        winner.sub_format,
        descriptors.len().min(settings.sample_size)
    );
    winner
}

/// Infers the format of a single squad list
pub fn infer_one(descriptor: &SquadListDescriptor, settings: &FormatSettings) -> FormatTag {
    explicit_ruleset(descriptor, settings)
        .or_else(|| vendor_rule_match(descriptor, settings))
        .or_else(|| tool_default(descriptor, settings))
        .map(FormatTag::from_sub)
        .unwrap_or(FormatTag::UNCLASSIFIED)
}

fn explicit_ruleset(descriptor: &SquadListDescriptor, settings: &FormatSettings) -> Option<SubFormat> {
    let ruleset = descriptor.ruleset.as_deref()?.trim().to_lowercase();
    settings
        .ruleset_vocabulary
        .iter()
        .find(|alias| alias.name == ruleset)
        .map(|alias| alias.sub_format)
}

fn vendor_rule_match(descriptor: &SquadListDescriptor, settings: &FormatSettings) -> Option<SubFormat> {
    settings
        .vendor_keys
        .iter()
        .filter_map(|key| descriptor.vendor(key))
        .find_map(|vendor| {
            let fingerprint = vendor.fingerprint();
            settings
                .vendor_rules
                .iter()
                .find(|rule| rule.matches(&fingerprint))
                .map(|rule| rule.sub_format)
        })
}

fn tool_default(descriptor: &SquadListDescriptor, settings: &FormatSettings) -> Option<SubFormat> {
    settings
        .vendor_keys
        .iter()
        .filter(|key| descriptor.vendor(key).is_some())
        .find_map(|key| {
            settings
                .tool_defaults
                .iter()
                .find(|default| default.vendor.eq_ignore_ascii_case(key))
                .map(|default| default.sub_format)
        })
}

fn tally_votes(descriptors: &[SquadListDescriptor], settings: &FormatSettings) -> Vec<(FormatTag, usize)> {
    let mut votes: Vec<(FormatTag, usize)> = Vec::new();

    for tag in descriptors
        .iter()
        .take(settings.sample_size)
        .map(|d| infer_one(d, settings))
        .filter(|tag| !tag.is_unclassified())
    {
        match votes.iter_mut().find(|(seen, _)| *seen == tag) {
            Some((_, count)) => *count += 1,
            None => votes.push((tag, 1)),
        }
    }

    votes
}

fn pick_winner(votes: &[(FormatTag, usize)]) -> Option<FormatTag> {
    let mut best: Option<(FormatTag, usize)> = None;
    for &(tag, count) in votes {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((tag, count));
        }
    }
    best.map(|(tag, _)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::MacroFormat;
    use serde_json::{Value, json};

    fn settings() -> FormatSettings {
        FormatSettings::default()
    }

    fn descriptor(xws: Value) -> SquadListDescriptor {
        SquadListDescriptor::from_xws(&xws)
    }

    fn yasb(link: &str) -> SquadListDescriptor {
        descriptor(json!({
            "faction": "scumandvillainy",
            "vendor": { "yasb": { "builder": "Yet Another Squad Builder", "link": link } }
        }))
    }

    #[test]
    fn test_explicit_ruleset_wins_over_vendor_link() {
        let d = descriptor(json!({
            "ruleset": "AMG",
            "vendor": { "yasb": { "link": "https://yasb.app/xwa?f=Rebel" } }
        }));

        assert_eq!(infer_one(&d, &settings()), FormatTag::from_sub(SubFormat::Amg));
    }

    #[test]
    fn test_unknown_explicit_ruleset_falls_through_to_vendor() {
        let d = descriptor(json!({
            "ruleset": "hyperspace",
            "vendor": { "yasb": { "link": "https://xwing-legacy.com/?f=Rebel" } }
        }));

        assert_eq!(infer_one(&d, &settings()).sub_format, SubFormat::Legacy);
    }

    #[test]
    fn test_legacy_domain_beats_generic_marker() {
        let d = descriptor(json!({
            "vendor": { "yasb": { "builder": "YASB 2.0", "builder_url": "https://xwing-legacy.com/" } }
        }));

        let tag = infer_one(&d, &settings());

        assert_eq!(tag.sub_format, SubFormat::Legacy);
        assert_eq!(tag.macro_format, MacroFormat::Legacy);
    }

    #[test]
    fn test_generic_marker_classifies_when_nothing_specific_matches() {
        let d = descriptor(json!({
            "vendor": { "launchbaynext": { "builder": "Squad Builder 2.0" } }
        }));

        assert_eq!(infer_one(&d, &settings()).sub_format, SubFormat::Amg);
    }

    #[test]
    fn test_first_edition_builder() {
        let d = yasb("https://geordanr.github.io/xwing/?f=Rebel%20Alliance");

        let tag = infer_one(&d, &settings());

        assert_eq!(tag.sub_format, SubFormat::FirstEdition);
        assert_eq!(tag.macro_format, MacroFormat::Legacy);
    }

    #[test]
    fn test_tool_default_applies_without_pattern_match() {
        let d = descriptor(json!({ "vendor": { "yasb": { "builder": "Squad Builder" } } }));

        assert_eq!(infer_one(&d, &settings()), FormatTag::from_sub(SubFormat::Xwa));
    }

    #[test]
    fn test_unknown_vendor_is_unclassified() {
        let d = descriptor(json!({ "vendor": { "someothertool": { "builder": "xwa builder" } } }));

        assert_eq!(infer_one(&d, &settings()), FormatTag::UNCLASSIFIED);
    }

    #[test]
    fn test_malformed_descriptor_is_unclassified() {
        let d = descriptor(json!(42));
        assert_eq!(infer_one(&d, &settings()), FormatTag::UNCLASSIFIED);
    }

    #[test]
    fn test_infer_empty_input() {
        assert_eq!(infer(&[], &settings()), FormatTag::UNCLASSIFIED);
    }

    #[test]
    fn test_infer_all_unclassified() {
        let lists = vec![SquadListDescriptor::default(), descriptor(json!({"faction": "rebelalliance"}))];
        assert_eq!(infer(&lists, &settings()), FormatTag::UNCLASSIFIED);
    }

    #[test]
    fn test_infer_majority_vote_ignores_unclassified() {
        let lists = vec![
            SquadListDescriptor::default(),
            yasb("https://xwing-legacy.com/?f=Rebel"),
            yasb("https://yasb.app/?f=Rebel"),
            yasb("https://yasb.app/?f=Empire"),
            SquadListDescriptor::default(),
        ];

        assert_eq!(infer(&lists, &settings()), FormatTag::from_sub(SubFormat::Xwa));
    }

    #[test]
    fn test_infer_tie_goes_to_first_seen() {
        let lists = vec![
            yasb("https://xwing-legacy.com/?f=Rebel"),
            yasb("https://yasb.app/?f=Rebel"),
        ];

        assert_eq!(infer(&lists, &settings()).sub_format, SubFormat::Legacy);
    }

    #[test]
    fn test_infer_only_samples_first_lists() {
        let mut settings = settings();
        settings.sample_size = 2;
        let lists = vec![
            yasb("https://xwing-legacy.com/?f=Rebel"),
            SquadListDescriptor::default(),
            yasb("https://yasb.app/?f=Rebel"),
            yasb("https://yasb.app/?f=Empire"),
        ];

        assert_eq!(infer(&lists, &settings).sub_format, SubFormat::Legacy);
    }

    #[test]
    fn test_infer_is_deterministic() {
        let lists = vec![yasb("https://yasb.app/?f=Rebel"), yasb("https://xwing-legacy.com/")];
        let first = infer(&lists, &settings());

        for _ in 0..5 {
            assert_eq!(infer(&lists, &settings()), first);
        }
    }
}
