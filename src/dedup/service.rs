use log::debug;
use serde::{Deserialize, Serialize};

use super::similarity::{name_similarity, roster_overlap};
use crate::config::DedupSettings;
use crate::domain::TournamentSummary;

/// Evidence tier that made two records the same event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Rosters overlap beyond the threshold; names are not consulted
    PlayerOverlap,
    /// Near-identical names with comparable player counts
    NameAndDate,
}

/// A candidate judged to be the same real-world tournament, with the signals behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicateMatch<'a> {
    pub candidate: &'a TournamentSummary,
    /// Position of the candidate in the list passed to `find_duplicate`
    pub index: usize,
    pub tier: MatchTier,
    pub name_similarity: f64,
    pub roster_overlap: Option<f64>,
    pub day_difference: i64,
}

/// Returns the first candidate, in input order, describing the same event as `target`
pub fn find_duplicate<'a>(
    target: &TournamentSummary,
    candidates: &'a [TournamentSummary],
    settings: &DedupSettings,
) -> Option<DuplicateMatch<'a>> {
    candidates
        .iter()
        .enumerate()
        .find_map(|(index, candidate)| evaluate(target, candidate, index, settings))
}

fn evaluate<'a>(
    target: &TournamentSummary,
    candidate: &'a TournamentSummary,
    index: usize,
    settings: &DedupSettings,
) -> Option<DuplicateMatch<'a>> {
    let day_difference = day_difference(target, candidate)?;
    if day_difference > settings.date_window_days {
        return None;
    }

    let similarity = name_similarity(&target.name, &candidate.name);
    let overlap = roster_overlap(&target.roster, &candidate.roster);

    let tier = if overlap.is_some_and(|o| o > settings.roster_overlap_threshold) {
        MatchTier::PlayerOverlap
    } else if similarity > settings.name_similarity_threshold
        && player_counts_agree(target, candidate, settings)
    {
        MatchTier::NameAndDate
    } else {
        return None;
    };

    debug!(
        "'{}' duplicates '{}' ({:?}, name {:.2}, overlap {:?}, {} days apart)",
        target.name, candidate.name, tier, similarity, overlap, day_difference
    );

    Some(DuplicateMatch {
        candidate,
        index,
        tier,
        name_similarity: similarity,
        roster_overlap: overlap,
        day_difference,
    })
}

fn day_difference(a: &TournamentSummary, b: &TournamentSummary) -> Option<i64> {
    let (a, b) = (a.date?, b.date?);
    Some((a - b).num_days().abs())
}

fn player_counts_agree(target: &TournamentSummary, candidate: &TournamentSummary, settings: &DedupSettings) -> bool {
    let difference = (f64::from(target.player_count) - f64::from(candidate.player_count)).abs();
    difference < settings.player_count_tolerance * f64::from(candidate.player_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParticipantRecord, Platform};
    use chrono::NaiveDate;

    fn summary(name: &str, day: u32, players: &[&str]) -> TournamentSummary {
        TournamentSummary {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, day),
            platform: Platform::ListFortress,
            venue_location: None,
            player_count: players.len() as u32,
            roster: players
                .iter()
                .enumerate()
                .map(|(idx, name)| ParticipantRecord::new(*name, idx as i64))
                .collect(),
        }
    }

    fn with_count(mut summary: TournamentSummary, player_count: u32) -> TournamentSummary {
        summary.roster.clear();
        summary.player_count = player_count;
        summary
    }

    fn settings() -> DedupSettings {
        DedupSettings::default()
    }

    #[test]
    fn test_roster_overlap_matches_despite_different_names() {
        let target = summary("Coruscant Open", 10, &["Alice", "Bob", "Carol", "Dave"]);
        let candidates = vec![summary("Store Championship Q2", 11, &["alice", "bob", "carol", "Eve"])];

        let found = find_duplicate(&target, &candidates, &settings()).unwrap();

        assert_eq!(found.tier, MatchTier::PlayerOverlap);
        assert_eq!(found.index, 0);
        assert_eq!(found.roster_overlap, Some(0.6));
        assert_eq!(found.day_difference, 1);
    }

    #[test]
    fn test_no_overlap_and_dissimilar_names_is_not_a_duplicate() {
        let target = summary("Coruscant Open", 10, &["Alice", "Bob", "Carol", "Dave"]);
        let candidates = vec![summary("Store Championship Q2", 11, &["Frank", "Grace", "Heidi", "Ivan"])];

        assert!(name_similarity(&target.name, &candidates[0].name) < 0.85);
        assert_eq!(find_duplicate(&target, &candidates, &settings()), None);
    }

    #[test]
    fn test_date_gate_rejects_otherwise_identical_events() {
        let target = summary("Hoth Open", 10, &["Alice", "Bob"]);
        let candidates = vec![summary("Hoth Open", 14, &["Alice", "Bob"])];

        assert_eq!(find_duplicate(&target, &candidates, &settings()), None);
    }

    #[test]
    fn test_date_window_is_inclusive() {
        let target = summary("Hoth Open", 10, &["Alice", "Bob"]);
        let candidates = vec![summary("Hoth Open", 12, &["Alice", "Bob"])];

        assert!(find_duplicate(&target, &candidates, &settings()).is_some());
    }

    #[test]
    fn test_missing_date_skips_candidate() {
        let target = summary("Hoth Open", 10, &["Alice", "Bob"]);
        let mut undated = summary("Hoth Open", 10, &["Alice", "Bob"]);
        undated.date = None;

        assert_eq!(find_duplicate(&target, &[undated.clone()], &settings()), None);
        assert_eq!(find_duplicate(&undated, &[target], &settings()), None);
    }

    #[test]
    fn test_name_tier_requires_similar_player_counts() {
        let target = with_count(summary("Hoth Open 2024", 10, &[]), 22);
        let close = vec![with_count(summary("Hoth Open 2024!", 10, &[]), 20)];
        let far = vec![with_count(summary("Hoth Open 2024!", 10, &[]), 30)];

        let found = find_duplicate(&target, &close, &settings()).unwrap();
        assert_eq!(found.tier, MatchTier::NameAndDate);
        assert_eq!(found.roster_overlap, None);

        assert_eq!(find_duplicate(&target, &far, &settings()), None);
    }

    #[test]
    fn test_name_similarity_of_point_four_is_not_a_duplicate() {
        let target = summary("Kessel Cup", 10, &["Alice", "Bob", "Carol"]);
        let candidates = vec![summary("Scarif Cup", 11, &["Dave", "Eve", "Frank"])];

        assert!((name_similarity(&target.name, &candidates[0].name) - 0.4).abs() < 1e-9);
        assert_eq!(find_duplicate(&target, &candidates, &settings()), None);
    }

    #[test]
    fn test_player_count_gate_is_strict_at_tolerance() {
        let candidates = vec![with_count(summary("Hoth Open", 10, &[]), 20)];
        let at_limit = with_count(summary("Hoth Open", 10, &[]), 24);
        let below_limit = with_count(summary("Hoth Open", 10, &[]), 23);
        let under_at_limit = with_count(summary("Hoth Open", 10, &[]), 16);

        assert_eq!(find_duplicate(&at_limit, &candidates, &settings()), None);
        assert_eq!(find_duplicate(&under_at_limit, &candidates, &settings()), None);
        let found = find_duplicate(&below_limit, &candidates, &settings()).unwrap();
        assert_eq!(found.tier, MatchTier::NameAndDate);
    }

    #[test]
    fn test_name_tier_never_matches_empty_candidate() {
        let target = with_count(summary("Hoth Open", 10, &[]), 0);
        let candidates = vec![with_count(summary("Hoth Open", 10, &[]), 0)];

        assert_eq!(find_duplicate(&target, &candidates, &settings()), None);
    }

    #[test]
    fn test_first_confident_candidate_wins() {
        let target = summary("Hoth Open", 10, &["Alice", "Bob", "Carol"]);
        let candidates = vec![
            summary("Endor Regional", 20, &["Alice", "Bob", "Carol"]),
            summary("Hoth Open", 10, &["Alice", "Bob", "Carol"]),
            summary("Hoth Open", 11, &["Alice", "Bob", "Carol"]),
        ];

        let found = find_duplicate(&target, &candidates, &settings()).unwrap();

        assert_eq!(found.index, 1);
        assert!(std::ptr::eq(found.candidate, &candidates[1]));
    }

    #[test]
    fn test_find_duplicate_is_deterministic() {
        let target = summary("Hoth Open", 10, &["Alice", "Bob"]);
        let candidates = vec![summary("Hoth Open", 11, &["Alice", "Bob"])];
        let first = find_duplicate(&target, &candidates, &settings()).map(|m| m.index);

        for _ in 0..5 {
            assert_eq!(find_duplicate(&target, &candidates, &settings()).map(|m| m.index), first);
        }
    }
}
