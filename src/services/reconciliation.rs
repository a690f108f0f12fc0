use log::{debug, info};
use std::collections::BTreeMap;

use crate::config::settings::AppConfig;
use crate::dedup;
use crate::domain::{
    DuplicateVerdict, ParticipantId, ParticipantRecord, Platform, ReconciledTournament, ResolvedMatchRecord,
    StandingsLine, TournamentSummary,
};
use crate::format::{self, FormatTag};
use crate::participants;
use crate::sources::SourceTournament;
use crate::standings;

/// Runs format inference, name resolution, standings and dedup for one tournament
pub struct ReconciliationService {
    config: AppConfig,
}

impl ReconciliationService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Reconciles a source tournament against already-known tournament summaries.
    ///
    /// `candidates` are checked in order; the verdict's `candidate_index` points into it.
    pub fn reconcile(
        &self,
        platform: Platform,
        source: &SourceTournament,
        candidates: &[TournamentSummary],
    ) -> ReconciledTournament {
        let format = self.infer_format(source);
        let roster = source.roster();
        let matches = self.resolve_matches(source, &roster);
        let standings = self.compute_standings(source, &matches, format);
        let ranks = standings::rank(&standings);
        let summary = source.summary(platform);
        let duplicate = self.find_duplicate(&summary, candidates);

        ReconciledTournament {
            source_id: source.source_id.clone(),
            summary,
            format,
            matches,
            standings,
            ranks,
            duplicate,
        }
    }

    fn infer_format(&self, source: &SourceTournament) -> FormatTag {
        let lists = source.squad_lists();
        let tag = format::infer(&lists, &self.config.format);
        debug!(
            "'{}': {} from {} squad lists",
            source.name,
            format::format_label(tag),
            lists.len()
        );
        tag
    }

    fn resolve_matches(&self, source: &SourceTournament, roster: &[ParticipantRecord]) -> Vec<ResolvedMatchRecord> {
        let matches = participants::resolve_matches(&source.match_records(), roster);
        let unresolved = matches
            .iter()
            .filter(|m| m.player1.id().is_none() || m.player2.id().is_none())
            .count();
        if unresolved > 0 {
            info!(
                "'{}': {} of {} matches have an unresolved or missing participant",
                source.name,
                unresolved,
                matches.len()
            );
        }
        matches
    }

    fn compute_standings(
        &self,
        source: &SourceTournament,
        matches: &[ResolvedMatchRecord],
        format: FormatTag,
    ) -> BTreeMap<ParticipantId, StandingsLine> {
        standings::compute(
            &source.supplied_standings(),
            matches,
            format.macro_format,
            &self.config.standings,
        )
    }

    fn find_duplicate(&self, summary: &TournamentSummary, candidates: &[TournamentSummary]) -> Option<DuplicateVerdict> {
        dedup::find_duplicate(summary, candidates, &self.config.dedup).map(DuplicateVerdict::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::MatchTier;
    use crate::domain::MatchSide;
    use crate::format::{MacroFormat, SubFormat};
    use serde_json::json;

    fn alice_bob() -> SourceTournament {
        serde_json::from_value(json!({
            "sourceId": "lf-100",
            "name": "Hoth Open",
            "date": "2024-06-10",
            "players": [
                { "id": 1, "name": "Alice", "wins": -1, "losses": -1, "draws": -1, "tieBreakPoints": -1,
                  "list": { "vendor": { "yasb": { "link": "https://yasb.app/?f=Rebel%20Alliance" } } } },
                { "id": 2, "name": "Bob", "wins": -1, "losses": -1, "draws": -1, "tieBreakPoints": -1 }
            ],
            "matches": [
                { "roundNumber": 1, "roundKind": "swiss", "player1": "Alice", "player2": "Bob", "score1": 20, "score2": 15 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_end_to_end_single_match() {
        let service = ReconciliationService::new(AppConfig::new());

        let reconciled = service.reconcile(Platform::ListFortress, &alice_bob(), &[]);

        assert_eq!(reconciled.format, FormatTag::from_sub(SubFormat::Xwa));
        assert_eq!(reconciled.format.macro_format, MacroFormat::Modern);
        assert_eq!(reconciled.matches[0].player1, MatchSide::Resolved(ParticipantId(1)));
        assert_eq!(reconciled.matches[0].player2, MatchSide::Resolved(ParticipantId(2)));
        assert_eq!(
            reconciled.standings[&ParticipantId(1)],
            StandingsLine { wins: 1, losses: 0, draws: 0, tie_break_points: 20, event_points: 3 }
        );
        assert_eq!(
            reconciled.standings[&ParticipantId(2)],
            StandingsLine { wins: 0, losses: 1, draws: 0, tie_break_points: 15, event_points: 0 }
        );
        assert_eq!(reconciled.ranks, vec![(ParticipantId(1), 1), (ParticipantId(2), 2)]);
        assert_eq!(reconciled.duplicate, None);
        assert_eq!(reconciled.unresolved_match_count(), 0);
    }

    #[test]
    fn test_reconcile_flags_cross_platform_duplicate() {
        let service = ReconciliationService::new(AppConfig::new());
        let mut existing = alice_bob().summary(Platform::Longshanks);
        existing.name = "Hoth System Open (Longshanks)".to_string();
        existing.date = chrono::NaiveDate::from_ymd_opt(2024, 6, 9);

        let reconciled = service.reconcile(Platform::ListFortress, &alice_bob(), &[existing]);

        let verdict = reconciled.duplicate.unwrap();
        assert_eq!(verdict.candidate_index, 0);
        assert_eq!(verdict.tier, MatchTier::PlayerOverlap);
        assert_eq!(verdict.candidate_platform, Platform::Longshanks);
        assert_eq!(verdict.roster_overlap, Some(1.0));
    }
}
