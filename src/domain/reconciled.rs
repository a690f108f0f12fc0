use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::models::{MatchSide, ParticipantId, Platform, ResolvedMatchRecord, StandingsLine, TournamentSummary};
use crate::dedup::{DuplicateMatch, MatchTier};
use crate::format::FormatTag;

/// Why a tournament was judged to duplicate an earlier record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateVerdict {
    pub candidate_index: usize,
    pub candidate_name: String,
    pub candidate_platform: Platform,
    pub tier: MatchTier,
    pub name_similarity: f64,
    pub roster_overlap: Option<f64>,
    pub day_difference: i64,
}

impl From<DuplicateMatch<'_>> for DuplicateVerdict {
    fn from(found: DuplicateMatch<'_>) -> Self {
        Self {
            candidate_index: found.index,
            candidate_name: found.candidate.name.clone(),
            candidate_platform: found.candidate.platform,
            tier: found.tier,
            name_similarity: found.name_similarity,
            roster_overlap: found.roster_overlap,
            day_difference: found.day_difference,
        }
    }
}

/// Everything the reconciliation pipeline derived for one source tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledTournament {
    pub source_id: String,
    pub summary: TournamentSummary,
    pub format: FormatTag,
    pub matches: Vec<ResolvedMatchRecord>,
    pub standings: BTreeMap<ParticipantId, StandingsLine>,
    /// Final Swiss placings (participant, 1-based rank), best first
    #[serde(default)]
    pub ranks: Vec<(ParticipantId, usize)>,
    pub duplicate: Option<DuplicateVerdict>,
}

impl ReconciledTournament {
    pub fn unresolved_match_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| m.player1 == MatchSide::Unresolved || m.player2 == MatchSide::Unresolved)
            .count()
    }
}
