use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::deserialize_optional_date;
use super::stats::deserialize_stat;

/// Opaque participant identity assigned by the source for one tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub i64);

/// Authoritative roster entry for one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    #[serde(rename = "canonicalName")]
    pub canonical_name: String,
    #[serde(rename = "internalId")]
    pub internal_id: ParticipantId,
}

impl ParticipantRecord {
    pub fn new(canonical_name: impl Into<String>, internal_id: i64) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            internal_id: ParticipantId(internal_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundKind {
    Swiss,
    Elimination,
}

/// Match as reported by a source, before any name resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMatchRecord {
    #[serde(rename = "roundNumber")]
    pub round_number: i32,
    #[serde(rename = "roundKind")]
    pub round_kind: RoundKind,
    #[serde(rename = "player1")]
    pub player1_raw_name: String,
    #[serde(rename = "player2", default)]
    pub player2_raw_name: Option<String>,
    #[serde(rename = "score1", default)]
    pub score1: i32,
    #[serde(rename = "score2", default)]
    pub score2: i32,
    #[serde(rename = "winner", default)]
    pub explicit_winner_raw_name: Option<String>,
}

/// Outcome of resolving one side of a match against the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "id", rename_all = "lowercase")]
pub enum MatchSide {
    Resolved(ParticipantId),
    Unresolved,
    /// No opponent was paired
    Bye,
}

impl MatchSide {
    pub fn id(&self) -> Option<ParticipantId> {
        match self {
            MatchSide::Resolved(id) => Some(*id),
            MatchSide::Unresolved | MatchSide::Bye => None,
        }
    }
}

/// Match with both sides mapped onto roster identities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMatchRecord {
    pub round_number: i32,
    pub round_kind: RoundKind,
    pub player1: MatchSide,
    pub player2: MatchSide,
    pub score1: i32,
    pub score2: i32,
    /// Explicitly reported winner; `None` for draws, unknown or unreported results
    pub winner: Option<ParticipantId>,
    pub player1_raw_name: String,
    pub player2_raw_name: Option<String>,
}

/// Per-participant statistics as supplied by a source.
///
/// `None` means the source never computed the value. Sources encode that as `-1` or by
/// omitting the field; both are folded into `None` at deserialization time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStandings {
    #[serde(default, deserialize_with = "deserialize_stat")]
    pub wins: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_stat")]
    pub losses: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_stat")]
    pub draws: Option<u32>,
    #[serde(rename = "tieBreakPoints", default, deserialize_with = "deserialize_stat")]
    pub tie_break_points: Option<i64>,
    #[serde(rename = "eventPoints", default, deserialize_with = "deserialize_stat")]
    pub event_points: Option<i64>,
}

impl SourceStandings {
    /// True when any counter or the event points still need to be derived
    pub fn needs_computation(&self) -> bool {
        self.wins.is_none()
            || self.losses.is_none()
            || self.draws.is_none()
            || self.tie_break_points.is_none()
            || self.event_points.is_none()
    }
}

/// Final standings for one participant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsLine {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(rename = "tieBreakPoints")]
    pub tie_break_points: i64,
    #[serde(rename = "eventPoints")]
    pub event_points: i64,
}

/// Results platform a record was scraped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    ListFortress,
    Longshanks,
    RollBetter,
}

/// Tournament-level facts compared when looking for duplicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
    pub platform: Platform,
    #[serde(rename = "venueLocation", default)]
    pub venue_location: Option<String>,
    #[serde(rename = "playerCount", default)]
    pub player_count: u32,
    #[serde(default)]
    pub roster: Vec<ParticipantRecord>,
}
