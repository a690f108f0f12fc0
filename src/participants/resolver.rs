use log::debug;

use crate::domain::{MatchSide, ParticipantId, ParticipantRecord, RawMatchRecord, ResolvedMatchRecord};

/// Outcome of matching a raw name against a tournament roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Resolved(&'a ParticipantRecord),
    Unresolved,
}

impl<'a> Resolution<'a> {
    pub fn record(&self) -> Option<&'a ParticipantRecord> {
        match self {
            Resolution::Resolved(record) => Some(record),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Collapses whitespace runs (non-breaking spaces included) to one ASCII space and trims
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves a raw match name to a roster entry.
///
/// Tries exact, then case-insensitive, then unique case-insensitive prefix matching.
/// A prefix shared by several roster names is ambiguous and stays unresolved.
pub fn resolve<'a>(raw: &str, roster: &'a [ParticipantRecord]) -> Resolution<'a> {
    let name = normalize_name(raw);
    if name.is_empty() {
        return Resolution::Unresolved;
    }

    let resolved = find_exact(&name, roster)
        .or_else(|| find_case_insensitive(&name, roster))
        .or_else(|| find_unique_prefix(&name, roster));

    match resolved {
        Some(record) => Resolution::Resolved(record),
        None => {
            debug!("Could not resolve participant name '{}'", name);
            Resolution::Unresolved
        }
    }
}

fn find_exact<'a>(name: &str, roster: &'a [ParticipantRecord]) -> Option<&'a ParticipantRecord> {
    roster.iter().find(|p| p.canonical_name == name)
}

fn find_case_insensitive<'a>(name: &str, roster: &'a [ParticipantRecord]) -> Option<&'a ParticipantRecord> {
    let lower = name.to_lowercase();
    roster.iter().find(|p| p.canonical_name.to_lowercase() == lower)
}

fn find_unique_prefix<'a>(name: &str, roster: &'a [ParticipantRecord]) -> Option<&'a ParticipantRecord> {
    let lower = name.to_lowercase();
    let mut candidates = roster
        .iter()
        .filter(|p| p.canonical_name.to_lowercase().starts_with(&lower));

    let first = candidates.next()?;
    if candidates.next().is_some() {
        debug!("Ambiguous prefix '{}' matches several participants", name);
        return None;
    }
    Some(first)
}

/// Maps both sides and the reported winner of a raw match onto roster identities
pub fn resolve_match(raw: &RawMatchRecord, roster: &[ParticipantRecord]) -> ResolvedMatchRecord {
    let player1 = resolve_side(Some(raw.player1_raw_name.as_str()), roster);
    let player2 = resolve_side(raw.player2_raw_name.as_deref(), roster);
    let winner = raw
        .explicit_winner_raw_name
        .as_deref()
        .and_then(|name| resolve_winner(name, raw, player1, player2, roster));

    ResolvedMatchRecord {
        round_number: raw.round_number,
        round_kind: raw.round_kind,
        player1,
        player2,
        score1: raw.score1,
        score2: raw.score2,
        winner,
        player1_raw_name: raw.player1_raw_name.clone(),
        player2_raw_name: raw.player2_raw_name.clone(),
    }
}

pub fn resolve_matches(raws: &[RawMatchRecord], roster: &[ParticipantRecord]) -> Vec<ResolvedMatchRecord> {
    raws.iter().map(|raw| resolve_match(raw, roster)).collect()
}

fn resolve_side(raw_name: Option<&str>, roster: &[ParticipantRecord]) -> MatchSide {
    let Some(raw_name) = raw_name.filter(|name| !normalize_name(name).is_empty()) else {
        return MatchSide::Bye;
    };

    match resolve(raw_name, roster) {
        Resolution::Resolved(record) => MatchSide::Resolved(record.internal_id),
        Resolution::Unresolved => MatchSide::Unresolved,
    }
}

/// The winner string is compared to the match's own raw names first, then to the roster.
/// A winner naming neither participant carries no usable result.
fn resolve_winner(
    winner_name: &str,
    raw: &RawMatchRecord,
    player1: MatchSide,
    player2: MatchSide,
    roster: &[ParticipantRecord],
) -> Option<ParticipantId> {
    let winner = normalize_name(winner_name).to_lowercase();
    if winner.is_empty() {
        return None;
    }

    let same_name = |name: &str| normalize_name(name).to_lowercase() == winner;
    if same_name(&raw.player1_raw_name) {
        return player1.id();
    }
    if raw.player2_raw_name.as_deref().is_some_and(same_name) {
        return player2.id();
    }

    let resolved = resolve(winner_name, roster).record()?.internal_id;
    [player1.id(), player2.id()]
        .into_iter()
        .flatten()
        .find(|id| *id == resolved)
}
