use log::{debug, info};
use std::collections::BTreeMap;

use crate::config::{PointsTable, StandingsSettings};
use crate::domain::{ParticipantId, ResolvedMatchRecord, RoundKind, SourceStandings, StandingsLine};
use crate::format::MacroFormat;

/// Result of one match from the point of view of the standings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win { winner: ParticipantId, loser: ParticipantId },
    Draw,
    /// Unplayed or unscored; counts for neither side
    NoResult,
}

/// Counters accumulated from Swiss matches
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    wins: u32,
    losses: u32,
    draws: u32,
    tie_break_points: i64,
}

/// Fills in standings the source did not supply.
///
/// Runs only when some participant has an unset counter. Supplied counters are never
/// overwritten; event points are recomputed only where the source left them unset or zero.
/// Elimination rounds, byes and matches with an unresolved side do not count.
pub fn compute(
    supplied: &BTreeMap<ParticipantId, SourceStandings>,
    matches: &[ResolvedMatchRecord],
    macro_format: MacroFormat,
    settings: &StandingsSettings,
) -> BTreeMap<ParticipantId, StandingsLine> {
    if !supplied.values().any(SourceStandings::needs_computation) {
        debug!("All {} participants have supplied standings", supplied.len());
        return supplied.iter().map(|(id, s)| (*id, supplied_line(s))).collect();
    }

    let tallies = tally_swiss_matches(matches);
    let points = settings.points_for(macro_format);
    info!(
        "Computing standings for {} participants from {} matches",
        supplied.len(),
        matches.len()
    );

    supplied
        .iter()
        .map(|(id, source)| {
            let tally = tallies.get(id).copied().unwrap_or_default();
            (*id, merge_line(source, &tally, points))
        })
        .collect()
}

/// Decides a match from the explicit winner, falling back to the scores
pub fn match_outcome(m: &ResolvedMatchRecord) -> MatchOutcome {
    let (Some(p1), Some(p2)) = (m.player1.id(), m.player2.id()) else {
        return MatchOutcome::NoResult;
    };

    match m.winner {
        Some(winner) if winner == p1 => return MatchOutcome::Win { winner: p1, loser: p2 },
        Some(winner) if winner == p2 => return MatchOutcome::Win { winner: p2, loser: p1 },
        _ => {}
    }

    if m.score1 > m.score2 {
        MatchOutcome::Win { winner: p1, loser: p2 }
    } else if m.score2 > m.score1 {
        MatchOutcome::Win { winner: p2, loser: p1 }
    } else if m.score1 > 0 {
        MatchOutcome::Draw
    } else {
        MatchOutcome::NoResult
    }
}

fn tally_swiss_matches(matches: &[ResolvedMatchRecord]) -> BTreeMap<ParticipantId, Tally> {
    let mut tallies: BTreeMap<ParticipantId, Tally> = BTreeMap::new();

    for m in matches.iter().filter(|m| m.round_kind == RoundKind::Swiss) {
        let (Some(p1), Some(p2)) = (m.player1.id(), m.player2.id()) else {
            continue;
        };

        tallies.entry(p1).or_default().tie_break_points += i64::from(m.score1);
        tallies.entry(p2).or_default().tie_break_points += i64::from(m.score2);

        match match_outcome(m) {
            MatchOutcome::Win { winner, loser } => {
                tallies.entry(winner).or_default().wins += 1;
                tallies.entry(loser).or_default().losses += 1;
            }
            MatchOutcome::Draw => {
                tallies.entry(p1).or_default().draws += 1;
                tallies.entry(p2).or_default().draws += 1;
            }
            MatchOutcome::NoResult => {}
        }
    }

    tallies
}

fn merge_line(source: &SourceStandings, tally: &Tally, points: PointsTable) -> StandingsLine {
    let wins = source.wins.unwrap_or(tally.wins);
    let draws = source.draws.unwrap_or(tally.draws);
    let event_points = match source.event_points {
        Some(supplied) if supplied != 0 => supplied,
        _ => i64::from(wins) * points.win + i64::from(draws) * points.draw,
    };

    StandingsLine {
        wins,
        losses: source.losses.unwrap_or(tally.losses),
        draws,
        tie_break_points: source.tie_break_points.unwrap_or(tally.tie_break_points),
        event_points,
    }
}

fn supplied_line(source: &SourceStandings) -> StandingsLine {
    StandingsLine {
        wins: source.wins.unwrap_or_default(),
        losses: source.losses.unwrap_or_default(),
        draws: source.draws.unwrap_or_default(),
        tie_break_points: source.tie_break_points.unwrap_or_default(),
        event_points: source.event_points.unwrap_or_default(),
    }
}
