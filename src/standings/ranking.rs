use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::domain::{ParticipantId, StandingsLine};

/// Orders participants into final Swiss ranks (1-based).
///
/// Event points, then wins, then tie-break points, all descending. Participant id breaks
/// any remaining tie so the order is stable.
pub fn rank(standings: &BTreeMap<ParticipantId, StandingsLine>) -> Vec<(ParticipantId, usize)> {
    let mut ordered: Vec<(&ParticipantId, &StandingsLine)> = standings.iter().collect();
    ordered.sort_by_key(|(id, line)| {
        (
            Reverse(line.event_points),
            Reverse(line.wins),
            Reverse(line.tie_break_points),
            **id,
        )
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, (id, _))| (*id, idx + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(event_points: i64, wins: u32, tie_break_points: i64) -> StandingsLine {
        StandingsLine {
            wins,
            event_points,
            tie_break_points,
            ..StandingsLine::default()
        }
    }

    #[test]
    fn test_rank_orders_by_points_then_tie_break() {
        let standings: BTreeMap<_, _> = [
            (ParticipantId(1), line(3, 1, 100)),
            (ParticipantId(2), line(6, 2, 50)),
            (ParticipantId(3), line(3, 1, 180)),
            (ParticipantId(4), line(3, 1, 180)),
        ]
        .into_iter()
        .collect();

        let ranks = rank(&standings);

        assert_eq!(
            ranks,
            vec![
                (ParticipantId(2), 1),
                (ParticipantId(3), 2),
                (ParticipantId(4), 3),
                (ParticipantId(1), 4),
            ]
        );
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&BTreeMap::new()).is_empty());
    }
}
