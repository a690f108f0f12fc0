use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::{
    ParticipantId, ParticipantRecord, Platform, RawMatchRecord, SourceStandings, SquadListDescriptor,
    TournamentSummary, deserialize_optional_date,
};

/// One scraper export file
#[derive(Debug, Deserialize, Serialize)]
pub struct SourceBatch {
    pub platform: Platform,
    /// Kept as raw json so one bad record cannot sink the whole batch
    #[serde(default)]
    pub tournaments: Vec<Value>,
}

/// Player entry as reported by the platform
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcePlayer {
    pub id: ParticipantId,
    pub name: String,
    #[serde(flatten)]
    pub standings: SourceStandings,
    /// XWS squad-list export, if the player submitted one
    #[serde(default)]
    pub list: Option<Value>,
}

/// Tournament record from a single platform
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceTournament {
    #[serde(rename = "sourceId")]
    pub source_id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "venueLocation", default)]
    pub venue_location: Option<String>,
    #[serde(default)]
    pub players: Vec<SourcePlayer>,
    /// Raw json per match; see `match_records`
    #[serde(default)]
    pub matches: Vec<Value>,
}

impl SourceTournament {
    pub fn roster(&self) -> Vec<ParticipantRecord> {
        self.players
            .iter()
            .map(|p| ParticipantRecord {
                canonical_name: p.name.clone(),
                internal_id: p.id,
            })
            .collect()
    }

    /// Well-formed matches in source order; malformed ones are logged and dropped
    pub fn match_records(&self) -> Vec<RawMatchRecord> {
        self.matches
            .iter()
            .enumerate()
            .filter_map(|(idx, value)| match serde_json::from_value::<RawMatchRecord>(value.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed match #{} in '{}': {}", idx + 1, self.name, e);
                    None
                }
            })
            .collect()
    }

    pub fn supplied_standings(&self) -> BTreeMap<ParticipantId, SourceStandings> {
        self.players.iter().map(|p| (p.id, p.standings)).collect()
    }

    /// Squad lists in roster order; players without a list are left out
    pub fn squad_lists(&self) -> Vec<SquadListDescriptor> {
        self.players
            .iter()
            .filter_map(|p| p.list.as_ref())
            .map(SquadListDescriptor::from_xws)
            .collect()
    }

    pub fn summary(&self, platform: Platform) -> TournamentSummary {
        TournamentSummary {
            name: self.name.clone(),
            date: self.date,
            platform,
            venue_location: self.venue_location.clone(),
            player_count: self.players.len() as u32,
            roster: self.roster(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_tournament_from_json() {
        let tournament: SourceTournament = serde_json::from_value(json!({
            "sourceId": "lf-4521",
            "name": "Hoth Open",
            "date": "2024-06-10T09:00:00Z",
            "players": [
                { "id": 11, "name": "Alice", "wins": -1, "list": { "vendor": { "yasb": {} } } },
                { "id": 12, "name": "Bob", "wins": 2, "losses": 1, "draws": 0, "tieBreakPoints": 310 }
            ],
            "matches": [
                { "roundNumber": 1, "roundKind": "swiss", "player1": "Alice", "player2": "Bob", "score1": 20, "score2": 15 }
            ]
        }))
        .unwrap();

        assert_eq!(tournament.date, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert_eq!(tournament.players[0].standings.wins, None);
        assert_eq!(tournament.players[1].standings.wins, Some(2));
        assert_eq!(tournament.squad_lists().len(), 1);
        assert_eq!(tournament.match_records()[0].player2_raw_name.as_deref(), Some("Bob"));

        let summary = tournament.summary(Platform::Longshanks);
        assert_eq!(summary.player_count, 2);
        assert_eq!(summary.roster[1], ParticipantRecord::new("Bob", 12));
        assert_eq!(tournament.supplied_standings()[&ParticipantId(12)].tie_break_points, Some(310));
    }

    #[test]
    fn test_malformed_match_is_dropped_alone() {
        let tournament: SourceTournament = serde_json::from_value(json!({
            "sourceId": "ls-88",
            "name": "Scarif Showdown",
            "players": [
                { "id": 1, "name": "Jyn Erso" },
                { "id": 2, "name": "Cassian Andor" }
            ],
            "matches": [
                { "roundNumber": 1, "roundKind": "swiss", "player1": "Jyn Erso", "player2": "Cassian Andor", "score1": 20, "score2": 15 },
                { "roundNumber": 2, "roundKind": "swiss", "player1": "Jyn Erso", "player2": "Cassian Andor", "score1": null, "score2": 15 },
                { "roundNumber": 3, "roundKind": "finals", "player1": "Jyn Erso", "player2": "Cassian Andor" },
                { "roundNumber": 4, "roundKind": "elimination", "player1": null }
            ]
        }))
        .unwrap();

        let records = tournament.match_records();

        assert_eq!(tournament.players.len(), 2);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].round_number, 1);
        assert_eq!(records[0].score1, 20);
    }
}
