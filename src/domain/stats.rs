use serde::{Deserialize, Deserializer};

/// Value sources use for "not computed yet"
pub const UNSET_SENTINEL: i64 = -1;

/// Reads an optional integer stat, folding the unset sentinel into `None`.
///
/// Values that do not fit the target type (a negative win count, say) carry no
/// usable signal and are treated as unset as well.
pub fn deserialize_stat<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(stat_from_raw))
}

pub fn stat_from_raw<T: TryFrom<i64>>(raw: i64) -> Option<T> {
    if raw == UNSET_SENTINEL {
        return None;
    }
    T::try_from(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceStandings;

    #[test]
    fn test_sentinel_becomes_none() {
        assert_eq!(stat_from_raw::<u32>(-1), None);
        assert_eq!(stat_from_raw::<i64>(-1), None);
        assert_eq!(stat_from_raw::<u32>(0), Some(0));
        assert_eq!(stat_from_raw::<u32>(-4), None);
        assert_eq!(stat_from_raw::<i64>(-4), Some(-4));
    }

    #[test]
    fn test_source_standings_from_json() {
        let stats: SourceStandings =
            serde_json::from_str(r#"{"wins": 3, "losses": -1, "eventPoints": 0}"#).unwrap();

        assert_eq!(stats.wins, Some(3));
        assert_eq!(stats.losses, None);
        assert_eq!(stats.draws, None);
        assert_eq!(stats.tie_break_points, None);
        assert_eq!(stats.event_points, Some(0));
        assert!(stats.needs_computation());
    }
}
