use std::collections::HashSet;

use crate::domain::ParticipantRecord;

/// Case-insensitive normalized edit similarity in `[0, 1]`
pub fn name_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Jaccard index over lower-cased, trimmed participant names.
///
/// `None` when either roster is empty, since an absent roster says nothing about overlap.
pub fn roster_overlap(a: &[ParticipantRecord], b: &[ParticipantRecord]) -> Option<f64> {
    let left = name_set(a);
    let right = name_set(b);
    if left.is_empty() || right.is_empty() {
        return None;
    }

    let intersection = left.intersection(&right).count();
    let union = left.union(&right).count();
    Some(intersection as f64 / union as f64)
}

fn name_set(roster: &[ParticipantRecord]) -> HashSet<String> {
    roster
        .iter()
        .map(|p| p.canonical_name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}
