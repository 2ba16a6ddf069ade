//! Per-record inclusion test for the alumni directory.
//!
//! A record is included when the text, batch and profession sub-predicates
//! all pass. Unset criteria always pass.

use crate::core::{AlumniRecord, FilterCriteria};

/// Case-insensitive substring match against name, location and profession.
/// The term is not trimmed.
pub fn matches_text(record: &AlumniRecord, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    contains_lowercase(&record.name, &needle)
        || contains_lowercase(&record.location, &needle)
        || contains_lowercase(&record.profession, &needle)
}

fn contains_lowercase(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// The selector value is compared with the batch rendered as text, so a
/// value that is not a year simply matches nothing.
pub fn matches_batch(record: &AlumniRecord, selected_batch: Option<&str>) -> bool {
    selected_batch.map_or(true, |batch| record.batch.to_string() == batch)
}

/// Exact, case-sensitive comparison.
pub fn matches_profession(record: &AlumniRecord, selected_profession: Option<&str>) -> bool {
    selected_profession.map_or(true, |profession| record.profession == profession)
}

pub fn matches(record: &AlumniRecord, criteria: &FilterCriteria) -> bool {
    matches_text(record, &criteria.search_term)
        && matches_batch(record, criteria.batch())
        && matches_profession(record, criteria.profession())
}

/// Roster positions of the matching records, in roster order.
pub fn filter_indices(roster: &[AlumniRecord], criteria: &FilterCriteria) -> Vec<usize> {
    roster
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, criteria))
        .map(|(index, _)| index)
        .collect()
}

/// Order-preserving subsequence of `roster` matching `criteria`.
pub fn filter_roster<'a>(
    roster: &'a [AlumniRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a AlumniRecord> {
    roster
        .iter()
        .filter(|record| matches(record, criteria))
        .collect()
}
