use crate::core::{AlumniRecord, FilterOptions};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Distinct batches, most recent first, and distinct professions in
/// ascending order. An empty roster gives empty lists.
pub fn derive_options(roster: &[AlumniRecord]) -> FilterOptions {
    let batches: BTreeSet<Reverse<i32>> = roster.iter().map(|r| Reverse(r.batch)).collect();
    let professions: BTreeSet<&str> = roster.iter().map(|r| r.profession.as_str()).collect();

    FilterOptions {
        batches: batches.into_iter().map(|Reverse(batch)| batch).collect(),
        professions: professions.into_iter().map(str::to_string).collect(),
    }
}
