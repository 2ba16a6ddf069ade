use crate::core::filter::filter_indices;
use crate::core::options::derive_options;
use crate::core::{AlumniRecord, FilterCriteria, FilterOptions};
use std::cell::OnceCell;

/// Filter state holder for one directory view.
///
/// Owns the roster and the current criteria. The filtered result is computed
/// lazily and cached until the next mutation; option lists are computed once
/// because the roster cannot change after construction.
#[derive(Debug)]
pub struct AlumniDirectory {
    roster: Vec<AlumniRecord>,
    options: FilterOptions,
    criteria: FilterCriteria,
    visible: OnceCell<Vec<usize>>,
}

impl AlumniDirectory {
    pub fn new(roster: Vec<AlumniRecord>) -> Self {
        Self::with_criteria(roster, FilterCriteria::default())
    }

    pub fn with_criteria(roster: Vec<AlumniRecord>, criteria: FilterCriteria) -> Self {
        let options = derive_options(&roster);
        tracing::debug!(
            "Directory built: {} records, {} batches, {} professions",
            roster.len(),
            options.batches.len(),
            options.professions.len()
        );
        Self {
            roster,
            options,
            criteria,
            visible: OnceCell::new(),
        }
    }

    pub fn roster(&self) -> &[AlumniRecord] {
        &self.roster
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn set_search_term(&mut self, value: impl Into<String>) {
        self.criteria.search_term = value.into();
        self.invalidate();
    }

    pub fn set_selected_batch(&mut self, value: Option<i32>) {
        self.set_batch_selector(value.map(|batch| batch.to_string()));
    }

    /// Takes the selector's raw value; anything that is not a listed year
    /// leaves the result empty.
    pub fn set_batch_selector(&mut self, value: Option<String>) {
        self.criteria.selected_batch = value;
        self.invalidate();
    }

    pub fn set_selected_profession(&mut self, value: Option<String>) {
        self.criteria.selected_profession = value;
        self.invalidate();
    }

    /// Replaces the whole criteria value at once.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.invalidate();
    }

    pub fn filtered(&self) -> Vec<&AlumniRecord> {
        self.visible_indices()
            .iter()
            .map(|&index| &self.roster[index])
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.visible_indices().len()
    }

    /// True when the view should show its empty state and offer a reset.
    pub fn is_empty_result(&self) -> bool {
        self.visible_indices().is_empty()
    }

    fn visible_indices(&self) -> &[usize] {
        self.visible.get_or_init(|| {
            let indices = filter_indices(&self.roster, &self.criteria);
            tracing::debug!(
                "Filtered {} of {} records with {:?}",
                indices.len(),
                self.roster.len(),
                self.criteria
            );
            indices
        })
    }

    fn invalidate(&mut self) {
        self.visible.take();
    }
}
