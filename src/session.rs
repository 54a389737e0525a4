use std::sync::Arc;

use crate::data::filter::{apply_filters, FilterSelection, FilteredResult};
use crate::data::model::{FundingDataset, FundingRound};

// ---------------------------------------------------------------------------
// Per-user session state
// ---------------------------------------------------------------------------

/// One user's view of the dashboard, independent of rendering.
///
/// The canonical table is immutable and shared (`Arc`) across sessions; the
/// filter selection and the filtered view are private to this session. Every
/// selection change triggers one synchronous refilter.
pub struct Session {
    dataset: Arc<FundingDataset>,
    selection: FilterSelection,
    filtered: FilteredResult,
}

impl Session {
    /// Start a session over a loaded dataset with the no-op selection.
    pub fn new(dataset: Arc<FundingDataset>) -> Self {
        let selection = FilterSelection::all_rounds(&dataset);
        let filtered = apply_filters(&dataset, &selection);
        Session {
            dataset,
            selection,
            filtered,
        }
    }

    pub fn dataset(&self) -> &FundingDataset {
        &self.dataset
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The current filtered table.
    pub fn filtered(&self) -> &FilteredResult {
        &self.filtered
    }

    /// Recompute the filtered view from the current selection.
    fn refilter(&mut self) {
        self.filtered = apply_filters(&self.dataset, &self.selection);
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.selection.year = year;
        self.refilter();
    }

    pub fn set_industry(&mut self, industry: Option<String>) {
        self.selection.industry = industry;
        self.refilter();
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.selection.city = city;
        self.refilter();
    }

    /// Toggle a single round in the multi-select.
    pub fn toggle_round(&mut self, round: FundingRound) {
        if !self.selection.rounds.remove(&round) {
            self.selection.rounds.insert(round);
        }
        self.refilter();
    }

    /// Select every round present in the dataset.
    pub fn select_all_rounds(&mut self) {
        self.selection.rounds = self.dataset.rounds().clone();
        self.refilter();
    }

    /// Deselect every round (the view becomes empty).
    pub fn select_no_rounds(&mut self) {
        self.selection.rounds.clear();
        self.refilter();
    }

    /// Back to the no-op selection.
    pub fn reset_filters(&mut self) {
        self.selection.reset(&self.dataset);
        self.refilter();
    }
}
