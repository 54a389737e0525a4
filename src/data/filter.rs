use std::collections::BTreeSet;

use super::model::{FundingDataset, FundingRecord, FundingRound};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Filter selection: one predicate per dimension
// ---------------------------------------------------------------------------

/// The user's current filter choices. `None` on a dimension means "All"
/// (no constraint); `rounds` filters by set membership, so an empty set
/// matches nothing and the full set of rounds present matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub year: Option<i32>,
    pub industry: Option<String>,
    pub city: Option<String>,
    pub rounds: BTreeSet<FundingRound>,
}

impl FilterSelection {
    /// The no-op selection for `dataset`: all dimensions at "All", every
    /// round present selected.
    pub fn all_rounds(dataset: &FundingDataset) -> Self {
        FilterSelection {
            year: None,
            industry: None,
            city: None,
            rounds: dataset.rounds().clone(),
        }
    }

    /// Restore the no-op selection (the sidebar's Reset button).
    pub fn reset(&mut self, dataset: &FundingDataset) {
        *self = FilterSelection::all_rounds(dataset);
    }

    fn matches(&self, rec: &FundingRecord) -> bool {
        if let Some(year) = self.year {
            if rec.year != year {
                return false;
            }
        }
        if let Some(industry) = &self.industry {
            if rec.industry != *industry {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if rec.city != *city {
                return false;
            }
        }
        self.rounds.contains(&rec.funding_round)
    }

    /// How many dimensions are actively restricting: a dimension at "All"
    /// does not count, and the round set only counts when it is a proper
    /// subset of the rounds present in `dataset`.
    pub fn active_count(&self, dataset: &FundingDataset) -> usize {
        let mut active = 0;
        if self.year.is_some() {
            active += 1;
        }
        if self.industry.is_some() {
            active += 1;
        }
        if self.city.is_some() {
            active += 1;
        }
        if self.rounds.len() < dataset.rounds().len() {
            active += 1;
        }
        active
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The canonical table restricted by one [`FilterSelection`]: a new owned
/// table plus the numbers the sidebar reports.
#[derive(Debug, Clone)]
pub struct FilteredResult {
    records: Vec<FundingRecord>,
    active_filters: usize,
}

impl FilteredResult {
    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    /// Count of dimensions actively restricting the view.
    pub fn active_filters(&self) -> usize {
        self.active_filters
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// For callers whose policy is abort-the-pass on an empty view.
    /// Callers that render an empty state instead just skip this call.
    pub fn require_non_empty(self) -> Result<Self, DataError> {
        if self.is_empty() {
            Err(DataError::EmptyResult)
        } else {
            Ok(self)
        }
    }
}

/// Apply all four predicates (ANDed) and produce the filtered table.
pub fn apply_filters(dataset: &FundingDataset, selection: &FilterSelection) -> FilteredResult {
    let records: Vec<FundingRecord> = dataset
        .records()
        .iter()
        .filter(|rec| selection.matches(rec))
        .cloned()
        .collect();

    FilteredResult {
        records,
        active_filters: selection.active_count(dataset),
    }
}
