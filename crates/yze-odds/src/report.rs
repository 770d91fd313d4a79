use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tally::{Tally, percent_of};

/// One labelled tally in a report, e.g. "push successes".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsRow {
    /// What was counted.
    pub label: String,
    /// How often each count came up.
    pub tally: Tally,
}

/// Everything tallied over one odds run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsReport {
    /// The game variant simulated.
    pub variant: String,
    /// Number of trials run.
    pub trials: u64,
    /// Seed the run's RNG was built from.
    pub seed: u64,
    /// Count tallies, in the order they were declared.
    pub rows: Vec<OddsRow>,
    /// Categorical outcomes (e.g. hit locations) and how often each came up.
    pub categories: BTreeMap<String, u64>,
}

impl OddsReport {
    /// Create a report with empty rows for each label.
    pub fn new(variant: impl Into<String>, trials: u64, seed: u64, labels: &[&str]) -> Self {
        Self {
            variant: variant.into(),
            trials,
            seed,
            rows: labels
                .iter()
                .map(|label| OddsRow {
                    label: (*label).to_string(),
                    tally: Tally::new(),
                })
                .collect(),
            categories: BTreeMap::new(),
        }
    }

    /// Record a count under `label`, adding the row if it is new.
    pub fn record(&mut self, label: &str, count: u32) {
        match self.rows.iter_mut().find(|row| row.label == label) {
            Some(row) => row.tally.record(count),
            None => {
                let mut tally = Tally::new();
                tally.record(count);
                self.rows.push(OddsRow {
                    label: label.to_string(),
                    tally,
                });
            }
        }
    }

    /// Record one occurrence of a categorical outcome.
    pub fn record_category(&mut self, category: impl Into<String>) {
        *self.categories.entry(category.into()).or_insert(0) += 1;
    }

    /// Look up a row by label.
    pub fn find(&self, label: &str) -> Option<&Tally> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| &row.tally)
    }

    /// Percentage of trials with the given categorical outcome.
    pub fn category_percent(&self, category: &str) -> f64 {
        percent_of(
            self.categories.get(category).copied().unwrap_or(0),
            self.trials,
        )
    }
}
