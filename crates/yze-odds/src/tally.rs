use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How many trials produced each count (of successes, botches, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    counts: BTreeMap<u32, u64>,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one trial that produced `count`.
    pub fn record(&mut self, count: u32) {
        *self.counts.entry(count).or_insert(0) += 1;
    }

    /// Number of trials recorded.
    pub fn trials(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Trials that produced exactly `count`.
    pub fn occurrences(&self, count: u32) -> u64 {
        self.counts.get(&count).copied().unwrap_or(0)
    }

    /// Trials that produced at least one.
    pub fn at_least_one(&self) -> u64 {
        self.counts.range(1..).map(|(_, n)| n).sum()
    }

    /// Percentage of `trials` that produced exactly `count`.
    pub fn percent(&self, count: u32, trials: u64) -> f64 {
        percent_of(self.occurrences(count), trials)
    }

    /// Percentage of `trials` that produced at least one.
    pub fn at_least_one_percent(&self, trials: u64) -> f64 {
        percent_of(self.at_least_one(), trials)
    }

    /// Mean count per trial.
    pub fn mean(&self, trials: u64) -> f64 {
        if trials == 0 {
            return 0.0;
        }
        let total: u64 = self
            .counts
            .iter()
            .map(|(count, n)| u64::from(*count) * n)
            .sum();
        total as f64 / trials as f64
    }

    /// Non-zero counts with their occurrences, in ascending order.
    pub fn distribution(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.range(1..).map(|(count, n)| (*count, *n))
    }
}

/// `part` as a percentage of `whole`, or 0 for an empty whole.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally() {
        let t = Tally::new();
        assert_eq!(t.trials(), 0);
        assert_eq!(t.at_least_one(), 0);
        assert_eq!(t.mean(0), 0.0);
        assert_eq!(t.distribution().count(), 0);
    }

    #[test]
    fn record_and_query() {
        let mut t = Tally::new();
        for count in [0, 0, 1, 2, 2, 3] {
            t.record(count);
        }
        assert_eq!(t.trials(), 6);
        assert_eq!(t.occurrences(0), 2);
        assert_eq!(t.occurrences(2), 2);
        assert_eq!(t.occurrences(7), 0);
        assert_eq!(t.at_least_one(), 4);
        let dist: Vec<_> = t.distribution().collect();
        assert_eq!(dist, vec![(1, 1), (2, 2), (3, 1)]);
    }

    #[test]
    fn percentages() {
        let mut t = Tally::new();
        for count in [0, 1, 1, 2] {
            t.record(count);
        }
        assert!((t.percent(1, 4) - 50.0).abs() < f64::EPSILON);
        assert!((t.at_least_one_percent(4) - 75.0).abs() < f64::EPSILON);
        assert!((t.mean(4) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_of_empty_whole() {
        assert_eq!(percent_of(3, 0), 0.0);
        assert!((percent_of(1, 8) - 12.5).abs() < f64::EPSILON);
    }
}
