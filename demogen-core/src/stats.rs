//! Per-category counts for the end-of-run summary.

use std::collections::BTreeMap;

use crate::record::{Category, Record};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStats {
    counts: BTreeMap<Category, usize>,
}

impl CategoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one written record. Undated tasks count as tasks.
    pub fn record(&mut self, record: &Record) {
        *self.counts.entry(record.category).or_insert(0) += 1;
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts for every category, zeros included, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}
