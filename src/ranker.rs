use std::collections::HashMap;

use rayon::prelude::*;

use crate::categorization::{Categorization, RankedCategorization};
use crate::category::Category;

// Total item count at or above which categories are ranked in parallel
const PARALLEL_THRESHOLD: usize = 10_000;

/// Upper-cases the first character of `item`, leaving the rest untouched.
///
/// Only single-character case mappings apply; a character whose upper-case
/// form is several characters long (e.g. `ß`) is kept as is.
pub fn capitalize_first(item: &str) -> String {
    let mut chars = item.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => first,
    };

    let mut result = String::with_capacity(item.len());
    result.push(head);
    result.push_str(chars.as_str());
    result
}

/// Occurrence counts of normalized items, remembering first-seen order.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<S: AsRef<str>>(items: &[S]) -> Self {
        let mut table = FrequencyTable::new();
        for item in items {
            table.add(item.as_ref());
        }
        table
    }

    /// Counts one occurrence of `item` after normalization.
    pub fn add(&mut self, item: &str) {
        let key = capitalize_first(item);
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn count(&self, item: &str) -> usize {
        self.index
            .get(&capitalize_first(item))
            .map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct items by descending count; equal counts keep first-seen order.
    pub fn into_ranked(self) -> Vec<String> {
        let mut entries = self.entries;
        // stable: ties stay in first-occurrence order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(item, _)| item).collect()
    }
}

/// Ranks `items` by descending frequency, merging entries that differ only in
/// the case of their first character.
pub fn rank<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    FrequencyTable::from_items(items).into_ranked()
}

/// Ranks every category of `categorization` independently.
pub fn rank_categorization(categorization: &Categorization) -> RankedCategorization {
    let use_parallel = categorization.total_len() >= PARALLEL_THRESHOLD;
    log::debug!(
        "Ranking {} items ({})",
        categorization.total_len(),
        if use_parallel { "parallel" } else { "sequential" }
    );

    if use_parallel {
        let ranked: Vec<(Category, Vec<String>)> = Category::ALL
            .par_iter()
            .map(|&category| (category, rank(categorization.get(category))))
            .collect();
        ranked.into_iter().collect()
    } else {
        Category::ALL
            .iter()
            .map(|&category| (category, rank(categorization.get(category))))
            .collect()
    }
}
