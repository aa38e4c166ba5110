use std::collections::BTreeMap;

use crate::category::Category;

/// Per-category item lists of one run. Every category is present, possibly
/// empty. `Categorization` holds raw items with repeats; a ranked one holds
/// distinct items by descending frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorization {
    items: BTreeMap<Category, Vec<String>>,
}

pub type RankedCategorization = Categorization;

impl Categorization {
    pub fn new() -> Self {
        Categorization {
            items: Category::ALL.iter().map(|&c| (c, Vec::new())).collect(),
        }
    }

    pub fn push(&mut self, category: Category, item: impl Into<String>) {
        self.bucket_mut(category).push(item.into());
    }

    pub fn extend<I>(&mut self, category: Category, items: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.bucket_mut(category).extend(items);
    }

    pub fn set(&mut self, category: Category, items: Vec<String>) {
        self.items.insert(category, items);
    }

    pub fn get(&self, category: Category) -> &[String] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of items over all categories.
    pub fn total_len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    /// Categories and their items in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.items.iter().map(|(&c, v)| (c, v.as_slice()))
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        self.items.entry(category).or_default()
    }
}

impl Default for Categorization {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(Category, Vec<String>)> for Categorization {
    fn from_iter<I: IntoIterator<Item = (Category, Vec<String>)>>(iter: I) -> Self {
        let mut categorization = Categorization::new();
        for (category, items) in iter {
            categorization.set(category, items);
        }
        categorization
    }
}
