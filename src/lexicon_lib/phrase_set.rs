use std::collections::HashSet;
use serde::{Deserialize, Serialize};

/// Fixed list of expressions matched against whole tokens, ignoring case.
///
/// Serialized as a plain JSON array in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PhraseSet {
    entries: Vec<String>,
    folded: HashSet<String>,
}

impl PhraseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `phrase` unless an entry equal to it ignoring case is present.
    pub fn insert(&mut self, phrase: impl Into<String>) -> bool {
        let phrase = phrase.into();
        if self.folded.insert(fold(&phrase)) {
            self.entries.push(phrase);
            true
        } else {
            false
        }
    }

    /// Exact, case-insensitive match of the whole `text`. No substring matching.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.folded.contains(&fold(text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[inline]
fn fold(s: &str) -> String {
    s.to_lowercase()
}

impl<S: Into<String>> FromIterator<S> for PhraseSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PhraseSet::new();
        for phrase in iter {
            set.insert(phrase);
        }
        set
    }
}

impl From<Vec<String>> for PhraseSet {
    fn from(entries: Vec<String>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<PhraseSet> for Vec<String> {
    fn from(set: PhraseSet) -> Self {
        set.entries
    }
}
