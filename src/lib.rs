//! Chinese text categorization.
//!
//! A text buffer is tagged with jieba, every Chinese token is sorted into a
//! part-of-speech bucket and checked against idiom, slang and common-phrase
//! lists, noun and verb phrases are chunked out of the token stream, and each
//! category is ranked by frequency and written to its own file.
//!
//! ```no_run
//! use zho_categorizer::Categorizer;
//!
//! let categorizer = Categorizer::new();
//! let summary = categorizer.categorize_file("input.txt", "out").unwrap();
//! for row in summary.rows() {
//!     println!("{}: {}", row.category.label(), row.distinct);
//! }
//! ```
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

pub mod categorization;
pub mod category;
pub mod chunker;
pub mod classifier;
pub mod error;
pub mod lexicon_lib;
pub mod pos_tag;
pub mod ranker;
pub mod reader;
pub mod script;
pub mod tagger;
pub mod writer;

pub use categorization::{Categorization, RankedCategorization};
pub use category::Category;
pub use chunker::{chunk_phrases, TagGroup};
pub use classifier::classify;
pub use error::{CategorizeError, Result};
pub use lexicon_lib::{Lexicon, PhraseSet};
pub use pos_tag::PosTag;
pub use ranker::{rank, rank_categorization};
pub use script::{extract_characters, is_chinese_text};
pub use tagger::{JiebaTagger, Tagger, Token};

/// Item counts of one category after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub category: Category,
    /// Items collected, repeats included.
    pub collected: usize,
    /// Distinct items written.
    pub distinct: usize,
}

/// Per-category counts of a completed run, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizationSummary {
    rows: Vec<SummaryRow>,
}

impl CategorizationSummary {
    fn new(raw: &Categorization, ranked: &RankedCategorization) -> Self {
        let rows = Category::ALL
            .iter()
            .map(|&category| SummaryRow {
                category,
                collected: raw.get(category).len(),
                distinct: ranked.get(category).len(),
            })
            .collect();
        CategorizationSummary { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn get(&self, category: Category) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.category == category)
    }
}

/// Runs the categorization pipeline with a tagger and a lexicon.
pub struct Categorizer<T: Tagger = JiebaTagger> {
    tagger: T,
    lexicon: Lexicon,
}

impl Categorizer<JiebaTagger> {
    /// Jieba tagger with the built-in lexicon.
    pub fn new() -> Self {
        Categorizer {
            tagger: JiebaTagger::new(),
            lexicon: Lexicon::new(),
        }
    }
}

impl Default for Categorizer<JiebaTagger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tagger> Categorizer<T> {
    pub fn with_parts(tagger: T, lexicon: Lexicon) -> Self {
        Categorizer { tagger, lexicon }
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classifies `tokens` and chunks their noun and verb phrases.
    pub fn categorize_tokens(&self, tokens: &[Token]) -> Categorization {
        let mut result = classify(tokens, &self.lexicon);
        result.set(Category::NounPhrases, chunk_phrases(tokens, TagGroup::Noun));
        result.set(Category::VerbPhrases, chunk_phrases(tokens, TagGroup::Verb));
        result
    }

    /// Tags `text` and collects the raw items of every category.
    pub fn categorize_text(&self, text: &str) -> Result<Categorization> {
        let tokens = self.tagger.tag(text)?;
        Ok(self.categorize_tokens(&tokens))
    }

    /// Tags `text` and ranks every category by frequency.
    pub fn rank_text(&self, text: &str) -> Result<RankedCategorization> {
        let categorization = self.categorize_text(text)?;
        Ok(rank_categorization(&categorization))
    }

    /// Categorizes the UTF-8 file `input` and writes one ranked file per
    /// category into `output_dir`.
    pub fn categorize_file<P, Q>(&self, input: P, output_dir: Q) -> Result<CategorizationSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        self.categorize_file_with_encoding(input, output_dir, UTF_8)
    }

    /// Like [`Categorizer::categorize_file`], decoding `input` from `encoding`.
    pub fn categorize_file_with_encoding<P, Q>(
        &self,
        input: P,
        output_dir: Q,
        encoding: &'static Encoding,
    ) -> Result<CategorizationSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let content = reader::read_input(input, encoding)?;
        let categorization = self.categorize_text(&content)?;
        let ranked = rank_categorization(&categorization);
        writer::write_rankings(&ranked, output_dir.as_ref())?;
        log::info!(
            "Wrote {} categories to {}",
            Category::ALL.len(),
            output_dir.as_ref().display()
        );
        Ok(CategorizationSummary::new(&categorization, &ranked))
    }
}
