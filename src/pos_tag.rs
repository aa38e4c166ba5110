/// Part-of-speech vocabulary consumed by the classifier and the chunker.
///
/// The set is closed: a tagger maps whatever its own flags are onto these
/// seven values, and anything it cannot place becomes [`PosTag::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Modal,
    Other,
}

/// Verbs jieba tags as `v` that behave as modal auxiliaries.
const MODAL_WORDS: &[&str] = &[
    "能", "能够", "会", "可以", "应该", "应当", "必须", "可能", "要", "想", "愿意", "敢", "肯",
    "得以", "需要",
];

/// Pronouns (jieba `r*`) that act as determiners in front of a noun.
const DETERMINER_WORDS: &[&str] = &[
    "这", "那", "这个", "那个", "这些", "那些", "每", "各", "该", "某", "此", "其", "本", "另",
];

impl PosTag {
    /// Maps a jieba POS flag (ICTCLAS-style, e.g. `n`, `nr`, `vd`, `ad`) for
    /// `word` onto the closed tag set.
    pub fn from_jieba(word: &str, flag: &str) -> Self {
        let mut chars = flag.chars();
        match (chars.next(), chars.next()) {
            (Some('n'), _) => PosTag::Noun,
            (Some('v'), _) if MODAL_WORDS.contains(&word) => PosTag::Modal,
            (Some('v'), _) => PosTag::Verb,
            (Some('a'), Some('d')) => PosTag::Adverb,
            (Some('a'), _) => PosTag::Adjective,
            (Some('d'), _) => PosTag::Adverb,
            (Some('r'), _) if DETERMINER_WORDS.contains(&word) => PosTag::Determiner,
            _ => PosTag::Other,
        }
    }
}
