/// Output category of a categorization run (strongly-typed).
///
/// Every category owns exactly one output file, named `Chinese<Label>.txt`.
/// Five of them are *primary* part-of-speech buckets: every Chinese token lands
/// in exactly one of [`Category::Nouns`], [`Category::Verbs`],
/// [`Category::Adjectives`], [`Category::Adverbs`] or
/// [`Category::OtherExpressions`]. The remaining ones are filled independently.
///
/// | Variant            | Output file                     | Filled by                 |
/// |--------------------|---------------------------------|---------------------------|
/// | `Characters`       | `ChineseCharacters.txt`         | every Han character       |
/// | `Adjectives`       | `ChineseAdjectives.txt`         | primary bucket            |
/// | `Adverbs`          | `ChineseAdverbs.txt`            | primary bucket            |
/// | `CommonPhrases`    | `ChineseCommonPhrases.txt`      | lexicon match             |
/// | `Idioms`           | `ChineseIdioms.txt`             | lexicon match             |
/// | `Nouns`            | `ChineseNouns.txt`              | primary bucket            |
/// | `NounPhrases`      | `ChineseNounPhrases.txt`        | noun-group chunker        |
/// | `Slang`            | `ChineseSlang.txt`              | lexicon match             |
/// | `VerbPhrases`      | `ChineseVerbPhrases.txt`        | verb-group chunker        |
/// | `Verbs`            | `ChineseVerbs.txt`              | primary bucket            |
/// | `OtherExpressions` | `ChineseOtherExpressions.txt`   | primary bucket (fallback) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Characters,
    Adjectives,
    Adverbs,
    CommonPhrases,
    Idioms,
    Nouns,
    NounPhrases,
    Slang,
    VerbPhrases,
    Verbs,
    OtherExpressions,
}

impl Category {
    /// All categories, in the order their files are written.
    pub const ALL: [Category; 11] = [
        Category::Characters,
        Category::Adjectives,
        Category::Adverbs,
        Category::CommonPhrases,
        Category::Idioms,
        Category::Nouns,
        Category::NounPhrases,
        Category::Slang,
        Category::VerbPhrases,
        Category::Verbs,
        Category::OtherExpressions,
    ];

    /// Bare label, e.g. `"NounPhrases"`.
    pub fn label(self) -> &'static str {
        match self {
            Category::Characters => "Characters",
            Category::Adjectives => "Adjectives",
            Category::Adverbs => "Adverbs",
            Category::CommonPhrases => "CommonPhrases",
            Category::Idioms => "Idioms",
            Category::Nouns => "Nouns",
            Category::NounPhrases => "NounPhrases",
            Category::Slang => "Slang",
            Category::VerbPhrases => "VerbPhrases",
            Category::Verbs => "Verbs",
            Category::OtherExpressions => "OtherExpressions",
        }
    }

    /// Name of the output artifact, e.g. `"ChineseNounPhrases.txt"`.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Characters => "ChineseCharacters.txt",
            Category::Adjectives => "ChineseAdjectives.txt",
            Category::Adverbs => "ChineseAdverbs.txt",
            Category::CommonPhrases => "ChineseCommonPhrases.txt",
            Category::Idioms => "ChineseIdioms.txt",
            Category::Nouns => "ChineseNouns.txt",
            Category::NounPhrases => "ChineseNounPhrases.txt",
            Category::Slang => "ChineseSlang.txt",
            Category::VerbPhrases => "ChineseVerbPhrases.txt",
            Category::Verbs => "ChineseVerbs.txt",
            Category::OtherExpressions => "ChineseOtherExpressions.txt",
        }
    }

    /// Whether this is one of the five mutually exclusive POS buckets.
    #[inline]
    pub fn is_primary(self) -> bool {
        matches!(
            self,
            Category::Nouns
                | Category::Verbs
                | Category::Adjectives
                | Category::Adverbs
                | Category::OtherExpressions
        )
    }
}

impl TryFrom<&str> for Category {
    /// Parses a category label (case-insensitive).
    ///
    /// Both the bare label (`"nouns"`) and the prefixed form
    /// (`"ChineseNouns"`) are accepted.
    type Error = ();

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lower = s.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("chinese").unwrap_or(&lower);
        match bare {
            "characters" => Ok(Self::Characters),
            "adjectives" => Ok(Self::Adjectives),
            "adverbs" => Ok(Self::Adverbs),
            "commonphrases" => Ok(Self::CommonPhrases),
            "idioms" => Ok(Self::Idioms),
            "nouns" => Ok(Self::Nouns),
            "nounphrases" => Ok(Self::NounPhrases),
            "slang" => Ok(Self::Slang),
            "verbphrases" => Ok(Self::VerbPhrases),
            "verbs" => Ok(Self::Verbs),
            "otherexpressions" => Ok(Self::OtherExpressions),
            _ => Err(()),
        }
    }
}
