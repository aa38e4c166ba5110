use crate::categorization::Categorization;
use crate::category::Category;
use crate::lexicon_lib::Lexicon;
use crate::pos_tag::PosTag;
use crate::script::{extract_characters, is_chinese_text};
use crate::tagger::Token;

/// Primary bucket of a token's tag. Every tag maps to exactly one of the five
/// primary categories.
pub fn primary_category(tag: PosTag) -> Category {
    match tag {
        PosTag::Noun => Category::Nouns,
        PosTag::Verb => Category::Verbs,
        PosTag::Adjective => Category::Adjectives,
        PosTag::Adverb => Category::Adverbs,
        PosTag::Determiner | PosTag::Modal | PosTag::Other => Category::OtherExpressions,
    }
}

/// Sorts Chinese tokens into characters, their primary POS bucket and any
/// lexicon list they match. Non-Chinese tokens are ignored.
///
/// Phrase categories are left empty; see [`crate::chunker`].
pub fn classify(tokens: &[Token], lexicon: &Lexicon) -> Categorization {
    let mut result = Categorization::new();

    for tok in tokens {
        let text = tok.text.as_str();
        if !is_chinese_text(text) {
            continue;
        }

        result.extend(Category::Characters, extract_characters(text));
        result.push(primary_category(tok.tag), text);

        if lexicon.idioms.matches(text) {
            result.push(Category::Idioms, text);
        }
        if lexicon.slang.matches(text) {
            result.push(Category::Slang, text);
        }
        if lexicon.common_phrases.matches(text) {
            result.push(Category::CommonPhrases, text);
        }
    }

    result
}
