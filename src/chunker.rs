use crate::pos_tag::PosTag;
use crate::script::is_chinese_text;
use crate::tagger::Token;

/// Set of tags whose adjacent tokens merge into one phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagGroup {
    /// Determiners, nouns and adjectives.
    Noun,
    /// Verbs, adverbs and modals.
    Verb,
}

impl TagGroup {
    pub fn contains(self, tag: PosTag) -> bool {
        match tag {
            PosTag::Determiner | PosTag::Noun | PosTag::Adjective => self == TagGroup::Noun,
            PosTag::Verb | PosTag::Adverb | PosTag::Modal => self == TagGroup::Verb,
            PosTag::Other => false,
        }
    }
}

/// Merges runs of consecutive in-group Chinese tokens into space-joined
/// phrases, in one left-to-right pass.
///
/// A non-Chinese token or an out-of-group tag ends the current run. The run
/// still open at the end of the stream is emitted as well.
pub fn chunk_phrases(tokens: &[Token], group: TagGroup) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for tok in tokens {
        if is_chinese_text(&tok.text) && group.contains(tok.tag) {
            current.push(&tok.text);
        } else if !current.is_empty() {
            phrases.push(current.join(" "));
            current.clear();
        }
    }

    if !current.is_empty() {
        phrases.push(current.join(" "));
    }

    phrases
}
