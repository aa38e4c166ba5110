use std::sync::Arc;

use jieba_rs::Jieba;

use crate::error::Result;
use crate::pos_tag::PosTag;

/// A tagged unit of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
}

impl Token {
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Token {
            text: text.into(),
            tag,
        }
    }
}

/// Splits a text buffer into tagged tokens.
///
/// The returned tokens cover the buffer in order. Whitespace is not a token.
pub trait Tagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>>;
}

/// [`Tagger`] backed by jieba's part-of-speech segmentation.
pub struct JiebaTagger {
    pub jieba: Arc<Jieba>,
    hmm: bool,
}

impl JiebaTagger {
    pub fn new() -> Self {
        JiebaTagger {
            jieba: Arc::new(Jieba::new()),
            hmm: true,
        }
    }

    /// Shares an already loaded jieba instance.
    pub fn with_jieba(jieba: Arc<Jieba>) -> Self {
        JiebaTagger { jieba, hmm: true }
    }

    /// Enables or disables HMM discovery of words missing from the dictionary.
    pub fn hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }
}

impl Default for JiebaTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for JiebaTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>> {
        let tokens: Vec<Token> = self
            .jieba
            .tag(text, self.hmm)
            .into_iter()
            .filter(|t| !t.word.trim().is_empty())
            .map(|t| Token::new(t.word, PosTag::from_jieba(t.word, t.tag)))
            .collect();
        log::debug!("jieba produced {} tokens", tokens.len());
        Ok(tokens)
    }
}
