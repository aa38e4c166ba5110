use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::category::Category;

/// Errors raised while categorizing a file.
///
/// Every variant aborts the run. Files written before an
/// [`CategorizeError::OutputCreateFailure`] are left on disk.
#[derive(Debug)]
pub enum CategorizeError {
    /// The input file could not be opened or read.
    InputOpenFailure { path: PathBuf, source: io::Error },
    /// The requested input encoding label is not known to `encoding_rs`.
    UnsupportedEncoding(String),
    /// The tagger rejected the input buffer.
    TokenizationFailure(String),
    /// An output file for `category` could not be created or written.
    OutputCreateFailure {
        category: Category,
        path: PathBuf,
        source: io::Error,
    },
    /// A lexicon file could not be read or parsed.
    LexiconLoadFailure { path: PathBuf, reason: String },
}

impl fmt::Display for CategorizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorizeError::InputOpenFailure { path, source } => {
                write!(f, "failed to open input file {}: {}", path.display(), source)
            }
            CategorizeError::UnsupportedEncoding(label) => {
                write!(f, "unsupported input encoding: {}", label)
            }
            CategorizeError::TokenizationFailure(reason) => {
                write!(f, "error tokenizing input: {}", reason)
            }
            CategorizeError::OutputCreateFailure {
                category,
                path,
                source,
            } => write!(
                f,
                "failed to create output file for {} ({}): {}",
                category.label(),
                path.display(),
                source
            ),
            CategorizeError::LexiconLoadFailure { path, reason } => {
                write!(f, "failed to load lexicon {}: {}", path.display(), reason)
            }
        }
    }
}

impl Error for CategorizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CategorizeError::InputOpenFailure { source, .. }
            | CategorizeError::OutputCreateFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CategorizeError>;
