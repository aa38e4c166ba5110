use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use zstd::stream::read::Decoder;
use zstd::Encoder;

use crate::error::{CategorizeError, Result};

pub mod phrase_set;
pub use phrase_set::PhraseSet;

const DEFAULT_IDIOMS: [&str; 4] = ["井底之蛙", "守株待兔", "画蛇添足", "纸上谈兵"];
const DEFAULT_SLANG: [&str; 4] = ["吃土", "学霸", "宅男", "高富帅"];
const DEFAULT_COMMON_PHRASES: [&str; 5] = ["你好", "谢谢", "对不起", "没关系", "再见"];

/// Reference lists for the non-exclusive categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lexicon {
    pub idioms: PhraseSet,
    pub slang: PhraseSet,
    pub common_phrases: PhraseSet,
}

impl Lexicon {
    /// Built-in lists.
    pub fn new() -> Self {
        Lexicon {
            idioms: DEFAULT_IDIOMS.into_iter().collect(),
            slang: DEFAULT_SLANG.into_iter().collect(),
            common_phrases: DEFAULT_COMMON_PHRASES.into_iter().collect(),
        }
    }

    /// Loads a lexicon from `path`: zstd-compressed JSON when the file name
    /// ends in `.zst`, plain JSON otherwise.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let fail = |reason: String| CategorizeError::LexiconLoadFailure {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|e| fail(e.to_string()))?;
        let mut json_data = String::new();
        if is_compressed_path(path) {
            let mut decoder = Decoder::new(file).map_err(|e| fail(e.to_string()))?;
            decoder
                .read_to_string(&mut json_data)
                .map_err(|e| fail(e.to_string()))?;
        } else {
            BufReader::new(file)
                .read_to_string(&mut json_data)
                .map_err(|e| fail(e.to_string()))?;
        }

        let lexicon: Lexicon = serde_json::from_str(&json_data).map_err(|e| fail(e.to_string()))?;
        log::info!(
            "Loaded lexicon from {}: {} idioms, {} slang, {} common phrases",
            path.display(),
            lexicon.idioms.len(),
            lexicon.slang.len(),
            lexicon.common_phrases.len()
        );
        Ok(lexicon)
    }

    /// Builds a lexicon from `idioms.txt`, `slang.txt` and `common_phrases.txt`
    /// under `dir`. A missing file yields an empty list.
    pub fn from_word_lists<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref();
        Ok(Lexicon {
            idioms: Self::load_word_list(dir.join("idioms.txt"))?,
            slang: Self::load_word_list(dir.join("slang.txt"))?,
            common_phrases: Self::load_word_list(dir.join("common_phrases.txt"))?,
        })
    }

    fn load_word_list<P>(filename: P) -> io::Result<PhraseSet>
    where
        P: AsRef<Path>,
    {
        let filename = filename.as_ref();
        if !filename.exists() {
            log::warn!("Word list {} not found, using an empty list", filename.display());
            return Ok(PhraseSet::new());
        }

        let file = File::open(filename)?;
        let mut set = PhraseSet::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if !set.insert(entry) {
                log::debug!("Duplicate entry in {}: {}", filename.display(), entry);
            }
        }

        Ok(set)
    }

    /// Writes the lexicon in the format [`Lexicon::from_path`] expects for
    /// `path`: zstd when the file name ends in `.zst`, pretty JSON otherwise.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        if is_compressed_path(path) {
            self.save_compressed(path)
        } else {
            self.serialize_to_json(path)
        }
    }

    pub fn save_compressed<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let mut encoder = Encoder::new(writer, 19)?;
        serde_json::to_writer(&mut encoder, self)?;
        encoder.finish()?.flush()?;
        Ok(())
    }

    pub fn serialize_to_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json_string = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json_string.as_bytes())?;
        Ok(())
    }
}

/// Whether lexicon files at `path` are zstd-compressed.
pub fn is_compressed_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().extension().map_or(false, |ext| ext == "zst")
}
