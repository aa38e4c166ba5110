use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::error::{CategorizeError, Result};

/// Joins the lines of `content` into one buffer, each line followed by a
/// single space. Sentence boundaries are not kept.
pub fn collapse_lines(content: &str) -> String {
    let mut buffer = String::with_capacity(content.len() + 1);
    for line in content.lines() {
        buffer.push_str(line);
        buffer.push(' ');
    }
    buffer
}

/// Resolves an encoding label such as `"UTF-8"`, `"GBK"` or `"Big5"`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CategorizeError::UnsupportedEncoding(label.to_string()))
}

/// Reads the file at `path`, decoding it from `encoding`, and collapses its
/// lines into a single buffer. A byte order mark overrides `encoding`.
pub fn read_input<P: AsRef<Path>>(path: P, encoding: &'static Encoding) -> Result<String> {
    let path = path.as_ref();
    let open_failure = |source| CategorizeError::InputOpenFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_failure)?;
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding))
        .bom_override(true)
        .strip_bom(true)
        .build(file);
    let mut content = String::new();
    decoder.read_to_string(&mut content).map_err(open_failure)?;

    log::info!(
        "Read {} bytes from {} ({})",
        content.len(),
        path.display(),
        encoding.name()
    );
    Ok(collapse_lines(&content))
}
