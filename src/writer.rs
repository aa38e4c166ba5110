use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::categorization::RankedCategorization;
use crate::category::Category;
use crate::error::{CategorizeError, Result};

/// Writes one file per category into `output_dir`, one item per line.
///
/// Files are written in [`Category::ALL`] order. The first failure stops the
/// run; files written before it are kept.
pub fn write_rankings<P: AsRef<Path>>(ranked: &RankedCategorization, output_dir: P) -> Result<()> {
    let output_dir = output_dir.as_ref();

    for category in Category::ALL {
        let path = output_dir.join(category.file_name());
        let items = ranked.get(category);
        write_items(&path, items).map_err(|source| CategorizeError::OutputCreateFailure {
            category,
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {} items to {}", items.len(), path.display());
    }

    Ok(())
}

fn write_items(path: &Path, items: &[String]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for item in items {
        writer.write_all(item.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
