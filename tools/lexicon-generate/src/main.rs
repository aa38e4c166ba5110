use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use zho_categorizer::lexicon_lib::is_compressed_path;
use zho_categorizer::Lexicon;

fn main() -> Result<()> {
    const BLUE: &str = "\x1B[1;34m"; // Bold Blue
    const RESET: &str = "\x1B[0m"; // Reset color

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("Lexicon Generator")
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("dir")
                .default_value("lexicon")
                .help("Directory holding idioms.txt, slang.txt and common_phrases.txt"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("format")
                .default_value("zstd")
                .help("Lexicon format: [zstd|json]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("filename")
                .help("Write generated lexicon to <filename>. If not specified, a default filename is used."),
        )
        .about(format!(
            "{BLUE}Lexicon Generator: compile word lists into a zho-categorizer lexicon{RESET}"
        ))
        .get_matches();

    let list_dir = Path::new(
        matches
            .get_one::<String>("dir")
            .map_or("lexicon", String::as_str),
    );
    if !list_dir.is_dir() {
        bail!("word list directory {} not found", list_dir.display());
    }

    let lexicon_format = matches.get_one::<String>("format").map(String::as_str);
    let default_output = match lexicon_format {
        Some("zstd") => "lexicon.json.zst",
        Some("json") => "lexicon.json",
        other => bail!("unsupported format: {}", other.unwrap_or("unknown")),
    };
    let output_file = matches
        .get_one::<String>("output")
        .map_or(default_output, String::as_str);
    let compressed = is_compressed_path(default_output);
    if is_compressed_path(output_file) != compressed {
        bail!(
            "output file {output_file} does not match format {}: use a {} file name",
            lexicon_format.unwrap_or("unknown"),
            if compressed { ".zst" } else { "non-.zst" }
        );
    }

    let lexicon = Lexicon::from_word_lists(list_dir)
        .with_context(|| format!("failed to read word lists from {}", list_dir.display()))?;
    log::info!(
        "{} idioms, {} slang, {} common phrases",
        lexicon.idioms.len(),
        lexicon.slang.len(),
        lexicon.common_phrases.len()
    );

    lexicon
        .save(output_file)
        .with_context(|| format!("failed to write {output_file}"))?;
    let format_name = if compressed { "ZSTD" } else { "JSON" };
    eprintln!("{BLUE}Lexicon saved in {format_name} format at: {output_file}{RESET}");

    Ok(())
}
