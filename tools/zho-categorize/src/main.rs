use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

use zho_categorizer::reader::encoding_for_label;
use zho_categorizer::{Categorizer, JiebaTagger, Lexicon};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error during categorization: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    const BLUE: &str = "\x1B[1;34m";
    const RESET: &str = "\x1B[0m";
    let matches = Command::new("zho-categorize")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("file")
                .required(true)
                .help("Read Chinese text from <file>."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("dir")
                .required(true)
                .help("Write one ranked file per category into <dir>."),
        )
        .arg(
            Arg::new("lexicon")
                .short('l')
                .long("lexicon")
                .value_name("file")
                .help("Idiom/slang/common-phrase lexicon (.json or .json.zst). Built-in lists if omitted."),
        )
        .arg(
            Arg::new("in_enc")
                .long("in-enc")
                .value_name("encoding")
                .default_value("UTF-8")
                .help("Encoding for input"),
        )
        .arg(
            Arg::new("no_hmm")
                .long("no-hmm")
                .action(ArgAction::SetTrue)
                .help("Disable HMM discovery of unknown words"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug output"),
        )
        .about(format!(
            "{}Zho Categorize: sort Chinese text into frequency-ranked word categories{}",
            BLUE, RESET
        ))
        .get_matches();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if matches.get_flag("verbose") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let input_file = PathBuf::from(matches.get_one::<String>("input").context("missing --input")?);
    let output_dir = PathBuf::from(matches.get_one::<String>("output").context("missing --output")?);
    let in_enc = matches
        .get_one::<String>("in_enc")
        .map_or("UTF-8", String::as_str);
    let encoding = encoding_for_label(in_enc)?;

    let lexicon = match matches.get_one::<String>("lexicon") {
        Some(path) => Lexicon::from_path(path)?,
        None => Lexicon::new(),
    };
    let tagger = JiebaTagger::new().hmm(!matches.get_flag("no_hmm"));
    let categorizer = Categorizer::with_parts(tagger, lexicon);

    if !output_dir.exists() {
        log::info!("Creating output directory {}", output_dir.display());
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    }

    let summary = categorizer.categorize_file_with_encoding(&input_file, &output_dir, encoding)?;

    println!("{:<20} {:>10} {:>10}", "Category", "Collected", "Distinct");
    for row in summary.rows() {
        println!(
            "{:<20} {:>10} {:>10}",
            row.category.label(),
            row.collected,
            row.distinct
        );
    }
    println!(
        "{BLUE}Chinese content has been categorized: {} -> {}{RESET}",
        input_file.display(),
        output_dir.display()
    );

    Ok(())
}
