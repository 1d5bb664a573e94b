//! `kr-convert <root>`: converts every `*.json` hand file under `root` and
//! writes PokerStars text under the sibling `<root>_converted` directory.
//!
//! A file named like `session_2025-02-08T20-57-51.json` has all its hands
//! stamped with that time.
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use clap::Parser;
use kr_hand_history::batch::convert_batch;
use kr_hand_history::{ConverterConfig, HandUnit};
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "kr-convert",
    about = "Convert Korean client hand histories to PokerStars text",
    long_about = "Recursively converts every *.json file (an array of hands) under ROOT and\n\
                  mirrors the tree with .txt files under a sibling ROOT_converted directory."
)]
struct Args {
    /// Directory to search for hand files
    root: PathBuf,

    /// Prefix written in front of every chip amount
    #[arg(long = "currency", default_value = "")]
    currency: String,

    /// Time to stamp on hands whose file name carries none (YYYY-MM-DD HH:MM:SS)
    #[arg(long = "timestamp", value_parser = parse_override)]
    timestamp: Option<NaiveDateTime>,

    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Suppress all output except warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = if self.quiet {
                "warn"
            } else {
                match self.verbosity {
                    0 => "info",
                    1 => "debug",
                    _ => "trace",
                }
            };
            EnvFilter::new(format!("{level},kr_hand_history={level}"))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }

    fn converter_config(&self) -> ConverterConfig {
        let config = ConverterConfig::default().with_currency_symbol(&self.currency);
        match self.timestamp {
            Some(timestamp) => config.with_timestamp_override(timestamp),
            None => config,
        }
    }
}

fn parse_override(value: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").map_err(|e| e.to_string())
}

const STEM_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// The `_YYYY-MM-DDTHH-MM-SS` suffix of a file stem, if there is one.
fn timestamp_from_stem(path: &Path) -> Option<NaiveDateTime> {
    let stem = path.file_stem()?.to_str()?;
    let (_, suffix) = stem.rsplit_once('_')?;
    NaiveDateTime::parse_from_str(suffix, STEM_TIMESTAMP_FORMAT).ok()
}

type Result<T> = std::result::Result<T, ConvertCliError>;

#[derive(Error, Debug)]
enum ConvertCliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse hands from {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConvertCliError + '_ {
    move |source| ConvertCliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// `/data/hands` becomes `/data/hands_converted`.
fn output_root(root: &Path) -> PathBuf {
    let mut name = root
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "hands".into());
    name.push("_converted");
    root.with_file_name(name)
}

/// Every `*.json` file under `dir`, sorted so runs are reproducible.
fn find_hand_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current).map_err(io_error(&current))? {
            let path = entry.map_err(io_error(&current))?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("json") {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

fn convert_file(
    path: &Path,
    root: &Path,
    out_root: &Path,
    config: &ConverterConfig,
) -> Result<PathBuf> {
    let contents = std::fs::read_to_string(path).map_err(io_error(path))?;
    let units: Vec<HandUnit> =
        serde_json::from_str(&contents).map_err(|source| ConvertCliError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let report = match timestamp_from_stem(path) {
        Some(timestamp) => {
            debug!(file = %path.display(), %timestamp, "Timestamp from file name");
            convert_batch(&units, &config.clone().with_timestamp_override(timestamp))
        }
        None => convert_batch(&units, config),
    };

    let relative = path.strip_prefix(root).unwrap_or(path);
    let target = out_root.join(relative).with_extension("txt");
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    std::fs::write(&target, report.to_text()).map_err(io_error(&target))?;

    debug!(
        source = %path.display(),
        target = %target.display(),
        converted = report.converted,
        skipped = report.skipped,
        flagged = report.flagged,
        "Converted file"
    );
    Ok(target)
}

/// Convert every hand file under `root`. Returns how many files were
/// written; a file that fails is logged and left out.
fn run(root: &Path, config: &ConverterConfig) -> Result<usize> {
    if !root.is_dir() {
        return Err(ConvertCliError::NotADirectory(root.to_path_buf()));
    }

    let out_root = output_root(root);
    let files = find_hand_files(root)?;
    info!(files = files.len(), output = %out_root.display(), "Starting conversion");

    let mut processed = 0usize;
    for path in &files {
        match convert_file(path, root, &out_root, config) {
            Ok(_) => processed += 1,
            Err(error) => warn!(%error, "Skipping file"),
        }
    }
    Ok(processed)
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_tracing();

    let processed = run(&args.root, &args.converter_config())?;
    println!("Processed {processed}");
    Ok(())
}
