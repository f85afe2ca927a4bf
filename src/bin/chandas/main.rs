//! chandas - command-line meter verifier
//!
//! Reads a verse from `--verse`, `--file` or stdin (until a blank line),
//! verifies it against the meter catalog and prints the report.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chandas_wasm::{MeterVerifier, VerifierConfig};
use clap::Parser;
use tracing::{debug, info};

mod display;

/// Used when no verse is given
const SAMPLE_VERSE: &str = "वागर्थाविव संपृक्तौ वागर्थप्रतिपत्तये।\nजगतः पितरौ वन्दे पार्वतीपरमेश्वरौ॥";

/// Command-line arguments for chandas
#[derive(Parser, Debug)]
#[command(name = "chandas")]
#[command(about = "Identify and verify the meter of a Sanskrit verse")]
#[command(version)]
struct Args {
    /// Verse text in Devanagari
    #[arg(short, long)]
    verse: Option<String>,

    /// File containing the verse
    #[arg(short, long, conflicts_with = "verse")]
    file: Option<PathBuf>,

    /// Meter catalog (.yaml/.yml/.json) replacing the built-in one
    #[arg(long, env = "CHANDAS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Verifier configuration file
    #[arg(long, env = "CHANDAS_CONFIG")]
    config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// List the meters in the catalog and exit
    #[arg(long)]
    list_meters: bool,

    /// Show catalog information for one meter and exit
    #[arg(long, value_name = "NAME")]
    meter: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chandas=info,chandas_wasm=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let verifier = build_verifier(&args)?;

    if args.list_meters {
        display::print_meter_list(&verifier.list_meters());
        return Ok(());
    }

    if let Some(name) = &args.meter {
        match verifier.meter_info(name) {
            Some(meter) => display::print_meter_info(&meter),
            None => display::print_error(&format!("Unknown meter: {}", name)),
        }
        return Ok(());
    }

    let verse = read_verse(&args)?;
    let report = verifier.verify(&verse);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        display::print_header("Sanskrit Verse Analyzer");
        display::print_report(&report);
    }
    Ok(())
}

/// Config resolution: flags and env vars override the config file, which
/// overrides the compiled defaults
fn build_verifier(args: &Args) -> Result<MeterVerifier> {
    let mut config = match &args.config {
        Some(path) => VerifierConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => VerifierConfig::default(),
    };
    if let Some(catalog) = &args.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    debug!("Verifier config: {:?}", config);

    let verifier = MeterVerifier::from_config(config).context("Failed to initialize verifier")?;
    info!("Catalog loaded: {} meters", verifier.catalog().len());
    Ok(verifier)
}

fn read_verse(args: &Args) -> Result<String> {
    let verse = if let Some(path) = &args.file {
        info!("Reading verse from file: {}", path.display());
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read verse file {}", path.display()))?
    } else if let Some(verse) = &args.verse {
        verse.clone()
    } else {
        eprintln!("Enter your Sanskrit verse below (enter a blank line when finished):");
        read_stdin_until_blank()?
    };

    let (verse, used_sample) = verse_or_sample(verse);
    if used_sample {
        // stderr, so --json output stays a single JSON document
        display::notify_warning("No verse provided. Using a sample verse instead.");
        eprintln!("{}", verse);
    }
    Ok(verse)
}

/// The given verse, or the sample verse when it is blank; the flag tells which
fn verse_or_sample(verse: String) -> (String, bool) {
    if verse.trim().is_empty() {
        (SAMPLE_VERSE.to_string(), true)
    } else {
        (verse, false)
    }
}

fn read_stdin_until_blank() -> Result<String> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
