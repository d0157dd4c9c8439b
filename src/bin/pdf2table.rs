//! CLI binary for edgequake-pdf2table.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ExtractionConfig` and prints the extracted rows.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_pdf2table::{extract, ColumnType, ExtractionConfig, LeadingRows};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Quantity, description, unit price
  pdf2table invoice.pdf --header Bezeichnung --cols Anzahl Bezeichnung Preis

  # Skip a column (article number) between quantity and description
  pdf2table invoice.pdf --header Menge --cols Anzahl - Bezeichnung Preis

  # Options first: end the column list with `--` before the file
  pdf2table --header Preis --cols Anzahl,Bezeichnung,Preis -- invoice.pdf

  # JSON output with row counters
  pdf2table --json invoice.pdf --header Bezeichnung --cols Anzahl Bezeichnung Preis

COLUMN TYPES:
  Anzahl       integer quantity                     3
  Bezeichnung  text, passed through trimmed         Schraube M4
  Preis        comma-decimal amount, € or EUR       1.234,56 €   → 1234.56
  -            cell must exist but is not printed

OUTPUT:
  The first line lists the printed column types; every following line is one
  table row, top to bottom. Reading stops at the first row that does not fit
  the columns once at least one row has matched (totals, footers).

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH         Path to an existing libpdfium
  RUST_LOG                Override log filter (e.g. edgequake_pdf2table=debug)
"#;

/// Extract typed tables from PDF files.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2table",
    version,
    about = "Extract typed tables from PDF files",
    long_about = "Locate a table in a PDF by a word in its header line, rebuild rows and \
columns from text positions, and parse each cell as quantity, label or price.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// The PDF to be parsed.
    #[arg(value_name = "FILE")]
    pdf: PathBuf,

    /// A word in the table header to identify the start.
    #[arg(long, env = "PDF2TABLE_HEADER")]
    header: String,

    /// The columns in the order as they appear in the table:
    /// Anzahl, Bezeichnung, Preis or - (ignore).
    #[arg(
        long,
        env = "PDF2TABLE_COLS",
        required = true,
        num_args = 1..,
        value_delimiter = ','
    )]
    cols: Vec<ColumnType>,

    /// Only look for the table on this page (1-indexed).
    #[arg(long, env = "PDF2TABLE_PAGE",
          value_parser = clap::value_parser!(u32).range(1..))]
    page: Option<u32>,

    /// PDF user password for encrypted documents.
    #[arg(long, env = "PDF2TABLE_PASSWORD")]
    password: Option<String>,

    /// Fail if the first row below the header does not match the columns
    /// (default: skip such rows until one matches).
    #[arg(long, env = "PDF2TABLE_REJECT_LEADING")]
    reject_leading: bool,

    /// Output structured JSON (ExtractedTable) instead of row lines.
    #[arg(long, env = "PDF2TABLE_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2TABLE_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2TABLE_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Run extraction ───────────────────────────────────────────────────
    let config = build_config(&cli)?;
    let table = extract(&cli.pdf, &config)
        .with_context(|| format!("Failed to extract table from {}", cli.pdf.display()))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.json {
        let json = serde_json::to_string_pretty(&table).context("Failed to serialise output")?;
        writeln!(handle, "{json}").context("Failed to write to stdout")?;
    } else {
        handle
            .write_all(table.to_text().as_bytes())
            .context("Failed to write to stdout")?;
    }

    if cli.verbose && !cli.quiet {
        eprintln!(
            "{}  {} rows from page {}  {}",
            green("✔"),
            table.stats.parsed_rows,
            table.stats.page,
            dim(&format!(
                "{} raw / {} skipped / {}ms",
                table.stats.raw_rows, table.stats.skipped_rows, table.stats.duration_ms
            )),
        );
    }

    Ok(())
}

/// Map CLI args to `ExtractionConfig`.
fn build_config(cli: &Cli) -> Result<ExtractionConfig> {
    let leading = if cli.reject_leading {
        LeadingRows::Reject
    } else {
        LeadingRows::Skip
    };

    let mut builder = ExtractionConfig::builder()
        .header(cli.header.clone())
        .columns(cli.cols.clone())
        .leading_rows(leading);

    if let Some(page) = cli.page {
        builder = builder.page(page as usize);
    }
    if let Some(ref password) = cli.password {
        builder = builder.password(password.clone());
    }

    builder.build().context("Invalid configuration")
}
