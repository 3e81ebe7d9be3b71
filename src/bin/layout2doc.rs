//! CLI binary for layout2doc.
//!
//! A thin shim over the library crate that maps CLI flags to `EngineConfig`,
//! reads extractor layout JSON from a file or stdin, and prints the inferred
//! element stream as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use layout2doc::{structure_json, write_outline_to_file, EngineConfig};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Structure an extracted page (stdout)
  layout2doc page.json

  # Whole document, written to a file
  layout2doc document.json -o outline.json

  # Read extractor output from stdin
  pdf-extract document.pdf --dict | layout2doc -

  # Override writer defaults
  layout2doc --font-family Georgia --font-size 12 document.json

INPUT FORMAT:
  Extractor dict JSON — either a single page:
    {"width": 612.0, "blocks": [{"lines": [{"bbox": [...], "spans": [...]}]}]}
  or a whole document:
    {"pages": [ ...pages... ]}
  Blocks without a "lines" key (images, drawings) are skipped.

OUTPUT FORMAT:
  A DocumentOutline: per-page tagged element streams (heading, link,
  paragraph, table), writer defaults, skipped-geometry issues, and stats.
"#;

/// Infer document structure from extracted page-layout JSON.
#[derive(Parser, Debug)]
#[command(
    name = "layout2doc",
    version,
    about = "Infer document structure (headings, links, tables) from page-layout JSON",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Layout JSON file, or `-` for stdin.
    input: String,

    /// Write the outline to this file instead of stdout.
    #[arg(short, long, env = "LAYOUT2DOC_OUTPUT")]
    output: Option<PathBuf>,

    /// Pretty-print JSON written to stdout.
    #[arg(long)]
    pretty: bool,

    /// Flatten pages into one element stream with explicit page breaks.
    #[arg(long)]
    flat: bool,

    /// Writer default font family.
    #[arg(long, env = "LAYOUT2DOC_FONT_FAMILY", default_value = "Calibri")]
    font_family: String,

    /// Writer default body font size in points.
    #[arg(long = "font-size", env = "LAYOUT2DOC_FONT_SIZE", default_value_t = 11.0)]
    font_size: f32,

    /// Lower edge of the heading-centering band (fraction of page width).
    #[arg(long, default_value_t = 0.40)]
    center_lo: f64,

    /// Upper edge of the heading-centering band (fraction of page width).
    #[arg(long, default_value_t = 0.60)]
    center_hi: f64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "LAYOUT2DOC_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the result.
    #[arg(short, long, env = "LAYOUT2DOC_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Read input ───────────────────────────────────────────────────────
    let json = if cli.input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read layout JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cli.input)
            .with_context(|| format!("Failed to read layout JSON from '{}'", cli.input))?
    };

    // ── Build config ─────────────────────────────────────────────────────
    let config = EngineConfig::builder()
        .font_family(&cli.font_family)
        .base_font_size(cli.font_size)
        .center_band(cli.center_lo, cli.center_hi)
        .build()
        .context("Invalid engine configuration")?;

    // ── Structure ────────────────────────────────────────────────────────
    let outline = structure_json(&json, &config).context("Structuring failed")?;
    let stats = outline.stats;

    // ── Emit ─────────────────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        write_outline_to_file(&outline, output_path).context("Failed to write outline")?;
        if !cli.quiet {
            eprintln!(
                "{}  {} pages  {}ms  →  {}",
                green("✔"),
                stats.pages,
                stats.duration_ms,
                bold(&output_path.display().to_string()),
            );
        }
    } else if cli.flat {
        let elements = outline.into_elements();
        let rendered = if cli.pretty {
            serde_json::to_string_pretty(&elements)
        } else {
            serde_json::to_string(&elements)
        }
        .context("Failed to serialize element stream")?;
        println!("{rendered}");
    } else {
        let rendered = if cli.pretty {
            serde_json::to_string_pretty(&outline)
        } else {
            serde_json::to_string(&outline)
        }
        .context("Failed to serialize outline")?;
        println!("{rendered}");
    }

    if !cli.quiet {
        eprintln!(
            "   {}",
            dim(&format!(
                "{} headings, {} links, {} paragraphs, {} tables ({} blocks skipped)",
                stats.headings, stats.links, stats.paragraphs, stats.tables, stats.blocks_skipped
            ))
        );
    }

    Ok(())
}
