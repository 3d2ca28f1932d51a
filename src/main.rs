//! strscope - Per-character selection inspection CLI
//!
//! Report position, glyph, and code point details for every UTF-16 code
//! unit of a text selection, unwrapping quoted string literals first.

use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal, Read};
use strscope::{CharCategory, InspectOptions};

#[derive(Parser, Debug)]
#[command(name = "strscope")]
#[command(
    author,
    version,
    about = "Per-character inspection of selected text"
)]
#[command(long_about = "
strscope reports per-character metadata for a text selection: position,
display glyph, decimal and hex values, Unicode notation, and names for
whitespace and control characters. A selection quoted like a string
literal is unwrapped so only the content between the quotes is analyzed.

EXAMPLES:
    strscope 'hello world'        # Detail view for the selection
    strscope --raw '\"abc\"'        # Keep the quotes in the analysis
    strscope --status 'abc'       # Length summary only
    strscope --json 'abc'         # JSON output for tooling
    printf 'a\\tb' | strscope      # Read the selection from stdin
")]
struct Cli {
    /// Text to inspect; read from stdin when omitted
    text: Option<String>,

    /// Analyze the selection as-is, without string-literal unwrapping
    #[arg(long)]
    raw: bool,

    /// Print only the selection-length summary
    #[arg(long)]
    status: bool,

    /// Simple output (one "index: glyph" line per code unit, no columns)
    #[arg(long)]
    simple: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let selection = match cli.text {
        Some(text) => text,
        None => {
            if io::stdin().is_terminal() {
                anyhow::bail!("No selection: pass TEXT as an argument or pipe it on stdin");
            }
            // The piped bytes stand in for the editor selection.
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            String::from_utf8_lossy(&buf).into_owned()
        }
    };

    let options = InspectOptions::new().with_unwrap_literals(!cli.raw);
    let inspection = strscope::inspect_with_options(&selection, &options);

    // Handle --status flag
    if cli.status {
        if inspection.literal {
            println!("strscope: {} (string literal)", inspection.analysis.source_len);
        } else {
            println!("strscope: {}", inspection.analysis.source_len);
        }
        return Ok(());
    }

    // Determine if we should use colors
    let use_color = !cli.no_color && !cli.json && io::stdout().is_terminal();

    // Output results
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&inspection)?);
    } else if cli.simple {
        for d in &inspection.analysis.descriptors {
            println!("{}: {}", d.index, d.glyph);
        }
        eprintln!("\n{} code units analyzed", inspection.analysis.source_len);
    } else {
        let analysis = &inspection.analysis;

        if analysis.descriptors.is_empty() {
            println!("No characters in selection");
            return Ok(());
        }

        // Print header
        if use_color {
            println!(
                "{}{}  Character Details (Length: {}){}",
                BOLD, DIM, analysis.source_len, RESET
            );
        } else {
            println!("  Character Details (Length: {})", analysis.source_len);
        }

        // Show the analyzed text JSON-escaped so control characters stay
        // visible, truncated when very long.
        let mut shown = serde_json::to_string(&inspection.text)?;
        if shown.chars().count() > 120 {
            let head: String = shown.chars().take(117).collect();
            shown = format!("{}...", head);
        }
        println!("  Text: {}", shown);
        if inspection.literal {
            if use_color {
                println!("  {}(string literal, quotes stripped){}", DIM, RESET);
            } else {
                println!("  (string literal, quotes stripped)");
            }
        }
        println!();

        for d in &analysis.descriptors {
            print_char_line(d, use_color);
        }

        println!();
    }

    Ok(())
}

fn print_char_line(d: &strscope::CharDescriptor, use_color: bool) {
    let index = format!("{:>4}", d.index);
    let description = format!("{} | {}", d.ascii_label(), d.unicode_notation());
    let detail = format!(
        "{} | Decimal: {} | Hex: 0x{}",
        d.category.name(),
        d.code_unit,
        d.hex
    );

    let glyph_color = if use_color {
        category_color(d.category)
    } else {
        ""
    };

    if use_color {
        println!(
            "  {}{}{} {}{:<8}{} {:<22} {}{}{}",
            DIM, index, RESET, glyph_color, d.glyph, RESET, description, DIM, detail, RESET
        );
    } else {
        println!("  {} {:<8} {:<22} {}", index, d.glyph, description, detail);
    }
}

/// Row color for a category: non-printables red, control characters
/// yellow, the space glyph green.
fn category_color(category: CharCategory) -> &'static str {
    match category {
        CharCategory::NonPrintable => RED,
        CharCategory::Space => GREEN,
        c if c.is_control() => YELLOW,
        _ => "",
    }
}
