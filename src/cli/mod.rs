//! CLI commands for the semcoord demo binary.
//!
//! The binary in `src/bin/semcoord.rs` parses arguments and dispatches
//! here; these functions do the printing.

use crate::coordinate::Axis;
use crate::extractor::Extractor;
use crate::profile::Profile;
use crate::utilities::printer::{axis_color, value_bar, ColoredText, Printer, PrinterColor};

/// Available CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Analyze text and print its coordinate profile.
    Analyze,
    /// Print the active keyword table grouped by axis.
    Lexicon,
    /// Show version information.
    Version,
}

impl std::fmt::Display for CliCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analyze => write!(f, "analyze"),
            Self::Lexicon => write!(f, "lexicon"),
            Self::Version => write!(f, "version"),
        }
    }
}

/// Parse a CLI command from a string.
pub fn parse_command(cmd: &str) -> Option<CliCommand> {
    match cmd {
        "analyze" => Some(CliCommand::Analyze),
        "lexicon" => Some(CliCommand::Lexicon),
        "version" | "--version" | "-v" => Some(CliCommand::Version),
        _ => None,
    }
}

/// Analyze `text` and print the colored coordinate profile.
pub fn run_analyze(extractor: &Extractor, text: &str) {
    let profile = Profile::from_text(extractor, text);
    let printer = Printer::new();
    let c = profile.analysis.coordinate;

    printer.print("semantic coordinate profile", PrinterColor::BoldWhite);
    for axis in Axis::ALL {
        let value = c.get(axis);
        printer.print_colored(&[
            ColoredText::new(format!("  {:<8}", axis.name()), axis_color(axis)),
            ColoredText::new(format!(" {:.3}  ", value), PrinterColor::White),
            ColoredText::new(value_bar(value, 20), axis_color(axis)),
            ColoredText::new(
                format!("  ({} hits)", profile.analysis.hits_for(axis)),
                PrinterColor::White,
            ),
        ]);
    }
    printer.print(
        &format!(
            "  distance from anchor  {:.3}",
            profile.distance_from_anchor
        ),
        PrinterColor::White,
    );
    printer.print(
        &format!("  clarity               {:.3}", profile.clarity),
        PrinterColor::White,
    );
    match profile.dominant_axis {
        Some(axis) => printer.print_colored(&[
            ColoredText::new("  dominant axis         ", PrinterColor::White),
            ColoredText::new(axis.name(), axis_color(axis)),
        ]),
        None => printer.print("  dominant axis         (no signal)", PrinterColor::Yellow),
    }
    printer.print(
        &format!(
            "  keywords matched      {} of {} tokens",
            profile.analysis.total_hits, profile.analysis.total_tokens
        ),
        PrinterColor::White,
    );
}

/// Print the active keyword table grouped by axis.
pub fn run_lexicon(extractor: &Extractor) {
    let printer = Printer::new();
    let lexicon = extractor.lexicon();
    printer.print(
        &format!("keyword table ({} entries)", lexicon.len()),
        PrinterColor::BoldWhite,
    );
    for axis in Axis::ALL {
        let words = lexicon.words_for(axis);
        printer.print_colored(&[
            ColoredText::new(format!("  {:<8}", axis.name()), axis_color(axis)),
            ColoredText::new(format!(" {}", words.join(", ")), PrinterColor::White),
        ]);
    }
}

/// Print version information.
pub fn run_version() {
    println!("semcoord {}", crate::VERSION);
}
