//! semcoord CLI binary.
//!
//! Analyzes text from the command line (or stdin) and prints the colored
//! coordinate profile the demo scripts are built around.
//!
//! # Environment Variables
//!
//! - `SEMCOORD_LEXICON` -- Optional path to a YAML keyword table; the
//!   built-in table is used when unset
//!
//! # Usage
//!
//! ```bash
//! semcoord analyze "A wise leader rules with compassionate justice."
//! echo "some text" | semcoord analyze
//! semcoord lexicon
//! semcoord version
//! ```

use std::io::Read;

use anyhow::{bail, Context};

use semcoord::cli::{parse_command, run_analyze, run_lexicon, run_version, CliCommand};
use semcoord::extractor::Extractor;
use semcoord::lexicon::Lexicon;

fn build_extractor() -> anyhow::Result<Extractor> {
    match std::env::var("SEMCOORD_LEXICON") {
        Ok(path) => {
            let lexicon = Lexicon::from_path(&path)
                .with_context(|| format!("failed to load lexicon from {}", path))?;
            Ok(Extractor::with_lexicon(lexicon))
        }
        Err(_) => Ok(Extractor::new()),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(first) = args.first() else {
        bail!("usage: semcoord <analyze|lexicon|version> [text]");
    };

    let Some(command) = parse_command(first) else {
        bail!("unknown command '{}' (expected analyze, lexicon, or version)", first);
    };

    match command {
        CliCommand::Analyze => {
            let text = if args.len() > 1 {
                args[1..].join(" ")
            } else {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read text from stdin")?;
                buf
            };
            run_analyze(&build_extractor()?, &text);
        }
        CliCommand::Lexicon => run_lexicon(&build_extractor()?),
        CliCommand::Version => run_version(),
    }

    Ok(())
}
