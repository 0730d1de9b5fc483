//! Chatterbox TTS library crate
//!
//! This crate provides the core functionality for the `chatterbox-tts` CLI. It
//! is organized into small modules: `generate` (status line and output
//! filename for a TTS request), `clipboard` (cross-platform clipboard helper),
//! `error` (the runner's error type) and `logging` (stderr tracing setup). The
//! binary `src/main.rs` calls `chatterbox_tts_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `generate::generate_tts()` — the generation function itself.

pub mod clipboard;
pub mod error;
pub mod generate;
pub mod logging;

use std::io::{self, Write};

use clap::{ArgAction, Parser};
use tracing::{debug, warn};

use crate::clipboard::copy_to_clipboard;
use crate::error::TtsError;
use crate::generate::generate_tts_to;

/// Top-level CLI arguments. Keep `main.rs` thin.
///
/// A value that collides with a flag (`--help`, `-V`, `--clipboard`, `--`)
/// must follow a `--` separator, e.g. `chatterbox-tts -- --help en happy`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to speak
    #[arg(allow_hyphen_values = true)]
    text: String,

    /// Language tag (free-form, e.g. en)
    #[arg(allow_hyphen_values = true)]
    language: String,

    /// Emotion tag (free-form, e.g. happy)
    #[arg(allow_hyphen_values = true)]
    emotion: String,

    /// Copy the output filename to the clipboard
    #[arg(long = "clipboard", action = ArgAction::SetTrue)]
    clipboard: bool,

    /// Anything after the third argument is ignored.
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

/// Run the Chatterbox TTS CLI.
///
/// Parses `<TEXT> <LANGUAGE> <EMOTION>` and prints two lines to stdout: the
/// status line and the output filename. Missing arguments are reported by clap
/// on stderr with a non-zero exit before anything reaches stdout. Text that
/// looks like a flag goes after `--`.
///
/// ```no_run
/// chatterbox_tts_lib::run().unwrap(); // called from src/main.rs
/// ```
pub fn run() -> Result<(), TtsError> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<(), TtsError> {
    if !cli.extra.is_empty() {
        debug!(ignored = ?cli.extra, "ignoring extra arguments");
    }

    let filename = generate_tts_to(out, &cli.text, &cli.language, &cli.emotion)?;
    writeln!(out, "{}", filename)?;
    out.flush()?;

    if cli.clipboard
        && let Err(e) = copy_to_clipboard(&filename)
    {
        warn!("failed to copy to clipboard: {}", e);
    }
    Ok(())
}
