//! TTS generation helpers.
//!
//! This module is the integration point for the Chatterbox speech engine. No
//! audio is synthesized yet: `generate_tts` reports what would be generated and
//! returns the name of the `.wav` file the engine would produce. The name is a
//! plain concatenation of the inputs; nothing is sanitized or validated, so
//! slashes, spaces and empty strings all pass straight through.

use std::io::{self, Write};

use tracing::{debug, warn};

const OUTPUT_PREFIX: &str = "output_audio_";
const OUTPUT_EXTENSION: &str = ".wav";

/// A single generation request: the text to speak plus free-form language and
/// emotion tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsRequest {
    pub text: String,
    pub language: String,
    pub emotion: String,
}

impl TtsRequest {
    pub fn new(
        text: impl Into<String>,
        language: impl Into<String>,
        emotion: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            emotion: emotion.into(),
        }
    }

    /// Human-readable status line with all three inputs quoted verbatim.
    pub fn status_line(&self) -> String {
        format!(
            "Generating TTS for text: '{}' in language: '{}' with emotion: '{}'",
            self.text, self.language, self.emotion
        )
    }

    /// Output filename: `output_audio_<language>_<emotion>.wav`.
    pub fn output_filename(&self) -> String {
        format!(
            "{}{}_{}{}",
            OUTPUT_PREFIX, self.language, self.emotion, OUTPUT_EXTENSION
        )
    }
}

/// Write the status line for the request to `out` and return the output
/// filename.
///
/// Only I/O on `out` can fail; the inputs themselves are never rejected.
pub fn generate_tts_to<W: Write>(
    out: &mut W,
    text: &str,
    language: &str,
    emotion: &str,
) -> io::Result<String> {
    let request = TtsRequest::new(text, language, emotion);
    writeln!(out, "{}", request.status_line())?;
    let filename = request.output_filename();
    debug!(%filename, "tts request prepared");
    Ok(filename)
}

/// Print the status line to stdout and return the output filename.
///
/// Never fails: if stdout is closed the status line is dropped with a warning
/// and the filename is still returned.
///
/// Example:
///
/// ```no_run
/// let name = chatterbox_tts_lib::generate::generate_tts("Hello world", "en", "happy");
/// assert_eq!(name, "output_audio_en_happy.wav");
/// ```
pub fn generate_tts(text: &str, language: &str, emotion: &str) -> String {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_tts_or_warn(&mut out, text, language, emotion)
}

fn generate_tts_or_warn<W: Write>(
    out: &mut W,
    text: &str,
    language: &str,
    emotion: &str,
) -> String {
    match generate_tts_to(out, text, language, emotion) {
        Ok(filename) => filename,
        Err(e) => {
            warn!("failed to write status line: {}", e);
            TtsRequest::new(text, language, emotion).output_filename()
        }
    }
}
