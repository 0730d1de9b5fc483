use thiserror::Error;

/// Errors surfaced by the CLI runner.
///
/// Argument errors are not represented here: clap reports those itself and
/// exits before `run` does any work.
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("clipboard: {0}")]
    Clipboard(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
