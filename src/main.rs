/// Binary entrypoint for the `chatterbox-tts` executable.
///
/// Keeps the binary thin: all logic lives in `chatterbox_tts_lib` so tests can
/// call library functions directly.
fn main() {
    chatterbox_tts_lib::logging::init_tracing();
    if let Err(e) = chatterbox_tts_lib::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
