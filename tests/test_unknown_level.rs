use log::{error, info};
use stlog::writers::BufferWriter;

// An unrecognized level name falls back to "error" instead of failing;
// the handler then behaves like one configured with "error".
#[test]
fn unknown_level_name_behaves_like_error() {
    let buffer = BufferWriter::new();
    stlog::setup_writer_logger("verbose", Box::new(buffer.clone()), None, false).unwrap();

    info!("below the fallback threshold");
    error!("at the fallback threshold");

    let text = buffer.text();
    assert!(!text.contains("below the fallback threshold"), "got: {text}");
    assert!(text.contains("at the fallback threshold"), "got: {text}");
}
