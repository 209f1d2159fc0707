use log::error;
use stlog::writers::BufferWriter;

#[test]
fn handler_threshold_filters_garbage() {
    let buffer = BufferWriter::new();
    stlog::setup_writer_logger("debug", Box::new(buffer.clone()), None, false).unwrap();

    stlog::garbage!("much too verbose");
    error!("worth reporting");

    let text = buffer.text();
    assert!(!text.contains("much too verbose"), "got: {text}");
    assert!(text.contains("worth reporting"), "got: {text}");
    assert!(text.contains("ERROR"), "got: {text}");
}
