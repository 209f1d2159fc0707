use log::info;
use stlog::writers::BufferWriter;

#[test]
fn duplicate_setup_is_a_no_op() {
    stlog::setup_logging().unwrap();
    stlog::setup_logging().unwrap();

    let buffer = BufferWriter::new();
    stlog::setup_writer_logger(
        "garbage",
        Box::new(buffer.clone()),
        Some("{level} {message}"),
        false,
    )
    .unwrap();
    stlog::setup_logging().unwrap();

    info!("one line through the facade");
    stlog::garbage!("one line below the facade");

    // records flow exactly once despite the repeated setup calls
    assert_eq!(
        buffer.text(),
        "INFO one line through the facade\nGARBAGE one line below the facade\n"
    );
}
