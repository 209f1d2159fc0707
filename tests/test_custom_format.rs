use stlog::writers::BufferWriter;

#[test]
fn custom_template_overrides_the_default() {
    let buffer = BufferWriter::new();
    stlog::setup_writer_logger(
        "garbage",
        Box::new(buffer.clone()),
        Some("{level:8}| {message}"),
        false,
    )
    .unwrap();

    stlog::garbage!(target: "x", "custom {}", 1);
    stlog::critical!(target: "x", "custom {}", 2);
    assert_eq!(buffer.text(), "GARBAGE | custom 1\nCRITICAL| custom 2\n");

    // a broken template is rejected at setup, before a handler is attached
    assert!(stlog::setup_console_logger("info", Some("{bogus}"), false).is_err());
}
