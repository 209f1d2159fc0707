use stlog::{writers::BufferWriter, Logger};

#[test]
fn override_affects_exactly_the_named_logger() {
    let buffer = BufferWriter::new();
    stlog::setup_writer_logger(
        "garbage",
        Box::new(buffer.clone()),
        Some("{level} {name} {message}"),
        false,
    )
    .unwrap();

    stlog::set_logger_level("foo.bar", "trace").unwrap();
    stlog::set_logger_level("foo.chatty", "error").unwrap();

    let bar = Logger::new("foo.bar");
    let baz = Logger::new("foo.baz");
    let chatty = Logger::new("foo.chatty");

    bar.trace("bar at its own threshold");
    bar.garbage("bar below its threshold");
    baz.garbage("the sibling is unaffected");
    chatty.info("chatty below its override");

    let text = buffer.text();
    assert!(text.contains("TRACE foo.bar bar at its own threshold"), "got: {text}");
    assert!(!text.contains("bar below its threshold"), "got: {text}");
    assert!(text.contains("GARBAGE foo.baz the sibling is unaffected"), "got: {text}");
    assert!(!text.contains("chatty below its override"), "got: {text}");
}
