use crate::{DeferredNow, Level, StLogError};
use std::fmt::Write;

/// The default minimum width of the logger-name field in rendered log lines.
///
/// The width only grows; it is raised to the longest registered logger name
/// when padding growth is active (see the `increase_padding` parameter of the
/// setup functions).
pub const DEFAULT_PADDING: usize = 5;

const TIME_FMT: &str = "%H:%M:%S";

// One piece of a parsed line template. Padded segments carry their
// left-justification width (0 = no padding).
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Time,
    Millis,
    Name(usize),
    Line(usize),
    Level(usize),
    Message,
}

/// Renders log records into lines, following a template.
///
/// The default template produces lines like
///
/// ```text
/// 14:23:07,010 [mycrate::worker:87  ][WARNING ] queue is full
/// ```
///
/// i.e. local time with milliseconds, the logger name left-padded to the
/// current padding width, the line number padded to 4, and the level name
/// padded to 8.
///
/// Custom templates are built from the placeholders `{time}`, `{millis}`,
/// `{name}`, `{line}`, `{level}`, and `{message}`, each optionally with a
/// left-justification width like `{name:12}`. Literal braces are written as
/// `{{` and `}}`.
#[derive(Clone, Debug)]
pub struct Formatter {
    segments: Vec<Segment>,
}

impl Formatter {
    /// The default template, with the logger-name field padded to `width`.
    #[must_use]
    pub fn default_with_width(width: usize) -> Self {
        Self {
            segments: vec![
                Segment::Time,
                Segment::Literal(",".to_string()),
                Segment::Millis,
                Segment::Literal(" [".to_string()),
                Segment::Name(width),
                Segment::Literal(":".to_string()),
                Segment::Line(4),
                Segment::Literal("][".to_string()),
                Segment::Level(8),
                Segment::Literal("] ".to_string()),
                Segment::Message,
            ],
        }
    }

    /// Parses a caller-supplied template.
    ///
    /// # Errors
    ///
    /// `StLogError::Format` if the template contains an unknown placeholder,
    /// an unterminated brace, or an unparseable width.
    pub fn parse(template: &str) -> Result<Self, StLogError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => {
                    return Err(StLogError::Format(format!(
                        "unmatched '}}' in template {template:?}"
                    )));
                }
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let mut placeholder = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => placeholder.push(c),
                            None => {
                                return Err(StLogError::Format(format!(
                                    "unterminated placeholder in template {template:?}"
                                )));
                            }
                        }
                    }
                    segments.push(parse_placeholder(&placeholder)?);
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Renders one log line (without trailing newline).
    pub(crate) fn render(
        &self,
        now: &mut DeferredNow,
        level: Level,
        name: &str,
        line: Option<u32>,
        args: &std::fmt::Arguments<'_>,
    ) -> String {
        let mut out = String::with_capacity(80);
        for segment in &self.segments {
            // writing into a String cannot fail
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Time => {
                    write!(out, "{}", now.now().format(TIME_FMT)).ok();
                }
                Segment::Millis => {
                    write!(out, "{:03}", now.now().timestamp_subsec_millis()).ok();
                }
                Segment::Name(width) => {
                    let width = *width;
                    write!(out, "{name:<width$}").ok();
                }
                Segment::Line(width) => {
                    let width = *width;
                    match line {
                        Some(line) => {
                            write!(out, "{line:<width$}").ok();
                        }
                        None => {
                            write!(out, "{:<width$}", "-").ok();
                        }
                    }
                }
                Segment::Level(width) => {
                    let width = *width;
                    write!(out, "{:<width$}", level.name()).ok();
                }
                Segment::Message => {
                    write!(out, "{args}").ok();
                }
            }
        }
        out
    }
}

fn parse_placeholder(placeholder: &str) -> Result<Segment, StLogError> {
    let (key, width) = match placeholder.split_once(':') {
        Some((key, width)) => {
            let width = width.parse::<usize>().map_err(|_| {
                StLogError::Format(format!("invalid width in placeholder {{{placeholder}}}"))
            })?;
            (key, width)
        }
        None => (placeholder, 0),
    };
    match key {
        "time" => Ok(Segment::Time),
        "millis" => Ok(Segment::Millis),
        "name" => Ok(Segment::Name(width)),
        "line" => Ok(Segment::Line(width)),
        "level" => Ok(Segment::Level(width)),
        "message" => Ok(Segment::Message),
        _ => Err(StLogError::Format(format!(
            "unknown placeholder {{{placeholder}}}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{Formatter, Segment};
    use crate::{DeferredNow, Level};

    fn render(formatter: &Formatter, level: Level, name: &str, line: Option<u32>) -> String {
        let mut now = DeferredNow::new();
        formatter.render(&mut now, level, name, line, &format_args!("the message"))
    }

    #[test]
    fn default_format_pads_name_line_and_level() {
        let formatter = Formatter::default_with_width(10);
        let line = render(&formatter, Level::Warning, "foo.bar", Some(42));
        // time and millis are position-dependent: "HH:MM:SS,mmm "
        assert_eq!(&line[8..9], ",");
        assert_eq!(
            &line[12..],
            " [foo.bar   :42  ][WARNING ] the message"
        );
    }

    #[test]
    fn name_longer_than_width_is_not_truncated() {
        let formatter = Formatter::default_with_width(5);
        let line = render(&formatter, Level::Error, "a.very.long.name", Some(7));
        assert!(line.contains("[a.very.long.name:7   ][ERROR   ] the message"));
    }

    #[test]
    fn missing_line_number_renders_as_dash() {
        let formatter = Formatter::default_with_width(5);
        let line = render(&formatter, Level::Info, "core", None);
        assert!(line.contains("[core :-   ][INFO    ] the message"));
    }

    #[test]
    fn parse_custom_template() {
        let formatter = Formatter::parse("{level:5} {name}: {message}").unwrap();
        let line = render(&formatter, Level::Debug, "db", None);
        assert_eq!(line, "DEBUG db: the message");
    }

    #[test]
    fn parse_brace_escapes() {
        let formatter = Formatter::parse("{{{level}}} {message}").unwrap();
        let line = render(&formatter, Level::Trace, "x", None);
        assert_eq!(line, "{TRACE} the message");
    }

    #[test]
    fn parse_rejects_unknown_placeholder() {
        assert!(Formatter::parse("{thread} {message}").is_err());
        assert!(Formatter::parse("{message").is_err());
        assert!(Formatter::parse("dangling }").is_err());
        assert!(Formatter::parse("{name:wide}").is_err());
    }

    #[test]
    fn default_template_shape() {
        let formatter = Formatter::default_with_width(7);
        assert!(formatter.segments.contains(&Segment::Name(7)));
        assert!(formatter.segments.contains(&Segment::Line(4)));
        assert!(formatter.segments.contains(&Segment::Level(8)));
    }
}
