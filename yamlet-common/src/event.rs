use crate::{Encoding, ScalarStyle, Span};
use std::fmt::{Display, Formatter, Write};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CollectionStyle {
    /// Indentation based collection.
    Block,
    /// Bracketed collection: `[a, b]` or `{a: b}`.
    Flow,
}

/// Version resolved from a `%YAML` directive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct VersionDirective {
    pub major: u8,
    pub minor: u8,
}

/// A `%TAG` handle to prefix pair.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TagDirective {
    pub handle: String,
    pub prefix: String,
}

impl TagDirective {
    pub fn new(handle: impl Into<String>, prefix: impl Into<String>) -> Self {
        TagDirective {
            handle: handle.into(),
            prefix: prefix.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EventType {
    StreamStart {
        encoding: Encoding,
    },
    StreamEnd,
    DocumentStart {
        version: Option<VersionDirective>,
        /// Tag directives declared by this document, in declaration order.
        tags: Vec<TagDirective>,
        implicit: bool,
    },
    DocumentEnd {
        implicit: bool,
    },
    /// Reference to a previously anchored node; only the name is reported.
    Alias {
        anchor: String,
    },
    Scalar {
        anchor: Option<String>,
        tag: Option<String>,
        value: String,
        /// The tag may be omitted when the scalar is emitted plain.
        plain_implicit: bool,
        /// The tag may be omitted when the scalar is emitted in any non-plain style.
        quoted_implicit: bool,
        style: ScalarStyle,
    },
    SequenceStart {
        anchor: Option<String>,
        tag: Option<String>,
        implicit: bool,
        style: CollectionStyle,
    },
    SequenceEnd,
    MappingStart {
        anchor: Option<String>,
        tag: Option<String>,
        implicit: bool,
        style: CollectionStyle,
    },
    MappingEnd,
}

impl EventType {
    pub(crate) fn empty_scalar() -> Self {
        EventType::Scalar {
            anchor: None,
            tag: None,
            value: String::new(),
            plain_implicit: true,
            quoted_implicit: false,
            style: ScalarStyle::Plain,
        }
    }
}

/// Writes the event in yaml-test-suite notation, e.g. `+MAP {} &a <tag:yaml.org,2002:map>`.
impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::StreamStart { .. } => write!(f, "+STR"),
            EventType::StreamEnd => write!(f, "-STR"),
            EventType::DocumentStart { implicit: true, .. } => write!(f, "+DOC"),
            EventType::DocumentStart { .. } => write!(f, "+DOC ---"),
            EventType::DocumentEnd { implicit: true } => write!(f, "-DOC"),
            EventType::DocumentEnd { .. } => write!(f, "-DOC ..."),
            EventType::Alias { anchor } => write!(f, "=ALI *{anchor}"),
            EventType::Scalar {
                anchor,
                tag,
                value,
                style,
                ..
            } => {
                write!(f, "=VAL")?;
                write_properties(f, anchor.as_deref(), tag.as_deref())?;
                write!(f, " {style}")?;
                write_escaped(f, value)
            }
            EventType::SequenceStart {
                anchor, tag, style, ..
            } => {
                write!(f, "+SEQ")?;
                if *style == CollectionStyle::Flow {
                    write!(f, " []")?;
                }
                write_properties(f, anchor.as_deref(), tag.as_deref())
            }
            EventType::SequenceEnd => write!(f, "-SEQ"),
            EventType::MappingStart {
                anchor, tag, style, ..
            } => {
                write!(f, "+MAP")?;
                if *style == CollectionStyle::Flow {
                    write!(f, " {{}}")?;
                }
                write_properties(f, anchor.as_deref(), tag.as_deref())
            }
            EventType::MappingEnd => write!(f, "-MAP"),
        }
    }
}

fn write_properties(f: &mut Formatter<'_>, anchor: Option<&str>, tag: Option<&str>) -> std::fmt::Result {
    if let Some(anchor) = anchor {
        write!(f, " &{anchor}")?;
    }
    if let Some(tag) = tag {
        write!(f, " <{tag}>")?;
    }
    Ok(())
}

fn write_escaped(f: &mut Formatter<'_>, value: &str) -> std::fmt::Result {
    for ch in value.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\0' => f.write_str("\\0")?,
            '\x08' => f.write_str("\\b")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Event {
    pub span: Span,
    pub event_type: EventType,
}

impl Event {
    pub fn new(span: Span, event_type: EventType) -> Self {
        Event { span, event_type }
    }

    /// A plain, untagged, empty scalar standing in for a missing node.
    pub fn empty_scalar(span: Span) -> Self {
        Event::new(span, EventType::empty_scalar())
    }

    /// Whether this event ends the stream.
    #[must_use]
    pub fn is_stream_end(&self) -> bool {
        matches!(self.event_type, EventType::StreamEnd)
    }
}
