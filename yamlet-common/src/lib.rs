pub mod error;
pub mod event;
pub mod token;

pub use error::{Error, ErrorKind, ScanResult, YamlResult};
pub use event::{CollectionStyle, Event, EventType, TagDirective, VersionDirective};
pub use token::{Token, TokenType};

use std::fmt::{Display, Formatter};

/// Character encoding of the input stream.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Encoding {
    /// Let the reader decide, by sniffing the byte order mark.
    #[default]
    Any,
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Display for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Any => write!(f, "any"),
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16Le => write!(f, "UTF-16LE"),
            Encoding::Utf16Be => write!(f, "UTF-16BE"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScalarStyle {
    /// Unquoted string type like:
    /// ```yaml
    ///   multiline
    ///   string
    /// ```
    Plain,
    /// Single quote string which permits any symbol inside
    /// E.g. :
    /// ```yaml
    /// ' This is a quoted string
    ///    with ''quoted'' string within.'
    /// ```
    SingleQuoted,
    /// Double quote string with escapes
    /// E.g. :
    /// ```yaml
    /// "This is a quoted string
    ///    with \"double quoted\" string within."
    /// ```
    DoubleQuoted,
    /// Literal block string like:
    /// ```yaml
    ///   |
    ///     literal
    ///     string
    /// ```
    Literal,
    /// Folded block string like:
    /// ```yaml
    ///   >
    ///     folded
    ///     string
    /// ```
    Folded,
}

impl Display for ScalarStyle {
    /// Writes the indicator the yaml-test-suite event notation uses for the style.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarStyle::Plain => write!(f, ":"),
            ScalarStyle::SingleQuoted => write!(f, "'"),
            ScalarStyle::DoubleQuoted => write!(f, "\""),
            ScalarStyle::Literal => write!(f, "|"),
            ScalarStyle::Folded => write!(f, ">"),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ChompIndicator {
    /// `-` final line break and any trailing empty lines are excluded from the scalar’s content
    Strip,
    ///  ` ` final line break character is preserved in the scalar’s content
    Clip,
    /// `+` final line break and any trailing empty lines are considered to be part of the scalar’s content
    Keep,
}

/// A position in the input stream.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Mark {
    /// Offset in bytes of the raw (still encoded) input.
    pub offset: usize,
    /// Number of characters decoded before this position.
    pub index: usize,
    /// Line of mark. Zero indexed.
    pub line: usize,
    /// Column of mark. Zero indexed.
    pub column: usize,
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line + 1, self.column + 1)
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Eq, Default)]
pub struct Span {
    pub start: Mark,
    pub end: Mark,
}

impl Span {
    pub fn new(start: Mark, end: Mark) -> Self {
        Span { start, end }
    }

    pub fn empty(mark: Mark) -> Self {
        Span {
            start: mark,
            end: mark,
        }
    }
}
