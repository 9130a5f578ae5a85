use crate::{Encoding, ScalarStyle, Span};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TokenType {
    StreamStart(Encoding),
    StreamEnd,
    VersionDirective {
        major: u8,
        minor: u8,
    },
    TagDirective {
        handle: String,
        prefix: String,
    },
    DocumentStart,
    DocumentEnd,
    BlockSequenceStart,
    BlockMappingStart,
    BlockEnd,
    FlowSequenceStart,
    FlowSequenceEnd,
    FlowMappingStart,
    FlowMappingEnd,
    BlockEntry,
    FlowEntry,
    Key,
    Value,
    Alias(String),
    Anchor(String),
    /// A node tag. A verbatim tag `!<...>` has an empty handle, the non-specific tag `!` has
    /// an empty handle and a suffix of `!`.
    Tag {
        handle: String,
        suffix: String,
    },
    Scalar {
        style: ScalarStyle,
        value: String,
    },
}

impl TokenType {
    /// Human readable name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::StreamStart(_) => "<stream start>",
            TokenType::StreamEnd => "<stream end>",
            TokenType::VersionDirective { .. } => "%YAML directive",
            TokenType::TagDirective { .. } => "%TAG directive",
            TokenType::DocumentStart => "'---'",
            TokenType::DocumentEnd => "'...'",
            TokenType::BlockSequenceStart => "<block sequence start>",
            TokenType::BlockMappingStart => "<block mapping start>",
            TokenType::BlockEnd => "<block end>",
            TokenType::FlowSequenceStart => "'['",
            TokenType::FlowSequenceEnd => "']'",
            TokenType::FlowMappingStart => "'{'",
            TokenType::FlowMappingEnd => "'}'",
            TokenType::BlockEntry => "'-'",
            TokenType::FlowEntry => "','",
            TokenType::Key => "'?'",
            TokenType::Value => "':'",
            TokenType::Alias(_) => "alias",
            TokenType::Anchor(_) => "anchor",
            TokenType::Tag { .. } => "tag",
            TokenType::Scalar { .. } => "scalar",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub span: Span,
    pub token_type: TokenType,
}

impl Token {
    pub fn new(span: Span, token_type: TokenType) -> Self {
        Token { span, token_type }
    }
}
