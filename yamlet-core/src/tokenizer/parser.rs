use alloc::string::String;
use alloc::vec::Vec;
use std::io;

use hashbrown::{HashMap, HashSet};
use yamlet_common::{
    CollectionStyle, Error, Event, EventType, Mark, ScalarStyle, ScanResult, Span, TagDirective,
    Token, TokenType, VersionDirective, YamlResult,
};

use crate::config::ParserConfig;
use crate::tokenizer::scanner::Scanner;
use crate::tokenizer::source::{ReadSource, Source, StrSource};

const DEFAULT_TAG_HANDLES: [(&str, &str); 2] = [("!", "!"), ("!!", "tag:yaml.org,2002:")];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    StreamStart,
    ImplicitDocumentStart,
    DocumentStart,
    DocumentContent,
    DocumentEnd,
    BlockNode,
    BlockNodeOrIndentlessSequence,
    FlowNode,
    BlockSequenceFirstEntry,
    BlockSequenceEntry,
    IndentlessSequenceEntry,
    BlockMappingFirstKey,
    BlockMappingKey,
    BlockMappingValue,
    FlowSequenceFirstEntry,
    FlowSequenceEntry,
    FlowSequenceEntryMappingKey,
    FlowSequenceEntryMappingValue,
    FlowSequenceEntryMappingEnd,
    FlowMappingFirstKey,
    FlowMappingKey,
    FlowMappingValue,
    FlowMappingEmptyValue,
    End,
}

/// Pull parser turning a YAML byte stream into [`Event`]s.
///
/// ```
/// use yamlet_core::Parser;
/// use yamlet_common::EventType;
///
/// let events: Vec<_> = Parser::from_str("[1, 2]")
///     .map(|ev| ev.map(|ev| ev.event_type))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(events.len(), 8);
/// assert_eq!(events.last(), Some(&EventType::StreamEnd));
/// ```
pub struct Parser<S> {
    scanner: Scanner<S>,
    states: Vec<State>,
    state: State,
    marks: Vec<Mark>,
    /// Handle to prefix map of the current document, defaults included.
    tag_handles: HashMap<String, String>,
    anchors: HashSet<String>,
    /// Set once the stream ended or failed; replayed on every later call.
    terminal: Option<YamlResult<Event>>,
}

impl<S: Source> Parser<S> {
    pub fn new(src: S) -> Parser<S> {
        Parser::with_config(src, ParserConfig::default())
    }

    pub fn with_config(src: S, config: ParserConfig) -> Parser<S> {
        Parser {
            scanner: Scanner::new(src, config),
            states: Vec::new(),
            state: State::StreamStart,
            marks: Vec::new(),
            tag_handles: HashMap::new(),
            anchors: HashSet::new(),
            terminal: None,
        }
    }

    /// Produces the next event.
    ///
    /// # Errors
    /// Returns the first reader, scanner or parser error. After an error or `STREAM-END`
    /// every call returns that same result again.
    pub fn next_event(&mut self) -> YamlResult<Event> {
        if let Some(terminal) = &self.terminal {
            return terminal.clone();
        }
        let res = self.state_machine();
        match &res {
            Ok(ev) => {
                tracing::trace!(event = ?ev.event_type, start = %ev.span.start, "parsed event");
                if ev.is_stream_end() {
                    self.state = State::End;
                    self.terminal = Some(res.clone());
                }
            }
            Err(err) => {
                tracing::debug!(%err, "parser stopped");
                self.terminal = Some(res.clone());
            }
        }
        res
    }

    fn state_machine(&mut self) -> YamlResult<Event> {
        match self.state {
            State::StreamStart => self.stream_start(),
            State::ImplicitDocumentStart => self.document_start(true),
            State::DocumentStart => self.document_start(false),
            State::DocumentContent => self.document_content(),
            State::DocumentEnd => self.document_end(),
            State::BlockNode => self.parse_node(true, false),
            State::BlockNodeOrIndentlessSequence => self.parse_node(true, true),
            State::FlowNode => self.parse_node(false, false),
            State::BlockSequenceFirstEntry => self.block_sequence_entry(true),
            State::BlockSequenceEntry => self.block_sequence_entry(false),
            State::IndentlessSequenceEntry => self.indentless_sequence_entry(),
            State::BlockMappingFirstKey => self.block_mapping_key(true),
            State::BlockMappingKey => self.block_mapping_key(false),
            State::BlockMappingValue => self.block_mapping_value(),
            State::FlowSequenceFirstEntry => self.flow_sequence_entry(true),
            State::FlowSequenceEntry => self.flow_sequence_entry(false),
            State::FlowSequenceEntryMappingKey => self.flow_sequence_entry_mapping_key(),
            State::FlowSequenceEntryMappingValue => self.flow_sequence_entry_mapping_value(),
            State::FlowSequenceEntryMappingEnd => self.flow_sequence_entry_mapping_end(),
            State::FlowMappingFirstKey => self.flow_mapping_key(true),
            State::FlowMappingKey => self.flow_mapping_key(false),
            State::FlowMappingValue => self.flow_mapping_value(false),
            State::FlowMappingEmptyValue => self.flow_mapping_value(true),
            State::End => Ok(Event::new(
                Span::empty(self.scanner.mark()),
                EventType::StreamEnd,
            )),
        }
    }

    #[inline]
    fn peek_token(&mut self) -> YamlResult<&Token> {
        self.scanner.peek_token()
    }

    #[inline]
    fn fetch_token(&mut self) -> YamlResult<Token> {
        self.scanner.next_token()
    }

    #[inline]
    fn skip(&mut self) -> ScanResult {
        self.scanner.next_token().map(|_| ())
    }

    fn push_state(&mut self, state: State) {
        self.states.push(state);
    }

    fn pop_state(&mut self) {
        self.state = self.states.pop().unwrap_or(State::End);
    }

    /// Parses a node in `node` state, then resumes with `next`.
    fn descend(&mut self, next: State, node: State) -> YamlResult<Event> {
        self.push_state(next);
        self.state = node;
        self.state_machine()
    }

    fn stream_start(&mut self) -> YamlResult<Event> {
        let tok = self.fetch_token()?;
        match tok.token_type {
            TokenType::StreamStart(encoding) => {
                self.state = State::ImplicitDocumentStart;
                Ok(Event::new(tok.span, EventType::StreamStart { encoding }))
            }
            _ => Err(Error::parser(
                Some("while parsing a stream"),
                Some(tok.span.start),
                "did not find expected <stream-start>",
                tok.span.start,
            )),
        }
    }

    fn document_start(&mut self, implicit: bool) -> YamlResult<Event> {
        // stray `...` between documents carry no content
        while matches!(self.peek_token()?.token_type, TokenType::DocumentEnd) {
            self.skip()?;
        }

        let span = self.peek_token()?.span;
        match self.peek_token()?.token_type {
            TokenType::StreamEnd => {
                self.state = State::End;
                self.skip()?;
                Ok(Event::new(span, EventType::StreamEnd))
            }
            TokenType::VersionDirective { .. }
            | TokenType::TagDirective { .. }
            | TokenType::DocumentStart => self.explicit_document_start(span.start),
            _ if implicit => {
                self.process_directives()?;
                self.push_state(State::DocumentEnd);
                self.state = State::BlockNode;
                Ok(Event::new(
                    Span::empty(span.start),
                    EventType::DocumentStart {
                        version: None,
                        tags: Vec::new(),
                        implicit: true,
                    },
                ))
            }
            _ => Err(Error::parser(
                Some("while parsing a document start"),
                Some(span.start),
                "did not find expected <document start>",
                span.start,
            )),
        }
    }

    fn explicit_document_start(&mut self, start: Mark) -> YamlResult<Event> {
        let (version, tags) = self.process_directives()?;
        let span = self.peek_token()?.span;
        if !matches!(self.peek_token()?.token_type, TokenType::DocumentStart) {
            return Err(Error::parser(
                Some("while parsing a document start"),
                Some(start),
                "did not find expected <document start>",
                span.start,
            ));
        }
        self.skip()?;
        self.push_state(State::DocumentEnd);
        self.state = State::DocumentContent;
        Ok(Event::new(
            Span::new(start, span.end),
            EventType::DocumentStart {
                version,
                tags,
                implicit: false,
            },
        ))
    }

    /// Collects the directives of a document and resets the per-document tables.
    fn process_directives(&mut self) -> YamlResult<(Option<VersionDirective>, Vec<TagDirective>)> {
        let mut version = None;
        let mut tags = Vec::new();
        let start = self.peek_token()?.span.start;
        self.tag_handles.clear();
        self.anchors.clear();

        loop {
            if !matches!(
                self.peek_token()?.token_type,
                TokenType::VersionDirective { .. } | TokenType::TagDirective { .. }
            ) {
                break;
            }
            let tok = self.fetch_token()?;
            match tok.token_type {
                TokenType::VersionDirective { major, minor } => {
                    if version.is_some() {
                        return Err(Error::parser(
                            Some("while parsing document directives"),
                            Some(start),
                            "found duplicate %YAML directive",
                            tok.span.start,
                        ));
                    }
                    if major != 1 {
                        return Err(Error::parser(
                            Some("while parsing document directives"),
                            Some(start),
                            "found incompatible YAML document",
                            tok.span.start,
                        ));
                    }
                    if minor > 2 {
                        tracing::warn!(major, minor, mark = %tok.span.start, "unknown YAML minor version, parsing as 1.2");
                    }
                    version = Some(VersionDirective { major, minor });
                }
                TokenType::TagDirective { handle, prefix } => {
                    if self.tag_handles.contains_key(&handle) {
                        return Err(Error::parser(
                            Some("while parsing document directives"),
                            Some(start),
                            "found duplicate %TAG directive",
                            tok.span.start,
                        ));
                    }
                    self.tag_handles.insert(handle.clone(), prefix.clone());
                    tags.push(TagDirective::new(handle, prefix));
                }
                _ => {}
            }
        }

        for (handle, prefix) in DEFAULT_TAG_HANDLES {
            self.tag_handles
                .entry(String::from(handle))
                .or_insert_with(|| String::from(prefix));
        }
        Ok((version, tags))
    }

    fn document_content(&mut self) -> YamlResult<Event> {
        let start = self.peek_token()?.span.start;
        match self.peek_token()?.token_type {
            TokenType::VersionDirective { .. }
            | TokenType::TagDirective { .. }
            | TokenType::DocumentStart
            | TokenType::DocumentEnd
            | TokenType::StreamEnd => {
                self.pop_state();
                Ok(Event::empty_scalar(Span::empty(start)))
            }
            _ => self.parse_node(true, false),
        }
    }

    fn document_end(&mut self) -> YamlResult<Event> {
        let span = self.peek_token()?.span;
        let explicit = match self.peek_token()?.token_type {
            TokenType::DocumentEnd => {
                self.skip()?;
                true
            }
            TokenType::VersionDirective { .. } | TokenType::TagDirective { .. } => {
                return Err(Error::parser(
                    Some("while parsing a document end"),
                    Some(span.start),
                    "missing explicit document end marker before directive",
                    span.start,
                ));
            }
            _ => false,
        };

        let span = if explicit {
            span
        } else {
            Span::empty(span.start)
        };
        // a bare document may only follow an explicit end marker
        self.state = if explicit {
            State::ImplicitDocumentStart
        } else {
            State::DocumentStart
        };
        Ok(Event::new(
            span,
            EventType::DocumentEnd {
                implicit: !explicit,
            },
        ))
    }

    fn parse_node(&mut self, block: bool, indentless_sequence: bool) -> YamlResult<Event> {
        if matches!(self.peek_token()?.token_type, TokenType::Alias(_)) {
            self.pop_state();
            let tok = self.fetch_token()?;
            let TokenType::Alias(anchor) = tok.token_type else {
                return Err(Error::parser(
                    Some("while parsing an alias"),
                    Some(tok.span.start),
                    "did not find expected alias",
                    tok.span.start,
                ));
            };
            if !self.anchors.contains(&anchor) {
                return Err(Error::parser(
                    Some("while parsing an alias"),
                    Some(tok.span.start),
                    "found undefined alias",
                    tok.span.start,
                ));
            }
            return Ok(Event::new(tok.span, EventType::Alias { anchor }));
        }

        let first = self.peek_token()?.span;
        let mut start = first.start;
        let mut end = first.start;
        let mut anchor = None;
        let mut tag = None;
        let mut tag_mark = first.start;

        // node properties come in either order
        loop {
            match self.peek_token()?.token_type {
                TokenType::Anchor(_) if anchor.is_none() => {
                    let tok = self.fetch_token()?;
                    if tag.is_none() {
                        start = tok.span.start;
                    }
                    end = tok.span.end;
                    if let TokenType::Anchor(name) = tok.token_type {
                        anchor = Some(name);
                    }
                }
                TokenType::Tag { .. } if tag.is_none() => {
                    let tok = self.fetch_token()?;
                    if anchor.is_none() {
                        start = tok.span.start;
                    }
                    tag_mark = tok.span.start;
                    end = tok.span.end;
                    if let TokenType::Tag { handle, suffix } = tok.token_type {
                        tag = Some((handle, suffix));
                    }
                }
                _ => break,
            }
        }

        let tag = match tag {
            Some((handle, suffix)) => Some(self.resolve_tag(handle, suffix, start, tag_mark)?),
            None => None,
        };
        if let Some(name) = &anchor {
            self.anchors.insert(name.clone());
        }
        let implicit = tag.is_none();

        let span = self.peek_token()?.span;
        match self.peek_token()?.token_type {
            TokenType::BlockEntry if indentless_sequence => {
                self.state = State::IndentlessSequenceEntry;
                Ok(Event::new(
                    Span::new(start, span.end),
                    EventType::SequenceStart {
                        anchor,
                        tag,
                        implicit,
                        style: CollectionStyle::Block,
                    },
                ))
            }
            TokenType::Scalar { .. } => {
                self.pop_state();
                let tok = self.fetch_token()?;
                let TokenType::Scalar { style, value } = tok.token_type else {
                    return Err(Error::parser(
                        Some("while parsing a node"),
                        Some(start),
                        "did not find expected scalar",
                        tok.span.start,
                    ));
                };
                let non_specific = tag.as_deref() == Some("!");
                let plain_implicit = (tag.is_none() && style == ScalarStyle::Plain) || non_specific;
                let quoted_implicit = tag.is_none() && style != ScalarStyle::Plain;
                Ok(Event::new(
                    Span::new(start, tok.span.end),
                    EventType::Scalar {
                        anchor,
                        tag,
                        value,
                        plain_implicit,
                        quoted_implicit,
                        style,
                    },
                ))
            }
            TokenType::FlowSequenceStart => {
                self.state = State::FlowSequenceFirstEntry;
                Ok(Event::new(
                    Span::new(start, span.end),
                    EventType::SequenceStart {
                        anchor,
                        tag,
                        implicit,
                        style: CollectionStyle::Flow,
                    },
                ))
            }
            TokenType::FlowMappingStart => {
                self.state = State::FlowMappingFirstKey;
                Ok(Event::new(
                    Span::new(start, span.end),
                    EventType::MappingStart {
                        anchor,
                        tag,
                        implicit,
                        style: CollectionStyle::Flow,
                    },
                ))
            }
            TokenType::BlockSequenceStart if block => {
                self.state = State::BlockSequenceFirstEntry;
                Ok(Event::new(
                    Span::new(start, span.end),
                    EventType::SequenceStart {
                        anchor,
                        tag,
                        implicit,
                        style: CollectionStyle::Block,
                    },
                ))
            }
            TokenType::BlockMappingStart if block => {
                self.state = State::BlockMappingFirstKey;
                Ok(Event::new(
                    Span::new(start, span.end),
                    EventType::MappingStart {
                        anchor,
                        tag,
                        implicit,
                        style: CollectionStyle::Block,
                    },
                ))
            }
            // properties without content: an empty scalar
            _ if anchor.is_some() || tag.is_some() => {
                self.pop_state();
                Ok(Event::new(
                    Span::new(start, end),
                    EventType::Scalar {
                        anchor,
                        tag,
                        value: String::new(),
                        plain_implicit: implicit,
                        quoted_implicit: false,
                        style: ScalarStyle::Plain,
                    },
                ))
            }
            _ => Err(Error::parser(
                Some(if block {
                    "while parsing a block node"
                } else {
                    "while parsing a flow node"
                }),
                Some(start),
                "did not find expected node content",
                span.start,
            )),
        }
    }

    fn resolve_tag(
        &self,
        handle: String,
        suffix: String,
        start: Mark,
        tag_mark: Mark,
    ) -> YamlResult<String> {
        if handle.is_empty() {
            return Ok(suffix);
        }
        match self.tag_handles.get(&handle) {
            Some(prefix) => {
                let mut tag = String::with_capacity(prefix.len() + suffix.len());
                tag.push_str(prefix);
                tag.push_str(&suffix);
                Ok(tag)
            }
            None => Err(Error::parser(
                Some("while parsing a node"),
                Some(start),
                "found undefined tag handle",
                tag_mark,
            )),
        }
    }

    fn block_sequence_entry(&mut self, first: bool) -> YamlResult<Event> {
        if first {
            let start = self.peek_token()?.span.start;
            self.marks.push(start);
            self.skip()?;
        }

        let span = self.peek_token()?.span;
        match self.peek_token()?.token_type {
            TokenType::BlockEntry => {
                self.skip()?;
                if matches!(
                    self.peek_token()?.token_type,
                    TokenType::BlockEntry | TokenType::BlockEnd
                ) {
                    self.state = State::BlockSequenceEntry;
                    Ok(Event::empty_scalar(Span::empty(span.end)))
                } else {
                    self.descend(State::BlockSequenceEntry, State::BlockNode)
                }
            }
            TokenType::BlockEnd => {
                self.pop_state();
                self.marks.pop();
                self.skip()?;
                Ok(Event::new(span, EventType::SequenceEnd))
            }
            _ => Err(Error::parser(
                Some("while parsing a block collection"),
                self.marks.last().copied(),
                "did not find expected '-' indicator",
                span.start,
            )),
        }
    }

    fn indentless_sequence_entry(&mut self) -> YamlResult<Event> {
        let span = self.peek_token()?.span;
        if !matches!(self.peek_token()?.token_type, TokenType::BlockEntry) {
            self.pop_state();
            return Ok(Event::new(Span::empty(span.start), EventType::SequenceEnd));
        }

        self.skip()?;
        if matches!(
            self.peek_token()?.token_type,
            TokenType::BlockEntry | TokenType::Key | TokenType::Value | TokenType::BlockEnd
        ) {
            self.state = State::IndentlessSequenceEntry;
            Ok(Event::empty_scalar(Span::empty(span.end)))
        } else {
            self.descend(State::IndentlessSequenceEntry, State::BlockNode)
        }
    }

    fn block_mapping_key(&mut self, first: bool) -> YamlResult<Event> {
        if first {
            let start = self.peek_token()?.span.start;
            self.marks.push(start);
            self.skip()?;
        }

        let span = self.peek_token()?.span;
        match self.peek_token()?.token_type {
            TokenType::Key => {
                self.skip()?;
                if matches!(
                    self.peek_token()?.token_type,
                    TokenType::Key | TokenType::Value | TokenType::BlockEnd
                ) {
                    self.state = State::BlockMappingValue;
                    Ok(Event::empty_scalar(Span::empty(span.end)))
                } else {
                    self.descend(State::BlockMappingValue, State::BlockNodeOrIndentlessSequence)
                }
            }
            // a value with no key at all: `: x`
            TokenType::Value => {
                self.state = State::BlockMappingValue;
                Ok(Event::empty_scalar(Span::empty(span.start)))
            }
            TokenType::BlockEnd => {
                self.pop_state();
                self.marks.pop();
                self.skip()?;
                Ok(Event::new(span, EventType::MappingEnd))
            }
            _ => Err(Error::parser(
                Some("while parsing a block mapping"),
                self.marks.last().copied(),
                "did not find expected key",
                span.start,
            )),
        }
    }

    fn block_mapping_value(&mut self) -> YamlResult<Event> {
        let span = self.peek_token()?.span;
        if !matches!(self.peek_token()?.token_type, TokenType::Value) {
            self.state = State::BlockMappingKey;
            return Ok(Event::empty_scalar(Span::empty(span.start)));
        }

        self.skip()?;
        if matches!(
            self.peek_token()?.token_type,
            TokenType::Key | TokenType::Value | TokenType::BlockEnd
        ) {
            self.state = State::BlockMappingKey;
            Ok(Event::empty_scalar(Span::empty(span.end)))
        } else {
            self.descend(State::BlockMappingKey, State::BlockNodeOrIndentlessSequence)
        }
    }

    fn flow_sequence_entry(&mut self, first: bool) -> YamlResult<Event> {
        if first {
            let start = self.peek_token()?.span.start;
            self.marks.push(start);
            self.skip()?;
        }

        if !matches!(self.peek_token()?.token_type, TokenType::FlowSequenceEnd) {
            if !first {
                let span = self.peek_token()?.span;
                if !matches!(self.peek_token()?.token_type, TokenType::FlowEntry) {
                    return Err(Error::parser(
                        Some("while parsing a flow sequence"),
                        self.marks.last().copied(),
                        "did not find expected ',' or ']'",
                        span.start,
                    ));
                }
                self.skip()?;
            }

            let span = self.peek_token()?.span;
            match self.peek_token()?.token_type {
                TokenType::Key => {
                    self.state = State::FlowSequenceEntryMappingKey;
                    self.skip()?;
                    return Ok(Event::new(
                        span,
                        EventType::MappingStart {
                            anchor: None,
                            tag: None,
                            implicit: true,
                            style: CollectionStyle::Flow,
                        },
                    ));
                }
                TokenType::FlowSequenceEnd => {}
                _ => return self.descend(State::FlowSequenceEntry, State::FlowNode),
            }
        }

        let span = self.peek_token()?.span;
        self.pop_state();
        self.marks.pop();
        self.skip()?;
        Ok(Event::new(span, EventType::SequenceEnd))
    }

    fn flow_sequence_entry_mapping_key(&mut self) -> YamlResult<Event> {
        let span = self.peek_token()?.span;
        if matches!(
            self.peek_token()?.token_type,
            TokenType::Value | TokenType::FlowEntry | TokenType::FlowSequenceEnd
        ) {
            self.state = State::FlowSequenceEntryMappingValue;
            Ok(Event::empty_scalar(Span::empty(span.start)))
        } else {
            self.descend(State::FlowSequenceEntryMappingValue, State::FlowNode)
        }
    }

    fn flow_sequence_entry_mapping_value(&mut self) -> YamlResult<Event> {
        let span = self.peek_token()?.span;
        if !matches!(self.peek_token()?.token_type, TokenType::Value) {
            self.state = State::FlowSequenceEntryMappingEnd;
            return Ok(Event::empty_scalar(Span::empty(span.start)));
        }

        self.skip()?;
        let span = self.peek_token()?.span;
        if matches!(
            self.peek_token()?.token_type,
            TokenType::FlowEntry | TokenType::FlowSequenceEnd
        ) {
            self.state = State::FlowSequenceEntryMappingEnd;
            Ok(Event::empty_scalar(Span::empty(span.start)))
        } else {
            self.descend(State::FlowSequenceEntryMappingEnd, State::FlowNode)
        }
    }

    fn flow_sequence_entry_mapping_end(&mut self) -> YamlResult<Event> {
        let start = self.peek_token()?.span.start;
        self.state = State::FlowSequenceEntry;
        Ok(Event::new(Span::empty(start), EventType::MappingEnd))
    }

    fn flow_mapping_key(&mut self, first: bool) -> YamlResult<Event> {
        if first {
            let start = self.peek_token()?.span.start;
            self.marks.push(start);
            self.skip()?;
        }

        if !matches!(self.peek_token()?.token_type, TokenType::FlowMappingEnd) {
            if !first {
                let span = self.peek_token()?.span;
                if !matches!(self.peek_token()?.token_type, TokenType::FlowEntry) {
                    return Err(Error::parser(
                        Some("while parsing a flow mapping"),
                        self.marks.last().copied(),
                        "did not find expected ',' or '}'",
                        span.start,
                    ));
                }
                self.skip()?;
            }

            let span = self.peek_token()?.span;
            match self.peek_token()?.token_type {
                TokenType::Key => {
                    self.skip()?;
                    let span = self.peek_token()?.span;
                    if matches!(
                        self.peek_token()?.token_type,
                        TokenType::Value | TokenType::FlowEntry | TokenType::FlowMappingEnd
                    ) {
                        self.state = State::FlowMappingValue;
                        return Ok(Event::empty_scalar(Span::empty(span.start)));
                    }
                    return self.descend(State::FlowMappingValue, State::FlowNode);
                }
                // `{: x}` has an empty key
                TokenType::Value => {
                    self.state = State::FlowMappingValue;
                    return Ok(Event::empty_scalar(Span::empty(span.start)));
                }
                TokenType::FlowMappingEnd => {}
                _ => return self.descend(State::FlowMappingEmptyValue, State::FlowNode),
            }
        }

        let span = self.peek_token()?.span;
        self.pop_state();
        self.marks.pop();
        self.skip()?;
        Ok(Event::new(span, EventType::MappingEnd))
    }

    fn flow_mapping_value(&mut self, empty: bool) -> YamlResult<Event> {
        let span = self.peek_token()?.span;
        if empty || !matches!(self.peek_token()?.token_type, TokenType::Value) {
            self.state = State::FlowMappingKey;
            return Ok(Event::empty_scalar(Span::empty(span.start)));
        }

        self.skip()?;
        let span = self.peek_token()?.span;
        if matches!(
            self.peek_token()?.token_type,
            TokenType::FlowEntry | TokenType::FlowMappingEnd
        ) {
            self.state = State::FlowMappingKey;
            Ok(Event::empty_scalar(Span::empty(span.start)))
        } else {
            self.descend(State::FlowMappingKey, State::FlowNode)
        }
    }
}

impl<'input> Parser<StrSource<'input>> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'input str) -> Self {
        Parser::new(StrSource::new(input))
    }

    pub fn from_slice(input: &'input [u8]) -> Self {
        Parser::new(StrSource::from_bytes(input))
    }
}

impl<R: io::Read> Parser<ReadSource<R>> {
    pub fn from_reader(reader: R) -> Self {
        Parser::new(ReadSource::new(reader))
    }
}

impl<S: Source> Iterator for Parser<S> {
    type Item = YamlResult<Event>;

    /// Yields events up to and including `STREAM-END`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.terminal.is_some() {
            return None;
        }
        Some(self.next_event())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;
    use yamlet_common::{Encoding, ErrorKind};

    fn events(input: &str) -> YamlResult<Vec<EventType>> {
        Parser::from_str(input)
            .map(|ev| ev.map(|ev| ev.event_type))
            .collect()
    }

    fn plain(value: &str) -> EventType {
        EventType::Scalar {
            anchor: None,
            tag: None,
            value: value.into(),
            plain_implicit: true,
            quoted_implicit: false,
            style: ScalarStyle::Plain,
        }
    }

    fn implicit_doc() -> EventType {
        EventType::DocumentStart {
            version: None,
            tags: vec![],
            implicit: true,
        }
    }

    #[test]
    fn simple_block_mapping() {
        assert_eq!(
            events("foo: bar").unwrap(),
            vec![
                EventType::StreamStart {
                    encoding: Encoding::Utf8
                },
                implicit_doc(),
                EventType::MappingStart {
                    anchor: None,
                    tag: None,
                    implicit: true,
                    style: CollectionStyle::Block
                },
                plain("foo"),
                plain("bar"),
                EventType::MappingEnd,
                EventType::DocumentEnd { implicit: true },
                EventType::StreamEnd,
            ]
        );
    }

    #[test]
    fn empty_stream() {
        assert_eq!(
            events("").unwrap(),
            vec![
                EventType::StreamStart {
                    encoding: Encoding::Utf8
                },
                EventType::StreamEnd,
            ]
        );
    }

    #[test]
    fn tags_are_resolved() {
        let evs = events("%TAG !e! tag:example.com,2000:app/\n--- !e!foo \"bar\"").unwrap();
        assert_eq!(
            evs[1],
            EventType::DocumentStart {
                version: None,
                tags: vec![TagDirective::new("!e!", "tag:example.com,2000:app/")],
                implicit: false,
            }
        );
        assert_eq!(
            evs[2],
            EventType::Scalar {
                anchor: None,
                tag: Some("tag:example.com,2000:app/foo".into()),
                value: "bar".into(),
                plain_implicit: false,
                quoted_implicit: false,
                style: ScalarStyle::DoubleQuoted,
            }
        );
    }

    #[test]
    fn non_specific_tag_is_plain_implicit() {
        let evs = events("! a").unwrap();
        assert_eq!(
            evs[2],
            EventType::Scalar {
                anchor: None,
                tag: Some("!".into()),
                value: "a".into(),
                plain_implicit: true,
                quoted_implicit: false,
                style: ScalarStyle::Plain,
            }
        );
    }

    #[test]
    fn undefined_tag_handle() {
        let err = events("!x!y z").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parser);
        assert_eq!(err.problem.as_ref(), "found undefined tag handle");
    }

    #[test]
    fn alias_to_known_anchor() {
        let evs = events("- &x foo\n- *x").unwrap();
        assert_eq!(evs[4], EventType::Alias { anchor: "x".into() });
    }

    #[test]
    fn alias_to_unknown_anchor() {
        let err = events("- &x foo\n- *y").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parser);
        assert_eq!(err.problem.as_ref(), "found undefined alias");
        assert_eq!(err.problem_mark.line, 1);
    }

    #[test]
    fn anchors_do_not_cross_documents() {
        let err = events("--- &a x\n--- *a").unwrap_err();
        assert_eq!(err.problem.as_ref(), "found undefined alias");
    }

    #[test]
    fn duplicate_version_directive() {
        let err = events("%YAML 1.2\n%YAML 1.2\n---").unwrap_err();
        assert_eq!(err.problem.as_ref(), "found duplicate %YAML directive");
    }

    #[test]
    fn incompatible_major_version() {
        let err = events("%YAML 2.0\n---").unwrap_err();
        assert_eq!(err.problem.as_ref(), "found incompatible YAML document");
    }

    #[test]
    fn duplicate_tag_directive() {
        let err = events("%TAG !a! x\n%TAG !a! y\n---").unwrap_err();
        assert_eq!(err.problem.as_ref(), "found duplicate %TAG directive");
    }

    #[test]
    fn directive_needs_explicit_end() {
        let err = events("a: b\n%YAML 1.2\n---").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parser);
        assert_eq!(err.problem_mark.line, 1);
    }

    #[test]
    fn bare_document_after_end_marker() {
        let evs = events("a\n...\nb").unwrap();
        assert_eq!(
            evs,
            vec![
                EventType::StreamStart {
                    encoding: Encoding::Utf8
                },
                implicit_doc(),
                plain("a"),
                EventType::DocumentEnd { implicit: false },
                implicit_doc(),
                plain("b"),
                EventType::DocumentEnd { implicit: true },
                EventType::StreamEnd,
            ]
        );
    }

    #[test]
    fn flow_pair_inside_sequence() {
        let evs = events("[a: b]").unwrap();
        assert_eq!(
            evs[3],
            EventType::MappingStart {
                anchor: None,
                tag: None,
                implicit: true,
                style: CollectionStyle::Flow
            }
        );
        assert_eq!(evs[4], plain("a"));
        assert_eq!(evs[5], plain("b"));
        assert_eq!(evs[6], EventType::MappingEnd);
    }

    #[test]
    fn stream_end_is_terminal() {
        let mut parser = Parser::from_str("x");
        while !parser.next_event().unwrap().is_stream_end() {}
        assert!(parser.next_event().unwrap().is_stream_end());
        assert!(parser.next_event().unwrap().is_stream_end());
        assert!(parser.next().is_none());
    }

    #[test]
    fn error_is_terminal() {
        let mut parser = Parser::from_str("a:\n\tb: c");
        let err = loop {
            match parser.next_event() {
                Ok(ev) => assert!(!ev.is_stream_end()),
                Err(err) => break err,
            }
        };
        assert_eq!(err.kind, ErrorKind::Scanner);
        assert_eq!((err.problem_mark.line, err.problem_mark.column), (1, 0));
        assert_eq!(parser.next_event().unwrap_err(), err);
        assert!(parser.next().is_none());
    }

    #[test]
    fn utf16_input() {
        let input = b"\xFF\xFEa\x00:\x00 \x00b\x00";
        let evs: Vec<_> = Parser::from_slice(input)
            .map(|ev| ev.map(|ev| ev.event_type))
            .collect::<YamlResult<_>>()
            .unwrap();
        assert_eq!(
            evs[0],
            EventType::StreamStart {
                encoding: Encoding::Utf16Le
            }
        );
        assert_eq!(evs[3], plain("a"));
        assert_eq!(evs[4], plain("b"));
    }

    #[test]
    fn reader_errors_pass_through() {
        let err = Parser::from_slice(b"a: \xC3(")
            .find_map(Result::err)
            .unwrap();
        assert_eq!(err.kind, ErrorKind::Reader);
        assert_eq!(err.problem_mark.offset, 3);
    }

    #[test]
    fn from_reader_source() {
        let input = std::io::Cursor::new(b"- 1\n- 2\n".to_vec());
        let evs: Vec<_> = Parser::from_reader(input).collect::<YamlResult<_>>().unwrap();
        assert_eq!(evs.len(), 8);
    }

    /// Hands out `chunk` once, then fails every read.
    struct BrokenSource {
        chunk: Option<&'static [u8]>,
    }

    impl Source for BrokenSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunk.take() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(chunk);
                    Ok(chunk.len())
                }
                None => Err(io::Error::new(io::ErrorKind::Other, "boom")),
            }
        }
    }

    #[test]
    fn failing_source_is_sticky() {
        let mut parser = Parser::new(BrokenSource {
            chunk: Some(b"a: b"),
        });
        let err = loop {
            match parser.next_event() {
                Ok(ev) => assert_ne!(ev.event_type, EventType::StreamEnd),
                Err(err) => break err,
            }
        };
        assert_eq!(err.kind, ErrorKind::Reader);
        assert!(err.problem.contains("boom"), "{err}");
        assert_eq!(err.problem_mark.offset, 4);
        assert_eq!(err.problem_mark.line, 0);

        assert_eq!(parser.next_event(), Err(err));
        assert!(parser.next().is_none());
    }

    #[test]
    fn directive_errors_name_the_rule() {
        let err = events("%YAML 1.2\n%YAML 1.2\n---").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parser);
        assert_eq!(err.context.as_deref(), Some("while parsing document directives"));
        assert_eq!(err.context_mark.map(|m| m.line), Some(0));
        assert_eq!(err.problem_mark.line, 1);

        let err = events("a: b\n%YAML 1.2\n---").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while parsing a document end"));

        let err = events("%YAML 1.2\nfoo").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while parsing a document start"));
        assert_eq!(err.context_mark.map(|m| m.line), Some(0));
    }
}
