use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use yamlet_common::TokenType::{
    BlockEnd, FlowMappingEnd, FlowMappingStart, FlowSequenceEnd, FlowSequenceStart,
};
use yamlet_common::{
    ChompIndicator, Error, Mark, ScalarStyle, ScanResult, Span, Token, TokenType, YamlResult,
};

use crate::config::ParserConfig;
use crate::tokenizer::char_utils::*;
use crate::tokenizer::reader::Reader;
use crate::tokenizer::source::Source;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
struct SimpleKey {
    possible: bool,
    required: bool,
    token_number: usize,
    mark: Mark,
    /// Tab in the blanks before the key, when the key starts its line.
    indentation_tab: Option<Mark>,
}

/// Turns the decoded character stream into [`Token`]s.
///
/// Tokens that can only be recognized after the fact (`KEY` and `BLOCK-MAPPING-START` before a
/// simple key, several `BLOCK-END`s on a dedent) are queued, so a single call may read ahead
/// well past the token it returns.
pub struct Scanner<S> {
    reader: Reader<S>,
    config: ParserConfig,
    tokens: VecDeque<Token>,
    tokens_parsed: usize,
    token_available: bool,
    stream_start_produced: bool,
    stream_end_produced: bool,
    error: Option<Error>,

    /// Current block indentation column, `-1` outside of any block collection.
    indent: isize,
    indents: Vec<isize>,
    flow_level: usize,
    simple_keys: Vec<SimpleKey>,
    simple_key_allowed: bool,
    /// Only blanks were seen since the last line break.
    leading_whitespace: bool,
    /// First tab among the leading blanks of the current line, in block context.
    indentation_tab: Option<Mark>,
    /// Character index right after a JSON-like flow key, where `:` needs no trailing space.
    adjacent_value_allowed_at: Option<usize>,
}

impl<S: Source> Scanner<S> {
    pub fn new(src: S, config: ParserConfig) -> Scanner<S> {
        Scanner {
            reader: Reader::new(src, config.reader_encoding(), config.read_chunk_size),
            config,
            tokens: VecDeque::new(),
            tokens_parsed: 0,
            token_available: false,
            stream_start_produced: false,
            stream_end_produced: false,
            error: None,
            indent: -1,
            indents: Vec::new(),
            flow_level: 0,
            simple_keys: Vec::new(),
            simple_key_allowed: false,
            leading_whitespace: true,
            indentation_tab: None,
            adjacent_value_allowed_at: None,
        }
    }

    /// Position of the next unread character.
    #[inline]
    pub fn mark(&self) -> Mark {
        self.reader.mark()
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> YamlResult<&Token> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if !self.token_available {
            if let Err(err) = self.fetch_more_tokens() {
                tracing::debug!(%err, "scanner stopped");
                self.error = Some(err.clone());
                return Err(err);
            }
            self.token_available = true;
        }
        match self.tokens.front() {
            Some(tok) => Ok(tok),
            None => Err(self.error_at("while scanning for the next token", "no token could be produced")),
        }
    }

    /// Consumes the next token. After `STREAM-END` every call returns another `STREAM-END`.
    pub fn next_token(&mut self) -> YamlResult<Token> {
        self.peek_token()?;
        self.token_available = false;
        self.tokens_parsed += 1;
        match self.tokens.pop_front() {
            Some(tok) => Ok(tok),
            None => Err(self.error_at("while scanning for the next token", "no token could be produced")),
        }
    }

    fn fetch_more_tokens(&mut self) -> ScanResult {
        loop {
            let need_more = if self.tokens.is_empty() {
                true
            } else {
                self.stale_simple_keys()?;
                let parsed = self.tokens_parsed;
                self.simple_keys
                    .iter()
                    .any(|sk| sk.possible && sk.token_number == parsed)
            };
            if !need_more {
                return Ok(());
            }
            self.fetch_next_token()?;
        }
    }

    fn fetch_next_token(&mut self) -> ScanResult {
        self.lookahead(1)?;
        if !self.stream_start_produced {
            return self.fetch_stream_start();
        }
        if self.stream_end_produced {
            self.push_token(Token::new(Span::empty(self.mark()), TokenType::StreamEnd));
            return Ok(());
        }

        self.scan_to_next_token()?;
        self.stale_simple_keys()?;
        self.unroll_indent(self.mark().column as isize);

        self.lookahead(4)?;
        if self.reader.is_eof() {
            return self.fetch_stream_end();
        }

        let c = self.ch();
        if self.mark().column == 0 {
            if c == '%' {
                return self.fetch_directive();
            }
            if self.next_is_document_indicator('-') {
                return self.fetch_document_indicator(TokenType::DocumentStart);
            }
            if self.next_is_document_indicator('.') {
                return self.fetch_document_end();
            }
        }

        let nc = self.ch_at(1);
        match c {
            '[' => self.fetch_flow_collection_start(FlowSequenceStart),
            '{' => self.fetch_flow_collection_start(FlowMappingStart),
            ']' => self.fetch_flow_collection_end(FlowSequenceEnd),
            '}' => self.fetch_flow_collection_end(FlowMappingEnd),
            ',' => self.fetch_flow_entry(),
            '-' if is_blank_or_breakz(nc) => self.fetch_block_entry(),
            '?' if is_blank_or_breakz(nc) => self.fetch_key(),
            ':' if is_blank_or_breakz(nc) => self.fetch_value(),
            ':' if self.flow_level > 0
                && (is_flow(nc) || self.adjacent_value_allowed_at == Some(self.mark().index)) =>
            {
                self.fetch_flow_value()
            }
            '*' => self.fetch_anchor(true),
            '&' => self.fetch_anchor(false),
            '!' => self.fetch_tag(),
            '|' if self.flow_level == 0 => self.fetch_block_scalar(true),
            '>' if self.flow_level == 0 => self.fetch_block_scalar(false),
            '\'' => self.fetch_flow_scalar(true),
            '"' => self.fetch_flow_scalar(false),
            '-' => self.fetch_plain_scalar(),
            '?' | ':' if self.flow_level == 0 || !is_flow(nc) => self.fetch_plain_scalar(),
            '#' | '|' | '>' | '%' | '@' | '`' | '?' | ':' => Err(Error::scanner(
                "while scanning for the next token",
                self.mark(),
                "found character that cannot start any token",
                self.mark(),
            )),
            _ => self.fetch_plain_scalar(),
        }
    }

    fn fetch_stream_start(&mut self) -> ScanResult {
        let mark = self.mark();
        let encoding = self.reader.encoding()?;
        self.indent = -1;
        self.stream_start_produced = true;
        self.simple_key_allowed = true;
        self.simple_keys.push(SimpleKey::default());
        self.push_token(Token::new(Span::empty(mark), TokenType::StreamStart(encoding)));
        Ok(())
    }

    fn fetch_stream_end(&mut self) -> ScanResult {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;
        self.stream_end_produced = true;
        self.push_token(Token::new(Span::empty(self.mark()), TokenType::StreamEnd));
        Ok(())
    }

    fn fetch_directive(&mut self) -> ScanResult {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        if let Some(tok) = self.scan_directive()? {
            self.push_token(tok);
        }
        Ok(())
    }

    fn fetch_document_indicator(&mut self, token_type: TokenType) -> ScanResult {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        let start = self.mark();
        self.skip_n_non_blank(3);
        self.push_token(Token::new(Span::new(start, self.mark()), token_type));
        Ok(())
    }

    fn fetch_document_end(&mut self) -> ScanResult {
        self.fetch_document_indicator(TokenType::DocumentEnd)?;
        let start = self.mark();
        self.skip_blanks()?;
        if !is_breakz(self.ch()) && self.ch() != '#' {
            return Err(Error::scanner(
                "while scanning a document end",
                start,
                "found unexpected content after the document end marker",
                self.mark(),
            ));
        }
        Ok(())
    }

    fn fetch_flow_collection_start(&mut self, token_type: TokenType) -> ScanResult {
        self.save_simple_key()?;
        self.increase_flow_level();
        self.simple_key_allowed = true;

        let start = self.mark();
        self.skip_non_blank();
        self.push_token(Token::new(Span::new(start, self.mark()), token_type));
        Ok(())
    }

    fn fetch_flow_collection_end(&mut self, token_type: TokenType) -> ScanResult {
        self.remove_simple_key()?;
        self.decrease_flow_level();
        self.simple_key_allowed = false;

        let start = self.mark();
        self.skip_non_blank();
        self.push_token(Token::new(Span::new(start, self.mark()), token_type));
        self.allow_adjacent_value()
    }

    fn fetch_flow_entry(&mut self) -> ScanResult {
        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        let start = self.mark();
        self.skip_non_blank();
        self.push_token(Token::new(Span::new(start, self.mark()), TokenType::FlowEntry));
        Ok(())
    }

    fn fetch_block_entry(&mut self) -> ScanResult {
        const CONTEXT: &str = "while scanning a block entry";
        let start = self.mark();
        if self.flow_level > 0 {
            return Err(self.error_at(
                CONTEXT,
                "block sequence entries are not allowed in flow context",
            ));
        }
        if !self.simple_key_allowed {
            return Err(self.error_at(
                CONTEXT,
                "block sequence entries are not allowed in this context",
            ));
        }
        self.check_indentation_tab(CONTEXT, self.leading_tab())?;
        self.roll_indent(start.column as isize, None, TokenType::BlockSequenceStart, start);

        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        self.skip_non_blank();
        self.push_token(Token::new(Span::new(start, self.mark()), TokenType::BlockEntry));
        Ok(())
    }

    fn fetch_key(&mut self) -> ScanResult {
        let start = self.mark();
        if self.flow_level == 0 {
            if !self.simple_key_allowed {
                return Err(self.error_at(
                    "while scanning a mapping key",
                    "mapping keys are not allowed in this context",
                ));
            }
            self.check_indentation_tab("while scanning a mapping key", self.leading_tab())?;
            self.roll_indent(start.column as isize, None, TokenType::BlockMappingStart, start);
        }

        self.remove_simple_key()?;
        self.simple_key_allowed = self.flow_level == 0;

        self.skip_non_blank();
        self.push_token(Token::new(Span::new(start, self.mark()), TokenType::Key));
        Ok(())
    }

    fn fetch_value(&mut self) -> ScanResult {
        let start = self.mark();
        let sk = self.simple_keys.last().copied().unwrap_or_default();

        if sk.possible {
            if self.flow_level == 0 {
                self.check_indentation_tab("while scanning a simple key", sk.indentation_tab)?;
            }
            let pos = sk.token_number - self.tokens_parsed;
            self.insert_token(pos, Token::new(Span::empty(sk.mark), TokenType::Key));
            self.roll_indent(
                sk.mark.column as isize,
                Some(sk.token_number),
                TokenType::BlockMappingStart,
                sk.mark,
            );
            if let Some(last) = self.simple_keys.last_mut() {
                last.possible = false;
            }
            self.simple_key_allowed = false;
        } else {
            // The ':' follows a complex key, or stands alone.
            if self.flow_level == 0 {
                if !self.simple_key_allowed {
                    return Err(self.error_at(
                        "while scanning a mapping value",
                        "mapping values are not allowed in this context",
                    ));
                }
                self.check_indentation_tab("while scanning a mapping value", self.leading_tab())?;
                self.roll_indent(start.column as isize, None, TokenType::BlockMappingStart, start);
            }
            self.simple_key_allowed = self.flow_level == 0;
        }

        self.skip_non_blank();
        self.push_token(Token::new(Span::new(start, self.mark()), TokenType::Value));
        Ok(())
    }

    fn fetch_flow_value(&mut self) -> ScanResult {
        // `{"a":b}` is fine, `{a:[b]}` is not: the scalar would swallow the ':'
        if self.adjacent_value_allowed_at != Some(self.mark().index)
            && matches!(self.ch_at(1), '[' | '{')
        {
            return Err(Error::scanner(
                "while scanning a flow mapping value",
                self.mark(),
                "found ':' directly followed by a flow collection",
                self.mark(),
            ));
        }
        self.fetch_value()
    }

    fn fetch_anchor(&mut self, alias: bool) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;
        let tok = self.scan_anchor(alias)?;
        self.push_token(tok);
        Ok(())
    }

    fn fetch_tag(&mut self) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;
        let tok = self.scan_tag()?;
        self.push_token(tok);
        Ok(())
    }

    fn fetch_block_scalar(&mut self, literal: bool) -> ScanResult {
        self.remove_simple_key()?;
        self.simple_key_allowed = true;
        let tok = self.scan_block_scalar(literal)?;
        self.push_token(tok);
        Ok(())
    }

    fn fetch_flow_scalar(&mut self, single: bool) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;
        let tok = self.scan_flow_scalar(single)?;
        self.push_token(tok);
        self.allow_adjacent_value()
    }

    fn fetch_plain_scalar(&mut self) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;
        let tok = self.scan_plain_scalar()?;
        self.push_token(tok);
        Ok(())
    }

    /// After a JSON-like key in a flow collection the `:` may follow without a space,
    /// optionally after some blanks.
    fn allow_adjacent_value(&mut self) -> ScanResult {
        if self.flow_level > 0 {
            let blanks = self.count_blanks()?;
            self.adjacent_value_allowed_at = Some(self.mark().index + blanks);
        }
        Ok(())
    }

    fn scan_to_next_token(&mut self) -> ScanResult {
        loop {
            self.lookahead(1)?;
            if self.mark().column == 0 && is_bom(self.ch()) {
                self.reader.skip_bom();
                self.lookahead(1)?;
            }

            while is_blank(self.ch()) {
                if self.ch() == '\t'
                    && self.flow_level == 0
                    && self.leading_whitespace
                    && self.indent >= 0
                    && !self.rest_of_line_is_empty()?
                {
                    return Err(Error::scanner(
                        "while scanning for the next token",
                        self.mark(),
                        "found a tab character used as indentation",
                        self.mark(),
                    ));
                }
                if self.ch() == '\t'
                    && self.flow_level == 0
                    && self.leading_whitespace
                    && self.indentation_tab.is_none()
                {
                    self.indentation_tab = Some(self.mark());
                }
                self.skip_blank();
                self.lookahead(1)?;
            }

            if self.ch() == '#' {
                while !is_breakz(self.ch()) {
                    self.skip_blank();
                    self.lookahead(1)?;
                }
            }

            if !is_break(self.ch()) {
                return Ok(());
            }
            self.lookahead(2)?;
            self.skip_line();
            if self.flow_level == 0 {
                self.simple_key_allowed = true;
            }
        }
    }

    /// Returns `None` for reserved directives, which are skipped with a warning.
    fn scan_directive(&mut self) -> YamlResult<Option<Token>> {
        let start = self.mark();
        self.skip_non_blank();

        let name = self.scan_directive_name(start)?;
        let tok = match name.as_str() {
            "YAML" => Some(self.scan_version_directive_value(start)?),
            "TAG" => Some(self.scan_tag_directive_value(start)?),
            _ => {
                tracing::warn!(directive = %name, mark = %start, "ignoring reserved directive");
                self.lookahead(1)?;
                while !is_breakz(self.ch()) {
                    self.skip_non_blank();
                    self.lookahead(1)?;
                }
                None
            }
        };

        self.lookahead(1)?;
        while is_blank(self.ch()) {
            self.skip_blank();
            self.lookahead(1)?;
        }
        if self.ch() == '#' {
            while !is_breakz(self.ch()) {
                self.skip_blank();
                self.lookahead(1)?;
            }
        }
        if !is_breakz(self.ch()) {
            return Err(Error::scanner(
                "while scanning a directive",
                start,
                "did not find expected comment or line break",
                self.mark(),
            ));
        }
        if is_break(self.ch()) {
            self.lookahead(2)?;
            self.skip_line();
        }
        Ok(tok)
    }

    fn scan_directive_name(&mut self, start: Mark) -> YamlResult<String> {
        let mut name = String::new();
        self.lookahead(1)?;
        while is_alpha(self.ch()) {
            name.push(self.ch());
            self.skip_non_blank();
            self.lookahead(1)?;
        }
        if name.is_empty() {
            return Err(Error::scanner(
                "while scanning a directive",
                start,
                "could not find expected directive name",
                self.mark(),
            ));
        }
        if !is_blank_or_breakz(self.ch()) {
            return Err(Error::scanner(
                "while scanning a directive",
                start,
                "found unexpected non-alphabetical character",
                self.mark(),
            ));
        }
        Ok(name)
    }

    fn scan_version_directive_value(&mut self, start: Mark) -> YamlResult<Token> {
        self.skip_blanks()?;
        let major = self.scan_version_directive_number(start)?;
        if self.ch() != '.' {
            return Err(Error::scanner(
                "while scanning a %YAML directive",
                start,
                "did not find expected digit or '.' character",
                self.mark(),
            ));
        }
        self.skip_non_blank();
        let minor = self.scan_version_directive_number(start)?;
        Ok(Token::new(
            Span::new(start, self.mark()),
            TokenType::VersionDirective { major, minor },
        ))
    }

    fn scan_version_directive_number(&mut self, start: Mark) -> YamlResult<u8> {
        let mut value: u32 = 0;
        let mut length = 0;
        self.lookahead(1)?;
        while let Some(digit) = self.ch().to_digit(10) {
            length += 1;
            if length > 9 {
                return Err(Error::scanner(
                    "while scanning a %YAML directive",
                    start,
                    "found extremely long version number",
                    self.mark(),
                ));
            }
            value = value * 10 + digit;
            self.skip_non_blank();
            self.lookahead(1)?;
        }
        if length == 0 {
            return Err(Error::scanner(
                "while scanning a %YAML directive",
                start,
                "did not find expected version number",
                self.mark(),
            ));
        }
        u8::try_from(value).map_err(|_| {
            Error::scanner(
                "while scanning a %YAML directive",
                start,
                "found extremely long version number",
                self.mark(),
            )
        })
    }

    fn scan_tag_directive_value(&mut self, start: Mark) -> YamlResult<Token> {
        self.skip_blanks()?;
        let handle = self.scan_tag_handle(true, start)?;
        if !is_blank(self.ch()) {
            return Err(Error::scanner(
                "while scanning a %TAG directive",
                start,
                "did not find expected whitespace",
                self.mark(),
            ));
        }
        self.skip_blanks()?;
        if is_flow(self.ch()) {
            return Err(Error::scanner(
                "while scanning a %TAG directive",
                start,
                "did not find expected tag prefix",
                self.mark(),
            ));
        }
        let prefix = self.scan_tag_uri(true, "", start)?;
        self.lookahead(1)?;
        if !is_blank_or_breakz(self.ch()) {
            return Err(Error::scanner(
                "while scanning a %TAG directive",
                start,
                "did not find expected whitespace or line break",
                self.mark(),
            ));
        }
        Ok(Token::new(
            Span::new(start, self.mark()),
            TokenType::TagDirective { handle, prefix },
        ))
    }

    fn scan_anchor(&mut self, alias: bool) -> YamlResult<Token> {
        let start = self.mark();
        self.skip_non_blank();

        let mut name = String::new();
        self.lookahead(1)?;
        while is_anchor_char(self.ch()) {
            name.push(self.ch());
            self.skip_non_blank();
            self.lookahead(1)?;
        }

        if name.is_empty() {
            let context = if alias {
                "while scanning an alias"
            } else {
                "while scanning an anchor"
            };
            return Err(Error::scanner(
                context,
                start,
                "did not find expected alphabetic or numeric character",
                self.mark(),
            ));
        }

        let token_type = if alias {
            TokenType::Alias(name)
        } else {
            TokenType::Anchor(name)
        };
        Ok(Token::new(Span::new(start, self.mark()), token_type))
    }

    fn scan_tag(&mut self) -> YamlResult<Token> {
        let start = self.mark();
        self.lookahead(2)?;

        let (handle, suffix) = if self.ch_at(1) == '<' {
            // verbatim: `!<tag:yaml.org,2002:str>`
            self.skip_n_non_blank(2);
            let suffix = self.scan_tag_uri(true, "", start)?;
            self.lookahead(1)?;
            if self.ch() != '>' {
                return Err(Error::scanner(
                    "while scanning a tag",
                    start,
                    "did not find the expected '>'",
                    self.mark(),
                ));
            }
            self.skip_non_blank();
            (String::new(), suffix)
        } else {
            let handle = self.scan_tag_handle(false, start)?;
            if handle.len() > 1 && handle.starts_with('!') && handle.ends_with('!') {
                let suffix = self.scan_tag_uri(false, "", start)?;
                (handle, suffix)
            } else {
                // `!local` (or the lone `!`): what looked like a handle is the suffix
                let suffix = self.scan_tag_uri(false, &handle, start)?;
                if suffix.is_empty() {
                    (String::new(), String::from("!"))
                } else {
                    (String::from("!"), suffix)
                }
            }
        };

        self.lookahead(1)?;
        let c = self.ch();
        if !is_blank_or_breakz(c) && !(self.flow_level > 0 && is_flow(c)) {
            return Err(Error::scanner(
                "while scanning a tag",
                start,
                "did not find expected whitespace or line break",
                self.mark(),
            ));
        }

        Ok(Token::new(
            Span::new(start, self.mark()),
            TokenType::Tag { handle, suffix },
        ))
    }

    fn scan_tag_handle(&mut self, directive: bool, start: Mark) -> YamlResult<String> {
        let context = if directive {
            "while scanning a %TAG directive"
        } else {
            "while scanning a tag"
        };
        self.lookahead(1)?;
        if self.ch() != '!' {
            return Err(Error::scanner(
                context,
                start,
                "did not find expected '!'",
                self.mark(),
            ));
        }

        let mut handle = String::from("!");
        self.skip_non_blank();
        self.lookahead(1)?;
        while is_alpha(self.ch()) {
            handle.push(self.ch());
            self.skip_non_blank();
            self.lookahead(1)?;
        }

        if self.ch() == '!' {
            handle.push('!');
            self.skip_non_blank();
            self.lookahead(1)?;
        } else if directive && handle != "!" {
            return Err(Error::scanner(
                context,
                start,
                "did not find expected '!'",
                self.mark(),
            ));
        }
        Ok(handle)
    }

    /// Scans a tag URI or shorthand suffix. `head` is a handle-looking prefix already consumed
    /// that turned out to be part of the suffix; its leading `!` is dropped.
    fn scan_tag_uri(&mut self, uri: bool, head: &str, start: Mark) -> YamlResult<String> {
        let context = "while parsing a tag";
        let mut raw = String::from(head.get(1..).unwrap_or_default());
        let mut length = head.len();

        self.lookahead(1)?;
        loop {
            let c = self.ch();
            let accepted = if uri { is_uri_char(c) } else { is_tag_char(c) };
            if !accepted {
                break;
            }
            if c == '%' {
                self.scan_uri_escape(&mut raw, start)?;
            } else {
                raw.push(c);
                self.skip_non_blank();
            }
            length += 1;
            self.lookahead(1)?;
        }

        if length == 0 {
            return Err(Error::scanner(
                context,
                start,
                "did not find expected tag URI",
                self.mark(),
            ));
        }

        if memchr::memchr(b'%', raw.as_bytes()).is_none() {
            return Ok(raw);
        }
        let decoded = urlencoding::decode_binary(raw.as_bytes());
        String::from_utf8(decoded.into_owned()).map_err(|_| {
            Error::scanner(
                context,
                start,
                "found an incorrect UTF-8 sequence in an escaped URI",
                self.mark(),
            )
        })
    }

    /// Copies a `%XX` escape verbatim after validating it; decoding happens once the whole URI
    /// is known.
    fn scan_uri_escape(&mut self, raw: &mut String, start: Mark) -> ScanResult {
        self.lookahead(3)?;
        if !(is_hex(self.ch_at(1)) && is_hex(self.ch_at(2))) {
            return Err(Error::scanner(
                "while parsing a tag",
                start,
                "did not find URI escaped octet",
                self.mark(),
            ));
        }
        for _ in 0..3 {
            raw.push(self.ch());
            self.skip_non_blank();
        }
        Ok(())
    }

    fn scan_block_scalar(&mut self, literal: bool) -> YamlResult<Token> {
        let start = self.mark();
        let mut chomping = ChompIndicator::Clip;
        let mut increment = 0;

        self.skip_non_blank();
        self.lookahead(1)?;

        if let Some(chomp) = chomp_indicator(self.ch()) {
            chomping = chomp;
            self.skip_non_blank();
            self.lookahead(1)?;
            if self.ch().is_ascii_digit() {
                increment = self.scan_indentation_indicator(start)?;
            }
        } else if self.ch().is_ascii_digit() {
            increment = self.scan_indentation_indicator(start)?;
            self.lookahead(1)?;
            if let Some(chomp) = chomp_indicator(self.ch()) {
                chomping = chomp;
                self.skip_non_blank();
            }
        }

        self.skip_blanks()?;
        if self.ch() == '#' {
            while !is_breakz(self.ch()) {
                self.skip_blank();
                self.lookahead(1)?;
            }
        }
        if !is_breakz(self.ch()) {
            return Err(Error::scanner(
                "while scanning a block scalar",
                start,
                "did not find expected comment or line break",
                self.mark(),
            ));
        }
        if is_break(self.ch()) {
            self.lookahead(2)?;
            self.skip_line();
        }

        let mut end = self.mark();
        let mut indent = 0;
        if increment > 0 {
            indent = if self.indent >= 0 {
                self.indent as usize + increment
            } else {
                increment
            };
        }

        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();

        self.scan_block_scalar_breaks(&mut indent, &mut trailing_breaks, start, &mut end)?;

        self.lookahead(1)?;
        let mut leading_blank = false;
        while self.mark().column == indent && !self.reader.is_eof() {
            let trailing_blank = is_blank(self.ch());
            if !literal && leading_break.starts_with('\n') && !leading_blank && !trailing_blank {
                // folded: a single line break becomes a space
                if trailing_breaks.is_empty() {
                    string.push(' ');
                }
            } else {
                string.push_str(&leading_break);
            }
            leading_break.clear();
            string.push_str(&trailing_breaks);
            trailing_breaks.clear();

            leading_blank = is_blank(self.ch());
            while !is_breakz(self.ch()) {
                string.push(self.ch());
                self.skip_non_blank();
                self.lookahead(1)?;
            }
            end = self.mark();
            if self.reader.is_eof() {
                break;
            }

            self.lookahead(2)?;
            self.read_break(&mut leading_break);
            self.scan_block_scalar_breaks(&mut indent, &mut trailing_breaks, start, &mut end)?;
        }

        if chomping != ChompIndicator::Strip {
            string.push_str(&leading_break);
        }
        if chomping == ChompIndicator::Keep {
            string.push_str(&trailing_breaks);
        }

        let style = if literal {
            ScalarStyle::Literal
        } else {
            ScalarStyle::Folded
        };
        Ok(Token::new(
            Span::new(start, end),
            TokenType::Scalar {
                style,
                value: string,
            },
        ))
    }

    fn scan_indentation_indicator(&mut self, start: Mark) -> YamlResult<usize> {
        let c = self.ch();
        if c == '0' {
            return Err(Error::scanner(
                "while scanning a block scalar",
                start,
                "found an indentation indicator equal to 0",
                self.mark(),
            ));
        }
        self.skip_non_blank();
        Ok(c.to_digit(10).unwrap_or(1) as usize)
    }

    /// Eats indentation and empty lines. A zero `indent` is auto-detected from the first
    /// non-empty line.
    fn scan_block_scalar_breaks(
        &mut self,
        indent: &mut usize,
        breaks: &mut String,
        start: Mark,
        end: &mut Mark,
    ) -> ScanResult {
        let mut max_indent = 0;
        *end = self.mark();

        loop {
            self.lookahead(1)?;
            while (*indent == 0 || self.mark().column < *indent) && self.ch() == ' ' {
                self.skip_blank();
                self.lookahead(1)?;
            }
            max_indent = max_indent.max(self.mark().column);

            if (*indent == 0 || self.mark().column < *indent) && self.ch() == '\t' {
                return Err(Error::scanner(
                    "while scanning a block scalar",
                    start,
                    "found a tab character where an indentation space is expected",
                    self.mark(),
                ));
            }

            if !is_break(self.ch()) {
                break;
            }
            self.lookahead(2)?;
            self.read_break(breaks);
            *end = self.mark();
        }

        if *indent == 0 {
            let parent = (self.indent + 1) as usize;
            *indent = max_indent.max(parent).max(1);
        }
        Ok(())
    }

    fn scan_flow_scalar(&mut self, single: bool) -> YamlResult<Token> {
        let start = self.mark();
        let quote = if single { '\'' } else { '"' };

        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();
        let mut whitespaces = String::new();

        self.skip_non_blank();

        loop {
            self.lookahead(4)?;
            if self.mark().column == 0
                && (self.next_is_document_indicator('-') || self.next_is_document_indicator('.'))
            {
                return Err(Error::scanner(
                    "while scanning a quoted scalar",
                    start,
                    "found unexpected document indicator",
                    self.mark(),
                ));
            }
            if self.reader.is_eof() {
                return Err(Error::scanner(
                    "while scanning a quoted scalar",
                    start,
                    "found unexpected end of stream",
                    self.mark(),
                ));
            }

            let mut leading_blanks = false;
            self.lookahead(2)?;
            while !is_blank_or_breakz(self.ch()) {
                let c = self.ch();
                if single && c == '\'' && self.ch_at(1) == '\'' {
                    string.push('\'');
                    self.skip_n_non_blank(2);
                } else if c == quote {
                    break;
                } else if !single && c == '\\' && is_break(self.ch_at(1)) {
                    self.lookahead(3)?;
                    self.skip_non_blank();
                    self.skip_line();
                    leading_blanks = true;
                    break;
                } else if !single && c == '\\' {
                    let escaped = self.scan_escape_sequence(start)?;
                    string.push(escaped);
                } else {
                    string.push(c);
                    self.skip_non_blank();
                }
                self.lookahead(2)?;
            }

            self.lookahead(1)?;
            if self.ch() == quote {
                break;
            }

            while is_blank_or_break(self.ch()) {
                if is_blank(self.ch()) {
                    if !leading_blanks {
                        whitespaces.push(self.ch());
                    }
                    self.skip_blank();
                } else {
                    self.lookahead(2)?;
                    if leading_blanks {
                        self.read_break(&mut trailing_breaks);
                    } else {
                        whitespaces.clear();
                        self.read_break(&mut leading_break);
                        leading_blanks = true;
                    }
                }
                self.lookahead(1)?;
            }

            if leading_blanks
                && self.flow_level == 0
                && !self.reader.is_eof()
                && self.mark().column as isize <= self.indent
            {
                return Err(Error::scanner(
                    "while scanning a quoted scalar",
                    start,
                    "found a continuation line that is not indented enough",
                    self.mark(),
                ));
            }

            if leading_blanks {
                fold_breaks(&mut string, &mut leading_break, &mut trailing_breaks);
            } else {
                string.push_str(&whitespaces);
                whitespaces.clear();
            }
        }

        self.skip_non_blank();
        let end = self.mark();

        // only a comment, a line break, a value indicator or a flow indicator may follow
        let blanks = self.skip_blanks()?;
        let next = self.ch();
        let trailing_ok = is_breakz(next)
            || (blanks > 0 && next == '#')
            || next == ':'
            || (self.flow_level > 0 && matches!(next, ',' | ']' | '}'));
        if !trailing_ok {
            return Err(Error::scanner(
                "while scanning a quoted scalar",
                start,
                "found unexpected content after the closing quote",
                self.mark(),
            ));
        }

        let style = if single {
            ScalarStyle::SingleQuoted
        } else {
            ScalarStyle::DoubleQuoted
        };
        Ok(Token::new(
            Span::new(start, end),
            TokenType::Scalar {
                style,
                value: string,
            },
        ))
    }

    /// Decodes the escape sequence starting at the current `\`.
    fn scan_escape_sequence(&mut self, start: Mark) -> YamlResult<char> {
        let mut code_length = 0;
        let escaped = match self.ch_at(1) {
            '0' => '\0',
            'a' => '\x07',
            'b' => '\x08',
            't' | '\t' => '\t',
            'n' => '\n',
            'v' => '\x0B',
            'f' => '\x0C',
            'r' => '\r',
            'e' => '\x1B',
            ' ' => ' ',
            '"' => '"',
            '/' => '/',
            '\'' => '\'',
            '\\' => '\\',
            'N' => '\u{85}',
            '_' => '\u{A0}',
            'L' => '\u{2028}',
            'P' => '\u{2029}',
            'x' => {
                code_length = 2;
                '\0'
            }
            'u' => {
                code_length = 4;
                '\0'
            }
            'U' => {
                code_length = 8;
                '\0'
            }
            _ => {
                return Err(Error::scanner(
                    "while parsing a quoted scalar",
                    start,
                    "found unknown escape character",
                    self.mark(),
                ));
            }
        };
        self.skip_n_non_blank(2);
        if code_length == 0 {
            return Ok(escaped);
        }

        self.lookahead(code_length)?;
        let mut value = 0u32;
        for i in 0..code_length {
            let c = self.ch_at(i);
            if !is_hex(c) {
                return Err(Error::scanner(
                    "while parsing a quoted scalar",
                    start,
                    "did not find expected hexadecimal number",
                    self.mark(),
                ));
            }
            value = (value << 4) + as_hex(c);
        }
        let Some(ch) = char::from_u32(value) else {
            return Err(Error::scanner(
                "while parsing a quoted scalar",
                start,
                "found invalid Unicode character escape code",
                self.mark(),
            ));
        };
        self.skip_n_non_blank(code_length);
        Ok(ch)
    }

    fn scan_plain_scalar(&mut self) -> YamlResult<Token> {
        let start = self.mark();
        let mut end = start;
        let indent = self.indent + 1;

        if self.flow_level > 0 && self.ch() == '-' && is_flow(self.ch_at(1)) {
            return Err(Error::scanner(
                "while scanning a plain scalar",
                start,
                "found '-' followed by a flow indicator",
                self.mark(),
            ));
        }

        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();
        let mut whitespaces = String::new();
        let mut leading_blanks = false;

        loop {
            self.lookahead(4)?;
            if self.mark().column == 0
                && (self.next_is_document_indicator('-') || self.next_is_document_indicator('.'))
            {
                break;
            }
            if self.ch() == '#' {
                break;
            }

            while !is_blank_or_breakz(self.ch()) {
                let c = self.ch();
                let nc = self.ch_at(1);
                if c == ':' && (is_blank_or_breakz(nc) || (self.flow_level > 0 && is_flow(nc))) {
                    break;
                }
                if self.flow_level > 0 && is_flow(c) {
                    break;
                }

                if leading_blanks {
                    fold_breaks(&mut string, &mut leading_break, &mut trailing_breaks);
                    leading_blanks = false;
                } else if !whitespaces.is_empty() {
                    string.push_str(&whitespaces);
                    whitespaces.clear();
                }

                string.push(c);
                self.skip_non_blank();
                end = self.mark();
                self.lookahead(2)?;
            }

            if !is_blank_or_break(self.ch()) {
                break;
            }

            self.lookahead(1)?;
            while is_blank_or_break(self.ch()) {
                if is_blank(self.ch()) {
                    if leading_blanks
                        && (self.mark().column as isize) < indent
                        && self.ch() == '\t'
                    {
                        return Err(Error::scanner(
                            "while scanning a plain scalar",
                            start,
                            "found a tab character that violates indentation",
                            self.mark(),
                        ));
                    }
                    if !leading_blanks {
                        whitespaces.push(self.ch());
                    }
                    self.skip_blank();
                } else {
                    self.lookahead(2)?;
                    if leading_blanks {
                        self.read_break(&mut trailing_breaks);
                    } else {
                        whitespaces.clear();
                        self.read_break(&mut leading_break);
                        leading_blanks = true;
                    }
                }
                self.lookahead(1)?;
            }

            if self.flow_level == 0 && (self.mark().column as isize) < indent {
                break;
            }
        }

        if leading_blanks {
            self.simple_key_allowed = true;
        }

        if string.is_empty() {
            return Err(Error::scanner(
                "while scanning a plain scalar",
                start,
                "found unexpected end of plain scalar",
                self.mark(),
            ));
        }

        Ok(Token::new(
            Span::new(start, end),
            TokenType::Scalar {
                style: ScalarStyle::Plain,
                value: string,
            },
        ))
    }

    fn unroll_indent(&mut self, column: isize) {
        if self.flow_level > 0 {
            return;
        }
        while self.indent > column {
            self.push_token(Token::new(Span::empty(self.mark()), BlockEnd));
            self.indent = self.indents.pop().unwrap_or(-1);
        }
    }

    /// Opens a block collection at `column` if it is deeper than the current indentation.
    /// `number` places the start token before an already queued token.
    fn roll_indent(
        &mut self,
        column: isize,
        number: Option<usize>,
        token_type: TokenType,
        mark: Mark,
    ) {
        if self.flow_level > 0 || self.indent >= column {
            return;
        }
        self.indents.push(self.indent);
        self.indent = column;
        let tok = Token::new(Span::empty(mark), token_type);
        match number {
            Some(n) => self.insert_token(n - self.tokens_parsed, tok),
            None => self.push_token(tok),
        }
    }

    fn increase_flow_level(&mut self) {
        self.simple_keys.push(SimpleKey::default());
        self.flow_level += 1;
    }

    fn decrease_flow_level(&mut self) {
        if self.flow_level > 0 {
            self.flow_level -= 1;
            self.simple_keys.pop();
        }
    }

    fn stale_simple_keys(&mut self) -> ScanResult {
        let mark = self.mark();
        let block = self.flow_level == 0;
        let max_lines = self.config.simple_key_max_lines;
        let max_length = self.config.simple_key_max_length;
        for sk in &mut self.simple_keys {
            let stale = (block && sk.mark.line + max_lines < mark.line)
                || sk.mark.index + max_length < mark.index;
            if sk.possible && stale {
                if sk.required {
                    return Err(Error::scanner(
                        "while scanning a simple key",
                        sk.mark,
                        "could not find expected ':'",
                        mark,
                    ));
                }
                sk.possible = false;
            }
        }
        Ok(())
    }

    fn save_simple_key(&mut self) -> ScanResult {
        let mark = self.mark();
        let required = self.flow_level == 0 && self.indent == mark.column as isize;
        if self.simple_key_allowed {
            let sk = SimpleKey {
                possible: true,
                required,
                token_number: self.tokens_parsed + self.tokens.len(),
                mark,
                indentation_tab: self.leading_tab(),
            };
            self.remove_simple_key()?;
            if let Some(last) = self.simple_keys.last_mut() {
                *last = sk;
            }
        }
        Ok(())
    }

    fn remove_simple_key(&mut self) -> ScanResult {
        let mark = self.mark();
        if let Some(last) = self.simple_keys.last_mut() {
            if last.possible && last.required {
                return Err(Error::scanner(
                    "while scanning a simple key",
                    last.mark,
                    "could not find expected ':'",
                    mark,
                ));
            }
            last.possible = false;
        }
        Ok(())
    }

    fn push_token(&mut self, tok: Token) {
        tracing::trace!(token = tok.token_type.name(), start = %tok.span.start, "queued token");
        self.tokens.push_back(tok);
    }

    fn insert_token(&mut self, pos: usize, tok: Token) {
        tracing::trace!(token = tok.token_type.name(), start = %tok.span.start, pos, "inserted token");
        let pos = pos.min(self.tokens.len());
        self.tokens.insert(pos, tok);
    }

    fn error_at(&self, context: &'static str, problem: &'static str) -> Error {
        Error::scanner(context, self.mark(), problem, self.mark())
    }

    #[inline]
    fn lookahead(&mut self, n: usize) -> ScanResult {
        self.reader.lookahead(n)
    }

    #[inline]
    fn ch(&self) -> char {
        self.reader.ch()
    }

    #[inline]
    fn ch_at(&self, n: usize) -> char {
        self.reader.ch_at(n)
    }

    fn skip_blank(&mut self) {
        self.reader.skip();
    }

    fn skip_non_blank(&mut self) {
        self.reader.skip();
        self.leading_whitespace = false;
    }

    fn skip_n_non_blank(&mut self, count: usize) {
        for _ in 0..count {
            self.reader.skip();
        }
        self.leading_whitespace = false;
    }

    fn skip_line(&mut self) {
        self.reader.skip_line();
        self.leading_whitespace = true;
        self.indentation_tab = None;
    }

    /// The indentation tab of the current line, if the next token is the first one on it.
    fn leading_tab(&self) -> Option<Mark> {
        if self.leading_whitespace {
            self.indentation_tab
        } else {
            None
        }
    }

    /// Block collections cannot be indented with tabs, even at the top level.
    fn check_indentation_tab(&self, context: &'static str, tab: Option<Mark>) -> ScanResult {
        match tab {
            Some(mark) => Err(Error::scanner(
                context,
                mark,
                "found a tab character used as indentation",
                mark,
            )),
            None => Ok(()),
        }
    }

    /// Consumes blanks and returns how many there were.
    fn skip_blanks(&mut self) -> YamlResult<usize> {
        let mut count = 0;
        self.lookahead(1)?;
        while is_blank(self.ch()) {
            self.skip_blank();
            count += 1;
            self.lookahead(1)?;
        }
        Ok(count)
    }

    /// Pushes a normalized line break to `s` and consumes it. `\r`, `\n`, `\r\n` and NEL all
    /// become `\n`, the Unicode separators are kept.
    fn read_break(&mut self, s: &mut String) {
        match self.ch() {
            '\r' | '\n' | '\u{85}' => s.push('\n'),
            c => s.push(c),
        }
        self.skip_line();
    }

    /// Needs a look-ahead of 4.
    fn next_is_document_indicator(&self, c: char) -> bool {
        self.ch() == c && self.ch_at(1) == c && self.ch_at(2) == c && is_blank_or_breakz(self.ch_at(3))
    }

    /// Number of blanks ahead, without consuming them.
    fn count_blanks(&mut self) -> YamlResult<usize> {
        let mut n = 0;
        loop {
            self.lookahead(n + 1)?;
            if !is_blank(self.ch_at(n)) {
                return Ok(n);
            }
            n += 1;
        }
    }

    /// Whether only blanks, possibly followed by a comment, remain on the current line.
    fn rest_of_line_is_empty(&mut self) -> YamlResult<bool> {
        let n = self.count_blanks()?;
        let c = self.ch_at(n);
        Ok(is_breakz(c) || c == '#')
    }
}

impl<S: Source> Iterator for Scanner<S> {
    type Item = YamlResult<Token>;

    /// Yields tokens up to and including `STREAM-END`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.stream_end_produced && self.tokens.is_empty() || self.error.is_some() {
            return None;
        }
        Some(self.next_token())
    }
}

fn chomp_indicator(c: char) -> Option<ChompIndicator> {
    match c {
        '+' => Some(ChompIndicator::Keep),
        '-' => Some(ChompIndicator::Strip),
        _ => None,
    }
}

/// Joins the breaks that ended one line of a multi-line flow or plain scalar with the next line.
fn fold_breaks(string: &mut String, leading_break: &mut String, trailing_breaks: &mut String) {
    if leading_break.starts_with('\n') {
        if trailing_breaks.is_empty() {
            string.push(' ');
        } else {
            string.push_str(trailing_breaks);
        }
    } else {
        string.push_str(leading_break);
        string.push_str(trailing_breaks);
    }
    leading_break.clear();
    trailing_breaks.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::source::StrSource;
    use alloc::vec;
    use pretty_assertions::assert_eq;
    use yamlet_common::TokenType::*;
    use yamlet_common::{Encoding, ErrorKind};

    fn scan(input: &str) -> YamlResult<Vec<TokenType>> {
        Scanner::new(StrSource::new(input), ParserConfig::default())
            .map(|tok| tok.map(|t| t.token_type))
            .collect()
    }

    fn plain(value: &str) -> TokenType {
        Scalar {
            style: ScalarStyle::Plain,
            value: value.into(),
        }
    }

    #[test]
    fn simple_mapping() {
        assert_eq!(
            scan("a: b").unwrap(),
            vec![
                StreamStart(Encoding::Utf8),
                BlockMappingStart,
                Key,
                plain("a"),
                Value,
                plain("b"),
                BlockEnd,
                StreamEnd,
            ]
        );
    }

    #[test]
    fn block_sequence_single_end() {
        let tokens = scan("- a\n- b\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                StreamStart(Encoding::Utf8),
                BlockSequenceStart,
                BlockEntry,
                plain("a"),
                BlockEntry,
                plain("b"),
                BlockEnd,
                StreamEnd,
            ]
        );
    }

    #[test]
    fn flow_sequence_with_colon_scalar() {
        assert_eq!(
            scan("[a:b, c]").unwrap(),
            vec![
                StreamStart(Encoding::Utf8),
                FlowSequenceStart,
                plain("a:b"),
                FlowEntry,
                plain("c"),
                FlowSequenceEnd,
                StreamEnd,
            ]
        );
    }

    #[test]
    fn json_like_adjacent_value() {
        assert_eq!(
            scan(r#"{"a":b}"#).unwrap(),
            vec![
                StreamStart(Encoding::Utf8),
                FlowMappingStart,
                Key,
                Scalar {
                    style: ScalarStyle::DoubleQuoted,
                    value: "a".into()
                },
                Value,
                plain("b"),
                FlowMappingEnd,
                StreamEnd,
            ]
        );
    }

    #[test]
    fn adjacent_value_is_flow_only() {
        let tokens = scan(r#""a":b"#).unwrap();
        assert!(!tokens.contains(&Value), "{tokens:?}");
        assert_eq!(tokens[2], plain(":b"));
    }

    #[test]
    fn nested_dedent_emits_all_block_ends() {
        let tokens = scan("a:\n  b:\n    c: d\ne: f").unwrap();
        let ends_before_e = tokens
            .iter()
            .take_while(|t| **t != plain("e"))
            .filter(|t| **t == BlockEnd)
            .count();
        assert_eq!(ends_before_e, 2);
    }

    #[test]
    fn directives_and_tags() {
        let tokens = scan("%YAML 1.2\n%TAG !e! tag:example.com,2000:\n--- !e!foo%21 x").unwrap();
        assert_eq!(
            tokens,
            vec![
                StreamStart(Encoding::Utf8),
                VersionDirective { major: 1, minor: 2 },
                TagDirective {
                    handle: "!e!".into(),
                    prefix: "tag:example.com,2000:".into()
                },
                DocumentStart,
                Tag {
                    handle: "!e!".into(),
                    suffix: "foo!".into()
                },
                plain("x"),
                StreamEnd,
            ]
        );
    }

    #[test]
    fn reserved_directive_is_skipped() {
        let tokens = scan("%FOO bar baz\n--- x").unwrap();
        assert_eq!(tokens[1], DocumentStart);
    }

    #[test]
    fn tag_shapes() {
        let tokens = scan("- !<tag:x> a\n- ! b\n- !local c\n- !!str d").unwrap();
        let tags: Vec<_> = tokens
            .into_iter()
            .filter(|t| matches!(t, Tag { .. }))
            .collect();
        assert_eq!(
            tags,
            vec![
                Tag {
                    handle: "".into(),
                    suffix: "tag:x".into()
                },
                Tag {
                    handle: "".into(),
                    suffix: "!".into()
                },
                Tag {
                    handle: "!".into(),
                    suffix: "local".into()
                },
                Tag {
                    handle: "!!".into(),
                    suffix: "str".into()
                },
            ]
        );
    }

    #[test]
    fn block_scalars() {
        let tokens = scan("a: |\n  one\n  two\n\nb: >-\n  folded\n  text\n\n").unwrap();
        let scalars: Vec<_> = tokens
            .into_iter()
            .filter_map(|t| match t {
                Scalar { style, value } if style != ScalarStyle::Plain => Some(value),
                _ => None,
            })
            .collect();
        assert_eq!(scalars, vec!["one\ntwo\n", "folded text"]);
    }

    #[test]
    fn keep_chomping_and_indent_indicator() {
        let tokens = scan("--- |2+\n   x\n\n").unwrap();
        assert!(tokens.contains(&Scalar {
            style: ScalarStyle::Literal,
            value: " x\n\n".into()
        }));
    }

    #[test]
    fn double_quoted_escapes() {
        let tokens = scan(r#""a\tb\x41\u263A\
  c""#)
        .unwrap();
        assert_eq!(
            tokens[1],
            Scalar {
                style: ScalarStyle::DoubleQuoted,
                value: "a\tbA\u{263A}c".into()
            }
        );
    }

    #[test]
    fn single_quoted_folding() {
        let tokens = scan("'it''s\n  folded\n\n  twice'").unwrap();
        assert_eq!(
            tokens[1],
            Scalar {
                style: ScalarStyle::SingleQuoted,
                value: "it's folded\ntwice".into()
            }
        );
    }

    #[test]
    fn plain_multiline_folding() {
        let tokens = scan("a\n b\n\n c").unwrap();
        assert_eq!(tokens[1], plain("a b\nc"));
    }

    #[test]
    fn tab_indentation_error_mark() {
        let err = scan("a:\n\tb: c").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Scanner);
        assert_eq!((err.problem_mark.line, err.problem_mark.column), (1, 0));
    }

    #[test]
    fn tab_on_blank_line_is_fine() {
        assert!(scan("a:\n\t\n  b").is_ok());
    }

    #[test]
    fn top_level_tab_indentation() {
        let err = scan("\t\t- a\n  - b\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Scanner);
        assert_eq!(err.context.as_deref(), Some("while scanning a block entry"));
        assert_eq!((err.problem_mark.line, err.problem_mark.column), (0, 0));

        let err = scan("\ta: b\n").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while scanning a simple key"));
        assert_eq!((err.problem_mark.line, err.problem_mark.column), (0, 0));

        let err = scan("  \t? a\n").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while scanning a mapping key"));
        assert_eq!(err.problem_mark.column, 2);

        assert!(scan("\t- a\n").is_err());
        assert!(scan("\t[a]: b\n").is_err());
    }

    #[test]
    fn top_level_tab_before_flow_or_comment() {
        assert!(scan("\t{}\n").is_ok());
        assert!(scan("\t[a, b]\n").is_ok());
        assert!(scan("\t# note\na: b\n").is_ok());
        assert!(scan("\tplain\n").is_ok());
    }

    #[test]
    fn block_indicator_errors_name_the_construct() {
        let err = scan("[- a]").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while scanning a block entry"));
        assert_eq!(err.context_mark, Some(err.problem_mark));

        let err = scan("a: b: c").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while scanning a mapping value"));
        assert_eq!(err.problem_mark.column, 4);
    }

    #[test]
    fn unterminated_quote() {
        let err = scan("'abc").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while scanning a quoted scalar"));
        assert_eq!(err.context_mark, Some(Mark::default()));
        assert_eq!(err.problem_mark.index, 4);
    }

    #[test]
    fn required_simple_key_goes_stale() {
        let err = scan("a: 1\nb\nc: 2").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Scanner);
        assert_eq!(err.problem.as_ref(), "could not find expected ':'");
    }

    #[test]
    fn simple_key_length_is_configurable() {
        let config = ParserConfig::default().with_simple_key_max_length(3);
        let err = Scanner::new(StrSource::new("- abcdef: x"), config)
            .collect::<YamlResult<Vec<_>>>()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Scanner);
    }

    #[test]
    fn invalid_token_start() {
        let err = scan("@foo").unwrap_err();
        assert_eq!(err.problem.as_ref(), "found character that cannot start any token");
    }

    #[test]
    fn stream_end_is_sticky() {
        let mut scanner = Scanner::new(StrSource::new(""), ParserConfig::default());
        assert!(matches!(scanner.next_token().unwrap().token_type, StreamStart(_)));
        assert_eq!(scanner.next_token().unwrap().token_type, StreamEnd);
        assert_eq!(scanner.next_token().unwrap().token_type, StreamEnd);
        assert_eq!(scanner.peek_token().unwrap().token_type, StreamEnd);
    }

    #[test]
    fn anchors_and_aliases() {
        let tokens = scan("[&x a, *x]").unwrap();
        assert!(tokens.contains(&Anchor("x".into())));
        assert!(tokens.contains(&Alias("x".into())));
    }
}
