use alloc::collections::VecDeque;
use alloc::format;
use alloc::vec::Vec;

use yamlet_common::{Encoding, Error, Mark, ScanResult, YamlResult};

use crate::tokenizer::char_utils::{is_break, is_printable, EOF};
use crate::tokenizer::source::Source;

/// Outcome of decoding a single character from the raw buffer.
enum Decoded {
    Char(char, usize),
    NeedMore,
}

/// Decodes a byte [`Source`] into characters and keeps track of the current [`Mark`].
///
/// The scanner asks for look-ahead with [`Reader::lookahead`] before peeking with
/// [`Reader::ch`] / [`Reader::ch_at`]. Past the end of the input the reader answers with `'\0'`,
/// which the YAML character set never lets through, so it doubles as an end marker.
pub struct Reader<S> {
    src: S,
    raw: Vec<u8>,
    raw_pos: usize,
    eof: bool,
    chunk_size: usize,
    encoding: Encoding,
    encoding_detected: bool,
    chars: VecDeque<(char, usize)>,
    mark: Mark,
    /// Position of the next character to decode, used to locate decoding errors.
    decode_mark: Mark,
    decode_after_cr: bool,
    error: Option<Error>,
}

impl<S: Source> Reader<S> {
    pub fn new(src: S, encoding: Encoding, chunk_size: usize) -> Reader<S> {
        Reader {
            src,
            raw: Vec::new(),
            raw_pos: 0,
            eof: false,
            chunk_size: chunk_size.max(4),
            encoding,
            encoding_detected: encoding != Encoding::Any,
            chars: VecDeque::new(),
            mark: Mark::default(),
            decode_mark: Mark::default(),
            decode_after_cr: false,
            error: None,
        }
    }

    /// Returns the stream encoding, sniffing the byte order mark if it wasn't set explicitly.
    pub fn encoding(&mut self) -> YamlResult<Encoding> {
        self.determine_encoding()?;
        Ok(self.encoding)
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Makes sure at least `n` characters are decoded, unless the input ends first.
    pub fn lookahead(&mut self, n: usize) -> ScanResult {
        if self.chars.len() >= n {
            return Ok(());
        }
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let res = self.fill_chars(n);
        if let Err(err) = &res {
            self.error = Some(err.clone());
        }
        res
    }

    #[inline]
    pub fn ch(&self) -> char {
        self.ch_at(0)
    }

    #[inline]
    pub fn ch_at(&self, n: usize) -> char {
        self.chars.get(n).map_or(EOF, |&(c, _)| c)
    }

    /// Whether everything was consumed. Only meaningful after a `lookahead(1)`.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.chars.is_empty()
    }

    /// Consumes one character that is not a line break.
    pub fn skip(&mut self) {
        if let Some((_, width)) = self.chars.pop_front() {
            self.mark.index += 1;
            self.mark.column += 1;
            self.mark.offset += width;
        }
    }

    /// Consumes a byte order mark found inside the stream. It takes no column.
    pub fn skip_bom(&mut self) {
        if let Some((_, width)) = self.chars.pop_front() {
            self.mark.index += 1;
            self.mark.offset += width;
        }
    }

    /// Consumes a line break, treating `\r\n` as one break.
    pub fn skip_line(&mut self) {
        if self.ch() == '\r' && self.ch_at(1) == '\n' {
            for _ in 0..2 {
                if let Some((_, width)) = self.chars.pop_front() {
                    self.mark.offset += width;
                }
            }
            self.mark.index += 2;
            self.mark.column = 0;
            self.mark.line += 1;
        } else if is_break(self.ch()) {
            if let Some((_, width)) = self.chars.pop_front() {
                self.mark.offset += width;
            }
            self.mark.index += 1;
            self.mark.column = 0;
            self.mark.line += 1;
        }
    }

    fn fill_chars(&mut self, n: usize) -> ScanResult {
        self.determine_encoding()?;
        while self.chars.len() < n {
            match self.decode_next()? {
                Decoded::Char(ch, width) => self.push_char(ch, width)?,
                Decoded::NeedMore if self.eof => break,
                Decoded::NeedMore => self.fill_raw()?,
            }
        }
        Ok(())
    }

    fn push_char(&mut self, ch: char, width: usize) -> ScanResult {
        if !is_printable(ch) {
            return Err(Error::reader(
                format!("control characters are not allowed (#x{:X})", ch as u32),
                self.decode_mark,
            ));
        }
        self.raw_pos += width;
        self.chars.push_back((ch, width));

        self.decode_mark.offset += width;
        self.decode_mark.index += 1;
        if ch == '\n' && self.decode_after_cr {
            // second half of a `\r\n` pair, already counted
        } else if is_break(ch) {
            self.decode_mark.line += 1;
            self.decode_mark.column = 0;
        } else {
            self.decode_mark.column += 1;
        }
        self.decode_after_cr = ch == '\r';
        Ok(())
    }

    fn fill_raw(&mut self) -> ScanResult {
        if self.eof {
            return Ok(());
        }
        if self.raw_pos > 0 {
            self.raw.drain(..self.raw_pos);
            self.raw_pos = 0;
        }
        let len = self.raw.len();
        self.raw
            .try_reserve(self.chunk_size)
            .map_err(|_| Error::memory("cannot grow the input buffer", self.decode_mark))?;
        self.raw.resize(len + self.chunk_size, 0);
        let read = self.src.read(&mut self.raw[len..]);
        match read {
            Ok(n) => {
                self.raw.truncate(len + n);
                if n == 0 {
                    self.eof = true;
                }
                Ok(())
            }
            Err(e) => {
                self.raw.truncate(len);
                Err(Error::reader(format!("input error: {e}"), self.decode_mark))
            }
        }
    }

    fn determine_encoding(&mut self) -> ScanResult {
        if self.encoding_detected {
            return Ok(());
        }
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        while self.raw.len() - self.raw_pos < 3 && !self.eof {
            if let Err(err) = self.fill_raw() {
                self.error = Some(err.clone());
                return Err(err);
            }
        }
        let head = &self.raw[self.raw_pos..];
        let (encoding, bom_len) = if head.starts_with(&[0xFF, 0xFE]) {
            (Encoding::Utf16Le, 2)
        } else if head.starts_with(&[0xFE, 0xFF]) {
            (Encoding::Utf16Be, 2)
        } else if head.starts_with(&[0xEF, 0xBB, 0xBF]) {
            (Encoding::Utf8, 3)
        } else {
            (Encoding::Utf8, 0)
        };
        self.raw_pos += bom_len;
        self.mark.offset += bom_len;
        self.decode_mark.offset += bom_len;
        self.encoding = encoding;
        self.encoding_detected = true;
        tracing::debug!(%encoding, bom = bom_len > 0, "detected input encoding");
        Ok(())
    }

    fn decode_next(&self) -> YamlResult<Decoded> {
        let bytes = &self.raw[self.raw_pos..];
        match self.encoding {
            Encoding::Utf16Le => self.decode_utf16(bytes, u16::from_le_bytes),
            Encoding::Utf16Be => self.decode_utf16(bytes, u16::from_be_bytes),
            Encoding::Utf8 | Encoding::Any => self.decode_utf8(bytes),
        }
    }

    fn decode_utf8(&self, bytes: &[u8]) -> YamlResult<Decoded> {
        let Some(&lead) = bytes.first() else {
            return Ok(Decoded::NeedMore);
        };
        let (width, init) = match lead {
            0x00..=0x7F => return Ok(Decoded::Char(lead as char, 1)),
            0xC0..=0xDF => (2, u32::from(lead & 0x1F)),
            0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
            0xF0..=0xF7 => (4, u32::from(lead & 0x07)),
            _ => {
                return Err(self.decode_error("invalid leading UTF-8 octet", lead));
            }
        };
        if bytes.len() < width {
            return if self.eof {
                Err(self.decode_error("incomplete UTF-8 octet sequence", lead))
            } else {
                Ok(Decoded::NeedMore)
            };
        }
        let mut value = init;
        for &byte in &bytes[1..width] {
            if byte & 0xC0 != 0x80 {
                return Err(self.decode_error("invalid trailing UTF-8 octet", byte));
            }
            value = (value << 6) | u32::from(byte & 0x3F);
        }
        let shortest = match width {
            2 => value >= 0x80,
            3 => value >= 0x800,
            _ => value >= 0x1_0000,
        };
        if !shortest {
            return Err(self.decode_error("invalid length of a UTF-8 sequence", lead));
        }
        match char::from_u32(value) {
            Some(ch) => Ok(Decoded::Char(ch, width)),
            None => Err(self.decode_error("invalid Unicode character", lead)),
        }
    }

    fn decode_utf16(&self, bytes: &[u8], unit: fn([u8; 2]) -> u16) -> YamlResult<Decoded> {
        if bytes.len() < 2 {
            return match (bytes.first(), self.eof) {
                (None, _) | (_, false) => Ok(Decoded::NeedMore),
                (Some(&b), true) => Err(self.decode_error("incomplete UTF-16 character", b)),
            };
        }
        let first = unit([bytes[0], bytes[1]]);
        match first {
            0xDC00..=0xDFFF => Err(self.decode_error("unexpected low surrogate area", bytes[0])),
            0xD800..=0xDBFF => {
                if bytes.len() < 4 {
                    return if self.eof {
                        Err(self.decode_error("incomplete UTF-16 surrogate pair", bytes[0]))
                    } else {
                        Ok(Decoded::NeedMore)
                    };
                }
                let second = unit([bytes[2], bytes[3]]);
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(self.decode_error("expected low surrogate area", bytes[2]));
                }
                let value =
                    0x1_0000 + ((u32::from(first) & 0x3FF) << 10) + (u32::from(second) & 0x3FF);
                char::from_u32(value)
                    .map(|ch| Decoded::Char(ch, 4))
                    .ok_or_else(|| self.decode_error("invalid Unicode character", bytes[0]))
            }
            _ => char::from_u32(u32::from(first))
                .map(|ch| Decoded::Char(ch, 2))
                .ok_or_else(|| self.decode_error("invalid Unicode character", bytes[0])),
        }
    }

    fn decode_error(&self, problem: &'static str, value: u8) -> Error {
        Error::reader(format!("{problem} (#x{value:02X})"), self.decode_mark)
    }
}
