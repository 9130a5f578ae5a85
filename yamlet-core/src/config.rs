use yamlet_common::Encoding;

/// Knobs for a parsing session.
///
/// ```
/// use yamlet_core::ParserConfig;
///
/// let config = ParserConfig::default()
///     .with_simple_key_max_length(128)
///     .with_read_chunk_size(4096);
/// assert_eq!(config.simple_key_max_lines, 0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Forces the input encoding. `None` sniffs the byte order mark and falls back to UTF-8.
    pub encoding: Option<Encoding>,
    /// Characters a simple key may span before the scanner stops waiting for its `:`.
    pub simple_key_max_length: usize,
    /// Additional lines a simple key in block context may span.
    pub simple_key_max_lines: usize,
    /// Bytes requested from the source on each read.
    pub read_chunk_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            encoding: None,
            simple_key_max_length: 1024,
            simple_key_max_lines: 0,
            read_chunk_size: 16 * 1024,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    #[must_use]
    pub fn with_simple_key_max_length(mut self, length: usize) -> Self {
        self.simple_key_max_length = length;
        self
    }

    #[must_use]
    pub fn with_simple_key_max_lines(mut self, lines: usize) -> Self {
        self.simple_key_max_lines = lines;
        self
    }

    #[must_use]
    pub fn with_read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = size;
        self
    }

    pub(crate) fn reader_encoding(&self) -> Encoding {
        self.encoding.unwrap_or(Encoding::Any)
    }
}
