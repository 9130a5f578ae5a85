extern crate alloc;

pub use config::ParserConfig;
pub use tokenizer::{Parser, ReadSource, Reader, Scanner, Source, StrSource};
pub use yamlet_common::{Error, ErrorKind, Event, EventType, Mark, Span, Token, TokenType, YamlResult};

mod config;
pub mod tokenizer;

/// Version of this crate as a `MAJOR.MINOR.PATCH` string.
pub fn version_str() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version of this crate as `(major, minor, patch)`.
///
/// ```
/// let (major, minor, patch) = yamlet_core::version();
/// assert_eq!(yamlet_core::version_str(), format!("{major}.{minor}.{patch}"));
/// ```
pub const fn version() -> (u32, u32, u32) {
    (
        parse_version_part(env!("CARGO_PKG_VERSION_MAJOR")),
        parse_version_part(env!("CARGO_PKG_VERSION_MINOR")),
        parse_version_part(env!("CARGO_PKG_VERSION_PATCH")),
    )
}

const fn parse_version_part(part: &str) -> u32 {
    let bytes = part.as_bytes();
    let mut value = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}
