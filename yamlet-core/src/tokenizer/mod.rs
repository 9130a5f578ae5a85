//! Byte stream to events, in three stages.
//!
//! [`Reader`] decodes the raw input into characters, [`Scanner`] groups them into tokens and
//! [`Parser`] checks the token stream against the YAML grammar and emits events.

pub use parser::Parser;
pub use reader::Reader;
pub use scanner::Scanner;
pub use source::{ReadSource, Source, StrSource};

mod char_utils;
mod parser;
mod reader;
mod scanner;
mod source;
