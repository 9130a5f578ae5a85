pub mod consts;

use std::fmt::Write;

use pretty_assertions::assert_eq;
use yamlet_common::{Error, EventType};
use yamlet_core::{Parser, Source};

///
/// Assert that for given input, the parser generates expected set of events.
///
/// Events are written one per line, each preceded by a newline, without the `+STR`/`-STR` pair.
/// A failed parse appends a final `ERR` line.
///
/// # Panics
///
///    Function panics if there is a difference between expected events string and one generated
///    from the input.
pub fn assert_eq_event(input: &str, expected_events: &str) {
    let mut line = String::with_capacity(expected_events.len());
    let mut parser = Parser::from_str(input);
    if write_str_from_event(&mut line, &mut parser, false).is_some() {
        line.push_str("\nERR");
    }
    assert_eq!(line, expected_events, "Error in {input:?}");
}

/// Writes every event `parser` produces into `line` and returns the error that stopped it, if any.
///
/// With `emit_stream_token` the output follows the yaml-test-suite `test.event` files exactly:
/// stream events included, one event per line, newline terminated.
pub fn write_str_from_event<S: Source>(
    line: &mut String,
    parser: &mut Parser<S>,
    emit_stream_token: bool,
) -> Option<Error> {
    for ev in parser {
        let ev = match ev {
            Ok(ev) => ev.event_type,
            Err(err) => return Some(err),
        };
        if emit_stream_token {
            let _ = writeln!(line, "{ev}");
        } else if !matches!(ev, EventType::StreamStart { .. } | EventType::StreamEnd) {
            let _ = write!(line, "\n{ev}");
        }
    }
    None
}
