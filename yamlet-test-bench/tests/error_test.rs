use pretty_assertions::assert_eq;
use yamlet_common::{Error, ErrorKind, YamlResult};
use yamlet_core::{Parser, ParserConfig, StrSource};
use yamlet_test_bench::assert_eq_event;
use yamlet_test_bench::consts::*;

fn first_error(input: &str) -> Error {
    Parser::from_str(input)
        .find_map(Result::err)
        .expect("input should fail")
}

#[test]
fn error_events() {
    assert_eq_event(TAB_INDENT_INPUT, TAB_INDENT_EVENTS);
    assert_eq_event(UNDEFINED_ALIAS_INPUT, UNDEFINED_ALIAS_EVENTS);
    assert_eq_event(UNDEFINED_HANDLE_INPUT, UNDEFINED_HANDLE_EVENTS);
    assert_eq_event(INVALID_START_INPUT, INVALID_START_EVENTS);
}

#[test]
fn tab_indentation_mark() {
    let err = first_error(TAB_INDENT_INPUT);
    assert_eq!(err.kind, ErrorKind::Scanner);
    assert_eq!((err.problem_mark.line, err.problem_mark.column), (1, 0));
}

#[test]
fn top_level_tab_indentation() {
    assert_eq_event(TAB_TOP_LEVEL_SEQ_INPUT, TAB_TOP_LEVEL_EVENTS);
    assert_eq_event(TAB_TOP_LEVEL_MAP_INPUT, TAB_TOP_LEVEL_EVENTS);
    assert_eq_event(TAB_BEFORE_FLOW_INPUT, TAB_BEFORE_FLOW_EVENTS);

    let err = first_error(TAB_TOP_LEVEL_SEQ_INPUT);
    assert_eq!(err.kind, ErrorKind::Scanner);
    assert_eq!((err.problem_mark.line, err.problem_mark.column), (0, 0));
}

#[test]
fn mapping_value_context() {
    let err = first_error(MAP_VALUE_ERR_INPUT);
    assert_eq!(err.kind, ErrorKind::Scanner);
    assert_eq!(err.problem.as_ref(), "mapping values are not allowed in this context");
    assert_eq!(err.context.as_deref(), Some("while scanning a mapping value"));
    assert_eq!(err.problem_mark.line, 2);
}

#[test]
fn block_mapping_context() {
    let err = first_error("a: 1\n- b\n");
    assert_eq!(err.kind, ErrorKind::Parser);
    assert_eq!(err.context.as_deref(), Some("while parsing a block mapping"));
    assert_eq!(err.problem.as_ref(), "did not find expected key");
    assert_eq!(err.context_mark.map(|m| m.line), Some(0));
}

#[test]
fn display_includes_marks() {
    let err = first_error(UNDEFINED_ALIAS_INPUT);
    let msg = err.to_string();
    assert!(msg.contains("found undefined alias"), "{msg}");
    assert!(msg.contains("line 1 column 1"), "{msg}");
}

#[test]
fn invalid_utf8_is_reader_error() {
    let err = Parser::from_slice(b"key: \xFF")
        .find_map(Result::err)
        .expect("input should fail");
    assert_eq!(err.kind, ErrorKind::Reader);
    assert_eq!(err.problem_mark.offset, 5);
}

#[test]
fn long_simple_key() {
    let key = "k".repeat(40);
    let input = format!("{key}: v");
    let config = ParserConfig::default().with_simple_key_max_length(16);
    let res: YamlResult<Vec<_>> = Parser::with_config(StrSource::new(&input), config).collect();
    assert!(res.is_err());

    let res: YamlResult<Vec<_>> = Parser::from_str(&input).collect();
    assert!(res.is_ok());
}

#[test]
fn errors_repeat() {
    let mut parser = Parser::from_str(INVALID_START_INPUT);
    let _stream_start = parser.next_event().unwrap();
    let first = parser.next_event().unwrap_err();
    assert_eq!(parser.next_event().unwrap_err(), first);
    assert!(parser.next().is_none());
}
