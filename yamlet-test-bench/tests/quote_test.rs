use yamlet_test_bench::assert_eq_event;
use yamlet_test_bench::consts::*;

#[test]
fn single_quote() {
    assert_eq_event(SINGLE_QUOTE_INPUT, SINGLE_QUOTE_EVENTS);
    assert_eq_event(SINGLE_QUOTE_FOLD_INPUT, SINGLE_QUOTE_FOLD_EVENTS);
}

#[test]
fn double_quote() {
    assert_eq_event(DOUBLE_ESCAPE_INPUT, DOUBLE_ESCAPE_EVENTS);
    assert_eq_event(DOUBLE_LINE_ESCAPE_INPUT, DOUBLE_LINE_ESCAPE_EVENTS);
}

#[test]
fn quoted_keys() {
    assert_eq_event(QUOTED_KEYS_INPUT, QUOTED_KEYS_EVENTS);
}

#[test]
fn quote_err() {
    assert_eq_event(DOUBLE_UNTERMINATED_INPUT, DOUBLE_UNTERMINATED_EVENTS);
    assert_eq_event(DOUBLE_BAD_ESCAPE_INPUT, DOUBLE_BAD_ESCAPE_EVENTS);
    assert_eq_event(QUOTE_TRAILING_INPUT, QUOTE_TRAILING_EVENTS);
}
