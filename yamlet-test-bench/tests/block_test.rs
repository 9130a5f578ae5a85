use yamlet_test_bench::assert_eq_event;
use yamlet_test_bench::consts::*;

#[test]
fn block_seq() {
    assert_eq_event(BLOCK1_INPUT, BLOCK_EVENTS);
    assert_eq_event(BLOCK2_INPUT, BLOCK_EVENTS);
    assert_eq_event(SEQ_TAGGED_INPUT, SEQ_TAGGED_EVENTS);
    assert_eq_event(SEQ_PLAIN_INPUT, SEQ_PLAIN_EVENTS);
    assert_eq_event(SEQ_EMPTY_ENTRY_INPUT, SEQ_EMPTY_ENTRY_EVENTS);
}

#[test]
fn block_seq_nested() {
    assert_eq_event(SEQ_NESTED_INPUT, SEQ_NESTED_EVENTS);
}

#[test]
fn block_seq_err() {
    assert_eq_event(BLOCK_ERR_INPUT, BLOCK_ERR_EVENTS);
}

#[test]
fn block_map() {
    assert_eq_event(MAP_SIMPLE_INPUT, MAP_SIMPLE_EVENTS);
    assert_eq_event(MAP_NESTED_INPUT, MAP_NESTED_EVENTS);
    assert_eq_event(MAP_EMPTY_VALUES_INPUT, MAP_EMPTY_VALUES_EVENTS);
    assert_eq_event(MAP_COMMENTS_INPUT, MAP_COMMENTS_EVENTS);
}

#[test]
fn block_map_indentless_seq() {
    assert_eq_event(MAP_INDENTLESS_SEQ_INPUT, MAP_INDENTLESS_SEQ_EVENTS);
}

#[test]
fn block_map_explicit_key() {
    assert_eq_event(MAP_EXPLICIT_KEY_INPUT, MAP_EXPLICIT_KEY_EVENTS);
}

#[test]
fn block_map_properties() {
    assert_eq_event(MAP_ANCHOR_INPUT, MAP_ANCHOR_EVENTS);
    assert_eq_event(MAP_PROPS_INPUT, MAP_PROPS_EVENTS);
}

#[test]
fn block_map_err() {
    assert_eq_event(MAP_VALUE_ERR_INPUT, MAP_VALUE_ERR_EVENTS);
}

#[test]
fn block_plain_scalar() {
    assert_eq_event(PLAIN_MULTI_INPUT, PLAIN_MULTI_EVENTS);
}

#[test]
fn block_literal() {
    assert_eq_event(LITERAL_INPUT, LITERAL_EVENTS);
    assert_eq_event(LITERAL_STRIP_INPUT, LITERAL_STRIP_EVENTS);
    assert_eq_event(LITERAL_KEEP_INPUT, LITERAL_KEEP_EVENTS);
    assert_eq_event(LITERAL_INDENT_INPUT, LITERAL_INDENT_EVENTS);
}

#[test]
fn block_fold() {
    assert_eq_event(FOLDED_INPUT, FOLDED_EVENTS);
    assert_eq_event(FOLDED_MORE_INDENTED_INPUT, FOLDED_MORE_INDENTED_EVENTS);
    assert_eq_event(BLOCK_SCALAR_IN_MAP_INPUT, BLOCK_SCALAR_IN_MAP_EVENTS);
}
