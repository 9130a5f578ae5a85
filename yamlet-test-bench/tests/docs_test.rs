use yamlet_test_bench::assert_eq_event;
use yamlet_test_bench::consts::*;

#[test]
fn empty_stream() {
    assert_eq_event(EMPTY_INPUT, EMPTY_EVENTS);
    assert_eq_event(DOC_END_ONLY_INPUT, EMPTY_EVENTS);
    assert_eq_event(DOC_EMPTY_EXPLICIT_INPUT, DOC_EMPTY_EXPLICIT_EVENTS);
}

#[test]
fn multi_doc() {
    assert_eq_event(DOC_MULTI_INPUT, DOC_MULTI_EVENTS);
    assert_eq_event(DOC_BARE_THEN_EXPLICIT_INPUT, DOC_BARE_THEN_EXPLICIT_EVENTS);
    assert_eq_event(DOC_END_MARKER_INPUT, DOC_END_MARKER_EVENTS);
}

#[test]
fn doc_directives() {
    assert_eq_event(DOC_DIRECTIVES_INPUT, DOC_DIRECTIVES_EVENTS);
    assert_eq_event(DOC_VERBATIM_TAG_INPUT, DOC_VERBATIM_TAG_EVENTS);
}

#[test]
fn doc_err() {
    assert_eq_event(DOC_ANCHOR_SCOPE_INPUT, DOC_ANCHOR_SCOPE_EVENTS);
    assert_eq_event(DOC_DIRECTIVE_NO_START_INPUT, DOC_DIRECTIVE_NO_START_EVENTS);
    assert_eq_event(
        DOC_DIRECTIVE_AFTER_CONTENT_INPUT,
        DOC_DIRECTIVE_AFTER_CONTENT_EVENTS,
    );
}
