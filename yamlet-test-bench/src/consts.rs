// Block collections

pub const BLOCK1_INPUT: &str = r"
- x
- y
";
pub const BLOCK2_INPUT: &str = r"
    - x
    - y
";
pub const BLOCK_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x
=VAL :y
-SEQ
-DOC";

pub const SEQ_TAGGED_INPUT: &str = r"
- !!int 1
- !!str -2
";
pub const SEQ_TAGGED_EVENTS: &str = r"
+DOC
+SEQ
=VAL <tag:yaml.org,2002:int> :1
=VAL <tag:yaml.org,2002:str> :-2
-SEQ
-DOC";

pub const SEQ_PLAIN_INPUT: &str = r"
- x - y
";
pub const SEQ_PLAIN_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x - y
-SEQ
-DOC";

pub const SEQ_NESTED_INPUT: &str = r"
- - a
  - b
- c
";
pub const SEQ_NESTED_EVENTS: &str = r"
+DOC
+SEQ
+SEQ
=VAL :a
=VAL :b
-SEQ
=VAL :c
-SEQ
-DOC";

pub const SEQ_EMPTY_ENTRY_INPUT: &str = r"
-
- a
-
";
pub const SEQ_EMPTY_ENTRY_EVENTS: &str = r"
+DOC
+SEQ
=VAL :
=VAL :a
=VAL :
-SEQ
-DOC";

pub const BLOCK_ERR_INPUT: &str = r"
  - x
 - y
";
pub const BLOCK_ERR_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x
-SEQ
-DOC
ERR";

pub const MAP_SIMPLE_INPUT: &str = r"
a: 1
b: 2
";
pub const MAP_SIMPLE_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :1
=VAL :b
=VAL :2
-MAP
-DOC";

pub const MAP_NESTED_INPUT: &str = r"
a:
  b: c
  d: e
f: g
";
pub const MAP_NESTED_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
+MAP
=VAL :b
=VAL :c
=VAL :d
=VAL :e
-MAP
=VAL :f
=VAL :g
-MAP
-DOC";

pub const MAP_INDENTLESS_SEQ_INPUT: &str = r"
key:
- a
- b
other: c
";
pub const MAP_INDENTLESS_SEQ_EVENTS: &str = r"
+DOC
+MAP
=VAL :key
+SEQ
=VAL :a
=VAL :b
-SEQ
=VAL :other
=VAL :c
-MAP
-DOC";

pub const MAP_EMPTY_VALUES_INPUT: &str = r"
a:
b:
";
pub const MAP_EMPTY_VALUES_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :
=VAL :b
=VAL :
-MAP
-DOC";

pub const MAP_EXPLICIT_KEY_INPUT: &str = r"
? a
: b
? c
";
pub const MAP_EXPLICIT_KEY_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :b
=VAL :c
=VAL :
-MAP
-DOC";

pub const MAP_COMMENTS_INPUT: &str = r"
a: b # trailing
# full line
c: d
";
pub const MAP_COMMENTS_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :b
=VAL :c
=VAL :d
-MAP
-DOC";

pub const MAP_ANCHOR_INPUT: &str = r"
a: &x 1
b: *x
";
pub const MAP_ANCHOR_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL &x :1
=VAL :b
=ALI *x
-MAP
-DOC";

pub const MAP_PROPS_INPUT: &str = r"
&m !!map
a: !!str
";
pub const MAP_PROPS_EVENTS: &str = r"
+DOC
+MAP &m <tag:yaml.org,2002:map>
=VAL :a
=VAL <tag:yaml.org,2002:str> :
-MAP
-DOC";

pub const MAP_VALUE_ERR_INPUT: &str = r"
a: 1
 b: 2
";
pub const MAP_VALUE_ERR_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :1 b
ERR";

// Block scalars

pub const PLAIN_MULTI_INPUT: &str = r"
a: b
  c
d: e
";
pub const PLAIN_MULTI_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :b c
=VAL :d
=VAL :e
-MAP
-DOC";

pub const LITERAL_INPUT: &str = r"
--- |
  foo
  bar
";
pub const LITERAL_EVENTS: &str = r"
+DOC ---
=VAL |foo\nbar\n
-DOC";

pub const LITERAL_STRIP_INPUT: &str = r"
--- |-
  text

";
pub const LITERAL_STRIP_EVENTS: &str = r"
+DOC ---
=VAL |text
-DOC";

pub const LITERAL_KEEP_INPUT: &str = r"
--- |+
  text

";
pub const LITERAL_KEEP_EVENTS: &str = r"
+DOC ---
=VAL |text\n\n
-DOC";

pub const LITERAL_INDENT_INPUT: &str = r"
--- |2
   x
";
pub const LITERAL_INDENT_EVENTS: &str = r"
+DOC ---
=VAL | x\n
-DOC";

pub const FOLDED_INPUT: &str = r"
--- >
  a
  b

  c
";
pub const FOLDED_EVENTS: &str = r"
+DOC ---
=VAL >a b\nc\n
-DOC";

pub const FOLDED_MORE_INDENTED_INPUT: &str = r"
--- >
 Sammy Sosa completed another
 fine season with great stats.

   63 Home Runs
   0.288 Batting Average

 What a year!
";
pub const FOLDED_MORE_INDENTED_EVENTS: &str = r"
+DOC ---
=VAL >Sammy Sosa completed another fine season with great stats.\n\n  63 Home Runs\n  0.288 Batting Average\n\nWhat a year!\n
-DOC";

pub const BLOCK_SCALAR_IN_MAP_INPUT: &str = r"
a: |
  x
b: >-
  y
  z
";
pub const BLOCK_SCALAR_IN_MAP_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL |x\n
=VAL :b
=VAL >y z
-MAP
-DOC";

// Flow collections

pub const FLOW_SEQ_INPUT: &str = r"[a, b, c]";
pub const FLOW_SEQ_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
=VAL :c
-SEQ
-DOC";

pub const FLOW_SEQ_TRAILING_INPUT: &str = r"[a, b, ]";
pub const FLOW_SEQ_TRAILING_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
-SEQ
-DOC";

pub const FLOW_SEQ_MULTILINE_INPUT: &str = r"
[a,
 b,
  c d]
";
pub const FLOW_SEQ_MULTILINE_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
=VAL :c d
-SEQ
-DOC";

pub const FLOW_MAP_INPUT: &str = r"{a: 1, b: 2}";
pub const FLOW_MAP_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :1
=VAL :b
=VAL :2
-MAP
-DOC";

pub const FLOW_MAP_EMPTY_VALUE_INPUT: &str = r"{a, b: c}";
pub const FLOW_MAP_EMPTY_VALUE_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :
=VAL :b
=VAL :c
-MAP
-DOC";

pub const FLOW_EMPTY_INPUT: &str = r"
- []
- {}
";
pub const FLOW_EMPTY_EVENTS: &str = r"
+DOC
+SEQ
+SEQ []
-SEQ
+MAP {}
-MAP
-SEQ
-DOC";

pub const FLOW_PAIR_INPUT: &str = r"[a: b, c]";
pub const FLOW_PAIR_EVENTS: &str = r"
+DOC
+SEQ []
+MAP {}
=VAL :a
=VAL :b
-MAP
=VAL :c
-SEQ
-DOC";

pub const FLOW_NESTED_INPUT: &str = r"
&seq
[[name        , hr, avg  ],
[Mark McGwire, 65, 0.278],
{k: v}]
";
pub const FLOW_NESTED_EVENTS: &str = r"
+DOC
+SEQ [] &seq
+SEQ []
=VAL :name
=VAL :hr
=VAL :avg
-SEQ
+SEQ []
=VAL :Mark McGwire
=VAL :65
=VAL :0.278
-SEQ
+MAP {}
=VAL :k
=VAL :v
-MAP
-SEQ
-DOC";

pub const FLOW_ADJACENT_INPUT: &str = r#"{"a":b, "c":[d]}"#;
pub const FLOW_ADJACENT_EVENTS: &str = r#"
+DOC
+MAP {}
=VAL "a
=VAL :b
=VAL "c
+SEQ []
=VAL :d
-SEQ
-MAP
-DOC"#;

pub const FLOW_COLON_IN_PLAIN_INPUT: &str = r"[a:b, http://x]";
pub const FLOW_COLON_IN_PLAIN_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a:b
=VAL :http://x
-SEQ
-DOC";

pub const FLOW_IN_BLOCK_INPUT: &str = r"
seq: [a, b]
map: {c: d}
";
pub const FLOW_IN_BLOCK_EVENTS: &str = r"
+DOC
+MAP
=VAL :seq
+SEQ []
=VAL :a
=VAL :b
-SEQ
=VAL :map
+MAP {}
=VAL :c
=VAL :d
-MAP
-MAP
-DOC";

pub const FLOW_UNCLOSED_INPUT: &str = r"[a, b";
pub const FLOW_UNCLOSED_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
ERR";

pub const FLOW_MISSING_COMMA_INPUT: &str = r"{a: 1 b: 2}";
pub const FLOW_MISSING_COMMA_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :1 b
ERR";

// Quoted scalars

pub const SINGLE_QUOTE_INPUT: &str = r"'it''s'";
pub const SINGLE_QUOTE_EVENTS: &str = r"
+DOC
=VAL 'it's
-DOC";

pub const SINGLE_QUOTE_FOLD_INPUT: &str = r"
'a

 b
 c'
";
pub const SINGLE_QUOTE_FOLD_EVENTS: &str = r"
+DOC
=VAL 'a\nb c
-DOC";

pub const DOUBLE_ESCAPE_INPUT: &str = r#""a\tb\u263A\x41\/""#;
pub const DOUBLE_ESCAPE_EVENTS: &str = r#"
+DOC
=VAL "a\tb☺A/
-DOC"#;

pub const DOUBLE_LINE_ESCAPE_INPUT: &str = r#"
"a\
  b
  c"
"#;
pub const DOUBLE_LINE_ESCAPE_EVENTS: &str = r#"
+DOC
=VAL "ab c
-DOC"#;

pub const QUOTED_KEYS_INPUT: &str = r#"
"a": 'b'
'c': "d"
"#;
pub const QUOTED_KEYS_EVENTS: &str = r#"
+DOC
+MAP
=VAL "a
=VAL 'b
=VAL 'c
=VAL "d
-MAP
-DOC"#;

pub const DOUBLE_UNTERMINATED_INPUT: &str = r#""abc"#;
pub const DOUBLE_UNTERMINATED_EVENTS: &str = r"
ERR";

pub const DOUBLE_BAD_ESCAPE_INPUT: &str = r#""\q""#;
pub const DOUBLE_BAD_ESCAPE_EVENTS: &str = r"
ERR";

pub const QUOTE_TRAILING_INPUT: &str = r#""a" b"#;
pub const QUOTE_TRAILING_EVENTS: &str = r"
ERR";

// Documents

pub const EMPTY_INPUT: &str = r"
# only a comment
";
pub const EMPTY_EVENTS: &str = "";

pub const DOC_END_ONLY_INPUT: &str = r"
...
...
";

pub const DOC_EMPTY_EXPLICIT_INPUT: &str = r"
---
";
pub const DOC_EMPTY_EXPLICIT_EVENTS: &str = r"
+DOC ---
=VAL :
-DOC";

pub const DOC_MULTI_INPUT: &str = r"
--- a
--- b
";
pub const DOC_MULTI_EVENTS: &str = r"
+DOC ---
=VAL :a
-DOC
+DOC ---
=VAL :b
-DOC";

pub const DOC_BARE_THEN_EXPLICIT_INPUT: &str = r"
a
--- b
";
pub const DOC_BARE_THEN_EXPLICIT_EVENTS: &str = r"
+DOC
=VAL :a
-DOC
+DOC ---
=VAL :b
-DOC";

pub const DOC_END_MARKER_INPUT: &str = r"
a
...
b
";
pub const DOC_END_MARKER_EVENTS: &str = r"
+DOC
=VAL :a
-DOC ...
+DOC
=VAL :b
-DOC";

pub const DOC_DIRECTIVES_INPUT: &str = r"
%YAML 1.2
%TAG !e! tag:example.com,2000:
--- !e!x y
...
";
pub const DOC_DIRECTIVES_EVENTS: &str = r"
+DOC ---
=VAL <tag:example.com,2000:x> :y
-DOC ...";

pub const DOC_VERBATIM_TAG_INPUT: &str = r"
- !<tag:yaml.org,2002:str> a
- ! b
- !local c
";
pub const DOC_VERBATIM_TAG_EVENTS: &str = r"
+DOC
+SEQ
=VAL <tag:yaml.org,2002:str> :a
=VAL <!> :b
=VAL <!local> :c
-SEQ
-DOC";

pub const DOC_ANCHOR_SCOPE_INPUT: &str = r"
--- &a x
--- *a
";
pub const DOC_ANCHOR_SCOPE_EVENTS: &str = r"
+DOC ---
=VAL &a :x
-DOC
+DOC ---
ERR";

pub const DOC_DIRECTIVE_NO_START_INPUT: &str = r"
%YAML 1.2
foo
";
pub const DOC_DIRECTIVE_NO_START_EVENTS: &str = r"
ERR";

pub const DOC_DIRECTIVE_AFTER_CONTENT_INPUT: &str = r"
a: b
%YAML 1.2
---
";
pub const DOC_DIRECTIVE_AFTER_CONTENT_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :b
-MAP
ERR";

// Errors

pub const TAB_INDENT_INPUT: &str = "a:\n\tb: c\n";
pub const TAB_INDENT_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
ERR";

pub const TAB_TOP_LEVEL_SEQ_INPUT: &str = "\t\t- a\n  - b\n";
pub const TAB_TOP_LEVEL_MAP_INPUT: &str = "\ta: b\n";
pub const TAB_TOP_LEVEL_EVENTS: &str = r"
ERR";

pub const TAB_BEFORE_FLOW_INPUT: &str = "\t{a: b}\n\t# note\n";
pub const TAB_BEFORE_FLOW_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :b
-MAP
-DOC";

pub const UNDEFINED_ALIAS_INPUT: &str = r"*a";
pub const UNDEFINED_ALIAS_EVENTS: &str = r"
+DOC
ERR";

pub const UNDEFINED_HANDLE_INPUT: &str = r"!e!x y";
pub const UNDEFINED_HANDLE_EVENTS: &str = r"
+DOC
ERR";

pub const INVALID_START_INPUT: &str = r"@foo";
pub const INVALID_START_EVENTS: &str = r"
ERR";
