/// Characters the reader hands to the scanner once the input is exhausted.
pub(crate) const EOF: char = '\0';

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_z(c: char) -> bool {
    c == EOF
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_break(c: char) -> bool {
    matches!(c, '\r' | '\n' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_breakz(c: char) -> bool {
    is_break(c) || is_z(c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_blank_or_break(c: char) -> bool {
    is_blank(c) || is_break(c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_blank_or_breakz(c: char) -> bool {
    is_blank(c) || is_breakz(c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_flow(c: char) -> bool {
    matches!(c, ',' | '[' | ']' | '{' | '}')
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_bom(c: char) -> bool {
    c == '\u{FEFF}'
}

/// Letters, digits, `_` and `-`: directive names and named tag handles.
#[inline]
#[must_use]
pub(crate) fn is_alpha(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[inline]
#[must_use]
pub(crate) fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Value of an ASCII hex digit. Callers check [`is_hex`] first.
#[inline]
#[must_use]
pub(crate) fn as_hex(c: char) -> u32 {
    c.to_digit(16).unwrap_or(0)
}

pub(crate) fn is_anchor_char(c: char) -> bool {
    !is_blank_or_breakz(c) && !is_flow(c) && !is_bom(c)
}

/// Check whether the character is a valid URI character.
#[inline]
#[must_use]
pub(crate) fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-#;/?:@&=+$,_.!~*'()[]%".contains(c)
}

/// Characters of a tag shorthand suffix: URI characters minus `!` and flow indicators.
pub(crate) fn is_tag_char(c: char) -> bool {
    is_uri_char(c) && !is_flow(c) && c != '!'
}

/// Characters the YAML character set allows in a stream.
pub(crate) fn is_printable(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{7E}'
        | '\u{85}'
        | '\u{A0}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_and_blanks() {
        assert!(is_break('\u{2028}'));
        assert!(is_breakz(EOF));
        assert!(!is_break('\t'));
        assert!(is_blank_or_breakz('\t'));
    }

    #[test]
    fn tag_and_anchor_chars() {
        assert!(is_uri_char('%'));
        assert!(is_tag_char('%'));
        assert!(!is_tag_char('!'));
        assert!(!is_tag_char(','));
        assert!(is_anchor_char(':'));
        assert!(!is_anchor_char(']'));
        assert_eq!(as_hex('f'), 15);
    }

    #[test]
    fn printable() {
        assert!(is_printable('é'));
        assert!(!is_printable('\u{1}'));
        assert!(!is_printable('\u{FFFE}'));
    }
}
