//! Rules for placing user text inside the generated Lua.
//!
//! Two contexts exist:
//!
//!   • double-quoted string literal  → `lua_string`
//!   • `--` comment line             → `comment_text`
//!
//! Escapes in `lua_string` are limited to what Lua 5.1 / LuaJIT understand,
//! so the host decodes the literal back to the exact input.

/// Escape `text` for use between `"` delimiters.
pub fn lua_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // always three digits, a following digit must not be absorbed
            c if c.is_ascii_control() => {
                out.push_str(&format!("\\{:03}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Make `text` safe for the remainder of a comment line.
///
/// Every control character becomes one space; nothing else changes.
pub fn comment_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lua_string_escapes() {
        let test_cases = vec![
            ("MyMod", "MyMod"),
            ("A\"B", "A\\\"B"),
            ("back\\slash", "back\\\\slash"),
            ("two\nlines", "two\\nlines"),
            ("cr\rtab\t", "cr\\rtab\\t"),
            ("nul\0", "nul\\000"),
            ("bell\x07 9", "bell\\007 9"),
            ("del\x7f", "del\\127"),
            ("it's", "it's"),
            ("Mод ✓", "Mод ✓"),
        ];

        for (src, expected) in test_cases {
            assert_eq!(lua_string(src), expected, "input {src:?}");
        }
    }

    #[test]
    fn test_lua_string_never_leaves_bare_quote() {
        let escaped = lua_string("\"\"\\\"");
        // every quote is preceded by an odd run of backslashes
        let bytes = escaped.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'"' {
                let run = bytes[..i].iter().rev().take_while(|c| **c == b'\\').count();
                assert_eq!(run % 2, 1, "bare quote at {i} in {escaped}");
            }
        }
    }

    #[test]
    fn test_comment_text_folds_line_breaks() {
        assert_eq!(comment_text("a\nb\r\nc"), "a b  c");
        assert_eq!(comment_text("A\"B -- x"), "A\"B -- x");
        assert!(!comment_text("x\u{85}y").contains('\u{85}'));
    }
}
