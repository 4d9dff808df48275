//! Very small scanner for the Lua we generate.
//!
//! It does *not* understand Lua: it only finds comments and string
//! literals so the output can be checked after compilation. Everything
//! else (identifiers, operators, numbers) is skipped.
//
//  Lexical items:
//
//      Comment  ::= '--' .* EOL        | '--[[' .*? ']]'
//      Str      ::= '"' … '"' | "'" … "'" | '[[' .*? ']]'
//
//  Quoted strings may not contain a raw line break; escapes follow
//  Lua 5.1 plus LuaJIT's `\xHH`.

use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Comment(String), // text after `--`
    Str(String),     // decoded literal contents
    Eof,
}

#[derive(Clone)]
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            line: 1,
            finished: false,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn read_line_comment(&mut self) -> String {
        let mut txt = String::new();
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            txt.push(c);
            self.next_char();
        }
        txt
    }

    /// Reads up to `]]`; the opening `[[` is already consumed.
    fn read_long_bracket(&mut self) -> Result<String, String> {
        let start = self.line;
        let mut txt = String::new();
        while let Some(c) = self.next_char() {
            if c == ']' && self.peek_char() == Some(']') {
                self.next_char();
                return Ok(txt);
            }
            txt.push(c);
        }
        Err(format!("line {start}: no closing ]] found"))
    }

    fn read_quoted(&mut self, delim: char) -> Result<String, String> {
        let start = self.line;
        let mut bytes = Vec::<u8>::new();
        let mut buf = [0u8; 4];
        loop {
            let c = match self.next_char() {
                Some(c) => c,
                None => return Err(format!("line {start}: unfinished string")),
            };
            match c {
                '\n' | '\r' => return Err(format!("line {start}: unfinished string")),
                '\\' => self.read_escape(&mut bytes)?,
                c if c == delim => break,
                c => bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes()),
            }
        }
        String::from_utf8(bytes).map_err(|_| format!("line {start}: string is not UTF-8"))
    }

    fn read_escape(&mut self, bytes: &mut Vec<u8>) -> Result<(), String> {
        let line = self.line;
        let c = self
            .next_char()
            .ok_or_else(|| format!("line {line}: unfinished escape"))?;
        let b = match c {
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0c,
            'n' => b'\n',
            // escaped line break; a CR LF / LF CR pair counts once
            '\n' | '\r' => {
                let pair = if c == '\n' { '\r' } else { '\n' };
                if self.peek_char() == Some(pair) {
                    self.next_char();
                }
                b'\n'
            }
            'r' => b'\r',
            't' => b'\t',
            'v' => 0x0b,
            '\\' => b'\\',
            '"' => b'"',
            '\'' => b'\'',
            'x' => {
                let mut hex = String::new();
                for _ in 0..2 {
                    match self.next_char() {
                        Some(h) if h.is_ascii_hexdigit() => hex.push(h),
                        _ => return Err(format!("line {line}: bad \\x escape")),
                    }
                }
                u8::from_str_radix(&hex, 16).map_err(|e| format!("line {line}: {e}"))?
            }
            d if d.is_ascii_digit() => {
                let mut num = String::new();
                num.push(d);
                while num.len() < 3 {
                    match self.peek_char() {
                        Some(n) if n.is_ascii_digit() => {
                            num.push(n);
                            self.next_char();
                        }
                        _ => break,
                    }
                }
                let value: u32 = num.parse().map_err(|e| format!("line {line}: {e}"))?;
                if value > u8::MAX as u32 {
                    return Err(format!("line {line}: escape too large: {value}"));
                }
                value as u8
            }
            e => return Err(format!("line {line}: invalid escape \\{e}")),
        };
        bytes.push(b);
        Ok(())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let ch = match self.next_char() {
                Some(c) => c,
                None => {
                    self.finished = true;
                    return Some(Ok(Token::Eof));
                }
            };

            let tok_res = match ch {
                '-' if self.peek_char() == Some('-') => {
                    self.next_char();
                    let mut probe = self.chars.clone();
                    if probe.next() == Some('[') && probe.next() == Some('[') {
                        self.next_char();
                        self.next_char();
                        self.read_long_bracket().map(Token::Comment)
                    } else {
                        Ok(Token::Comment(self.read_line_comment()))
                    }
                }
                '[' if self.peek_char() == Some('[') => {
                    self.next_char();
                    self.read_long_bracket().map(Token::Str)
                }
                '"' | '\'' => self.read_quoted(ch).map(Token::Str),
                _ => continue,
            };

            if tok_res.is_err() {
                self.finished = true;
            }
            return Some(tok_res);
        }
    }
}

/// Decoded contents of every string literal in `src`, in source order.
pub fn string_literals(src: &str) -> Result<Vec<String>, String> {
    let mut out = Vec::new();
    for tok in Lexer::new(src) {
        if let Token::Str(s) = tok? {
            out.push(s);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{Lexer, Token, string_literals};

    #[test]
    fn test_tokenisation() {
        let test_cases = vec![
            (
                "--- MOD_NAME: x\nprint(\"hi\")",
                vec![
                    Token::Comment("- MOD_NAME: x".into()),
                    Token::Str("hi".into()),
                    Token::Eof,
                ],
            ),
            (
                "a = 'it''s' .. [[raw\n\"x\"]] --[[ long\ncomment ]] b = 1",
                vec![
                    Token::Str("it".into()),
                    Token::Str("s".into()),
                    Token::Str("raw\n\"x\"".into()),
                    Token::Comment(" long\ncomment ".into()),
                    Token::Eof,
                ],
            ),
            ("x = 1 - -2", vec![Token::Eof]),
        ];

        for (src, expected) in test_cases {
            let tokens: Result<Vec<_>, _> = Lexer::new(src).collect();
            let tokens = tokens.unwrap();
            assert_eq!(tokens, expected, "input {src:?}");
        }
    }

    #[test]
    fn test_escape_decoding() {
        let lits = string_literals(r#"f("A\"B", "a\\b\n", "\0651\x41", "\t\r\'")"#).unwrap();
        assert_eq!(lits, vec!["A\"B", "a\\b\n", "A1A", "\t\r'"]);
    }

    #[test]
    fn test_escaped_line_breaks() {
        let lits = string_literals("x = \"a\\\nb\\\r\nc\\\rd\"\ny = 'ok'").unwrap();
        assert_eq!(lits, vec!["a\nb\nc\nd", "ok"]);
    }

    #[test]
    fn test_unfinished_string_is_error() {
        let err = string_literals("print(\"oops)\nprint(\"ok\")").unwrap_err();
        assert!(err.contains("line 1: unfinished string"), "got {err}");

        assert!(string_literals("print(\"tail").is_err());
        assert!(string_literals("x = \"\\q\"").is_err());
        assert!(string_literals("x = \"\\300\"").is_err());
    }

    #[test]
    fn test_quote_inside_comment_ignored() {
        let lits = string_literals("-- MOD_NAME: A\"B\nx = \"ok\"").unwrap();
        assert_eq!(lits, vec!["ok"]);
    }
}
