// Line splitting and C string-literal encoding

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::config::EscapeMode;

/// A line contained a NUL character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NulByte;

/// Split text into lines.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. `EscapeMode::Verbatim`
/// also breaks on the separators Python's `str.splitlines` honours: `\v`,
/// `\f`, `\x1c`-`\x1e`, U+0085, U+2028 and U+2029. A final terminator does
/// not start another line, and empty text has no lines.
pub fn split_lines(text: &str, mode: EscapeMode) -> Lines<'_> {
    let is_break = match mode {
        EscapeMode::C => is_newline,
        EscapeMode::Verbatim => is_python_line_break,
    };
    Lines {
        rest: text,
        is_break,
    }
}

fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_python_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

pub struct Lines<'a> {
    rest: &'a str,
    is_break: fn(char) -> bool,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| (self.is_break)(c)) {
            Some((end, c)) => {
                let line = &self.rest[..end];
                let skip = if self.rest[end..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                self.rest = &self.rest[end + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Encode one line for placement between the quotes of a string literal
pub fn encode_line(line: &str, mode: EscapeMode) -> Result<Cow<'_, str>, NulByte> {
    match mode {
        EscapeMode::Verbatim => Ok(Cow::Borrowed(line)),
        EscapeMode::C => escape_c(line),
    }
}

fn needs_escape(c: char) -> bool {
    c == '\\' || c == '"' || c.is_ascii_control()
}

fn escape_c(line: &str) -> Result<Cow<'_, str>, NulByte> {
    if !line.contains(needs_escape) && !line.contains("??") {
        return Ok(Cow::Borrowed(line));
    }

    let mut out = String::with_capacity(line.len() + 8);
    let mut after_question = false;

    for c in line.chars() {
        match c {
            '\0' => return Err(NulByte),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            // every `?` after a `?` is escaped so no trigraph survives
            '?' if after_question => out.push_str("\\?"),
            // three-digit octal: a following digit is never absorbed
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
        after_question = c == '?';
    }

    Ok(Cow::Owned(out))
}

/// Inverse of `escape_c`, for checking encoded output
#[cfg(test)]
pub(crate) fn unescape_c(encoded: &str) -> String {
    let mut out = String::new();
    let mut chars = encoded.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(d @ '0'..='7') => {
                let mut value = d.to_digit(8).unwrap();
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(v) => {
                            value = value * 8 + v;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap());
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        split_lines(text, EscapeMode::C).collect()
    }

    #[test]
    fn test_split_drops_final_newline() {
        assert_eq!(lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_empty_text_has_no_lines() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn test_split_keeps_blank_lines() {
        assert_eq!(lines("\n"), vec![""]);
        assert_eq!(lines("a\n\n\nb\n"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_split_universal_newlines() {
        assert_eq!(lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
        assert_eq!(lines("\r\n\r"), vec!["", ""]);
    }

    #[test]
    fn test_c_mode_keeps_form_feed_inside_line() {
        assert_eq!(lines("a\u{c}b\n"), vec!["a\u{c}b"]);
    }

    #[test]
    fn test_verbatim_splits_like_python_splitlines() {
        let text = "a\u{b}b\u{c}c\u{1c}d\u{1e}e\u{85}f\u{2028}g\u{2029}h\r\ni\n";
        let split: Vec<&str> = split_lines(text, EscapeMode::Verbatim).collect();
        assert_eq!(split, vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
    }

    #[test]
    fn test_plain_line_is_borrowed() {
        let encoded = encode_line("void main(){}", EscapeMode::C).unwrap();
        assert!(matches!(encoded, Cow::Borrowed("void main(){}")));
    }

    #[test]
    fn test_quotes_and_backslashes() {
        let encoded = encode_line(r#"say "hi" \ bye"#, EscapeMode::C).unwrap();
        assert_eq!(encoded, r#"say \"hi\" \\ bye"#);
    }

    #[test]
    fn test_control_bytes_use_octal() {
        assert_eq!(encode_line("a\tb", EscapeMode::C).unwrap(), "a\\tb");
        assert_eq!(encode_line("\u{1}2", EscapeMode::C).unwrap(), "\\0012");
        assert_eq!(encode_line("\u{7f}", EscapeMode::C).unwrap(), "\\177");
        assert_eq!(encode_line("\u{b}\u{c}", EscapeMode::C).unwrap(), "\\013\\014");
    }

    #[test]
    fn test_trigraphs_are_broken_up() {
        assert_eq!(encode_line("a??=b", EscapeMode::C).unwrap(), "a?\\?=b");
        assert_eq!(encode_line("???/", EscapeMode::C).unwrap(), "?\\?\\?/");
        assert_eq!(encode_line("? ?", EscapeMode::C).unwrap(), "? ?");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(encode_line("// café ✓", EscapeMode::C).unwrap(), "// café ✓");
    }

    #[test]
    fn test_nul_is_rejected() {
        assert_eq!(encode_line("a\0b", EscapeMode::C), Err(NulByte));
    }

    #[test]
    fn test_verbatim_writes_line_unchanged() {
        let line = "say \"hi\" \\ \0";
        assert_eq!(encode_line(line, EscapeMode::Verbatim).unwrap(), line);
    }

    #[test]
    fn test_unescape_restores_line() {
        for line in [r#"x = "\\n";"#, "tab\there", "??=??/", "\u{1}9", "plain"] {
            let encoded = encode_line(line, EscapeMode::C).unwrap();
            assert_eq!(unescape_c(&encoded), line);
        }
    }
}
