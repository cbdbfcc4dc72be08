//! N-Triples escaping and unescaping.
//!
//! IRIs are written between `<` and `>` with every character that the
//! N-Triples `IRIREF` production forbids replaced by a `\uXXXX` (or
//! `\UXXXXXXXX`) escape. Literal lexical values use the short `ECHAR` forms
//! (`\n`, `\"`, ...) where they exist. A literal backslash is always doubled.
//!
//! Decoding recognizes every escape either direction can produce, so
//! `unescape(escape_iri(s)) == s` and `unescape(escape_literal(s)) == s` for
//! any `s`.

use std::borrow::Cow;
use std::fmt::Write;

use winnow::error::{ContextError, ErrMode};
use winnow::stream::{AsChar, Location};
use winnow::token::{any, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use crate::error::{NtError, Result};

/// Input type for the decoder - tracks byte offsets for error reporting.
type Input<'a> = LocatingSlice<&'a str>;

/// Character repertoire allowed to pass through unescaped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// RDF 1.1 N-Triples: any non-forbidden Unicode character is written as-is
    #[default]
    Utf8,
    /// Legacy 7-bit N-Triples: every non-ASCII character is escaped as well
    Ascii,
}

impl Charset {
    fn passes(self, c: char) -> bool {
        match self {
            Charset::Utf8 => true,
            Charset::Ascii => c.is_ascii(),
        }
    }
}

/// Check if a character can appear unescaped inside `<...>`.
pub fn is_iri_char(c: char) -> bool {
    !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\x00'..='\x20')
        && !c.is_control()
}

// =============================================================================
// Escaping
// =============================================================================

/// Escape a bare IRI for embedding between `<` and `>`.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_iri(raw: &str) -> Cow<'_, str> {
    escape_iri_with(raw, Charset::default())
}

/// Escape a bare IRI using the given charset.
pub fn escape_iri_with(raw: &str, charset: Charset) -> Cow<'_, str> {
    let keep = |c: char| is_iri_char(c) && charset.passes(c);
    if raw.chars().all(keep) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 16);
    for c in raw.chars() {
        if c == '\\' {
            out.push_str("\\\\");
        } else if keep(c) {
            out.push(c);
        } else {
            push_uchar(&mut out, c);
        }
    }
    Cow::Owned(out)
}

/// Escape a literal's lexical value for embedding between `"` and `"`.
pub fn escape_literal(raw: &str) -> Cow<'_, str> {
    escape_literal_with(raw, Charset::default())
}

/// Escape a literal's lexical value using the given charset.
pub fn escape_literal_with(raw: &str, charset: Charset) -> Cow<'_, str> {
    let keep = |c: char| !matches!(c, '"' | '\\') && !c.is_control() && charset.passes(c);
    if raw.chars().all(keep) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 16);
    for c in raw.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\x08' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0C' => out.push_str("\\f"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if keep(c) => out.push(c),
            c => push_uchar(&mut out, c),
        }
    }
    Cow::Owned(out)
}

/// Append `\uXXXX` for the BMP, `\UXXXXXXXX` above it.
fn push_uchar(out: &mut String, c: char) {
    let code = c as u32;
    // fmt::Write for String is infallible
    let _ = if code > 0xFFFF {
        write!(out, "\\U{:08X}", code)
    } else {
        write!(out, "\\u{:04X}", code)
    };
}

// =============================================================================
// Unescaping
// =============================================================================

/// Decode every backslash escape in `escaped`.
///
/// Recognizes `\uXXXX`, `\UXXXXXXXX` and the `ECHAR` forms
/// (`\t \b \n \r \f \" \' \\`). Any other backslash sequence, a dangling
/// backslash, short hex or a hex value that is not a Unicode scalar value is
/// reported as [`NtError::MalformedEscape`] with the byte offset of the
/// offending backslash.
pub fn unescape(escaped: &str) -> Result<Cow<'_, str>> {
    if !escaped.contains('\\') {
        return Ok(Cow::Borrowed(escaped));
    }

    let mut input = LocatingSlice::new(escaped);
    let mut result = String::with_capacity(escaped.len());

    loop {
        if let Ok(chunk) = raw_chunk(&mut input) {
            result.push_str(chunk);
        }

        if input.is_empty() {
            break;
        }

        let start = input.current_token_start();
        match escape_sequence(&mut input) {
            Ok(c) => result.push(c),
            Err(_) => return Err(malformed_at(escaped, start)),
        }
    }

    Ok(Cow::Owned(result))
}

/// Take everything up to the next backslash.
fn raw_chunk<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_till(0.., '\\').parse_next(input)
}

/// Parse one backslash escape, leading backslash included.
fn escape_sequence(input: &mut Input<'_>) -> ModalResult<char> {
    '\\'.parse_next(input)?;
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        'u' => hex_code_point(input, 4),
        'U' => hex_code_point(input, 8),
        _ => Err(ErrMode::Backtrack(ContextError::new())),
    }
}

/// Parse exactly `digits` hex digits as a Unicode scalar value.
fn hex_code_point(input: &mut Input<'_>, digits: usize) -> ModalResult<char> {
    let hex: &str = take_while(digits..=digits, AsChar::is_hex_digit).parse_next(input)?;
    let code =
        u32::from_str_radix(hex, 16).map_err(|_| ErrMode::Backtrack(ContextError::new()))?;
    char::from_u32(code).ok_or_else(|| ErrMode::Backtrack(ContextError::new()))
}

fn malformed_at(escaped: &str, position: usize) -> NtError {
    let sequence: String = escaped[position..].chars().take(10).collect();
    NtError::malformed_escape(position, format!("cannot decode `{}`", sequence))
}
