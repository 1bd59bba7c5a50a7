// HIT - Hierarchical Input Text
//
// Copyright (c) 2026 HIT contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lexer for HIT input text.
//!
//! The lexer converts raw text into a flat, ordered token sequence with
//! source locations. It is modal: after an `=` it lexes exactly one value
//! token (quoted string, unquoted string, number, or boolean) before
//! returning to structural lexing. Tokens are retained by the tree nodes
//! built from them so diagnostics can point back into the original input.

use crate::error::{HitError, HitResult};

/// The terminal category of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `=`
    Equals,
    /// A run of path characters: `[a-zA-Z0-9_./:<>+-]+`.
    Path,
    /// A field value matching the numeric literal grammar.
    Number,
    /// A field value matching the boolean literal set.
    Bool,
    /// Any other field value; quoted values keep their quotes in `text`.
    String,
    /// A `#` comment on a line of its own.
    Comment,
    /// A `#` comment preceded by non-whitespace content on the same line.
    InlineComment,
}

/// A single lexed token with its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The terminal category.
    pub kind: TokenKind,
    /// The literal text as written in the input.
    pub text: String,
    /// 1-based line on which the token starts.
    pub line: usize,
    /// 1-based byte column on which the token starts.
    pub column: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

/// Returns the boolean value of a HIT boolean literal, if `s` is one.
///
/// The literal sets are case-insensitive: `{true, yes, on}` and
/// `{false, no, off}`.
pub(crate) fn parse_bool_literal(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("on")
    {
        Some(true)
    } else if s.eq_ignore_ascii_case("false")
        || s.eq_ignore_ascii_case("no")
        || s.eq_ignore_ascii_case("off")
    {
        Some(false)
    } else {
        None
    }
}

/// Returns true if `s` matches the HIT numeric literal grammar: an optional
/// sign, digits with an optional fractional part, and an optional
/// (optionally signed) exponent. At least one digit must be present.
pub(crate) fn is_number_literal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let mut digits = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let mut exp_digits = 0;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }
    i == b.len()
}

/// Strip surrounding quotes from a raw value and resolve the same-quote
/// escape, per the HIT string grammar. Unquoted values pass through.
pub(crate) fn strip_quotes(raw: &str) -> String {
    let b = raw.as_bytes();
    if b.len() >= 2 && (b[0] == b'\'' || b[0] == b'"') && b[b.len() - 1] == b[0] {
        let quote = b[0] as char;
        let inner = &raw[1..raw.len() - 1];
        inner.replace(&format!("\\{}", quote), &quote.to_string())
    } else {
        raw.to_string()
    }
}

fn is_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'/' | b':' | b'<' | b'>' | b'+' | b'-')
}

/// Lex `input` into a token sequence, reporting failures against `label`.
pub(crate) fn lex(label: &str, input: &str) -> HitResult<Vec<Token>> {
    Lexer::new(label, input).run()
}

struct Lexer<'a> {
    label: &'a str,
    input: &'a str,
    src: &'a [u8],
    pos: usize,
    line: usize,
    line_start: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(label: &'a str, input: &'a str) -> Self {
        Self {
            label,
            input,
            src: input.as_bytes(),
            pos: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> HitResult<Vec<Token>> {
        while self.pos < self.src.len() {
            let b = self.src[self.pos];
            match b {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'\n' => self.newline(),
                b'#' => self.lex_comment(),
                b'[' => self.push_single(TokenKind::LeftBracket),
                b']' => self.push_single(TokenKind::RightBracket),
                b'=' => {
                    self.push_single(TokenKind::Equals);
                    self.lex_value()?;
                }
                _ if is_path_byte(b) => self.lex_path(),
                _ => {
                    return Err(HitError::parse(
                        self.label,
                        self.line,
                        format!("unexpected character '{}'", b as char),
                    ));
                }
            }
        }
        Ok(self.tokens)
    }

    fn newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.line_start = self.pos;
    }

    fn column(&self, at: usize) -> usize {
        at - self.line_start + 1
    }

    fn push_single(&mut self, kind: TokenKind) {
        let text = &self.input[self.pos..self.pos + 1];
        self.tokens
            .push(Token::new(kind, text, self.line, self.column(self.pos)));
        self.pos += 1;
    }

    fn lex_comment(&mut self) {
        let start = self.pos;
        let mut end = self.pos;
        while end < self.src.len() && self.src[end] != b'\n' {
            end += 1;
        }
        let mut text_end = end;
        if text_end > start && self.src[text_end - 1] == b'\r' {
            text_end -= 1;
        }
        let preceded = self.src[self.line_start..start]
            .iter()
            .any(|c| !matches!(c, b' ' | b'\t' | b'\r'));
        let kind = if preceded {
            TokenKind::InlineComment
        } else {
            TokenKind::Comment
        };
        self.tokens.push(Token::new(
            kind,
            &self.input[start..text_end],
            self.line,
            self.column(start),
        ));
        self.pos = end;
    }

    fn lex_path(&mut self) {
        let start = self.pos;
        while self.pos < self.src.len() && is_path_byte(self.src[self.pos]) {
            self.pos += 1;
        }
        self.tokens.push(Token::new(
            TokenKind::Path,
            &self.input[start..self.pos],
            self.line,
            self.column(start),
        ));
    }

    /// Lex the single value token following an `=`.
    ///
    /// If the rest of the line holds no value (end of input, newline,
    /// comment, or a section bracket), no token is emitted; the parser
    /// reports the missing value against the field.
    fn lex_value(&mut self) -> HitResult<()> {
        while self.pos < self.src.len() && matches!(self.src[self.pos], b' ' | b'\t' | b'\r') {
            self.pos += 1;
        }
        if self.pos >= self.src.len() {
            return Ok(());
        }
        match self.src[self.pos] {
            b'\n' | b'#' | b'[' => Ok(()),
            q @ (b'\'' | b'"') => self.lex_quoted(q),
            _ => {
                let start = self.pos;
                while self.pos < self.src.len()
                    && !matches!(self.src[self.pos], b' ' | b'\t' | b'\r' | b'\n')
                    && self.src[self.pos] != b'['
                {
                    self.pos += 1;
                }
                let text = &self.input[start..self.pos];
                let kind = if parse_bool_literal(text).is_some() {
                    TokenKind::Bool
                } else if is_number_literal(text) {
                    TokenKind::Number
                } else {
                    TokenKind::String
                };
                self.tokens
                    .push(Token::new(kind, text, self.line, self.column(start)));
                Ok(())
            }
        }
    }

    /// Lex a quoted string body; only the quote character itself can be
    /// backslash-escaped. The token text keeps the surrounding quotes.
    fn lex_quoted(&mut self, quote: u8) -> HitResult<()> {
        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column(start);
        self.pos += 1;
        while self.pos < self.src.len() {
            let b = self.src[self.pos];
            if b == b'\\' && self.pos + 1 < self.src.len() && self.src[self.pos + 1] == quote {
                self.pos += 2;
                continue;
            }
            if b == quote {
                self.pos += 1;
                self.tokens.push(Token::new(
                    TokenKind::String,
                    &self.input[start..self.pos],
                    start_line,
                    start_col,
                ));
                return Ok(());
            }
            if b == b'\n' {
                self.line += 1;
                self.line_start = self.pos + 1;
            }
            self.pos += 1;
        }
        Err(HitError::parse(
            self.label,
            start_line,
            "unterminated quoted string",
        ))
    }
}
