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

//! Recursive-descent parser from tokens to a node tree.
//!
//! Parsing is fail-fast: the first lexical or grammatical violation aborts
//! with a [`HitError::Parse`] carrying the caller's input label and the
//! 1-based line, and no tree is produced. Every built node records the line
//! and the token slice it came from.

use crate::error::{HitError, HitResult};
use crate::lex::{lex, Token, TokenKind};
use crate::path::path_norm;
use crate::tree::{NodeId, Tree};
use crate::value::Kind;

/// Parse HIT `input` into a tree. `label` names the input in error
/// messages, typically the file name.
pub fn parse(label: &str, input: &str) -> HitResult<Tree> {
    let tokens = lex(label, input)?;
    Parser::new(label, tokens).run()
}

/// Validate HIT `input` without keeping the tree.
pub fn check(label: &str, input: &str) -> HitResult<()> {
    parse(label, input).map(|_| ())
}

struct Parser<'a> {
    label: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(label: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            label,
            tokens,
            pos: 0,
        }
    }

    fn err(&self, line: usize, message: impl Into<String>) -> HitError {
        HitError::parse(self.label, line, message)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn run(mut self) -> HitResult<Tree> {
        let mut tree = Tree::new();
        // Innermost open section is on top; the root never closes.
        let mut stack: Vec<(NodeId, usize)> = vec![(tree.root(), 0)];

        while let Some(tok) = self.peek() {
            match tok.kind {
                TokenKind::LeftBracket => self.parse_section_marker(&mut tree, &mut stack)?,
                TokenKind::Path => self.parse_field(&mut tree, stack.last().unwrap().0)?,
                TokenKind::Comment | TokenKind::InlineComment => {
                    let tok = self.tokens[self.pos].clone();
                    let inline = tok.kind == TokenKind::InlineComment;
                    let line = tok.line;
                    let text = tok.text.clone();
                    tree.add_comment_at(stack.last().unwrap().0, &text, inline, line, vec![tok]);
                    self.pos += 1;
                }
                _ => {
                    return Err(self.err(
                        tok.line,
                        format!("unexpected token '{}'", tok.text),
                    ));
                }
            }
        }

        if stack.len() > 1 {
            let (unclosed, line) = *stack.last().unwrap();
            return Err(self.err(
                line,
                format!("unterminated section '{}'", tree.fullpath(unclosed)),
            ));
        }
        Ok(tree)
    }

    /// Parse one `[...]` marker: a section opening, or a `[../]` / `[]`
    /// terminator for the innermost open section.
    fn parse_section_marker(
        &mut self,
        tree: &mut Tree,
        stack: &mut Vec<(NodeId, usize)>,
    ) -> HitResult<()> {
        let open = self.tokens[self.pos].clone();
        self.pos += 1;

        let (path_tok, raw_path) = match self.peek() {
            Some(t) if t.kind == TokenKind::Path => {
                let t = t.clone();
                self.pos += 1;
                let raw = t.text.clone();
                (Some(t), raw)
            }
            Some(t) if t.kind == TokenKind::RightBracket => (None, String::new()),
            Some(t) => {
                return Err(self.err(
                    t.line,
                    format!("expected section path or ']', found '{}'", t.text),
                ));
            }
            None => return Err(self.err(open.line, "unexpected end of input after '['")),
        };

        let close = match self.peek() {
            Some(t) if t.kind == TokenKind::RightBracket => {
                let t = t.clone();
                self.pos += 1;
                t
            }
            Some(t) => {
                return Err(self.err(
                    t.line,
                    format!("expected ']', found '{}'", t.text),
                ));
            }
            None => return Err(self.err(open.line, "unexpected end of input in section marker")),
        };

        let normalized = path_norm(&raw_path);
        if raw_path.is_empty() || normalized == ".." {
            // Terminator: only "[../]" and "[]" close a section.
            if stack.len() == 1 {
                return Err(self.err(open.line, "section closing with no open section"));
            }
            stack.pop();
            return Ok(());
        }
        if normalized.is_empty() || normalized.split('/').any(|seg| seg == "..") {
            return Err(self.err(
                open.line,
                format!("invalid section name '{}'", raw_path),
            ));
        }

        let mut tokens = vec![open.clone()];
        if let Some(t) = path_tok {
            tokens.push(t);
        }
        tokens.push(close);
        let id = tree.add_section_at(stack.last().unwrap().0, &normalized, open.line, tokens);
        stack.push((id, open.line));
        Ok(())
    }

    /// Parse one `name = value` field under `parent`.
    fn parse_field(&mut self, tree: &mut Tree, parent: NodeId) -> HitResult<()> {
        let name_tok = self.tokens[self.pos].clone();
        self.pos += 1;

        let equals = match self.peek() {
            Some(t) if t.kind == TokenKind::Equals => {
                let t = t.clone();
                self.pos += 1;
                t
            }
            Some(t) => {
                return Err(self.err(
                    t.line,
                    format!("expected '=' after '{}', found '{}'", name_tok.text, t.text),
                ));
            }
            None => {
                return Err(self.err(
                    name_tok.line,
                    format!("expected '=' after '{}'", name_tok.text),
                ));
            }
        };

        let value_tok = match self.peek() {
            Some(t)
                if matches!(
                    t.kind,
                    TokenKind::Number | TokenKind::Bool | TokenKind::String
                ) =>
            {
                let t = t.clone();
                self.pos += 1;
                t
            }
            _ => {
                return Err(self.err(
                    name_tok.line,
                    format!("field '{}' has no value", name_tok.text),
                ));
            }
        };

        let kind = Kind::infer(&value_tok.text);
        let line = name_tok.line;
        let value = value_tok.text.clone();
        let name = name_tok.text.clone();
        tree.add_field_at(
            parent,
            &name,
            kind,
            &value,
            line,
            vec![name_tok, equals, value_tok],
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeType;
    use crate::HitErrorKind;

    // ==================== Basic structure ====================

    #[test]
    fn test_parse_empty_input() {
        let t = parse("t", "").unwrap();
        assert_eq!(t.node_count(), 1);
        assert!(t.children(t.root()).is_empty());
    }

    #[test]
    fn test_parse_flat_fields() {
        let t = parse("t", "a = 1\nb = two\n").unwrap();
        assert_eq!(t.children(t.root()).len(), 2);
        assert_eq!(t.param::<i64>(t.root(), "a").unwrap(), 1);
        assert_eq!(t.param::<String>(t.root(), "b").unwrap(), "two");
    }

    #[test]
    fn test_parse_nested_sections() {
        let src = "[outer]\n  [inner]\n    x = 3\n  [../]\n[../]\n";
        let t = parse("t", src).unwrap();
        assert_eq!(t.param::<i64>(t.root(), "outer/inner/x").unwrap(), 3);
        let inner = t.find(t.root(), "outer/inner").unwrap();
        assert_eq!(t.fullpath(inner), "outer/inner");
    }

    #[test]
    fn test_parse_empty_terminator() {
        let t = parse("t", "[a]\nx = 1\n[]\n").unwrap();
        assert_eq!(t.param::<i64>(t.root(), "a/x").unwrap(), 1);
    }

    #[test]
    fn test_parse_section_path_normalized() {
        let t = parse("t", "[./a//b]\nx = 1\n[../]\n").unwrap();
        let sec = t.children(t.root())[0];
        assert_eq!(t.path(sec), "a/b");
    }

    #[test]
    fn test_parse_multi_segment_field_name() {
        let t = parse("t", "foo/bar = 1\n").unwrap();
        let f = t.children(t.root())[0];
        assert_eq!(t.path(f), "foo/bar");
        assert_eq!(t.node_type(f), NodeType::Field);
    }

    // ==================== Line provenance and tokens ====================

    #[test]
    fn test_parse_records_lines() {
        let t = parse("t", "[a]\n\nx = 1\n[../]\n").unwrap();
        let a = t.find(t.root(), "a").unwrap();
        let x = t.find(t.root(), "a/x").unwrap();
        assert_eq!(t.line(a), 1);
        assert_eq!(t.line(x), 3);
    }

    #[test]
    fn test_parse_retains_tokens() {
        let t = parse("t", "x = 'a b'\n").unwrap();
        let x = t.children(t.root())[0];
        let toks = t.tokens(x);
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[0].kind, TokenKind::Path);
        assert_eq!(toks[2].text, "'a b'");
    }

    // ==================== Values and kinds ====================

    #[test]
    fn test_parse_kind_inference() {
        let t = parse("t", "a=1 b=2.5 c=on d=text e='7'\n").unwrap();
        let root = t.root();
        let kind_of = |p: &str| t.kind(t.find(root, p).unwrap()).unwrap();
        assert_eq!(kind_of("a"), Kind::Int);
        assert_eq!(kind_of("b"), Kind::Float);
        assert_eq!(kind_of("c"), Kind::Bool);
        assert_eq!(kind_of("d"), Kind::String);
        assert_eq!(kind_of("e"), Kind::String);
    }

    #[test]
    fn test_parse_quoted_value_raw_keeps_quotes() {
        let t = parse("t", "a = 'x y'\n").unwrap();
        let a = t.children(t.root())[0];
        assert_eq!(t.raw_val(a).unwrap(), "'x y'");
        assert_eq!(t.str_val(a).unwrap(), "x y");
    }

    // ==================== Comments ====================

    #[test]
    fn test_parse_comments_are_nodes() {
        let src = "# header\n[a]\nx = 1 # inline\n[../]\n";
        let t = parse("t", src).unwrap();
        let root_kids = t.children(t.root());
        assert_eq!(t.node_type(root_kids[0]), NodeType::Comment);
        let a = t.find(t.root(), "a").unwrap();
        let comments = t.children_of(a, NodeType::Comment);
        assert_eq!(comments.len(), 1);
    }

    // ==================== Errors ====================

    #[test]
    fn test_parse_missing_value_cites_field_line() {
        let err = parse("in.hit", "[a]\nx =\n[../]\n").unwrap_err();
        assert_eq!(err.kind(), HitErrorKind::Parse);
        assert_eq!(err.to_string(), "in.hit:2: field 'x' has no value");
    }

    #[test]
    fn test_parse_unterminated_section() {
        let err = parse("in.hit", "[a]\nx = 1\n").unwrap_err();
        assert_eq!(err.to_string(), "in.hit:1: unterminated section 'a'");
    }

    #[test]
    fn test_parse_unterminated_nested_cites_innermost() {
        let err = parse("in.hit", "[a]\n[b]\nx = 1\n[../]\n").unwrap_err();
        assert_eq!(err.to_string(), "in.hit:2: unterminated section 'a/b'");
    }

    #[test]
    fn test_parse_stray_terminator() {
        let err = parse("in.hit", "[../]\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "in.hit:1: section closing with no open section"
        );
    }

    #[test]
    fn test_parse_missing_equals() {
        let err = parse("in.hit", "x 1\n").unwrap_err();
        assert_eq!(err.kind(), HitErrorKind::Parse);
        assert!(err.to_string().contains("expected '='"));
    }

    #[test]
    fn test_parse_fail_fast_produces_no_tree() {
        assert!(parse("t", "good = 1\n[oops\n").is_err());
    }

    #[test]
    fn test_check() {
        assert!(check("t", "[a]\nx = 1\n[../]\n").is_ok());
        assert!(check("t", "[a]\n").is_err());
    }
}
