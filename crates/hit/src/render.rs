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

//! Rendering a tree back to canonical HIT text.
//!
//! Output is normalized rather than byte-faithful: two spaces of indentation
//! per nesting level, every section closed with `[../]`, one entry per line.
//! Re-parsing the rendered text yields a tree equivalent to the original.

use crate::tree::{NodeData, NodeId, Tree};

fn is_quoted(raw: &str) -> bool {
    let b = raw.as_bytes();
    b.len() >= 2 && (b[0] == b'\'' || b[0] == b'"') && b[b.len() - 1] == b[0]
}

/// Format a raw field value for output. Values that came through the parser
/// are emitted verbatim; programmatically set values are quoted when the
/// raw text would not re-lex as a single value token.
fn format_value(raw: &str) -> String {
    if is_quoted(raw) {
        return raw.to_string();
    }
    let needs_quotes = raw.is_empty()
        || raw.bytes().any(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
        || raw.contains('[')
        || raw.starts_with('#')
        || raw.starts_with('\'')
        || raw.starts_with('"');
    if needs_quotes {
        format!("'{}'", raw.replace('\'', "\\'"))
    } else {
        raw.to_string()
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

impl Tree {
    /// Render the whole tree as HIT text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_children(self.root(), 0, &mut out);
        out
    }

    fn render_children(&self, id: NodeId, depth: usize, out: &mut String) {
        for &child in self.children(id) {
            match self.data(child) {
                NodeData::Root => {}
                NodeData::Comment { text, inline } => {
                    // Inline comments re-attach to the line just rendered.
                    if *inline && out.ends_with('\n') {
                        out.pop();
                        out.push(' ');
                        out.push_str(text);
                        out.push('\n');
                    } else {
                        push_indent(out, depth);
                        out.push_str(text);
                        out.push('\n');
                    }
                }
                NodeData::Field { name, value, .. } => {
                    push_indent(out, depth);
                    out.push_str(name);
                    out.push_str(" = ");
                    out.push_str(&format_value(value));
                    out.push('\n');
                }
                NodeData::Section { path } => {
                    push_indent(out, depth);
                    out.push('[');
                    out.push_str(path);
                    out.push_str("]\n");
                    self.render_children(child, depth + 1, out);
                    push_indent(out, depth);
                    out.push_str("[../]\n");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::value::Kind;

    // ==================== Layout ====================

    #[test]
    fn test_render_nested_layout() {
        let src = "[outer][inner]x=3[../][../]";
        let t = parse("t", src).unwrap();
        assert_eq!(
            t.render(),
            "[outer]\n  [inner]\n    x = 3\n  [../]\n[../]\n"
        );
    }

    #[test]
    fn test_render_normalizes_terminators() {
        let t = parse("t", "[a]\nx = 1\n[]\n").unwrap();
        assert_eq!(t.render(), "[a]\n  x = 1\n[../]\n");
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(Tree::new().render(), "");
    }

    // ==================== Values ====================

    #[test]
    fn test_render_quoted_value_verbatim() {
        let t = parse("t", "a = 'x y'\n").unwrap();
        assert_eq!(t.render(), "a = 'x y'\n");
    }

    #[test]
    fn test_render_quotes_programmatic_values() {
        let mut t = Tree::new();
        let root = t.root();
        t.add_field(root, "a", Kind::String, "two words");
        t.add_field(root, "b", Kind::String, "");
        t.add_field(root, "c", Kind::String, "#leading");
        t.add_field(root, "d", Kind::Int, "42");
        assert_eq!(
            t.render(),
            "a = 'two words'\nb = ''\nc = '#leading'\nd = 42\n"
        );
    }

    #[test]
    fn test_render_escapes_embedded_quote() {
        let mut t = Tree::new();
        let root = t.root();
        t.add_field(root, "a", Kind::String, "it's here");
        let rendered = t.render();
        assert_eq!(rendered, "a = 'it\\'s here'\n");
        let back = parse("t", &rendered).unwrap();
        let f = back.children(back.root())[0];
        assert_eq!(back.str_val(f).unwrap(), "it's here");
    }

    // ==================== Comments ====================

    #[test]
    fn test_render_block_comment() {
        let t = parse("t", "# header\nx = 1\n").unwrap();
        assert_eq!(t.render(), "# header\nx = 1\n");
    }

    #[test]
    fn test_render_inline_comment_reattaches() {
        let t = parse("t", "x = 1 # note\n").unwrap();
        assert_eq!(t.render(), "x = 1 # note\n");
    }

    #[test]
    fn test_render_inline_comment_after_section_open() {
        let t = parse("t", "[a] # opening\nx = 1\n[../]\n").unwrap();
        assert_eq!(t.render(), "[a] # opening\n  x = 1\n[../]\n");
    }

    // ==================== Round trip ====================

    #[test]
    fn test_round_trip_equivalence() {
        let src = "# top\n[mesh]\n  dim = 2 # dims\n  file = 'sq uare.e'\n  [gen]\n    active = on\n  [../]\n[../]\nglobal = -1.5e3\n";
        let t = parse("t", src).unwrap();
        let back = parse("t", &t.render()).unwrap();
        assert!(t.equivalent(&back));
    }

    #[test]
    fn test_render_is_fixpoint() {
        let src = "[a]x=1 # c\n[b]y='q w'[../][../]";
        let t = parse("t", src).unwrap();
        let once = t.render();
        let twice = parse("t", &once).unwrap().render();
        assert_eq!(once, twice);
    }
}
