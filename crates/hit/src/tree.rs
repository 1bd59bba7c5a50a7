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

//! The parsed HIT node tree.
//!
//! Nodes live in an arena owned by [`Tree`] and are addressed by [`NodeId`]
//! indices. Each node stores a list of owned child indices and a non-owning
//! parent index, so the parent back-reference can never extend a node's
//! lifetime or form an ownership cycle. Children are kept in insertion
//! order, which is semantically significant and survives render round-trips.

use crate::error::{HitError, HitResult};
use crate::lex::{parse_bool_literal, strip_quotes, Token};
use crate::path::{path_join, path_norm};
use crate::value::{FromField, Kind};

/// Every element type in a parsed HIT tree.
///
/// `All` is not a node type itself; it is accepted by traversal and child
/// filtering functions to indicate "all types".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Matches every node type in filters.
    All,
    /// The single top-level container of a parsed tree.
    Root,
    /// A `[pathname] ... [../]` section.
    Section,
    /// A `name=value` pair.
    Field,
    /// A `#` comment preserved for faithful rendering.
    Comment,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Root => write!(f, "Root"),
            Self::Section => write!(f, "Section"),
            Self::Field => write!(f, "Field"),
            Self::Comment => write!(f, "Comment"),
        }
    }
}

/// Handle to a node inside a [`Tree`] arena.
///
/// A `NodeId` is only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeData {
    Root,
    Section {
        path: String,
    },
    Field {
        name: String,
        kind: Kind,
        value: String,
    },
    Comment {
        text: String,
        inline: bool,
    },
}

#[derive(Debug, Clone)]
struct NodeEntry {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    line: usize,
    tokens: Vec<Token>,
}

/// Visitor for [`Tree::walk`].
///
/// `walk` is called once per visited node with the node's full path from the
/// tree root and its own path contribution (section name for sections, field
/// name for fields, empty otherwise).
pub trait Walker {
    /// Visit one node.
    fn walk(&mut self, fullpath: &str, nodepath: &str, tree: &Tree, id: NodeId);
}

impl<F> Walker for F
where
    F: FnMut(&str, &str, &Tree, NodeId),
{
    fn walk(&mut self, fullpath: &str, nodepath: &str, tree: &Tree, id: NodeId) {
        self(fullpath, nodepath, tree, id)
    }
}

/// An in-memory HIT document: a root node owning an ordered tree of
/// sections, fields, and comments.
///
/// Trees are produced by [`crate::parse`] or built programmatically with the
/// `add_*` methods. Cloning a `Tree` yields a fully independent copy with no
/// sharing.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<NodeEntry>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create an empty tree holding only a root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeEntry {
                data: NodeData::Root,
                parent: None,
                children: Vec::new(),
                line: 0,
                tokens: Vec::new(),
            }],
        }
    }

    /// The root node of this tree.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn entry(&self, id: NodeId) -> &NodeEntry {
        &self.nodes[id.0]
    }

    fn entry_mut(&mut self, id: NodeId) -> &mut NodeEntry {
        &mut self.nodes[id.0]
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.entry(id).data
    }

    /// The type of the given node.
    pub fn node_type(&self, id: NodeId) -> NodeType {
        match self.entry(id).data {
            NodeData::Root => NodeType::Root,
            NodeData::Section { .. } => NodeType::Section,
            NodeData::Field { .. } => NodeType::Field,
            NodeData::Comment { .. } => NodeType::Comment,
        }
    }

    /// The node's own contribution to its full path: the section name for
    /// sections, the field name for fields, empty for everything else.
    pub fn path(&self, id: NodeId) -> &str {
        match &self.entry(id).data {
            NodeData::Section { path } => path,
            NodeData::Field { name, .. } => name,
            _ => "",
        }
    }

    /// The full path from the tree root down to this node, with every
    /// ancestor section contributing one element.
    pub fn fullpath(&self, id: NodeId) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            let p = self.path(c);
            if !p.is_empty() {
                parts.push(p);
            }
            cur = self.parent(c);
        }
        parts.reverse();
        path_join(parts)
    }

    /// 1-based line of the original input this node was built from, or 0
    /// for programmatically created nodes.
    pub fn line(&self, id: NodeId) -> usize {
        self.entry(id).line
    }

    /// The raw lexer tokens this node was generated from.
    pub fn tokens(&self, id: NodeId) -> &[Token] {
        &self.entry(id).tokens
    }

    /// The node's parent, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entry(id).parent
    }

    /// The node's children, in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.entry(id).children
    }

    /// The node's children of the given type, in insertion order.
    pub fn children_of(&self, id: NodeId, t: NodeType) -> Vec<NodeId> {
        self.entry(id)
            .children
            .iter()
            .copied()
            .filter(|&c| t == NodeType::All || self.node_type(c) == t)
            .collect()
    }

    // ==================== Construction ====================

    pub(crate) fn add_node(
        &mut self,
        parent: NodeId,
        data: NodeData,
        line: usize,
        tokens: Vec<Token>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeEntry {
            data,
            parent: Some(parent),
            children: Vec::new(),
            line,
            tokens,
        });
        self.entry_mut(parent).children.push(id);
        id
    }

    /// Append a new section under `parent`. The section name is normalized
    /// with [`path_norm`].
    pub fn add_section(&mut self, parent: NodeId, path: &str) -> NodeId {
        self.add_section_at(parent, path, 0, Vec::new())
    }

    pub(crate) fn add_section_at(
        &mut self,
        parent: NodeId,
        path: &str,
        line: usize,
        tokens: Vec<Token>,
    ) -> NodeId {
        self.add_node(
            parent,
            NodeData::Section {
                path: path_norm(path),
            },
            line,
            tokens,
        )
    }

    /// Append a new field under `parent`. The field name is normalized with
    /// [`path_norm`].
    pub fn add_field(&mut self, parent: NodeId, name: &str, kind: Kind, value: &str) -> NodeId {
        self.add_field_at(parent, name, kind, value, 0, Vec::new())
    }

    pub(crate) fn add_field_at(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: Kind,
        value: &str,
        line: usize,
        tokens: Vec<Token>,
    ) -> NodeId {
        self.add_node(
            parent,
            NodeData::Field {
                name: path_norm(name),
                kind,
                value: value.to_string(),
            },
            line,
            tokens,
        )
    }

    /// Append a new comment under `parent`. `text` should include the
    /// leading `#`; `inline` marks a comment that shares a line with the
    /// preceding entry.
    pub fn add_comment(&mut self, parent: NodeId, text: &str, inline: bool) -> NodeId {
        self.add_comment_at(parent, text, inline, 0, Vec::new())
    }

    pub(crate) fn add_comment_at(
        &mut self,
        parent: NodeId,
        text: &str,
        inline: bool,
        line: usize,
        tokens: Vec<Token>,
    ) -> NodeId {
        self.add_node(
            parent,
            NodeData::Comment {
                text: text.to_string(),
                inline,
            },
            line,
            tokens,
        )
    }

    // ==================== Field access and mutation ====================

    /// The inferred kind of a field's value, or `None` for non-fields.
    pub fn kind(&self, id: NodeId) -> Option<Kind> {
        match self.entry(id).data {
            NodeData::Field { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// The raw text of a field's value exactly as written in the input
    /// (quoted values keep their quotes), or `None` for non-fields.
    pub fn raw_val(&self, id: NodeId) -> Option<&str> {
        match &self.entry(id).data {
            NodeData::Field { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Overwrite a field's raw value. A `kind` of [`Kind::None`] keeps the
    /// field's current kind; any other kind replaces it. Overwriting the
    /// value never re-infers the kind: a `Bool` field set to `"42"` stays
    /// `Bool` and simply satisfies integer retrievals instead.
    pub fn set_value(&mut self, id: NodeId, value: &str, kind: Kind) -> HitResult<()> {
        let fullpath = self.fullpath(id);
        match &mut self.entry_mut(id).data {
            NodeData::Field {
                value: v, kind: k, ..
            } => {
                *v = value.to_string();
                if kind != Kind::None {
                    *k = kind;
                }
                Ok(())
            }
            _ => Err(HitError::type_mismatch(format!(
                "node at '{}' is not a field",
                fullpath
            ))),
        }
    }

    pub(crate) fn set_field_raw(&mut self, id: NodeId, value: String, kind: Kind) {
        if let NodeData::Field {
            value: v, kind: k, ..
        } = &mut self.entry_mut(id).data
        {
            *v = value;
            *k = kind;
        }
    }

    pub(crate) fn rename(&mut self, id: NodeId, new_path: String) {
        match &mut self.entry_mut(id).data {
            NodeData::Section { path } => *path = new_path,
            NodeData::Field { name, .. } => *name = new_path,
            _ => {}
        }
    }

    pub(crate) fn detach(&mut self, id: NodeId) -> Option<usize> {
        let parent = self.entry(id).parent?;
        let idx = self
            .entry(parent)
            .children
            .iter()
            .position(|&c| c == id)?;
        self.entry_mut(parent).children.remove(idx);
        self.entry_mut(id).parent = None;
        Some(idx)
    }

    pub(crate) fn attach(&mut self, id: NodeId, parent: NodeId) {
        self.entry_mut(id).parent = Some(parent);
        self.entry_mut(parent).children.push(id);
    }

    pub(crate) fn move_child_to(&mut self, parent: NodeId, child: NodeId, index: usize) {
        let children = &mut self.entry_mut(parent).children;
        if let Some(cur) = children.iter().position(|&c| c == child) {
            children.remove(cur);
            let index = index.min(children.len());
            children.insert(index, child);
        }
    }

    // ==================== Typed value retrieval ====================

    fn value_of(&self, id: NodeId) -> HitResult<&str> {
        match &self.entry(id).data {
            NodeData::Field { value, .. } => Ok(value),
            _ => Err(HitError::type_mismatch(format!(
                "{} node at '{}' does not hold a value",
                self.node_type(id),
                self.fullpath(id)
            ))),
        }
    }

    /// The field's value as a string. This is the only getter that succeeds
    /// for every value-bearing node: all values were written as strings, so
    /// this returns that text with any surrounding quotes stripped and the
    /// same-quote escape resolved.
    pub fn str_val(&self, id: NodeId) -> HitResult<String> {
        Ok(strip_quotes(self.value_of(id)?))
    }

    /// The field's value coerced to a boolean.
    pub fn bool_val(&self, id: NodeId) -> HitResult<bool> {
        let s = self.str_val(id)?;
        parse_bool_literal(&s)
            .ok_or_else(|| HitError::type_mismatch(format!("cannot convert '{}' to bool", s)))
    }

    /// The field's value coerced to an integer.
    pub fn int_val(&self, id: NodeId) -> HitResult<i64> {
        let s = self.str_val(id)?;
        s.trim()
            .parse::<i64>()
            .map_err(|_| HitError::type_mismatch(format!("cannot convert '{}' to int", s)))
    }

    /// The field's value coerced to a float.
    pub fn float_val(&self, id: NodeId) -> HitResult<f64> {
        let s = self.str_val(id)?;
        s.trim()
            .parse::<f64>()
            .map_err(|_| HitError::type_mismatch(format!("cannot convert '{}' to float", s)))
    }

    /// The field's value split on whitespace with every element coerced to
    /// an integer. A single bad element fails the whole call.
    pub fn vec_int_val(&self, id: NodeId) -> HitResult<Vec<i64>> {
        let s = self.str_val(id)?;
        s.split_whitespace()
            .map(|el| {
                el.parse::<i64>().map_err(|_| {
                    HitError::type_mismatch(format!("cannot convert element '{}' to int", el))
                })
            })
            .collect()
    }

    /// The field's value split on whitespace with every element coerced to
    /// a float. A single bad element fails the whole call.
    pub fn vec_float_val(&self, id: NodeId) -> HitResult<Vec<f64>> {
        let s = self.str_val(id)?;
        s.split_whitespace()
            .map(|el| {
                el.parse::<f64>().map_err(|_| {
                    HitError::type_mismatch(format!("cannot convert element '{}' to float", el))
                })
            })
            .collect()
    }

    /// The field's value split on whitespace into strings.
    pub fn vec_str_val(&self, id: NodeId) -> HitResult<Vec<String>> {
        let s = self.str_val(id)?;
        Ok(s.split_whitespace().map(str::to_string).collect())
    }

    // ==================== Path resolution ====================

    /// Follow `path` downward from `from` and return the first node at that
    /// exact relative path, if any. `find` never consults the starting
    /// node's own ancestors.
    pub fn find(&self, from: NodeId, path: &str) -> Option<NodeId> {
        let target = path_norm(path);
        if target.is_empty() {
            return None;
        }
        self.find_inner(from, &target, "")
    }

    fn find_inner(&self, id: NodeId, target: &str, prefix: &str) -> Option<NodeId> {
        for &child in self.children(id) {
            let own = self.path(child);
            if own.is_empty() {
                continue;
            }
            let childpath = path_join([prefix, own]);
            if childpath == target {
                return Some(child);
            }
            if target.starts_with(&format!("{}/", childpath)) {
                if let Some(found) = self.find_inner(child, target, &childpath) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Retrieve the value stored at `path` (relative to `from`) as type
    /// `T`. An empty path reads `from` itself. Fails with `NotFound` if no
    /// node exists at the path, and with `TypeMismatch` if the node does
    /// not hold a value representable as `T`.
    pub fn param<T: FromField>(&self, from: NodeId, path: &str) -> HitResult<T> {
        let id = if path.is_empty() {
            from
        } else {
            self.find(from, path)
                .ok_or_else(|| HitError::not_found(path))?
        };
        T::from_field(self, id)
    }

    /// Like [`Tree::param`], but a missing node yields `default` instead of
    /// `NotFound`. Type and coercion failures still propagate.
    pub fn param_optional<T: FromField>(
        &self,
        from: NodeId,
        path: &str,
        default: T,
    ) -> HitResult<T> {
        if !path.is_empty() && self.find(from, path).is_none() {
            return Ok(default);
        }
        self.param(from, path)
    }

    // ==================== Traversal ====================

    /// Depth-first, pre-order traversal of the subtree rooted at `from`.
    ///
    /// Every child is descended into regardless of `filter`, but the walker
    /// is only invoked for nodes whose type matches. Traversal never
    /// ascends past `from`.
    pub fn walk<W: Walker + ?Sized>(&self, from: NodeId, filter: NodeType, walker: &mut W) {
        if filter == NodeType::All || self.node_type(from) == filter {
            let fullpath = self.fullpath(from);
            walker.walk(&fullpath, self.path(from), self, from);
        }
        for i in 0..self.children(from).len() {
            let child = self.children(from)[i];
            self.walk(child, filter, walker);
        }
    }

    // ==================== Cloning ====================

    /// Deep-copy the subtree rooted at `id` into `dest` under
    /// `dest_parent`, preserving node types, paths, kinds, raw values, and
    /// original line/token provenance. Returns the id of the copy in
    /// `dest`.
    pub fn clone_into(&self, id: NodeId, dest: &mut Tree, dest_parent: NodeId) -> NodeId {
        let entry = self.entry(id);
        let new_id = dest.add_node(
            dest_parent,
            entry.data.clone(),
            entry.line,
            entry.tokens.clone(),
        );
        for i in 0..self.children(id).len() {
            let child = self.children(id)[i];
            self.clone_into(child, dest, new_id);
        }
        new_id
    }

    /// An independently owned tree holding a deep copy of the subtree at
    /// `id`. If `id` is the root, this is equivalent to `clone()`.
    pub fn subtree(&self, id: NodeId) -> Tree {
        if id == self.root() {
            return self.clone();
        }
        let mut out = Tree::new();
        let root = out.root();
        self.clone_into(id, &mut out, root);
        out
    }

    // ==================== Equivalence ====================

    /// Structural and semantic equality: same node types, paths, kinds,
    /// raw values, and child order. Line numbers and retained tokens are
    /// ignored, so a tree compares equivalent to a re-parse of its own
    /// rendering.
    pub fn equivalent(&self, other: &Tree) -> bool {
        self.node_equivalent(self.root(), other, other.root())
    }

    fn node_equivalent(&self, a: NodeId, other: &Tree, b: NodeId) -> bool {
        if self.entry(a).data != other.entry(b).data {
            return false;
        }
        let ac = self.children(a);
        let bc = other.children(b);
        if ac.len() != bc.len() {
            return false;
        }
        ac.iter()
            .zip(bc.iter())
            .all(|(&x, &y)| self.node_equivalent(x, other, y))
    }
}
