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

//! Field value kinds and typed retrieval.
//!
//! A field stores its value as the raw string written in the input; `Kind`
//! records the semantic type inferred at parse time. The raw string remains
//! the source of truth: conversion happens lazily on retrieval and is
//! independent of the stored kind, so a `Bool` field whose text was later
//! set to `"42"` still satisfies an integer retrieval.

use crate::error::{HitError, HitResult};
use crate::lex::{is_number_literal, parse_bool_literal};
use crate::tree::{NodeId, Tree};

/// The inferred semantic type of a field's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// No kind recorded (e.g. a programmatically built field).
    None,
    /// Integer literal.
    Int,
    /// Floating-point literal (has a fractional part or exponent).
    Float,
    /// Boolean literal (`true/yes/on` or `false/no/off`, case-insensitive).
    Bool,
    /// Anything else, including all quoted values.
    String,
}

impl Kind {
    /// Infer the kind of a raw value as written in the input.
    ///
    /// Quoted values are always `String`. Otherwise the boolean literal set
    /// is tried first, then the numeric grammar (`Int` unless the literal
    /// carries a `.` or exponent), and `String` is the fallback.
    pub fn infer(raw: &str) -> Kind {
        if raw.starts_with('\'') || raw.starts_with('"') {
            return Kind::String;
        }
        if parse_bool_literal(raw).is_some() {
            return Kind::Bool;
        }
        if is_number_literal(raw) {
            if raw.contains(['.', 'e', 'E']) {
                Kind::Float
            } else {
                Kind::Int
            }
        } else {
            Kind::String
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Int => write!(f, "Int"),
            Self::Float => write!(f, "Float"),
            Self::Bool => write!(f, "Bool"),
            Self::String => write!(f, "String"),
        }
    }
}

/// Conversion from a value-bearing tree node to a concrete Rust type.
///
/// This trait gives [`Tree::param`] its per-type coercion mapping; each
/// implementation dispatches to exactly one of the tree's typed getters.
/// Types without an implementation are rejected at compile time; runtime
/// type-name dispatch (e.g. in a CLI) maps unknown names to
/// [`HitError::UnsupportedType`].
pub trait FromField: Sized {
    /// Retrieve the value stored at `id`, coerced to `Self`.
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self>;
}

impl FromField for bool {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        tree.bool_val(id)
    }
}

impl FromField for i64 {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        tree.int_val(id)
    }
}

impl FromField for i32 {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        let v = tree.int_val(id)?;
        i32::try_from(v)
            .map_err(|_| HitError::type_mismatch(format!("value '{}' out of range for i32", v)))
    }
}

impl FromField for u32 {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        let v = tree.int_val(id)?;
        u32::try_from(v)
            .map_err(|_| HitError::type_mismatch(format!("value '{}' out of range for u32", v)))
    }
}

impl FromField for f64 {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        tree.float_val(id)
    }
}

impl FromField for f32 {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        Ok(tree.float_val(id)? as f32)
    }
}

impl FromField for String {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        tree.str_val(id)
    }
}

impl FromField for Vec<i64> {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        tree.vec_int_val(id)
    }
}

impl FromField for Vec<f64> {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        tree.vec_float_val(id)
    }
}

impl FromField for Vec<String> {
    fn from_field(tree: &Tree, id: NodeId) -> HitResult<Self> {
        tree.vec_str_val(id)
    }
}
