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

//! Error types for HIT parsing and tree access.

use thiserror::Error;

/// The kind of error that occurred, for callers that dispatch on category
/// without matching the full variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitErrorKind {
    /// Lexical or grammatical violation; fatal to the in-progress parse.
    Parse,
    /// Path resolution found no node.
    NotFound,
    /// Requested value type does not match the retrievable content, or the
    /// node does not hold a value at all.
    TypeMismatch,
    /// A typed retrieval was requested for a type with no coercion mapping.
    UnsupportedType,
}

impl std::fmt::Display for HitErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse => write!(f, "ParseError"),
            Self::NotFound => write!(f, "NotFoundError"),
            Self::TypeMismatch => write!(f, "TypeMismatchError"),
            Self::UnsupportedType => write!(f, "UnsupportedTypeError"),
        }
    }
}

/// An error produced while parsing HIT input or querying a parsed tree.
///
/// Parsing is all-or-nothing: a `Parse` error means no tree was produced.
#[derive(Debug, Clone, Error)]
pub enum HitError {
    /// Syntax violation, tagged with the caller-supplied input label and the
    /// 1-based source line.
    #[error("{label}:{line}: {message}")]
    Parse {
        /// Label given to `parse` (typically a file name).
        label: String,
        /// 1-based line of the offending input.
        line: usize,
        /// Human-readable description of the violation.
        message: String,
    },

    /// No node exists at the requested path.
    #[error("no parameter named '{path}'")]
    NotFound {
        /// The path that failed to resolve.
        path: String,
    },

    /// The stored value cannot be coerced to the requested type.
    #[error("type mismatch: {message}")]
    TypeMismatch {
        /// Description of the failed coercion.
        message: String,
    },

    /// A runtime type-name dispatch had no mapping for the requested type.
    #[error("unsupported type '{name}'")]
    UnsupportedType {
        /// The unmapped type name.
        name: String,
    },
}

impl HitError {
    /// Create a parse error for the given input label and line.
    pub fn parse(label: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            label: label.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a not-found error for the given path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a type-mismatch error.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    /// Create an unsupported-type error.
    pub fn unsupported_type(name: impl Into<String>) -> Self {
        Self::UnsupportedType { name: name.into() }
    }

    /// The category of this error.
    pub fn kind(&self) -> HitErrorKind {
        match self {
            Self::Parse { .. } => HitErrorKind::Parse,
            Self::NotFound { .. } => HitErrorKind::NotFound,
            Self::TypeMismatch { .. } => HitErrorKind::TypeMismatch,
            Self::UnsupportedType { .. } => HitErrorKind::UnsupportedType,
        }
    }
}

/// Result type for HIT operations.
pub type HitResult<T> = Result<T, HitError>;
