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

//! Parser, tree model, and transformations for the HIT hierarchical input
//! text format.
//!
//! HIT is a plain-text configuration format built from nestable sections,
//! `name = value` fields, and `#` comments:
//!
//! ```text
//! # line comment
//! [section-path]
//!   field = value          # inline comment
//!   flag = true
//!   coords = '0 1 2'
//!   [nested/section]
//!     file = mesh.e
//!   [../]
//! []
//! ```
//!
//! Section paths and field names are runs of `[a-zA-Z0-9_./:<>+-]`; both
//! `[../]` and `[]` close the innermost open section. Values are booleans
//! (`true/yes/on`, `false/no/off`, case-insensitive), numbers, or strings;
//! quoting (single or double) makes any text a single value and only the
//! quote character itself can be backslash-escaped.
//!
//! # Example
//!
//! ```
//! let tree = hit::parse("input.hit", "[mesh]\n  dim = 2\n[../]\n")?;
//! assert_eq!(tree.param::<i64>(tree.root(), "mesh/dim")?, 2);
//! # Ok::<(), hit::HitError>(())
//! ```
//!
//! Values convert lazily: every field can be read as a string, and typed
//! retrieval via [`Tree::param`] coerces the raw text on access. Trees can
//! be edited, merged with [`merge`], normalized with [`explode`], and
//! rendered back to text with [`Tree::render`].

mod error;
mod lex;
mod parse;
mod path;
mod render;
mod transform;
mod tree;
mod value;

pub use error::{HitError, HitErrorKind, HitResult};
pub use lex::{Token, TokenKind};
pub use parse::{check, parse};
pub use path::{path_join, path_norm};
pub use transform::{explode, merge};
pub use tree::{NodeId, NodeType, Tree, Walker};
pub use value::{FromField, Kind};
