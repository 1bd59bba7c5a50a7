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

//! Slash-delimited node path helpers.

/// Normalize a node path: drop empty segments and `.` segments, rejoin with
/// single slashes. `..` segments are kept verbatim; they only have meaning
/// inside section terminators and are not resolved here.
pub fn path_norm(path: &str) -> String {
    path.split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Join path elements with slashes, skipping empty elements, and normalize
/// the result.
pub fn path_join<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    path_norm(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== path_norm ====================

    #[test]
    fn test_norm_collapses_slashes_and_dots() {
        assert_eq!(path_norm("a//b/./c"), "a/b/c");
    }

    #[test]
    fn test_norm_strips_leading_and_trailing() {
        assert_eq!(path_norm("/a/b/"), "a/b");
        assert_eq!(path_norm("./a"), "a");
    }

    #[test]
    fn test_norm_identity() {
        assert_eq!(path_norm("a/b/c"), "a/b/c");
        assert_eq!(path_norm("a"), "a");
    }

    #[test]
    fn test_norm_empty_inputs() {
        assert_eq!(path_norm(""), "");
        assert_eq!(path_norm("/"), "");
        assert_eq!(path_norm("."), "");
        assert_eq!(path_norm("././"), "");
    }

    #[test]
    fn test_norm_keeps_dotdot() {
        assert_eq!(path_norm("../"), "..");
        assert_eq!(path_norm("a/../b"), "a/../b");
    }

    // ==================== path_join ====================

    #[test]
    fn test_join_basic() {
        assert_eq!(path_join(["a", "b"]), "a/b");
        assert_eq!(path_join(["a/b", "c"]), "a/b/c");
    }

    #[test]
    fn test_join_skips_empty() {
        assert_eq!(path_join(["", "a", "", "b"]), "a/b");
        assert_eq!(path_join(["", ""]), "");
    }

    #[test]
    fn test_join_normalizes() {
        assert_eq!(path_join(["a/", "/b"]), "a/b");
        assert_eq!(path_join(["./a", "b/."]), "a/b");
    }
}
