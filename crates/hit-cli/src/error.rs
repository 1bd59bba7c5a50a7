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

//! Error type for HIT CLI operations.

use hit::HitError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for HIT CLI operations.
///
/// All command handlers return `Result<T, CliError>` so the binary has one
/// place that formats failures for the user.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read or write), tagged with the path.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// A library-level failure: parse error, unknown parameter, type
    /// mismatch, or unsupported type name. The library message already
    /// carries file and line context where applicable.
    #[error("{0}")]
    Hit(#[from] HitError),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "test.i",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("test.i"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_hit_error_passthrough() {
        let err: CliError = HitError::parse("in.i", 3, "bad token").into();
        assert_eq!(err.to_string(), "in.i:3: bad token");
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::io_error("a.i", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), err.clone().to_string());
    }
}
