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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate HIT files for syntax correctness
    Validate {
        /// Paths of the HIT files to validate
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Rewrite a HIT file in canonical form
    Format {
        /// Path to the HIT file to format
        file: String,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Explode slashed names into nested sections before formatting
        #[arg(long)]
        explode: bool,
    },

    /// Look up one parameter and print its value
    Get {
        /// Path to the HIT file to query
        file: String,

        /// Slash-delimited parameter path, e.g. mesh/dim
        path: String,

        /// Retrieval type: string, bool, int, float, vec-string,
        /// vec-int, or vec-float
        #[arg(short = 't', long = "type", default_value = "string")]
        type_name: String,
    },

    /// Merge an overlay file onto a base file and print the result
    Merge {
        /// Path to the base HIT file
        base: String,

        /// Path to the overlay HIT file; its values win
        overlay: String,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Validate { files } => commands::validate(&files),
            Commands::Format {
                file,
                output,
                explode,
            } => commands::format(&file, output.as_deref(), explode),
            Commands::Get {
                file,
                path,
                type_name,
            } => commands::get(&file, &path, &type_name),
            Commands::Merge {
                base,
                overlay,
                output,
            } => commands::merge(&base, &overlay, output.as_deref()),
        }
    }
}
