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

//! HIT command line interface.

use clap::Parser;
use hit_cli::cli::Commands;
use std::process::ExitCode;

/// HIT - Hierarchical Input Text toolkit
///
/// Command-line interface for working with HIT input files: validation,
/// canonical formatting, typed parameter lookup, and overlay merging.
///
/// # Examples
///
/// ```bash
/// # Validate an input file
/// hit validate sim.i
///
/// # Rewrite a file in canonical form
/// hit format sim.i --output formatted.i
///
/// # Read one parameter with a type check
/// hit get sim.i mesh/dim --type int
///
/// # Apply command-line style overrides
/// hit merge sim.i overrides.i
/// ```
#[derive(Parser)]
#[command(name = "hit")]
#[command(author, version, about = "HIT - Hierarchical Input Text toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
