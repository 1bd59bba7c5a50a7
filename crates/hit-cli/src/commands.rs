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

//! Command handlers for the HIT CLI.

use crate::error::CliError;
use colored::Colorize;
use hit::{HitError, NodeId, NodeType, Tree};
use std::fs;
use std::path::Path;

fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

fn load(path: &str) -> Result<Tree, CliError> {
    let content = read_file(path)?;
    Ok(hit::parse(path, &content)?)
}

fn emit(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(p) => fs::write(p, text).map_err(|e| CliError::io_error(p, e)),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

/// Validate HIT files for syntax correctness.
///
/// Every file gets a one-line status; the first failure is returned after
/// all files have been checked.
pub fn validate(files: &[String]) -> Result<(), CliError> {
    let mut first_err = None;
    for file in files {
        if let Err(e) = validate_file(file) {
            first_err.get_or_insert(e);
        }
    }
    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn validate_file(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    match hit::parse(file, &content) {
        Ok(tree) => {
            let mut sections = 0usize;
            let mut fields = 0usize;
            tree.walk(
                tree.root(),
                NodeType::All,
                &mut |_f: &str, _n: &str, t: &Tree, id: NodeId| match t.node_type(id) {
                    NodeType::Section => sections += 1,
                    NodeType::Field => fields += 1,
                    _ => {}
                },
            );
            println!("{} {}", "✓".green().bold(), file);
            println!("  Sections: {}", sections);
            println!("  Fields: {}", fields);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(e.into())
        }
    }
}

/// Rewrite a HIT file in canonical form: normalized indentation, `[../]`
/// terminators, one entry per line. With `explode_paths`, slashed names are
/// expanded into nested sections first.
pub fn format(file: &str, output: Option<&Path>, explode_paths: bool) -> Result<(), CliError> {
    let mut tree = load(file)?;
    if explode_paths {
        hit::explode(&mut tree);
    }
    emit(&tree.render(), output)
}

/// Look up one parameter and print its value coerced to `type_name`.
///
/// Vector types print space-separated elements. An unknown type name is an
/// `UnsupportedType` error.
pub fn get(file: &str, path: &str, type_name: &str) -> Result<(), CliError> {
    let tree = load(file)?;
    let root = tree.root();
    let printed = match type_name {
        "string" => tree.param::<String>(root, path)?,
        "bool" => tree.param::<bool>(root, path)?.to_string(),
        "int" => tree.param::<i64>(root, path)?.to_string(),
        "float" => tree.param::<f64>(root, path)?.to_string(),
        "vec-string" => tree.param::<Vec<String>>(root, path)?.join(" "),
        "vec-int" => tree
            .param::<Vec<i64>>(root, path)?
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        "vec-float" => tree
            .param::<Vec<f64>>(root, path)?
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        other => return Err(HitError::unsupported_type(other).into()),
    };
    println!("{}", printed);
    Ok(())
}

/// Merge `overlay` onto `base` and print the result. Both trees are
/// exploded first so slashed shorthand in the overlay lands on the nested
/// sections it names.
pub fn merge(base: &str, overlay: &str, output: Option<&Path>) -> Result<(), CliError> {
    let mut base_tree = load(base)?;
    let mut overlay_tree = load(overlay)?;
    hit::explode(&mut base_tree);
    hit::explode(&mut overlay_tree);
    hit::merge(&overlay_tree, &mut base_tree);
    emit(&base_tree.render(), output)
}
