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

//! End-to-end behavior of the public API on realistic inputs.

use hit::{explode, merge, parse, HitErrorKind, Kind, NodeType, Tree};

const SIMULATION: &str = "\
# heat conduction benchmark
[mesh]
  dim = 2
  file = square.e # generated offline
  [generator]
    type = cartesian
    nx = 10
    ny = 10
  [../]
[../]

[variables]
  [temp]
    order = FIRST
    initial = 300.0
  [../]
[]

[solver]
  scheme = implicit-euler
  dt = 1e-2
  adaptive = on
  tolerances = '1e-8 1e-10'
[../]
";

// ==================== Parse and typed retrieval ====================

#[test]
fn test_parse_and_retrieve_typed_params() {
    let t = parse("sim.i", SIMULATION).unwrap();
    let root = t.root();
    assert_eq!(t.param::<i64>(root, "mesh/dim").unwrap(), 2);
    assert_eq!(t.param::<u32>(root, "mesh/generator/nx").unwrap(), 10);
    assert_eq!(
        t.param::<String>(root, "variables/temp/order").unwrap(),
        "FIRST"
    );
    assert_eq!(t.param::<f64>(root, "variables/temp/initial").unwrap(), 300.0);
    assert_eq!(t.param::<f64>(root, "solver/dt").unwrap(), 0.01);
    assert!(t.param::<bool>(root, "solver/adaptive").unwrap());
    assert_eq!(
        t.param::<Vec<f64>>(root, "solver/tolerances").unwrap(),
        vec![1e-8, 1e-10]
    );
}

#[test]
fn test_param_optional_defaults() {
    let t = parse("sim.i", SIMULATION).unwrap();
    let root = t.root();
    assert_eq!(
        t.param_optional::<i64>(root, "mesh/generator/nz", 1).unwrap(),
        1
    );
    assert_eq!(
        t.param_optional::<i64>(root, "mesh/generator/nx", 1).unwrap(),
        10
    );
}

#[test]
fn test_retrieval_is_lazy_and_kind_independent() {
    let t = parse("sim.i", SIMULATION).unwrap();
    let root = t.root();
    // A value lexed as a number still reads back as a string.
    assert_eq!(t.param::<String>(root, "mesh/dim").unwrap(), "2");
    // The bool coercion is strict: "implicit-euler" is not a bool.
    let err = t.param::<bool>(root, "solver/scheme").unwrap_err();
    assert_eq!(err.kind(), HitErrorKind::TypeMismatch);
}

#[test]
fn test_find_resolves_relative_to_start() {
    let t = parse("sim.i", SIMULATION).unwrap();
    let mesh = t.find(t.root(), "mesh").unwrap();
    assert!(t.find(mesh, "generator/type").is_some());
    // Descent only: the solver section is not reachable from mesh.
    assert!(t.find(mesh, "solver/dt").is_none());
}

// ==================== Round trip ====================

#[test]
fn test_render_round_trip_is_equivalent() {
    let t = parse("sim.i", SIMULATION).unwrap();
    let rendered = t.render();
    let back = parse("rendered", &rendered).unwrap();
    assert!(t.equivalent(&back));
}

#[test]
fn test_render_preserves_comments_and_order() {
    let t = parse("sim.i", SIMULATION).unwrap();
    let rendered = t.render();
    assert!(rendered.starts_with("# heat conduction benchmark\n"));
    assert!(rendered.contains("file = square.e # generated offline\n"));
    let mesh_pos = rendered.find("[mesh]").unwrap();
    let solver_pos = rendered.find("[solver]").unwrap();
    assert!(mesh_pos < solver_pos);
}

// ==================== Merge ====================

#[test]
fn test_cli_style_override_merge() {
    let base = &mut parse("sim.i", SIMULATION).unwrap();
    let overrides = &mut parse("cli", "mesh/generator/nx = 40\nsolver/dt = 5e-3\n").unwrap();
    explode(overrides);
    merge(overrides, base);
    assert_eq!(base.param::<i64>(base.root(), "mesh/generator/nx").unwrap(), 40);
    assert_eq!(base.param::<f64>(base.root(), "solver/dt").unwrap(), 5e-3);
    // Untouched values survive.
    assert_eq!(base.param::<i64>(base.root(), "mesh/generator/ny").unwrap(), 10);
}

#[test]
fn test_merge_then_round_trip() {
    let base = &mut parse("base", "[a]\nx = 1\n[../]\n").unwrap();
    let overlay = parse("over", "[a]\nx = 2\ny = 3\n[../]\n").unwrap();
    merge(&overlay, base);
    let back = parse("rendered", &base.render()).unwrap();
    assert!(base.equivalent(&back));
}

// ==================== Explode ====================

#[test]
fn test_explode_normalizes_shorthand_document() {
    let t = &mut parse("t", "mesh/dim = 2\nmesh/file = square.e\n[out/csv]\non = true\n[../]\n")
        .unwrap();
    explode(t);
    let mesh = t.find(t.root(), "mesh").unwrap();
    assert_eq!(t.node_type(mesh), NodeType::Section);
    assert_eq!(t.children_of(mesh, NodeType::Field).len(), 2);
    assert!(t.param::<bool>(t.root(), "out/csv/on").unwrap());
}

// ==================== Walk ====================

#[test]
fn test_walk_collects_all_field_paths() {
    let t = parse("sim.i", SIMULATION).unwrap();
    let mut fields = Vec::new();
    t.walk(
        t.root(),
        NodeType::Field,
        &mut |fullpath: &str, _n: &str, _t: &Tree, _id: hit::NodeId| {
            fields.push(fullpath.to_string());
        },
    );
    assert_eq!(fields.len(), 11);
    assert!(fields.contains(&"mesh/generator/type".to_string()));
    assert!(fields.contains(&"solver/tolerances".to_string()));
}

// ==================== Programmatic editing ====================

#[test]
fn test_build_edit_and_render() {
    let mut t = Tree::new();
    let root = t.root();
    let exec = t.add_section(root, "execution");
    let steps = t.add_field(exec, "steps", Kind::Int, "10");
    t.add_field(exec, "title", Kind::String, "demo run");
    t.set_value(steps, "20", Kind::None).unwrap();
    assert_eq!(
        t.render(),
        "[execution]\n  steps = 20\n  title = 'demo run'\n[../]\n"
    );
    let back = parse("rendered", &t.render()).unwrap();
    assert_eq!(back.param::<i64>(back.root(), "execution/steps").unwrap(), 20);
    assert_eq!(
        back.param::<String>(back.root(), "execution/title").unwrap(),
        "demo run"
    );
}

// ==================== Errors ====================

#[test]
fn test_parse_error_reports_label_and_line() {
    let err = parse("broken.i", "[mesh]\ndim =\n[../]\n").unwrap_err();
    assert_eq!(err.to_string(), "broken.i:2: field 'dim' has no value");
}

#[test]
fn test_not_found_names_the_path() {
    let t = parse("sim.i", SIMULATION).unwrap();
    let err = t.param::<i64>(t.root(), "mesh/missing").unwrap_err();
    assert_eq!(err.to_string(), "no parameter named 'mesh/missing'");
}
