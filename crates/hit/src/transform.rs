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

//! Whole-tree transformations: overlay merge and path explosion.

use crate::tree::{NodeData, NodeId, NodeType, Tree};

/// Overlay `from` onto `into`, path by path.
///
/// Sections present in both are merged recursively; sections only in `from`
/// are deep-copied over. A field in `from` overwrites the value and kind of
/// the field at the same path in `into`, keeping `into`'s node in place;
/// fields without a counterpart are copied. Comments in `from` are not
/// carried over. Copied nodes keep `from`'s line numbers, so diagnostics on
/// the merged tree still point into the overlay input.
pub fn merge(from: &Tree, into: &mut Tree) {
    merge_node(from, from.root(), into, into.root());
}

fn merge_node(from: &Tree, from_id: NodeId, into: &mut Tree, into_id: NodeId) {
    for &child in from.children(from_id) {
        match from.data(child) {
            NodeData::Comment { .. } | NodeData::Root => {}
            NodeData::Field { name, kind, value } => {
                match into.find(into_id, name) {
                    Some(existing) if into.node_type(existing) == NodeType::Field => {
                        into.set_field_raw(existing, value.clone(), *kind);
                    }
                    _ => {
                        from.clone_into(child, into, into_id);
                    }
                }
            }
            NodeData::Section { path } => match into.find(into_id, path) {
                Some(existing) if into.node_type(existing) == NodeType::Section => {
                    merge_node(from, child, into, existing);
                }
                _ => {
                    from.clone_into(child, into, into_id);
                }
            },
        }
    }
}

/// Relocate every field and section whose name contains `/` into real
/// nested sections, so `[a/b] x/y=1 [../]` becomes `[a][b][x] y=1 ...`.
///
/// Intermediate sections reuse the first existing section child with the
/// matching name; newly created ones take over the exploded node's position
/// among its former siblings. Running `explode` on an already exploded tree
/// is a no-op.
pub fn explode(tree: &mut Tree) {
    // Sections created below carry no '/' and no-op when the scan reaches
    // them, so iterating while the arena grows is fine.
    let mut i = 0;
    while i < tree.node_count() {
        let id = NodeId(i);
        i += 1;
        let own = tree.path(id);
        if !own.contains('/') {
            continue;
        }
        if !matches!(
            tree.node_type(id),
            NodeType::Field | NodeType::Section
        ) {
            continue;
        }
        let segments: Vec<String> = own.split('/').map(str::to_string).collect();
        let parent = match tree.parent(id) {
            Some(p) => p,
            None => continue,
        };
        let original_index = match tree.detach(id) {
            Some(idx) => idx,
            None => continue,
        };

        let mut cur = parent;
        let mut first_created: Option<NodeId> = None;
        for seg in &segments[..segments.len() - 1] {
            let existing = tree
                .children(cur)
                .iter()
                .copied()
                .find(|&c| tree.node_type(c) == NodeType::Section && tree.path(c) == *seg);
            cur = match existing {
                Some(sec) => sec,
                None => {
                    let sec = tree.add_section_at(cur, seg, tree.line(id), Vec::new());
                    if first_created.is_none() && tree.parent(sec) == Some(parent) {
                        first_created = Some(sec);
                    }
                    sec
                }
            };
        }

        tree.rename(id, segments.last().unwrap().clone());
        tree.attach(id, cur);
        if let Some(sec) = first_created {
            tree.move_child_to(parent, sec, original_index);
        }
    }
}
