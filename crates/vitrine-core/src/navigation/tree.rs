//! Flat collection list to rooted tree conversion.
//!
//! The backend returns collections as a flat list with `parentId` links.
//! `build_tree` reassembles them into a tree without ever failing: a node
//! whose parent is missing, whose parent is itself, or whose parent chain
//! cycles is demoted to a root. Sibling order is the input order (stable
//! grouping, not sorted).

use std::collections::BTreeMap;

use crate::model::{FlatNode, NavigationRoot, TreeNode};

/// Convert a flat node list into a navigation tree.
///
/// Every input node appears exactly once in the output, either under its
/// resolved parent or at the root. The walk that breaks cycles is bounded by
/// the input length, so adversarial parent chains terminate.
pub fn build_tree(nodes: &[FlatNode]) -> NavigationRoot {
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    for (i, node) in nodes.iter().enumerate() {
        // First occurrence wins for duplicate ids.
        index.entry(node.id.as_str()).or_insert(i);
    }

    // Resolve each node's parent to an index; self-links and dangling ids
    // resolve to root placement.
    let mut parent: Vec<Option<usize>> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            node.parent_id
                .as_deref()
                .and_then(|pid| index.get(pid).copied())
                .filter(|&pi| pi != i)
        })
        .collect();

    // Break cycles: walking up from node i, arriving back at i means i sits
    // on a cycle, and demoting it to root breaks that cycle for every other
    // member. Earlier input positions win the demotion.
    for i in 0..nodes.len() {
        let mut cursor = parent[i];
        let mut steps = 0;
        while let Some(p) = cursor {
            if p == i {
                parent[i] = None;
                break;
            }
            steps += 1;
            if steps > nodes.len() {
                break;
            }
            cursor = parent[p];
        }
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut roots: Vec<usize> = Vec::new();
    for i in 0..nodes.len() {
        match parent[i] {
            Some(p) => children[p].push(i),
            None => roots.push(i),
        }
    }

    NavigationRoot {
        children: roots
            .into_iter()
            .map(|i| assemble(i, nodes, &children))
            .collect(),
    }
}

fn assemble(i: usize, nodes: &[FlatNode], children: &[Vec<usize>]) -> TreeNode {
    TreeNode {
        id: nodes[i].id.clone(),
        name: nodes[i].name.clone(),
        slug: nodes[i].slug.clone(),
        children: children[i]
            .iter()
            .map(|&c| assemble(c, nodes, children))
            .collect(),
    }
}
