//! Hop distance between tree nodes via their lowest common ancestor.

use super::types::{NodeId, Tree};

/// Deepest node that is an ancestor of both `a` and `b` (a node counts as its
/// own ancestor).
///
/// This sits inside the O(n²) repulsion loop, so rather than materializing
/// both root paths it lifts the deeper node to the other's depth and then
/// climbs both in lockstep until they meet.
pub fn lowest_common_ancestor(tree: &Tree, a: NodeId, b: NodeId) -> NodeId {
	let (mut a, mut b) = (a, b);
	while tree.node(a).depth > tree.node(b).depth {
		a = parent_of(tree, a);
	}
	while tree.node(b).depth > tree.node(a).depth {
		b = parent_of(tree, b);
	}
	while a != b {
		a = parent_of(tree, a);
		b = parent_of(tree, b);
	}
	a
}

/// Number of edges on the tree path between `a` and `b`.
pub fn graph_distance(tree: &Tree, a: NodeId, b: NodeId) -> u32 {
	if a == b {
		return 0;
	}
	let lca = tree.node(lowest_common_ancestor(tree, a, b)).depth;
	(tree.node(a).depth - lca) + (tree.node(b).depth - lca)
}

// Every tree has a single root and equal-depth nodes meet there at the
// latest, so the fallback is never taken on a tree built by `Tree::build`.
fn parent_of(tree: &Tree, id: NodeId) -> NodeId {
	tree.node(id).parent.unwrap_or(id)
}
