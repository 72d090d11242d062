//! One tick of the force relaxation.
//!
//! Forces are fully accumulated for every node before any position moves, so
//! the outcome of a tick does not depend on node order. The pinned node still
//! pushes and pulls the others but is never moved by the simulation itself.

use super::distance::graph_distance;
use super::params::ForceParams;
use super::types::{NodeId, Tree};

/// Advance the simulation by one tick.
pub fn step(tree: &mut Tree, params: &ForceParams, pinned: Option<NodeId>) {
	accumulate_forces(tree, params, pinned);
	integrate(tree, params, pinned);
}

/// Reset and recompute `fx`/`fy` for every node from pairwise repulsion and
/// edge springs. The pinned node keeps a zero force.
pub fn accumulate_forces(tree: &mut Tree, params: &ForceParams, pinned: Option<NodeId>) {
	for node in &mut tree.nodes {
		node.fx = 0.0;
		node.fy = 0.0;
	}

	let n = tree.len();
	for i in 0..n {
		for j in (i + 1)..n {
			let (a, b) = (NodeId(i), NodeId(j));
			let Some((ux, uy, dist)) = direction(tree, a, b) else {
				continue;
			};
			let effective = dist.max(params.min_force_distance);
			let hops = graph_distance(tree, a, b) as f64;
			let magnitude = params.repulsion_strength / (effective * effective) * (hops + 1.0);
			apply(tree, a, -ux * magnitude, -uy * magnitude, pinned);
			apply(tree, b, ux * magnitude, uy * magnitude, pinned);
		}
	}

	for k in 0..tree.edges.len() {
		let edge = tree.edges[k];
		let Some((ux, uy, dist)) = direction(tree, edge.from, edge.to) else {
			continue;
		};
		let displacement = dist.max(params.min_force_distance) - params.edge_length;
		let magnitude = params.attraction_strength * displacement;
		apply(tree, edge.from, ux * magnitude, uy * magnitude, pinned);
		apply(tree, edge.to, -ux * magnitude, -uy * magnitude, pinned);
	}
}

/// Damped explicit Euler: `v' = (v + f) * damping`, `p' = p + v'`. The pinned
/// node has its velocity zeroed instead.
pub fn integrate(tree: &mut Tree, params: &ForceParams, pinned: Option<NodeId>) {
	for node in &mut tree.nodes {
		if Some(node.id) == pinned {
			node.vx = 0.0;
			node.vy = 0.0;
			continue;
		}
		node.vx = (node.vx + node.fx) * params.damping_factor;
		node.vy = (node.vy + node.fy) * params.damping_factor;
		node.x += node.vx;
		node.y += node.vy;
	}
}

/// Unit vector from `a` to `b` and their distance, or `None` when the two
/// coincide and the direction is undefined.
fn direction(tree: &Tree, a: NodeId, b: NodeId) -> Option<(f64, f64, f64)> {
	let (na, nb) = (tree.node(a), tree.node(b));
	let (dx, dy) = (nb.x - na.x, nb.y - na.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist > 0.0 && dist.is_finite() {
		Some((dx / dist, dy / dist, dist))
	} else {
		None
	}
}

fn apply(tree: &mut Tree, id: NodeId, fx: f64, fy: f64, pinned: Option<NodeId>) {
	if Some(id) == pinned {
		return;
	}
	let node = tree.node_mut(id);
	node.fx += fx;
	node.fy += fy;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::params::Params;
	use crate::components::force_graph::radial::place_radial;
	use proptest::prelude::*;

	fn forces() -> ForceParams {
		Params::default().forces
	}

	fn assert_finite(tree: &Tree) {
		for node in &tree.nodes {
			assert!(
				node.x.is_finite() && node.y.is_finite() && node.vx.is_finite() && node.vy.is_finite(),
				"node {:?} went non-finite: {node:?}",
				node.id
			);
		}
	}

	#[test]
	fn single_node_stays_put() {
		let mut tree = Tree::build(0, 3, (5.0, 7.0));
		let (x, y) = (tree.nodes[0].x, tree.nodes[0].y);
		for _ in 0..10 {
			step(&mut tree, &forces(), None);
		}
		assert_eq!((tree.nodes[0].x, tree.nodes[0].y), (x, y));
		assert_eq!((tree.nodes[0].vx, tree.nodes[0].vy), (0.0, 0.0));
	}

	#[test]
	fn spring_at_rest_length_exerts_nothing() {
		let mut params = forces();
		params.repulsion_strength = 0.0;
		let mut tree = Tree::build(1, 1, (0.0, 0.0));
		(tree.nodes[0].x, tree.nodes[0].y) = (0.0, 0.0);
		(tree.nodes[1].x, tree.nodes[1].y) = (params.edge_length, 0.0);

		accumulate_forces(&mut tree, &params, None);
		for node in &tree.nodes {
			assert_eq!((node.fx, node.fy), (0.0, 0.0));
		}
	}

	#[test]
	fn stretched_spring_pulls_together() {
		let mut params = forces();
		params.repulsion_strength = 0.0;
		let mut tree = Tree::build(1, 1, (0.0, 0.0));
		(tree.nodes[0].x, tree.nodes[0].y) = (0.0, 0.0);
		(tree.nodes[1].x, tree.nodes[1].y) = (params.edge_length + 20.0, 0.0);

		accumulate_forces(&mut tree, &params, None);
		let expected = params.attraction_strength * 20.0;
		assert!((tree.nodes[0].fx - expected).abs() < 1e-12);
		assert!((tree.nodes[1].fx + expected).abs() < 1e-12);
	}

	#[test]
	fn repulsion_scales_with_hop_distance() {
		let mut params = forces();
		params.attraction_strength = 0.0;
		// 0 -> 1 -> 2 chain, 2 is two hops from 0
		let mut tree = Tree::build(2, 1, (0.0, 0.0));
		(tree.nodes[0].x, tree.nodes[0].y) = (0.0, 0.0);
		(tree.nodes[1].x, tree.nodes[1].y) = (1000.0, 1000.0);
		(tree.nodes[2].x, tree.nodes[2].y) = (10.0, 0.0);

		accumulate_forces(&mut tree, &params, None);
		let near = params.repulsion_strength / 100.0 * 3.0;
		// node 1 is far away; its contribution is tiny but nonzero
		assert!((tree.nodes[2].fx - near).abs() < 0.01);
		assert!(tree.nodes[0].fx < 0.0);
	}

	#[test]
	fn close_pairs_use_the_distance_floor() {
		let mut params = forces();
		params.attraction_strength = 0.0;
		let mut tree = Tree::build(1, 1, (0.0, 0.0));
		(tree.nodes[0].x, tree.nodes[0].y) = (0.0, 0.0);
		(tree.nodes[1].x, tree.nodes[1].y) = (0.001, 0.0);

		accumulate_forces(&mut tree, &params, None);
		let floor = params.min_force_distance;
		let expected = params.repulsion_strength / (floor * floor) * 2.0;
		assert!((tree.nodes[1].fx - expected).abs() < 1e-9);
	}

	#[test]
	fn coincident_nodes_do_not_nan() {
		let mut tree = Tree::build(2, 2, (0.0, 0.0));
		for node in &mut tree.nodes {
			node.x = 0.0;
			node.y = 0.0;
		}
		for _ in 0..50 {
			step(&mut tree, &forces(), None);
		}
		assert_finite(&tree);
	}

	#[test]
	fn two_coincident_nodes_in_a_laid_out_tree() {
		let mut tree = Tree::build(3, 2, (0.0, 0.0));
		place_radial(&mut tree, (0.0, 0.0), 50.0);
		let (x, y) = (tree.nodes[3].x, tree.nodes[3].y);
		(tree.nodes[4].x, tree.nodes[4].y) = (x, y);
		for _ in 0..200 {
			step(&mut tree, &forces(), None);
		}
		assert_finite(&tree);
	}

	#[test]
	fn pinned_node_still_pushes_and_pulls() {
		let params = forces();
		let mut tree = Tree::build(1, 1, (0.0, 0.0));
		(tree.nodes[0].x, tree.nodes[0].y) = (0.0, 0.0);
		(tree.nodes[1].x, tree.nodes[1].y) = (10.0, 0.0);

		accumulate_forces(&mut tree, &params, Some(NodeId(0)));
		assert_eq!((tree.nodes[0].fx, tree.nodes[0].fy), (0.0, 0.0));

		let repulsion = params.repulsion_strength / 100.0 * 2.0;
		let spring = -params.attraction_strength * (10.0 - params.edge_length);
		assert!((tree.nodes[1].fx - (repulsion + spring)).abs() < 1e-12);
		assert_eq!(tree.nodes[1].fy, 0.0);

		// without springs only the pinned node's repulsion is left
		let mut no_springs = params.clone();
		no_springs.attraction_strength = 0.0;
		accumulate_forces(&mut tree, &no_springs, Some(NodeId(0)));
		assert!((tree.nodes[1].fx - repulsion).abs() < 1e-12);
	}

	#[test]
	fn pinned_node_is_frozen() {
		let mut tree = Tree::build(3, 3, (0.0, 0.0));
		place_radial(&mut tree, (0.0, 0.0), 50.0);
		let pinned = NodeId(5);
		tree.node_mut(pinned).vx = 12.0;
		tree.node_mut(pinned).vy = -3.0;
		let before = (tree.node(pinned).x, tree.node(pinned).y);
		let others_before: Vec<(f64, f64)> = tree.nodes.iter().map(|n| (n.x, n.y)).collect();

		for _ in 0..25 {
			step(&mut tree, &forces(), Some(pinned));
			let node = tree.node(pinned);
			assert_eq!((node.x, node.y), before);
			assert_eq!((node.vx, node.vy), (0.0, 0.0));
			assert_eq!((node.fx, node.fy), (0.0, 0.0));
		}
		// the rest of the tree still moves
		let moved = tree
			.nodes
			.iter()
			.zip(&others_before)
			.any(|(n, &(x, y))| n.id != pinned && (n.x, n.y) != (x, y));
		assert!(moved);
	}

	#[test]
	fn damping_bleeds_velocity() {
		let mut params = forces();
		params.repulsion_strength = 0.0;
		params.attraction_strength = 0.0;
		params.damping_factor = 0.5;
		let mut tree = Tree::build(0, 1, (0.0, 0.0));
		(tree.nodes[0].x, tree.nodes[0].y) = (0.0, 0.0);
		tree.nodes[0].vx = 8.0;
		step(&mut tree, &params, None);
		assert_eq!(tree.nodes[0].vx, 4.0);
		assert_eq!(tree.nodes[0].x, 4.0);
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(24))]

		#[test]
		fn stays_finite(depth in 0u32..4, branching in 1u32..4, ticks in 1usize..150) {
			let mut tree = Tree::build(depth, branching, (300.0, 200.0));
			place_radial(&mut tree, (300.0, 200.0), 50.0);
			for _ in 0..ticks {
				step(&mut tree, &forces(), None);
			}
			for node in &tree.nodes {
				prop_assert!(node.x.is_finite() && node.y.is_finite());
			}
		}
	}
}
