use std::collections::BTreeMap;
use std::f64::consts::PI;

use super::types::{NodeId, Tree};

/// Place nodes on concentric rings around `center`, one ring per depth.
///
/// Ring `d` has radius `d * spacing`; nodes on a ring keep id order and are
/// spread evenly by angle, the first at angle 0. Overwrites every position
/// and leaves velocities untouched.
pub fn place_radial(tree: &mut Tree, center: (f64, f64), spacing: f64) {
	let mut rings: BTreeMap<u32, Vec<NodeId>> = BTreeMap::new();
	for node in &tree.nodes {
		rings.entry(node.depth).or_default().push(node.id);
	}

	for (depth, ids) in rings {
		if depth == 0 {
			for id in ids {
				let node = tree.node_mut(id);
				(node.x, node.y) = center;
			}
			continue;
		}
		let radius = depth as f64 * spacing;
		let step = 2.0 * PI / ids.len() as f64;
		for (i, id) in ids.into_iter().enumerate() {
			let angle = i as f64 * step;
			let node = tree.node_mut(id);
			node.x = center.0 + radius * angle.cos();
			node.y = center.1 + radius * angle.sin();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn polar(tree: &Tree, id: usize, center: (f64, f64)) -> (f64, f64) {
		let node = &tree.nodes[id];
		let (dx, dy) = (node.x - center.0, node.y - center.1);
		let angle = dy.atan2(dx).rem_euclid(2.0 * PI);
		((dx * dx + dy * dy).sqrt(), angle)
	}

	#[test]
	fn seven_node_scenario() {
		let center = (400.0, 300.0);
		let spacing = 50.0;
		let mut tree = Tree::build(2, 2, center);
		place_radial(&mut tree, center, spacing);

		assert!((tree.nodes[0].x - center.0).abs() < EPS);
		assert!((tree.nodes[0].y - center.1).abs() < EPS);

		// depth 1 in id order: 1, 4
		for (id, angle) in [(1, 0.0), (4, PI)] {
			let (r, a) = polar(&tree, id, center);
			assert!((r - spacing).abs() < EPS);
			assert!((a - angle).abs() < EPS, "node {id} at {a}");
		}
		// depth 2 in id order: 2, 3, 5, 6
		for (id, angle) in [(2, 0.0), (3, PI / 2.0), (5, PI), (6, 3.0 * PI / 2.0)] {
			let (r, a) = polar(&tree, id, center);
			assert!((r - 2.0 * spacing).abs() < EPS);
			assert!((a - angle).abs() < EPS, "node {id} at {a}");
		}
	}

	#[test]
	fn placement_is_idempotent() {
		let mut tree = Tree::build(3, 3, (0.0, 0.0));
		place_radial(&mut tree, (10.0, 20.0), 40.0);
		let first: Vec<(f64, f64)> = tree.nodes.iter().map(|n| (n.x, n.y)).collect();
		place_radial(&mut tree, (10.0, 20.0), 40.0);
		let second: Vec<(f64, f64)> = tree.nodes.iter().map(|n| (n.x, n.y)).collect();
		assert_eq!(first, second);
	}

	#[test]
	fn overwrites_previous_positions() {
		let mut tree = Tree::build(1, 4, (0.0, 0.0));
		for node in &mut tree.nodes {
			node.x = 1e6;
			node.y = -1e6;
		}
		place_radial(&mut tree, (0.0, 0.0), 10.0);
		for node in &tree.nodes {
			assert!(node.distance_to(0.0, 0.0) <= 10.0 + EPS);
		}
	}
}
