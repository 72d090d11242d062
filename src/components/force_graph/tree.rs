use super::types::{Edge, Node, NodeId, Tree};

/// Half-width of the square the initial positions are scattered in.
const JITTER: f64 = 50.0;

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

impl Tree {
	/// Build a complete tree: every node above `max_depth` gets exactly
	/// `branching_factor` children. Ids follow pre-order, so parents always
	/// come first. Positions are jittered around `center` and are expected to
	/// be overwritten by the radial layout.
	pub fn build(max_depth: u32, branching_factor: u32, center: (f64, f64)) -> Self {
		let mut tree = Tree {
			nodes: Vec::with_capacity(node_count(max_depth, branching_factor)),
			edges: Vec::new(),
		};
		tree.grow(None, 0, max_depth, branching_factor, center);
		tree
	}

	fn grow(
		&mut self,
		parent: Option<NodeId>,
		depth: u32,
		max_depth: u32,
		branching_factor: u32,
		center: (f64, f64),
	) {
		let id = NodeId(self.nodes.len());
		let (x, y) = (
			center.0 + (rand_simple(2 * id.0) - 0.5) * 2.0 * JITTER,
			center.1 + (rand_simple(2 * id.0 + 1) - 0.5) * 2.0 * JITTER,
		);
		self.nodes.push(Node::new(id, x, y, depth, parent));

		if let Some(parent) = parent {
			self.edges.push(Edge { from: parent, to: id });
			self.node_mut(parent).children.push(id);
		}

		if depth < max_depth {
			for _ in 0..branching_factor {
				self.grow(Some(id), depth + 1, max_depth, branching_factor, center);
			}
		}
	}
}

/// Closed-form size of a complete tree.
pub fn node_count(max_depth: u32, branching_factor: u32) -> usize {
	match branching_factor {
		0 => 1,
		1 => max_depth as usize + 1,
		b => {
			let b = b as usize;
			(b.pow(max_depth + 1) - 1) / (b - 1)
		}
	}
}
