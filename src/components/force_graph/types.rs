/// Index of a node in [`Tree::nodes`]. Stable for the lifetime of the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Force accumulated during the current tick.
	pub fx: f64,
	pub fy: f64,
	pub depth: u32,
	pub parent: Option<NodeId>,
	pub children: Vec<NodeId>,
}

impl Node {
	pub fn new(id: NodeId, x: f64, y: f64, depth: u32, parent: Option<NodeId>) -> Self {
		Self {
			id,
			x,
			y,
			depth,
			parent,
			..Default::default()
		}
	}

	pub fn distance_to(&self, gx: f64, gy: f64) -> f64 {
		let (dx, dy) = (self.x - gx, self.y - gy);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Parent to child relation, one per non-root node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub from: NodeId,
	pub to: NodeId,
}

/// Flat node and edge store. Node ids double as indices and parents always
/// precede their children.
#[derive(Clone, Debug, Default)]
pub struct Tree {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl Tree {
	pub fn root(&self) -> Option<&Node> {
		self.nodes.first()
	}

	pub fn node(&self, id: NodeId) -> &Node {
		&self.nodes[id.0]
	}

	pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
		&mut self.nodes[id.0]
	}

	pub fn contains(&self, id: NodeId) -> bool {
		id.0 < self.nodes.len()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}
}
