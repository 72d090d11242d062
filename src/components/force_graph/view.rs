use super::types::Tree;

/// Screen transform applied around the whole draw pass: `screen = graph * k + (x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}
}

/// Shrink (never magnify) so the node bounding box fits the viewport minus
/// `padding` on each side, then pan so the root sits at the viewport center.
pub fn fit_view(tree: &Tree, width: f64, height: f64, padding: f64) -> ViewTransform {
	let Some(root) = tree.root() else {
		return ViewTransform {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		};
	};

	let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
	let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
	for node in &tree.nodes {
		min_x = min_x.min(node.x);
		min_y = min_y.min(node.y);
		max_x = max_x.max(node.x);
		max_y = max_y.max(node.y);
	}
	let (box_w, box_h) = (max_x - min_x, max_y - min_y);

	// a viewport smaller than the padding still gets a positive scale
	let target_w = (width - 2.0 * padding).max(1.0);
	let target_h = (height - 2.0 * padding).max(1.0);

	let k = if box_w > 0.0 && box_h > 0.0 {
		(target_w / box_w).min(target_h / box_h).min(1.0)
	} else {
		1.0
	};
	let k = if k.is_finite() && k > 0.0 { k } else { 1.0 };

	ViewTransform {
		x: width / 2.0 - root.x * k,
		y: height / 2.0 - root.y * k,
		k,
	}
}
