use log::{debug, info};

use super::interaction::Interaction;
use super::params::{ParamEffect, Params};
use super::radial::place_radial;
use super::simulation;
use super::types::{NodeId, Tree};
use super::view::{ViewTransform, fit_view};

/// Frames between progress lines in the debug log.
const FRAME_LOG_INTERVAL: u64 = 600;

/// Everything the frame loop and the pointer handlers share.
pub struct ForceGraphState {
	pub tree: Tree,
	pub params: Params,
	pub transform: ViewTransform,
	pub interaction: Interaction,
	pub width: f64,
	pub height: f64,
	pub frame: u64,
}

impl ForceGraphState {
	pub fn new(params: Params, width: f64, height: f64) -> Self {
		let tree = layout_tree(&params, width, height);
		info!(
			"Built tree: {} nodes, {} edges (depth {}, branching {})",
			tree.len(),
			tree.edges.len(),
			params.tree.max_depth,
			params.tree.branching_factor
		);
		let transform = fit_view(&tree, width, height, params.tree.padding);
		Self {
			tree,
			params,
			transform,
			interaction: Interaction::default(),
			width,
			height,
			frame: 0,
		}
	}

	/// Adopt a new parameter set. A different depth or branching factor
	/// builds and lays out a fresh tree which then replaces the old one whole;
	/// a different ring spacing puts the current tree back on its rings.
	pub fn set_params(&mut self, params: Params) {
		if params == self.params {
			return;
		}
		let effect = self.params.effect_of(&params);
		debug!("Parameters updated to version {} ({effect:?})", params.version);
		self.params = params;
		match effect {
			Some(ParamEffect::Rebuild) => self.reset(),
			Some(ParamEffect::Relayout) => self.relayout(),
			Some(ParamEffect::Live) | None => {}
		}
	}

	/// Return the current tree to the radial starting layout, at rest.
	pub fn relayout(&mut self) {
		let center = (self.width / 2.0, self.height / 2.0);
		place_radial(&mut self.tree, center, self.params.tree.radial_spacing);
		for node in &mut self.tree.nodes {
			node.vx = 0.0;
			node.vy = 0.0;
		}
		self.interaction.clear();
		self.transform = fit_view(&self.tree, self.width, self.height, self.params.tree.padding);
	}

	/// Rebuild the tree from the current parameters and return to the radial
	/// starting layout.
	pub fn reset(&mut self) {
		let tree = layout_tree(&self.params, self.width, self.height);
		info!(
			"Rebuilt tree: {} nodes, {} edges (depth {}, branching {})",
			tree.len(),
			tree.edges.len(),
			self.params.tree.max_depth,
			self.params.tree.branching_factor
		);
		self.tree = tree;
		self.interaction.clear();
		self.transform = fit_view(&self.tree, self.width, self.height, self.params.tree.padding);
	}

	/// Advance one frame: relax forces, then refit the view.
	pub fn tick(&mut self) {
		simulation::step(&mut self.tree, &self.params.forces, self.interaction.pinned());
		self.transform = fit_view(&self.tree, self.width, self.height, self.params.tree.padding);
		self.frame += 1;
		if self.frame % FRAME_LOG_INTERVAL == 0 {
			debug!(
				"Frame {}: view scale {:.3}, {} nodes",
				self.frame,
				self.transform.k,
				self.tree.len()
			);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		debug!("Viewport resized to {width}x{height}");
		self.width = width;
		self.height = height;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		self.transform.screen_to_graph(sx, sy)
	}

	/// Top-most node (highest id) within the hover radius of a screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<NodeId> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		// hover_radius is in world-space, scales with the view like nodes
		let radius = self.params.appearance.hover_radius;
		self.tree
			.nodes
			.iter()
			.rev()
			.find(|node| node.distance_to(gx, gy) < radius)
			.map(|node| node.id)
	}

	/// Start dragging the node under the pointer, if any.
	pub fn pointer_down(&mut self, sx: f64, sy: f64) -> bool {
		let Some(id) = self.node_at_position(sx, sy) else {
			return false;
		};
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let node = self.tree.node_mut(id);
		node.vx = 0.0;
		node.vy = 0.0;
		let offset = (gx - node.x, gy - node.y);
		self.interaction.grab(id, offset);
		debug!("Drag started on node {}", id.0);
		true
	}

	/// Move the dragged node with the pointer, or refresh hover otherwise.
	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		match self.interaction.pinned() {
			Some(id) if self.tree.contains(id) => {
				let (gx, gy) = self.screen_to_graph(sx, sy);
				let (ox, oy) = self.interaction.grab_offset();
				let node = self.tree.node_mut(id);
				node.x = gx - ox;
				node.y = gy - oy;
			}
			Some(_) => {
				self.interaction.release();
			}
			None => {
				let hovered = self.node_at_position(sx, sy);
				self.interaction.hover(hovered);
			}
		}
	}

	pub fn pointer_up(&mut self) {
		if let Some(id) = self.interaction.release() {
			debug!("Drag released on node {}", id.0);
		}
	}

	pub fn pointer_leave(&mut self) {
		self.pointer_up();
		self.interaction.hover(None);
	}

	pub fn cursor(&self) -> &'static str {
		if self.interaction.is_dragging() {
			"grabbing"
		} else if self.interaction.hovered().is_some() {
			"grab"
		} else {
			"default"
		}
	}
}

fn layout_tree(params: &Params, width: f64, height: f64) -> Tree {
	let center = (width / 2.0, height / 2.0);
	let (depth, branching) = params.shape();
	let mut tree = Tree::build(depth, branching, center);
	place_radial(&mut tree, center, params.tree.radial_spacing);
	tree
}
