use super::types::NodeId;

/// Pointer-driven drag and hover state.
///
/// All writes go through the methods below so that a dragged node is never
/// also reported as hovered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
	pinned: Option<NodeId>,
	hovered: Option<NodeId>,
	grab_offset: (f64, f64),
}

impl Interaction {
	pub fn pinned(&self) -> Option<NodeId> {
		self.pinned
	}

	pub fn hovered(&self) -> Option<NodeId> {
		self.hovered
	}

	pub fn is_dragging(&self) -> bool {
		self.pinned.is_some()
	}

	/// Pointer minus node origin, captured when the drag started.
	pub fn grab_offset(&self) -> (f64, f64) {
		self.grab_offset
	}

	pub fn grab(&mut self, id: NodeId, offset: (f64, f64)) {
		self.pinned = Some(id);
		self.hovered = None;
		self.grab_offset = offset;
	}

	/// Ends a drag. Returns the node that was released, if any.
	pub fn release(&mut self) -> Option<NodeId> {
		self.grab_offset = (0.0, 0.0);
		self.pinned.take()
	}

	/// Updates the hovered node; ignored while dragging. Returns whether the
	/// hovered node changed.
	pub fn hover(&mut self, node: Option<NodeId>) -> bool {
		if self.is_dragging() || self.hovered == node {
			return false;
		}
		self.hovered = node;
		true
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// Whether `id` should be drawn highlighted.
	pub fn is_highlighted(&self, id: NodeId) -> bool {
		self.pinned == Some(id) || self.hovered == Some(id)
	}
}
