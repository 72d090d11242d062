use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

pub const BACKGROUND_COLOR: &str = "#1a1a1a";
const NODE_COLOR: &str = "white";
const EDGE_COLOR: &str = "gray";
const HOVER_NODE_COLOR: &str = "lightblue";

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let tree = &state.tree;
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(state.params.appearance.edge_width);
	ctx.set_line_cap("round");

	for edge in &tree.edges {
		let (a, b) = (tree.node(edge.from), tree.node(edge.to));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let appearance = &state.params.appearance;

	for node in &state.tree.nodes {
		let (radius, color) = if state.interaction.is_highlighted(node.id) {
			(appearance.hover_radius, HOVER_NODE_COLOR)
		} else {
			(appearance.node_radius, NODE_COLOR)
		};
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
	}
}
