//! Tree renderer contract
//!
//! The interface the block tree exposes to a rendering layer. The engine
//! drives a depth-first traversal and asks the renderer two questions per
//! node: "can you render this type" and "render it, given the already
//! rendered children". Everything visual stays on the renderer's side of
//! the seam.
//!
//! Unknown node types never fail a render: the node (and its subtree) is
//! skipped, with a diagnostic in debug builds only, because a crash here
//! would take down the whole authoring view over one stale block.

use serde_json::{Map, Value};

use crate::node::{BlockContent, BlockNode};

/// Ceiling on tree recursion depth.
///
/// Authored trees are bounded by the UI's nesting limits; the ceiling is a
/// backstop for malformed input. Nodes past it are skipped like unknown
/// types rather than overflowing the stack.
pub const MAX_RENDER_DEPTH: usize = 64;

/// Everything a renderer receives for one node.
///
/// `children` are already rendered (bottom-up data availability); the
/// surrounding traversal guarantees document order.
pub struct RenderNode<'a, T> {
	pub id: &'a str,
	pub type_name: &'a str,
	/// The node's resolved field values; empty map when the node has none.
	pub values: &'a Map<String, Value>,
	/// Prefetched auxiliary data for this node, when the caller supplied it.
	pub data: Option<&'a Value>,
	/// Rendered child output, in document order.
	pub children: Vec<T>,
	/// Whether this node is the current selection.
	pub selected: bool,
	/// Whether selection/click handling is wired up. When false the node
	/// renders non-interactively; the tree shape is identical either way.
	pub interactive: bool,
}

/// A rendering layer for block trees.
pub trait BlockRenderer {
	type Output;

	/// Capability query: does a renderer exist for this block type?
	fn supports(&self, type_name: &str) -> bool;

	/// Render one node. Returning `None` explicitly signals "no output for
	/// this node"; the traversal treats it like an unsupported type.
	fn render_node(&self, node: RenderNode<'_, Self::Output>) -> Option<Self::Output>;
}

/// Traversal options: selection and interactivity pass-through.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
	/// Id of the currently selected node, if any.
	pub selected_id: Option<String>,
	/// Whether click/selection handling is available to rendered nodes.
	pub interactive: bool,
}

/// Render a block forest depth-first.
///
/// Children are rendered before their parent; nodes the renderer does not
/// support are skipped together with their subtree.
///
/// # Examples
///
/// ```
/// use tessera_blocks::{BlockContent, BlockNode, BlockRenderer, RenderNode, RenderOptions, render_tree};
///
/// struct Outline;
///
/// impl BlockRenderer for Outline {
/// 	type Output = String;
///
/// 	fn supports(&self, type_name: &str) -> bool {
/// 		type_name == "section" || type_name == "hero"
/// 	}
///
/// 	fn render_node(&self, node: RenderNode<'_, String>) -> Option<String> {
/// 		Some(format!("{}({})", node.type_name, node.children.join(",")))
/// 	}
/// }
///
/// let content = BlockContent::new(vec![
/// 	BlockNode::new("a", "section").with_children(vec![BlockNode::new("b", "hero")]),
/// ]);
/// let rendered = render_tree(&content, &Outline, &RenderOptions::default());
/// assert_eq!(rendered, vec!["section(hero())".to_string()]);
/// ```
pub fn render_tree<R: BlockRenderer>(
	content: &BlockContent,
	renderer: &R,
	options: &RenderOptions,
) -> Vec<R::Output> {
	content
		.tree
		.iter()
		.filter_map(|node| render_node_at(node, content, renderer, options, 0))
		.collect()
}

fn render_node_at<R: BlockRenderer>(
	node: &BlockNode,
	content: &BlockContent,
	renderer: &R,
	options: &RenderOptions,
	depth: usize,
) -> Option<R::Output> {
	if depth >= MAX_RENDER_DEPTH {
		#[cfg(debug_assertions)]
		tracing::warn!(id = %node.id, depth, "block tree exceeds render depth ceiling, skipping subtree");
		return None;
	}
	if !renderer.supports(&node.type_name) {
		#[cfg(debug_assertions)]
		tracing::warn!(block_type = %node.type_name, id = %node.id, "no renderer for block type, skipping node");
		return None;
	}

	let children = node
		.children
		.iter()
		.filter_map(|child| render_node_at(child, content, renderer, options, depth + 1))
		.collect();

	renderer.render_node(RenderNode {
		id: &node.id,
		type_name: &node.type_name,
		values: content.values_for(&node.id),
		data: content.data.get(&node.id),
		children,
		selected: options.selected_id.as_deref() == Some(node.id.as_str()),
		interactive: options.interactive,
	})
}
