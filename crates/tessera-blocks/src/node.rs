//! Block tree data model
//!
//! A page's authored content is an ordered forest of typed block nodes plus
//! a side-table of per-node field values. The tree carries structure only;
//! values live in [`BlockContent::values`] keyed by node id so that moving a
//! block never rewrites its data.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Block tree error type
#[derive(Debug, Error)]
pub enum BlockTreeError {
	/// The same node id appears more than once in a tree
	#[error("duplicate block ids in tree: {0:?}")]
	DuplicateIds(Vec<String>),
}

/// A single node in the block tree.
///
/// `type_name` keys into the block registry; unknown types are tolerated
/// throughout the engine (they render nothing and transform opaquely).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
	/// Opaque identifier, stable across edits, unique within one
	/// [`BlockContent`].
	pub id: String,
	#[serde(rename = "type")]
	pub type_name: String,
	/// Ordered child nodes; empty for leaf/content blocks.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<BlockNode>,
}

impl BlockNode {
	pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			type_name: type_name.into(),
			children: Vec::new(),
		}
	}

	pub fn with_children(mut self, children: Vec<BlockNode>) -> Self {
		self.children = children;
		self
	}

	/// Depth-first iterator over this node and all descendants, in document
	/// order.
	pub fn iter_depth_first(&self) -> DepthFirstIter<'_> {
		DepthFirstIter { stack: vec![self] }
	}
}

/// Depth-first, document-order traversal over block nodes.
pub struct DepthFirstIter<'a> {
	stack: Vec<&'a BlockNode>,
}

impl<'a> Iterator for DepthFirstIter<'a> {
	type Item = &'a BlockNode;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		self.stack.extend(node.children.iter().rev());
		Some(node)
	}
}

/// The complete authored content of one blocks value: tree + values +
/// optional prefetched data.
///
/// Every id referenced in `tree` should have a (possibly empty) entry in
/// `values`; a missing entry means "all fields empty", never an error.
/// `data` is populated externally (prefetched relation records and the
/// like) and passes through the engine untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockContent {
	/// Ordered root nodes.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tree: Vec<BlockNode>,
	/// Node id → the node's own field values.
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub values: HashMap<String, Map<String, Value>>,
	/// Node id → prefetched auxiliary data, owned by the caller.
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub data: HashMap<String, Value>,
}

static EMPTY_VALUES: std::sync::LazyLock<Map<String, Value>> =
	std::sync::LazyLock::new(Map::new);

impl BlockContent {
	pub fn new(tree: Vec<BlockNode>) -> Self {
		Self {
			tree,
			values: HashMap::new(),
			data: HashMap::new(),
		}
	}

	/// Set a node's value table.
	pub fn with_values(mut self, id: impl Into<String>, values: Map<String, Value>) -> Self {
		self.values.insert(id.into(), values);
		self
	}

	/// Depth-first iterator over all nodes of the forest, in document order.
	pub fn iter_depth_first(&self) -> impl Iterator<Item = &BlockNode> {
		self.tree.iter().flat_map(BlockNode::iter_depth_first)
	}

	/// A node's field values, or an empty map when the node has none yet.
	pub fn values_for(&self, id: &str) -> &Map<String, Value> {
		self.values.get(id).unwrap_or(&EMPTY_VALUES)
	}

	/// Check the id-uniqueness invariant over the whole forest.
	///
	/// Intended as an authoring-side guard: the engine itself tolerates
	/// duplicates (first match wins on lookup) and never calls this.
	pub fn validate_unique_ids(&self) -> Result<(), BlockTreeError> {
		let mut seen = HashSet::new();
		let mut duplicates = Vec::new();
		for node in self.iter_depth_first() {
			if !seen.insert(node.id.as_str()) && !duplicates.contains(&node.id) {
				duplicates.push(node.id.clone());
			}
		}
		if duplicates.is_empty() {
			Ok(())
		} else {
			Err(BlockTreeError::DuplicateIds(duplicates))
		}
	}
}

/// Find the type of the node with the given id, searching depth-first.
///
/// First match wins; ids are unique within a well-formed tree, so the
/// traversal order only matters for malformed input.
pub fn find_block_type<'a>(tree: &'a [BlockNode], id: &str) -> Option<&'a str> {
	tree.iter()
		.flat_map(BlockNode::iter_depth_first)
		.find(|node| node.id == id)
		.map(|node| node.type_name.as_str())
}
