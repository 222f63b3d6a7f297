//! Recursive localization wrapping and unwrapping
//!
//! The server localizes flat, collection-level fields on its own; what it
//! cannot see is translatable content buried inside `object`, `array` and
//! `blocks` field values, which reach it as opaque JSON. This module walks
//! those nested values against the field definitions and marks (or
//! unmarks) every localized leaf with the `$i18n` wrapper.
//!
//! The walk is a pure function of its inputs: registries are read-only,
//! the input maps are never mutated, and the same registry walk drives
//! both directions so wrap and unwrap cannot drift apart.
//!
//! Failure policy: anything the walk does not understand (unknown fields,
//! unresolvable nested sets, orphaned block values, malformed block
//! content) passes through unchanged. The one hard error is the
//! defensive recursion ceiling.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use tessera_blocks::{BlockContent, find_block_type};
use tessera_fields::{BlockRegistry, FieldMap, FieldRegistry, contains_localized_fields};

use crate::marker::{is_wrapped, unwrap_value, wrap_value};

/// Ceiling on value nesting depth.
///
/// Authored content is bounded by the UI's nesting limits; the ceiling
/// guards against malformed trees when the engine is fed untrusted input.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Localization transform error type
#[derive(Debug, Error)]
pub enum I18nError {
	/// Value nesting exceeded [`MAX_NESTING_DEPTH`]
	#[error("value nesting exceeds the maximum supported depth of {MAX_NESTING_DEPTH}")]
	DepthExceeded,
}

/// Result type for localization transforms
pub type I18nResult<T> = Result<T, I18nError>;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
	Wrap,
	Unwrap,
}

/// Mark localized leaves nested inside object/array/blocks field values.
///
/// Applied to a record immediately before submission to storage. Flat
/// collection-level leaves are left alone, since wrapping those is the
/// server's own localization pass; only values the server treats as opaque are
/// transformed here.
///
/// Computed fields are dropped from the output at every nesting level;
/// already-wrapped values pass through, making the transform idempotent.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use serde_json::json;
/// use tessera_fields::FieldDefinition;
/// use tessera_i18n::wrap_localized;
///
/// let fields = HashMap::from([(
/// 	"profile".to_string(),
/// 	FieldDefinition::object(HashMap::from([
/// 		("name".to_string(), FieldDefinition::text()),
/// 		("bio".to_string(), FieldDefinition::text().localized()),
/// 	])),
/// )]);
/// let data = json!({ "profile": { "name": "Ada", "bio": "Scientist" } });
///
/// let wrapped = wrap_localized(data.as_object().unwrap(), &fields, None, None).unwrap();
/// assert_eq!(
/// 	serde_json::Value::Object(wrapped),
/// 	json!({ "profile": { "name": "Ada", "bio": { "$i18n": "Scientist" } } })
/// );
/// ```
pub fn wrap_localized(
	data: &Map<String, Value>,
	fields: &FieldMap,
	blocks: Option<&BlockRegistry>,
	registry: Option<&FieldRegistry>,
) -> I18nResult<Map<String, Value>> {
	transform_fields(data, fields, blocks, registry, Mode::Wrap, false, 0)
}

/// Strip the `$i18n` markers wrap_localized added, by the same registry
/// walk.
///
/// Applied to a record immediately after retrieval, before it reaches the
/// editing or rendering layer. Exactly one wrapper layer is removed per
/// localized leaf; unwrapping an already-unwrapped record is a no-op.
/// Computed fields are left untouched: they never reach storage, and a
/// caller that merged them back in for display must not lose them here.
pub fn unwrap_localized(
	data: &Map<String, Value>,
	fields: &FieldMap,
	blocks: Option<&BlockRegistry>,
	registry: Option<&FieldRegistry>,
) -> I18nResult<Map<String, Value>> {
	transform_fields(data, fields, blocks, registry, Mode::Unwrap, false, 0)
}

/// Wrap the value tables of a whole [`BlockContent`] before submit.
///
/// The typed counterpart of the `blocks`-field descent: each block's value
/// table is transformed against its type's field set from the block
/// registry. Blocks of unknown type, blocks whose field set holds no
/// localized fields, and orphaned value entries pass through unchanged.
pub fn wrap_block_content(
	content: &BlockContent,
	blocks: &BlockRegistry,
	registry: Option<&FieldRegistry>,
) -> I18nResult<BlockContent> {
	transform_block_content(content, blocks, registry, Mode::Wrap)
}

/// Inverse of [`wrap_block_content`], applied after retrieval.
pub fn unwrap_block_content(
	content: &BlockContent,
	blocks: &BlockRegistry,
	registry: Option<&FieldRegistry>,
) -> I18nResult<BlockContent> {
	transform_block_content(content, blocks, registry, Mode::Unwrap)
}

fn transform_block_content(
	content: &BlockContent,
	blocks: &BlockRegistry,
	registry: Option<&FieldRegistry>,
	mode: Mode,
) -> I18nResult<BlockContent> {
	let mut values = HashMap::with_capacity(content.values.len());
	for (id, node_values) in &content.values {
		let transformed = match find_block_type(&content.tree, id) {
			Some(type_name) => match blocks.get(type_name) {
				Some(def) if contains_localized_fields(&def.fields, registry) => {
					transform_fields(node_values, &def.fields, Some(blocks), registry, mode, true, 0)?
				}
				_ => node_values.clone(),
			},
			None => {
				// Orphaned value entry: the user may still need the data.
				tracing::debug!(id = %id, "block value has no tree node, passing through");
				node_values.clone()
			}
		};
		values.insert(id.clone(), transformed);
	}

	Ok(BlockContent {
		tree: content.tree.clone(),
		values,
		data: content.data.clone(),
	})
}

/// One level of the walk. `transform_leaves` is false for the entry-level
/// call (flat collection fields belong to the server's pass) and true for
/// every nested level.
fn transform_fields(
	data: &Map<String, Value>,
	fields: &FieldMap,
	blocks: Option<&BlockRegistry>,
	registry: Option<&FieldRegistry>,
	mode: Mode,
	transform_leaves: bool,
	depth: usize,
) -> I18nResult<Map<String, Value>> {
	if depth >= MAX_NESTING_DEPTH {
		return Err(I18nError::DepthExceeded);
	}

	let mut out = Map::new();
	for (name, value) in data {
		let Some(def) = fields.get(name) else {
			// Unknown-but-present data is kept, never an error.
			out.insert(name.clone(), value.clone());
			continue;
		};
		if mode == Mode::Wrap && def.is_computed() {
			continue;
		}
		let transformed =
			transform_value(value, def, blocks, registry, mode, transform_leaves, depth)?;
		out.insert(name.clone(), transformed);
	}
	Ok(out)
}

fn transform_value(
	value: &Value,
	def: &tessera_fields::FieldDefinition,
	blocks: Option<&BlockRegistry>,
	registry: Option<&FieldRegistry>,
	mode: Mode,
	transform_leaves: bool,
	depth: usize,
) -> I18nResult<Value> {
	if value.is_null() {
		return Ok(value.clone());
	}
	if mode == Mode::Wrap && is_wrapped(value) {
		return Ok(value.clone());
	}

	if def.is_object() {
		if let (Some(nested), Value::Object(inner)) = (def.object_fields(registry), value) {
			if contains_localized_fields(nested, registry) {
				let transformed =
					transform_fields(inner, nested, blocks, registry, mode, true, depth + 1)?;
				return Ok(Value::Object(transformed));
			}
		}
		return Ok(value.clone());
	}

	if def.is_array() {
		if let (Some(items), Value::Array(elements)) = (def.item_fields(registry), value) {
			if contains_localized_fields(items, registry) {
				let mut out = Vec::with_capacity(elements.len());
				for element in elements {
					match element {
						Value::Object(inner) => {
							let transformed = transform_fields(
								inner,
								items,
								blocks,
								registry,
								mode,
								true,
								depth + 1,
							)?;
							out.push(Value::Object(transformed));
						}
						other => out.push(other.clone()),
					}
				}
				return Ok(Value::Array(out));
			}
		}
		return Ok(value.clone());
	}

	if def.is_blocks() {
		return transform_blocks_value(value, blocks, registry, mode, depth);
	}

	if transform_leaves && def.is_localized() {
		return Ok(match mode {
			Mode::Wrap => wrap_value(value.clone()),
			Mode::Unwrap => unwrap_value(value.clone()),
		});
	}

	Ok(value.clone())
}

/// Descend into a raw blocks-field value: `{ "tree": [...], "values":
/// { id: {...} } }`. Each block's value table is transformed against the
/// field set its tree node's type names in the block registry.
fn transform_blocks_value(
	value: &Value,
	blocks: Option<&BlockRegistry>,
	registry: Option<&FieldRegistry>,
	mode: Mode,
	depth: usize,
) -> I18nResult<Value> {
	let Some(block_registry) = blocks else {
		return Ok(value.clone());
	};
	let Value::Object(content) = value else {
		return Ok(value.clone());
	};
	let Some(Value::Object(values)) = content.get("values") else {
		return Ok(value.clone());
	};
	let tree = content.get("tree").and_then(Value::as_array);

	let mut out_values = Map::new();
	for (block_id, node_values) in values {
		let mut replacement = None;
		if let (Some(tree), Value::Object(map)) = (tree, node_values) {
			if let Some(type_name) = block_type_in_json_tree(tree, block_id, 0) {
				if let Some(def) = block_registry.get(type_name) {
					if contains_localized_fields(&def.fields, registry) {
						let transformed = transform_fields(
							map,
							&def.fields,
							blocks,
							registry,
							mode,
							true,
							depth + 1,
						)?;
						replacement = Some(Value::Object(transformed));
					}
				}
			}
		}
		out_values.insert(
			block_id.clone(),
			replacement.unwrap_or_else(|| node_values.clone()),
		);
	}

	let mut out = content.clone();
	out.insert("values".to_string(), Value::Object(out_values));
	Ok(Value::Object(out))
}

/// Depth-first search for a node's type in a raw JSON block tree; first
/// match wins.
fn block_type_in_json_tree<'a>(tree: &'a [Value], id: &str, depth: usize) -> Option<&'a str> {
	if depth >= MAX_NESTING_DEPTH {
		return None;
	}
	for node in tree {
		let Some(obj) = node.as_object() else {
			continue;
		};
		if obj.get("id").and_then(Value::as_str) == Some(id) {
			return obj.get("type").and_then(Value::as_str);
		}
		if let Some(children) = obj.get("children").and_then(Value::as_array) {
			if let Some(found) = block_type_in_json_tree(children, id, depth + 1) {
				return Some(found);
			}
		}
	}
	None
}
