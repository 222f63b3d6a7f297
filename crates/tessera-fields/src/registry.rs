//! Field-set and block registries
//!
//! Registries are assembled once by the admin configuration layer and handed
//! to the engine by reference. The engine never mutates them and treats
//! every lookup miss as "unknown, pass through" rather than an error; a
//! malformed registry is the responsibility of whoever assembled it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::definition::FieldMap;

/// Named field sets used to resolve [`NestedFields::Named`] references.
///
/// [`NestedFields::Named`]: crate::NestedFields::Named
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tessera_fields::{FieldDefinition, FieldRegistry};
///
/// let mut registry = FieldRegistry::new();
/// registry.register("seo", HashMap::from([
/// 	("title".to_string(), FieldDefinition::text().localized()),
/// ]));
///
/// let field = FieldDefinition::object_named("seo");
/// assert!(field.object_fields(Some(&registry)).is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRegistry {
	sets: HashMap<String, FieldMap>,
}

impl FieldRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a field set under a name, replacing any previous set.
	pub fn register(&mut self, name: impl Into<String>, fields: FieldMap) {
		self.sets.insert(name.into(), fields);
	}

	pub fn get(&self, name: &str) -> Option<&FieldMap> {
		self.sets.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.sets.contains_key(name)
	}
}

/// Per-block-type definition: the block's own field set plus optional
/// child-allowance rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDefinition {
	/// The block's own fields (does not include descendants).
	pub fields: FieldMap,
	/// Block type names allowed as direct children. `None` allows any type;
	/// an empty list allows none.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub allowed_children: Option<Vec<String>>,
}

impl BlockDefinition {
	pub fn new(fields: FieldMap) -> Self {
		Self {
			fields,
			allowed_children: None,
		}
	}

	/// Restrict which block types may appear as direct children.
	pub fn with_allowed_children(mut self, children: Vec<String>) -> Self {
		self.allowed_children = Some(children);
		self
	}

	/// Whether a child of the given type may be placed under this block.
	///
	/// Answers the capability question only; enforcement happens in the
	/// authoring UI.
	pub fn allows_child(&self, type_name: &str) -> bool {
		match &self.allowed_children {
			None => true,
			Some(allowed) => allowed.iter().any(|name| name == type_name),
		}
	}
}

/// Mapping from block type name to its definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockRegistry {
	blocks: HashMap<String, BlockDefinition>,
}

impl BlockRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a block type, replacing any previous definition.
	pub fn register(&mut self, type_name: impl Into<String>, definition: BlockDefinition) {
		self.blocks.insert(type_name.into(), definition);
	}

	pub fn get(&self, type_name: &str) -> Option<&BlockDefinition> {
		self.blocks.get(type_name)
	}

	pub fn contains(&self, type_name: &str) -> bool {
		self.blocks.contains_key(type_name)
	}

	/// The field set of a block type, if registered.
	pub fn fields(&self, type_name: &str) -> Option<&FieldMap> {
		self.blocks.get(type_name).map(|def| &def.fields)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::definition::FieldDefinition;

	fn hero_fields() -> FieldMap {
		HashMap::from([
			("title".to_string(), FieldDefinition::text().localized()),
			("subtitle".to_string(), FieldDefinition::text().localized()),
		])
	}

	#[test]
	fn register_and_lookup_blocks() {
		let mut registry = BlockRegistry::new();
		registry.register("hero", BlockDefinition::new(hero_fields()));

		assert!(registry.contains("hero"));
		assert!(registry.fields("hero").unwrap().contains_key("title"));
		assert!(registry.get("columns").is_none());
	}

	#[test]
	fn allows_any_child_by_default() {
		let def = BlockDefinition::new(FieldMap::new());
		assert!(def.allows_child("hero"));
		assert!(def.allows_child("anything"));
	}

	#[test]
	fn allowed_children_restrict_membership() {
		let def = BlockDefinition::new(FieldMap::new())
			.with_allowed_children(vec!["column".to_string()]);
		assert!(def.allows_child("column"));
		assert!(!def.allows_child("hero"));

		let none = BlockDefinition::new(FieldMap::new()).with_allowed_children(Vec::new());
		assert!(!none.allows_child("column"));
	}

	#[test]
	fn field_registry_replaces_on_reregister() {
		let mut registry = FieldRegistry::new();
		registry.register("seo", hero_fields());
		registry.register("seo", FieldMap::new());
		assert!(registry.get("seo").unwrap().is_empty());
	}
}
