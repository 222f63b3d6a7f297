//! Field definition model
//!
//! A [`FieldDefinition`] pairs a type name (the key the engine dispatches on)
//! with type-specific [`FieldOptions`]. Definitions are built by the admin
//! configuration layer and consumed read-only by the transform engine: the
//! engine never validates a definition, it only inspects the handful of
//! options it needs (`localized`, `computed`, nested field sets, relation
//! metadata).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::FieldRegistry;

/// Mapping from field name to its definition.
///
/// This is the unit the engine walks: a collection's field set, an object
/// field's nested set, or an array field's item set are all `FieldMap`s.
pub type FieldMap = HashMap<String, FieldDefinition>;

/// Well-known field type names.
///
/// The set of type names is open: unknown names are tolerated everywhere and
/// fall back to opaque pass-through. These constants cover the names the
/// engine itself dispatches on, plus the common flat leaves.
pub mod type_names {
	pub const TEXT: &str = "text";
	pub const TEXTAREA: &str = "textarea";
	pub const RICH_TEXT: &str = "richText";
	pub const NUMBER: &str = "number";
	pub const BOOLEAN: &str = "boolean";
	pub const OBJECT: &str = "object";
	pub const ARRAY: &str = "array";
	pub const BLOCKS: &str = "blocks";
	pub const RELATION: &str = "relation";
	pub const UPLOAD: &str = "upload";
	pub const MULTI_UPLOAD: &str = "multiUpload";
}

/// Whether a relation points at one record or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
	Single,
	Multiple,
}

/// List-view display options for relation and upload fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCell {
	/// Dot-path into the related record used to render an avatar in list
	/// cells, e.g. `"avatar.url"` or `"company.name"`. When the first
	/// segment is itself a relation, the expansion planner requests it as a
	/// nested expansion.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar_field: Option<String>,
}

/// A nested field set: either written inline or a named reference resolved
/// through a [`FieldRegistry`] at the point of use.
///
/// The named form replaces the callback-style lazy field sets of dynamic
/// admin configs with an explicit, eagerly-resolved lookup. A lookup miss is
/// not an error: the caller treats the value as an opaque blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedFields {
	/// Reference to a field set registered under this name.
	Named(String),
	/// Field set written inline.
	Inline(FieldMap),
}

impl NestedFields {
	/// Resolve to a concrete field map.
	///
	/// Inline sets resolve to themselves; named sets resolve through the
	/// supplied registry. Returns `None` when the registry is absent or does
	/// not know the name.
	pub fn resolve<'a>(&'a self, registry: Option<&'a FieldRegistry>) -> Option<&'a FieldMap> {
		match self {
			NestedFields::Inline(fields) => Some(fields),
			NestedFields::Named(name) => registry.and_then(|reg| reg.get(name)),
		}
	}
}

/// Type-specific configuration carried by every [`FieldDefinition`].
///
/// Only the options relevant to a field's type are populated; everything
/// else stays at its default. Serialized names follow the admin config wire
/// format (camelCase).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
	/// Leaf value is a per-locale translation.
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub localized: bool,
	/// Field is derived client-side and must never be persisted.
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub computed: bool,
	/// Field must be filled in before submit. Form-layer concern; the
	/// transform engine ignores it.
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub required: bool,
	/// Human-readable label for form and list headers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Initial value for create forms.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_value: Option<Value>,
	/// Nested field set for `object` fields.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fields: Option<NestedFields>,
	/// Item field set for `array` fields with object items.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub item: Option<NestedFields>,
	/// Primitive item type name for `array` fields with scalar items.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub item_type: Option<String>,
	/// Backend relation name for `relation`/`upload` fields. Falls back to
	/// the field name when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub relation_name: Option<String>,
	/// Relation cardinality for `relation` fields.
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub relation_kind: Option<RelationKind>,
	/// List-view display options.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub list_cell: Option<ListCell>,
}

/// A single field definition: a type name plus its options.
///
/// # Examples
///
/// ```
/// use tessera_fields::FieldDefinition;
///
/// let title = FieldDefinition::text().localized();
/// assert!(title.is_localized());
/// assert_eq!(title.type_name, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
	pub type_name: String,
	#[serde(default)]
	pub options: FieldOptions,
}

impl FieldDefinition {
	/// Create a definition of an arbitrary type with default options.
	pub fn new(type_name: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			options: FieldOptions::default(),
		}
	}

	pub fn text() -> Self {
		Self::new(type_names::TEXT)
	}

	pub fn textarea() -> Self {
		Self::new(type_names::TEXTAREA)
	}

	pub fn rich_text() -> Self {
		Self::new(type_names::RICH_TEXT)
	}

	pub fn number() -> Self {
		Self::new(type_names::NUMBER)
	}

	pub fn boolean() -> Self {
		Self::new(type_names::BOOLEAN)
	}

	/// An object field with an inline nested field set.
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::HashMap;
	/// use tessera_fields::FieldDefinition;
	///
	/// let author = FieldDefinition::object(HashMap::from([
	/// 	("name".to_string(), FieldDefinition::text()),
	/// 	("bio".to_string(), FieldDefinition::textarea().localized()),
	/// ]));
	/// assert!(author.is_object());
	/// ```
	pub fn object(fields: FieldMap) -> Self {
		let mut def = Self::new(type_names::OBJECT);
		def.options.fields = Some(NestedFields::Inline(fields));
		def
	}

	/// An object field whose nested set is resolved by name through a
	/// [`FieldRegistry`].
	pub fn object_named(set_name: impl Into<String>) -> Self {
		let mut def = Self::new(type_names::OBJECT);
		def.options.fields = Some(NestedFields::Named(set_name.into()));
		def
	}

	/// An array field whose items are objects with the given field set.
	pub fn array_of(item: FieldMap) -> Self {
		let mut def = Self::new(type_names::ARRAY);
		def.options.item = Some(NestedFields::Inline(item));
		def
	}

	/// An array field whose item set is resolved by name.
	pub fn array_of_named(set_name: impl Into<String>) -> Self {
		let mut def = Self::new(type_names::ARRAY);
		def.options.item = Some(NestedFields::Named(set_name.into()));
		def
	}

	/// An array field of primitive items (`"text"`, `"number"`, ...).
	pub fn array_items(item_type: impl Into<String>) -> Self {
		let mut def = Self::new(type_names::ARRAY);
		def.options.item_type = Some(item_type.into());
		def
	}

	/// A block-tree field. The per-block field sets live in the block
	/// registry, not on the field itself.
	pub fn blocks() -> Self {
		Self::new(type_names::BLOCKS)
	}

	/// A single-valued relation field.
	pub fn relation() -> Self {
		let mut def = Self::new(type_names::RELATION);
		def.options.relation_kind = Some(RelationKind::Single);
		def
	}

	pub fn upload() -> Self {
		Self::new(type_names::UPLOAD)
	}

	pub fn multi_upload() -> Self {
		Self::new(type_names::MULTI_UPLOAD)
	}

	/// Mark the leaf value as a per-locale translation.
	pub fn localized(mut self) -> Self {
		self.options.localized = true;
		self
	}

	/// Mark the field as client-side computed (never persisted).
	pub fn computed(mut self) -> Self {
		self.options.computed = true;
		self
	}

	pub fn required(mut self) -> Self {
		self.options.required = true;
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.options.label = Some(label.into());
		self
	}

	pub fn default_value(mut self, value: Value) -> Self {
		self.options.default_value = Some(value);
		self
	}

	/// Set the backend relation name explicitly instead of relying on the
	/// field-name fallback.
	pub fn relation_name(mut self, name: impl Into<String>) -> Self {
		self.options.relation_name = Some(name.into());
		self
	}

	/// Make a relation multi-valued.
	pub fn multiple(mut self) -> Self {
		self.options.relation_kind = Some(RelationKind::Multiple);
		self
	}

	/// Set the avatar dot-path shown in list cells.
	pub fn avatar_field(mut self, path: impl Into<String>) -> Self {
		self.options
			.list_cell
			.get_or_insert_with(ListCell::default)
			.avatar_field = Some(path.into());
		self
	}

	pub fn is_object(&self) -> bool {
		self.type_name == type_names::OBJECT
	}

	pub fn is_array(&self) -> bool {
		self.type_name == type_names::ARRAY
	}

	pub fn is_blocks(&self) -> bool {
		self.type_name == type_names::BLOCKS
	}

	pub fn is_relation(&self) -> bool {
		self.type_name == type_names::RELATION
	}

	/// True for both single and multi uploads.
	pub fn is_upload(&self) -> bool {
		self.type_name == type_names::UPLOAD || self.type_name == type_names::MULTI_UPLOAD
	}

	pub fn is_localized(&self) -> bool {
		self.options.localized
	}

	pub fn is_computed(&self) -> bool {
		self.options.computed
	}

	/// Resolve the nested field set of an object field.
	///
	/// `None` for non-object fields, for object fields without a nested set,
	/// and for named sets the registry cannot resolve.
	pub fn object_fields<'a>(&'a self, registry: Option<&'a FieldRegistry>) -> Option<&'a FieldMap> {
		if !self.is_object() {
			return None;
		}
		self.options.fields.as_ref()?.resolve(registry)
	}

	/// Resolve the item field set of an array-of-objects field.
	pub fn item_fields<'a>(&'a self, registry: Option<&'a FieldRegistry>) -> Option<&'a FieldMap> {
		if !self.is_array() {
			return None;
		}
		self.options.item.as_ref()?.resolve(registry)
	}
}

/// Explicit mapping from type name to a constructor returning a fresh
/// definition of that type.
///
/// This is the composition-time replacement for reflective registries:
/// the set of field types is known when the admin config is assembled, so a
/// plain function table suffices.
///
/// # Examples
///
/// ```
/// use tessera_fields::builtin_constructors;
///
/// let ctors = builtin_constructors();
/// let field = ctors["richText"]();
/// assert_eq!(field.type_name, "richText");
/// ```
pub fn builtin_constructors() -> HashMap<&'static str, fn() -> FieldDefinition> {
	HashMap::from([
		(type_names::TEXT, FieldDefinition::text as fn() -> FieldDefinition),
		(type_names::TEXTAREA, FieldDefinition::textarea),
		(type_names::RICH_TEXT, FieldDefinition::rich_text),
		(type_names::NUMBER, FieldDefinition::number),
		(type_names::BOOLEAN, FieldDefinition::boolean),
		(type_names::BLOCKS, FieldDefinition::blocks),
		(type_names::RELATION, FieldDefinition::relation),
		(type_names::UPLOAD, FieldDefinition::upload),
		(type_names::MULTI_UPLOAD, FieldDefinition::multi_upload),
	])
}
