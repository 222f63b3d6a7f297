//! Many-to-many relation detection
//!
//! Multi-valued relations need their join table loaded explicitly; the
//! detector flags which fields those are. It trusts the server's schema
//! introspection when present and falls back to the local field definitions
//! otherwise (client-only preview contexts have no schema to ask).

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tessera_fields::{FieldMap, RelationKind};

/// Relation cardinality as reported by schema introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationType {
	BelongsTo,
	HasOne,
	HasMany,
	ManyToOne,
	ManyToMany,
	MorphOne,
	MorphMany,
	Multiple,
	Single,
	#[serde(other)]
	Unknown,
}

impl RelationType {
	/// Multi-valued kinds that require explicit join-table loading.
	pub fn is_many(&self) -> bool {
		matches!(
			self,
			RelationType::HasMany
				| RelationType::ManyToMany
				| RelationType::Multiple
				| RelationType::MorphMany
		)
	}
}

/// Schema-reported metadata for one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaFieldMetadata {
	/// Backend field kind, `"relation"` for relation fields.
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub relation_type: Option<RelationType>,
}

/// One field entry of a server-provided collection schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<SchemaFieldMetadata>,
}

/// Server-provided schema introspection for one collection.
///
/// Absence of the schema (or of any member) is a supported, non-error
/// state; the detector degrades to local heuristics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
	#[serde(default)]
	pub fields: HashMap<String, SchemaField>,
}

/// Flag the fields holding multi-valued relations.
///
/// Per field, schema metadata wins when it is conclusive: a reported
/// non-relation kind means "not multi-valued", a reported relation kind
/// with a cardinality answers directly. Inconclusive metadata (or no
/// schema) falls back to the local definition: a `relation` field with
/// `type: multiple`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tessera_expand::detect_many_relations;
/// use tessera_fields::FieldDefinition;
///
/// let fields = HashMap::from([
/// 	("tags".to_string(), FieldDefinition::relation().multiple()),
/// 	("author".to_string(), FieldDefinition::relation()),
/// ]);
/// let many = detect_many_relations(&fields, None);
///
/// assert!(many.contains("tags"));
/// assert!(!many.contains("author"));
/// ```
pub fn detect_many_relations(
	fields: &FieldMap,
	schema: Option<&CollectionSchema>,
) -> BTreeSet<String> {
	fields
		.iter()
		.filter(|(name, def)| {
			let metadata = schema
				.and_then(|s| s.fields.get(*name))
				.and_then(|f| f.metadata.as_ref());
			if let Some(metadata) = metadata {
				if let Some(kind) = metadata.kind.as_deref() {
					if kind != "relation" {
						return false;
					}
					if let Some(relation_type) = metadata.relation_type {
						return relation_type.is_many();
					}
				}
			}
			def.is_relation() && def.options.relation_kind == Some(RelationKind::Multiple)
		})
		.map(|(name, _)| name.clone())
		.collect()
}
