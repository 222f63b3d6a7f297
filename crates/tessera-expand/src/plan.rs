//! Relation/upload expansion planning
//!
//! Before a record list is fetched, the admin needs to know which relation
//! and upload references the fetch must resolve inline so the list can
//! render without a round trip per cell. The planner derives those "with"
//! instructions from the field definitions and the list view config, and
//! nothing else: it plans only what is visibly reachable to avoid
//! overfetching.

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use tessera_fields::FieldMap;

/// One planned expansion: either the bare relation, or the relation plus
/// nested relations needed by display-only fields (avatar paths).
///
/// Serializes to the fetch layer's wire shape: `true` for a bare expansion,
/// `{ "with": { "<nested>": true } }` for a nested one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
	/// Expand the relation itself.
	All,
	/// Expand the relation and, inside it, the listed nested relations.
	Nested { with: BTreeSet<String> },
}

impl Expansion {
	/// Add a nested relation, upgrading a bare expansion in place.
	///
	/// Merging never discards previously requested nested relations, so two
	/// fields needing different nested expansions under the same parent are
	/// both satisfied.
	pub fn merge_nested(&mut self, nested: impl Into<String>) {
		match self {
			Expansion::All => {
				*self = Expansion::Nested {
					with: BTreeSet::from([nested.into()]),
				};
			}
			Expansion::Nested { with } => {
				with.insert(nested.into());
			}
		}
	}
}

impl Serialize for Expansion {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Expansion::All => serializer.serialize_bool(true),
			Expansion::Nested { with } => {
				let mut outer = serializer.serialize_map(Some(1))?;
				let nested: BTreeMap<&str, bool> =
					with.iter().map(|name| (name.as_str(), true)).collect();
				outer.serialize_entry("with", &nested)?;
				outer.end()
			}
		}
	}
}

/// The slice of a list view configuration the planner consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListViewConfig {
	/// Displayed columns, in order. Empty means "no explicit column list":
	/// the planner then considers every defined field.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub columns: Vec<String>,
	/// Relation names to expand regardless of column visibility.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub with_relations: Vec<String>,
}

impl ListViewConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn columns(mut self, columns: Vec<String>) -> Self {
		self.columns = columns;
		self
	}

	/// Force-expand a relation independent of displayed columns.
	pub fn with_relation(mut self, name: impl Into<String>) -> Self {
		self.with_relations.push(name.into());
		self
	}
}

/// Derive the expansion plan for a fetch of records with the given fields.
///
/// Rules, per displayed field:
/// - upload and multi-upload fields always expand; a stored upload is
///   useless without the underlying asset record
/// - relation fields expand under their resolved relation name (explicit
///   option, else the field name), but only when `known_relations` is
///   absent or lists that name; requesting a relation the backend schema
///   does not define would error rather than no-op
/// - an avatar path of the shape `"<relation>.<rest>"` requests its first
///   segment as a nested expansion under the relation, merged with any
///   nested requests from sibling fields
/// - `config.with_relations` entries are always included
///
/// Fields are taken from `config.columns` when present, otherwise from the
/// field map itself.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tessera_expand::{Expansion, ListViewConfig, plan_expansions};
/// use tessera_fields::FieldDefinition;
///
/// let fields = HashMap::from([
/// 	("author".to_string(), FieldDefinition::relation().avatar_field("avatar.url")),
/// 	("cover".to_string(), FieldDefinition::upload()),
/// ]);
/// let plan = plan_expansions(&fields, &ListViewConfig::new(), None);
///
/// assert_eq!(plan["cover"], Expansion::All);
/// assert!(matches!(&plan["author"], Expansion::Nested { with } if with.contains("avatar")));
/// ```
pub fn plan_expansions(
	fields: &FieldMap,
	config: &ListViewConfig,
	known_relations: Option<&[String]>,
) -> BTreeMap<String, Expansion> {
	let mut plan: BTreeMap<String, Expansion> = BTreeMap::new();

	let displayed: Vec<&str> = if config.columns.is_empty() {
		fields.keys().map(String::as_str).collect()
	} else {
		config.columns.iter().map(String::as_str).collect()
	};

	for name in displayed {
		let Some(def) = fields.get(name) else {
			continue;
		};
		let target = def
			.options
			.relation_name
			.as_deref()
			.unwrap_or(name)
			.to_string();

		if def.is_upload() {
			plan.entry(target).or_insert(Expansion::All);
		} else if def.is_relation() {
			if let Some(known) = known_relations {
				if !known.iter().any(|k| k == &target) {
					continue;
				}
			}
			let entry = plan.entry(target).or_insert(Expansion::All);
			if let Some(nested) = avatar_relation_segment(def) {
				entry.merge_nested(nested);
			}
		}
	}

	for name in &config.with_relations {
		plan.entry(name.clone()).or_insert(Expansion::All);
	}

	plan
}

/// First segment of a dotted avatar path, i.e. the nested relation a list
/// cell needs resolved. A dotless path points directly into the related
/// record and needs nothing extra.
fn avatar_relation_segment(def: &tessera_fields::FieldDefinition) -> Option<&str> {
	let path = def.options.list_cell.as_ref()?.avatar_field.as_deref()?;
	path.split_once('.').map(|(segment, _)| segment)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use tessera_fields::FieldDefinition;

	#[test]
	fn merge_upgrades_bare_expansion() {
		let mut expansion = Expansion::All;
		expansion.merge_nested("avatar");
		expansion.merge_nested("company");
		expansion.merge_nested("avatar");

		let Expansion::Nested { with } = expansion else {
			panic!("expected nested expansion");
		};
		assert_eq!(with.len(), 2);
	}

	#[test]
	fn dotless_avatar_path_needs_no_nested_expansion() {
		let fields = HashMap::from([(
			"author".to_string(),
			FieldDefinition::relation().avatar_field("avatar"),
		)]);
		let plan = plan_expansions(&fields, &ListViewConfig::new(), None);
		assert_eq!(plan["author"], Expansion::All);
	}

	#[test]
	fn relation_name_option_overrides_field_name() {
		let fields = HashMap::from([(
			"written_by".to_string(),
			FieldDefinition::relation().relation_name("author"),
		)]);
		let plan = plan_expansions(&fields, &ListViewConfig::new(), None);
		assert!(plan.contains_key("author"));
		assert!(!plan.contains_key("written_by"));
	}

	#[test]
	fn non_relation_fields_are_ignored() {
		let fields = HashMap::from([
			("title".to_string(), FieldDefinition::text()),
			("count".to_string(), FieldDefinition::number()),
		]);
		let plan = plan_expansions(&fields, &ListViewConfig::new(), None);
		assert!(plan.is_empty());
	}
}
