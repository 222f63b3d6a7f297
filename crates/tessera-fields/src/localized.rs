//! Recursive "contains localized fields" predicate
//!
//! The localization wrapper only descends into a nested structure when the
//! structure's field set can actually hold translations; everything else is
//! passed to storage as an opaque blob. That decision is this predicate.
//!
//! The predicate is evaluated fresh on every call. Field sets are small and
//! immutable per request, so recomputation is cheaper than a cache that
//! would need identity-keyed invalidation.

use crate::definition::FieldMap;
use crate::registry::FieldRegistry;

/// Ceiling on schema recursion depth.
///
/// Named field sets may reference each other mutually; past this depth the
/// remainder of the schema is treated as non-localized, which degrades to
/// the safe opaque pass-through path instead of overflowing the stack.
pub const MAX_SCHEMA_DEPTH: usize = 64;

/// Whether a field set contains at least one localized field, directly or
/// through nested object/array field sets.
///
/// Block fields do not count: their translatable content lives behind the
/// block registry and is decided per block type when a block tree is walked.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tessera_fields::{FieldDefinition, contains_localized_fields};
///
/// let fields = HashMap::from([
/// 	("name".to_string(), FieldDefinition::text()),
/// 	("meta".to_string(), FieldDefinition::object(HashMap::from([
/// 		("description".to_string(), FieldDefinition::textarea().localized()),
/// 	]))),
/// ]);
/// assert!(contains_localized_fields(&fields, None));
/// ```
pub fn contains_localized_fields(fields: &FieldMap, registry: Option<&FieldRegistry>) -> bool {
	localized_at_depth(fields, registry, 0)
}

fn localized_at_depth(fields: &FieldMap, registry: Option<&FieldRegistry>, depth: usize) -> bool {
	if depth >= MAX_SCHEMA_DEPTH {
		return false;
	}
	fields.values().any(|def| {
		if def.options.localized {
			return true;
		}
		if let Some(nested) = def.object_fields(registry) {
			if localized_at_depth(nested, registry, depth + 1) {
				return true;
			}
		}
		if let Some(items) = def.item_fields(registry) {
			if localized_at_depth(items, registry, depth + 1) {
				return true;
			}
		}
		false
	})
}
