//! End-to-end localization wrapping scenarios
//!
//! Exercises the wrapper the way the authoring UI uses it: realistic field
//! sets, block registries and value payloads, asserting the exact JSON
//! handed to storage and the exact JSON handed back to the editor.

use std::collections::HashMap;

use assert_json_diff::assert_json_eq;
use rstest::rstest;
use serde_json::{Map, Value, json};
use tessera_fields::{BlockDefinition, BlockRegistry, FieldDefinition, FieldMap, FieldRegistry};
use tessera_i18n::{unwrap_localized, wrap_localized};

fn as_map(value: Value) -> Map<String, Value> {
	match value {
		Value::Object(map) => map,
		other => panic!("expected object, got {other:?}"),
	}
}

/// Article collection: flat localized title (server's business), an object
/// field with mixed localization, an array of slides, and a blocks body.
fn article_fields() -> FieldMap {
	HashMap::from([
		("title".to_string(), FieldDefinition::text().localized()),
		(
			"seo".to_string(),
			FieldDefinition::object(HashMap::from([
				("canonical".to_string(), FieldDefinition::text()),
				(
					"description".to_string(),
					FieldDefinition::textarea().localized(),
				),
			])),
		),
		(
			"slides".to_string(),
			FieldDefinition::array_of(HashMap::from([
				("image".to_string(), FieldDefinition::text()),
				("caption".to_string(), FieldDefinition::text().localized()),
			])),
		),
		("body".to_string(), FieldDefinition::blocks()),
	])
}

fn article_blocks() -> BlockRegistry {
	let mut registry = BlockRegistry::new();
	registry.register(
		"hero",
		BlockDefinition::new(HashMap::from([
			("title".to_string(), FieldDefinition::text().localized()),
			("subtitle".to_string(), FieldDefinition::text().localized()),
		])),
	);
	registry.register(
		"stats",
		BlockDefinition::new(HashMap::from([
			("count".to_string(), FieldDefinition::number()),
			("unit".to_string(), FieldDefinition::text()),
		])),
	);
	registry
}

#[test]
fn hero_block_values_wrap_per_field() {
	let data = as_map(json!({
		"body": {
			"tree": [{ "id": "b1", "type": "hero" }],
			"values": { "b1": { "title": "Hello", "subtitle": "World" } }
		}
	}));

	let wrapped = wrap_localized(&data, &article_fields(), Some(&article_blocks()), None).unwrap();
	assert_json_eq!(
		Value::Object(wrapped),
		json!({
			"body": {
				"tree": [{ "id": "b1", "type": "hero" }],
				"values": {
					"b1": {
						"title": { "$i18n": "Hello" },
						"subtitle": { "$i18n": "World" }
					}
				}
			}
		})
	);
}

#[test]
fn mixed_object_wraps_only_localized_members() {
	let data = as_map(json!({
		"seo": { "canonical": "https://example.com/a", "description": "An article" }
	}));

	let wrapped = wrap_localized(&data, &article_fields(), None, None).unwrap();
	assert_json_eq!(
		Value::Object(wrapped),
		json!({
			"seo": {
				"canonical": "https://example.com/a",
				"description": { "$i18n": "An article" }
			}
		})
	);
}

#[test]
fn array_without_localized_items_is_untouched() {
	let fields: FieldMap = HashMap::from([(
		"points".to_string(),
		FieldDefinition::array_of(HashMap::from([("a".to_string(), FieldDefinition::number())])),
	)]);
	let data = as_map(json!({ "points": [{ "a": 1 }, { "a": 2 }] }));

	let wrapped = wrap_localized(&data, &fields, None, None).unwrap();
	assert_eq!(wrapped, data);
}

#[test]
fn array_with_localized_items_wraps_each_object_element() {
	let data = as_map(json!({
		"slides": [
			{ "image": "a.png", "caption": "First" },
			{ "image": "b.png", "caption": "Second" },
			"stray-string"
		]
	}));

	let wrapped = wrap_localized(&data, &article_fields(), None, None).unwrap();
	assert_json_eq!(
		Value::Object(wrapped),
		json!({
			"slides": [
				{ "image": "a.png", "caption": { "$i18n": "First" } },
				{ "image": "b.png", "caption": { "$i18n": "Second" } },
				"stray-string"
			]
		})
	);
}

#[test]
fn non_localized_blocks_pass_through_as_opaque_blobs() {
	let data = as_map(json!({
		"body": {
			"tree": [{ "id": "s1", "type": "stats" }],
			"values": { "s1": { "count": 42, "unit": "ms" } }
		}
	}));

	let wrapped = wrap_localized(&data, &article_fields(), Some(&article_blocks()), None).unwrap();
	assert_eq!(wrapped, data);
}

#[test]
fn unknown_block_types_and_orphans_pass_through() {
	let data = as_map(json!({
		"body": {
			"tree": [{ "id": "b1", "type": "legacyEmbed" }],
			"values": {
				"b1": { "html": "<marquee>" },
				"ghost": { "title": "no node" }
			}
		}
	}));

	let wrapped = wrap_localized(&data, &article_fields(), Some(&article_blocks()), None).unwrap();
	assert_eq!(wrapped, data);
}

#[test]
fn nested_block_children_are_found_depth_first() {
	let mut blocks = article_blocks();
	blocks.register(
		"section",
		BlockDefinition::new(FieldMap::new()).with_allowed_children(vec!["hero".to_string()]),
	);

	let data = as_map(json!({
		"body": {
			"tree": [{
				"id": "root",
				"type": "section",
				"children": [{ "id": "deep", "type": "hero" }]
			}],
			"values": { "deep": { "title": "Nested" } }
		}
	}));

	let wrapped = wrap_localized(&data, &article_fields(), Some(&blocks), None).unwrap();
	let title = &wrapped["body"]["values"]["deep"]["title"];
	assert_json_eq!(title.clone(), json!({ "$i18n": "Nested" }));
}

#[test]
fn named_field_sets_resolve_through_the_registry() {
	let mut registry = FieldRegistry::new();
	registry.register(
		"seoFields",
		HashMap::from([(
			"description".to_string(),
			FieldDefinition::text().localized(),
		)]),
	);
	let fields: FieldMap =
		HashMap::from([("seo".to_string(), FieldDefinition::object_named("seoFields"))]);
	let data = as_map(json!({ "seo": { "description": "Hi" } }));

	// With the registry the nested set resolves and wraps...
	let wrapped = wrap_localized(&data, &fields, None, Some(&registry)).unwrap();
	assert_json_eq!(
		Value::Object(wrapped),
		json!({ "seo": { "description": { "$i18n": "Hi" } } })
	);

	// ...without it the reference cannot resolve and the value is opaque.
	let untouched = wrap_localized(&data, &fields, None, None).unwrap();
	assert_eq!(untouched, data);
}

#[rstest]
#[case::object_field(json!({ "seo": { "canonical": "c", "description": "d" } }))]
#[case::array_field(json!({ "slides": [{ "image": "i", "caption": "c" }] }))]
#[case::blocks_field(json!({
	"body": {
		"tree": [{ "id": "b1", "type": "hero" }],
		"values": { "b1": { "title": "Hello", "subtitle": "World" } }
	}
}))]
fn wrap_is_idempotent_and_round_trips(#[case] data: Value) {
	let fields = article_fields();
	let blocks = article_blocks();
	let data = as_map(data);

	let once = wrap_localized(&data, &fields, Some(&blocks), None).unwrap();
	let twice = wrap_localized(&once, &fields, Some(&blocks), None).unwrap();
	assert_eq!(once, twice);

	let back = unwrap_localized(&once, &fields, Some(&blocks), None).unwrap();
	assert_eq!(back, data);

	// Unwrapping an already-unwrapped record is a no-op.
	let back_again = unwrap_localized(&back, &fields, Some(&blocks), None).unwrap();
	assert_eq!(back_again, data);
}
