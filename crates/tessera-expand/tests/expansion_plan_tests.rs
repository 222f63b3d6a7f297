//! Expansion planner behavior against realistic list view setups
//!
//! Covers the planner's precedence rules (explicit columns vs field map),
//! the schema-known relation filter, nested-expansion merging for avatar
//! paths, and the wire shape handed to the fetch layer.

use std::collections::HashMap;

use assert_json_diff::assert_json_eq;
use rstest::rstest;
use serde_json::json;
use tessera_expand::{Expansion, ListViewConfig, plan_expansions};
use tessera_fields::{FieldDefinition, FieldMap};

fn article_fields() -> FieldMap {
	HashMap::from([
		("title".to_string(), FieldDefinition::text().localized()),
		("cover".to_string(), FieldDefinition::upload()),
		("gallery".to_string(), FieldDefinition::multi_upload()),
		(
			"author".to_string(),
			FieldDefinition::relation().avatar_field("avatar.url"),
		),
		(
			"tags".to_string(),
			FieldDefinition::relation().multiple().relation_name("tags"),
		),
	])
}

#[test]
fn uploads_always_expand() {
	let plan = plan_expansions(&article_fields(), &ListViewConfig::new(), None);
	assert_eq!(plan["cover"], Expansion::All);
	assert_eq!(plan["gallery"], Expansion::All);
}

#[test]
fn explicit_columns_limit_planned_fields() {
	let config = ListViewConfig::new().columns(vec!["title".to_string(), "cover".to_string()]);
	let plan = plan_expansions(&article_fields(), &config, None);

	// Only what is visibly reachable: author/tags/gallery are off-screen.
	assert_eq!(plan.len(), 1);
	assert_eq!(plan["cover"], Expansion::All);
}

#[test]
fn without_columns_every_defined_field_is_considered() {
	let plan = plan_expansions(&article_fields(), &ListViewConfig::new(), None);
	assert!(plan.contains_key("author"));
	assert!(plan.contains_key("tags"));
}

#[rstest]
#[case(vec!["comments".to_string()], false)]
#[case(vec!["tags".to_string(), "author".to_string()], true)]
fn schema_known_filter_excludes_undefined_relations(
	#[case] known: Vec<String>,
	#[case] tags_included: bool,
) {
	let plan = plan_expansions(&article_fields(), &ListViewConfig::new(), Some(&known));
	assert_eq!(plan.contains_key("tags"), tags_included);
}

#[test]
fn schema_known_filter_does_not_touch_uploads() {
	let known: Vec<String> = vec![];
	let plan = plan_expansions(&article_fields(), &ListViewConfig::new(), Some(&known));
	assert_eq!(plan["cover"], Expansion::All);
	assert!(!plan.contains_key("author"));
}

#[test]
fn avatar_paths_under_the_same_relation_merge() {
	// Two displayed fields resolve to the same relation but need different
	// nested records for their list cells.
	let fields: FieldMap = HashMap::from([
		(
			"author".to_string(),
			FieldDefinition::relation().avatar_field("avatar.url"),
		),
		(
			"author_company".to_string(),
			FieldDefinition::relation()
				.relation_name("author")
				.avatar_field("company.name"),
		),
	]);

	let plan = plan_expansions(&fields, &ListViewConfig::new(), None);
	assert_eq!(plan.len(), 1);
	let Expansion::Nested { with } = &plan["author"] else {
		panic!("expected nested expansion for author");
	};
	assert!(with.contains("avatar"));
	assert!(with.contains("company"));
}

#[test]
fn configured_relations_are_included_without_a_column() {
	let config = ListViewConfig::new()
		.columns(vec!["title".to_string()])
		.with_relation("comments");
	let plan = plan_expansions(&article_fields(), &config, None);

	assert_eq!(plan["comments"], Expansion::All);
}

#[test]
fn configured_relation_does_not_downgrade_nested_plan() {
	let config = ListViewConfig::new().with_relation("author");
	let plan = plan_expansions(&article_fields(), &config, None);

	assert!(matches!(&plan["author"], Expansion::Nested { with } if with.contains("avatar")));
}

#[test]
fn plan_serializes_to_fetch_wire_shape() {
	let fields: FieldMap = HashMap::from([
		("cover".to_string(), FieldDefinition::upload()),
		(
			"author".to_string(),
			FieldDefinition::relation().avatar_field("avatar.url"),
		),
		(
			"author_company".to_string(),
			FieldDefinition::relation()
				.relation_name("author")
				.avatar_field("company.name"),
		),
	]);
	let plan = plan_expansions(&fields, &ListViewConfig::new(), None);

	assert_json_eq!(
		serde_json::to_value(&plan).unwrap(),
		json!({
			"author": { "with": { "avatar": true, "company": true } },
			"cover": true
		})
	);
}
