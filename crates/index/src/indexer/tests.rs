use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::NamespaceIndexer;
use crate::config::IndexConfig;
use crate::name::{NameError, NamespaceKey};

fn ns(path: &str) -> NamespaceKey {
	NamespaceKey::Path(path.into())
}

fn names_in(map: &crate::NamespaceMap, key: &NamespaceKey) -> Vec<String> {
	map.get(key)
		.map(|entries| entries.values().map(|t| t.as_str().to_owned()).collect())
		.unwrap_or_default()
}

#[test]
fn test_empty_input_has_only_root() {
	let map = NamespaceIndexer::default().index(std::iter::empty());
	assert_eq!(map.keys().collect::<Vec<_>>(), [&NamespaceKey::Root]);
	assert_eq!(map.type_count(), 0);
}

#[test]
fn test_registers_every_ancestor() {
	let map = NamespaceIndexer::default()
		.index_strs(["A.B.C", "X"])
		.unwrap();

	assert_eq!(
		map.keys().cloned().collect::<Vec<_>>(),
		vec![NamespaceKey::Root, ns("A.B"), ns("A")]
	);
	assert_eq!(names_in(&map, &NamespaceKey::Root), ["A.B.C", "X"]);
	assert_eq!(names_in(&map, &ns("A")), ["A.B.C"]);
	assert_eq!(names_in(&map, &ns("A.B")), ["A.B.C"]);
	assert!(!map.contains(&ns("Z")));
}

#[test]
fn test_bare_identifier_only_under_root() {
	let map = NamespaceIndexer::default().index_strs(["Standalone"]).unwrap();
	assert_eq!(map.namespace_count(), 1);
	assert_eq!(names_in(&map, &NamespaceKey::Root), ["Standalone"]);
}

#[test]
fn test_siblings_share_parent_in_insertion_order() {
	let map = NamespaceIndexer::default()
		.index_strs(["app.models.User", "app.http.Kernel", "app.models.Post"])
		.unwrap();

	assert_eq!(
		names_in(&map, &ns("app")),
		["app.models.User", "app.http.Kernel", "app.models.Post"]
	);
	assert_eq!(names_in(&map, &ns("app.models")), ["app.models.User", "app.models.Post"]);
	assert_eq!(names_in(&map, &ns("app.http")), ["app.http.Kernel"]);
}

#[test]
fn test_duplicate_names_collapse() {
	let map = NamespaceIndexer::default()
		.index_strs(["A.B", "A.C", "A.B"])
		.unwrap();
	assert_eq!(names_in(&map, &ns("A")), ["A.B", "A.C"]);
	assert_eq!(map.type_count(), 2);
}

#[test]
fn test_namespace_named_like_root_stays_distinct() {
	let map = NamespaceIndexer::default()
		.index_strs(["global.Helper", "Top"])
		.unwrap();
	assert_eq!(names_in(&map, &ns("global")), ["global.Helper"]);
	assert_eq!(names_in(&map, &NamespaceKey::Root), ["global.Helper", "Top"]);
}

#[test]
fn test_custom_separator() {
	let indexer = NamespaceIndexer::new(IndexConfig::with_separator("\\"));
	let map = indexer.index_strs(["Vendor\\Package\\Finder"]).unwrap();
	assert_eq!(names_in(&map, &ns("Vendor\\Package")), ["Vendor\\Package\\Finder"]);
	assert_eq!(names_in(&map, &ns("Vendor")), ["Vendor\\Package\\Finder"]);
}

#[test]
fn test_malformed_name_aborts_pass() {
	let err = NamespaceIndexer::default()
		.index_strs(["A.B", "A..C"])
		.unwrap_err();
	assert_eq!(err, NameError::EmptySegment { name: "A..C".into() });
}

#[test]
fn test_reindexing_same_list_is_equal() {
	let indexer = NamespaceIndexer::default();
	let names = ["A.B.C", "A.D", "X"];
	assert_eq!(indexer.index_strs(names).unwrap(), indexer.index_strs(names).unwrap());
}

fn arb_segments() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[A-Za-z][A-Za-z0-9_]{0,5}", 1..7)
}

proptest! {
	/// A name with `k` segments lands under exactly `k` keys, once each.
	#[test]
	fn prop_one_registration_per_ancestor(segments in arb_segments()) {
		let name = segments.join(".");
		let map = NamespaceIndexer::default().index_strs([name.as_str()]).unwrap();

		prop_assert_eq!(map.namespace_count(), segments.len());
		for (key, entries) in map.iter() {
			prop_assert_eq!(entries.len(), 1, "namespace {} should hold one entry", key);
			let only = entries.values().next().map(|t| t.as_str().to_owned());
			prop_assert_eq!(only.as_deref(), Some(name.as_str()));
		}
		for depth in 1..segments.len() {
			let prefix = segments[..depth].join(".");
			prop_assert!(map.contains(&NamespaceKey::Path(prefix.into())));
		}
	}

	/// Every type under a namespace is also under each of that namespace's ancestors.
	#[test]
	fn prop_ancestors_are_supersets(names in prop::collection::vec(arb_segments(), 0..12)) {
		let joined: Vec<String> = names.iter().map(|s| s.join(".")).collect();
		let map = NamespaceIndexer::default().index_strs(&joined).unwrap();

		for (key, entries) in map.iter() {
			let NamespaceKey::Path(path) = key else { continue };
			let parent = match path.rfind('.') {
				Some(idx) => NamespaceKey::Path(path[..idx].into()),
				None => NamespaceKey::Root,
			};
			let parent_entries = map.get(&parent);
			prop_assert!(parent_entries.is_some(), "missing parent of {}", key);
			if let Some(parent_entries) = parent_entries {
				for type_key in entries.keys() {
					prop_assert!(parent_entries.contains_key(type_key));
				}
			}
		}
	}
}
