//! Integration tests for the compile-time type universe.
//!
//! Definitions submitted with `register_type!` anywhere in the test binary are
//! collected by `InventoryUniverse::collect`.

use std::sync::Arc;

use typefinder_registry::{
	InventoryUniverse, NamespaceKey, RegistryError, StaticTypeDef, TypeKind, TypeRegistry,
	TypeResolver, register_type,
};

register_type!(
	StaticTypeDef::interface("shop.contracts.Priced"),
	StaticTypeDef::mixin("shop.concerns.Discountable"),
	StaticTypeDef::abstract_class("shop.catalog.Product")
		.implements(&["shop.contracts.Priced"])
		.uses(&["shop.concerns.Discountable"]),
	StaticTypeDef::class("shop.catalog.Book").extends("shop.catalog.Product"),
	StaticTypeDef::class("shop.catalog.digital.Ebook").extends("shop.catalog.Book"),
	StaticTypeDef::class("shop.checkout.Cart"),
);

mod plugins {
	use typefinder_registry::{StaticTypeDef, register_type};

	register_type!(StaticTypeDef::class("shop.catalog.GiftCard").implements(&["shop.contracts.Priced"]));
}

fn registry() -> (Arc<InventoryUniverse>, TypeRegistry) {
	let universe = Arc::new(InventoryUniverse::collect());
	let registry = TypeRegistry::new(universe.clone(), universe.clone()).unwrap();
	(universe, registry)
}

fn names(registry: &TypeRegistry, namespace: &str) -> Vec<String> {
	registry
		.types_in(namespace)
		.unwrap()
		.iter()
		.map(|t| t.as_str().to_owned())
		.collect()
}

#[test]
fn collects_definitions_from_every_module() {
	let universe = InventoryUniverse::collect();
	assert_eq!(universe.len(), 7);

	let gift_card = universe.resolve("shop.catalog.GiftCard").unwrap();
	assert_eq!(gift_card.kind, TypeKind::Class);
	assert_eq!(gift_card.interfaces, ["shop.contracts.Priced"]);

	let product = universe.resolve("shop.catalog.Product").unwrap();
	assert!(product.is_abstract);
}

#[test]
fn namespaces_are_sorted_by_type_name() {
	let (_, registry) = registry();
	assert_eq!(
		names(&registry, "shop.catalog"),
		[
			"shop.catalog.Book",
			"shop.catalog.GiftCard",
			"shop.catalog.Product",
			"shop.catalog.digital.Ebook",
		]
	);
	assert!(registry.namespaces().contains(&NamespaceKey::Path("shop.catalog.digital".into())));
}

#[test]
fn relationship_queries_over_static_types() {
	let (_, registry) = registry();

	let priced: Vec<_> = registry
		.types_implementing("shop.contracts.Priced", "shop")
		.unwrap()
		.iter()
		.map(|t| t.to_string())
		.collect();
	assert_eq!(
		priced,
		[
			"shop.catalog.Book",
			"shop.catalog.GiftCard",
			"shop.catalog.Product",
			"shop.catalog.digital.Ebook",
		]
	);

	let discountable: Vec<_> = registry
		.types_composed_of("shop.concerns.Discountable", "shop.catalog")
		.unwrap()
		.iter()
		.map(|t| t.to_string())
		.collect();
	assert_eq!(
		discountable,
		["shop.catalog.Book", "shop.catalog.Product", "shop.catalog.digital.Ebook"]
	);
}

#[test]
fn static_universe_has_no_loader() {
	let (_, registry) = registry();
	assert_eq!(registry.load_from("shop/").unwrap_err(), RegistryError::LoaderUnavailable);
}
