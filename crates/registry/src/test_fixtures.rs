use std::sync::Arc;

use crate::{Catalog, TypeDescriptor, TypeRegistry};

pub(crate) const ARRAYABLE: &str = "contracts.Arrayable";
pub(crate) const JSONABLE: &str = "contracts.Jsonable";
pub(crate) const COUNTABLE: &str = "contracts.Countable";
pub(crate) const HAS_TIMESTAMPS: &str = "concerns.HasTimestamps";
pub(crate) const SOFT_DELETES: &str = "concerns.SoftDeletes";
pub(crate) const MACROABLE: &str = "concerns.Macroable";
pub(crate) const MODEL: &str = "app.Model";
pub(crate) const USER: &str = "app.models.User";
pub(crate) const ADMIN: &str = "app.models.Admin";
pub(crate) const POST: &str = "app.models.Post";
pub(crate) const COLLECTION: &str = "app.support.Collection";
pub(crate) const HELPER: &str = "Helper";

/// A small application model layer:
///
/// - `Jsonable` extends `Arrayable`
/// - `Model` is abstract, implements `Jsonable`, composes `HasTimestamps`
/// - `User` extends `Model` and composes `SoftDeletes`; `Admin` extends `User`
/// - `Post` extends `Model`
/// - `Collection` implements `Countable` and composes `Macroable`
pub(crate) fn app_catalog() -> Arc<Catalog> {
	Arc::new(Catalog::from_iter([
		TypeDescriptor::interface(ARRAYABLE),
		TypeDescriptor::interface(JSONABLE).implements([ARRAYABLE]),
		TypeDescriptor::interface(COUNTABLE),
		TypeDescriptor::mixin(HAS_TIMESTAMPS),
		TypeDescriptor::mixin(SOFT_DELETES),
		TypeDescriptor::mixin(MACROABLE),
		TypeDescriptor::abstract_class(MODEL)
			.implements([JSONABLE])
			.uses([HAS_TIMESTAMPS]),
		TypeDescriptor::class(USER).extends(MODEL).uses([SOFT_DELETES]),
		TypeDescriptor::class(ADMIN).extends(USER),
		TypeDescriptor::class(POST).extends(MODEL),
		TypeDescriptor::class(COLLECTION)
			.implements([COUNTABLE])
			.uses([MACROABLE]),
		TypeDescriptor::class(HELPER),
	]))
}

pub(crate) fn app_registry() -> (Arc<Catalog>, TypeRegistry) {
	let catalog = app_catalog();
	let registry = TypeRegistry::builder(catalog.clone(), catalog.clone())
		.loader(catalog.clone())
		.build()
		.expect("fixture registry builds");
	(catalog, registry)
}

pub(crate) fn names(types: &[crate::TypeIdentity]) -> Vec<&str> {
	types.iter().map(|t| t.as_str()).collect()
}
