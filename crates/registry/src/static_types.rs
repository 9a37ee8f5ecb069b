//! Compile-time type universe collected with `inventory`.
//!
//! Crates describe their types with [`crate::register_type!`]; every
//! definition linked into the binary is visible to
//! [`InventoryUniverse::collect`]. Nothing is ever loaded later, so there is no
//! [`crate::TypeLoader`] for this universe.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::warn;

use crate::descriptor::{TypeDescriptor, TypeKind};
use crate::error::{RegistryError, Result};
use crate::universe::{TypeResolver, TypeUniverse};

/// Static form of a [`TypeDescriptor`], submitted through [`crate::register_type!`].
#[derive(Debug, Clone, Copy)]
pub struct StaticTypeDef {
	pub name: &'static str,
	pub kind: TypeKind,
	pub is_abstract: bool,
	pub supertype: Option<&'static str>,
	pub interfaces: &'static [&'static str],
	pub mixins: &'static [&'static str],
}

inventory::collect!(StaticTypeDef);

impl StaticTypeDef {
	pub const fn new(name: &'static str, kind: TypeKind) -> Self {
		Self {
			name,
			kind,
			is_abstract: false,
			supertype: None,
			interfaces: &[],
			mixins: &[],
		}
	}

	pub const fn class(name: &'static str) -> Self {
		Self::new(name, TypeKind::Class)
	}

	pub const fn abstract_class(name: &'static str) -> Self {
		Self {
			is_abstract: true,
			..Self::new(name, TypeKind::Class)
		}
	}

	pub const fn interface(name: &'static str) -> Self {
		Self::new(name, TypeKind::Interface)
	}

	pub const fn mixin(name: &'static str) -> Self {
		Self::new(name, TypeKind::Mixin)
	}

	pub const fn extends(self, supertype: &'static str) -> Self {
		Self {
			supertype: Some(supertype),
			..self
		}
	}

	pub const fn implements(self, interfaces: &'static [&'static str]) -> Self {
		Self { interfaces, ..self }
	}

	pub const fn uses(self, mixins: &'static [&'static str]) -> Self {
		Self { mixins, ..self }
	}

	fn to_descriptor(self) -> TypeDescriptor {
		TypeDescriptor {
			name: self.name.to_owned(),
			kind: self.kind,
			is_abstract: self.is_abstract,
			supertype: self.supertype.map(str::to_owned),
			interfaces: self.interfaces.iter().map(|&s| s.to_owned()).collect(),
			mixins: self.mixins.iter().map(|&s| s.to_owned()).collect(),
		}
	}
}

/// Registers one or more [`StaticTypeDef`]s with the compile-time universe.
///
/// ```ignore
/// register_type!(
///     StaticTypeDef::interface("app.Jsonable"),
///     StaticTypeDef::class("app.User").implements(&["app.Jsonable"]),
/// );
/// ```
#[macro_export]
macro_rules! register_type {
	($($def:expr),+ $(,)?) => {
		$(
			$crate::__inventory::submit! { $def }
		)+
	};
}

/// Universe and resolver over every linked [`StaticTypeDef`], sorted by name.
pub struct InventoryUniverse {
	types: IndexMap<&'static str, Arc<TypeDescriptor>, FxBuildHasher>,
}

impl InventoryUniverse {
	/// Gathers all submitted definitions. The first definition of a name wins.
	pub fn collect() -> Self {
		let mut defs: Vec<&'static StaticTypeDef> = Vec::new();
		for def in inventory::iter::<StaticTypeDef> {
			defs.push(def);
		}
		defs.sort_by_key(|def| def.name);

		let mut types = IndexMap::with_capacity_and_hasher(defs.len(), FxBuildHasher);
		for def in defs {
			if types.contains_key(def.name) {
				warn!(type_name = def.name, "duplicate static type definition ignored");
				continue;
			}
			types.insert(def.name, Arc::new(def.to_descriptor()));
		}
		Self { types }
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl TypeUniverse for InventoryUniverse {
	fn known_type_names(&self) -> Result<Vec<String>> {
		Ok(self.types.keys().map(|&name| name.to_owned()).collect())
	}
}

impl TypeResolver for InventoryUniverse {
	fn resolve(&self, name: &str) -> Result<Arc<TypeDescriptor>> {
		self.types
			.get(name)
			.cloned()
			.ok_or_else(|| RegistryError::TypeNotFound {
				name: name.to_owned(),
			})
	}
}
