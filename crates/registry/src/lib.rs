//! Namespace-indexed type registry.
//!
//! # Purpose
//!
//! Indexes every type a host reports as known, grouped by hierarchical
//! namespace, and filters those types by structural relationship: subtypes of
//! a base class, implementors of an interface, or types composing a mixin.
//!
//! # Mental Model
//!
//! 1. **Collaborators:** The host supplies a [`TypeUniverse`] (which names are
//!    known), a [`TypeResolver`] (what each name looks like), and optionally a
//!    [`TypeLoader`] (how more definitions become known).
//! 2. **Indexing:** [`NamespaceIndexer`] turns the flat name list into a
//!    [`NamespaceMap`], registering each type under every ancestor namespace.
//! 3. **Publication:** [`TypeRegistry`] holds the map in an atomic snapshot;
//!    [`TypeRegistry::refresh`] rebuilds it off to the side and swaps it in.
//! 4. **Queries:** Namespace lookups read the snapshot; relationship filters
//!    walk descriptors through [`Hierarchy`].
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`TypeRegistry`] | Snapshot owner and query surface. |
//! | [`TypeDescriptor`] | Kind, supertype, interfaces and mixins of one type. |
//! | [`Hierarchy`] | Cycle-guarded supertype and interface walks. |
//! | [`Catalog`] | In-memory universe, resolver and loader. |
//! | [`InventoryUniverse`] | Universe and resolver over [`register_type!`] definitions. |

mod catalog;
mod config;
mod descriptor;
mod error;
mod hierarchy;
mod registry;
#[cfg(feature = "inventory")]
mod static_types;
mod universe;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use catalog::Catalog;
pub use config::RegistryConfig;
pub use descriptor::{TypeDescriptor, TypeKind};
pub use error::{RegistryError, Result};
pub use hierarchy::{Hierarchy, MixinSet};
pub use registry::{TypeRegistry, TypeRegistryBuilder};
#[cfg(feature = "inventory")]
pub use static_types::{InventoryUniverse, StaticTypeDef};
pub use typefinder_index::{
	IndexConfig, NameError, NamespaceIndexer, NamespaceKey, NamespaceMap, QualifiedName,
	TypeEntries, TypeIdentity, TypeKey,
};
pub use universe::{TypeLoader, TypeResolver, TypeUniverse};

#[cfg(feature = "inventory")]
#[doc(hidden)]
pub use ::inventory as __inventory;
