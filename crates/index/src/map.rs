use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::name::{NamespaceKey, TypeIdentity, TypeKey};

/// Types registered under one namespace, in first-registration order.
pub type TypeEntries = IndexMap<TypeKey, TypeIdentity, FxBuildHasher>;

/// Namespace key to the types registered under it.
///
/// Built wholesale by [`crate::NamespaceIndexer`] and never mutated after
/// publication. Equality ignores ordering: two maps are equal when they hold
/// the same keys with the same entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMap {
	namespaces: IndexMap<NamespaceKey, TypeEntries, FxBuildHasher>,
}

impl Default for NamespaceMap {
	fn default() -> Self {
		Self::new()
	}
}

impl NamespaceMap {
	/// Creates a map holding only the (empty) root namespace.
	pub fn new() -> Self {
		let mut namespaces = IndexMap::default();
		namespaces.insert(NamespaceKey::Root, TypeEntries::default());
		Self { namespaces }
	}

	/// Registers `identity` under `namespace`. Re-registering keeps the first position.
	pub(crate) fn register(&mut self, namespace: NamespaceKey, identity: &TypeIdentity) {
		self.namespaces
			.entry(namespace)
			.or_default()
			.entry(identity.key())
			.or_insert_with(|| identity.clone());
	}

	/// Returns all namespace keys, root first.
	pub fn keys(&self) -> impl Iterator<Item = &NamespaceKey> + '_ {
		self.namespaces.keys()
	}

	#[inline]
	pub fn get(&self, namespace: &NamespaceKey) -> Option<&TypeEntries> {
		self.namespaces.get(namespace)
	}

	#[inline]
	pub fn contains(&self, namespace: &NamespaceKey) -> bool {
		self.namespaces.contains_key(namespace)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&NamespaceKey, &TypeEntries)> + '_ {
		self.namespaces.iter()
	}

	/// Returns the number of namespace keys, root included.
	#[inline]
	pub fn namespace_count(&self) -> usize {
		self.namespaces.len()
	}

	/// Returns the number of distinct types. Every type is registered under root.
	pub fn type_count(&self) -> usize {
		self.get(&NamespaceKey::Root).map_or(0, |entries| entries.len())
	}
}
