//! Type registry with atomic snapshot publication.
//!
//! # Role
//!
//! [`TypeRegistry`] owns the current [`NamespaceMap`] and answers namespace
//! and relationship queries against it.
//!
//! # Invariants
//!
//! - Readers load the snapshot once per query and never see a half-built map.
//! - A refresh either publishes a complete new snapshot or leaves the previous
//!   one authoritative.
//! - An empty namespace argument means root, never "all namespaces".

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, trace};
use typefinder_index::{NamespaceIndexer, NamespaceKey, NamespaceMap, QualifiedName, TypeIdentity};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::hierarchy::Hierarchy;
use crate::universe::{TypeLoader, TypeResolver, TypeUniverse};

/// One published namespace map.
struct Snapshot {
	generation: u64,
	map: Arc<NamespaceMap>,
}

/// Builder for [`TypeRegistry`].
pub struct TypeRegistryBuilder {
	universe: Arc<dyn TypeUniverse>,
	resolver: Arc<dyn TypeResolver>,
	loader: Option<Arc<dyn TypeLoader>>,
	config: RegistryConfig,
}

impl TypeRegistryBuilder {
	/// Sets the collaborator used by [`TypeRegistry::load_from`].
	pub fn loader(mut self, loader: Arc<dyn TypeLoader>) -> Self {
		self.loader = Some(loader);
		self
	}

	pub fn config(mut self, config: RegistryConfig) -> Self {
		self.config = config;
		self
	}

	/// Validates the config, lists the universe and publishes the first snapshot.
	pub fn build(self) -> Result<TypeRegistry> {
		self.config.validate()?;
		let indexer = NamespaceIndexer::new(self.config.index.clone());
		let names = self.universe.known_type_names()?;
		let map = indexer.index_strs(&names)?;
		debug!(
			generation = 1,
			namespaces = map.namespace_count(),
			types = map.type_count(),
			"type registry built"
		);

		Ok(TypeRegistry {
			universe: self.universe,
			resolver: self.resolver,
			loader: self.loader,
			config: self.config,
			indexer,
			snap: ArcSwap::from_pointee(Snapshot {
				generation: 1,
				map: Arc::new(map),
			}),
		})
	}
}

/// Namespace-indexed view of every type the universe knows about.
pub struct TypeRegistry {
	universe: Arc<dyn TypeUniverse>,
	resolver: Arc<dyn TypeResolver>,
	loader: Option<Arc<dyn TypeLoader>>,
	config: RegistryConfig,
	indexer: NamespaceIndexer,
	snap: ArcSwap<Snapshot>,
}

impl TypeRegistry {
	pub fn builder(universe: Arc<dyn TypeUniverse>, resolver: Arc<dyn TypeResolver>) -> TypeRegistryBuilder {
		TypeRegistryBuilder {
			universe,
			resolver,
			loader: None,
			config: RegistryConfig::default(),
		}
	}

	/// Builds a registry with the default config and no loader.
	pub fn new(universe: Arc<dyn TypeUniverse>, resolver: Arc<dyn TypeResolver>) -> Result<Self> {
		Self::builder(universe, resolver).build()
	}

	#[inline]
	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Returns how many snapshots have been published, starting at 1.
	pub fn generation(&self) -> u64 {
		self.snap.load().generation
	}

	/// Returns every namespace key, root first.
	pub fn namespaces(&self) -> Vec<NamespaceKey> {
		self.snap.load().map.keys().cloned().collect()
	}

	/// Returns the current namespace map. Later refreshes do not affect it.
	pub fn all_entries(&self) -> Arc<NamespaceMap> {
		self.snap.load().map.clone()
	}

	/// Interprets a namespace string under this registry's config.
	pub fn namespace_key(&self, namespace: &str) -> NamespaceKey {
		NamespaceKey::parse(namespace, &self.config.index)
	}

	/// Returns the types registered under `namespace`, in insertion order.
	///
	/// `""` and the root label mean root.
	pub fn types_in(&self, namespace: &str) -> Result<Vec<TypeIdentity>> {
		self.types_in_key(&self.namespace_key(namespace))
	}

	pub fn types_in_key(&self, namespace: &NamespaceKey) -> Result<Vec<TypeIdentity>> {
		let map = self.all_entries();
		let entries = map
			.get(namespace)
			.ok_or_else(|| RegistryError::NamespaceNotFound {
				namespace: namespace.label(&self.config.index.root_label).to_owned(),
			})?;
		Ok(entries.values().cloned().collect())
	}

	/// Returns the types in `namespace` that implement or extend `base`.
	///
	/// For an interface, a candidate matches when it implements `base` directly,
	/// through a parent interface, or through its supertype chain. For anything
	/// else, `base` must be a strict ancestor. `base` itself never matches.
	pub fn types_implementing(&self, base: &str, namespace: &str) -> Result<Vec<TypeIdentity>> {
		let base = self.resolver.resolve(base)?;
		let candidates = self.types_in(namespace)?;
		let hierarchy = Hierarchy::new(self.resolver.as_ref());

		let mut matches = Vec::new();
		for candidate in candidates {
			if candidate.as_str() == base.name {
				continue;
			}
			let desc = self.resolver.resolve(candidate.as_str())?;
			let hit = if base.is_interface() {
				hierarchy.implements_interface(&desc, &base.name)?
			} else {
				hierarchy.is_strict_subtype(&desc, &base.name)?
			};
			if hit {
				matches.push(candidate);
			}
		}

		trace!(base = %base.name, namespace, matches = matches.len(), "types_implementing");
		Ok(matches)
	}

	/// Returns the types in `namespace` that compose `mixin`, directly or through
	/// a supertype.
	pub fn types_composed_of(&self, mixin: &str, namespace: &str) -> Result<Vec<TypeIdentity>> {
		let mixin = self.resolver.resolve(mixin)?;
		if !mixin.is_mixin() {
			return Err(RegistryError::NotComposable {
				name: mixin.name.clone(),
			});
		}
		let candidates = self.types_in(namespace)?;
		let hierarchy = Hierarchy::new(self.resolver.as_ref());

		let mut matches = Vec::new();
		for candidate in candidates {
			let desc = self.resolver.resolve(candidate.as_str())?;
			if hierarchy.effective_mixins(&desc)?.contains(&mixin.name) {
				matches.push(candidate);
			}
		}

		trace!(mixin = %mixin.name, namespace, matches = matches.len(), "types_composed_of");
		Ok(matches)
	}

	/// Re-lists the universe and publishes a fresh snapshot.
	pub fn refresh(&self) -> Result<()> {
		let names = self.universe.known_type_names()?;
		self.refresh_with(&names)
	}

	/// Indexes `names` and publishes the result in place of the current snapshot.
	///
	/// Nothing is published if any name is malformed.
	pub fn refresh_with<I, S>(&self, names: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let map = Arc::new(self.indexer.index_strs(names)?);
		self.publish(map);
		Ok(())
	}

	/// Publishes pre-parsed names. Infallible counterpart of [`Self::refresh_with`].
	pub fn refresh_names<I>(&self, names: I)
	where
		I: IntoIterator<Item = QualifiedName>,
	{
		self.publish(Arc::new(self.indexer.index(names)));
	}

	/// Asks the loader to bring in definitions under `path_prefix`.
	///
	/// Returns how many were loaded. The snapshot only changes when
	/// [`RegistryConfig::refresh_on_load`] is set.
	pub fn load_from(&self, path_prefix: &str) -> Result<usize> {
		let loader = self.loader.as_ref().ok_or(RegistryError::LoaderUnavailable)?;
		let loaded = loader.load_from(path_prefix)?;
		debug!(path_prefix, loaded, "types loaded");
		if self.config.refresh_on_load {
			self.refresh()?;
		}
		Ok(loaded)
	}

	fn publish(&self, map: Arc<NamespaceMap>) {
		loop {
			let old = self.snap.load_full();
			let generation = old.generation + 1;
			let new_arc = Arc::new(Snapshot {
				generation,
				map: map.clone(),
			});

			let prev = self.snap.compare_and_swap(&old, new_arc);
			if Arc::ptr_eq(&prev, &old) {
				debug!(
					generation,
					namespaces = map.namespace_count(),
					types = map.type_count(),
					"namespace snapshot published"
				);
				return;
			}
			// Lost the race, renumber against the winner
		}
	}
}
