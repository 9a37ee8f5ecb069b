//! In-memory collaborator with staged loading.
//!
//! A [`Catalog`] is a hand-maintained type universe. Types added with
//! [`Catalog::define`] are known immediately. Types added with
//! [`Catalog::stage`] sit behind a source path and only become known (and
//! resolvable) once a [`TypeLoader::load_from`] call with a matching path
//! prefix brings them in. [`Catalog::remove`] unloads a type again.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;
use tracing::debug;

use crate::descriptor::TypeDescriptor;
use crate::error::{RegistryError, Result};
use crate::universe::{TypeLoader, TypeResolver, TypeUniverse};

struct StagedType {
	path: String,
	descriptor: TypeDescriptor,
}

#[derive(Default)]
struct CatalogState {
	loaded: IndexMap<String, Arc<TypeDescriptor>, FxBuildHasher>,
	staged: Vec<StagedType>,
}

/// Thread-safe, hand-maintained type universe, resolver and loader.
#[derive(Default)]
pub struct Catalog {
	state: RwLock<CatalogState>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes `descriptor` known now, replacing any loaded type of the same name.
	pub fn define(&self, descriptor: TypeDescriptor) {
		let mut state = self.state.write();
		state
			.loaded
			.insert(descriptor.name.clone(), Arc::new(descriptor));
	}

	/// Records `descriptor` under `path`; it stays unknown until loaded.
	pub fn stage(&self, path: impl Into<String>, descriptor: TypeDescriptor) {
		self.state.write().staged.push(StagedType {
			path: path.into(),
			descriptor,
		});
	}

	/// Unloads a type. Later universe listings no longer report it.
	pub fn remove(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
		self.state.write().loaded.shift_remove(name)
	}

	/// Returns the number of types known now.
	pub fn len(&self) -> usize {
		self.state.read().loaded.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of definitions waiting to be loaded.
	pub fn staged_len(&self) -> usize {
		self.state.read().staged.len()
	}
}

impl FromIterator<TypeDescriptor> for Catalog {
	fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
		let catalog = Self::new();
		for descriptor in iter {
			catalog.define(descriptor);
		}
		catalog
	}
}

impl TypeUniverse for Catalog {
	fn known_type_names(&self) -> Result<Vec<String>> {
		Ok(self.state.read().loaded.keys().cloned().collect())
	}
}

impl TypeResolver for Catalog {
	fn resolve(&self, name: &str) -> Result<Arc<TypeDescriptor>> {
		self.state
			.read()
			.loaded
			.get(name)
			.cloned()
			.ok_or_else(|| RegistryError::TypeNotFound {
				name: name.to_owned(),
			})
	}
}

impl TypeLoader for Catalog {
	fn load_from(&self, path_prefix: &str) -> Result<usize> {
		let mut state = self.state.write();
		let (matched, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut state.staged)
			.into_iter()
			.partition(|staged| staged.path.starts_with(path_prefix));
		state.staged = rest;

		let loaded = matched.len();
		for staged in matched {
			let descriptor = staged.descriptor;
			state
				.loaded
				.insert(descriptor.name.clone(), Arc::new(descriptor));
		}
		debug!(path_prefix, loaded, remaining = state.staged.len(), "catalog load");
		Ok(loaded)
	}
}
