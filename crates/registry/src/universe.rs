//! Collaborator seams: where type names, definitions and descriptors come from.
//!
//! The registry never discovers types itself. The host implements these
//! traits, backed by whatever makes types known in its environment: a
//! compile-time registry ([`crate::InventoryUniverse`]), a plugin loader, or a
//! hand-maintained list ([`crate::Catalog`]).

use std::sync::Arc;

use crate::descriptor::TypeDescriptor;
use crate::error::Result;

/// Lists the fully-qualified names of every type currently known.
pub trait TypeUniverse: Send + Sync {
	fn known_type_names(&self) -> Result<Vec<String>>;
}

/// Makes additional type definitions known to the [`TypeUniverse`].
///
/// Loading does not touch any registry; callers refresh afterwards.
pub trait TypeLoader: Send + Sync {
	/// Loads definitions whose source path matches `path_prefix`.
	///
	/// Returns how many were loaded; zero matches is `Ok(0)`. Fails with
	/// [`crate::RegistryError::LoaderUnavailable`] when no loading mechanism
	/// exists.
	fn load_from(&self, path_prefix: &str) -> Result<usize>;
}

/// Resolves a qualified name to its structural descriptor.
pub trait TypeResolver: Send + Sync {
	/// Fails with [`crate::RegistryError::TypeNotFound`] for unknown names.
	fn resolve(&self, name: &str) -> Result<Arc<TypeDescriptor>>;
}

impl TypeUniverse for Vec<String> {
	fn known_type_names(&self) -> Result<Vec<String>> {
		Ok(self.clone())
	}
}
