//! Supertype and interface traversal over resolved descriptors.
//!
//! # Role
//!
//! Both relationship filters of [`crate::TypeRegistry`] are built on the walks
//! here. Every walk is an explicit loop guarded by a visited set, so malformed
//! descriptor data (a type that is its own ancestor) terminates instead of
//! spinning.
//!
//! # Invariants
//!
//! - A supertype chain starts with the type itself and never repeats a name.
//! - Resolution errors surface from the walk that hit them.
//! - Interface graphs may share parents (diamonds); repeats are skipped
//!   silently. Only supertype cycles are logged.

use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashSet};
use tracing::warn;

use crate::descriptor::TypeDescriptor;
use crate::error::Result;
use crate::universe::TypeResolver;

/// Mixin names in the order they were first seen along a supertype chain.
pub type MixinSet = IndexSet<String, FxBuildHasher>;

/// Relationship walks backed by a [`TypeResolver`].
pub struct Hierarchy<'r> {
	resolver: &'r dyn TypeResolver,
}

impl<'r> Hierarchy<'r> {
	pub fn new(resolver: &'r dyn TypeResolver) -> Self {
		Self { resolver }
	}

	/// Returns `desc` followed by each resolved supertype up to the top of the chain.
	pub fn supertype_chain(&self, desc: &Arc<TypeDescriptor>) -> Result<Vec<Arc<TypeDescriptor>>> {
		let mut visited = FxHashSet::default();
		visited.insert(desc.name.clone());

		let mut chain = vec![desc.clone()];
		let mut next = desc.supertype.clone();
		while let Some(parent) = next {
			if !visited.insert(parent.clone()) {
				warn!(type_name = %desc.name, supertype = %parent, "supertype cycle detected, stopping walk");
				break;
			}
			let resolved = self.resolver.resolve(&parent)?;
			next = resolved.supertype.clone();
			chain.push(resolved);
		}
		Ok(chain)
	}

	/// Returns true when `desc`, a parent interface, or any supertype implements `interface`.
	///
	/// A type does not implement itself. The walk goes one interface level at a
	/// time: every name on a level is compared before any of them is resolved,
	/// and the whole level is resolved before the next, so the outcome does not
	/// depend on declaration order.
	pub fn implements_interface(&self, desc: &Arc<TypeDescriptor>, interface: &str) -> Result<bool> {
		let chain = self.supertype_chain(desc)?;

		let mut seen = FxHashSet::default();
		let mut level: Vec<String> = chain
			.iter()
			.flat_map(|ty| ty.interfaces.iter().cloned())
			.collect();

		while !level.is_empty() {
			if level.iter().any(|name| name == interface) {
				return Ok(true);
			}
			let mut next = Vec::new();
			for name in level {
				if !seen.insert(name.clone()) {
					continue;
				}
				let parent = self.resolver.resolve(&name)?;
				next.extend(parent.interfaces.iter().cloned());
			}
			level = next;
		}
		Ok(false)
	}

	/// Returns true when `base` is a strict ancestor of `desc`.
	pub fn is_strict_subtype(&self, desc: &Arc<TypeDescriptor>, base: &str) -> Result<bool> {
		if desc.name == base {
			return Ok(false);
		}
		let chain = self.supertype_chain(desc)?;
		Ok(chain.iter().skip(1).any(|level| level.name == base))
	}

	/// Returns the union of directly composed mixins along the supertype chain.
	///
	/// Composition is not inherited by the host, so each level contributes its
	/// own list.
	pub fn effective_mixins(&self, desc: &Arc<TypeDescriptor>) -> Result<MixinSet> {
		let chain = self.supertype_chain(desc)?;
		Ok(chain
			.iter()
			.flat_map(|level| level.mixins.iter().cloned())
			.collect())
	}
}
