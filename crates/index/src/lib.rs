//! Namespace indexing for fully-qualified type names.
//!
//! This crate provides the leaf data model of the type finder:
//! - [`QualifiedName`]: A parsed, segmented type name
//! - [`TypeKey`]: Stable digest of a qualified name, used as a map key
//! - [`TypeIdentity`]: Name plus key, cheap to clone
//! - [`NamespaceKey`]: Root or a namespace prefix
//! - [`NamespaceMap`]: Namespace to types, with transitive registration
//! - [`NamespaceIndexer`]: Builds a [`NamespaceMap`] from a flat name list
//!
//! # Invariants
//!
//! - A type with `k` segments is registered under exactly `k` namespace keys:
//!   every strict prefix of its name, with the empty prefix folded into
//!   [`NamespaceKey::Root`].
//! - [`NamespaceKey::Root`] is present in every map produced by the indexer,
//!   even for empty input.

mod config;
mod indexer;
mod map;
mod name;

pub use config::{ConfigError, DEFAULT_ROOT_LABEL, DEFAULT_SEPARATOR, IndexConfig};
pub use indexer::NamespaceIndexer;
pub use map::{NamespaceMap, TypeEntries};
pub use name::{NameError, NamespaceKey, QualifiedName, TypeIdentity, TypeKey};
