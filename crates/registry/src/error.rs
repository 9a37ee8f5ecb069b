use thiserror::Error;
use typefinder_index::{ConfigError, NameError};

/// Errors surfaced by registry queries, refreshes and collaborators.
///
/// Nothing is retried and nothing falls back: an unknown namespace is never
/// silently replaced by the root, and a failed refresh leaves the previous
/// snapshot in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// Query against a namespace key with no entry.
	#[error("the namespace '{namespace}' was not found")]
	NamespaceNotFound { namespace: String },
	/// A base type, mixin or candidate could not be resolved.
	#[error("the type '{name}' could not be resolved")]
	TypeNotFound { name: String },
	/// A type used as a mixin is not a composable unit.
	#[error("the type '{name}' is not a composable mixin")]
	NotComposable { name: String },
	/// No loading mechanism is registered.
	#[error("no type loader is available")]
	LoaderUnavailable,
	/// The universe reported a malformed qualified name.
	#[error(transparent)]
	InvalidName(#[from] NameError),
	#[error("invalid configuration: {0}")]
	Config(String),
	/// The type universe failed to list its names.
	#[error("type universe failed: {0}")]
	Universe(String),
}

impl From<ConfigError> for RegistryError {
	fn from(err: ConfigError) -> Self {
		Self::Config(err.to_string())
	}
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
