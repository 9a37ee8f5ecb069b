//! Flat name list to [`NamespaceMap`].

use tracing::trace;

use crate::config::IndexConfig;
use crate::map::NamespaceMap;
use crate::name::{NameError, NamespaceKey, QualifiedName, TypeIdentity};

/// Builds namespace maps with transitive ancestor registration.
#[derive(Debug, Clone, Default)]
pub struct NamespaceIndexer {
	config: IndexConfig,
}

impl NamespaceIndexer {
	pub fn new(config: IndexConfig) -> Self {
		Self { config }
	}

	#[inline]
	pub fn config(&self) -> &IndexConfig {
		&self.config
	}

	/// Parses `raw` with this indexer's separator.
	pub fn parse_name(&self, raw: &str) -> Result<QualifiedName, NameError> {
		QualifiedName::parse(raw, &self.config.separator)
	}

	/// Indexes already-parsed names. Never fails; empty input yields a map with
	/// only the root key.
	pub fn index<I>(&self, names: I) -> NamespaceMap
	where
		I: IntoIterator<Item = QualifiedName>,
	{
		let mut map = NamespaceMap::new();
		for name in names {
			register_ancestors(&mut map, &TypeIdentity::new(name));
		}
		trace!(
			namespaces = map.namespace_count(),
			types = map.type_count(),
			"namespace map built"
		);
		map
	}

	/// Parses then indexes `names`. The first malformed name aborts the pass.
	pub fn index_strs<I, S>(&self, names: I) -> Result<NamespaceMap, NameError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let parsed = names
			.into_iter()
			.map(|raw| self.parse_name(raw.as_ref()))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(self.index(parsed))
	}
}

/// Registers `identity` under each strict prefix of its name, deepest first,
/// the empty prefix landing on root.
fn register_ancestors(map: &mut NamespaceMap, identity: &TypeIdentity) {
	let name = identity.name();
	if name.is_empty() {
		map.register(NamespaceKey::Root, identity);
		return;
	}

	for depth in (0..name.len()).rev() {
		let namespace = match name.prefix(depth) {
			Some(prefix) => NamespaceKey::Path(Box::from(prefix)),
			None => NamespaceKey::Root,
		};
		map.register(namespace, identity);
	}
}

#[cfg(test)]
mod tests;
