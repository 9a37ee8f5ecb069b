//! Registry configuration.
//!
//! ```toml
//! refresh_on_load = true
//!
//! [index]
//! separator = "::"
//! root_label = "global"
//! ```

use std::path::Path;

use serde::Deserialize;
use typefinder_index::IndexConfig;

use crate::error::{RegistryError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Name splitting and root labelling.
	pub index: IndexConfig,
	/// Refresh right after a successful [`crate::TypeRegistry::load_from`].
	///
	/// Off by default: loading only makes types visible to the universe, and
	/// the caller decides when to re-index.
	pub refresh_on_load: bool,
}

impl RegistryConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: Self = toml::from_str(content).map_err(|err| RegistryError::Config(err.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.map_err(|err| RegistryError::Config(format!("{}: {err}", path.display())))?;
		Self::from_toml_str(&content)
	}

	pub fn validate(&self) -> Result<()> {
		self.index.validate()?;
		Ok(())
	}
}
