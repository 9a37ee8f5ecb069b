use serde::Deserialize;

/// Separator used between namespace segments unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Label reported for the root namespace unless configured otherwise.
pub const DEFAULT_ROOT_LABEL: &str = "global";

/// Invalid [`IndexConfig`] values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("namespace separator must not be empty")]
	EmptySeparator,
	#[error("root namespace label must not be empty")]
	EmptyRootLabel,
}

/// How qualified names are split and how the root namespace is labelled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
	/// Segment separator (e.g. `"."`, `"::"`, `"\\"`).
	pub separator: String,
	/// Name under which the empty prefix is reported and queried.
	pub root_label: String,
}

impl Default for IndexConfig {
	fn default() -> Self {
		Self {
			separator: DEFAULT_SEPARATOR.to_owned(),
			root_label: DEFAULT_ROOT_LABEL.to_owned(),
		}
	}
}

impl IndexConfig {
	/// Returns the default config with a different separator.
	pub fn with_separator(separator: impl Into<String>) -> Self {
		Self {
			separator: separator.into(),
			..Self::default()
		}
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.separator.is_empty() {
			return Err(ConfigError::EmptySeparator);
		}
		if self.root_label.trim().is_empty() {
			return Err(ConfigError::EmptyRootLabel);
		}
		Ok(())
	}
}
